//! Caption overlay compositing.
//!
//! Single-threaded by design: one base video, one timeline, one composited
//! output. All drawtext layers are applied in a single FFmpeg invocation,
//! so the output duration is the base video's duration regardless of how
//! much of it the captions cover.

use std::path::{Path, PathBuf};
use tracing::info;

use storyreel_models::{CaptionStyle, CaptionTimeline, EncodingConfig};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::filters::caption_filter_chain;

/// Derive the captioned output path from the base video's file name.
pub fn captioned_output_path(output_dir: impl AsRef<Path>, base_video: impl AsRef<Path>) -> PathBuf {
    let name = base_video
        .as_ref()
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "captioned.mp4".into());
    output_dir.as_ref().join(name)
}

/// Composite per-word caption overlays onto a base video.
///
/// One drawtext layer per timeline word, stacked over the base video in
/// timeline order. Words with overlapping intervals both render; the
/// later layer draws on top.
pub async fn overlay_captions(
    base_video: impl AsRef<Path>,
    timeline: &CaptionTimeline,
    style: &CaptionStyle,
    encoding: &EncodingConfig,
    output: impl AsRef<Path>,
) -> MediaResult<PathBuf> {
    let base_video = base_video.as_ref();
    let output = output.as_ref();

    if !base_video.exists() {
        return Err(MediaError::FileNotFound(base_video.to_path_buf()));
    }

    info!(
        "Overlaying {} caption words onto {} -> {}",
        timeline.len(),
        base_video.display(),
        output.display()
    );

    if let Some(parent) = output.parent() {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let cmd = FfmpegCommand::new(base_video, output)
        .video_filter(caption_filter_chain(timeline, style))
        .encoding(encoding);

    FfmpegRunner::new().run(&cmd).await?;

    info!("Captioned video written: {}", output.display());
    Ok(output.to_path_buf())
}
