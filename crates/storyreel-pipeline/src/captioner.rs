//! Caption-overlay stage: load the timing document, composite, write.

use std::path::{Path, PathBuf};
use tracing::info;

use storyreel_media::{captioned_output_path, overlay_captions};
use storyreel_models::CaptionTimeline;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};

/// Composite word captions onto one rendered segment.
///
/// The timing document is a JSON file from the transcription service
/// (`{"words": [{word, start, end}, ...]}`). The final file lands in the
/// configured output directory under the segment's own name.
pub async fn caption_segment(
    segment: impl AsRef<Path>,
    caption_doc: impl AsRef<Path>,
    config: &PipelineConfig,
) -> PipelineResult<PathBuf> {
    let segment = segment.as_ref();
    let caption_doc = caption_doc.as_ref();

    if !segment.exists() {
        return Err(PipelineError::FileNotFound(segment.to_path_buf()));
    }
    if !caption_doc.exists() {
        return Err(PipelineError::FileNotFound(caption_doc.to_path_buf()));
    }

    let json = tokio::fs::read_to_string(caption_doc).await?;
    let timeline = CaptionTimeline::from_json(&json)?;
    info!(
        "Loaded {} caption words from {}",
        timeline.len(),
        caption_doc.display()
    );

    let output = captioned_output_path(&config.output_dir, segment);
    overlay_captions(
        segment,
        &timeline,
        &config.caption_style,
        &config.final_encoding,
        &output,
    )
    .await?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storyreel_models::TimelineError;

    #[tokio::test]
    async fn test_missing_segment_fails() {
        let err = caption_segment(
            "/nonexistent/segment.mp4",
            "/nonexistent/captions.json",
            &PipelineConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, PipelineError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_caption_doc_fails() {
        let dir = tempfile::tempdir().unwrap();
        let segment = dir.path().join("segment_0_45.mp4");
        std::fs::File::create(&segment).unwrap();

        let err = caption_segment(
            &segment,
            dir.path().join("captions.json"),
            &PipelineConfig::default(),
        )
        .await
        .unwrap_err();
        match err {
            PipelineError::FileNotFound(path) => {
                assert!(path.ends_with("captions.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_timeline_rejected_before_compositing() {
        let dir = tempfile::tempdir().unwrap();
        let segment = dir.path().join("segment_0_45.mp4");
        std::fs::File::create(&segment).unwrap();

        let doc = dir.path().join("captions.json");
        let mut f = std::fs::File::create(&doc).unwrap();
        f.write_all(br#"{"words": []}"#).unwrap();

        let err = caption_segment(&segment, &doc, &PipelineConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Timeline(TimelineError::Empty)
        ));
    }
}
