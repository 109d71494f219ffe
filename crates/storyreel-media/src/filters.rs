//! FFmpeg video filter construction.
//!
//! Two filter families: the `scale`+`crop` chain that reframes a segment
//! per a resolved [`CropPlan`], and the `drawtext` layers that render one
//! caption word each.

use storyreel_models::{CaptionStyle, CaptionTimeline, CaptionWord, CropPlan};

/// Build the reframing filter for a crop plan.
///
/// The `scale` step preserves the source aspect ratio (the plan guarantees
/// it) and the `crop` step cuts the centered target-sized window.
pub fn reframe_filter(plan: &CropPlan) -> String {
    format!(
        "scale={}:{},crop={}:{}:{}:{}",
        plan.resize_to.width,
        plan.resize_to.height,
        plan.crop.width(),
        plan.crop.height(),
        plan.crop.x1,
        plan.crop.y1
    )
}

/// Build one drawtext layer for a caption word.
///
/// The word is anchored at the frame center and enabled over the
/// half-open interval `[start, end)`: `gte(t,start)*lt(t,end)` is 1
/// exactly when the word is visible, so a word ending at 2.0 is gone at
/// t=2.0 while its successor starting there is already shown.
pub fn drawtext_filter(word: &CaptionWord, style: &CaptionStyle) -> String {
    let mut parts = Vec::new();

    if let Some(font) = &style.font {
        // Quoted like the text value: font paths may contain characters
        // the filtergraph parser treats as separators.
        parts.push(format!("fontfile='{}'", escape_filter_value(font)));
    }
    parts.push(format!("fontsize={}", style.font_size));
    parts.push(format!("fontcolor={}", style.color));
    parts.push(format!("bordercolor={}", style.stroke_color));
    parts.push(format!("borderw={}", style.stroke_width));
    parts.push("x=(w-text_w)/2".to_string());
    parts.push("y=(h-text_h)/2".to_string());
    parts.push(format!("text='{}'", escape_filter_value(&word.word)));
    parts.push(format!(
        "enable='gte(t,{:.3})*lt(t,{:.3})'",
        word.start, word.end
    ));

    format!("drawtext={}", parts.join(":"))
}

/// Build the full caption filter chain for a timeline.
///
/// Layers are chained in timeline order, so a later word draws on top of
/// an earlier one when their intervals overlap.
pub fn caption_filter_chain(timeline: &CaptionTimeline, style: &CaptionStyle) -> String {
    timeline
        .words()
        .iter()
        .map(|word| drawtext_filter(word, style))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape a value for use inside a quoted filter argument.
///
/// Handles the characters the filtergraph parser and drawtext expansion
/// treat specially: backslash, single quote, and percent.
fn escape_filter_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("'\\''"),
            '%' => out.push_str("\\%"),
            _ => out.push(c),
        }
    }
    out
}
