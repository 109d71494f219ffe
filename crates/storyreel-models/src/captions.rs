//! Word-level caption timelines and overlay styling.
//!
//! The timing document comes from a word-granularity transcription service
//! (one `{word, start, end}` entry per spoken word, seconds as floats).
//! The service is authoritative: consecutive words may overlap slightly
//! and are kept in delivery order, not re-sorted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from caption timeline loading.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("caption document has no words")]
    Empty,

    #[error("word {index} ({word:?}) has invalid interval: start={start}, end={end}")]
    InvalidInterval {
        index: usize,
        word: String,
        start: f64,
        end: f64,
    },

    #[error("failed to parse caption document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One spoken word with its timing interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionWord {
    /// Rendered text
    pub word: String,
    /// Visible from this time (seconds, inclusive)
    pub start: f64,
    /// Hidden from this time (seconds, exclusive)
    pub end: f64,
}

/// Raw caption document as emitted by the transcription service.
///
/// Extra fields (full text, language, segment timings) are ignored; only
/// the word-level entries matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionDocument {
    #[serde(default)]
    pub words: Vec<CaptionWord>,
}

/// Validated, ordered sequence of caption words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionTimeline {
    words: Vec<CaptionWord>,
}

impl CaptionTimeline {
    /// Validate a caption document into a timeline.
    ///
    /// Fails when the word list is absent or empty, or when any entry has
    /// `end <= start`. The error carries the offending word index so the
    /// caller can correlate it to the source document.
    pub fn from_document(doc: CaptionDocument) -> Result<Self, TimelineError> {
        if doc.words.is_empty() {
            return Err(TimelineError::Empty);
        }

        for (index, entry) in doc.words.iter().enumerate() {
            if entry.end <= entry.start {
                return Err(TimelineError::InvalidInterval {
                    index,
                    word: entry.word.clone(),
                    start: entry.start,
                    end: entry.end,
                });
            }
        }

        Ok(Self { words: doc.words })
    }

    /// Parse and validate a caption document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        let doc: CaptionDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Words in timeline order.
    pub fn words(&self) -> &[CaptionWord] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A validated timeline is never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// End time of the last word (the timeline may end before the video).
    pub fn end(&self) -> f64 {
        self.words
            .iter()
            .map(|w| w.end)
            .fold(0.0, f64::max)
    }
}

/// Caption overlay styling.
///
/// Label-only rendering: filled text with an outline, no background box,
/// anchored at the frame center. Each field is independently overridable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionStyle {
    /// Font file path; FFmpeg's default font when unset
    #[serde(default)]
    pub font: Option<String>,
    /// Font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Fill color
    #[serde(default = "default_color")]
    pub color: String,
    /// Outline color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Outline thickness in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
}

fn default_font_size() -> u32 {
    70
}
fn default_color() -> String {
    "white".to_string()
}
fn default_stroke_color() -> String {
    "black".to_string()
}
fn default_stroke_width() -> u32 {
    3
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font: None,
            font_size: default_font_size(),
            color: default_color(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> CaptionWord {
        CaptionWord {
            word: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "text": "hi there",
            "words": [
                {"word": "hi", "start": 0.0, "end": 0.5},
                {"word": "there", "start": 0.5, "end": 1.2}
            ]
        }"#;
        let timeline = CaptionTimeline::from_json(json).unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.words()[0], word("hi", 0.0, 0.5));
        assert!((timeline.end() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_words_rejected() {
        let err = CaptionTimeline::from_json(r#"{"words": []}"#).unwrap_err();
        assert!(matches!(err, TimelineError::Empty));

        // Missing words field is treated the same as an empty list.
        let err = CaptionTimeline::from_json(r#"{"text": "hi"}"#).unwrap_err();
        assert!(matches!(err, TimelineError::Empty));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = CaptionTimeline::from_json(r#"{"words": [{"word": "hi", "start": 0.0}]}"#)
            .unwrap_err();
        assert!(matches!(err, TimelineError::Parse(_)));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let doc = CaptionDocument {
            words: vec![word("hi", 0.0, 0.5), word("there", 1.2, 0.5)],
        };
        match CaptionTimeline::from_document(doc).unwrap_err() {
            TimelineError::InvalidInterval { index, word, .. } => {
                assert_eq!(index, 1);
                assert_eq!(word, "there");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overlapping_words_permitted() {
        let doc = CaptionDocument {
            words: vec![word("hi", 0.0, 0.6), word("there", 0.5, 1.2)],
        };
        let timeline = CaptionTimeline::from_document(doc).unwrap();
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_default_style() {
        let style = CaptionStyle::default();
        assert_eq!(style.font_size, 70);
        assert_eq!(style.color, "white");
        assert_eq!(style.stroke_color, "black");
        assert_eq!(style.stroke_width, 3);
        assert!(style.font.is_none());
    }
}
