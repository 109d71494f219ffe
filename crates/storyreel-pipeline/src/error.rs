//! Pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

use storyreel_media::MediaError;
use storyreel_models::{PlanError, TimelineError};

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Planning error: {0}")]
    Plan(#[from] PlanError),

    #[error("Caption timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
