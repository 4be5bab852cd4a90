// src/error.rs
use thiserror::Error;
use warrant_render_core::RenderError;

/// Everything that can go wrong between a record on disk and a PDF on disk.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
