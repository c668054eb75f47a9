//! Domain and render errors

use std::path::PathBuf;
use thiserror::Error;

/// Structural violations in a diagram.
///
/// These are independent of the charting layer and are detected before any
/// output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("functor '{label}' references unknown source category: {name}")]
    UnknownSource { label: String, name: String },

    #[error("functor '{label}' references unknown target category: {name}")]
    UnknownTarget { label: String, name: String },
}

/// Failures while rendering a diagram to disk.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("failed to write output file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
