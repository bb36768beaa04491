use thiserror::Error;

/// Failures surfaced by platform collaborators.
///
/// Everything inside a frame step is total; only the platform edges
/// (frame scheduling, asset loading, audio transport) can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VizError {
    #[error("frame scheduling failed: {0}")]
    Schedule(String),
    #[error("failed to load audio asset {path}: {reason}")]
    AssetLoad { path: String, reason: String },
    #[error("audio transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, VizError>;
