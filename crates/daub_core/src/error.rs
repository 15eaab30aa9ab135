//! Chain construction, scene and render errors

use daub_paint::GradientError;
use thiserror::Error;

/// Errors detected while building a chain
///
/// These indicate a caller bug; a chain that fails to build never renders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    /// A chain needs at least one action
    #[error("cannot build a chain from an empty action list")]
    Empty,

    /// Line segments are drawn from pairs of points
    #[error("line segments need an even number of points, got {0}")]
    OddLinePoints(usize),

    /// Invalid gradient parameters
    #[error(transparent)]
    Gradient(#[from] GradientError),
}

/// Errors detected during a render pass
///
/// Any scopes open when the error is raised are unwound on the way out, so the
/// caller's rendering state is intact when it sees the error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The host had no device context to render into
    #[error("no usable device context to render into")]
    NoDevice,

    /// The action draws from the current path, but none is set
    #[error("{action} requires a current path but none is set")]
    MissingPath { action: &'static str },
}

/// Result type for render passes
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors building a chain from a scene description
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// An action, or a sub-chain nested in it, failed to build
    #[error("invalid `{kind}` action at index {index}")]
    Action {
        index: usize,
        kind: &'static str,
        #[source]
        source: Box<SceneError>,
    },
}
