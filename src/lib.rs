//! SwipeTile - Trackpad-Swipe Window Tiler for macOS
//!
//! SwipeTile repositions and resizes application windows from trackpad
//! swipes, arrow-key chords, and modifier double-taps, and keeps a live grid
//! of tiled windows resizable by dragging shared borders. The decision
//! engines are pure state machines over geometry; everything platform-facing
//! sits behind the capability traits in [`macos`].

pub mod cli;
pub mod config;
pub mod logging;
pub mod macos;
pub mod models;
pub mod services;

pub use models::*;
pub use services::*;

/// Result type alias for SwipeTile operations
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to SwipeTile operations
#[derive(thiserror::Error, Debug)]
pub enum SwipeTileError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Window not found: {0}")]
    WindowNotFound(u64),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("macOS API error: {0}")]
    MacOSAPIError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
