//! macOS integration layer for SwipeTile
//!
//! These modules provide safe, testable abstractions over the macOS
//! Accessibility, display, and event-tap APIs. The concrete implementations
//! can interact with the platform while unit tests rely on the in-memory
//! doubles.

pub mod accessibility;
pub mod display;
pub mod event_source;
pub mod permissions;

pub use accessibility::*;
pub use display::*;
pub use event_source::*;
pub use permissions::*;
