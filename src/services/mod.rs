//! Decision engines and orchestration for SwipeTile

pub mod gesture;
pub mod grid;
pub mod keyboard_tile;
pub mod orchestrator;
pub mod zoom_frame;
pub mod zoom_toggle;

pub use gesture::*;
pub use grid::*;
pub use orchestrator::*;
pub use zoom_frame::*;
pub use zoom_toggle::*;
