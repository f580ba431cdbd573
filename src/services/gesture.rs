use tracing::debug;

use crate::models::TilePosition;

/// Progress of one trackpad swipe from first contact to classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Tracking { total_x: f64, total_y: f64 },
    Resolved(TilePosition),
}

/// Classifies a stream of two-axis scroll deltas into a tile position.
///
/// A gesture accumulates deltas while `Tracking` and classifies once the
/// dominant axis leaves the dead zone. Resolution is sticky: the machine
/// ignores further deltas until [`GestureStateMachine::reset`]. Downward
/// vertical swipes never resolve here; "down" is reserved for the restore
/// gesture handled by the orchestration layer.
#[derive(Debug)]
pub struct GestureStateMachine {
    dead_zone: f64,
    state: GestureState,
}

impl GestureStateMachine {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            dead_zone,
            state: GestureState::Idle,
        }
    }

    /// Start tracking a fresh gesture, discarding any prior accumulation.
    pub fn begin(&mut self) {
        self.state = GestureState::Tracking {
            total_x: 0.0,
            total_y: 0.0,
        };
    }

    /// Accumulate one scroll delta. Returns the tile position at the moment
    /// the gesture classifies; `None` otherwise. Feeding while `Idle` or
    /// after resolution is a no-op.
    pub fn feed(&mut self, delta_x: f64, delta_y: f64) -> Option<TilePosition> {
        let GestureState::Tracking { total_x, total_y } = self.state else {
            return None;
        };

        let total_x = total_x + delta_x;
        let total_y = total_y + delta_y;
        self.state = GestureState::Tracking { total_x, total_y };

        let magnitude = total_x.abs().max(total_y.abs());
        if magnitude <= self.dead_zone {
            return None;
        }

        let resolved = if total_y.abs() > total_x.abs() {
            // Vertical dominant: only an upward swipe classifies.
            (total_y < 0.0).then_some(TilePosition::Maximize)
        } else if total_x < 0.0 {
            Some(TilePosition::LeftHalf)
        } else {
            Some(TilePosition::RightHalf)
        };

        if let Some(position) = resolved {
            debug!(?position, total_x, total_y, "Swipe classified");
            self.state = GestureState::Resolved(position);
        }
        resolved
    }

    /// Abort or finish the gesture and return to `Idle`.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// The classified position, if the current gesture resolved.
    pub fn resolved(&self) -> Option<TilePosition> {
        match self.state {
            GestureState::Resolved(position) => Some(position),
            _ => None,
        }
    }
}
