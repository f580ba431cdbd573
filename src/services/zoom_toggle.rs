use std::time::Duration;

use tracing::debug;

use crate::models::KeySide;

/// Where the machine is within one double-tap sequence.
///
/// Timestamps are caller-supplied monotonic offsets, so the machine is
/// deterministic under event-delivery jitter and unit-testable without real
/// delays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomToggleState {
    Idle,
    FirstKeyDown(KeySide),
    WaitingForSecond { side: KeySide, released_at: Duration },
    Activated { side: KeySide, activated_at: Duration },
}

/// Output of the toggle machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomAction {
    /// A cross-side double-tap completed; the zoom should engage.
    Activated(KeySide),
    /// The activating key was released quickly; the zoom should snap back.
    /// A longer hold releases silently and the window stays expanded.
    HoldReleased,
}

/// Detects a fast double-tap-and-hold of the trigger modifier key.
///
/// Activation requires the second press to come from the *opposite* physical
/// key within the sequence timeout; a same-side re-press restarts the
/// sequence. Once activated, releasing within the hold threshold emits
/// [`ZoomAction::HoldReleased`]; a longer hold releases with no output,
/// giving toggle semantics.
#[derive(Debug)]
pub struct ZoomToggleStateMachine {
    sequence_timeout: Duration,
    hold_threshold: Duration,
    state: ZoomToggleState,
}

impl ZoomToggleStateMachine {
    pub fn new(sequence_timeout: Duration, hold_threshold: Duration) -> Self {
        Self {
            sequence_timeout,
            hold_threshold,
            state: ZoomToggleState::Idle,
        }
    }

    /// Feed a trigger-key press observed at `at`.
    pub fn key_down(&mut self, side: KeySide, at: Duration) -> Option<ZoomAction> {
        match self.state {
            ZoomToggleState::Idle => {
                self.state = ZoomToggleState::FirstKeyDown(side);
                None
            }
            ZoomToggleState::FirstKeyDown(_) => {
                // A second press while the first is still held is not a tap.
                self.state = ZoomToggleState::Idle;
                None
            }
            ZoomToggleState::WaitingForSecond {
                side: first,
                released_at,
            } => {
                if side == first {
                    self.state = ZoomToggleState::FirstKeyDown(side);
                    None
                } else if at.saturating_sub(released_at) <= self.sequence_timeout {
                    debug!(?side, "Zoom double-tap activated");
                    self.state = ZoomToggleState::Activated {
                        side,
                        activated_at: at,
                    };
                    Some(ZoomAction::Activated(side))
                } else {
                    self.state = ZoomToggleState::FirstKeyDown(side);
                    None
                }
            }
            // The zoom is engaged; extra presses don't re-trigger it.
            ZoomToggleState::Activated { .. } => None,
        }
    }

    /// Feed a trigger-key release observed at `at`.
    pub fn key_up(&mut self, side: KeySide, at: Duration) -> Option<ZoomAction> {
        match self.state {
            ZoomToggleState::FirstKeyDown(first) => {
                if side == first {
                    self.state = ZoomToggleState::WaitingForSecond {
                        side,
                        released_at: at,
                    };
                } else {
                    self.state = ZoomToggleState::Idle;
                }
                None
            }
            ZoomToggleState::Activated {
                side: active,
                activated_at,
            } if side == active => {
                self.state = ZoomToggleState::Idle;
                if at.saturating_sub(activated_at) <= self.hold_threshold {
                    debug!(?side, "Zoom hold released");
                    Some(ZoomAction::HoldReleased)
                } else {
                    None
                }
            }
            // Stray releases carry no information for the sequence.
            _ => None,
        }
    }

    /// Feed any non-trigger keypress; it cancels a pending sequence.
    pub fn non_modifier_key(&mut self) {
        match self.state {
            ZoomToggleState::FirstKeyDown(_) | ZoomToggleState::WaitingForSecond { .. } => {
                self.state = ZoomToggleState::Idle;
            }
            ZoomToggleState::Idle | ZoomToggleState::Activated { .. } => {}
        }
    }

    pub fn reset(&mut self) {
        self.state = ZoomToggleState::Idle;
    }

    pub fn state(&self) -> ZoomToggleState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> ZoomToggleStateMachine {
        ZoomToggleStateMachine::new(Duration::from_millis(400), Duration::from_millis(500))
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn cross_side_double_tap_activates() {
        let mut toggle = machine();
        assert_eq!(toggle.key_down(KeySide::Left, ms(0)), None);
        assert_eq!(toggle.key_up(KeySide::Left, ms(50)), None);
        assert_eq!(
            toggle.key_down(KeySide::Right, ms(100)),
            Some(ZoomAction::Activated(KeySide::Right))
        );
    }

    #[test]
    fn quick_release_after_activation_emits_hold_released() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(50));
        toggle.key_down(KeySide::Right, ms(100));

        assert_eq!(
            toggle.key_up(KeySide::Right, ms(300)),
            Some(ZoomAction::HoldReleased)
        );
        assert_eq!(toggle.state(), ZoomToggleState::Idle);
    }

    #[test]
    fn long_hold_releases_silently() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(50));
        toggle.key_down(KeySide::Right, ms(100));

        assert_eq!(toggle.key_up(KeySide::Right, ms(700)), None);
        assert_eq!(toggle.state(), ZoomToggleState::Idle);
    }

    #[test]
    fn same_side_re_press_restarts_the_sequence() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(50));

        assert_eq!(toggle.key_down(KeySide::Left, ms(100)), None);
        assert_eq!(toggle.state(), ZoomToggleState::FirstKeyDown(KeySide::Left));
    }

    #[test]
    fn opposite_side_after_timeout_starts_over() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(50));

        assert_eq!(toggle.key_down(KeySide::Right, ms(600)), None);
        assert_eq!(
            toggle.state(),
            ZoomToggleState::FirstKeyDown(KeySide::Right)
        );
    }

    #[test]
    fn non_modifier_key_cancels_a_pending_sequence() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(50));
        toggle.non_modifier_key();

        assert_eq!(toggle.state(), ZoomToggleState::Idle);
        assert_eq!(toggle.key_down(KeySide::Right, ms(100)), None);
    }

    #[test]
    fn non_modifier_key_does_not_break_an_active_hold() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(50));
        toggle.key_down(KeySide::Right, ms(100));
        toggle.non_modifier_key();

        assert!(matches!(
            toggle.state(),
            ZoomToggleState::Activated { .. }
        ));
    }

    #[test]
    fn opposite_release_during_first_press_cancels() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        assert_eq!(toggle.key_up(KeySide::Right, ms(20)), None);
        assert_eq!(toggle.state(), ZoomToggleState::Idle);
    }

    #[test]
    fn second_press_while_first_still_held_cancels() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        assert_eq!(toggle.key_down(KeySide::Right, ms(20)), None);
        assert_eq!(toggle.state(), ZoomToggleState::Idle);
    }

    #[test]
    fn activation_boundary_is_inclusive() {
        let mut toggle = machine();
        toggle.key_down(KeySide::Left, ms(0));
        toggle.key_up(KeySide::Left, ms(100));
        assert_eq!(
            toggle.key_down(KeySide::Right, ms(500)),
            Some(ZoomAction::Activated(KeySide::Right))
        );
    }
}
