use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::models::{ArrowDirection, KeySide, Point};
use crate::{Result, SwipeTileError};

/// Raw input events delivered by the global event tap.
///
/// Scroll events carry accumulated two-axis deltas; modifier transitions
/// carry the physical key side plus a monotonic timestamp so the toggle
/// machine never has to consult a clock. Pointer-carrying events include the
/// cursor location the tap reported, which is all the hit-testing the
/// engines need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ScrollBegan { location: Point },
    ScrollChanged { delta_x: f64, delta_y: f64 },
    ScrollEnded,
    ModifierDown { side: KeySide, at: Duration },
    ModifierUp { side: KeySide, at: Duration },
    ArrowChord { direction: ArrowDirection, location: Point },
    OtherKey,
}

/// Source of raw input events.
///
/// `start` hands back the receiving end of the event stream; it can be
/// called once per source.
pub trait EventSource: Send + Sync {
    fn start(&self) -> Result<mpsc::UnboundedReceiver<InputEvent>>;
}

/// Event source backed by a CGEventTap on the real system.
///
/// The concrete tap needs Input Monitoring permission and a host run loop;
/// in this environment it surfaces a friendly error instead.
#[derive(Debug, Default)]
pub struct SystemEventSource;

impl SystemEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for SystemEventSource {
    fn start(&self) -> Result<mpsc::UnboundedReceiver<InputEvent>> {
        Err(SwipeTileError::MacOSAPIError(
            "SystemEventSource is not implemented in this environment".into(),
        )
        .into())
    }
}

/// Channel-backed event source for tests and the stubbed entry point.
///
/// Tests push synthetic events through [`ChannelEventSource::push`]; the
/// consumer drains them from the receiver obtained via `start`.
#[derive(Debug)]
pub struct ChannelEventSource {
    sender: mpsc::UnboundedSender<InputEvent>,
    receiver: Mutex<Option<mpsc::UnboundedReceiver<InputEvent>>>,
}

impl Default for ChannelEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelEventSource {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: Mutex::new(Some(receiver)),
        }
    }

    /// Inject a synthetic event. Dropped silently once the receiver is gone.
    pub fn push(&self, event: InputEvent) {
        let _ = self.sender.send(event);
    }
}

impl EventSource for ChannelEventSource {
    fn start(&self) -> Result<mpsc::UnboundedReceiver<InputEvent>> {
        self.receiver
            .lock()
            .expect("poisoned lock")
            .take()
            .ok_or_else(|| {
                SwipeTileError::ValidationError("event source already started".into()).into()
            })
    }
}
