use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::{Point, Rect};
use crate::{Result, SwipeTileError};

/// Opaque handle to an on-screen window.
///
/// The wrapped value is a weak back-reference derived from the platform
/// window reference, stable only for as long as the window stays on screen.
/// Nothing in the engine assumes it outlives a grid session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

impl WindowHandle {
    /// Identifier used for grid bookkeeping.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Abstraction over the macOS Accessibility window primitives.
///
/// This is the whole surface the decision engines are allowed to touch:
/// hit-testing, frame read/write, fullscreen state, and enumeration. Missing
/// windows are reported as `Ok(None)`, not errors, so a window closing
/// mid-session degrades to a stale entry rather than a failure.
pub trait AccessibilityProvider: Send + Sync {
    /// Hit-test for the window under `point`, used at gesture start.
    fn window_under_point(&self, point: Point) -> Result<Option<WindowHandle>>;

    /// Current frame of a window, `None` when the handle has gone stale.
    fn frame(&self, handle: WindowHandle) -> Result<Option<Rect>>;

    /// Move / resize a window to the requested frame.
    fn set_frame(&self, handle: WindowHandle, frame: Rect) -> Result<()>;

    fn is_fullscreen(&self, handle: WindowHandle) -> Result<bool>;

    fn enter_fullscreen(&self, handle: WindowHandle) -> Result<()>;

    fn exit_fullscreen(&self, handle: WindowHandle) -> Result<()>;

    /// Snapshot of all on-screen windows with their frames, used for grid
    /// session discovery and the session poll.
    fn on_screen_windows(&self) -> Result<Vec<(WindowHandle, Rect)>>;
}

/// Accessibility provider backed by the real AX APIs.
///
/// The concrete implementation drives the platform through the run-loop
/// dispatcher; in this environment it surfaces a friendly error so higher
/// layers can fall back to safe defaults.
#[derive(Debug, Default)]
pub struct SystemAccessibilityProvider;

impl SystemAccessibilityProvider {
    pub fn new() -> Self {
        Self
    }

    fn unavailable<T>(&self) -> Result<T> {
        Err(SwipeTileError::MacOSAPIError(
            "SystemAccessibilityProvider is not implemented in this environment".into(),
        )
        .into())
    }
}

impl AccessibilityProvider for SystemAccessibilityProvider {
    fn window_under_point(&self, _point: Point) -> Result<Option<WindowHandle>> {
        self.unavailable()
    }

    fn frame(&self, _handle: WindowHandle) -> Result<Option<Rect>> {
        self.unavailable()
    }

    fn set_frame(&self, _handle: WindowHandle, _frame: Rect) -> Result<()> {
        self.unavailable()
    }

    fn is_fullscreen(&self, _handle: WindowHandle) -> Result<bool> {
        self.unavailable()
    }

    fn enter_fullscreen(&self, _handle: WindowHandle) -> Result<()> {
        self.unavailable()
    }

    fn exit_fullscreen(&self, _handle: WindowHandle) -> Result<()> {
        self.unavailable()
    }

    fn on_screen_windows(&self) -> Result<Vec<(WindowHandle, Rect)>> {
        self.unavailable()
    }
}

#[derive(Debug, Clone)]
struct SimulatedWindow {
    frame: Rect,
    fullscreen: bool,
}

/// In-memory accessibility provider for tests and the stubbed entry point.
///
/// Windows are plain records keyed by handle; hit-testing walks them in
/// ascending handle order so results are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryAccessibilityProvider {
    windows: RwLock<HashMap<u64, SimulatedWindow>>,
}

impl InMemoryAccessibilityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_window(&self, handle: WindowHandle, frame: Rect) {
        self.windows.write().expect("poisoned lock").insert(
            handle.id(),
            SimulatedWindow {
                frame,
                fullscreen: false,
            },
        );
    }

    pub fn remove_window(&self, handle: WindowHandle) {
        self.windows
            .write()
            .expect("poisoned lock")
            .remove(&handle.id());
    }

    /// Move a window as if the user dragged it, bypassing the engine.
    pub fn simulate_external_move(&self, handle: WindowHandle, frame: Rect) {
        if let Some(window) = self
            .windows
            .write()
            .expect("poisoned lock")
            .get_mut(&handle.id())
        {
            window.frame = frame;
        }
    }
}

impl AccessibilityProvider for InMemoryAccessibilityProvider {
    fn window_under_point(&self, point: Point) -> Result<Option<WindowHandle>> {
        let windows = self.windows.read().expect("poisoned lock");
        let mut ids: Vec<u64> = windows.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids
            .into_iter()
            .find(|id| windows[id].frame.contains(point))
            .map(WindowHandle))
    }

    fn frame(&self, handle: WindowHandle) -> Result<Option<Rect>> {
        Ok(self
            .windows
            .read()
            .expect("poisoned lock")
            .get(&handle.id())
            .map(|window| window.frame))
    }

    fn set_frame(&self, handle: WindowHandle, frame: Rect) -> Result<()> {
        let mut windows = self.windows.write().expect("poisoned lock");
        match windows.get_mut(&handle.id()) {
            Some(window) => {
                window.frame = frame;
                Ok(())
            }
            None => Err(SwipeTileError::WindowNotFound(handle.id()).into()),
        }
    }

    fn is_fullscreen(&self, handle: WindowHandle) -> Result<bool> {
        Ok(self
            .windows
            .read()
            .expect("poisoned lock")
            .get(&handle.id())
            .map(|window| window.fullscreen)
            .unwrap_or(false))
    }

    fn enter_fullscreen(&self, handle: WindowHandle) -> Result<()> {
        let mut windows = self.windows.write().expect("poisoned lock");
        match windows.get_mut(&handle.id()) {
            Some(window) => {
                window.fullscreen = true;
                Ok(())
            }
            None => Err(SwipeTileError::WindowNotFound(handle.id()).into()),
        }
    }

    fn exit_fullscreen(&self, handle: WindowHandle) -> Result<()> {
        let mut windows = self.windows.write().expect("poisoned lock");
        match windows.get_mut(&handle.id()) {
            Some(window) => {
                window.fullscreen = false;
                Ok(())
            }
            None => Err(SwipeTileError::WindowNotFound(handle.id()).into()),
        }
    }

    fn on_screen_windows(&self) -> Result<Vec<(WindowHandle, Rect)>> {
        let windows = self.windows.read().expect("poisoned lock");
        let mut list: Vec<(WindowHandle, Rect)> = windows
            .iter()
            .map(|(id, window)| (WindowHandle(*id), window.frame))
            .collect();
        list.sort_by_key(|(handle, _)| handle.id());
        Ok(list)
    }
}
