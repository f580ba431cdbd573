use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::macos::accessibility::{AccessibilityProvider, WindowHandle};
use crate::macos::display::DisplayProvider;
use crate::macos::event_source::InputEvent;
use crate::models::{Rect, Settings, TilePosition};
use crate::services::gesture::GestureStateMachine;
use crate::services::grid::{Adjustment, DragOutcome, GridSnapshot};
use crate::services::keyboard_tile;
use crate::services::zoom_frame::ZoomFrameCalculator;
use crate::services::zoom_toggle::{ZoomAction, ZoomToggleStateMachine};
use crate::Result;

/// Telemetry for the orchestration layer
#[derive(Debug, Default, Clone)]
pub struct OrchestratorMetrics {
    pub gestures_resolved: u64,
    pub tiles_applied: u64,
    pub zoom_activations: u64,
    pub zoom_collapses: u64,
    pub grid_sessions_started: u64,
    pub poll_ticks: u64,
    pub adjustments_applied: u64,
}

/// A window currently held in its expanded zoom frame
#[derive(Debug, Clone, Copy)]
struct ZoomedWindow {
    handle: WindowHandle,
    tile_frame: Rect,
}

/// Mutable orchestration state, serialized behind one lock: the state
/// machines themselves are synchronous and rely on the caller for ordering.
#[derive(Debug)]
struct OrchestratorState {
    gesture: GestureStateMachine,
    zoom: ZoomToggleStateMachine,
    gesture_target: Option<WindowHandle>,
    /// Current tile position per window id
    tiles: HashMap<u64, TilePosition>,
    /// Pre-tiling frames, written back on restore
    restore_frames: HashMap<u64, Rect>,
    last_tiled: Option<WindowHandle>,
    zoomed: Option<ZoomedWindow>,
    grid: Option<GridSnapshot>,
}

/// Wires raw input events to the decision engines and issues the resulting
/// move/resize calls through the platform capability traits.
///
/// Owns the grid session lifecycle: a session starts once two or more tiled
/// windows are on screen and ends when tiling drops below that, and while a
/// session is active the poll tick diffs real frames against the snapshot
/// and cascades border moves.
pub struct TilingOrchestrator {
    accessibility: Arc<dyn AccessibilityProvider>,
    displays: Arc<dyn DisplayProvider>,
    settings: Settings,
    zoom_calculator: ZoomFrameCalculator,
    state: Mutex<OrchestratorState>,
    metrics: Arc<RwLock<OrchestratorMetrics>>,
}

impl TilingOrchestrator {
    pub fn new(
        accessibility: Arc<dyn AccessibilityProvider>,
        displays: Arc<dyn DisplayProvider>,
        settings: Settings,
    ) -> Self {
        let state = OrchestratorState {
            gesture: GestureStateMachine::new(settings.gesture.dead_zone),
            zoom: ZoomToggleStateMachine::new(
                settings.zoom.sequence_timeout(),
                settings.zoom.hold_threshold(),
            ),
            gesture_target: None,
            tiles: HashMap::new(),
            restore_frames: HashMap::new(),
            last_tiled: None,
            zoomed: None,
            grid: None,
        };

        Self {
            accessibility,
            displays,
            zoom_calculator: ZoomFrameCalculator::new(settings.zoom.growth_factor),
            settings,
            state: Mutex::new(state),
            metrics: Arc::new(RwLock::new(OrchestratorMetrics::default())),
        }
    }

    /// Route one raw input event through the state machines.
    pub async fn handle_event(&self, event: InputEvent) -> Result<()> {
        let mut state = self.state.lock().await;
        match event {
            InputEvent::ScrollBegan { location } => {
                let target = self.accessibility.window_under_point(location)?;
                state.gesture_target = target;
                if target.is_some() {
                    state.gesture.begin();
                } else {
                    state.gesture.reset();
                }
            }
            InputEvent::ScrollChanged { delta_x, delta_y } => {
                if let Some(position) = state.gesture.feed(delta_x, delta_y) {
                    self.metrics.write().await.gestures_resolved += 1;
                    if let Some(handle) = state.gesture_target {
                        self.apply_tile(&mut state, handle, position).await?;
                    }
                }
            }
            InputEvent::ScrollEnded => {
                state.gesture.reset();
                state.gesture_target = None;
            }
            InputEvent::ModifierDown { side, at } => {
                if let Some(ZoomAction::Activated(_)) = state.zoom.key_down(side, at) {
                    self.toggle_zoom(&mut state).await?;
                }
            }
            InputEvent::ModifierUp { side, at } => {
                if let Some(ZoomAction::HoldReleased) = state.zoom.key_up(side, at) {
                    self.collapse_zoom(&mut state).await?;
                }
            }
            InputEvent::ArrowChord {
                direction,
                location,
            } => {
                let Some(handle) = self.accessibility.window_under_point(location)? else {
                    return Ok(());
                };
                let current = state.tiles.get(&handle.id()).copied();
                match keyboard_tile::transition(current, direction) {
                    Some(TilePosition::Fullscreen) => {
                        self.accessibility.enter_fullscreen(handle)?;
                        state.tiles.insert(handle.id(), TilePosition::Fullscreen);
                    }
                    Some(TilePosition::Restore) => {
                        self.restore_window(&mut state, handle).await?;
                    }
                    Some(position) => {
                        self.apply_tile(&mut state, handle, position).await?;
                    }
                    None => {}
                }
            }
            InputEvent::OtherKey => {
                state.zoom.non_modifier_key();
            }
        }
        Ok(())
    }

    /// Consume events and drive the grid poll until shutdown.
    pub async fn run(
        self: Arc<Self>,
        mut events: mpsc::UnboundedReceiver<InputEvent>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<()> {
        let mut poll = tokio::time::interval(self.settings.grid.poll_interval());
        poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                maybe_event = events.recv() => {
                    match maybe_event {
                        Some(event) => {
                            if let Err(err) = self.handle_event(event).await {
                                warn!("Failed to handle input event: {err}");
                            }
                        }
                        None => break,
                    }
                }
                _ = poll.tick() => {
                    if self.grid_session_active().await {
                        if let Err(err) = self.poll_grid_session().await {
                            warn!("Grid poll tick failed: {err}");
                        }
                    }
                }
            }
        }

        debug!("Orchestrator loop stopped");
        Ok(())
    }

    pub async fn metrics(&self) -> OrchestratorMetrics {
        self.metrics.read().await.clone()
    }

    /// Current tile position tracked for a window, if any.
    pub async fn tile_position_of(&self, handle: WindowHandle) -> Option<TilePosition> {
        self.state.lock().await.tiles.get(&handle.id()).copied()
    }

    pub async fn grid_session_active(&self) -> bool {
        self.state.lock().await.grid.is_some()
    }

    /// Start a grid session when at least two tiled windows are on screen.
    pub async fn begin_grid_session(&self) -> Result<bool> {
        let mut state = self.state.lock().await;
        self.begin_grid_session_inner(&mut state)
    }

    pub async fn end_grid_session(&self) {
        let mut state = self.state.lock().await;
        if let Some(grid) = state.grid.take() {
            debug!(session_id = %grid.session_id(), "Grid session ended");
        }
    }

    /// One poll tick: read real frames, diff against the snapshot, cascade
    /// border moves, write the results back, and re-arm the echo
    /// suppression. Returns the number of adjustments applied.
    pub async fn poll_grid_session(&self) -> Result<usize> {
        let mut state = self.state.lock().await;
        let Some(grid) = state.grid.as_mut() else {
            return Ok(0);
        };

        let observed = self.accessibility.on_screen_windows()?;
        let mut pending: Vec<Adjustment> = Vec::new();

        for (handle, real_frame) in observed {
            let id = handle.id();
            let Some(entry) = grid.window(id) else {
                continue;
            };
            if entry.is_adjusting {
                // Our own write echoing back; swallowed exactly once, the
                // flag is cleared below.
                continue;
            }
            let old_frame = entry.frame;
            if old_frame != real_frame {
                pending.extend(grid.compute_propagation(id, &old_frame, &real_frame));
                grid.set_frame(id, real_frame);
            }
        }

        // Exactly once per tick, no matter how many windows changed.
        grid.clear_adjusting_flags();

        let applied = pending.len();
        for adjustment in pending {
            let handle = WindowHandle(adjustment.window_id);
            if let Err(err) = self.accessibility.set_frame(handle, adjustment.frame) {
                warn!(window = adjustment.window_id, "Failed to apply adjustment: {err}");
                continue;
            }
            grid.set_frame(adjustment.window_id, adjustment.frame);
            grid.mark_adjusting(adjustment.window_id);
        }

        let mut metrics = self.metrics.write().await;
        metrics.poll_ticks += 1;
        metrics.adjustments_applied += applied as u64;

        Ok(applied)
    }

    /// Interactively drag a shared edge, applying the resulting frames.
    pub async fn drag_grid_edge(&self, edge_index: usize, delta: f64) -> Result<DragOutcome> {
        let mut state = self.state.lock().await;
        let Some(grid) = state.grid.as_mut() else {
            return Ok(DragOutcome::default());
        };

        let Some(edge) = grid.edges().get(edge_index).copied() else {
            return Ok(DragOutcome::default());
        };
        let anchor_frame = match grid.window(edge.window_a) {
            Some(entry) => entry.frame,
            None => return Ok(DragOutcome::default()),
        };
        let Some(visible) = self.displays.visible_frame_for(&anchor_frame)? else {
            return Ok(DragOutcome::default());
        };

        let outcome = grid.drag_edge(edge_index, delta, &visible);
        for adjustment in &outcome.adjustments {
            let handle = WindowHandle(adjustment.window_id);
            if let Err(err) = self.accessibility.set_frame(handle, adjustment.frame) {
                warn!(window = adjustment.window_id, "Failed to apply drag: {err}");
                continue;
            }
            grid.mark_adjusting(adjustment.window_id);
        }

        self.metrics.write().await.adjustments_applied += outcome.adjustments.len() as u64;
        Ok(outcome)
    }

    async fn apply_tile(
        &self,
        state: &mut OrchestratorState,
        handle: WindowHandle,
        position: TilePosition,
    ) -> Result<()> {
        let Some(current_frame) = self.accessibility.frame(handle)? else {
            return Ok(());
        };
        let Some(visible) = self.displays.visible_frame_for(&current_frame)? else {
            warn!(window = handle.id(), "No display found for window");
            return Ok(());
        };
        let Some(target) = position.frame(&visible, self.settings.layout.margin, self.settings.layout.gap)
        else {
            return Ok(());
        };

        state
            .restore_frames
            .entry(handle.id())
            .or_insert(current_frame);

        self.accessibility.set_frame(handle, target)?;
        state.tiles.insert(handle.id(), position);
        state.last_tiled = Some(handle);
        debug!(window = handle.id(), ?position, "Tiled window");

        if let Some(grid) = state.grid.as_mut() {
            if grid.window(handle.id()).is_some() {
                grid.set_frame(handle.id(), target);
                grid.mark_adjusting(handle.id());
            }
        } else if Self::tiled_count(state) >= 2 {
            self.begin_grid_session_inner(state)?;
        }

        self.metrics.write().await.tiles_applied += 1;
        Ok(())
    }

    async fn restore_window(
        &self,
        state: &mut OrchestratorState,
        handle: WindowHandle,
    ) -> Result<()> {
        if self.accessibility.is_fullscreen(handle)? {
            self.accessibility.exit_fullscreen(handle)?;
        }
        if let Some(frame) = state.restore_frames.remove(&handle.id()) {
            if let Err(err) = self.accessibility.set_frame(handle, frame) {
                warn!(window = handle.id(), "Failed to restore frame: {err}");
            }
        }
        state.tiles.remove(&handle.id());
        if state.last_tiled == Some(handle) {
            state.last_tiled = None;
        }
        if state
            .zoomed
            .map(|zoomed| zoomed.handle == handle)
            .unwrap_or(false)
        {
            state.zoomed = None;
        }
        if state.grid.is_some() && Self::tiled_count(state) < 2 {
            if let Some(grid) = state.grid.take() {
                debug!(session_id = %grid.session_id(), "Grid session ended");
            }
        }
        debug!(window = handle.id(), "Restored window");
        Ok(())
    }

    /// Expand the most recently tiled window, or collapse it when already
    /// expanded: the tap-tap toggle pair.
    async fn toggle_zoom(&self, state: &mut OrchestratorState) -> Result<()> {
        if state.zoomed.is_some() {
            return self.collapse_zoom(state).await;
        }

        let Some(handle) = state.last_tiled else {
            return Ok(());
        };
        let Some(position) = state.tiles.get(&handle.id()).copied() else {
            return Ok(());
        };
        if !position.needs_frame() {
            return Ok(());
        }
        let Some(tile_frame) = self.accessibility.frame(handle)? else {
            return Ok(());
        };
        let Some(visible) = self.displays.visible_frame_for(&tile_frame)? else {
            return Ok(());
        };

        let expanded = self
            .zoom_calculator
            .expanded_frame(&tile_frame, position, &visible);
        self.accessibility.set_frame(handle, expanded)?;
        state.zoomed = Some(ZoomedWindow { handle, tile_frame });
        if let Some(grid) = state.grid.as_mut() {
            if grid.window(handle.id()).is_some() {
                grid.set_frame(handle.id(), expanded);
                grid.mark_adjusting(handle.id());
            }
        }
        debug!(window = handle.id(), ?position, "Zoom expanded");

        self.metrics.write().await.zoom_activations += 1;
        Ok(())
    }

    async fn collapse_zoom(&self, state: &mut OrchestratorState) -> Result<()> {
        let Some(zoomed) = state.zoomed.take() else {
            return Ok(());
        };
        if let Err(err) = self.accessibility.set_frame(zoomed.handle, zoomed.tile_frame) {
            warn!(window = zoomed.handle.id(), "Failed to collapse zoom: {err}");
            return Ok(());
        }
        if let Some(grid) = state.grid.as_mut() {
            if grid.window(zoomed.handle.id()).is_some() {
                grid.set_frame(zoomed.handle.id(), zoomed.tile_frame);
                grid.mark_adjusting(zoomed.handle.id());
            }
        }
        debug!(window = zoomed.handle.id(), "Zoom collapsed");

        self.metrics.write().await.zoom_collapses += 1;
        Ok(())
    }

    fn tiled_count(state: &OrchestratorState) -> usize {
        state
            .tiles
            .values()
            .filter(|position| position.needs_frame())
            .count()
    }

    fn begin_grid_session_inner(&self, state: &mut OrchestratorState) -> Result<bool> {
        let windows = self.accessibility.on_screen_windows()?;
        let tiled: Vec<(u64, Rect)> = windows
            .into_iter()
            .filter(|(handle, _)| {
                state
                    .tiles
                    .get(&handle.id())
                    .map(|position| position.needs_frame())
                    .unwrap_or(false)
            })
            .map(|(handle, frame)| (handle.id(), frame))
            .collect();

        if tiled.len() < 2 {
            return Ok(false);
        }

        let grid = GridSnapshot::new(tiled, self.settings.grid.clone());
        info!(
            session_id = %grid.session_id(),
            windows = grid.windows().len(),
            edges = grid.edges().len(),
            "Grid session started"
        );
        state.grid = Some(grid);

        // Sync path; the metrics lock is never held across this call.
        if let Ok(mut metrics) = self.metrics.try_write() {
            metrics.grid_sessions_started += 1;
        }
        Ok(true)
    }
}
