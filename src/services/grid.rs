use std::collections::HashMap;

use tracing::{debug, trace};
use uuid::Uuid;

use crate::models::{GridSettings, Rect};

/// Stable identifier for a window within one grid session, derived from an
/// opaque platform handle by the orchestration layer.
pub type WindowId = u64;

/// Frame deltas below this are treated as noise, not edge movement.
const MOVE_EPSILON: f64 = 0.5;

/// Screen fractions an edge drag snaps to
const SNAP_FRACTIONS: [f64; 3] = [1.0 / 3.0, 1.0 / 2.0, 2.0 / 3.0];

/// Orientation of a shared border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeAxis {
    /// Windows side by side; the seam is a vertical line.
    Vertical,
    /// Windows stacked; the seam is a horizontal line.
    Horizontal,
}

/// A detected border where two windows' frames meet within tolerance.
///
/// Directional convention, load-bearing for propagation: `window_a` is the
/// window to the left (vertical) or above (horizontal); `window_b` is to the
/// right or below. A's trailing edge meets B's leading edge at `coordinate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedEdge {
    pub window_a: WindowId,
    pub window_b: WindowId,
    pub axis: EdgeAxis,
    pub coordinate: f64,
    pub span_start: f64,
    pub span_end: f64,
}

/// One window tracked for the lifetime of a grid session
#[derive(Debug, Clone)]
pub struct WindowEntry {
    pub id: WindowId,
    pub frame: Rect,
    /// Set when the engine itself wrote this frame; suppresses the next
    /// externally-observed diff so our own writes don't echo back as moves.
    pub is_adjusting: bool,
}

/// A frame the caller should apply to a neighboring window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub window_id: WindowId,
    pub frame: Rect,
}

/// Detent an interactive drag locked onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapDetent {
    pub fraction: f64,
    pub coordinate: f64,
}

/// Result of one interactive edge drag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragOutcome {
    pub adjustments: Vec<Adjustment>,
    /// Present only on the drag that first reaches a new detent, so callers
    /// can fire a single haptic pulse per snap.
    pub snap_signal: Option<SnapDetent>,
}

/// Live model of a tiled window grid for one resize session.
///
/// Owns the window entries and the shared-edge set derived once at
/// construction. Mutated in place by a single session owner (one drag or one
/// poll loop); no internal locking. All operations are total: stale ids,
/// missing adjacency, and undersized proposals degrade to empty results.
#[derive(Debug)]
pub struct GridSnapshot {
    session_id: Uuid,
    entries: Vec<WindowEntry>,
    edges: Vec<SharedEdge>,
    settings: GridSettings,
    last_snap_target: Option<f64>,
}

impl GridSnapshot {
    /// Build a snapshot from the windows on screen when the session starts.
    ///
    /// Every unordered pair is tested in both vertical and both horizontal
    /// orientations. Borders count as shared when the facing coordinates are
    /// within `edge_tolerance` and the perpendicular spans overlap by at
    /// least `overlap_threshold`, which keeps corner-touching windows from
    /// producing spurious edges. O(N²) over the pair set; grid sessions are
    /// bounded by on-screen window count.
    pub fn new(windows: Vec<(WindowId, Rect)>, settings: GridSettings) -> Self {
        let entries: Vec<WindowEntry> = windows
            .into_iter()
            .map(|(id, frame)| WindowEntry {
                id,
                frame,
                is_adjusting: false,
            })
            .collect();

        let mut edges = Vec::new();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let a = &entries[i];
                let b = &entries[j];
                if let Some(edge) = detect_vertical(a, b, &settings)
                    .or_else(|| detect_vertical(b, a, &settings))
                {
                    edges.push(edge);
                }
                if let Some(edge) = detect_horizontal(a, b, &settings)
                    .or_else(|| detect_horizontal(b, a, &settings))
                {
                    edges.push(edge);
                }
            }
        }

        let session_id = Uuid::new_v4();
        debug!(
            %session_id,
            windows = entries.len(),
            edges = edges.len(),
            "Grid session snapshot created"
        );

        Self {
            session_id,
            entries,
            edges,
            settings,
            last_snap_target: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn windows(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn edges(&self) -> &[SharedEdge] {
        &self.edges
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Record a frame for `id` without producing adjustments. Used both for
    /// externally observed moves (after propagation ran) and for frames the
    /// engine just wrote back.
    pub fn set_frame(&mut self, id: WindowId, frame: Rect) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.frame = frame;
        }
    }

    /// Flag a window whose frame the engine just wrote, so the next observed
    /// diff for it is ignored.
    pub fn mark_adjusting(&mut self, id: WindowId) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.is_adjusting = true;
        }
    }

    /// Drop all suppression flags. The poll loop calls this exactly once per
    /// tick, before diffing, regardless of how many windows changed.
    pub fn clear_adjusting_flags(&mut self) {
        for entry in &mut self.entries {
            entry.is_adjusting = false;
        }
    }

    /// Cascade one window's observed frame change across its shared edges.
    ///
    /// For each of the four frame edges that moved by more than half a unit,
    /// every neighbor bordering that edge gets the seam moved with it: the
    /// neighbor's near edge follows the delta, its far edge stays fixed.
    /// Returns one adjustment per affected neighbor; a window the engine is
    /// itself adjusting produces none. Neighbors that would fall below the
    /// minimum dimension are skipped individually.
    pub fn compute_propagation(
        &self,
        changed: WindowId,
        old_frame: &Rect,
        new_frame: &Rect,
    ) -> Vec<Adjustment> {
        let Some(entry) = self.window(changed) else {
            return Vec::new();
        };
        if entry.is_adjusting {
            trace!(window = changed, "Skipping self-originated frame change");
            return Vec::new();
        }

        let delta_left = new_frame.min_x() - old_frame.min_x();
        let delta_right = new_frame.max_x() - old_frame.max_x();
        let delta_top = new_frame.min_y() - old_frame.min_y();
        let delta_bottom = new_frame.max_y() - old_frame.max_y();

        // Working frames so a neighbor touched through several edges ends up
        // with one composed adjustment.
        let mut adjusted: HashMap<WindowId, Rect> = HashMap::new();
        let mut order: Vec<WindowId> = Vec::new();

        for edge in &self.edges {
            let (neighbor, delta, grows) = match edge.axis {
                EdgeAxis::Vertical => {
                    if edge.window_a == changed && delta_right.abs() > MOVE_EPSILON {
                        (edge.window_b, delta_right, false)
                    } else if edge.window_b == changed && delta_left.abs() > MOVE_EPSILON {
                        (edge.window_a, delta_left, true)
                    } else {
                        continue;
                    }
                }
                EdgeAxis::Horizontal => {
                    if edge.window_a == changed && delta_bottom.abs() > MOVE_EPSILON {
                        (edge.window_b, delta_bottom, false)
                    } else if edge.window_b == changed && delta_top.abs() > MOVE_EPSILON {
                        (edge.window_a, delta_top, true)
                    } else {
                        continue;
                    }
                }
            };

            let Some(neighbor_entry) = self.window(neighbor) else {
                continue;
            };
            let current = adjusted
                .get(&neighbor)
                .copied()
                .unwrap_or(neighbor_entry.frame);

            let proposed = shift_seam(&current, edge.axis, delta, grows);
            let resized = match edge.axis {
                EdgeAxis::Vertical => proposed.width(),
                EdgeAxis::Horizontal => proposed.height(),
            };
            if resized < self.settings.min_window_dimension {
                trace!(
                    window = neighbor,
                    resized,
                    "Propagation would undercut minimum dimension; edge skipped"
                );
                continue;
            }

            if !adjusted.contains_key(&neighbor) {
                order.push(neighbor);
            }
            adjusted.insert(neighbor, proposed);
        }

        order
            .into_iter()
            .map(|window_id| Adjustment {
                window_id,
                frame: adjusted[&window_id],
            })
            .collect()
    }

    /// Interactively drag the shared edge at `edge_index` by `delta` points.
    ///
    /// The delta first snaps to the nearest third or half of the enclosing
    /// screen dimension when within the snap detent distance. The snapped
    /// delta then applies to both sides of the active edge and to every
    /// other edge sharing the same coordinate within tolerance, so one
    /// border can resize all four quadrants at once. An edge whose windows
    /// would fall below the minimum dimension on the dragged axis is skipped
    /// whole; the remaining edges still move. Stored frames and the moved
    /// edges' coordinates are updated in place.
    pub fn drag_edge(&mut self, edge_index: usize, delta: f64, screen: &Rect) -> DragOutcome {
        let Some(active) = self.edges.get(edge_index).copied() else {
            return DragOutcome::default();
        };

        let (screen_start, screen_span) = match active.axis {
            EdgeAxis::Vertical => (screen.min_x(), screen.width()),
            EdgeAxis::Horizontal => (screen.min_y(), screen.height()),
        };

        let proposed = active.coordinate + delta;
        let mut snapped = proposed;
        let mut detent = None;
        for fraction in SNAP_FRACTIONS {
            let target = screen_start + screen_span * fraction;
            if (proposed - target).abs() <= self.settings.snap_detent {
                snapped = target;
                detent = Some(SnapDetent {
                    fraction,
                    coordinate: target,
                });
                break;
            }
        }

        // One-shot: signal only when a drag first lands on a new target.
        let snap_signal = match detent {
            Some(detent) if self.last_snap_target != Some(detent.coordinate) => {
                self.last_snap_target = Some(detent.coordinate);
                Some(detent)
            }
            Some(_) => None,
            None => {
                self.last_snap_target = None;
                None
            }
        };

        let applied_delta = snapped - active.coordinate;
        if applied_delta.abs() < f64::EPSILON {
            return DragOutcome {
                adjustments: Vec::new(),
                snap_signal,
            };
        }

        let colinear: Vec<usize> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| {
                edge.axis == active.axis
                    && (edge.coordinate - active.coordinate).abs() <= self.settings.edge_tolerance
            })
            .map(|(index, _)| index)
            .collect();

        let mut adjustments = Vec::new();
        for index in colinear {
            let edge = self.edges[index];
            let (Some(a), Some(b)) = (self.window(edge.window_a), self.window(edge.window_b))
            else {
                continue;
            };

            let a_frame = shift_seam(&a.frame, edge.axis, applied_delta, true);
            let b_frame = shift_seam(&b.frame, edge.axis, applied_delta, false);
            let (a_dim, b_dim) = match edge.axis {
                EdgeAxis::Vertical => (a_frame.width(), b_frame.width()),
                EdgeAxis::Horizontal => (a_frame.height(), b_frame.height()),
            };
            if a_dim < self.settings.min_window_dimension
                || b_dim < self.settings.min_window_dimension
            {
                trace!(
                    edge = index,
                    "Drag would undercut minimum dimension; edge skipped"
                );
                continue;
            }

            self.set_frame(edge.window_a, a_frame);
            self.set_frame(edge.window_b, b_frame);
            self.edges[index].coordinate += applied_delta;
            adjustments.push(Adjustment {
                window_id: edge.window_a,
                frame: a_frame,
            });
            adjustments.push(Adjustment {
                window_id: edge.window_b,
                frame: b_frame,
            });
        }

        DragOutcome {
            adjustments,
            snap_signal,
        }
    }
}

/// Move the seam-side edge of `frame` by `delta`, keeping the far edge
/// fixed. `grows` selects which side of the seam the window sits on: the
/// left/top window grows when the seam moves right/down, the right/bottom
/// window shifts its origin and shrinks.
fn shift_seam(frame: &Rect, axis: EdgeAxis, delta: f64, grows: bool) -> Rect {
    match (axis, grows) {
        (EdgeAxis::Vertical, true) => Rect::new(
            frame.min_x(),
            frame.min_y(),
            frame.width() + delta,
            frame.height(),
        ),
        (EdgeAxis::Vertical, false) => Rect::new(
            frame.min_x() + delta,
            frame.min_y(),
            frame.width() - delta,
            frame.height(),
        ),
        (EdgeAxis::Horizontal, true) => Rect::new(
            frame.min_x(),
            frame.min_y(),
            frame.width(),
            frame.height() + delta,
        ),
        (EdgeAxis::Horizontal, false) => Rect::new(
            frame.min_x(),
            frame.min_y() + delta,
            frame.width(),
            frame.height() - delta,
        ),
    }
}

fn overlap(start_a: f64, end_a: f64, start_b: f64, end_b: f64) -> Option<(f64, f64)> {
    let start = start_a.max(start_b);
    let end = end_a.min(end_b);
    (end > start).then_some((start, end))
}

/// `left`'s right border against `right`'s left border.
fn detect_vertical(
    left: &WindowEntry,
    right: &WindowEntry,
    settings: &GridSettings,
) -> Option<SharedEdge> {
    if (left.frame.max_x() - right.frame.min_x()).abs() > settings.edge_tolerance {
        return None;
    }
    let (span_start, span_end) = overlap(
        left.frame.min_y(),
        left.frame.max_y(),
        right.frame.min_y(),
        right.frame.max_y(),
    )?;
    if span_end - span_start < settings.overlap_threshold {
        return None;
    }
    Some(SharedEdge {
        window_a: left.id,
        window_b: right.id,
        axis: EdgeAxis::Vertical,
        coordinate: (left.frame.max_x() + right.frame.min_x()) / 2.0,
        span_start,
        span_end,
    })
}

/// `above`'s bottom border against `below`'s top border.
fn detect_horizontal(
    above: &WindowEntry,
    below: &WindowEntry,
    settings: &GridSettings,
) -> Option<SharedEdge> {
    if (above.frame.max_y() - below.frame.min_y()).abs() > settings.edge_tolerance {
        return None;
    }
    let (span_start, span_end) = overlap(
        above.frame.min_x(),
        above.frame.max_x(),
        below.frame.min_x(),
        below.frame.max_x(),
    )?;
    if span_end - span_start < settings.overlap_threshold {
        return None;
    }
    Some(SharedEdge {
        window_a: above.id,
        window_b: below.id,
        axis: EdgeAxis::Horizontal,
        coordinate: (above.frame.max_y() + below.frame.min_y()) / 2.0,
        span_start,
        span_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TilePosition;

    fn settings() -> GridSettings {
        GridSettings::default()
    }

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 1440.0, 900.0)
    }

    fn halves(gap: f64) -> Vec<(WindowId, Rect)> {
        let area = screen();
        vec![
            (1, TilePosition::LeftHalf.frame(&area, 0.0, gap).unwrap()),
            (2, TilePosition::RightHalf.frame(&area, 0.0, gap).unwrap()),
        ]
    }

    fn quarters(gap: f64) -> Vec<(WindowId, Rect)> {
        let area = screen();
        vec![
            (1, TilePosition::TopLeftQuarter.frame(&area, 0.0, gap).unwrap()),
            (2, TilePosition::TopRightQuarter.frame(&area, 0.0, gap).unwrap()),
            (3, TilePosition::BottomLeftQuarter.frame(&area, 0.0, gap).unwrap()),
            (4, TilePosition::BottomRightQuarter.frame(&area, 0.0, gap).unwrap()),
        ]
    }

    /// Re-run the adjacency test every edge passed at construction.
    fn assert_seams_intact(grid: &GridSnapshot) {
        for edge in grid.edges() {
            let a = grid.window(edge.window_a).unwrap();
            let b = grid.window(edge.window_b).unwrap();
            match edge.axis {
                EdgeAxis::Vertical => {
                    assert!(
                        (a.frame.max_x() - b.frame.min_x()).abs()
                            <= grid.settings.edge_tolerance,
                        "vertical seam opened between {} and {}",
                        edge.window_a,
                        edge.window_b
                    );
                }
                EdgeAxis::Horizontal => {
                    assert!(
                        (a.frame.max_y() - b.frame.min_y()).abs()
                            <= grid.settings.edge_tolerance,
                        "horizontal seam opened between {} and {}",
                        edge.window_a,
                        edge.window_b
                    );
                }
            }
        }
    }

    #[test]
    fn two_halves_share_exactly_one_vertical_edge() {
        let grid = GridSnapshot::new(halves(4.0), settings());
        assert_eq!(grid.edges().len(), 1);

        let edge = grid.edges()[0];
        assert_eq!(edge.axis, EdgeAxis::Vertical);
        assert_eq!(edge.window_a, 1);
        assert_eq!(edge.window_b, 2);
        assert_eq!(edge.coordinate, 720.0);
    }

    #[test]
    fn four_quarters_share_four_edges() {
        let grid = GridSnapshot::new(quarters(4.0), settings());
        let vertical = grid
            .edges()
            .iter()
            .filter(|edge| edge.axis == EdgeAxis::Vertical)
            .count();
        let horizontal = grid
            .edges()
            .iter()
            .filter(|edge| edge.axis == EdgeAxis::Horizontal)
            .count();

        assert_eq!(grid.edges().len(), 4);
        assert_eq!(vertical, 2);
        assert_eq!(horizontal, 2);
    }

    #[test]
    fn diagonal_quarters_share_nothing() {
        let area = screen();
        let grid = GridSnapshot::new(
            vec![
                (1, TilePosition::TopLeftQuarter.frame(&area, 0.0, 4.0).unwrap()),
                (2, TilePosition::BottomRightQuarter.frame(&area, 0.0, 4.0).unwrap()),
            ],
            settings(),
        );
        assert!(grid.edges().is_empty());
    }

    #[test]
    fn corner_touching_windows_do_not_count() {
        // Vertical borders line up but the shared span is only 8 points.
        let grid = GridSnapshot::new(
            vec![
                (1, Rect::new(0.0, 0.0, 400.0, 300.0)),
                (2, Rect::new(400.0, 292.0, 400.0, 300.0)),
            ],
            settings(),
        );
        assert!(grid.edges().is_empty());
    }

    #[test]
    fn growing_the_left_half_shifts_the_right_half() {
        let grid = GridSnapshot::new(halves(4.0), settings());
        let old = grid.window(1).unwrap().frame;
        let new = Rect::new(old.min_x(), old.min_y(), old.width() + 50.0, old.height());

        let adjustments = grid.compute_propagation(1, &old, &new);
        assert_eq!(adjustments.len(), 1);

        let adjustment = adjustments[0];
        let right_old = grid.window(2).unwrap().frame;
        assert_eq!(adjustment.window_id, 2);
        assert_eq!(adjustment.frame.min_x(), right_old.min_x() + 50.0);
        assert_eq!(adjustment.frame.width(), right_old.width() - 50.0);
        assert_eq!(adjustment.frame.min_y(), right_old.min_y());
        assert_eq!(adjustment.frame.height(), right_old.height());
    }

    #[test]
    fn shrinking_the_right_half_grows_the_left_half() {
        let grid = GridSnapshot::new(halves(4.0), settings());
        let old = grid.window(2).unwrap().frame;
        // Left border moves 30 to the right.
        let new = Rect::new(old.min_x() + 30.0, old.min_y(), old.width() - 30.0, old.height());

        let adjustments = grid.compute_propagation(2, &old, &new);
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments[0].window_id, 1);

        let left_old = grid.window(1).unwrap().frame;
        assert_eq!(adjustments[0].frame.width(), left_old.width() + 30.0);
        assert_eq!(adjustments[0].frame.min_x(), left_old.min_x());
    }

    #[test]
    fn adjusting_flag_suppresses_the_echo() {
        let mut grid = GridSnapshot::new(halves(4.0), settings());
        let old = grid.window(1).unwrap().frame;
        let new = Rect::new(old.min_x(), old.min_y(), old.width() + 50.0, old.height());

        grid.mark_adjusting(1);
        assert!(grid.compute_propagation(1, &old, &new).is_empty());

        grid.clear_adjusting_flags();
        assert_eq!(grid.compute_propagation(1, &old, &new).len(), 1);
    }

    #[test]
    fn unknown_window_produces_nothing() {
        let grid = GridSnapshot::new(halves(4.0), settings());
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(grid.compute_propagation(99, &frame, &frame).is_empty());
    }

    #[test]
    fn sub_epsilon_jitter_is_ignored() {
        let grid = GridSnapshot::new(halves(4.0), settings());
        let old = grid.window(1).unwrap().frame;
        let new = Rect::new(old.min_x(), old.min_y(), old.width() + 0.4, old.height());
        assert!(grid.compute_propagation(1, &old, &new).is_empty());
    }

    #[test]
    fn propagation_skips_neighbors_that_would_collapse() {
        let grid = GridSnapshot::new(halves(4.0), settings());
        let old = grid.window(1).unwrap().frame;
        // Leaves the right half 718 - 600 = 118 wide, under the 200 minimum.
        let new = Rect::new(old.min_x(), old.min_y(), old.width() + 600.0, old.height());
        assert!(grid.compute_propagation(1, &old, &new).is_empty());
    }

    #[test]
    fn quarter_corner_drag_adjusts_both_neighbors_once_each() {
        let grid = GridSnapshot::new(quarters(4.0), settings());
        let old = grid.window(1).unwrap().frame;
        // Both the right and bottom borders of the top-left quarter move.
        let new = Rect::new(
            old.min_x(),
            old.min_y(),
            old.width() + 40.0,
            old.height() + 25.0,
        );

        let adjustments = grid.compute_propagation(1, &old, &new);
        let ids: Vec<WindowId> = adjustments.iter().map(|adj| adj.window_id).collect();
        assert_eq!(adjustments.len(), 2);
        assert!(ids.contains(&2));
        assert!(ids.contains(&3));

        let top_right = adjustments.iter().find(|adj| adj.window_id == 2).unwrap();
        assert_eq!(top_right.frame.min_x(), 722.0 + 40.0);
        let bottom_left = adjustments.iter().find(|adj| adj.window_id == 3).unwrap();
        assert_eq!(bottom_left.frame.min_y(), 452.0 + 25.0);
    }

    #[test]
    fn propagation_keeps_every_seam_within_tolerance() {
        let mut grid = GridSnapshot::new(quarters(4.0), settings());
        let old = grid.window(1).unwrap().frame;
        let new = Rect::new(old.min_x(), old.min_y(), old.width() + 40.0, old.height());

        let adjustments = grid.compute_propagation(1, &old, &new);
        grid.set_frame(1, new);
        for adjustment in adjustments {
            grid.set_frame(adjustment.window_id, adjustment.frame);
            grid.mark_adjusting(adjustment.window_id);
        }
        assert_seams_intact(&grid);
    }

    #[test]
    fn drag_applies_to_both_sides_of_the_edge() {
        let mut grid = GridSnapshot::new(halves(4.0), settings());
        let outcome = grid.drag_edge(0, 100.0, &screen());

        assert_eq!(outcome.adjustments.len(), 2);
        assert_eq!(grid.window(1).unwrap().frame.width(), 818.0);
        assert_eq!(grid.window(2).unwrap().frame.min_x(), 822.0);
        assert_eq!(grid.window(2).unwrap().frame.width(), 618.0);
        assert_eq!(grid.edges()[0].coordinate, 820.0);
        assert_seams_intact(&grid);
    }

    #[test]
    fn drag_snaps_to_screen_fractions() {
        let mut grid = GridSnapshot::new(halves(4.0), settings());
        // 720 + 235 = 955, within the 10-point detent of 2/3 * 1440 = 960.
        let outcome = grid.drag_edge(0, 235.0, &screen());

        let signal = outcome.snap_signal.expect("first arrival should signal");
        assert_eq!(signal.coordinate, 960.0);
        assert_eq!(grid.edges()[0].coordinate, 960.0);
        assert_eq!(grid.window(1).unwrap().frame.width(), 718.0 + 240.0);
    }

    #[test]
    fn snap_signal_fires_once_per_detent() {
        let mut grid = GridSnapshot::new(halves(4.0), settings());
        let first = grid.drag_edge(0, 235.0, &screen());
        assert!(first.snap_signal.is_some());

        // Still inside the same detent: snapped delta is zero, no re-fire.
        let second = grid.drag_edge(0, 5.0, &screen());
        assert!(second.snap_signal.is_none());
        assert!(second.adjustments.is_empty());

        // Leave the detent, come back, and it fires again.
        let away = grid.drag_edge(0, -100.0, &screen());
        assert!(away.snap_signal.is_none());
        let back = grid.drag_edge(0, 100.0, &screen());
        assert!(back.snap_signal.is_some());
    }

    #[test]
    fn dragging_the_center_seam_moves_all_four_quadrants() {
        let mut grid = GridSnapshot::new(quarters(4.0), settings());
        let vertical_index = grid
            .edges()
            .iter()
            .position(|edge| edge.axis == EdgeAxis::Vertical)
            .unwrap();

        let outcome = grid.drag_edge(vertical_index, 100.0, &screen());
        assert_eq!(outcome.adjustments.len(), 4);

        for id in [1, 3] {
            assert_eq!(grid.window(id).unwrap().frame.width(), 818.0);
        }
        for id in [2, 4] {
            assert_eq!(grid.window(id).unwrap().frame.min_x(), 822.0);
        }
        assert_seams_intact(&grid);
    }

    #[test]
    fn drag_below_minimum_dimension_is_skipped() {
        let mut grid = GridSnapshot::new(halves(4.0), settings());
        // Would leave the right half 718 - 540 = 178 wide.
        let outcome = grid.drag_edge(0, 540.0, &screen());

        assert!(outcome.adjustments.is_empty());
        assert_eq!(grid.window(2).unwrap().frame.width(), 718.0);
        assert_eq!(grid.edges()[0].coordinate, 720.0);
    }

    #[test]
    fn drag_with_stale_edge_index_is_a_no_op() {
        let mut grid = GridSnapshot::new(halves(4.0), settings());
        assert_eq!(grid.drag_edge(7, 50.0, &screen()), DragOutcome::default());
    }
}
