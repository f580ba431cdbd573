use serde::{Deserialize, Serialize};

use crate::models::geometry::Rect;

/// Canonical screen regions a window can snap to.
///
/// `Fullscreen` and `Restore` are actions rather than frame-bearing states:
/// they carry no target rectangle and callers must branch on
/// [`TilePosition::needs_frame`] before asking for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TilePosition {
    Maximize,
    LeftHalf,
    RightHalf,
    TopHalf,
    BottomHalf,
    TopLeftQuarter,
    TopRightQuarter,
    BottomLeftQuarter,
    BottomRightQuarter,
    Fullscreen,
    Restore,
}

impl TilePosition {
    /// All frame-bearing variants, in a stable order. Used by tests and the
    /// zoom calculator's exhaustive checks.
    pub const FRAMED: [TilePosition; 9] = [
        TilePosition::Maximize,
        TilePosition::LeftHalf,
        TilePosition::RightHalf,
        TilePosition::TopHalf,
        TilePosition::BottomHalf,
        TilePosition::TopLeftQuarter,
        TilePosition::TopRightQuarter,
        TilePosition::BottomLeftQuarter,
        TilePosition::BottomRightQuarter,
    ];

    /// Whether this variant maps to a target rectangle at all.
    pub fn needs_frame(&self) -> bool {
        !matches!(self, TilePosition::Fullscreen | TilePosition::Restore)
    }

    /// Compute the target rectangle for this position inside `visible`.
    ///
    /// Pure function of its inputs. Halves and quarters sharing a seam come
    /// out exactly `gap` apart; every frame keeps `margin` from the visible
    /// edge it touches. Returns `None` for `Fullscreen` and `Restore`.
    pub fn frame(&self, visible: &Rect, margin: f64, gap: f64) -> Option<Rect> {
        let half_width = (visible.width() - 2.0 * margin - gap) / 2.0;
        let half_height = (visible.height() - 2.0 * margin - gap) / 2.0;
        let full_width = visible.width() - 2.0 * margin;
        let full_height = visible.height() - 2.0 * margin;

        let left = visible.min_x() + margin;
        let top = visible.min_y() + margin;
        let right_col = left + half_width + gap;
        let bottom_row = top + half_height + gap;

        let frame = match self {
            TilePosition::Maximize => Rect::new(left, top, full_width, full_height),
            TilePosition::LeftHalf => Rect::new(left, top, half_width, full_height),
            TilePosition::RightHalf => Rect::new(right_col, top, half_width, full_height),
            TilePosition::TopHalf => Rect::new(left, top, full_width, half_height),
            TilePosition::BottomHalf => Rect::new(left, bottom_row, full_width, half_height),
            TilePosition::TopLeftQuarter => Rect::new(left, top, half_width, half_height),
            TilePosition::TopRightQuarter => Rect::new(right_col, top, half_width, half_height),
            TilePosition::BottomLeftQuarter => Rect::new(left, bottom_row, half_width, half_height),
            TilePosition::BottomRightQuarter => {
                Rect::new(right_col, bottom_row, half_width, half_height)
            }
            TilePosition::Fullscreen | TilePosition::Restore => return None,
        };

        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible() -> Rect {
        Rect::new(0.0, 25.0, 1440.0, 875.0)
    }

    #[test]
    fn actions_carry_no_frame() {
        assert!(!TilePosition::Fullscreen.needs_frame());
        assert!(!TilePosition::Restore.needs_frame());
        assert!(TilePosition::Fullscreen.frame(&visible(), 10.0, 4.0).is_none());
        assert!(TilePosition::Restore.frame(&visible(), 10.0, 4.0).is_none());
    }

    #[test]
    fn halves_tile_the_visible_area_with_exact_gap() {
        let area = visible();
        let left = TilePosition::LeftHalf.frame(&area, 10.0, 4.0).unwrap();
        let right = TilePosition::RightHalf.frame(&area, 10.0, 4.0).unwrap();

        assert_eq!(left.min_x(), area.min_x() + 10.0);
        assert_eq!(right.max_x(), area.max_x() - 10.0);
        assert_eq!(right.min_x() - left.max_x(), 4.0);
        assert_eq!(left.size, right.size);
        assert_eq!(left.height(), area.height() - 20.0);
    }

    #[test]
    fn vertical_halves_share_a_horizontal_seam() {
        let area = visible();
        let top = TilePosition::TopHalf.frame(&area, 8.0, 6.0).unwrap();
        let bottom = TilePosition::BottomHalf.frame(&area, 8.0, 6.0).unwrap();

        assert_eq!(bottom.min_y() - top.max_y(), 6.0);
        assert_eq!(bottom.max_y(), area.max_y() - 8.0);
    }

    #[test]
    fn quarters_meet_both_seams() {
        let area = visible();
        let tl = TilePosition::TopLeftQuarter.frame(&area, 10.0, 4.0).unwrap();
        let tr = TilePosition::TopRightQuarter.frame(&area, 10.0, 4.0).unwrap();
        let bl = TilePosition::BottomLeftQuarter
            .frame(&area, 10.0, 4.0)
            .unwrap();
        let br = TilePosition::BottomRightQuarter
            .frame(&area, 10.0, 4.0)
            .unwrap();

        assert_eq!(tr.min_x() - tl.max_x(), 4.0);
        assert_eq!(bl.min_y() - tl.max_y(), 4.0);
        assert_eq!(br.min_x(), tr.min_x());
        assert_eq!(br.min_y(), bl.min_y());
        assert_eq!(br.max_x(), area.max_x() - 10.0);
        assert_eq!(br.max_y(), area.max_y() - 10.0);
    }

    #[test]
    fn maximize_is_the_visible_area_inset_by_margin() {
        let area = visible();
        let max = TilePosition::Maximize.frame(&area, 12.0, 4.0).unwrap();
        assert_eq!(max, area.inset(12.0));
    }

    #[test]
    fn zero_margin_zero_gap_tiles_exactly() {
        let area = Rect::new(0.0, 0.0, 1440.0, 900.0);
        let left = TilePosition::LeftHalf.frame(&area, 0.0, 0.0).unwrap();
        let right = TilePosition::RightHalf.frame(&area, 0.0, 0.0).unwrap();
        assert_eq!(left.max_x(), right.min_x());
        assert_eq!(left.width() + right.width(), area.width());
    }
}
