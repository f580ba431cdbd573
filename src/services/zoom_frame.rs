use crate::models::{Point, Rect, Size, TilePosition};

/// Computes the expanded frame a zoomed tiled window grows into.
///
/// Growth is anchored to whichever corner or edge the tile position implies:
/// a quarter keeps its outer corner fixed and grows toward screen center, a
/// half keeps its outer edge fixed and re-centers on the free axis. The
/// result is capped at the visible dimensions and translated (never shrunk)
/// fully inside the visible frame.
#[derive(Debug, Clone)]
pub struct ZoomFrameCalculator {
    growth_factor: f64,
}

impl ZoomFrameCalculator {
    pub fn new(growth_factor: f64) -> Self {
        Self { growth_factor }
    }

    pub fn expanded_frame(
        &self,
        tile_frame: &Rect,
        position: TilePosition,
        visible: &Rect,
    ) -> Rect {
        // Already full-size, or handled by the fullscreen path.
        if matches!(
            position,
            TilePosition::Maximize | TilePosition::Fullscreen | TilePosition::Restore
        ) {
            return *tile_frame;
        }

        let width = (tile_frame.width() * self.growth_factor).min(visible.width());
        let height = (tile_frame.height() * self.growth_factor).min(visible.height());

        let center_x = tile_frame.center().x - width / 2.0;
        let center_y = tile_frame.center().y - height / 2.0;
        let pin_right = tile_frame.max_x() - width;
        let pin_bottom = tile_frame.max_y() - height;

        let origin = match position {
            TilePosition::TopLeftQuarter => Point::new(tile_frame.min_x(), tile_frame.min_y()),
            TilePosition::TopRightQuarter => Point::new(pin_right, tile_frame.min_y()),
            TilePosition::BottomLeftQuarter => Point::new(tile_frame.min_x(), pin_bottom),
            TilePosition::BottomRightQuarter => Point::new(pin_right, pin_bottom),
            TilePosition::LeftHalf => Point::new(tile_frame.min_x(), center_y),
            TilePosition::RightHalf => Point::new(pin_right, center_y),
            TilePosition::TopHalf => Point::new(center_x, tile_frame.min_y()),
            TilePosition::BottomHalf => Point::new(center_x, pin_bottom),
            TilePosition::Maximize | TilePosition::Fullscreen | TilePosition::Restore => {
                unreachable!("handled above")
            }
        };

        Rect {
            origin,
            size: Size::new(width, height),
        }
        .clamped_within(visible)
    }
}
