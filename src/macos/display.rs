use std::sync::RwLock;

use crate::models::{Point, Rect};
use crate::{Result, SwipeTileError};

/// One attached display as reported by the platform
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayInfo {
    pub id: String,
    /// Full display bounds
    pub frame: Rect,
    /// Bounds minus the menu bar and Dock, where tiles may be placed
    pub visible_frame: Rect,
    pub is_primary: bool,
}

/// Abstraction over display enumeration and visible-area lookup
pub trait DisplayProvider: Send + Sync {
    /// Snapshot all displays currently attached
    fn displays(&self) -> Result<Vec<DisplayInfo>>;

    /// Visible frame of the display containing `point`
    fn visible_frame_at(&self, point: Point) -> Result<Option<Rect>> {
        Ok(self
            .displays()?
            .into_iter()
            .find(|display| display.frame.contains(point))
            .map(|display| display.visible_frame))
    }

    /// Visible frame of the display a window frame belongs to, chosen by the
    /// frame's center point.
    fn visible_frame_for(&self, frame: &Rect) -> Result<Option<Rect>> {
        self.visible_frame_at(frame.center())
    }
}

/// Default system-backed display provider placeholder
#[derive(Debug, Default)]
pub struct SystemDisplayProvider;

impl SystemDisplayProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayProvider for SystemDisplayProvider {
    fn displays(&self) -> Result<Vec<DisplayInfo>> {
        // The platform implementation populates this from the window server.
        // Here we surface a friendly error so higher layers can fall back to
        // safe defaults.
        Err(SwipeTileError::MacOSAPIError(
            "SystemDisplayProvider is not implemented in this environment".into(),
        )
        .into())
    }
}

/// In-memory display provider for tests and the stubbed entry point
#[derive(Debug, Default)]
pub struct InMemoryDisplayProvider {
    displays: RwLock<Vec<DisplayInfo>>,
}

impl InMemoryDisplayProvider {
    pub fn new_with(displays: Vec<DisplayInfo>) -> Self {
        Self {
            displays: RwLock::new(displays),
        }
    }

    /// Single 1440x900 display with a 25-point menu bar, the common default
    /// in tests.
    pub fn single_display() -> Self {
        Self::new_with(vec![DisplayInfo {
            id: "main".to_string(),
            frame: Rect::new(0.0, 0.0, 1440.0, 900.0),
            visible_frame: Rect::new(0.0, 25.0, 1440.0, 875.0),
            is_primary: true,
        }])
    }
}

impl DisplayProvider for InMemoryDisplayProvider {
    fn displays(&self) -> Result<Vec<DisplayInfo>> {
        Ok(self.displays.read().expect("poisoned lock").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_frame_lookup_follows_the_point() {
        let provider = InMemoryDisplayProvider::new_with(vec![
            DisplayInfo {
                id: "main".to_string(),
                frame: Rect::new(0.0, 0.0, 1440.0, 900.0),
                visible_frame: Rect::new(0.0, 25.0, 1440.0, 875.0),
                is_primary: true,
            },
            DisplayInfo {
                id: "side".to_string(),
                frame: Rect::new(1440.0, 0.0, 1920.0, 1080.0),
                visible_frame: Rect::new(1440.0, 0.0, 1920.0, 1080.0),
                is_primary: false,
            },
        ]);

        let on_main = provider.visible_frame_at(Point::new(100.0, 100.0)).unwrap();
        assert_eq!(on_main.unwrap().min_y(), 25.0);

        let on_side = provider
            .visible_frame_at(Point::new(2000.0, 500.0))
            .unwrap();
        assert_eq!(on_side.unwrap().min_x(), 1440.0);

        let nowhere = provider
            .visible_frame_at(Point::new(-50.0, -50.0))
            .unwrap();
        assert!(nowhere.is_none());
    }

    #[test]
    fn window_frames_resolve_by_center() {
        let provider = InMemoryDisplayProvider::single_display();
        let frame = Rect::new(100.0, 100.0, 600.0, 400.0);
        let visible = provider.visible_frame_for(&frame).unwrap();
        assert!(visible.is_some());
    }

    #[test]
    fn system_provider_reports_unavailable() {
        assert!(SystemDisplayProvider::new().displays().is_err());
    }
}
