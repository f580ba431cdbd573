use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gesture recognition tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureSettings {
    /// Accumulated scroll distance required before a swipe classifies
    pub dead_zone: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self { dead_zone: 30.0 }
    }
}

/// Tile frame layout tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Margin kept between tiled windows and the visible screen edge
    pub margin: f64,
    /// Gap left between two tiled windows at a shared seam
    pub gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        // The gap must stay within the grid edge tolerance or tiled
        // neighbors would never count as adjacent.
        Self {
            margin: 0.0,
            gap: 4.0,
        }
    }
}

/// Zoom double-tap timing and expansion tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomSettings {
    /// Maximum gap between the first release and the second press
    pub sequence_timeout_ms: u64,
    /// Holds no longer than this still count as a hold on release
    pub hold_threshold_ms: u64,
    /// Per-dimension growth applied to a zoomed tile frame
    pub growth_factor: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            sequence_timeout_ms: 400,
            hold_threshold_ms: 500,
            growth_factor: 1.5,
        }
    }
}

impl ZoomSettings {
    pub fn sequence_timeout(&self) -> Duration {
        Duration::from_millis(self.sequence_timeout_ms)
    }

    pub fn hold_threshold(&self) -> Duration {
        Duration::from_millis(self.hold_threshold_ms)
    }
}

/// Grid session tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridSettings {
    /// Two borders within this distance count as one shared edge
    pub edge_tolerance: f64,
    /// Minimum perpendicular overlap before borders count as shared
    pub overlap_threshold: f64,
    /// Drag distance within which an edge snaps to a screen fraction
    pub snap_detent: f64,
    /// Windows are never resized below this on the dragged axis
    pub min_window_dimension: f64,
    /// Cadence of the frame-diffing poll while a session is active
    pub poll_interval_ms: u64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            edge_tolerance: 6.0,
            overlap_threshold: 10.0,
            snap_detent: 10.0,
            min_window_dimension: 200.0,
            poll_interval_ms: 16,
        }
    }
}

impl GridSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Root settings tree loaded from the user's TOML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub gesture: GestureSettings,
    pub layout: LayoutSettings,
    pub zoom: ZoomSettings,
    pub grid: GridSettings,
}

impl Settings {
    /// Check every tunable for a sane range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.gesture.dead_zone <= 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "gesture.dead_zone",
                message: "must be positive".into(),
            });
        }
        if self.layout.margin < 0.0 || self.layout.gap < 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "layout",
                message: "margin and gap must not be negative".into(),
            });
        }
        if self.zoom.sequence_timeout_ms == 0 || self.zoom.hold_threshold_ms == 0 {
            return Err(SettingsError::OutOfRange {
                field: "zoom",
                message: "timeouts must be positive".into(),
            });
        }
        if self.zoom.growth_factor < 1.0 {
            return Err(SettingsError::OutOfRange {
                field: "zoom.growth_factor",
                message: "must be at least 1.0".into(),
            });
        }
        if self.grid.edge_tolerance < 0.0 || self.grid.overlap_threshold < 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "grid",
                message: "tolerances must not be negative".into(),
            });
        }
        if self.grid.min_window_dimension <= 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "grid.min_window_dimension",
                message: "must be positive".into(),
            });
        }
        if !(1..=1000).contains(&self.grid.poll_interval_ms) {
            return Err(SettingsError::OutOfRange {
                field: "grid.poll_interval_ms",
                message: "must be between 1 and 1000".into(),
            });
        }
        Ok(())
    }
}

/// Errors raised while validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {field}: {message}")]
    OutOfRange {
        field: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn defaults_match_the_tuned_constants() {
        let settings = Settings::default();
        assert_eq!(settings.gesture.dead_zone, 30.0);
        assert_eq!(settings.zoom.sequence_timeout(), Duration::from_millis(400));
        assert_eq!(settings.zoom.hold_threshold(), Duration::from_millis(500));
        assert_eq!(settings.grid.edge_tolerance, 6.0);
        assert_eq!(settings.grid.min_window_dimension, 200.0);
    }

    #[test]
    fn rejects_nonsense_ranges() {
        let mut settings = Settings::default();
        settings.gesture.dead_zone = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.zoom.growth_factor = 0.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.poll_interval_ms = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [gesture]
            dead_zone = 45.0

            [layout]
            gap = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.gesture.dead_zone, 45.0);
        assert_eq!(settings.layout.gap, 4.0);
        assert_eq!(settings.grid, GridSettings::default());
    }
}
