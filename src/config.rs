//! Timeline configuration
//!
//! Initial values and layout for one timeline instance. Loaded from JSON;
//! every field falls back to its default when absent.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{TimelineError, TimelineResult};
use crate::state::DEFAULT_DURATION;

/// Pixel sizes of the timeline grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the left column (controls and track names).
    pub track_column_width: f64,
    /// Height of the top row (controls and ruler).
    pub controls_height: f64,
    /// Horizontal padding inside the ruler and keyframe list.
    pub ruler_padding_x: f64,
    /// Total widget height.
    pub height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            track_column_width: 300.0,
            controls_height: 40.0,
            ruler_padding_x: 16.0,
            height: 300.0,
        }
    }
}

impl LayoutConfig {
    /// Left edge of time zero, measured from the widget's left edge.
    pub fn playhead_origin_px(&self) -> f64 {
        self.track_column_width + self.ruler_padding_x
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Starting playhead position in milliseconds.
    pub initial_time: i64,
    /// Starting duration in milliseconds.
    pub initial_duration: i64,
    /// Names shown in the track list.
    pub tracks: Vec<String>,
    /// Number of keyframe rows.
    pub segment_count: usize,
    pub layout: LayoutConfig,
}

fn default_tracks() -> Vec<String> {
    ('A'..='J').map(|c| format!("Track {c}")).collect()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            initial_time: 0,
            initial_duration: DEFAULT_DURATION,
            tracks: default_tracks(),
            segment_count: 10,
            layout: LayoutConfig::default(),
        }
    }
}

impl TimelineConfig {
    pub fn from_json(json: &str) -> TimelineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> TimelineResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults when it is missing or
    /// malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(TimelineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                tracing::warn!("Failed to load timeline config {:?}: {}", path, err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimelineConfig::default();
        assert_eq!(config.initial_time, 0);
        assert_eq!(config.initial_duration, 2000);
        assert_eq!(config.tracks.len(), 10);
        assert_eq!(config.tracks[0], "Track A");
        assert_eq!(config.tracks[9], "Track J");
        assert_eq!(config.layout.playhead_origin_px(), 316.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TimelineConfig::from_json(r#"{ "initial_duration": 1000, "layout": { "height": 420 } }"#).unwrap();
        assert_eq!(config.initial_duration, 1000);
        assert_eq!(config.segment_count, 10);
        assert_eq!(config.layout.height, 420.0);
        assert_eq!(config.layout.track_column_width, 300.0);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = TimelineConfig::from_json("{ not json");
        assert!(matches!(result, Err(TimelineError::Config(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join(format!("scrub-timeline-missing-{}.json", uuid::Uuid::new_v4()));
        assert_eq!(TimelineConfig::load_or_default(&path), TimelineConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = TimelineConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed = TimelineConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
