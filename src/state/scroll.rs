//! Scroll mirroring between the ruler, the track list and the keyframe list.
//!
//! The three viewports form two pairs:
//! - ruler ↔ keyframe list on the horizontal axis
//! - track list ↔ keyframe list on the vertical axis
//!
//! A user scroll on one viewport produces direct offset assignments for its
//! peers. Assignments are recorded with [`ScrollSynchronizer::apply_programmatic`],
//! which never cascades, so a write can not bounce back to its source.

use serde::{Deserialize, Serialize};

/// One of the three scrollable regions of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    Ruler,
    TrackList,
    KeyframeList,
}

impl Viewport {
    pub const ALL: [Viewport; 3] = [Viewport::Ruler, Viewport::TrackList, Viewport::KeyframeList];

    /// Suffix used when building DOM element ids.
    pub fn slug(self) -> &'static str {
        match self {
            Viewport::Ruler => "ruler",
            Viewport::TrackList => "track-list",
            Viewport::KeyframeList => "keyframe-list",
        }
    }
}

/// Scroll axis, serialized as the DOM property it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "left")]
    Horizontal,
    #[serde(rename = "top")]
    Vertical,
}

/// `scrollLeft` / `scrollTop` of one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            left: left.max(0.0),
            top: top.max(0.0),
        }
    }

    fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.left = value.max(0.0),
            Axis::Vertical => self.top = value.max(0.0),
        }
    }
}

/// A plain offset assignment on a peer viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollWrite {
    pub viewport: Viewport,
    pub axis: Axis,
    pub value: f64,
}

#[derive(Debug, Clone, Copy)]
struct SyncPair {
    a: Viewport,
    b: Viewport,
    axis: Axis,
}

impl SyncPair {
    fn peer_of(&self, source: Viewport) -> Option<Viewport> {
        if source == self.a {
            Some(self.b)
        } else if source == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

const SYNC_PAIRS: [SyncPair; 2] = [
    SyncPair {
        a: Viewport::Ruler,
        b: Viewport::KeyframeList,
        axis: Axis::Horizontal,
    },
    SyncPair {
        a: Viewport::TrackList,
        b: Viewport::KeyframeList,
        axis: Axis::Vertical,
    },
];

/// Last known offsets of the three viewports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSynchronizer {
    ruler: ScrollOffset,
    track_list: ScrollOffset,
    keyframe_list: ScrollOffset,
    ruler_client_width: Option<f64>,
}

impl ScrollSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self, viewport: Viewport) -> ScrollOffset {
        match viewport {
            Viewport::Ruler => self.ruler,
            Viewport::TrackList => self.track_list,
            Viewport::KeyframeList => self.keyframe_list,
        }
    }

    fn offset_mut(&mut self, viewport: Viewport) -> &mut ScrollOffset {
        match viewport {
            Viewport::Ruler => &mut self.ruler,
            Viewport::TrackList => &mut self.track_list,
            Viewport::KeyframeList => &mut self.keyframe_list,
        }
    }

    /// Visible width of the ruler, once the host has measured it.
    pub fn ruler_client_width(&self) -> Option<f64> {
        self.ruler_client_width
    }

    pub fn set_ruler_client_width(&mut self, width: f64) {
        self.ruler_client_width = Some(width.max(0.0));
    }

    /// Record a user-driven scroll of `source` and return the assignments its
    /// peers need. The source itself is never written.
    ///
    /// Peers already sitting at the requested offset are skipped, so the
    /// echo scroll event a DOM fires after an assignment settles at once.
    pub fn on_user_scroll(&mut self, source: Viewport, offset: ScrollOffset) -> Vec<ScrollWrite> {
        *self.offset_mut(source) = ScrollOffset::new(offset.left, offset.top);
        let recorded = self.offset(source);

        let mut writes = Vec::new();
        for pair in SYNC_PAIRS {
            let Some(peer) = pair.peer_of(source) else {
                continue;
            };
            let value = recorded.get(pair.axis);
            if self.offset(peer).get(pair.axis) == value {
                continue;
            }
            let write = ScrollWrite {
                viewport: peer,
                axis: pair.axis,
                value,
            };
            self.apply_programmatic(write);
            writes.push(write);
        }
        writes
    }

    /// Record a direct offset assignment. Does not propagate further.
    pub fn apply_programmatic(&mut self, write: ScrollWrite) {
        self.offset_mut(write.viewport).set(write.axis, write.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler_scroll_moves_keyframe_list_horizontally() {
        let mut sync = ScrollSynchronizer::new();
        let writes = sync.on_user_scroll(Viewport::Ruler, ScrollOffset::new(100.0, 0.0));
        assert_eq!(
            writes,
            vec![ScrollWrite {
                viewport: Viewport::KeyframeList,
                axis: Axis::Horizontal,
                value: 100.0,
            }]
        );
        assert_eq!(sync.offset(Viewport::KeyframeList).left, 100.0);
        assert_eq!(sync.offset(Viewport::TrackList), ScrollOffset::default());
    }

    #[test]
    fn test_keyframe_list_scroll_moves_both_peers() {
        let mut sync = ScrollSynchronizer::new();
        let writes = sync.on_user_scroll(Viewport::KeyframeList, ScrollOffset::new(40.0, 100.0));
        assert_eq!(writes.len(), 2);
        assert_eq!(sync.offset(Viewport::Ruler).left, 40.0);
        assert_eq!(sync.offset(Viewport::TrackList).top, 100.0);
        // Orthogonal axes are left alone.
        assert_eq!(sync.offset(Viewport::Ruler).top, 0.0);
        assert_eq!(sync.offset(Viewport::TrackList).left, 0.0);
    }

    #[test]
    fn test_track_list_scroll_only_touches_keyframe_top() {
        let mut sync = ScrollSynchronizer::new();
        sync.on_user_scroll(Viewport::KeyframeList, ScrollOffset::new(250.0, 100.0));

        let writes = sync.on_user_scroll(Viewport::TrackList, ScrollOffset::new(0.0, 30.0));
        assert_eq!(
            writes,
            vec![ScrollWrite {
                viewport: Viewport::KeyframeList,
                axis: Axis::Vertical,
                value: 30.0,
            }]
        );
        assert_eq!(sync.offset(Viewport::KeyframeList).left, 250.0);
        assert_eq!(sync.offset(Viewport::KeyframeList).top, 30.0);
    }

    #[test]
    fn test_writes_never_target_source() {
        let mut sync = ScrollSynchronizer::new();
        for (i, source) in Viewport::ALL.into_iter().enumerate() {
            let offset = ScrollOffset::new(10.0 * (i + 1) as f64, 20.0 * (i + 1) as f64);
            for write in sync.on_user_scroll(source, offset) {
                assert_ne!(write.viewport, source);
            }
        }
    }

    #[test]
    fn test_echo_scroll_settles() {
        let mut sync = ScrollSynchronizer::new();
        let writes = sync.on_user_scroll(Viewport::KeyframeList, ScrollOffset::new(0.0, 100.0));
        assert_eq!(writes.len(), 1);
        assert_eq!(sync.offset(Viewport::TrackList).top, 100.0);

        // The DOM reports the assignment back as a scroll of the track list.
        let echo = sync.on_user_scroll(Viewport::TrackList, ScrollOffset::new(0.0, 100.0));
        assert!(echo.is_empty());
    }

    #[test]
    fn test_programmatic_write_does_not_cascade() {
        let mut sync = ScrollSynchronizer::new();
        sync.apply_programmatic(ScrollWrite {
            viewport: Viewport::KeyframeList,
            axis: Axis::Horizontal,
            value: 75.0,
        });
        assert_eq!(sync.offset(Viewport::KeyframeList).left, 75.0);
        assert_eq!(sync.offset(Viewport::Ruler).left, 0.0);
    }

    #[test]
    fn test_negative_offsets_clamp_to_zero() {
        let mut sync = ScrollSynchronizer::new();
        sync.on_user_scroll(Viewport::Ruler, ScrollOffset::new(-12.0, -3.0));
        assert_eq!(sync.offset(Viewport::Ruler), ScrollOffset::default());
    }

    #[test]
    fn test_scroll_write_wire_format() {
        let write = ScrollWrite {
            viewport: Viewport::TrackList,
            axis: Axis::Vertical,
            value: 12.5,
        };
        let json = serde_json::to_value(write).unwrap();
        assert_eq!(json["viewport"], "track_list");
        assert_eq!(json["axis"], "top");
        assert_eq!(json["value"], 12.5);
    }
}
