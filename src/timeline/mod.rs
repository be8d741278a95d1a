//! Timeline widget
//!
//! Components read and write the shared state through `TimelineHandle`;
//! the JS bridges in `bridge` carry scroll and pointer events the
//! renderer cannot deliver directly.

mod bridge;
mod context;
mod keyframe_list;
mod panel;
mod play_controls;
mod playhead;
mod ruler;
mod track_list;

pub use bridge::{DragCommand, DragReport, ScrollReport};
pub use context::{try_use_timeline, use_timeline, TimelineHandle, TimelineProvider};
pub use keyframe_list::{KeyframeList, Segment};
pub use panel::Timeline;
pub use play_controls::PlayControls;
pub use playhead::Playhead;
pub use ruler::Ruler;
pub use track_list::TrackList;
