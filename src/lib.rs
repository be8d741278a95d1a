//! Scrub Timeline
//!
//! An embeddable timeline widget for Dioxus desktop: a ruler to scrub on,
//! track and keyframe lists that scroll together, a playhead, and deferred
//! commit fields for the current time and the duration.
//!
//! The state machines under [`state`] are plain Rust and carry all of the
//! behavior; [`timeline`] renders them.

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod state;
pub mod timeline;
pub mod utils;

pub use config::{LayoutConfig, TimelineConfig};
pub use error::{TimelineError, TimelineResult};
pub use timeline::{try_use_timeline, use_timeline, Timeline, TimelineHandle, TimelineProvider};
