//! Headless timeline state
//!
//! Everything here is plain data plus state machines, usable without a UI
//! runtime:
//! - TemporalState: current time and duration with their range/step rules
//! - ScrollSynchronizer: scroll mirroring between the three viewports
//! - DragSeeker: ruler drag-to-seek
//! - CommitField: numeric input with deferred commit
//! - PlayheadPlacement: playhead offset and visibility

mod temporal;
mod scroll;
mod drag;
mod commit_field;
mod playhead;

pub use temporal::*;
pub use scroll::*;
pub use drag::*;
pub use commit_field::*;
pub use playhead::*;
