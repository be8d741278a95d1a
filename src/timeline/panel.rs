use dioxus::prelude::*;

use crate::config::TimelineConfig;
use crate::constants::{BG_ELEVATED, BORDER_DEFAULT, TEXT_PRIMARY};

use super::bridge::use_scroll_bridge;
use super::context::{use_timeline, TimelineProvider};
use super::keyframe_list::KeyframeList;
use super::play_controls::PlayControls;
use super::playhead::Playhead;
use super::ruler::Ruler;
use super::track_list::TrackList;

/// Self-contained timeline: controls, ruler, track names, keyframes and
/// playhead, all sharing one instance of state.
#[component]
pub fn Timeline(#[props(default)] config: TimelineConfig) -> Element {
    rsx! {
        TimelineProvider {
            config,
            TimelineGrid {}
        }
    }
}

#[component]
fn TimelineGrid() -> Element {
    let handle = use_timeline();
    use_scroll_bridge(handle);

    let layout = handle.layout();
    let columns = layout.track_column_width;
    let controls = layout.controls_height;
    let height = layout.height;

    rsx! {
        div {
            style: "
                position: relative;
                display: grid;
                grid-template-columns: {columns}px 1fr;
                grid-template-rows: {controls}px 1fr;
                height: {height}px;
                background-color: {BG_ELEVATED}; color: {TEXT_PRIMARY};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                overflow: hidden;
                user-select: none;
            ",
            PlayControls {}
            Ruler {}
            TrackList {}
            KeyframeList {}
            Playhead {}
        }
    }
}
