use dioxus::prelude::*;

use crate::constants::{BAR_HEIGHT_PX, SEGMENT_FILL};
use crate::state::Viewport;

use super::context::use_timeline;

/// One keyframe row, `duration` pixels wide.
#[component]
pub fn Segment() -> Element {
    let handle = use_timeline();
    let width = handle.temporal().content_width_px();

    rsx! {
        div {
            style: "padding: 8px 0; width: {width}px;",
            div { style: "height: {BAR_HEIGHT_PX}px; border-radius: 6px; background-color: {SEGMENT_FILL};" }
        }
    }
}

/// Keyframe rows; the scroll source for both peers.
#[component]
pub fn KeyframeList() -> Element {
    let handle = use_timeline();
    let id = handle.viewport_id(Viewport::KeyframeList);
    let padding_x = handle.layout().ruler_padding_x;
    let count = handle.segment_count();

    rsx! {
        div {
            id: "{id}",
            style: "padding: 0 {padding_x}px; min-width: 0; overflow: auto;",
            for index in 0..count {
                Segment { key: "{index}" }
            }
        }
    }
}
