use dioxus::prelude::*;

use crate::constants::PLAYHEAD_COLOR;
use crate::state::{PlayheadPlacement, Viewport};

use super::context::use_timeline;

/// Vertical line over the ruler and keyframe list at the current time,
/// shifted by the ruler's scroll offset.
#[component]
pub fn Playhead() -> Element {
    let handle = use_timeline();
    let origin = handle.layout().playhead_origin_px();
    let placement = PlayheadPlacement::compute(
        handle.time(),
        handle.scroll_offset(Viewport::Ruler).left,
        handle.ruler_client_width(),
    );
    let offset = placement.offset_px;
    let display = if placement.visible { "block" } else { "none" };

    rsx! {
        div {
            style: "
                position: absolute; top: 0; left: {origin}px; height: 100%;
                border-left: 2px solid {PLAYHEAD_COLOR}; z-index: 10;
                transform: translateX({offset}px);
                pointer-events: none;
                display: {display};
            ",
            div {
                style: "
                    position: absolute; top: 0; transform: translateX(-6px);
                    border: 5px solid transparent; border-top-color: {PLAYHEAD_COLOR};
                ",
            }
        }
    }
}
