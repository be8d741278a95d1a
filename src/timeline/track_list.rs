use dioxus::prelude::*;

use crate::constants::{BORDER_DEFAULT, ROW_HEIGHT_PX, TEXT_SECONDARY};
use crate::state::Viewport;

use super::context::use_timeline;

/// Track names; scrolls vertically in step with the keyframe list.
#[component]
pub fn TrackList() -> Element {
    let handle = use_timeline();
    let id = handle.viewport_id(Viewport::TrackList);
    let tracks = handle.tracks();

    rsx! {
        div {
            id: "{id}",
            style: "
                display: grid; grid-auto-flow: row; grid-auto-rows: {ROW_HEIGHT_PX}px;
                border-right: 1px solid {BORDER_DEFAULT};
                overflow: auto;
            ",
            for (index, name) in tracks.into_iter().enumerate() {
                div {
                    key: "{index}",
                    style: "padding: 8px; font-size: 13px; color: {TEXT_SECONDARY};",
                    "{name}"
                }
            }
        }
    }
}
