use dioxus::prelude::*;

use crate::components::common::NumberInput;
use crate::constants::BORDER_DEFAULT;
use crate::state::{format_duration_input, format_time_input, MAX_DURATION, MIN_DURATION, STEP};

use super::context::use_timeline;

/// Current time and duration fields.
#[component]
pub fn PlayControls() -> Element {
    let handle = use_timeline();
    let temporal = handle.temporal();
    let time = temporal.time();
    let duration = temporal.duration();

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                padding: 0 8px;
                border-bottom: 1px solid {BORDER_DEFAULT}; border-right: 1px solid {BORDER_DEFAULT};
            ",
            NumberInput {
                id: handle.element_id("current-time-input"),
                label: "Current",
                value: time,
                min: 0,
                max: duration,
                step: STEP,
                format: move |value: i64| format_time_input(value, duration),
                on_commit: move |value: i64| handle.update_time(value as f64),
            }
            "-"
            NumberInput {
                id: handle.element_id("duration-input"),
                label: "Duration",
                value: duration,
                min: MIN_DURATION,
                max: MAX_DURATION,
                step: STEP,
                format: move |value: i64| format_duration_input(value),
                on_commit: move |value: i64| handle.set_duration(value),
            }
        }
    }
}
