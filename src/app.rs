use dioxus::prelude::*;
use std::path::Path;

use scrub_timeline::constants::{BG_BASE, CONFIG_FILE_NAME, TEXT_PRIMARY};
use scrub_timeline::{Timeline, TimelineConfig};

/// Root component of the demo window.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| TimelineConfig::load_or_default(Path::new(CONFIG_FILE_NAME)));

    rsx! {
        div {
            style: "
                min-height: 100vh; padding: 16px; box-sizing: border-box;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: system-ui, sans-serif;
            ",
            Timeline { config }
        }
    }
}
