//! Scrub Timeline demo window
//!
//! Hosts a single `Timeline`, configured from `timeline.json` in the working
//! directory when present.

mod app;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scrub_timeline=info".parse()?),
        )
        .init();

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Scrub Timeline")
                .with_inner_size(LogicalSize::new(1024.0, 420.0))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
    Ok(())
}
