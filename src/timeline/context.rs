//! Shared state of one mounted timeline.
//!
//! `TimelineProvider` creates a `TimelineHandle` and places it in the Dioxus
//! context of its subtree. Each provider owns its own signals, so several
//! timelines can be mounted side by side.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::config::{LayoutConfig, TimelineConfig};
use crate::error::{TimelineError, TimelineResult};
use crate::state::{ScrollOffset, ScrollSynchronizer, TemporalState, Viewport};
use crate::utils::element_id;

/// Copyable handle to the temporal and scroll state of a timeline instance.
#[derive(Clone, Copy, PartialEq)]
pub struct TimelineHandle {
    instance: Uuid,
    temporal: Signal<TemporalState>,
    scroll: Signal<ScrollSynchronizer>,
    config: Signal<TimelineConfig>,
}

impl TimelineHandle {
    /// Must run inside a component scope; the signals belong to it.
    fn new(config: TimelineConfig) -> Self {
        let temporal = TemporalState::new(config.initial_time, config.initial_duration);
        Self {
            instance: Uuid::new_v4(),
            temporal: Signal::new(temporal),
            scroll: Signal::new(ScrollSynchronizer::new()),
            config: Signal::new(config),
        }
    }

    /// DOM id for an element of this instance.
    pub fn element_id(&self, part: &str) -> String {
        element_id(self.instance, part)
    }

    pub fn viewport_id(&self, viewport: Viewport) -> String {
        self.element_id(viewport.slug())
    }

    pub fn temporal(&self) -> TemporalState {
        *self.temporal.read()
    }

    pub fn temporal_signal(&self) -> Signal<TemporalState> {
        self.temporal
    }

    pub fn time(&self) -> i64 {
        self.temporal.read().time()
    }

    /// Step-rounded, range-clamped time update.
    pub fn update_time(&self, raw: f64) {
        let mut temporal = self.temporal;
        temporal.write().update_time(raw);
    }

    /// Duration update; pulls the time down in the same write when needed.
    pub fn set_duration(&self, raw: i64) {
        let mut temporal = self.temporal;
        temporal.write().set_duration(raw);
    }

    /// Direct time assignment for already validated values.
    pub fn set_time(&self, raw: i64) {
        let mut temporal = self.temporal;
        temporal.write().set_time(raw);
    }

    pub fn scroll_signal(&self) -> Signal<ScrollSynchronizer> {
        self.scroll
    }

    pub fn scroll_offset(&self, viewport: Viewport) -> ScrollOffset {
        self.scroll.read().offset(viewport)
    }

    pub fn ruler_client_width(&self) -> Option<f64> {
        self.scroll.read().ruler_client_width()
    }

    pub fn tracks(&self) -> Vec<String> {
        self.config.read().tracks.clone()
    }

    pub fn segment_count(&self) -> usize {
        self.config.read().segment_count
    }

    pub fn layout(&self) -> LayoutConfig {
        self.config.read().layout
    }
}

/// Owns the timeline state for its children.
#[component]
pub fn TimelineProvider(#[props(default)] config: TimelineConfig, children: Element) -> Element {
    let handle = use_context_provider(move || {
        let handle = TimelineHandle::new(config);
        tracing::info!(instance = %handle.instance, "timeline mounted");
        handle
    });

    use_drop(move || {
        tracing::info!(instance = %handle.instance, "timeline unmounted");
    });

    rsx! { {children} }
}

/// The enclosing timeline, or `MissingProvider` outside of a `TimelineProvider`.
pub fn try_use_timeline() -> TimelineResult<TimelineHandle> {
    try_use_context::<TimelineHandle>().ok_or(TimelineError::MissingProvider)
}

/// The enclosing timeline.
///
/// # Panics
/// Outside of a `TimelineProvider`. That is a wiring mistake, not a runtime
/// condition.
pub fn use_timeline() -> TimelineHandle {
    match try_use_timeline() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_message() {
        assert_eq!(
            TimelineError::MissingProvider.to_string(),
            "timeline context requested outside of a TimelineProvider"
        );
    }
}
