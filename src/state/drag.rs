//! Drag-to-seek on the ruler bar.
//!
//! A press (mouse-down or touch-start) on the bar starts a session and seeks
//! at once. While the session lasts, document-wide move events keep seeking
//! and a release anywhere ends it. Document listeners are attached on entry
//! and detached exactly once on exit, whichever way the session ends.

use serde::{Deserialize, Serialize};

use super::temporal::TemporalState;

/// Input device that drives a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Pointer X position together with the bar's left edge, both in client space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPosition {
    pub client_x: f64,
    pub bar_left: f64,
}

impl BarPosition {
    pub fn new(client_x: f64, bar_left: f64) -> Self {
        Self { client_x, bar_left }
    }
}

/// Map a pointer position to a time: 1 px = 1 ms from the bar's left edge,
/// clamped to `[0, duration]`. Step rounding happens in `update_time`.
pub fn time_from_position(position: BarPosition, duration: i64) -> f64 {
    let offset = position.client_x - position.bar_left;
    offset.max(0.0).min(duration as f64)
}

/// Registration of the document-level move/release listeners.
pub trait PointerCapture {
    fn attach(&mut self);
    fn detach(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub source: PointerSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Seek state machine for one ruler.
pub struct DragSeeker<C: PointerCapture> {
    state: DragState,
    capture: C,
    attached: bool,
}

impl<C: PointerCapture> DragSeeker<C> {
    pub fn new(capture: C) -> Self {
        Self {
            state: DragState::Idle,
            capture,
            attached: false,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Mouse-down / touch-start on the bar.
    pub fn press(&mut self, source: PointerSource, position: BarPosition, temporal: &mut TemporalState) {
        if !self.is_dragging() {
            tracing::debug!(?source, "drag started");
        }
        self.state = DragState::Dragging(DragSession { source });
        if !self.attached {
            self.capture.attach();
            self.attached = true;
        }
        temporal.update_time(time_from_position(position, temporal.duration()));
    }

    /// Mouse-move / touch-move anywhere in the document. Ignored while idle.
    ///
    /// Returns whether the move seeked.
    pub fn motion(&mut self, position: BarPosition, temporal: &mut TemporalState) -> bool {
        if !self.is_dragging() {
            return false;
        }
        temporal.update_time(time_from_position(position, temporal.duration()));
        true
    }

    /// Mouse-up / touch-end anywhere in the document.
    pub fn release(&mut self) {
        if let DragState::Dragging(session) = self.state {
            tracing::debug!(source = ?session.source, "drag ended");
        }
        self.state = DragState::Idle;
        self.detach();
    }

    /// Component teardown. Safe to call in any state, any number of times.
    pub fn teardown(&mut self) {
        self.state = DragState::Idle;
        self.detach();
    }

    fn detach(&mut self) {
        if self.attached {
            self.capture.detach();
            self.attached = false;
        }
    }
}

impl<C: PointerCapture> Drop for DragSeeker<C> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingCapture {
        attached: Rc<Cell<u32>>,
        detached: Rc<Cell<u32>>,
    }

    impl PointerCapture for CountingCapture {
        fn attach(&mut self) {
            self.attached.set(self.attached.get() + 1);
        }

        fn detach(&mut self) {
            self.detached.set(self.detached.get() + 1);
        }
    }

    fn at(x: f64) -> BarPosition {
        BarPosition::new(x, 0.0)
    }

    #[test]
    fn test_time_from_position_clamps() {
        assert_eq!(time_from_position(at(500.0), 1000), 500.0);
        assert_eq!(time_from_position(at(-100.0), 1000), 0.0);
        assert_eq!(time_from_position(at(1500.0), 1000), 1000.0);
        assert_eq!(time_from_position(BarPosition::new(350.0, 100.0), 1000), 250.0);
    }

    #[test]
    fn test_press_past_end_seeks_to_duration() {
        let mut temporal = TemporalState::new(0, 1000);
        let mut seeker = DragSeeker::new(CountingCapture::default());
        seeker.press(PointerSource::Mouse, at(1500.0), &mut temporal);
        assert_eq!(temporal.time(), 1000);
    }

    #[test]
    fn test_mouse_drag_seeks_until_release() {
        let mut temporal = TemporalState::new(0, 1000);
        let mut seeker = DragSeeker::new(CountingCapture::default());

        seeker.press(PointerSource::Mouse, at(500.0), &mut temporal);
        assert_eq!(temporal.time(), 500);

        assert!(seeker.motion(at(600.0), &mut temporal));
        assert_eq!(temporal.time(), 600);

        seeker.release();
        assert!(!seeker.motion(at(700.0), &mut temporal));
        assert_eq!(temporal.time(), 600);
    }

    #[test]
    fn test_touch_drag_uses_same_path() {
        let mut temporal = TemporalState::new(0, 1000);
        let mut seeker = DragSeeker::new(CountingCapture::default());

        seeker.press(PointerSource::Touch, at(500.0), &mut temporal);
        assert_eq!(
            seeker.state(),
            DragState::Dragging(DragSession {
                source: PointerSource::Touch
            })
        );
        seeker.motion(at(604.0), &mut temporal);
        assert_eq!(temporal.time(), 600);
        seeker.release();
        seeker.motion(at(700.0), &mut temporal);
        assert_eq!(temporal.time(), 600);
    }

    #[test]
    fn test_motion_while_idle_is_ignored() {
        let mut temporal = TemporalState::new(120, 1000);
        let mut seeker = DragSeeker::new(CountingCapture::default());
        assert!(!seeker.motion(at(800.0), &mut temporal));
        assert_eq!(temporal.time(), 120);
    }

    #[test]
    fn test_motion_left_of_bar_clamps_to_zero() {
        let mut temporal = TemporalState::new(0, 1000);
        let mut seeker = DragSeeker::new(CountingCapture::default());
        seeker.press(PointerSource::Mouse, BarPosition::new(400.0, 200.0), &mut temporal);
        assert_eq!(temporal.time(), 200);
        seeker.motion(BarPosition::new(50.0, 200.0), &mut temporal);
        assert_eq!(temporal.time(), 0);
    }

    #[test]
    fn test_listeners_balanced_across_sessions() {
        let capture = CountingCapture::default();
        let mut temporal = TemporalState::default();
        let mut seeker = DragSeeker::new(capture.clone());

        seeker.press(PointerSource::Mouse, at(10.0), &mut temporal);
        // A second press mid-drag must not register a second set.
        seeker.press(PointerSource::Touch, at(20.0), &mut temporal);
        assert_eq!(capture.attached.get(), 1);

        seeker.release();
        seeker.release();
        assert_eq!(capture.detached.get(), 1);

        seeker.press(PointerSource::Mouse, at(30.0), &mut temporal);
        seeker.release();
        assert_eq!(capture.attached.get(), 2);
        assert_eq!(capture.detached.get(), 2);
    }

    #[test]
    fn test_teardown_mid_drag_detaches_once() {
        let capture = CountingCapture::default();
        let mut temporal = TemporalState::default();
        {
            let mut seeker = DragSeeker::new(capture.clone());
            seeker.press(PointerSource::Mouse, at(10.0), &mut temporal);
            seeker.teardown();
            assert!(!seeker.is_dragging());
        }
        assert_eq!(capture.attached.get(), 1);
        assert_eq!(capture.detached.get(), 1);
    }

    #[test]
    fn test_drop_mid_drag_detaches() {
        let capture = CountingCapture::default();
        let mut temporal = TemporalState::default();
        {
            let mut seeker = DragSeeker::new(capture.clone());
            seeker.press(PointerSource::Touch, at(10.0), &mut temporal);
        }
        assert_eq!(capture.detached.get(), 1);
    }
}
