//! Time and duration of one timeline instance.
//!
//! Both values are whole milliseconds. Every rounding-aware entry point keeps
//! them on the `STEP` grid, keeps `duration` inside `[MIN_DURATION, MAX_DURATION]`
//! and keeps `time` inside `[0, duration]`.

/// Shortest allowed timeline, in milliseconds.
pub const MIN_DURATION: i64 = 100;
/// Longest allowed timeline, in milliseconds.
pub const MAX_DURATION: i64 = 6000;
/// Quantization granularity for time and duration, in milliseconds.
pub const STEP: i64 = 10;
/// Duration a fresh timeline starts with.
pub const DEFAULT_DURATION: i64 = 2000;

/// Round to the nearest integer, halves going up.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round `value` to the nearest multiple of `step`, halves going up.
pub fn round_to_step(value: i64, step: i64) -> i64 {
    if step <= 0 {
        return value;
    }
    round_half_up(value as f64 / step as f64) as i64 * step
}

/// Post-validation for the time field: snap to the grid, never past `duration`.
pub fn format_time_input(value: i64, duration: i64) -> i64 {
    round_to_step(value, STEP).min(duration)
}

/// Post-validation for the duration field: snap to the grid.
pub fn format_duration_input(value: i64) -> i64 {
    round_to_step(value, STEP)
}

/// Current playhead position and total length of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalState {
    time: i64,
    duration: i64,
}

impl Default for TemporalState {
    fn default() -> Self {
        Self {
            time: 0,
            duration: DEFAULT_DURATION,
        }
    }
}

impl TemporalState {
    /// Build a state from raw values, normalizing both through the
    /// rounding-aware setters.
    pub fn new(time: i64, duration: i64) -> Self {
        let mut state = Self::default();
        state.set_duration(duration);
        state.update_time(time as f64);
        state
    }

    /// Current playhead position in milliseconds.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Total timeline length in milliseconds.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Clamp, step-round and store a new duration.
    ///
    /// When the current time falls past the new end it is pulled down to the
    /// new duration within this same call.
    pub fn set_duration(&mut self, raw: i64) {
        let clamped = raw.clamp(MIN_DURATION, MAX_DURATION);
        // MIN and MAX are themselves on the grid, so rounding stays in range.
        let duration = round_to_step(clamped, STEP);
        tracing::debug!(raw, duration, "set duration");
        self.duration = duration;
        if self.time > self.duration {
            tracing::debug!(from = self.time, to = self.duration, "time pulled down to new duration");
            self.time = self.duration;
        }
    }

    /// Step-round a requested time and clamp it to `[0, duration]`.
    ///
    /// Used by ruler seeking and by the time field's commit path.
    pub fn update_time(&mut self, raw: f64) {
        let rounded = if raw.is_nan() {
            0
        } else {
            (round_half_up(raw / STEP as f64) * STEP as f64) as i64
        };
        let time = rounded.max(0).min(self.duration);
        tracing::debug!(raw, time, "update time");
        self.time = time;
    }

    /// Store `raw` as the current time without any validation.
    ///
    /// Callers hand in values that already satisfy the invariants.
    pub fn set_time(&mut self, raw: i64) {
        self.time = raw;
    }

    /// Width in pixels of anything drawn at 1 ms = 1 px.
    pub fn content_width_px(&self) -> i64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_duration(raw: i64) -> i64 {
        round_to_step(raw, STEP).clamp(MIN_DURATION, MAX_DURATION)
    }

    #[test]
    fn test_default_state() {
        let state = TemporalState::default();
        assert_eq!(state.time(), 0);
        assert_eq!(state.duration(), 2000);
    }

    #[test]
    fn test_round_to_step_half_up() {
        assert_eq!(round_to_step(123, 10), 120);
        assert_eq!(round_to_step(125, 10), 130);
        assert_eq!(round_to_step(1234, 10), 1230);
        assert_eq!(round_to_step(7, 0), 7);
    }

    #[test]
    fn test_set_duration_clamps_and_rounds() {
        let mut state = TemporalState::default();
        for raw in [-50, 0, 50, 99, 100, 104, 105, 1234, 5995, 5999, 6000, 6001, 10_000] {
            state.set_duration(raw);
            assert_eq!(state.duration(), expected_duration(raw), "raw = {raw}");
            assert_eq!(state.duration() % STEP, 0);
        }
        state.set_duration(50);
        assert_eq!(state.duration(), MIN_DURATION);
        state.set_duration(7000);
        assert_eq!(state.duration(), MAX_DURATION);
    }

    #[test]
    fn test_shrinking_duration_pulls_time_down() {
        let mut state = TemporalState::new(2000, 2000);
        assert_eq!(state.time(), 2000);
        state.set_duration(500);
        assert_eq!(state.duration(), 500);
        assert_eq!(state.time(), 500);
    }

    #[test]
    fn test_growing_duration_keeps_time() {
        let mut state = TemporalState::new(300, 1000);
        state.set_duration(4000);
        assert_eq!(state.time(), 300);
    }

    #[test]
    fn test_update_time_rounds_and_clamps() {
        let mut state = TemporalState::new(0, 1000);
        state.update_time(123.0);
        assert_eq!(state.time(), 120);
        state.update_time(125.0);
        assert_eq!(state.time(), 130);
        state.update_time(-40.0);
        assert_eq!(state.time(), 0);
        state.update_time(1500.0);
        assert_eq!(state.time(), 1000);
        state.update_time(999.4);
        assert_eq!(state.time(), 1000);
    }

    #[test]
    fn test_set_time_is_unconstrained() {
        let mut state = TemporalState::new(0, 1000);
        state.set_time(1234);
        assert_eq!(state.time(), 1234);
    }

    #[test]
    fn test_field_formats() {
        assert_eq!(format_time_input(123, 1000), 120);
        assert_eq!(format_time_input(1000, 1000), 1000);
        assert_eq!(format_time_input(2000, 1000), 1000);
        assert_eq!(format_duration_input(1234), 1230);
        assert_eq!(format_duration_input(1235), 1240);
    }

    #[test]
    fn test_content_width_follows_duration() {
        let mut state = TemporalState::default();
        assert_eq!(state.content_width_px(), 2000);
        state.set_duration(1234);
        assert_eq!(state.content_width_px(), 1230);
    }

    #[test]
    fn test_new_normalizes_inputs() {
        let state = TemporalState::new(9999, 12_345);
        assert_eq!(state.duration(), MAX_DURATION);
        assert_eq!(state.time(), MAX_DURATION);
        assert_eq!(state.content_width_px(), MAX_DURATION);
    }
}
