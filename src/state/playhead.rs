//! Where the playhead sits relative to the scrolled ruler.

/// Horizontal placement of the playhead inside the ruler viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadPlacement {
    /// `time - scroll_left`, in pixels.
    pub offset_px: f64,
    pub visible: bool,
}

impl PlayheadPlacement {
    /// The playhead shows while `time` lies inside
    /// `[scroll_left, scroll_left + viewport_width]`. An unmeasured viewport
    /// counts as showing it.
    pub fn compute(time: i64, scroll_left: f64, viewport_width: Option<f64>) -> Self {
        let position = time as f64;
        let visible = match viewport_width {
            Some(width) => position >= scroll_left && position <= scroll_left + width,
            None => true,
        };
        Self {
            offset_px: position - scroll_left,
            visible,
        }
    }
}
