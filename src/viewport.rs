//! Scrollable-viewport abstraction.
//!
//! The gesture core only needs to read and write scroll offsets and read the
//! scrollable extents. Keeping that behind a trait lets the controller run
//! against a plain struct in tests and against a `web_sys::Element` in the
//! browser.

/// Snapshot of a viewport's scroll position and scrollable extents, passed to
/// every scroll lifecycle callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset.
    pub left: f64,
    /// Current vertical scroll offset.
    pub top: f64,
    /// Total scrollable width.
    pub width: f64,
    /// Total scrollable height.
    pub height: f64,
}

/// A scrollable viewport: settable offsets, read-only extents.
pub trait Viewport {
    fn scroll_left(&self) -> f64;
    fn scroll_top(&self) -> f64;
    fn scroll_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn set_scroll_left(&mut self, value: f64);
    fn set_scroll_top(&mut self, value: f64);

    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            left: self.scroll_left(),
            top: self.scroll_top(),
            width: self.scroll_width(),
            height: self.scroll_height(),
        }
    }
}

impl Viewport for web_sys::Element {
    fn scroll_left(&self) -> f64 {
        web_sys::Element::scroll_left(self) as f64
    }

    fn scroll_top(&self) -> f64 {
        web_sys::Element::scroll_top(self) as f64
    }

    fn scroll_width(&self) -> f64 {
        web_sys::Element::scroll_width(self) as f64
    }

    fn scroll_height(&self) -> f64 {
        web_sys::Element::scroll_height(self) as f64
    }

    fn set_scroll_left(&mut self, value: f64) {
        // The browser clamps to the scrollable range.
        web_sys::Element::set_scroll_left(self, value as i32);
    }

    fn set_scroll_top(&mut self, value: f64) {
        web_sys::Element::set_scroll_top(self, value as i32);
    }
}
