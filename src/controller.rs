//! Gesture-to-scroll core.
//!
//! [`DragScrollController`] turns a stream of press/move/release events into
//! scroll-offset mutations on a [`Viewport`] plus lifecycle notifications. It
//! knows nothing about the DOM or Yew; the component layer feeds it events
//! and acts on the returned outcomes.

use crate::state::{GestureState, Phase, PointerKind};
use crate::viewport::{ScrollMetrics, Viewport};

/// Axis enablement and the activation dead-zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Apply horizontal deltas to the scroll offset.
    pub horizontal: bool,
    /// Apply vertical deltas to the scroll offset.
    pub vertical: bool,
    /// Minimum pointer travel (px) along an enabled axis before a mouse press
    /// becomes a drag. Touch input ignores this.
    pub activation_distance: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            horizontal: true,
            vertical: true,
            activation_distance: 10.0,
        }
    }
}

/// What a move event did, in callback order: a gesture may start and pan on
/// the same event (the crossing move pans with a zero delta).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionOutcome {
    /// Set when this move promoted the press to a drag; metrics read before
    /// any offset mutation.
    pub started: Option<ScrollMetrics>,
    /// Set on every move handled while dragging; metrics read after the
    /// offset mutation (if any).
    pub scrolled: Option<ScrollMetrics>,
}

#[derive(Debug, Clone, Default)]
pub struct DragScrollController {
    config: ScrollConfig,
    gesture: GestureState,
}

impl DragScrollController {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            gesture: GestureState::default(),
        }
    }

    /// Replace the configuration. Takes effect from the next event; an
    /// in-flight gesture keeps its anchor.
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// True while a press or drag is in flight.
    pub fn is_active(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.phase() == Phase::Dragging
    }

    /// Press-start at `(x, y)`. The caller has already applied the exclusion
    /// predicate; every press reaching here is accepted.
    pub fn press(&mut self, x: f64, y: f64) {
        self.gesture.press(x, y);
    }

    /// Handle a pointer move. A move while `Idle` is a no-op.
    ///
    /// Only mouse drags write scroll offsets; touch drags rely on native
    /// scrolling and merely report viewport metrics.
    pub fn motion<V: Viewport>(
        &mut self,
        source: PointerKind,
        x: f64,
        y: f64,
        viewport: &mut V,
    ) -> MotionOutcome {
        let mut outcome = MotionOutcome::default();

        if self.gesture.phase() == Phase::Pressed && self.crosses_threshold(source, x, y) {
            self.gesture.promote(x, y);
            outcome.started = Some(viewport.metrics());
        }

        if self.gesture.phase() == Phase::Dragging {
            let (dx, dy) = self.gesture.step(x, y);
            if source == PointerKind::Mouse {
                if self.config.horizontal {
                    let left = viewport.scroll_left();
                    viewport.set_scroll_left(left - dx);
                }
                if self.config.vertical {
                    let top = viewport.scroll_top();
                    viewport.set_scroll_top(top - dy);
                }
            }
            outcome.scrolled = Some(viewport.metrics());
        }

        outcome
    }

    /// Release the gesture. Returns final metrics if a drag actually ended;
    /// a release while merely pressed (or idle) is silent.
    pub fn release<V: Viewport>(&mut self, viewport: &V) -> Option<ScrollMetrics> {
        match self.gesture.release() {
            Phase::Dragging => Some(viewport.metrics()),
            _ => None,
        }
    }

    /// Drop any in-flight gesture without reading the viewport. Used on
    /// teardown, when there is no viewport left to report on.
    pub fn reset(&mut self) {
        let _ = self.gesture.release();
    }

    fn crosses_threshold(&self, source: PointerKind, x: f64, y: f64) -> bool {
        match source {
            // Touch drags begin on the first move while pressed.
            PointerKind::Touch => true,
            PointerKind::Mouse => {
                let (ax, ay) = self.gesture.anchor();
                let dist = self.config.activation_distance;
                (self.config.horizontal && (x - ax).abs() > dist)
                    || (self.config.vertical && (y - ay).abs() > dist)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory stand-in for a scrollable element. Offsets clamp at zero
    /// like a real viewport; the upper bound is irrelevant to these tests.
    #[derive(Debug, Clone, Copy)]
    struct FakeViewport {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    }

    impl FakeViewport {
        fn new(left: f64, top: f64) -> Self {
            Self {
                left,
                top,
                width: 2000.0,
                height: 2000.0,
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_left(&self) -> f64 {
            self.left
        }
        fn scroll_top(&self) -> f64 {
            self.top
        }
        fn scroll_width(&self) -> f64 {
            self.width
        }
        fn scroll_height(&self) -> f64 {
            self.height
        }
        fn set_scroll_left(&mut self, value: f64) {
            self.left = value.max(0.0);
        }
        fn set_scroll_top(&mut self, value: f64) {
            self.top = value.max(0.0);
        }
    }

    fn controller() -> DragScrollController {
        DragScrollController::new(ScrollConfig::default())
    }

    #[test]
    fn sub_threshold_press_is_a_click() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(500.0, 500.0);
        ctl.press(100.0, 100.0);
        let out = ctl.motion(PointerKind::Mouse, 103.0, 100.0, &mut vp);
        assert_eq!(out, MotionOutcome::default());
        assert!(ctl.release(&vp).is_none());
        assert!(!ctl.is_active());
        assert_eq!(vp.left, 500.0);
        assert_eq!(vp.top, 500.0);
    }

    #[test]
    fn scripted_mouse_drag_round_trip() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(500.0, 500.0);
        ctl.press(100.0, 100.0);

        // Below threshold: nothing happens.
        let out = ctl.motion(PointerKind::Mouse, 103.0, 100.0, &mut vp);
        assert!(out.started.is_none() && out.scrolled.is_none());

        // Crosses threshold: start fires with pre-drag offsets, then a pan
        // with zero delta on the same event.
        let out = ctl.motion(PointerKind::Mouse, 115.0, 100.0, &mut vp);
        let started = out.started.expect("drag should start");
        assert_eq!(started.left, 500.0);
        assert_eq!(started.top, 500.0);
        let scrolled = out.scrolled.expect("pan reported on crossing move");
        assert_eq!(scrolled.left, 500.0);
        assert!(ctl.is_dragging());

        // Subsequent move: offsets shift by the negated delta.
        let out = ctl.motion(PointerKind::Mouse, 130.0, 115.0, &mut vp);
        assert!(out.started.is_none());
        let scrolled = out.scrolled.unwrap();
        assert_eq!(scrolled.left, 485.0);
        assert_eq!(scrolled.top, 485.0);

        // Release reports the final position once.
        let end = ctl.release(&vp).expect("end fires after a drag");
        assert_eq!(end.left, 485.0);
        assert_eq!(end.top, 485.0);
        assert!(ctl.release(&vp).is_none());
    }

    #[test]
    fn start_precedes_scroll_and_fires_once() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(0.0, 0.0);
        ctl.press(0.0, 0.0);
        let mut starts = 0;
        let mut scrolls = 0;
        for (x, y) in [(20.0, 0.0), (25.0, 0.0), (30.0, 0.0)] {
            let out = ctl.motion(PointerKind::Mouse, x, y, &mut vp);
            if out.started.is_some() {
                starts += 1;
                // Ordering: no pan may have been reported before the start.
                assert_eq!(scrolls, 0);
            }
            if out.scrolled.is_some() {
                scrolls += 1;
            }
        }
        assert_eq!(starts, 1);
        assert_eq!(scrolls, 3);
        assert!(ctl.release(&vp).is_some());
    }

    #[test]
    fn touch_promotes_on_first_move() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(300.0, 300.0);
        ctl.press(100.0, 100.0);
        let out = ctl.motion(PointerKind::Touch, 101.0, 100.0, &mut vp);
        assert!(out.started.is_some());
        assert!(ctl.is_dragging());
        // Touch path never writes offsets.
        let out = ctl.motion(PointerKind::Touch, 150.0, 150.0, &mut vp);
        assert_eq!(out.scrolled.unwrap().left, 300.0);
        assert_eq!(vp.left, 300.0);
        assert_eq!(vp.top, 300.0);
    }

    #[test]
    fn horizontal_lock_blocks_horizontal_writes() {
        let mut ctl = DragScrollController::new(ScrollConfig {
            horizontal: false,
            ..ScrollConfig::default()
        });
        let mut vp = FakeViewport::new(500.0, 500.0);
        ctl.press(0.0, 0.0);
        // Pure horizontal travel cannot promote: only the vertical axis is
        // measured and it never moves.
        let out = ctl.motion(PointerKind::Mouse, 50.0, 0.0, &mut vp);
        assert_eq!(out, MotionOutcome::default());
        // Vertical travel promotes, and only the top offset moves.
        let out = ctl.motion(PointerKind::Mouse, 50.0, 20.0, &mut vp);
        assert!(out.started.is_some());
        ctl.motion(PointerKind::Mouse, 90.0, 35.0, &mut vp);
        assert_eq!(vp.left, 500.0);
        assert_eq!(vp.top, 485.0);
    }

    #[test]
    fn vertical_lock_blocks_vertical_writes() {
        let mut ctl = DragScrollController::new(ScrollConfig {
            vertical: false,
            ..ScrollConfig::default()
        });
        let mut vp = FakeViewport::new(500.0, 500.0);
        ctl.press(0.0, 0.0);
        // Pure vertical travel cannot promote: only the horizontal axis is
        // measured and it never moves.
        let out = ctl.motion(PointerKind::Mouse, 0.0, 50.0, &mut vp);
        assert_eq!(out, MotionOutcome::default());
        // Horizontal travel promotes, and only the left offset moves.
        let out = ctl.motion(PointerKind::Mouse, 20.0, 50.0, &mut vp);
        assert!(out.started.is_some());
        ctl.motion(PointerKind::Mouse, 35.0, 90.0, &mut vp);
        assert_eq!(vp.left, 485.0);
        assert_eq!(vp.top, 500.0);
    }

    #[test]
    fn both_axes_disabled_mouse_never_promotes() {
        let cfg = ScrollConfig {
            horizontal: false,
            vertical: false,
            ..ScrollConfig::default()
        };
        let mut ctl = DragScrollController::new(cfg);
        let mut vp = FakeViewport::new(100.0, 100.0);
        ctl.press(0.0, 0.0);
        let out = ctl.motion(PointerKind::Mouse, 500.0, 500.0, &mut vp);
        assert_eq!(out, MotionOutcome::default());
        assert!(ctl.release(&vp).is_none());

        // Touch still reaches Dragging via the immediate-promotion rule.
        let mut ctl = DragScrollController::new(cfg);
        ctl.press(0.0, 0.0);
        let out = ctl.motion(PointerKind::Touch, 1.0, 1.0, &mut vp);
        assert!(out.started.is_some());
        assert!(ctl.release(&vp).is_some());
        assert_eq!(vp.left, 100.0);
    }

    #[test]
    fn exact_activation_distance_is_not_enough() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(0.0, 0.0);
        ctl.press(0.0, 0.0);
        let out = ctl.motion(PointerKind::Mouse, 10.0, 0.0, &mut vp);
        assert!(out.started.is_none());
        let out = ctl.motion(PointerKind::Mouse, 10.5, 0.0, &mut vp);
        assert!(out.started.is_some());
    }

    #[test]
    fn moves_and_releases_while_idle_are_noops() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(10.0, 10.0);
        let out = ctl.motion(PointerKind::Mouse, 400.0, 400.0, &mut vp);
        assert_eq!(out, MotionOutcome::default());
        assert!(ctl.release(&vp).is_none());
        assert_eq!(vp.left, 10.0);
    }

    #[test]
    fn offsets_clamp_at_zero() {
        let mut ctl = controller();
        let mut vp = FakeViewport::new(5.0, 5.0);
        ctl.press(0.0, 0.0);
        ctl.motion(PointerKind::Mouse, 0.0, 20.0, &mut vp);
        // Dragging down past the top edge.
        ctl.motion(PointerKind::Mouse, 0.0, 100.0, &mut vp);
        assert_eq!(vp.top, 0.0);
    }
}
