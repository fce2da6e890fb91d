//! Press/drag gesture state.
//!
//! A strict three-phase machine: `Idle -> Pressed -> Dragging -> Idle`. The
//! anchor coordinate is only meaningful while a gesture is active; it is
//! rewritten on press, on promotion to a drag, and on every dragging step.

/// Which input stream an event came from. Touch promotes to a drag on the
/// first move; mouse input must travel past the activation distance first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Press seen, activation distance not yet crossed.
    Pressed,
    /// Viewport is actively being panned.
    Dragging,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureState {
    phase: Phase,
    anchor_x: f64,
    anchor_y: f64,
}

impl GestureState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a press or drag is in flight.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Last recorded pointer coordinate.
    pub fn anchor(&self) -> (f64, f64) {
        (self.anchor_x, self.anchor_y)
    }

    /// Press-start: record the anchor and enter `Pressed`. A press while a
    /// gesture is already active only refreshes the anchor.
    pub fn press(&mut self, x: f64, y: f64) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Pressed;
        }
        self.anchor_x = x;
        self.anchor_y = y;
    }

    /// Promote a press to a drag, re-basing the anchor so the crossing move
    /// itself contributes no delta. No-op unless currently `Pressed`.
    pub fn promote(&mut self, x: f64, y: f64) {
        if self.phase == Phase::Pressed {
            self.phase = Phase::Dragging;
            self.anchor_x = x;
            self.anchor_y = y;
        }
    }

    /// Advance the anchor to `(x, y)` and return the delta from the previous
    /// anchor. Only meaningful while `Dragging`.
    pub fn step(&mut self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.anchor_x;
        let dy = y - self.anchor_y;
        self.anchor_x = x;
        self.anchor_y = y;
        (dx, dy)
    }

    /// End the gesture, returning the phase it was in. Idempotent: releasing
    /// while `Idle` stays `Idle`.
    pub fn release(&mut self) -> Phase {
        let prev = self.phase;
        self.phase = Phase::Idle;
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let gs = GestureState::default();
        assert_eq!(gs.phase(), Phase::Idle);
        assert!(!gs.is_active());
    }

    #[test]
    fn press_records_anchor() {
        let mut gs = GestureState::default();
        gs.press(100.0, 50.0);
        assert_eq!(gs.phase(), Phase::Pressed);
        assert_eq!(gs.anchor(), (100.0, 50.0));
    }

    #[test]
    fn promote_rebase_then_step() {
        let mut gs = GestureState::default();
        gs.press(100.0, 100.0);
        gs.promote(115.0, 100.0);
        assert_eq!(gs.phase(), Phase::Dragging);
        // Crossing move contributes no delta.
        assert_eq!(gs.step(115.0, 100.0), (0.0, 0.0));
        assert_eq!(gs.step(130.0, 115.0), (15.0, 15.0));
        assert_eq!(gs.anchor(), (130.0, 115.0));
    }

    #[test]
    fn promote_requires_press() {
        let mut gs = GestureState::default();
        gs.promote(10.0, 10.0);
        assert_eq!(gs.phase(), Phase::Idle);
    }

    #[test]
    fn release_reports_previous_phase() {
        let mut gs = GestureState::default();
        gs.press(0.0, 0.0);
        assert_eq!(gs.release(), Phase::Pressed);
        assert_eq!(gs.phase(), Phase::Idle);
        // Releasing again is a no-op.
        assert_eq!(gs.release(), Phase::Idle);
    }

    #[test]
    fn dragging_implies_pressed_first() {
        let mut gs = GestureState::default();
        gs.press(0.0, 0.0);
        gs.promote(0.0, 0.0);
        assert_eq!(gs.release(), Phase::Dragging);
    }
}
