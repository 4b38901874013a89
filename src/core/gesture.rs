use crate::models::{Decision, SwipeDirection};

/// Offset beyond which the direction badge is shown
pub const INDICATOR_THRESHOLD: f64 = 50.0;

/// Offset beyond which releasing the card commits a decision
///
/// Stricter than [`INDICATOR_THRESHOLD`]: between the two the badge is
/// visible but a release snaps the card back.
pub const COMMIT_THRESHOLD: f64 = 100.0;

/// What a release resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No drag was in progress
    Ignored,
    /// Released inside the commit thresholds, card snaps back
    Cancelled,
    Commit(Decision),
}

/// Converts pointer and touch movement into a horizontal offset
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    dragging: bool,
    origin_x: f64,
    offset: f64,
    direction: SwipeDirection,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Pointer or touch down
    pub fn start(&mut self, x: f64) {
        self.dragging = true;
        self.origin_x = x;
    }

    /// Pointer or touch move; ignored unless dragging
    pub fn move_to(&mut self, x: f64) -> bool {
        if !self.dragging {
            return false;
        }

        self.offset = x - self.origin_x;
        self.direction = indicator_for(self.offset);
        tracing::trace!("Drag offset {} ({:?})", self.offset, self.direction);
        true
    }

    /// Pointer or touch up
    ///
    /// Leaves dragging mode and classifies the final offset. A cancelled
    /// release resets the offset and direction; a committing release leaves
    /// them for the caller, which resets the tracker once the decision is
    /// applied.
    pub fn release(&mut self) -> GestureOutcome {
        if !self.dragging {
            return GestureOutcome::Ignored;
        }
        self.dragging = false;

        if self.offset > COMMIT_THRESHOLD {
            GestureOutcome::Commit(Decision::Select)
        } else if self.offset < -COMMIT_THRESHOLD {
            GestureOutcome::Commit(Decision::Reject)
        } else {
            self.offset = 0.0;
            self.direction = SwipeDirection::None;
            GestureOutcome::Cancelled
        }
    }

    /// Back to neutral
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Badge shown for a drag offset
pub fn indicator_for(offset: f64) -> SwipeDirection {
    if offset > INDICATOR_THRESHOLD {
        SwipeDirection::Right
    } else if offset < -INDICATOR_THRESHOLD {
        SwipeDirection::Left
    } else {
        SwipeDirection::None
    }
}
