#![forbid(unsafe_code)]

//! Drag threshold tracking.
//!
//! A press on a draggable element arms a [`DragTracker`]. Subsequent motion
//! is fed through [`DragTracker::update`]; once the pointer has travelled
//! further than [`GestureConfig::drag_threshold`] from the press origin the
//! tracker reports [`DragProgress::Started`] exactly once, then
//! [`DragProgress::Moving`] for every later update.
//!
//! # Invariants
//!
//! 1. `Started` is reported at most once per tracker.
//! 2. A tracker that never crossed the threshold reports `started() == false`,
//!    so its release is a click, not a drop.

use crate::event::PointerButton;
use crate::geometry::Point;

/// Thresholds for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// Minimum manhattan distance (pixels) before a drag starts (default: 5).
    pub drag_threshold: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { drag_threshold: 5 }
    }
}

impl GestureConfig {
    /// Set the drag threshold.
    #[must_use]
    pub const fn drag_threshold(mut self, threshold: u32) -> Self {
        self.drag_threshold = threshold;
        self
    }
}

/// Result of feeding motion into a [`DragTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragProgress {
    /// Still inside the threshold; treat as a potential click.
    Pending,
    /// The threshold was crossed by this update.
    Started,
    /// Already dragging.
    Moving,
}

/// Tracks an ongoing or potential drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTracker {
    start_pos: Point,
    button: PointerButton,
    last_pos: Point,
    started: bool,
}

impl DragTracker {
    /// Arm a tracker at the press position.
    #[must_use]
    pub const fn new(start_pos: Point, button: PointerButton) -> Self {
        Self {
            start_pos,
            button,
            last_pos: start_pos,
            started: false,
        }
    }

    /// Feed a new pointer position.
    pub fn update(&mut self, pos: Point, config: &GestureConfig) -> DragProgress {
        self.last_pos = pos;
        if self.started {
            return DragProgress::Moving;
        }
        if self.start_pos.manhattan_distance(pos) > config.drag_threshold {
            self.started = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(
                message = "gesture.drag_start",
                x = self.start_pos.x,
                y = self.start_pos.y
            );
            return DragProgress::Started;
        }
        DragProgress::Pending
    }

    /// Press origin.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start_pos
    }

    /// Most recent position.
    #[must_use]
    pub const fn last(&self) -> Point {
        self.last_pos
    }

    /// Button that armed the tracker.
    #[must_use]
    pub const fn button(&self) -> PointerButton {
        self.button
    }

    /// Whether the threshold has been crossed.
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_motion_stays_pending() {
        let config = GestureConfig::default();
        let mut tracker = DragTracker::new(Point::new(10, 10), PointerButton::Left);
        assert_eq!(tracker.update(Point::new(12, 11), &config), DragProgress::Pending);
        assert_eq!(tracker.update(Point::new(13, 12), &config), DragProgress::Pending);
        assert!(!tracker.started());
        assert_eq!(tracker.last(), Point::new(13, 12));
    }

    #[test]
    fn crossing_threshold_starts_once() {
        let config = GestureConfig::default().drag_threshold(3);
        let mut tracker = DragTracker::new(Point::new(0, 0), PointerButton::Left);
        assert_eq!(tracker.update(Point::new(4, 0), &config), DragProgress::Started);
        assert_eq!(tracker.update(Point::new(0, 0), &config), DragProgress::Moving);
        assert!(tracker.started());
        assert_eq!(tracker.start(), Point::new(0, 0));
        assert_eq!(tracker.button(), PointerButton::Left);
    }

    #[test]
    fn zero_threshold_starts_on_any_motion() {
        let config = GestureConfig::default().drag_threshold(0);
        let mut tracker = DragTracker::new(Point::new(5, 5), PointerButton::Left);
        assert_eq!(tracker.update(Point::new(5, 5), &config), DragProgress::Pending);
        assert_eq!(tracker.update(Point::new(5, 6), &config), DragProgress::Started);
    }
}
