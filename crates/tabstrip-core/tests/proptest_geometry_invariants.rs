//! Property-based invariant tests for geometry and drag tracking.
//!
//! 1. `contains` agrees with the half-open interval definition.
//! 2. Intersection is contained in both operands.
//! 3. A drag tracker starts iff some update exceeded the threshold.

use proptest::prelude::*;
use tabstrip_core::event::PointerButton;
use tabstrip_core::geometry::{Point, Rect};
use tabstrip_core::gesture::{DragProgress, DragTracker, GestureConfig};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-50i32..50, -50i32..50, 0i32..80, 0i32..80).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn contains_matches_half_open(r in rect_strategy(), px in -100i32..150, py in -100i32..150) {
        let expected = r.width > 0
            && r.height > 0
            && px >= r.x
            && px < r.x + r.width
            && py >= r.y
            && py < r.y + r.height;
        prop_assert_eq!(r.contains(Point::new(px, py)), expected);
    }
}

proptest! {
    #[test]
    fn intersection_is_inside_both(a in rect_strategy(), b in rect_strategy(), px in -100i32..150, py in -100i32..150) {
        let i = a.intersection(&b);
        let p = Point::new(px, py);
        if i.contains(p) {
            prop_assert!(a.contains(p));
            prop_assert!(b.contains(p));
        }
    }
}

proptest! {
    #[test]
    fn drag_starts_iff_threshold_exceeded(
        threshold in 0u32..20,
        moves in proptest::collection::vec((-30i32..30, -30i32..30), 0..16),
    ) {
        let config = GestureConfig::default().drag_threshold(threshold);
        let origin = Point::new(0, 0);
        let mut tracker = DragTracker::new(origin, PointerButton::Left);
        let mut starts = 0;
        for (x, y) in &moves {
            if tracker.update(Point::new(*x, *y), &config) == DragProgress::Started {
                starts += 1;
            }
        }
        let exceeded = moves
            .iter()
            .any(|(x, y)| origin.manhattan_distance(Point::new(*x, *y)) > threshold);
        prop_assert_eq!(tracker.started(), exceeded);
        prop_assert_eq!(starts, usize::from(exceeded));
    }
}
