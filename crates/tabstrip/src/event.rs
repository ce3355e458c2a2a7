#![forbid(unsafe_code)]

//! Notifications, hit targets, and interaction states.

use crate::drag::DragPayload;
use tabstrip_core::event::PointerButton;
use tabstrip_core::geometry::Point;

/// Notification queued by a [`TabBar`](crate::TabBar).
///
/// Events are pushed in the order the state changes happen and stay queued
/// until the host calls [`TabBar::drain_events`](crate::TabBar::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBarEvent {
    /// `current` differs from `previous`.
    SelectionChanged {
        previous: Option<usize>,
        current: usize,
    },
    /// A pointer button was pressed on an enabled tab.
    TabClicked { index: usize, button: PointerButton },
    /// The close button of a tab was clicked.
    CloseRequested { index: usize },
    /// The hovered tab changed.
    Hovered { index: Option<usize> },
    /// The per-tab extra button was clicked.
    ExtraButtonClicked { index: usize },
    /// A tab was dragged to another position in the same strip.
    Rearranged { from: usize, to: usize },
    /// A tab dragged out of another strip was inserted here.
    AcceptedFromOther {
        source_group: Option<u32>,
        index: usize,
    },
    /// A drag crossed the threshold and now carries a payload.
    DragStarted(DragPayload),
    /// A drag ended outside this strip; the host routes the payload to
    /// whichever strip lies under `position`.
    DragReleased {
        payload: DragPayload,
        position: Point,
    },
}

/// Whether a pointer event was used by the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResult {
    /// The strip handled the event.
    Consumed,
    /// The event did not concern the strip.
    Ignored,
}

impl PointerResult {
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Overflow scroll arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    /// Moves the scroll window back by one tab.
    Decrement,
    /// Moves the scroll window forward by one tab.
    Increment,
}

/// Result of a sub-element hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Arrow(Arrow),
    Tab(usize),
    ExtraButton(usize),
    CloseButton(usize),
}

impl HitTarget {
    /// Tab index the target belongs to, if any.
    #[must_use]
    pub const fn tab_index(self) -> Option<usize> {
        match self {
            Self::Tab(i) | Self::ExtraButton(i) | Self::CloseButton(i) => Some(i),
            Self::Arrow(_) => None,
        }
    }
}

/// Pointer interaction state.
///
/// Press states are latched to the tab or arrow that was pressed; the
/// matching action fires only if the release lands on the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    HoverTab(usize),
    HoverExtraButton(usize),
    PressExtraButton(usize),
    HoverCloseButton(usize),
    PressCloseButton(usize),
    HoverArrow(Arrow),
    PressArrow(Arrow),
    Dragging { index: usize },
}

impl InteractionState {
    /// Hover state for a hit target.
    pub(crate) const fn hovering(target: Option<HitTarget>) -> Self {
        match target {
            None => Self::Idle,
            Some(HitTarget::Tab(i)) => Self::HoverTab(i),
            Some(HitTarget::ExtraButton(i)) => Self::HoverExtraButton(i),
            Some(HitTarget::CloseButton(i)) => Self::HoverCloseButton(i),
            Some(HitTarget::Arrow(a)) => Self::HoverArrow(a),
        }
    }

    /// A press (or drag) is in flight.
    #[must_use]
    pub const fn is_latched(self) -> bool {
        matches!(
            self,
            Self::PressExtraButton(_)
                | Self::PressCloseButton(_)
                | Self::PressArrow(_)
                | Self::Dragging { .. }
        )
    }

    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_state_follows_target() {
        assert_eq!(InteractionState::hovering(None), InteractionState::Idle);
        assert_eq!(
            InteractionState::hovering(Some(HitTarget::CloseButton(2))),
            InteractionState::HoverCloseButton(2)
        );
        assert_eq!(
            InteractionState::hovering(Some(HitTarget::Arrow(Arrow::Increment))),
            InteractionState::HoverArrow(Arrow::Increment)
        );
    }

    #[test]
    fn latched_states() {
        assert!(InteractionState::PressArrow(Arrow::Decrement).is_latched());
        assert!(InteractionState::Dragging { index: 0 }.is_latched());
        assert!(!InteractionState::HoverTab(0).is_latched());
        assert!(!InteractionState::Idle.is_dragging());
    }

    #[test]
    fn hit_target_tab_index() {
        assert_eq!(HitTarget::ExtraButton(4).tab_index(), Some(4));
        assert_eq!(HitTarget::Arrow(Arrow::Decrement).tab_index(), None);
    }
}
