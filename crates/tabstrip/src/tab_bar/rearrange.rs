#![forbid(unsafe_code)]

//! Drag-to-rearrange.
//!
//! A drop inside the source strip is a move. A drop on another strip in the
//! same rearrange group removes the tab from the source and inserts it into
//! the target. Rejected drops change nothing and queue nothing.

use super::TabBar;
use crate::drag::{DragKind, DragPayload};
use crate::event::TabBarEvent;
use crate::tab::Tab;
use tabstrip_core::geometry::Point;

impl TabBar {
    pub(crate) fn payload_for(&self, index: usize) -> Option<DragPayload> {
        let tab = self.tabs.get(index)?;
        Some(DragPayload {
            kind: DragKind::TabElement,
            rearrange_group: self.rearrange_group,
            tab_index: index,
            source: self.id,
            was_current: self.current == Some(index),
            snapshot: tab.snapshot(),
        })
    }

    /// Payload for dragging the tab under `point`.
    ///
    /// `None` when rearranging is off or the point is not over an enabled tab.
    #[must_use]
    pub fn drag_payload_at(&self, point: Point) -> Option<DragPayload> {
        if !self.drag_rearrange {
            return None;
        }
        let index = self.tab_at_point(point)?;
        if self.tabs[index].disabled {
            return None;
        }
        self.payload_for(index)
    }

    /// Current index of the tab a payload was taken from.
    ///
    /// The recorded index wins while it still holds the snapshotted tab.
    /// Otherwise the matching tab closest to it is used, so a drag survives
    /// the host closing or reordering other tabs mid-flight.
    pub(crate) fn locate_dragged(&self, payload: &DragPayload) -> Option<usize> {
        let recorded = payload.tab_index;
        if self
            .tabs
            .get(recorded)
            .is_some_and(|tab| tab.snapshot() == payload.snapshot)
        {
            return Some(recorded);
        }
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.snapshot() == payload.snapshot)
            .map(|(index, _)| index)
            .min_by_key(|index| index.abs_diff(recorded))
    }

    /// Whether this strip accepts the payload.
    #[must_use]
    pub fn can_drop(&self, payload: &DragPayload) -> bool {
        self.drag_rearrange && payload.accepted_by(self.id, self.rearrange_group)
    }

    /// Drop a payload that originated in this strip.
    ///
    /// The tab moves to the tab under `point`, or to the end when the point
    /// is past the last tab.
    pub fn drop_within(&mut self, payload: &DragPayload, point: Point) -> bool {
        let located = (payload.source == self.id && self.can_drop(payload))
            .then(|| self.locate_dragged(payload))
            .flatten();
        let Some(from) = located else {
            #[cfg(feature = "tracing")]
            self.log_drop(payload, false);
            return false;
        };
        let to = self
            .tab_at_point(point)
            .unwrap_or(self.tabs.len() - 1);
        #[cfg(feature = "tracing")]
        self.log_drop(payload, true);
        if from == to {
            return true;
        }
        if self.move_tab(from, to).is_err() {
            return false;
        }
        self.notify(TabBarEvent::Rearranged { from, to });
        true
    }

    /// Drop a payload dragged out of `source`.
    ///
    /// The tab is inserted before the tab under `point`, or appended.
    pub fn drop_from(&mut self, source: &mut TabBar, payload: &DragPayload, point: Point) -> bool {
        if payload.source != source.id || !self.can_drop(payload) {
            #[cfg(feature = "tracing")]
            self.log_drop(payload, false);
            return false;
        }
        let at = self.tab_at_point(point).unwrap_or(self.tabs.len());
        self.accept_tab_at(source, payload, at)
    }

    /// Move the payload's tab out of `source` and insert it at `at`.
    fn accept_tab_at(&mut self, source: &mut TabBar, payload: &DragPayload, at: usize) -> bool {
        let removed = source.locate_dragged(payload).and_then(|index| {
            let was_current = source.current == Some(index);
            source.remove_tab(index).ok().map(|tab| (tab, was_current))
        });
        let Some((removed, was_current)) = removed else {
            #[cfg(feature = "tracing")]
            self.log_drop(payload, false);
            return false;
        };
        #[cfg(feature = "tracing")]
        self.log_drop(payload, true);

        let tab = Tab::from_snapshot(&removed.snapshot(), &*self.localizer);
        let was_empty = self.tabs.is_empty();
        let at = self.insert_tab(at, tab);
        self.refresh();
        if was_empty || was_current {
            self.select_index(at);
        }
        self.notify(TabBarEvent::AcceptedFromOther {
            source_group: payload.rearrange_group,
            index: at,
        });
        true
    }

    #[cfg(feature = "tracing")]
    fn log_drop(&self, payload: &DragPayload, accepted: bool) {
        tracing::debug!(
            message = "tab_bar.drop",
            accepted,
            index = payload.tab_index,
            same_strip = payload.source == self.id,
            source_group = ?payload.rearrange_group,
            target_group = ?self.rearrange_group
        );
    }
}
