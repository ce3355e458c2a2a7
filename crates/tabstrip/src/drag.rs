#![forbid(unsafe_code)]

//! Drag-to-rearrange payload.
//!
//! A payload is a plain tagged record. Acceptance is a pure function of the
//! payload and the target strip: same strip, or both strips in the same
//! rearrange group.

use crate::tab::TabSnapshot;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`TabBar`](crate::TabBar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabBarId(u64);

impl TabBarId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Payload kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragKind {
    #[default]
    TabElement,
}

/// Data carried by a tab drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: DragKind,
    /// Rearrange group of the source strip.
    pub rearrange_group: Option<u32>,
    /// Index of the dragged tab in the source strip.
    pub tab_index: usize,
    pub source: TabBarId,
    /// Whether the dragged tab was selected in the source strip.
    pub was_current: bool,
    /// Content of the dragged tab when the drag started.
    pub snapshot: TabSnapshot,
}

impl DragPayload {
    /// Whether a strip with identity `target` and group `target_group` may
    /// take this payload.
    #[must_use]
    pub fn accepted_by(&self, target: TabBarId, target_group: Option<u32>) -> bool {
        if self.kind != DragKind::TabElement {
            return false;
        }
        if self.source == target {
            return true;
        }
        matches!((self.rearrange_group, target_group), (Some(a), Some(b)) if a == b)
    }
}
