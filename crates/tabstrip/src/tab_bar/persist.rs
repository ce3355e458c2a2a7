#![forbid(unsafe_code)]

//! Saved selection and scroll position.

use super::TabBar;

/// Persistable state for a [`TabBar`].
///
/// Tab content is owned by the host and rebuilt by it; only the user-facing
/// position survives here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TabBarPersistState {
    /// Selected tab index.
    pub current: Option<usize>,
    /// First tab of the scroll window.
    pub scroll_offset: usize,
}

impl TabBar {
    /// Capture the selection and scroll window.
    #[must_use]
    pub fn persist_state(&self) -> TabBarPersistState {
        TabBarPersistState {
            current: self.current,
            scroll_offset: self.offset,
        }
    }

    /// Restore a saved selection and scroll window.
    ///
    /// Out-of-range values are clamped to the current tab set. No selection
    /// notification is queued; a hovered tab is reported as unhovered.
    pub fn restore_state(&mut self, state: TabBarPersistState) {
        let len = self.tabs.len();
        self.current = match state.current {
            _ if len == 0 => None,
            Some(current) => Some(current.min(len - 1)),
            None => Some(0),
        };
        self.previous = None;
        self.offset = state.scroll_offset;
        self.reset_interaction();
        self.refresh();
    }
}
