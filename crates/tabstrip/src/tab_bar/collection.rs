#![forbid(unsafe_code)]

//! Tab collection and selection.
//!
//! Index checks run before anything is touched: an `Err` leaves the strip
//! exactly as it was.

use super::TabBar;
use crate::event::TabBarEvent;
use crate::tab::{Icon, Tab, TabLayout};
use std::sync::Arc;
use tabstrip_text::TextDirection;

/// Where index `i` ends up after the tab at `from` moves to `to`.
pub(crate) fn remap_after_move(i: usize, from: usize, to: usize) -> usize {
    if i == from {
        to
    } else if from < i && i <= to {
        i - 1
    } else if to <= i && i < from {
        i + 1
    } else {
        i
    }
}

/// Where index `i` ends up after the tab at `removed` goes away.
fn remap_after_remove(i: usize, removed: usize) -> Option<usize> {
    match i.cmp(&removed) {
        std::cmp::Ordering::Less => Some(i),
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some(i - 1),
    }
}

impl TabBar {
    /// Append a tab and return its index.
    ///
    /// The first tab added to an empty strip becomes the current tab.
    pub fn add_tab(&mut self, text: impl Into<String>, icon: Option<Arc<Icon>>) -> usize {
        let tab = Tab::new(text.into(), icon, &*self.localizer);
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        self.refresh();
        if self.current.is_none() {
            self.select_index(0);
        }
        index
    }

    /// Grow with default tabs or truncate trailing tabs.
    pub fn set_tab_count(&mut self, count: usize) {
        let len = self.tabs.len();
        if count == len {
            return;
        }
        if count < len {
            self.tabs.truncate(count);
            let last = count.checked_sub(1);
            self.current = self.current.and_then(|c| if c < count { Some(c) } else { last });
            self.previous = self.previous.and_then(|p| if p < count { Some(p) } else { last });
        } else {
            for _ in len..count {
                let tab = Tab::new(String::new(), None, &*self.localizer);
                self.tabs.push(tab);
            }
        }
        self.reset_interaction();
        self.refresh();
        if self.current.is_none() && !self.tabs.is_empty() {
            self.select_index(0);
        }
    }

    /// Remove a tab and hand it back.
    ///
    /// If it was the current tab, the tab that shifts into its position
    /// becomes current (or the new last tab). No selection notification is
    /// queued for this.
    pub fn remove_tab(&mut self, index: usize) -> crate::Result<Tab> {
        self.check_index("remove_tab", index)?;
        let mut tab = self.tabs.remove(index);
        tab.layout = TabLayout::default();
        let len = self.tabs.len();

        self.current = self.current.and_then(|c| match remap_after_remove(c, index) {
            None if len == 0 => None,
            None => Some(index.min(len - 1)),
            kept => kept,
        });
        self.previous = self
            .previous
            .and_then(|p| remap_after_remove(p, index));
        if self.offset > index {
            self.offset -= 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tab_bar.remove",
            index,
            remaining = len,
            current = ?self.current
        );

        self.reset_interaction();
        self.refresh();
        Ok(tab)
    }

    /// Move the tab at `from` to position `to`.
    ///
    /// The current and previous selections keep pointing at the same tabs.
    pub fn move_tab(&mut self, from: usize, to: usize) -> crate::Result<()> {
        self.check_index("move_tab", from)?;
        self.check_index("move_tab", to)?;
        if from == to {
            return Ok(());
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);

        let remap = |i: usize| remap_after_move(i, from, to);
        self.current = self.current.map(remap);
        self.previous = self.previous.map(remap);
        self.hover = self.hover.map(remap);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tab_bar.move", from, to);

        self.refresh();
        Ok(())
    }

    /// Remove every tab.
    pub fn clear_tabs(&mut self) {
        self.tabs.clear();
        self.current = None;
        self.previous = None;
        self.offset = 0;
        self.reset_interaction();
        self.refresh();
    }

    /// Insert an already built tab, keeping selections on their tabs.
    pub(crate) fn insert_tab(&mut self, at: usize, tab: Tab) -> usize {
        let at = at.min(self.tabs.len());
        self.tabs.insert(at, tab);
        let shift = |i: usize| if i >= at { i + 1 } else { i };
        self.current = self.current.map(shift);
        self.previous = self.previous.map(shift);
        self.hover = self.hover.map(shift);
        if self.offset > at {
            self.offset += 1;
        }
        at
    }

    // --- selection ---

    /// Select a tab. Returns whether the selection changed.
    ///
    /// Disabled tabs can be selected programmatically; only clicks reject
    /// them.
    pub fn set_current_tab(&mut self, index: usize) -> crate::Result<bool> {
        self.check_index("set_current_tab", index)?;
        Ok(self.select_index(index))
    }

    /// Select the next tab that is neither disabled nor hidden.
    pub fn select_next_available(&mut self) -> bool {
        let start = self.current.map_or(0, |c| c + 1);
        let target = (start..self.tabs.len()).find(|&i| self.selectable(i));
        target.is_some_and(|i| self.select_index(i))
    }

    /// Select the previous tab that is neither disabled nor hidden.
    pub fn select_previous_available(&mut self) -> bool {
        let end = self.current.unwrap_or(0);
        let target = (0..end).rev().find(|&i| self.selectable(i));
        target.is_some_and(|i| self.select_index(i))
    }

    fn selectable(&self, index: usize) -> bool {
        let tab = &self.tabs[index];
        !tab.disabled && !tab.hidden
    }

    pub(crate) fn select_index(&mut self, index: usize) -> bool {
        if self.current == Some(index) {
            return false;
        }
        let previous = self.current;
        self.previous = previous;
        self.current = Some(index);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "tab_bar.select", from = ?previous, to = index);

        self.update_cache();
        self.follow_current();
        self.notify(TabBarEvent::SelectionChanged {
            previous,
            current: index,
        });
        true
    }

    // --- per-tab setters ---

    pub fn set_tab_title(&mut self, index: usize, text: impl Into<String>) -> crate::Result<()> {
        self.check_index("set_tab_title", index)?;
        let tab = &mut self.tabs[index];
        tab.text = text.into();
        tab.relocalize(&*self.localizer);
        self.refresh();
        Ok(())
    }

    pub fn set_tab_icon(&mut self, index: usize, icon: Option<Arc<Icon>>) -> crate::Result<()> {
        self.check_index("set_tab_icon", index)?;
        self.tabs[index].icon = icon;
        self.refresh();
        Ok(())
    }

    /// Set or clear the per-tab extra button.
    pub fn set_tab_button_icon(
        &mut self,
        index: usize,
        icon: Option<Arc<Icon>>,
    ) -> crate::Result<()> {
        self.check_index("set_tab_button_icon", index)?;
        self.tabs[index].button_icon = icon;
        self.refresh();
        Ok(())
    }

    pub fn set_tab_disabled(&mut self, index: usize, disabled: bool) -> crate::Result<()> {
        self.check_index("set_tab_disabled", index)?;
        self.tabs[index].disabled = disabled;
        self.refresh();
        Ok(())
    }

    /// Hide or show a tab. Hidden tabs keep their index.
    pub fn set_tab_hidden(&mut self, index: usize, hidden: bool) -> crate::Result<()> {
        self.check_index("set_tab_hidden", index)?;
        if self.tabs[index].hidden == hidden {
            return Ok(());
        }
        self.tabs[index].hidden = hidden;
        if hidden && self.hover == Some(index) {
            self.hover = None;
            self.notify(TabBarEvent::Hovered { index: None });
        }
        self.refresh();
        Ok(())
    }

    /// Set the language tag used for shaping.
    pub fn set_tab_language(&mut self, index: usize, language: impl Into<String>) -> crate::Result<()> {
        self.check_index("set_tab_language", index)?;
        let tab = &mut self.tabs[index];
        tab.language = language.into();
        tab.shaped = None;
        self.refresh();
        Ok(())
    }

    pub fn set_tab_text_direction(
        &mut self,
        index: usize,
        direction: TextDirection,
    ) -> crate::Result<()> {
        self.check_index("set_tab_text_direction", index)?;
        let tab = &mut self.tabs[index];
        tab.direction = direction;
        tab.shaped = None;
        self.refresh();
        Ok(())
    }

    /// Set one OpenType feature for the tab's label.
    pub fn set_tab_shaping_feature(
        &mut self,
        index: usize,
        name: impl Into<String>,
        value: i32,
    ) -> crate::Result<()> {
        self.check_index("set_tab_shaping_feature", index)?;
        let tab = &mut self.tabs[index];
        if tab.features.set(name, value) != Some(value) {
            tab.shaped = None;
            self.refresh();
        }
        Ok(())
    }

    /// Value of a shaping feature, or [`UNSET_FEATURE`](tabstrip_text::UNSET_FEATURE).
    pub fn tab_shaping_feature(&self, index: usize, name: &str) -> crate::Result<i32> {
        self.check_index("tab_shaping_feature", index)?;
        Ok(self.tabs[index].features.get_or_unset(name))
    }

    pub fn clear_tab_shaping_features(&mut self, index: usize) -> crate::Result<()> {
        self.check_index("clear_tab_shaping_features", index)?;
        let tab = &mut self.tabs[index];
        if tab.features.is_empty() {
            return Ok(());
        }
        tab.features.clear();
        tab.shaped = None;
        self.refresh();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::TabAlignment;
    use super::super::test_support::strip;
    use super::*;
    use crate::error::TabBarError;
    use tabstrip_text::UNSET_FEATURE;

    fn titles(bar: &TabBar) -> Vec<&str> {
        bar.tabs().iter().map(Tab::text).collect()
    }

    #[test]
    fn first_tab_is_selected_with_notification() {
        let mut bar = TabBar::new();
        assert_eq!(bar.add_tab("a", None), 0);
        assert_eq!(bar.add_tab("b", None), 1);
        assert_eq!(bar.current_tab(), Some(0));
        assert_eq!(bar.previous_tab(), None);
        assert_eq!(
            bar.drain_events(),
            vec![TabBarEvent::SelectionChanged {
                previous: None,
                current: 0
            }]
        );
    }

    #[test]
    fn remove_current_selects_shifted_neighbor() {
        let mut bar = strip(&["a", "b", "c"], 300, TabAlignment::Left);
        bar.set_current_tab(1).unwrap();
        bar.drain_events();
        let removed = bar.remove_tab(1).unwrap();
        assert_eq!(removed.text(), "b");
        assert_eq!(bar.current_tab(), Some(1));
        assert_eq!(bar.tab(1).map(Tab::text), Some("c"));
        assert_eq!(bar.previous_tab(), Some(0));
        assert!(bar.drain_events().is_empty());
    }

    #[test]
    fn remove_last_current_falls_back() {
        let mut bar = strip(&["a", "b", "c"], 300, TabAlignment::Left);
        bar.set_current_tab(2).unwrap();
        bar.remove_tab(2).unwrap();
        assert_eq!(bar.current_tab(), Some(1));
        bar.remove_tab(0).unwrap();
        bar.remove_tab(0).unwrap();
        assert_eq!(bar.current_tab(), None);
        assert_eq!(bar.previous_tab(), None);
    }

    #[test]
    fn remove_adjusts_previous() {
        let mut bar = strip(&["a", "b", "c", "d"], 400, TabAlignment::Left);
        bar.set_current_tab(2).unwrap();
        bar.set_current_tab(3).unwrap();
        assert_eq!(bar.previous_tab(), Some(2));
        bar.remove_tab(0).unwrap();
        assert_eq!(bar.previous_tab(), Some(1));
        assert_eq!(bar.current_tab(), Some(2));
        bar.remove_tab(1).unwrap();
        assert_eq!(bar.previous_tab(), None);
    }

    #[test]
    fn out_of_range_leaves_strip_untouched() {
        let mut bar = strip(&["a", "b"], 300, TabAlignment::Left);
        assert_eq!(
            bar.remove_tab(2).unwrap_err(),
            TabBarError::IndexOutOfRange {
                operation: "remove_tab",
                index: 2,
                len: 2
            }
        );
        assert!(bar.move_tab(0, 5).is_err());
        assert!(bar.set_tab_title(7, "x").is_err());
        assert!(bar.set_current_tab(2).is_err());
        assert_eq!(titles(&bar), ["a", "b"]);
        assert_eq!(bar.current_tab(), Some(0));
    }

    #[test]
    fn move_tracks_selection() {
        let mut bar = strip(&["a", "b", "c", "d"], 400, TabAlignment::Left);
        bar.set_current_tab(2).unwrap();
        bar.drain_events();
        bar.move_tab(2, 0).unwrap();
        assert_eq!(titles(&bar), ["c", "a", "b", "d"]);
        assert_eq!(bar.current_tab(), Some(0));
        assert_eq!(bar.previous_tab(), Some(1));
        bar.move_tab(1, 3).unwrap();
        assert_eq!(titles(&bar), ["c", "b", "d", "a"]);
        assert_eq!(bar.previous_tab(), Some(3));
        assert!(bar.drain_events().is_empty());
    }

    #[test]
    fn remap_after_move_is_a_permutation() {
        for from in 0..5 {
            for to in 0..5 {
                let mut seen: Vec<usize> = (0..5).map(|i| remap_after_move(i, from, to)).collect();
                seen.sort_unstable();
                assert_eq!(seen, vec![0, 1, 2, 3, 4]);
            }
        }
    }

    #[test]
    fn set_tab_count_grows_and_truncates() {
        let mut bar = TabBar::new();
        bar.set_tab_count(3);
        assert_eq!(bar.tab_count(), 3);
        assert_eq!(bar.current_tab(), Some(0));
        assert_eq!(bar.tabs()[2].text(), "");
        bar.set_current_tab(2).unwrap();
        bar.set_tab_count(2);
        assert_eq!(bar.current_tab(), Some(1));
        assert_eq!(bar.previous_tab(), Some(0));
        bar.set_tab_count(0);
        assert_eq!(bar.current_tab(), None);
        assert_eq!(bar.previous_tab(), None);
    }

    #[test]
    fn clear_resets_indices() {
        let mut bar = strip(&["a", "b"], 300, TabAlignment::Left);
        bar.clear_tabs();
        assert_eq!(bar.tab_count(), 0);
        assert_eq!(bar.current_tab(), None);
        assert_eq!(bar.previous_tab(), None);
        assert_eq!(bar.last_drawn_tab(), None);
    }

    #[test]
    fn selection_notifies_only_on_change() {
        let mut bar = strip(&["a", "b"], 300, TabAlignment::Left);
        assert!(!bar.set_current_tab(0).unwrap());
        assert!(bar.set_current_tab(1).unwrap());
        assert_eq!(
            bar.drain_events(),
            vec![TabBarEvent::SelectionChanged {
                previous: Some(0),
                current: 1
            }]
        );
        assert_eq!(bar.previous_tab(), Some(0));
    }

    #[test]
    fn next_and_previous_available_skip_blocked_tabs() {
        let mut bar = strip(&["a", "b", "c", "d"], 400, TabAlignment::Left);
        bar.set_tab_disabled(1, true).unwrap();
        bar.set_tab_hidden(2, true).unwrap();
        assert!(bar.select_next_available());
        assert_eq!(bar.current_tab(), Some(3));
        assert!(!bar.select_next_available());
        assert!(bar.select_previous_available());
        assert_eq!(bar.current_tab(), Some(0));
        assert!(!bar.select_previous_available());
    }

    #[test]
    fn shaping_inputs_drop_handle() {
        let mut bar = strip(&["ab"], 300, TabAlignment::Left);
        assert!(bar.tabs()[0].shaped().is_some());
        bar.set_tab_language(0, "ar").unwrap();
        bar.set_tab_text_direction(0, TextDirection::Rtl).unwrap();
        bar.set_tab_shaping_feature(0, "liga", 0).unwrap();
        let tab = &bar.tabs()[0];
        assert_eq!(tab.language(), "ar");
        assert_eq!(tab.direction(), TextDirection::Rtl);
        // Layout re-shapes lazily right after each change.
        assert!(tab.shaped().is_some());
        assert_eq!(bar.tab_shaping_feature(0, "liga").unwrap(), 0);
        assert_eq!(bar.tab_shaping_feature(0, "kern").unwrap(), UNSET_FEATURE);
        bar.clear_tab_shaping_features(0).unwrap();
        assert_eq!(bar.tab_shaping_feature(0, "liga").unwrap(), UNSET_FEATURE);
        assert!(bar.tab_shaping_feature(1, "liga").is_err());
    }

    #[test]
    fn title_change_relayouts() {
        let mut bar = strip(&["ab"], 300, TabAlignment::Left);
        bar.set_tab_title(0, "abcdef").unwrap();
        assert_eq!(bar.tabs()[0].layout().width, 60);
        assert_eq!(bar.tabs()[0].display_text(), "abcdef");
    }

    #[test]
    fn hiding_window_start_moves_it() {
        let mut bar = strip(&["Tab0", "Tab1", "Tab2", "Tab3"], 100, TabAlignment::Left);
        bar.ensure_tab_visible(3).unwrap();
        assert_eq!(bar.first_visible_tab(), 2);
        bar.set_tab_hidden(2, true).unwrap();
        assert!(!bar.tabs()[bar.first_visible_tab()].is_hidden());
    }

    #[test]
    fn structural_changes_report_cleared_hover() {
        use tabstrip_core::event::PointerEvent;

        let mut bar = strip(&["Tab0", "Tab1", "Tab2"], 300, TabAlignment::Left);
        bar.handle_pointer(&PointerEvent::moved(55, 10));
        assert_eq!(bar.hovered_tab(), Some(1));
        bar.drain_events();

        bar.remove_tab(2).unwrap();
        assert_eq!(bar.hovered_tab(), None);
        assert_eq!(bar.drain_events(), vec![TabBarEvent::Hovered { index: None }]);

        bar.handle_pointer(&PointerEvent::moved(5, 10));
        bar.drain_events();
        bar.set_tab_count(1);
        assert_eq!(bar.drain_events(), vec![TabBarEvent::Hovered { index: None }]);

        bar.handle_pointer(&PointerEvent::moved(5, 10));
        bar.drain_events();
        bar.clear_tabs();
        assert_eq!(bar.drain_events(), vec![TabBarEvent::Hovered { index: None }]);

        bar.add_tab("Tab0", None);
        bar.add_tab("Tab1", None);
        bar.handle_pointer(&PointerEvent::moved(55, 10));
        assert_eq!(bar.hovered_tab(), Some(1));
        bar.drain_events();
        bar.set_tab_hidden(1, true).unwrap();
        assert_eq!(bar.drain_events(), vec![TabBarEvent::Hovered { index: None }]);
        bar.clear_tabs();
        bar.drain_events();

        // Nothing hovered, nothing reported.
        bar.add_tab("Tab0", None);
        bar.drain_events();
        bar.remove_tab(0).unwrap();
        assert!(bar.drain_events().is_empty());
    }
}
