#![forbid(unsafe_code)]

//! Scroll window and overflow arrows.

use super::TabBar;
use crate::event::Arrow;
use tabstrip_core::geometry::Rect;

impl TabBar {
    /// Index of the first tab in the scroll window.
    #[must_use]
    pub const fn first_visible_tab(&self) -> usize {
        self.offset
    }

    /// Last tab that fits in the scroll window, if any tab is visible.
    #[must_use]
    pub const fn last_drawn_tab(&self) -> Option<usize> {
        self.last_drawn
    }

    /// Whether the overflow arrows are shown.
    #[must_use]
    pub const fn offset_buttons_visible(&self) -> bool {
        self.buttons_visible
    }

    /// Rectangle of an overflow arrow, `None` while the arrows are hidden.
    #[must_use]
    pub fn arrow_rect(&self, arrow: Arrow) -> Option<Rect> {
        if !self.buttons_visible {
            return None;
        }
        let (_, limit_minus) = self.limits();
        let dec = self.theme.decrement_arrow.width;
        let height = self.size.height;
        Some(match arrow {
            Arrow::Decrement => Rect::new(limit_minus, 0, dec, height),
            Arrow::Increment => Rect::new(
                limit_minus + dec,
                0,
                self.theme.increment_arrow.width,
                height,
            ),
        })
    }

    /// Scroll so the tab is fully inside the strip.
    ///
    /// Hidden tabs are left alone.
    pub fn ensure_tab_visible(&mut self, index: usize) -> crate::Result<()> {
        self.check_index("ensure_tab_visible", index)?;
        self.scroll_into_view(index);
        Ok(())
    }

    pub(crate) fn scroll_into_view(&mut self, index: usize) {
        if self.tabs[index].hidden {
            return;
        }
        if index < self.offset {
            self.offset = index;
            self.update_cache();
            return;
        }
        while self.last_drawn.is_some_and(|last| index > last) {
            let Some(next) = self.next_visible(self.offset) else {
                break;
            };
            self.offset = next;
            self.update_cache();
        }
    }

    /// Move the window start back while the tabs before it still fit.
    pub(crate) fn ensure_no_over_offset(&mut self) {
        let Some(last) = self.last_drawn else {
            return;
        };
        let (limit, limit_minus) = self.limits();
        let mut total: i32 = (self.offset..=last)
            .filter(|&i| !self.tabs[i].hidden)
            .map(|i| self.tabs[i].layout.width)
            .sum();
        let mut start = self.offset;
        while let Some(prev) = self.prev_visible(start) {
            let more_before = self.prev_visible(prev).is_some();
            let allowed = if more_before || self.missing_right {
                limit_minus
            } else {
                limit
            };
            let width = self.tabs[prev].layout.width;
            if total + width > allowed {
                break;
            }
            total += width;
            start = prev;
        }
        if start != self.offset {
            self.offset = start;
            self.update_cache();
        }
    }

    /// Move the window by one visible tab. Returns whether it moved.
    pub fn scroll_by_arrow(&mut self, arrow: Arrow) -> bool {
        let target = match arrow {
            Arrow::Decrement => self.prev_visible(self.offset),
            Arrow::Increment if self.missing_right => self.next_visible(self.offset),
            Arrow::Increment => None,
        };
        let Some(offset) = target else {
            return false;
        };
        self.offset = offset;
        self.update_cache();
        true
    }
}
