#![forbid(unsafe_code)]

//! Tab measurement and the per-tab layout cache.
//!
//! A recompute runs in three passes:
//!
//! 1. Measure every visible tab (shaping lazily) and reset all caches.
//! 2. Scan from the window start, accepting tabs until the limit is hit.
//!    The first visible tab is always accepted so something is drawn.
//! 3. Place the accepted run at the alignment origin and fill in the
//!    sub-element rectangles.
//!
//! While the overflow arrows are shown the usable width shrinks by the
//! arrows' combined width; they sit at the trailing edge.

use super::{TabAlignment, TabBar};
use crate::tab::{Tab, TabLayout};
use crate::theme::TabBarTheme;
use tabstrip_core::geometry::{Rect, Sides, Size};
use tabstrip_text::{ShapedLine, TextShaper};
#[cfg(feature = "tracing")]
use web_time::Instant;

/// Width breakdown of one tab.
struct Measure {
    width: i32,
    text_width: i32,
    elided: Option<ShapedLine>,
}

/// Size a tab occupies, shaping its label first if needed.
fn measure(
    tab: &mut Tab,
    shaper: &mut dyn TextShaper,
    theme: &TabBarTheme,
    padding: Sides,
    close_visible: bool,
    max_tab_width: i32,
) -> Measure {
    if tab.shaped.is_none() {
        let line = shaper.shape(&tab.shape_request());
        tab.shaped = Some(line);
    }
    let text_width = tab.shaped.as_ref().map_or(0, |line| line.width);
    let has_text = !tab.localized.is_empty();
    let sep = theme.h_separation;

    let mut width = padding.horizontal_sum();
    if let Some(icon) = &tab.icon {
        width += icon.width;
        if has_text {
            width += sep;
        }
    }
    width += text_width;
    if let Some(icon) = &tab.button_icon {
        width += sep + icon.width + theme.button_padding.horizontal_sum();
    }
    if close_visible {
        width += sep + theme.close_icon.width + theme.button_padding.horizontal_sum();
    }

    if max_tab_width > 0 && width > max_tab_width {
        let textless = width - text_width;
        let slot = (max_tab_width.max(textless) - textless).max(1);
        let elided = shaper.shape(&tab.shape_request().max_width(slot));
        return Measure {
            width: textless + slot,
            text_width: slot,
            elided: Some(elided),
        };
    }

    Measure {
        width,
        text_width,
        elided: None,
    }
}

/// A `size`-sized box vertically centered in a strip of `height`.
fn centered(x: i32, size: Size, height: i32) -> Rect {
    Rect::new(x, (height - size.height) / 2, size.width, size.height)
}

impl TabBar {
    /// Usable width without and with the arrow reservation.
    pub(crate) fn limits(&self) -> (i32, i32) {
        let limit = self.size.width;
        if self.scrolling_enabled {
            (limit, limit - self.theme.arrows_width())
        } else {
            (limit, limit)
        }
    }

    /// Width available to the tab run under the current arrow visibility.
    pub(crate) fn available_width(&self) -> i32 {
        let (limit, limit_minus) = self.limits();
        if self.buttons_visible {
            limit_minus
        } else {
            limit
        }
    }

    /// Keep the window start on a visible tab: itself, else the next visible
    /// one, else the previous one, else 0.
    pub(crate) fn clamp_offset(&mut self) {
        if self.tabs.is_empty() {
            self.offset = 0;
            return;
        }
        self.offset = self.offset.min(self.tabs.len() - 1);
        if !self.tabs[self.offset].hidden {
            return;
        }
        self.offset = self
            .next_visible(self.offset)
            .or_else(|| self.prev_visible(self.offset))
            .unwrap_or(0);
    }

    /// Recompute every cached offset, width, and sub-rectangle.
    pub(crate) fn update_cache(&mut self) {
        #[cfg(feature = "tracing")]
        let layout_start = Instant::now();
        #[cfg(feature = "tracing")]
        let layout_span = tracing::debug_span!(
            "tab_bar.layout",
            tab_count = self.tabs.len(),
            first_visible = tracing::field::Empty,
            last_drawn = tracing::field::Empty,
            arrows_visible = tracing::field::Empty,
            layout_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _layout_guard = layout_span.enter();

        let mut content = 0;
        for index in 0..self.tabs.len() {
            let close_visible = self.close_eligible(index);
            let selected = self.current == Some(index);
            let tab = &mut self.tabs[index];
            tab.layout = TabLayout::default();
            if tab.hidden {
                continue;
            }
            let padding = self.theme.padding_for(tab.disabled, selected);
            let m = measure(
                tab,
                &mut *self.shaper,
                &self.theme,
                padding,
                close_visible,
                self.max_tab_width,
            );
            tab.layout.width = m.width;
            tab.layout.text_width = m.text_width;
            tab.layout.elided = m.elided;
            content += m.width;
        }

        self.clamp_offset();
        let (limit, limit_minus) = self.limits();
        let has_left = self.prev_visible(self.offset).is_some();

        let mut used = 0;
        let mut last: Option<usize> = None;
        let mut missing_right = false;
        for index in self.offset..self.tabs.len() {
            let tab = &self.tabs[index];
            if tab.hidden {
                continue;
            }
            let cap = if has_left { limit_minus } else { limit };
            if self.clip_tabs && last.is_some() && used + tab.layout.width > cap {
                missing_right = true;
                break;
            }
            used += tab.layout.width;
            last = Some(index);
        }

        // Make room for the arrows that the overflow just made necessary.
        if missing_right && self.scrolling_enabled {
            while used > limit_minus
                && let Some(end) = last
                && end > self.offset
            {
                used -= self.tabs[end].layout.width;
                last = self.prev_visible(end);
            }
        }

        self.last_drawn = last;
        self.missing_right = missing_right;
        self.buttons_visible = self.scrolling_enabled && (has_left || missing_right);
        let available = self.available_width();
        self.undrawable_overflow = !self.clip_tabs && used > available;

        let mut cursor = match self.alignment {
            TabAlignment::Left => 0,
            TabAlignment::Center => ((available - content) / 2).max(0),
            TabAlignment::Right => (available - content).max(0),
        };
        if let Some(end) = last {
            for index in self.offset..=end {
                if self.tabs[index].hidden {
                    continue;
                }
                self.place_tab(index, cursor);
                cursor += self.tabs[index].layout.width;
            }
        }

        #[cfg(feature = "tracing")]
        {
            layout_span.record("first_visible", self.offset as u64);
            if let Some(end) = self.last_drawn {
                layout_span.record("last_drawn", end as u64);
            }
            layout_span.record("arrows_visible", self.buttons_visible);
            let elapsed_us = layout_start.elapsed().as_micros() as u64;
            layout_span.record("layout_duration_us", elapsed_us);
        }
    }

    /// Fill in the drawn cache of one accepted tab at `x`.
    fn place_tab(&mut self, index: usize, x: i32) {
        let height = self.size.height;
        let close_visible = self.close_eligible(index);
        let padding = self
            .theme
            .padding_for(self.tabs[index].disabled, self.current == Some(index));
        let theme = &self.theme;
        let tab = &mut self.tabs[index];
        let sep = theme.h_separation;
        let has_text = !tab.localized.is_empty();

        tab.layout.offset = x;
        tab.layout.drawn = true;

        let mut cursor = x + padding.left;
        if let Some(icon) = &tab.icon {
            tab.layout.icon_rect = centered(cursor, icon.size(), height);
            cursor += icon.width;
            if has_text {
                cursor += sep;
            }
        }

        let line_height = tab
            .layout
            .elided
            .as_ref()
            .or(tab.shaped.as_ref())
            .map_or(0, |line| line.height);
        tab.layout.text_rect = centered(
            cursor,
            Size::new(tab.layout.text_width, line_height),
            height,
        );
        cursor += tab.layout.text_width;

        let button_pad = theme.button_padding;
        if let Some(icon) = &tab.button_icon {
            cursor += sep;
            let size = Size::new(
                icon.width + button_pad.horizontal_sum(),
                icon.height + button_pad.vertical_sum(),
            );
            tab.layout.button_rect = centered(cursor, size, height);
            cursor += size.width;
        }

        if close_visible {
            cursor += sep;
            let size = Size::new(
                theme.close_icon.width + button_pad.horizontal_sum(),
                theme.close_icon.height + button_pad.vertical_sum(),
            );
            tab.layout.close_rect = centered(cursor, size, height);
        }
    }

    /// Cached rectangle of a tab; empty when the tab is not drawn.
    pub fn tab_rect(&self, index: usize) -> crate::Result<Rect> {
        self.check_index("tab_rect", index)?;
        let layout = &self.tabs[index].layout;
        if !layout.drawn {
            return Ok(Rect::default());
        }
        Ok(Rect::new(layout.offset, 0, layout.width, self.size.height))
    }

    /// Cached close button rectangle; empty unless eligible and drawn.
    pub fn tab_close_rect(&self, index: usize) -> crate::Result<Rect> {
        self.check_index("tab_close_rect", index)?;
        Ok(self.tabs[index].layout.close_rect)
    }

    /// Cached extra button rectangle; empty without a button icon.
    pub fn tab_extra_button_rect(&self, index: usize) -> crate::Result<Rect> {
        self.check_index("tab_extra_button_rect", index)?;
        Ok(self.tabs[index].layout.button_rect)
    }

    /// Whether clipping is off and the drawn run spills past the strip.
    #[must_use]
    pub const fn has_undrawable_overflow(&self) -> bool {
        self.undrawable_overflow
    }

    /// Smallest size that still shows a tab.
    #[must_use]
    pub fn minimum_size(&self) -> Size {
        let mut height = self.theme.min_height;
        let mut widest = 0;
        let mut total = 0;
        let mut visible = 0;
        let button_pad = self.theme.button_padding.vertical_sum();
        for (index, tab) in self.tabs.iter().enumerate() {
            if tab.hidden {
                continue;
            }
            visible += 1;
            widest = widest.max(tab.layout.width);
            total += tab.layout.width;

            let padding = self
                .theme
                .padding_for(tab.disabled, self.current == Some(index));
            let mut content = tab.shaped.as_ref().map_or(0, |line| line.height);
            if let Some(icon) = &tab.icon {
                content = content.max(icon.height);
            }
            if let Some(icon) = &tab.button_icon {
                content = content.max(icon.height + button_pad);
            }
            if self.close_eligible(index) {
                content = content.max(self.theme.close_icon.height + button_pad);
            }
            height = height.max(content + padding.vertical_sum());
        }

        let width = if self.clip_tabs {
            let arrows = if visible > 1 && self.scrolling_enabled {
                self.theme.arrows_width()
            } else {
                0
            };
            widest + arrows
        } else {
            total
        };
        Size::new(width, height)
    }
}
