#![forbid(unsafe_code)]

//! Theme metrics.
//!
//! Every pixel constant the layout engine uses comes from here. Nothing is
//! drawn by the widget, so colors and style boxes stay with the host; only
//! their content margins and icon sizes matter for geometry.

use tabstrip_core::geometry::{Sides, Size};

/// Geometry-relevant theme values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TabBarTheme {
    /// Content margins of an unselected tab.
    pub unselected_padding: Sides,
    /// Content margins of the selected tab.
    pub selected_padding: Sides,
    /// Content margins of a disabled tab.
    pub disabled_padding: Sides,
    /// Gap between icon, label, extra button, and close button.
    pub h_separation: i32,
    /// Close button icon.
    pub close_icon: Size,
    /// Content margins of the extra and close buttons.
    pub button_padding: Sides,
    /// Scroll-back arrow.
    pub decrement_arrow: Size,
    /// Scroll-forward arrow.
    pub increment_arrow: Size,
    /// Floor for the strip's minimum height.
    pub min_height: i32,
}

impl Default for TabBarTheme {
    fn default() -> Self {
        Self {
            unselected_padding: Sides::new(4, 10, 4, 10),
            selected_padding: Sides::new(4, 10, 4, 10),
            disabled_padding: Sides::new(4, 10, 4, 10),
            h_separation: 4,
            close_icon: Size::new(16, 16),
            button_padding: Sides::all(2),
            decrement_arrow: Size::new(16, 16),
            increment_arrow: Size::new(16, 16),
            min_height: 0,
        }
    }
}

impl TabBarTheme {
    /// Use the same content margins for every tab state.
    #[must_use]
    pub const fn tab_padding(mut self, padding: Sides) -> Self {
        self.unselected_padding = padding;
        self.selected_padding = padding;
        self.disabled_padding = padding;
        self
    }

    /// Set the gap between tab sub-elements.
    #[must_use]
    pub const fn h_separation(mut self, h_separation: i32) -> Self {
        self.h_separation = h_separation;
        self
    }

    /// Use the same size for both scroll arrows.
    #[must_use]
    pub const fn arrows(mut self, size: Size) -> Self {
        self.decrement_arrow = size;
        self.increment_arrow = size;
        self
    }

    /// Set the close button icon size.
    #[must_use]
    pub const fn close_icon(mut self, size: Size) -> Self {
        self.close_icon = size;
        self
    }

    /// Set the button content margins.
    #[must_use]
    pub const fn button_padding(mut self, padding: Sides) -> Self {
        self.button_padding = padding;
        self
    }

    /// Width reserved at the trailing edge while the arrows are shown.
    #[must_use]
    pub const fn arrows_width(&self) -> i32 {
        self.decrement_arrow.width + self.increment_arrow.width
    }

    pub(crate) const fn padding_for(&self, disabled: bool, selected: bool) -> Sides {
        if disabled {
            self.disabled_padding
        } else if selected {
            self.selected_padding
        } else {
            self.unselected_padding
        }
    }
}
