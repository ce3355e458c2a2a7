#![forbid(unsafe_code)]

//! Tab records.
//!
//! A [`Tab`] is owned by its [`TabBar`](crate::TabBar) and can only be
//! mutated through it, which is what guarantees that every change to text,
//! icons, or state invalidates the cached layout. Hosts read tabs back for
//! drawing through the getters here.

use std::sync::Arc;
use tabstrip_core::geometry::{Rect, Size};
use tabstrip_text::{Localizer, ShapeRequest, ShapedLine, ShapingFeatures, TextDirection};

/// An externally owned image (tab icon, extra-button icon).
///
/// The widget only reads the size; pixel data stays with the host, which
/// shares it through an `Arc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Icon {
    pub width: i32,
    pub height: i32,
}

impl Icon {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Layout-engine owned cache for one tab.
///
/// Only meaningful while `drawn` is true; tabs outside the scroll window and
/// hidden tabs carry a default (empty) cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabLayout {
    /// Left edge in strip coordinates.
    pub offset: i32,
    /// Full tab width including padding and sub-elements.
    pub width: i32,
    /// Width allotted to the label.
    pub text_width: i32,
    pub icon_rect: Rect,
    pub text_rect: Rect,
    /// Extra (trailing) button; empty when the tab has no button icon.
    pub button_rect: Rect,
    /// Close button; empty when the close policy hides it for this tab.
    pub close_rect: Rect,
    /// Whether the tab is inside the drawable scroll window.
    pub drawn: bool,
    /// Label re-shaped under the max-width hint, when clamping applied.
    pub elided: Option<ShapedLine>,
}

/// One entry in the strip.
#[derive(Debug, Clone, Default)]
pub struct Tab {
    pub(crate) text: String,
    pub(crate) localized: String,
    pub(crate) language: String,
    pub(crate) direction: TextDirection,
    pub(crate) features: ShapingFeatures,
    pub(crate) shaped: Option<ShapedLine>,
    pub(crate) icon: Option<Arc<Icon>>,
    pub(crate) button_icon: Option<Arc<Icon>>,
    pub(crate) disabled: bool,
    pub(crate) hidden: bool,
    pub(crate) layout: TabLayout,
}

impl Tab {
    pub(crate) fn new(text: String, icon: Option<Arc<Icon>>, localizer: &dyn Localizer) -> Self {
        Self {
            localized: localizer.localize(&text),
            text,
            icon,
            ..Self::default()
        }
    }

    pub(crate) fn from_snapshot(snapshot: &TabSnapshot, localizer: &dyn Localizer) -> Self {
        Self {
            localized: localizer.localize(&snapshot.text),
            text: snapshot.text.clone(),
            language: snapshot.language.clone(),
            direction: snapshot.direction,
            features: snapshot.features.clone(),
            icon: snapshot.icon.clone(),
            button_icon: snapshot.button_icon.clone(),
            disabled: snapshot.disabled,
            hidden: snapshot.hidden,
            ..Self::default()
        }
    }

    /// Re-derive the display text and drop the shaping handle.
    pub(crate) fn relocalize(&mut self, localizer: &dyn Localizer) {
        self.localized = localizer.localize(&self.text);
        self.shaped = None;
    }

    pub(crate) fn shape_request(&self) -> ShapeRequest<'_> {
        ShapeRequest::new(&self.localized, &self.language, self.direction, &self.features)
    }

    /// Raw label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display form of the label.
    #[must_use]
    pub fn localized_text(&self) -> &str {
        &self.localized
    }

    /// Text to draw: the elided label when clamped, else the shaped label.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.layout
            .elided
            .as_ref()
            .or(self.shaped.as_ref())
            .map_or(self.localized.as_str(), |line| line.text.as_str())
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    #[must_use]
    pub fn features(&self) -> &ShapingFeatures {
        &self.features
    }

    /// Current shaping handle, if the label has been shaped.
    #[must_use]
    pub fn shaped(&self) -> Option<&ShapedLine> {
        self.shaped.as_ref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Arc<Icon>> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn button_icon(&self) -> Option<&Arc<Icon>> {
        self.button_icon.as_ref()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Cached layout. Read only while the tab is drawn.
    #[must_use]
    pub fn layout(&self) -> &TabLayout {
        &self.layout
    }

    /// Owned copy of everything needed to rebuild this tab elsewhere.
    #[must_use]
    pub fn snapshot(&self) -> TabSnapshot {
        TabSnapshot {
            text: self.text.clone(),
            language: self.language.clone(),
            direction: self.direction,
            features: self.features.clone(),
            icon: self.icon.clone(),
            button_icon: self.button_icon.clone(),
            disabled: self.disabled,
            hidden: self.hidden,
        }
    }
}

/// Content of a tab without any derived state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSnapshot {
    pub text: String,
    pub language: String,
    pub direction: TextDirection,
    pub features: ShapingFeatures,
    pub icon: Option<Arc<Icon>>,
    pub button_icon: Option<Arc<Icon>>,
    pub disabled: bool,
    pub hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_text::{CatalogLocalizer, IdentityLocalizer};

    #[test]
    fn new_tab_localizes_label() {
        let catalog = CatalogLocalizer::new().with("Files", "Dateien");
        let tab = Tab::new("Files".into(), None, &catalog);
        assert_eq!(tab.text(), "Files");
        assert_eq!(tab.localized_text(), "Dateien");
        assert_eq!(tab.display_text(), "Dateien");
        assert!(tab.shaped().is_none());
    }

    #[test]
    fn snapshot_round_trips_content() {
        let icon = Arc::new(Icon::new(16, 16));
        let mut tab = Tab::new("Log".into(), Some(Arc::clone(&icon)), &IdentityLocalizer);
        tab.language = "fr".into();
        tab.disabled = true;
        tab.features.set("liga", 0);
        let snapshot = tab.snapshot();
        let rebuilt = Tab::from_snapshot(&snapshot, &IdentityLocalizer);
        assert_eq!(rebuilt.snapshot(), snapshot);
        assert!(Arc::ptr_eq(rebuilt.icon().unwrap(), &icon));
    }

    #[test]
    fn relocalize_drops_shaping_handle() {
        let mut tab = Tab::new("a".into(), None, &IdentityLocalizer);
        tab.shaped = Some(ShapedLine::default());
        tab.relocalize(&|s: &str| s.to_uppercase());
        assert_eq!(tab.localized_text(), "A");
        assert!(tab.shaped().is_none());
    }
}
