#![forbid(unsafe_code)]

//! Text shaping contract.
//!
//! ```text
//! Tab (localized text + language + direction + features)
//!     │
//!     ▼
//! ┌───────────────┐
//! │ TextShaper     │  trait (CellShaper | CachedShaper<S> | host backend)
//! └───────┬───────┘
//!         ▼
//!     ShapedLine   (owned by the tab; dropped whenever an input changes)
//! ```
//!
//! A request may carry a `max_width` hint. The shaper must then return a line
//! no wider than the hint, eliding text as it sees fit; `natural_width` still
//! reports the unconstrained width so the caller can tell elision happened.

use crate::features::ShapingFeatures;
use crate::width::{display_width, truncate_with_ellipsis};

/// Text direction requested for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDirection {
    /// Follow the hosting control's direction.
    #[default]
    Inherited,
    /// Detect from content.
    Auto,
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

/// Everything that affects a shaped label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeRequest<'a> {
    /// Display (already localized) text.
    pub text: &'a str,
    /// BCP 47 language tag, empty for "inherit".
    pub language: &'a str,
    pub direction: TextDirection,
    pub features: &'a ShapingFeatures,
    /// Upper bound for the shaped width in pixels, if constrained.
    pub max_width: Option<i32>,
}

impl<'a> ShapeRequest<'a> {
    /// Create an unconstrained request.
    #[must_use]
    pub fn new(
        text: &'a str,
        language: &'a str,
        direction: TextDirection,
        features: &'a ShapingFeatures,
    ) -> Self {
        Self {
            text,
            language,
            direction,
            features,
            max_width: None,
        }
    }

    /// Constrain the shaped width.
    #[must_use]
    pub fn max_width(mut self, max_width: i32) -> Self {
        self.max_width = Some(max_width.max(0));
        self
    }
}

/// A measured, laid-out label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapedLine {
    /// Text as it will be drawn (possibly elided).
    pub text: String,
    /// Width of `text` in pixels.
    pub width: i32,
    /// Width the full label would need.
    pub natural_width: i32,
    /// Line height in pixels.
    pub height: i32,
}

impl ShapedLine {
    /// Whether the drawn text is shorter than the source label.
    #[must_use]
    pub fn is_elided(&self) -> bool {
        self.width < self.natural_width
    }
}

/// Abstract text shaping backend.
///
/// The trait is object-safe so a widget can hold `Box<dyn TextShaper>`.
/// `shape` takes `&mut self` so backends may cache.
pub trait TextShaper {
    /// Shape one label.
    fn shape(&mut self, request: &ShapeRequest<'_>) -> ShapedLine;
}

impl<S: TextShaper + ?Sized> TextShaper for Box<S> {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> ShapedLine {
        (**self).shape(request)
    }
}

/// Fixed-cell shaper.
///
/// Each grapheme occupies its display width in columns, each column
/// `cell_width` pixels. Language, direction, and features do not change the
/// measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellShaper {
    cell_width: i32,
    line_height: i32,
    ellipsis: String,
}

impl Default for CellShaper {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl CellShaper {
    /// Create a shaper with the given cell size.
    #[must_use]
    pub fn new(cell_width: i32, line_height: i32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            line_height: line_height.max(0),
            ellipsis: "…".to_string(),
        }
    }

    /// Override the elision marker.
    #[must_use]
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Pixel width of one column.
    #[must_use]
    pub const fn cell_width(&self) -> i32 {
        self.cell_width
    }

    fn columns_to_px(&self, columns: usize) -> i32 {
        i32::try_from(columns)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.cell_width)
    }
}

impl TextShaper for CellShaper {
    fn shape(&mut self, request: &ShapeRequest<'_>) -> ShapedLine {
        let natural_width = self.columns_to_px(display_width(request.text));
        let text = match request.max_width {
            Some(max) if natural_width > max => {
                let columns = usize::try_from(max / self.cell_width).unwrap_or(0);
                truncate_with_ellipsis(request.text, columns, &self.ellipsis)
            }
            _ => request.text.to_string(),
        };
        let width = self.columns_to_px(display_width(&text));
        ShapedLine {
            text,
            width,
            natural_width,
            height: self.line_height,
        }
    }
}
