#![forbid(unsafe_code)]

//! Text measurement interface for tabstrip.
//!
//! The widget never lays out glyphs itself. It hands each tab's display text,
//! language, direction, and shaping features to a [`TextShaper`] and keeps the
//! returned [`ShapedLine`] as that tab's shaping handle. This crate defines
//! that contract plus two reference implementations:
//!
//! - [`CellShaper`]: grapheme display width times a fixed cell size, with
//!   ellipsis elision. Suitable for monospace hosts and for tests.
//! - [`CachedShaper`]: an LRU cache in front of any other shaper.
//!
//! Localization is likewise external; [`Localizer`] turns a raw label into
//! its display form before shaping.

pub mod cache;
pub mod features;
pub mod localize;
pub mod shaping;
pub mod width;

pub use cache::{CachedShaper, ShapingCacheStats};
pub use features::{ShapingFeatures, UNSET_FEATURE};
pub use localize::{CatalogLocalizer, IdentityLocalizer, Localizer};
pub use shaping::{CellShaper, ShapeRequest, ShapedLine, TextDirection, TextShaper};
pub use width::{display_width, grapheme_width, truncate_with_ellipsis};
