#![forbid(unsafe_code)]

//! Headless horizontal tab strip.
//!
//! [`TabBar`] owns an ordered collection of [`Tab`]s and keeps a per-tab
//! layout cache in sync with every mutation. The host feeds it a size,
//! pointer events, and a [`TextShaper`](tabstrip_text::TextShaper); it reads
//! back rectangles to draw and drains [`TabBarEvent`]s to react to.
//!
//! ```text
//! PointerEvent ─▶ interaction ─▶ hit test ─▶ layout cache
//!                     │                          ▲
//!                     ▼                          │
//!               collection ops ──── refresh ─────┘
//!                     │
//!                     ▼
//!               TabBarEvent queue ─▶ host
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: debug events for selection, removal, moves, and drops, plus
//!   a `tab_bar.layout` span per recompute.
//! - `state-persistence`: serde derives for [`TabBarPersistState`] and
//!   [`TabBarTheme`].

pub mod drag;
pub mod error;
pub mod event;
pub mod tab;
pub mod tab_bar;
pub mod theme;

pub use drag::{DragKind, DragPayload, TabBarId};
pub use error::{Result, TabBarError};
pub use event::{Arrow, HitTarget, InteractionState, PointerResult, TabBarEvent};
pub use tab::{Icon, Tab, TabLayout, TabSnapshot};
pub use tab_bar::{CloseButtonPolicy, TabAlignment, TabBar, TabBarPersistState};
pub use theme::TabBarTheme;

pub use tabstrip_core::event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
pub use tabstrip_core::geometry::{Point, Rect, Sides, Size};
pub use tabstrip_core::gesture::GestureConfig;
pub use tabstrip_text::{TextDirection, UNSET_FEATURE};
