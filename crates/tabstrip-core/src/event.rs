#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The host's windowing layer translates its native input into these records
//! and hands them to the widget in arrival order. Positions are strip-local
//! pixels; a host that delivers window coordinates must subtract the strip
//! origin first.
//!
//! # Design Notes
//!
//! - Only a single pointer is modelled: one hover position plus at most one
//!   pressed button at a time.
//! - `Drag` and `Moved` are both motion; `Drag` carries the held button.
//! - `Exited` is delivered when the pointer leaves the strip's bounds.

use crate::geometry::Point;
use bitflags::bitflags;

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in strip-local pixels.
    pub x: i32,

    /// Y coordinate in strip-local pixels.
    pub y: i32,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    /// Button pressed at a position.
    #[must_use]
    pub const fn down(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down(button), x, y)
    }

    /// Button released at a position.
    #[must_use]
    pub const fn up(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up(button), x, y)
    }

    /// Pointer moved with no button held.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// Pointer moved while a button is held.
    #[must_use]
    pub const fn drag(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Drag(button), x, y)
    }

    /// Pointer left the strip.
    #[must_use]
    pub const fn exited() -> Self {
        Self::new(PointerEventKind::Exited, -1, -1)
    }

    /// Create a pointer event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Get the position as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this event moves the pointer.
    #[must_use]
    pub const fn is_motion(&self) -> bool {
        matches!(
            self.kind,
            PointerEventKind::Moved | PointerEventKind::Drag(_)
        )
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Button released.
    Up(PointerButton),

    /// Pointer moved while a button is held.
    Drag(PointerButton),

    /// Pointer moved (no button pressed).
    Moved,

    /// Pointer left the widget.
    Exited,

    /// Wheel scrolled up.
    ScrollUp,

    /// Wheel scrolled down.
    ScrollDown,

    /// Wheel scrolled left (horizontal scroll).
    ScrollLeft,

    /// Wheel scrolled right (horizontal scroll).
    ScrollRight,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Left,

    /// Secondary (usually right) button.
    Right,

    /// Middle button (scroll wheel click).
    Middle,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT = 0b0010;
        /// Control key.
        const CTRL = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
