#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and gesture thresholds for tabstrip.
//!
//! # Role in tabstrip
//! `tabstrip-core` is the input layer. It owns the integer pixel geometry the
//! layout engine caches into, the normalized pointer events a host delivers,
//! and the drag-threshold tracker that separates a click from a drag.
//!
//! # How it fits in the system
//! The widget crate (`tabstrip`) consumes [`event::PointerEvent`] values and
//! answers hit tests in [`geometry::Point`] / [`geometry::Rect`] terms. Text
//! measurement lives in `tabstrip-text`, so this crate has no knowledge of
//! glyphs or fonts.

pub mod event;
pub mod geometry;
pub mod gesture;
