#![forbid(unsafe_code)]

//! Error type for indexed tab operations.

use std::fmt;

/// Errors returned by [`TabBar`](crate::TabBar) operations.
///
/// Every variant is a rejected precondition: the widget checks before it
/// mutates, so an `Err` means nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarError {
    /// A tab index was not in `0..len`.
    IndexOutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for TabBarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange {
                operation,
                index,
                len,
            } => write!(
                f,
                "{operation}: tab index {index} out of range for {len} tabs"
            ),
        }
    }
}

impl std::error::Error for TabBarError {}

/// Result alias for tab bar operations.
pub type Result<T> = std::result::Result<T, TabBarError>;
