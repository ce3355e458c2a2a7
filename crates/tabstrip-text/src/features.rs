#![forbid(unsafe_code)]

//! Named shaping-feature values.
//!
//! A tab carries an open-ended mapping from feature name (an OpenType tag such
//! as `"liga"` or `"ss01"`, or any name the shaper understands) to an integer
//! value. Keys are unique; setting an existing key overwrites it. Iteration is
//! in key order so two maps with the same entries hash identically.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Value reported for a feature name that has no entry.
pub const UNSET_FEATURE: i32 = -1;

/// A set of named shaping features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapingFeatures {
    entries: BTreeMap<String, i32>,
}

impl ShapingFeatures {
    /// Create an empty feature set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a feature value. Returns the previous value, if any.
    pub fn set(&mut self, name: impl Into<String>, value: i32) -> Option<i32> {
        self.entries.insert(name.into(), value)
    }

    /// Feature value, or `None` when unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries.get(name).copied()
    }

    /// Feature value, or [`UNSET_FEATURE`] when unset.
    #[must_use]
    pub fn get_or_unset(&self, name: &str) -> i32 {
        self.get(name).unwrap_or(UNSET_FEATURE)
    }

    /// Remove one feature. Returns the removed value, if any.
    pub fn remove(&mut self, name: &str) -> Option<i32> {
        self.entries.remove(name)
    }

    /// Remove every feature.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feature set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Hash for ShapingFeatures {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for (k, v) in &self.entries {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for ShapingFeatures {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut features = Self::new();
        for (name, value) in iter {
            features.set(name, value);
        }
        features
    }
}
