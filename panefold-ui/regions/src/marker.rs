use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MarkerError;

/// Named presentation marker attached to a region.
///
/// Marker names follow class-name rules: non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(Cow<'static, str>);

impl Marker {
    /// Marker whose presence switches a region to its collapsed presentation.
    pub const COLLAPSED: Marker = Marker(Cow::Borrowed("collapsed"));

    /// Build a marker from an owned or borrowed name.
    pub fn new(name: impl Into<String>) -> Result<Self, MarkerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MarkerError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(MarkerError::Whitespace(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::COLLAPSED
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Marker {
    type Error = MarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0.into_owned()
    }
}

/// Ordered set of markers attached to one region.
///
/// Insertion order is preserved and duplicates are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, marker: &Marker) -> bool {
        self.markers.iter().any(|entry| entry == marker)
    }

    /// Attach `marker`. Returns `false` when it was already present.
    pub fn add(&mut self, marker: Marker) -> bool {
        if self.contains(&marker) {
            return false;
        }
        self.markers.push(marker);
        true
    }

    /// Detach `marker`. Returns `false` when it was not present.
    pub fn remove(&mut self, marker: &Marker) -> bool {
        let before = self.markers.len();
        self.markers.retain(|entry| entry != marker);
        before != self.markers.len()
    }

    /// Flip `marker` and return whether it is present afterwards.
    pub fn toggle(&mut self, marker: &Marker) -> bool {
        if self.remove(marker) {
            false
        } else {
            self.markers.push(marker.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        let mut set = Self::new();
        for marker in iter {
            set.add(marker);
        }
        set
    }
}
