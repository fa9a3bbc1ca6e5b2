use serde::{Deserialize, Serialize};

use crate::errors::RegionIdsError;
use crate::marker::{Marker, MarkerSet};

/// Position a region occupies in the collapsible layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionRole {
    Sidebar,
    Topbar,
    MainContent,
}

impl RegionRole {
    /// Roles in the order the toggle visits them.
    pub const ORDER: [RegionRole; 3] =
        [RegionRole::Sidebar, RegionRole::Topbar, RegionRole::MainContent];
}

/// Trait implemented by layout areas that carry presentation markers.
pub trait Region {
    /// Identifier the region is addressable by.
    fn id(&self) -> &str;
    /// Markers currently attached to the region.
    fn markers(&self) -> &MarkerSet;
    /// Mutable access to the attached markers.
    fn markers_mut(&mut self) -> &mut MarkerSet;

    fn has_marker(&self, marker: &Marker) -> bool {
        self.markers().contains(marker)
    }

    /// Flip `marker` and return whether it is present afterwards.
    fn toggle_marker(&mut self, marker: &Marker) -> bool {
        self.markers_mut().toggle(marker)
    }
}

/// Concrete region: an identifier plus its marker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    markers: MarkerSet,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markers: MarkerSet::new(),
        }
    }

    /// Attach `marker` while building the element.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.add(marker);
        self
    }
}

impl Region for Element {
    fn id(&self) -> &str {
        &self.id
    }

    fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    fn markers_mut(&mut self) -> &mut MarkerSet {
        &mut self.markers
    }
}

/// Identifiers of the three regions kept in lockstep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionIds {
    pub sidebar: String,
    pub topbar: String,
    pub main_content: String,
}

impl RegionIds {
    pub fn new(
        sidebar: impl Into<String>,
        topbar: impl Into<String>,
        main_content: impl Into<String>,
    ) -> Self {
        Self {
            sidebar: sidebar.into(),
            topbar: topbar.into(),
            main_content: main_content.into(),
        }
    }

    pub fn get(&self, role: RegionRole) -> &str {
        match role {
            RegionRole::Sidebar => &self.sidebar,
            RegionRole::Topbar => &self.topbar,
            RegionRole::MainContent => &self.main_content,
        }
    }

    /// Identifiers in toggle order: sidebar, topbar, main content.
    pub fn ordered(&self) -> [&str; 3] {
        RegionRole::ORDER.map(|role| self.get(role))
    }

    /// Check that the identifiers are non-empty and pairwise distinct.
    pub fn validate(&self) -> Result<(), RegionIdsError> {
        for role in RegionRole::ORDER {
            if self.get(role).is_empty() {
                return Err(RegionIdsError::Empty { role });
            }
        }
        let ids = self.ordered();
        for (index, id) in ids.iter().enumerate() {
            if ids[index + 1..].contains(id) {
                return Err(RegionIdsError::Duplicate { id: id.to_string() });
            }
        }
        Ok(())
    }
}

impl Default for RegionIds {
    fn default() -> Self {
        Self::new("sidebar", "topbar", "main-content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_ids_when_ordered_then_sidebar_topbar_main_content() {
        let ids = RegionIds::default();
        assert_eq!(ids.ordered(), ["sidebar", "topbar", "main-content"]);
        assert_eq!(ids.validate(), Ok(()));
    }

    #[test]
    fn given_duplicate_ids_when_validated_then_error_names_identifier() {
        let ids = RegionIds::new("nav", "body", "nav");
        assert_eq!(
            ids.validate(),
            Err(RegionIdsError::Duplicate {
                id: String::from("nav")
            })
        );
    }

    #[test]
    fn given_empty_topbar_id_when_validated_then_empty_role_is_reported() {
        let ids = RegionIds::new("nav", "", "body");
        assert_eq!(
            ids.validate(),
            Err(RegionIdsError::Empty {
                role: RegionRole::Topbar
            })
        );
    }

    #[test]
    fn given_element_with_marker_when_toggled_then_marker_is_removed() {
        let mut element =
            Element::new("sidebar").with_marker(Marker::COLLAPSED);
        assert!(element.has_marker(&Marker::COLLAPSED));
        assert!(!element.toggle_marker(&Marker::COLLAPSED));
        assert!(!element.has_marker(&Marker::COLLAPSED));
        assert_eq!(element.id(), "sidebar");
    }

    #[test]
    fn given_partial_json_when_deserialized_then_missing_ids_use_defaults() {
        let ids: RegionIds = serde_json::from_str(r#"{"sidebar":"nav"}"#)
            .expect("partial ids should parse");
        assert_eq!(ids.ordered(), ["nav", "topbar", "main-content"]);
    }
}
