use serde::{Deserialize, Serialize};

use crate::errors::RulesError;
use crate::region::RegionRole;

const EXPANDED_EXTENT: f32 = 240.0;
const COLLAPSED_EXTENT: f32 = 56.0;

/// Geometry of one region in both presentations, in logical pixels.
///
/// For the sidebar this is its width; for the top bar and main content it is
/// the leading offset that keeps them clear of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionRule {
    pub expanded: f32,
    pub collapsed: f32,
}

impl RegionRule {
    pub const fn new(expanded: f32, collapsed: f32) -> Self {
        Self {
            expanded,
            collapsed,
        }
    }

    pub fn resolve(&self, has_marker: bool) -> f32 {
        let value = if has_marker {
            self.collapsed
        } else {
            self.expanded
        };
        value.max(0.0)
    }
}

impl Default for RegionRule {
    fn default() -> Self {
        Self::new(EXPANDED_EXTENT, COLLAPSED_EXTENT)
    }
}

/// Resolved geometry for one render of the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub sidebar_width: f32,
    pub topbar_offset: f32,
    pub main_content_offset: f32,
}

/// Styling rules giving the collapsed marker its visual meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseRules {
    pub sidebar: RegionRule,
    pub topbar: RegionRule,
    pub main_content: RegionRule,
}

impl CollapseRules {
    pub fn rule(&self, role: RegionRole) -> RegionRule {
        match role {
            RegionRole::Sidebar => self.sidebar,
            RegionRole::Topbar => self.topbar,
            RegionRole::MainContent => self.main_content,
        }
    }

    /// Geometry value for `role` given whether it carries the marker.
    pub fn resolve(&self, role: RegionRole, has_marker: bool) -> f32 {
        self.rule(role).resolve(has_marker)
    }

    /// Resolve all three regions from their marker flags, given in toggle
    /// order.
    pub fn geometry(&self, flags: [bool; 3]) -> LayoutGeometry {
        let [sidebar, topbar, main_content] = flags;
        LayoutGeometry {
            sidebar_width: self.resolve(RegionRole::Sidebar, sidebar),
            topbar_offset: self.resolve(RegionRole::Topbar, topbar),
            main_content_offset: self
                .resolve(RegionRole::MainContent, main_content),
        }
    }

    /// Reject negative or non-finite extents.
    pub fn validate(&self) -> Result<(), RulesError> {
        for role in RegionRole::ORDER {
            let rule = self.rule(role);
            let valid = [rule.expanded, rule.collapsed]
                .iter()
                .all(|value| value.is_finite() && *value >= 0.0);
            if !valid {
                return Err(RulesError::InvalidExtent { role });
            }
        }
        Ok(())
    }
}
