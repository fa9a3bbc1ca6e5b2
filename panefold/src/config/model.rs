use panefold_ui_regions::{
    CollapseRules, Marker, RegionIds, SidebarToggle, ToggleMode,
};
use serde::Deserialize;

use super::errors::ConfigError;

/// Layout configuration read from `layout.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct LayoutConfig {
    pub(crate) regions: RegionIds,
    pub(crate) marker: Marker,
    pub(crate) mode: ToggleMode,
    pub(crate) rules: CollapseRules,
}

impl LayoutConfig {
    /// Reject identifiers and rules the layout cannot work with.
    pub(crate) fn validate(self) -> Result<Self, ConfigError> {
        self.regions.validate()?;
        self.rules.validate()?;
        Ok(self)
    }

    /// Build the toggle described by this configuration.
    pub(crate) fn toggle(&self) -> Result<SidebarToggle, ConfigError> {
        let toggle =
            SidebarToggle::new(self.regions.clone(), self.marker.clone())?;
        Ok(toggle.with_mode(self.mode))
    }
}
