use serde::{Deserialize, Serialize};

use crate::document::RegionSource;
use crate::errors::{RegionIdsError, ToggleError};
use crate::marker::Marker;
use crate::region::{Region, RegionIds};

/// Collapsed state derived from the markers of the three regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsedState {
    /// No region carries the marker.
    Expanded,
    /// Every region carries the marker.
    Collapsed,
    /// The regions disagree.
    Mixed,
}

impl CollapsedState {
    /// Derive the state from per-region marker presence.
    pub fn from_flags(flags: [bool; 3]) -> Self {
        match flags {
            [true, true, true] => Self::Collapsed,
            [false, false, false] => Self::Expanded,
            _ => Self::Mixed,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }
}

/// How the toggle applies the flip when a region may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleMode {
    /// Resolve all three regions first; a missing region aborts before any
    /// marker changes.
    #[default]
    Lockstep,
    /// Look up and flip each region in turn; a missing region aborts the
    /// remaining flips and keeps the ones already applied.
    Sequential,
}

/// Flips the collapsed marker on the sidebar, top bar and main content
/// regions of a [`RegionSource`].
///
/// Every region is flipped from its own current value. Regions that already
/// disagree are not repaired; the result is then reported as
/// [`CollapsedState::Mixed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarToggle {
    ids: RegionIds,
    marker: Marker,
    mode: ToggleMode,
}

impl SidebarToggle {
    /// Build a toggle over `ids`.
    ///
    /// Fails when two roles share an identifier or one is empty; a shared
    /// identifier would be flipped twice per toggle.
    pub fn new(ids: RegionIds, marker: Marker) -> Result<Self, RegionIdsError> {
        ids.validate()?;
        Ok(Self {
            ids,
            marker,
            mode: ToggleMode::default(),
        })
    }

    pub fn with_mode(mut self, mode: ToggleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn ids(&self) -> &RegionIds {
        &self.ids
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn mode(&self) -> ToggleMode {
        self.mode
    }

    /// Read the current collapsed state without mutating anything.
    pub fn state<S: RegionSource>(
        &self,
        source: &S,
    ) -> Result<CollapsedState, ToggleError> {
        let [sidebar, topbar, main_content] = self.ids.ordered();
        Ok(CollapsedState::from_flags([
            self.has_marker(source, sidebar)?,
            self.has_marker(source, topbar)?,
            self.has_marker(source, main_content)?,
        ]))
    }

    /// Flip the marker on all three regions and return the resulting state.
    pub fn toggle<S: RegionSource>(
        &self,
        source: &mut S,
    ) -> Result<CollapsedState, ToggleError> {
        if self.state_before_toggle(source)? == Some(CollapsedState::Mixed) {
            log::warn!(
                "regions disagree on `{}` before toggle; flipping each region \
                 individually",
                self.marker
            );
        }

        for id in self.ids.ordered() {
            self.flip(source, id)?;
        }

        let after = self.state(source)?;
        log::debug!("`{}` toggled, layout is now {after:?}", self.marker);
        Ok(after)
    }

    /// Lockstep fails on a missing region here, before any flip. Sequential
    /// leaves that to the flip loop and reports no state.
    fn state_before_toggle<S: RegionSource>(
        &self,
        source: &S,
    ) -> Result<Option<CollapsedState>, ToggleError> {
        match (self.state(source), self.mode) {
            (Ok(state), _) => Ok(Some(state)),
            (Err(err), ToggleMode::Lockstep) => Err(err),
            (Err(_), ToggleMode::Sequential) => Ok(None),
        }
    }

    fn has_marker<S: RegionSource>(
        &self,
        source: &S,
        id: &str,
    ) -> Result<bool, ToggleError> {
        source
            .region(id)
            .map(|region| region.has_marker(&self.marker))
            .ok_or_else(|| missing(id))
    }

    fn flip<S: RegionSource>(
        &self,
        source: &mut S,
        id: &str,
    ) -> Result<bool, ToggleError> {
        let region = source.region_mut(id).ok_or_else(|| missing(id))?;
        Ok(region.toggle_marker(&self.marker))
    }
}

fn missing(id: &str) -> ToggleError {
    ToggleError::MissingRegion { id: id.to_string() }
}
