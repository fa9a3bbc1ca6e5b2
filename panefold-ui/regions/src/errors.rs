use thiserror::Error;

use crate::region::RegionRole;

/// Errors produced while toggling the collapsed marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// A region identifier did not resolve in the region source.
    #[error("region `{id}` is missing from the layout")]
    MissingRegion { id: String },
}

/// Errors produced while validating the three region identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionIdsError {
    #[error("{role:?} region identifier is empty")]
    Empty { role: RegionRole },

    /// Two roles share an identifier, so one toggle would flip it twice.
    #[error("region identifier `{id}` is duplicated")]
    Duplicate { id: String },
}

/// Errors produced while validating collapse rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("{role:?} rule has a negative or non-finite extent")]
    InvalidExtent { role: RegionRole },
}

/// Errors produced while building a marker name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker name is empty")]
    Empty,

    #[error("marker name `{0}` contains whitespace")]
    Whitespace(String),
}
