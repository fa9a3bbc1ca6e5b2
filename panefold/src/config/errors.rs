use panefold_ui_regions::{RegionIdsError, RulesError};
use thiserror::Error;

/// Errors emitted while reading or validating the layout configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
    /// Region identifiers are empty or shared between roles.
    #[error("invalid region identifiers: {0}")]
    RegionIds(#[from] RegionIdsError),
    /// A collapse rule carries an unusable extent.
    #[error("invalid collapse rules: {0}")]
    Rules(#[from] RulesError),
}
