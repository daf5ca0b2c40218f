//! Construction errors.

use crate::scheme::ColorMode;

/// Error returned when a [`ColorScheme`](crate::ColorScheme) cannot be built.
///
/// Only required collaborators are checked. Optional fields such as the default
/// scheme are normalized instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No settings were provided at all
    #[error("color scheme: no settings provided")]
    MissingSettings,
    /// The stylesheet handle for the given mode could not be resolved
    #[error("color scheme: {0} stylesheet not found")]
    MissingStylesheet(ColorMode),
}
