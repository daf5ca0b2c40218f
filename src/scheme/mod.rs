//! Light/dark scheme switching.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark mode enum
//! - [`ColorScheme`]: The controller that keeps exactly one stylesheet enabled
//! - [`SchemeSettings`]: Construction settings with a fluent builder API
//! - [`ApplyOptions`]: Options for [`ColorScheme::apply_mode`]
//! - [`StyleResource`], [`TriggerControl`], [`HostContext`]: Host-side handles
//! - [`SystemHost`]: A host context backed by the OS appearance setting

mod controller;
mod handles;
mod host;
mod mode;
mod settings;

pub use controller::{ApplyOptions, ColorScheme};
pub use handles::{HostContext, ListenerId, StyleResource, TriggerControl};
pub use host::{set_mode_detector, SystemHost, PREFERS_DARK_QUERY, PREFERS_LIGHT_QUERY};
pub use mode::{ColorMode, ParseColorModeError};
pub use settings::{resolve_default_scheme, SchemeSettings};
