//! # Colorscheme - Light/dark stylesheet switching
//!
//! `colorscheme` switches a document between a light and a dark presentation by
//! enabling exactly one of two stylesheets and disabling the other.
//!
//! The document, the stylesheets and the toggle button are owned by the host and
//! handed to [`ColorScheme`] as handles implementing [`StyleResource`] and
//! [`TriggerControl`]. The scheme can be flipped by the button, by calling
//! [`ColorScheme::apply_mode`], or set from the host's ambient preference with
//! [`ColorScheme::sync_with_host_preference`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use colorscheme::sim::{SimButton, SimHost, SimStylesheet};
//! use colorscheme::{ColorMode, ColorScheme, SchemeSettings};
//!
//! let light = Rc::new(SimStylesheet::new());
//! let dark = Rc::new(SimStylesheet::new());
//! let button = Rc::new(SimButton::new());
//!
//! let scheme = ColorScheme::new(
//!     SchemeSettings::new((), button.clone())
//!         .light_css(light.clone())
//!         .dark_css(dark.clone())
//!         .default_scheme("dark"),
//! )
//! .unwrap();
//! assert!(light.is_disabled() && !dark.is_disabled());
//!
//! button.activate();
//! assert_eq!(scheme.mode(), ColorMode::Light);
//!
//! scheme.sync_with_host_preference(&SimHost::new(true));
//! assert_eq!(scheme.mode(), ColorMode::Dark);
//! ```
//!
//! ## Host preference
//!
//! [`SystemHost`] answers the `prefers-color-scheme` queries from the operating
//! system's appearance setting. [`set_mode_detector`] replaces the detector, which is
//! useful for tests or to force a mode.

mod error;
mod scheme;
pub mod sim;

pub use error::ConfigurationError;
pub use scheme::{
    resolve_default_scheme, set_mode_detector, ApplyOptions, ColorMode, ColorScheme,
    HostContext, ListenerId, ParseColorModeError, SchemeSettings, StyleResource, SystemHost,
    TriggerControl, PREFERS_DARK_QUERY, PREFERS_LIGHT_QUERY,
};
