//! The light/dark controller.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::handles::{HostContext, ListenerId, StyleResource, TriggerControl};
use super::host::PREFERS_DARK_QUERY;
use super::mode::ColorMode;
use super::settings::{resolve_default_scheme, SchemeSettings};
use crate::error::ConfigurationError;

/// Options for [`ColorScheme::apply_mode`].
///
/// Deserializes from host-side option objects such as `{"skipToggle": true}`;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplyOptions {
    /// Re-apply the current mode without flipping it first.
    pub skip_toggle: bool,
}

impl ApplyOptions {
    /// Flip the mode, then apply it.
    pub fn toggle() -> Self {
        Self { skip_toggle: false }
    }

    /// Apply the current mode as is.
    pub fn skip_toggle() -> Self {
        Self { skip_toggle: true }
    }
}

/// State shared with the activation listener.
struct SchemeState {
    mode: Cell<ColorMode>,
    light_css: Rc<dyn StyleResource>,
    dark_css: Rc<dyn StyleResource>,
}

impl SchemeState {
    fn apply(&self, options: ApplyOptions) {
        if !options.skip_toggle {
            self.mode.set(self.mode.get().toggled());
        }

        let mode = self.mode.get();
        let dark = mode.is_dark();
        self.light_css.set_disabled(dark);
        self.dark_css.set_disabled(!dark);

        tracing::debug!(%mode, toggled = !options.skip_toggle, "applied color scheme");
    }
}

/// Keeps exactly one of a light and a dark stylesheet enabled.
///
/// Construction applies the starting mode and registers one activation listener on
/// the scheme button. Each activation flips the mode. The listener is removed when
/// the scheme is dropped or [`detach`](Self::detach) is called.
///
/// `ColorScheme` is single-threaded. It is meant to live on the host's UI thread
/// and be driven by its event loop.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use colorscheme::sim::{SimButton, SimStylesheet};
/// use colorscheme::{ApplyOptions, ColorMode, ColorScheme, SchemeSettings};
///
/// let light = Rc::new(SimStylesheet::new());
/// let dark = Rc::new(SimStylesheet::new());
/// let scheme = ColorScheme::new(
///     SchemeSettings::new((), Rc::new(SimButton::new()))
///         .light_css(light.clone())
///         .dark_css(dark.clone()),
/// )
/// .unwrap();
///
/// assert_eq!(scheme.mode(), ColorMode::Light);
/// scheme.apply_mode(ApplyOptions::toggle());
/// assert!(light.is_disabled());
/// assert!(!dark.is_disabled());
/// ```
pub struct ColorScheme<D> {
    document: D,
    state: Rc<SchemeState>,
    scheme_button: Rc<dyn TriggerControl>,
    listener: Option<ListenerId>,
}

impl<D> ColorScheme<D> {
    /// Builds the scheme, applies the starting mode and wires up the button.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingStylesheet`] if either stylesheet is
    /// missing. Nothing is applied or registered in that case.
    pub fn new(settings: SchemeSettings<D>) -> Result<Self, ConfigurationError> {
        let SchemeSettings {
            document,
            light_css,
            dark_css,
            default_scheme,
            scheme_button,
        } = settings;

        let light_css =
            light_css.ok_or(ConfigurationError::MissingStylesheet(ColorMode::Light))?;
        let dark_css = dark_css.ok_or(ConfigurationError::MissingStylesheet(ColorMode::Dark))?;

        let mode = resolve_default_scheme(default_scheme.as_deref());
        let state = Rc::new(SchemeState {
            mode: Cell::new(mode),
            light_css,
            dark_css,
        });
        state.apply(ApplyOptions::skip_toggle());

        let weak = Rc::downgrade(&state);
        let listener = scheme_button.add_activation_listener(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.apply(ApplyOptions::toggle());
            }
        }));

        tracing::debug!(%mode, listener = listener.get(), "color scheme initialized");

        Ok(Self {
            document,
            state,
            scheme_button,
            listener: Some(listener),
        })
    }

    /// Like [`new`](Self::new), but accepts settings that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingSettings`] for `None`, otherwise the same
    /// errors as [`new`](Self::new).
    pub fn from_optional(
        settings: Option<SchemeSettings<D>>,
    ) -> Result<Self, ConfigurationError> {
        let settings = settings.ok_or(ConfigurationError::MissingSettings)?;
        Self::new(settings)
    }

    /// Applies the current mode to both stylesheets, flipping it first unless
    /// `options.skip_toggle` is set.
    pub fn apply_mode(&self, options: ApplyOptions) {
        self.state.apply(options);
    }

    /// Sets the mode from the host's `prefers-color-scheme: dark` answer and applies
    /// it without toggling.
    pub fn sync_with_host_preference<H: HostContext + ?Sized>(&self, host: &H) {
        let prefers_dark = host.matches_media(PREFERS_DARK_QUERY);
        tracing::debug!(prefers_dark, "syncing color scheme with host preference");
        self.state.mode.set(ColorMode::from(prefers_dark));
        self.state.apply(ApplyOptions::skip_toggle());
    }

    /// Removes the activation listener from the scheme button.
    ///
    /// The stylesheets keep their current state and [`apply_mode`](Self::apply_mode)
    /// still works. Calling this more than once is a no-op.
    pub fn detach(&mut self) {
        if let Some(id) = self.listener.take() {
            self.scheme_button.remove_activation_listener(id);
            tracing::debug!(listener = id.get(), "color scheme detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn mode(&self) -> ColorMode {
        self.state.mode.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.mode().is_dark()
    }

    /// Returns the document handle passed in the settings.
    pub fn document(&self) -> &D {
        &self.document
    }
}

impl<D> Drop for ColorScheme<D> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<D: fmt::Debug> fmt::Debug for ColorScheme<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScheme")
            .field("document", &self.document)
            .field("mode", &self.mode())
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}
