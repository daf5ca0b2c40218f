//! Construction settings for [`ColorScheme`](super::ColorScheme).

use std::fmt;
use std::rc::Rc;

use super::handles::{StyleResource, TriggerControl};
use super::mode::ColorMode;

/// Everything a [`ColorScheme`](super::ColorScheme) needs from its host.
///
/// The document and the trigger control are required up front. The stylesheets are
/// attached with the builder methods. A stylesheet left unset is treated as a handle
/// the host failed to resolve, and construction fails with
/// [`ConfigurationError::MissingStylesheet`](crate::ConfigurationError::MissingStylesheet).
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use colorscheme::sim::{SimButton, SimStylesheet};
/// use colorscheme::SchemeSettings;
///
/// let settings = SchemeSettings::new("index.html", Rc::new(SimButton::new()))
///     .light_css(Rc::new(SimStylesheet::new()))
///     .dark_css(Rc::new(SimStylesheet::new()))
///     .default_scheme("dark");
/// ```
pub struct SchemeSettings<D> {
    pub document: D,
    pub light_css: Option<Rc<dyn StyleResource>>,
    pub dark_css: Option<Rc<dyn StyleResource>>,
    /// `"light"` or `"dark"`. Anything else, including leaving it unset, selects
    /// light.
    pub default_scheme: Option<String>,
    pub scheme_button: Rc<dyn TriggerControl>,
}

impl<D> SchemeSettings<D> {
    /// Creates settings with no stylesheets and no default scheme.
    pub fn new(document: D, scheme_button: Rc<dyn TriggerControl>) -> Self {
        Self {
            document,
            light_css: None,
            dark_css: None,
            default_scheme: None,
            scheme_button,
        }
    }

    pub fn light_css(mut self, sheet: Rc<dyn StyleResource>) -> Self {
        self.light_css = Some(sheet);
        self
    }

    pub fn dark_css(mut self, sheet: Rc<dyn StyleResource>) -> Self {
        self.dark_css = Some(sheet);
        self
    }

    pub fn default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = Some(scheme.into());
        self
    }

    /// Returns the mode construction will start in.
    pub fn initial_mode(&self) -> ColorMode {
        resolve_default_scheme(self.default_scheme.as_deref())
    }
}

impl<D: fmt::Debug> fmt::Debug for SchemeSettings<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeSettings")
            .field("document", &self.document)
            .field("light_css", &self.light_css.is_some())
            .field("dark_css", &self.dark_css.is_some())
            .field("default_scheme", &self.default_scheme)
            .finish_non_exhaustive()
    }
}

/// Resolves the requested default scheme to the starting mode.
///
/// Only the exact strings `"light"` and `"dark"` are recognized. Anything else is
/// coerced to light without error, and so is an unset value.
///
/// Unset resolves to light even though the settings have historically described
/// dark as the fallback. Keep it that way until the owners confirm which one they
/// intend.
///
/// ```rust
/// use colorscheme::{resolve_default_scheme, ColorMode};
///
/// assert_eq!(resolve_default_scheme(Some("dark")), ColorMode::Dark);
/// assert_eq!(resolve_default_scheme(Some("blue")), ColorMode::Light);
/// assert_eq!(resolve_default_scheme(None), ColorMode::Light);
/// ```
pub fn resolve_default_scheme(requested: Option<&str>) -> ColorMode {
    match requested.map(str::parse::<ColorMode>) {
        Some(Ok(mode)) => mode,
        Some(Err(err)) => {
            tracing::warn!(%err, "unrecognized default scheme, using light");
            ColorMode::Light
        }
        None => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimButton, SimStylesheet};

    #[test]
    fn test_resolve_recognized() {
        assert_eq!(resolve_default_scheme(Some("light")), ColorMode::Light);
        assert_eq!(resolve_default_scheme(Some("dark")), ColorMode::Dark);
    }

    #[test]
    fn test_resolve_unset_is_light() {
        assert_eq!(resolve_default_scheme(None), ColorMode::Light);
    }

    #[test]
    fn test_resolve_unrecognized_is_light() {
        assert_eq!(resolve_default_scheme(Some("blue")), ColorMode::Light);
        assert_eq!(resolve_default_scheme(Some("")), ColorMode::Light);
        assert_eq!(resolve_default_scheme(Some("DARK")), ColorMode::Light);
    }

    #[test]
    fn test_builder_sets_fields() {
        let settings = SchemeSettings::new(7u8, Rc::new(SimButton::new()))
            .light_css(Rc::new(SimStylesheet::new()))
            .default_scheme("dark");

        assert_eq!(settings.document, 7);
        assert!(settings.light_css.is_some());
        assert!(settings.dark_css.is_none());
        assert_eq!(settings.initial_mode(), ColorMode::Dark);
    }

    #[test]
    fn test_debug_hides_handles() {
        let settings = SchemeSettings::new("doc", Rc::new(SimButton::new()));
        let out = format!("{:?}", settings);
        assert!(out.contains("light_css: false"));
        assert!(out.contains("\"doc\""));
    }
}
