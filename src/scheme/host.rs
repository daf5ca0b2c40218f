//! Host preference backed by the operating system's appearance setting.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use super::handles::HostContext;
use super::mode::ColorMode;

/// Media query answered when the host prefers a dark presentation.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
/// Media query answered when the host prefers a light presentation.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`SystemHost`] to decide whether the user prefers
/// a light or dark presentation.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

/// A [`HostContext`] answering `prefers-color-scheme` from the OS.
///
/// # Example
///
/// ```rust
/// use colorscheme::{set_mode_detector, ColorMode, HostContext, SystemHost, PREFERS_DARK_QUERY};
///
/// set_mode_detector(|| ColorMode::Dark);
/// assert!(SystemHost.matches_media(PREFERS_DARK_QUERY));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostContext for SystemHost {
    fn matches_media(&self, query: &str) -> bool {
        let mode = detect_color_mode();
        match query.trim() {
            PREFERS_DARK_QUERY => mode == ColorMode::Dark,
            PREFERS_LIGHT_QUERY => mode == ColorMode::Light,
            _ => false,
        }
    }
}
