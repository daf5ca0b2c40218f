//! End-to-end behavior of the color scheme against simulated host handles.
//!
//! These tests drive a [`ColorScheme`] only through its public API and the
//! `sim` handles, the way an embedding application would.

use std::rc::Rc;

use colorscheme::sim::{SimButton, SimHost, SimStylesheet};
use colorscheme::{
    set_mode_detector, ApplyOptions, ColorMode, ColorScheme, ConfigurationError, SchemeSettings,
    SystemHost,
};
use proptest::prelude::*;
use serial_test::serial;

struct Page {
    light: Rc<SimStylesheet>,
    dark: Rc<SimStylesheet>,
    button: Rc<SimButton>,
}

impl Page {
    fn new() -> Self {
        Self {
            light: Rc::new(SimStylesheet::new()),
            dark: Rc::new(SimStylesheet::new()),
            button: Rc::new(SimButton::new()),
        }
    }

    fn scheme(&self, default_scheme: Option<&str>) -> ColorScheme<&'static str> {
        let mut settings = SchemeSettings::new("document", self.button.clone())
            .light_css(self.light.clone())
            .dark_css(self.dark.clone());
        settings.default_scheme = default_scheme.map(str::to_string);
        ColorScheme::new(settings).unwrap()
    }

    /// `(light disabled, dark disabled)`
    fn sheets(&self) -> (bool, bool) {
        (self.light.is_disabled(), self.dark.is_disabled())
    }

    fn exactly_one_enabled(&self) -> bool {
        self.light.is_disabled() != self.dark.is_disabled()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_omitted_default_starts_light() {
    init_tracing();
    let page = Page::new();
    let scheme = page.scheme(None);

    assert_eq!(scheme.mode(), ColorMode::Light);
    assert_eq!(page.sheets(), (false, true));
}

#[test]
fn test_dark_default_starts_dark() {
    let page = Page::new();
    let scheme = page.scheme(Some("dark"));

    assert_eq!(scheme.mode(), ColorMode::Dark);
    assert_eq!(page.sheets(), (true, false));
}

#[test]
fn test_button_round_trip() {
    let page = Page::new();
    let _scheme = page.scheme(Some("light"));
    let initial = page.sheets();

    page.button.activate();
    assert_eq!(page.sheets(), (true, false));

    page.button.activate();
    assert_eq!(page.sheets(), initial);
}

#[test]
fn test_host_sync_then_button() {
    let page = Page::new();
    let scheme = page.scheme(Some("light"));

    scheme.sync_with_host_preference(&SimHost::new(true));
    assert!(scheme.is_dark_mode());
    assert_eq!(page.sheets(), (true, false));

    page.button.activate();
    assert_eq!(scheme.mode(), ColorMode::Light);
    assert_eq!(page.sheets(), (false, true));
}

#[test]
#[serial]
fn test_sync_with_system_host() {
    let page = Page::new();
    let scheme = page.scheme(None);

    set_mode_detector(|| ColorMode::Dark);
    scheme.sync_with_host_preference(&SystemHost);
    assert_eq!(scheme.mode(), ColorMode::Dark);

    set_mode_detector(|| ColorMode::Light);
    scheme.sync_with_host_preference(&SystemHost);
    assert_eq!(scheme.mode(), ColorMode::Light);
    assert_eq!(page.sheets(), (false, true));
}

#[test]
fn test_missing_stylesheet_leaves_page_untouched() {
    let page = Page::new();
    let settings = SchemeSettings::new("document", page.button.clone())
        .light_css(page.light.clone())
        .default_scheme("dark");

    let err = ColorScheme::new(settings).unwrap_err();
    assert_eq!(err, ConfigurationError::MissingStylesheet(ColorMode::Dark));
    assert_eq!(page.button.listener_count(), 0);
    assert_eq!(page.light.write_count(), 0);
    assert_eq!(page.sheets(), (false, false));
}

#[test]
fn test_two_schemes_on_one_button_detach_independently() {
    let first = Page::new();
    let second_light = Rc::new(SimStylesheet::new());
    let second_dark = Rc::new(SimStylesheet::new());

    let a = first.scheme(None);
    let mut b = ColorScheme::new(
        SchemeSettings::new("other", first.button.clone())
            .light_css(second_light.clone())
            .dark_css(second_dark.clone()),
    )
    .unwrap();
    assert_eq!(first.button.listener_count(), 2);

    b.detach();
    first.button.activate();
    assert_eq!(a.mode(), ColorMode::Dark);
    assert_eq!(b.mode(), ColorMode::Light);
    assert_eq!(first.button.listener_count(), 1);
}

#[derive(Debug, Clone)]
enum Op {
    Toggle,
    Reapply,
    Activate,
    Sync(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Toggle),
        Just(Op::Reapply),
        Just(Op::Activate),
        any::<bool>().prop_map(Op::Sync),
    ]
}

fn default_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("light".to_string())),
        Just(Some("dark".to_string())),
        "[a-zA-Z]{0,8}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn prop_exactly_one_sheet_enabled(
        default_scheme in default_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let page = Page::new();
        let scheme = page.scheme(default_scheme.as_deref());
        prop_assert!(page.exactly_one_enabled());

        for op in ops {
            match op {
                Op::Toggle => scheme.apply_mode(ApplyOptions::toggle()),
                Op::Reapply => scheme.apply_mode(ApplyOptions::skip_toggle()),
                Op::Activate => page.button.activate(),
                Op::Sync(dark) => scheme.sync_with_host_preference(&SimHost::new(dark)),
            }
            prop_assert!(page.exactly_one_enabled());
            prop_assert_eq!(page.dark.is_disabled(), !scheme.is_dark_mode());
        }
    }

    #[test]
    fn prop_toggle_parity(default_scheme in default_strategy(), n in 0usize..25) {
        let page = Page::new();
        let scheme = page.scheme(default_scheme.as_deref());
        let start = page.sheets();
        let start_mode = scheme.mode();

        for _ in 0..n {
            scheme.apply_mode(ApplyOptions::default());
        }

        if n % 2 == 0 {
            prop_assert_eq!(page.sheets(), start);
            prop_assert_eq!(scheme.mode(), start_mode);
        } else {
            prop_assert_eq!(page.sheets(), (start.1, start.0));
            prop_assert_eq!(scheme.mode(), start_mode.toggled());
        }
    }

    #[test]
    fn prop_unrecognized_default_is_light(default_scheme in "[a-zA-Z ]{0,10}") {
        prop_assume!(default_scheme != "light" && default_scheme != "dark");
        let page = Page::new();
        let scheme = page.scheme(Some(&default_scheme));
        prop_assert_eq!(scheme.mode(), ColorMode::Light);
        prop_assert_eq!(page.sheets(), (false, true));
    }
}
