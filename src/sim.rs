//! In-memory handles for headless hosts and tests.
//!
//! These implement the handle traits without a real document, so a
//! [`ColorScheme`](crate::ColorScheme) can be driven and inspected directly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::scheme::{HostContext, ListenerId, StyleResource, TriggerControl, PREFERS_DARK_QUERY};

/// A stylesheet that records its disabled flag.
///
/// Starts enabled, like a freshly linked stylesheet.
#[derive(Debug, Default)]
pub struct SimStylesheet {
    disabled: Cell<bool>,
    writes: Cell<usize>,
}

impl SimStylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Number of times the disabled flag has been set.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StyleResource for SimStylesheet {
    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.writes.set(self.writes.get() + 1);
    }
}

/// A button whose activation is triggered by calling [`activate`](Self::activate).
#[derive(Default)]
pub struct SimButton {
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
    next_id: Cell<u64>,
}

impl SimButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every registered listener in registration order.
    ///
    /// Listeners may add or remove listeners while running; the change takes effect
    /// on the next activation.
    pub fn activate(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for SimButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimButton")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl TriggerControl for SimButton {
    fn add_activation_listener(&self, listener: Box<dyn Fn()>) -> ListenerId {
        let id = ListenerId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn remove_activation_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }
}

/// A host with a fixed dark-mode preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimHost {
    prefers_dark: bool,
}

impl SimHost {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl HostContext for SimHost {
    fn matches_media(&self, query: &str) -> bool {
        query == PREFERS_DARK_QUERY && self.prefers_dark
    }
}
