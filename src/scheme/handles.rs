//! Handles to host-owned collaborators.
//!
//! The controller never creates these. The host (a browser binding, a GUI toolkit,
//! or the in-memory [`sim`](crate::sim) handles) implements them and injects them
//! through [`SchemeSettings`](super::SchemeSettings).

/// A stylesheet that can be switched on and off.
pub trait StyleResource {
    /// Sets the stylesheet's disabled flag.
    fn set_disabled(&self, disabled: bool);
}

/// Identifies a listener registered on a [`TriggerControl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A control (typically a button) whose activation toggles the scheme.
pub trait TriggerControl {
    /// Registers a zero-argument callback run on each activation.
    fn add_activation_listener(&self, listener: Box<dyn Fn()>) -> ListenerId;

    /// Removes a callback previously returned by
    /// [`add_activation_listener`](Self::add_activation_listener).
    ///
    /// Unknown ids are ignored.
    fn remove_activation_listener(&self, id: ListenerId);
}

/// A host environment able to evaluate media preference queries such as
/// `(prefers-color-scheme: dark)`.
pub trait HostContext {
    /// Returns whether the named media condition currently matches.
    fn matches_media(&self, query: &str) -> bool;
}
