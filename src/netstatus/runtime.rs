//! Bridge to the host platform's connectivity notifications.

/// Connectivity transition reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    /// Network access was regained.
    Online,
    /// Network access was lost.
    Offline,
}

/// Callback invoked by the platform whenever connectivity changes.
pub type ConnectivityListener = Box<dyn Fn(ConnectivityEvent) + Send + Sync>;

/// Connectivity source implemented once per host platform (browser
/// online/offline events, desktop network monitors, test doubles).
///
/// The provider reads [`is_online`](Self::is_online) exactly once at mount
/// to seed its state and afterwards relies purely on change events. No
/// polling happens anywhere.
pub trait ConnectivityRuntime {
    /// Current connectivity flag, read synchronously.
    fn is_online(&self) -> bool;

    /// Registers a change listener.
    ///
    /// The listener stays registered until the returned subscription is
    /// dropped.
    fn watch(&self, listener: ConnectivityListener) -> RuntimeSubscription;
}

/// Deregistration handle for a connectivity listener.
///
/// The cleanup closure runs exactly once, on drop, so a listener can never
/// outlive whoever registered it.
pub struct RuntimeSubscription {
    cleanup: Option<Box<dyn FnOnce() + Send>>,
}

impl RuntimeSubscription {
    pub fn new(cleanup: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }
}

impl Drop for RuntimeSubscription {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl std::fmt::Debug for RuntimeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeSubscription")
            .field("active", &self.cleanup.is_some())
            .finish()
    }
}
