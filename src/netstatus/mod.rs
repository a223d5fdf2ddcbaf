//! Network-awareness state shared across the app.
//!
//! [`NetworkStatusProvider`] is mounted once by the shell. It seeds its
//! connectivity flag from the platform runtime, then follows the runtime's
//! online/offline events until it is dropped. Consumers hold a
//! [`NetworkStatusHandle`] and either read the latest [`NetworkStatus`]
//! snapshot or subscribe for changes.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

pub mod runtime;
pub mod scope;

pub use runtime::{ConnectivityEvent, ConnectivityListener, ConnectivityRuntime, RuntimeSubscription};
pub use scope::OutsideProviderScope;

/// Immutable snapshot of the network-awareness state.
///
/// A fresh snapshot is distributed to every subscriber whenever one of the
/// flags actually changes value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkStatus {
    /// Whether the runtime currently believes it has network access.
    pub online: bool,
    /// Whether the user authenticated through the offline path (cached
    /// credentials). Only [`NetworkStatusHandle::set_offline_authenticated`]
    /// moves this flag; connectivity changes never touch it.
    pub offline_authenticated: bool,
}

/// Owns the network-awareness state for the lifetime of the app shell.
///
/// Dropping the provider deregisters its runtime listener, so no platform
/// event can mutate the state after teardown.
pub struct NetworkStatusProvider {
    shared: Arc<watch::Sender<NetworkStatus>>,
    _runtime_sub: RuntimeSubscription,
}

impl NetworkStatusProvider {
    /// Mounts the provider over the given platform runtime.
    ///
    /// Reads the runtime's current connectivity flag once to seed the
    /// state, then registers for its change events.
    pub fn mount(runtime: &dyn ConnectivityRuntime) -> Self {
        let initial = NetworkStatus {
            online: runtime.is_online(),
            offline_authenticated: false,
        };
        let (tx, _rx) = watch::channel(initial);
        let shared = Arc::new(tx);

        let listener_state = Arc::clone(&shared);
        let runtime_sub = runtime.watch(Box::new(move |event| {
            let online = matches!(event, ConnectivityEvent::Online);
            let changed = listener_state.send_if_modified(|status| {
                if status.online == online {
                    return false;
                }
                status.online = online;
                true
            });
            if changed {
                info!(online, "connectivity changed");
            }
        }));

        debug!(online = initial.online, "network status provider mounted");

        Self {
            shared,
            _runtime_sub: runtime_sub,
        }
    }

    /// Cloneable consumer handle onto this provider's state.
    pub fn handle(&self) -> NetworkStatusHandle {
        NetworkStatusHandle {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Consumer-side access to the provider's state.
///
/// Handles are cheap to clone and hand out; none of them can mutate the
/// connectivity flag, which is written only by the provider's own runtime
/// listener.
#[derive(Clone, Debug)]
pub struct NetworkStatusHandle {
    shared: Arc<watch::Sender<NetworkStatus>>,
}

impl NetworkStatusHandle {
    /// Latest snapshot.
    pub fn current(&self) -> NetworkStatus {
        *self.shared.borrow()
    }

    /// Subscribes to snapshot changes.
    ///
    /// The receiver always yields the freshest snapshot; dropping it
    /// unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<NetworkStatus> {
        self.shared.subscribe()
    }

    /// Marks the session as authenticated (or not) through the offline
    /// path.
    ///
    /// Pure state write: nothing else in this module flips the flag, and a
    /// write that does not change the value does not re-notify
    /// subscribers.
    pub fn set_offline_authenticated(&self, value: bool) {
        let changed = self.shared.send_if_modified(|status| {
            if status.offline_authenticated == value {
                return false;
            }
            status.offline_authenticated = value;
            true
        });
        if changed {
            debug!(offline_authenticated = value, "offline authentication flag updated");
        }
    }
}

#[cfg(test)]
pub(crate) fn test_handle() -> NetworkStatusHandle {
    let (tx, _rx) = watch::channel(NetworkStatus {
        online: true,
        offline_authenticated: false,
    });
    NetworkStatusHandle { shared: Arc::new(tx) }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
