//! Ambient access to the mounted provider.
//!
//! The shell mounts the provider once and enters its scope; descendant
//! code then calls [`current`] instead of threading a handle through every
//! call site. Reading outside an active scope is a wiring bug and fails
//! with [`OutsideProviderScope`].

use std::cell::RefCell;
use std::marker::PhantomData;

use derive_more::{Display, Error};

use super::NetworkStatusHandle;

thread_local! {
    static SCOPES: RefCell<Vec<NetworkStatusHandle>> = RefCell::new(Vec::new());
}

/// Returned when [`current`] runs with no provider scope active on this
/// thread.
#[derive(Debug, Display, Error)]
#[display(
    fmt = "network status accessed outside a mounted NetworkStatusProvider scope; enter the provider's scope in the app shell first"
)]
pub struct OutsideProviderScope;

/// Guard for an active provider scope.
///
/// Restores the previous scope on drop. Scopes nest; guards must be
/// dropped innermost-first, which falls out naturally from stack-ordered
/// locals. The guard is pinned to the thread that entered the scope.
pub struct ScopeGuard {
    _not_send: PhantomData<*const ()>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Makes `handle` the innermost ambient provider for the current thread.
pub fn enter(handle: NetworkStatusHandle) -> ScopeGuard {
    SCOPES.with(|scopes| scopes.borrow_mut().push(handle));
    ScopeGuard {
        _not_send: PhantomData,
    }
}

/// Handle of the innermost active provider scope.
pub fn current() -> Result<NetworkStatusHandle, OutsideProviderScope> {
    SCOPES
        .with(|scopes| scopes.borrow().last().cloned())
        .ok_or(OutsideProviderScope)
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
