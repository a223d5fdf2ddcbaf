//! Client-side core for the employee attendance tracker.
//!
//! This crate owns the pieces every screen of the app shares: the
//! network-awareness state (online/offline plus the offline-login flag),
//! the data shapes exchanged with the backend, the API envelopes, and the
//! configuration/logging bootstrap. HTTP calls, geolocation capture, and
//! rendering live in the shell that consumes this crate.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod netstatus;

pub use config::Config;
pub use netstatus::{
    ConnectivityEvent, ConnectivityRuntime, NetworkStatus, NetworkStatusHandle,
    NetworkStatusProvider, RuntimeSubscription,
};
