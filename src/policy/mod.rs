//! Policy configuration for scanning and remediation.
//!
//! The `policy` module centralizes the knobs the facade consults: scan scope
//! and exclusions, compose-check filename/token, and remediation bounds.
//! Consumers typically construct a [`Policy`] via [`Policy::scan_root`] and
//! customize fields before creating a [`Reclaim`](crate::Reclaim) instance.

mod config;

pub use config::{ComposeCheck, Policy, Remediation, Scope};
