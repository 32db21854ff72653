#![forbid(unsafe_code)]
//! Reclaim: diagnose and repair file-ownership drift on bind mounts.
//!
//! Containers writing into bind-mounted host directories leave files owned by
//! a container-internal uid (often 0), making them unusable for the host user.
//! This crate scans a project tree for such mismatches, advises on the compose
//! `user:` mapping that prevents recurrence, and repairs ownership through a
//! single privileged batch `chown` with dry-run first.
//!
//! Safety model highlights:
//! - Diagnosis is strictly read-only and never fails on a partially unreadable
//!   tree; unreadable entries are the symptom being diagnosed.
//! - Repair is gated: dry-run by default, one bounded-timeout privileged call
//!   in commit mode, all-or-nothing reporting.
//! - This crate forbids `unsafe` and uses `rustix` for identity lookup.

pub mod constants;
pub mod adapters;
pub mod api;
pub mod fs;
pub mod logging;
pub mod policy;
pub mod types;

pub use api::*;
