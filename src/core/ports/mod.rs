//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the core resolution logic
//! and the systems around it (snapshot delivery, host value lists).
//!
//! Implementations of I/O-bound ports live in the `adapters` module.

mod snapshot_source;
mod values_provider;

pub use snapshot_source::SnapshotSource;
pub use values_provider::ValuesProvider;
