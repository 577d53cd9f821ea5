//! Snapshot source port
//!
//! Defines where evaluation snapshots come from. In a host this is the
//! project subscription service; the CLI reads snapshot documents from disk.

use super::super::models::Snapshot;

/// Supplier of evaluation snapshots
pub trait SnapshotSource {
    /// Produce the current snapshot
    fn load(&self) -> anyhow::Result<Snapshot>;

    /// Human readable description of where snapshots come from
    fn describe(&self) -> String;
}
