//! File-based snapshot source
//!
//! Implements `SnapshotSource` by reading JSON or TOML snapshot documents.

mod source;

pub use source::{FileSnapshotSource, SnapshotFormat, parse_snapshot};
