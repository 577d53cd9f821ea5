//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Snapshot documents (JSON or TOML) read from disk

pub mod file;
