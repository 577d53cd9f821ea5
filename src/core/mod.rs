//! Core domain logic for tfm-values
//!
//! This module contains pure resolution logic with no I/O dependencies.
//! Snapshot delivery is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Snapshot, ValueRecord, FrameworkFamily)
//! - `services/` - Selection, transformation, ordering and fallback
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
