//! Bindery Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Bindery crates.
//! It has no internal Bindery dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: ID, slug, and anchor utilities

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::{heading_anchor, id_from_path, normalize_id};
