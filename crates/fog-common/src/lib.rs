//! # fog-common
//!
//! Foundation layer for Fog: graph descriptors, attribute specs, and errors.
//!
//! This crate provides the static configuration every other Fog crate reads.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (GraphDescriptor, GraphFiles, AttributeSpec)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{AttributeSpec, GraphDescriptor, GraphFiles, VertexId};
pub use utils::error::{ConfigError, Error, Result};
