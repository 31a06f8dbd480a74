//! Core type definitions for Fog.
//!
//! This module contains the static facts the layout planner consumes:
//! - Graph and machine description ([`GraphDescriptor`], [`GraphFiles`])
//! - Attribute record sizing ([`AttributeSpec`])
//! - Vertex identifiers ([`VertexId`])

mod attribute;
mod descriptor;

pub use attribute::AttributeSpec;
pub use descriptor::{GraphDescriptor, GraphFiles};

/// Dense vertex identifier.
///
/// Vertex ids are stored as `u64` so that range arithmetic on the last
/// segment can never overflow, even for graphs with `u32::MAX` vertices.
pub type VertexId = u64;
