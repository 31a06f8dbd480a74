//! Static carving of the engine's memory region.
//!
//! The engine owns one contiguous region for its whole run. This module
//! splits it, once at startup, into two double-buffered attribute arrays and
//! one private buffer per processing unit.
//!
//! - [`MemoryRegion`] / [`BufferSpan`] - the region and bounds-checked windows into it
//! - [`MemoryRegionCarver`] - computes a [`BufferPlan`] from a segment layout
//! - [`RegionArena`] - hands out the planned buffers as disjoint slices

mod arena;
mod carver;
mod region;

pub use arena::{CarvedBuffers, RegionArena};
pub use carver::{AttributeBuffer, BufferPlan, MemoryRegionCarver, UnitBuffer};
pub use region::{BufferSpan, MemoryRegion};
