//! # fog-core
//!
//! Core layer for Fog: segment planning, vertex addressing, and memory carving.
//!
//! An out-of-core graph engine keeps only one segment of vertex attributes in
//! memory at a time. This crate decides how large a segment is, which
//! processing unit owns which vertices, and where every buffer lives in the
//! engine's memory region. It depends only on `fog-common`.
//!
//! ## Modules
//!
//! - [`segment`] - Segment and partition capacities, vertex addressing
//! - [`memory`] - Memory region carving and buffer views
//! - [`report`] - Diagnostic report of a resolved layout
//!
//! ## Example
//!
//! ```
//! use fog_common::GraphDescriptor;
//! use fog_core::{MemoryRegionCarver, RegionArena, SegmentLayout};
//!
//! let descriptor = GraphDescriptor::new(9_999, 2, 64 * 1024);
//! let layout = SegmentLayout::for_attribute::<f32>(&descriptor).unwrap();
//!
//! let carver = MemoryRegionCarver::new(&layout);
//! let mut memory = vec![0u8; carver.required_bytes() as usize];
//! let arena = RegionArena::new(&mut memory);
//! let plan = carver.carve(arena.region()).unwrap();
//! let buffers = arena.split(&plan).unwrap();
//!
//! assert_eq!(layout.segment_capacity(), 4096);
//! assert_eq!(buffers.units.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod memory;
pub mod report;
pub mod segment;

// Re-export commonly used types
pub use memory::{BufferPlan, MemoryRegion, MemoryRegionCarver, RegionArena};
pub use report::LayoutReport;
pub use segment::{Partition, SegmentLayout};
