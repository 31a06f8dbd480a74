//! Sizing of per-vertex attribute records.

use std::mem;

use serde::{Deserialize, Serialize};

/// Size and alignment of one vertex's attribute record.
///
/// The engine is generic over its attribute value type; the planner only
/// needs the record's footprint, which this captures once so that the
/// planner and carver always agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSpec {
    size: u64,
    align: u64,
}

impl AttributeSpec {
    /// Returns the spec of the attribute type `A`.
    ///
    /// Zero-sized types produce a spec with `size == 0`, which the planner
    /// rejects.
    #[must_use]
    pub fn of<A>() -> Self {
        Self {
            size: mem::size_of::<A>() as u64,
            align: mem::align_of::<A>() as u64,
        }
    }

    /// Creates a spec from a raw record size with byte alignment.
    #[must_use]
    pub const fn with_size(size: u64) -> Self {
        Self { size, align: 1 }
    }

    /// Sets the required alignment of the record.
    #[must_use]
    pub const fn with_align(mut self, align: u64) -> Self {
        self.align = align;
        self
    }

    /// Size of one record in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Alignment of one record in bytes.
    #[must_use]
    pub const fn align(&self) -> u64 {
        self.align
    }

    /// Returns true if `offset` satisfies this record's alignment.
    #[must_use]
    pub const fn is_aligned(&self, offset: u64) -> bool {
        self.align <= 1 || offset % self.align == 0
    }
}
