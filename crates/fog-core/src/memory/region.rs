//! Memory regions and the spans carved out of them.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// A contiguous block of memory owned by the engine for its whole run.
///
/// Fog never allocates or frees the region; the engine's startup code does,
/// and hands the carver only its address and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryRegion {
    /// Address of the first byte.
    pub base_address: u64,
    /// Length of the region in bytes.
    pub size_bytes: u64,
}

impl MemoryRegion {
    /// Creates a region descriptor.
    #[must_use]
    pub const fn new(base_address: u64, size_bytes: u64) -> Self {
        Self {
            base_address,
            size_bytes,
        }
    }

    /// Describes the memory backing `bytes`.
    #[must_use]
    pub fn of_slice(bytes: &[u8]) -> Self {
        Self::new(bytes.as_ptr() as usize as u64, bytes.len() as u64)
    }

    /// Absolute address of the byte at `offset`.
    #[must_use]
    pub const fn address_at(&self, offset: u64) -> u64 {
        self.base_address + offset
    }
}

/// A bounds-checked `(offset, len)` window into a [`MemoryRegion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BufferSpan {
    /// Offset from the region base.
    pub offset: u64,
    /// Length in bytes.
    pub len: u64,
}

impl BufferSpan {
    /// Creates a span.
    #[must_use]
    pub const fn new(offset: u64, len: u64) -> Self {
        Self { offset, len }
    }

    /// Offset one past the last byte.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.offset + self.len
    }

    /// The span as a byte range relative to the region base.
    #[must_use]
    pub const fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Returns true if the two spans share at least one byte.
    #[must_use]
    pub const fn overlaps(&self, other: &BufferSpan) -> bool {
        self.len > 0 && other.len > 0 && self.offset < other.end() && other.offset < self.end()
    }
}

impl fmt::Display for BufferSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}, {:#x})", self.offset, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_overlap() {
        let a = BufferSpan::new(0, 100);
        let b = BufferSpan::new(100, 50);
        let c = BufferSpan::new(99, 2);

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
        assert!(!a.overlaps(&BufferSpan::new(50, 0)));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(BufferSpan::new(0x10, 0x20).to_string(), "[0x10, 0x30)");
    }

    #[test]
    fn test_region_of_slice() {
        let bytes = vec![0u8; 64];
        let region = MemoryRegion::of_slice(&bytes);

        assert_eq!(region.size_bytes, 64);
        assert_eq!(region.base_address, bytes.as_ptr() as usize as u64);
        assert_eq!(region.address_at(8), region.base_address + 8);
    }
}
