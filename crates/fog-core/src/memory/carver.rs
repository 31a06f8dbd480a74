//! Static carving of the engine's memory region.
//!
//! ```text
//! base                      budget/2                                  region end
//! ┌────────┬────────┬─────┬────────┬──────────────────┬──────────────────┬─────┐
//! │ unit 0 │ unit 1 │ ... │ unit N │ attribute buf 0  │ attribute buf 1  │     │
//! └────────┴────────┴─────┴────────┴──────────────────┴──────────────────┴─────┘
//! ```
//!
//! The first half of the budget is split evenly into one private buffer per
//! processing unit. The second half starts with the two attribute buffers,
//! each holding one segment's attribute array.

use fog_common::utils::error::ConfigError;
use serde::Serialize;

use super::region::{BufferSpan, MemoryRegion};
use crate::segment::SegmentLayout;

/// One of the two double-buffered attribute arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeBuffer {
    /// Absolute address of the first byte.
    pub address: u64,
    /// Position within the region.
    pub span: BufferSpan,
}

impl AttributeBuffer {
    /// Bytes available for attribute records.
    #[must_use]
    pub fn capacity_bytes(&self) -> u64 {
        self.span.len
    }
}

/// A processing unit's private scheduling and update workspace.
///
/// How the unit splits this buffer between scheduling state and outgoing
/// update batches is decided by the scheduler and update manager that own
/// it; the carver only hands out the address and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitBuffer {
    /// Owning processing unit.
    pub unit: u32,
    /// Absolute address of the first byte.
    pub address: u64,
    /// Position within the region.
    pub span: BufferSpan,
}

impl UnitBuffer {
    /// Size of the buffer in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.span.len
    }
}

/// Every buffer carved from one memory region.
///
/// Buffers are pairwise disjoint and lie within the region; both properties
/// are established by [`MemoryRegionCarver::carve`] and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferPlan {
    region: MemoryRegion,
    attribute: [AttributeBuffer; 2],
    units: Vec<UnitBuffer>,
    required_bytes: u64,
}

impl BufferPlan {
    /// The region the plan was carved from.
    #[must_use]
    pub fn region(&self) -> MemoryRegion {
        self.region
    }

    /// Both attribute buffers, in address order.
    #[must_use]
    pub fn attribute_buffers(&self) -> &[AttributeBuffer; 2] {
        &self.attribute
    }

    /// One attribute buffer; `index` is 0 or 1.
    #[must_use]
    pub fn attribute_buffer(&self, index: usize) -> Option<&AttributeBuffer> {
        self.attribute.get(index)
    }

    /// Private buffers, indexed by processing unit.
    #[must_use]
    pub fn unit_buffers(&self) -> &[UnitBuffer] {
        &self.units
    }

    /// Private buffer of `unit`.
    #[must_use]
    pub fn unit_buffer(&self, unit: u32) -> Option<&UnitBuffer> {
        self.units.get(unit as usize)
    }

    /// Bytes from the region base to the end of the furthest buffer.
    #[must_use]
    pub fn required_bytes(&self) -> u64 {
        self.required_bytes
    }

    /// Every carved span in ascending offset order: unit buffers, then both
    /// attribute buffers.
    pub fn spans(&self) -> impl Iterator<Item = BufferSpan> + '_ {
        self.units
            .iter()
            .map(|u| u.span)
            .chain(self.attribute.iter().map(|a| a.span))
    }
}

/// Carves a [`MemoryRegion`] according to a planned [`SegmentLayout`].
///
/// Buffer sizes come from the layout, which already holds the rounded
/// attribute buffer size and the processor count, so the carver never
/// recomputes what the planner decided.
#[derive(Debug, Clone, Copy)]
pub struct MemoryRegionCarver<'a> {
    layout: &'a SegmentLayout,
}

impl<'a> MemoryRegionCarver<'a> {
    /// Creates a carver for `layout`.
    #[must_use]
    pub fn new(layout: &'a SegmentLayout) -> Self {
        Self { layout }
    }

    /// Offset of the first attribute buffer.
    fn attribute_offset(&self) -> u64 {
        self.layout.memory_budget_bytes() / 2
    }

    /// Smallest region size that can hold every buffer.
    ///
    /// This is the end of the second attribute buffer, which is never less
    /// than the sum of all buffer sizes.
    #[must_use]
    pub fn required_bytes(&self) -> u64 {
        self.attribute_offset() + 2 * self.layout.attribute_buffer_bytes()
    }

    /// Splits `region` into two attribute buffers and one buffer per unit.
    ///
    /// Performs no I/O and does not touch the memory; buffer contents are
    /// uninitialized as far as Fog is concerned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RegionTooSmall`] if `region` cannot hold every
    /// buffer, and [`ConfigError::InvalidConfiguration`] if the region wraps
    /// past `u64::MAX`. No partial plan is produced.
    pub fn carve(&self, region: MemoryRegion) -> Result<BufferPlan, ConfigError> {
        let required_bytes = self.required_bytes();
        if region.size_bytes < required_bytes {
            return Err(ConfigError::RegionTooSmall {
                required_bytes,
                available_bytes: region.size_bytes,
            });
        }
        if region.base_address.checked_add(region.size_bytes).is_none() {
            return Err(ConfigError::invalid(format!(
                "region of {} bytes at {:#x} runs past the end of the address space",
                region.size_bytes, region.base_address
            )));
        }

        let attribute_bytes = self.layout.attribute_buffer_bytes();
        let first = BufferSpan::new(self.attribute_offset(), attribute_bytes);
        let second = BufferSpan::new(first.end(), attribute_bytes);
        let attribute = [first, second].map(|span| AttributeBuffer {
            address: region.address_at(span.offset),
            span,
        });

        let attribute_spec = self.layout.attribute();
        if !attribute_spec.is_aligned(attribute[0].address)
            || !attribute_spec.is_aligned(attribute[1].address)
        {
            tracing::warn!(
                align = attribute_spec.align(),
                buffer0 = attribute[0].address,
                buffer1 = attribute[1].address,
                "attribute buffers are not aligned for the attribute record"
            );
        }

        let unit_bytes = self.layout.unit_buffer_bytes();
        let units = (0..self.layout.processor_count())
            .map(|unit| {
                let span = BufferSpan::new(u64::from(unit) * unit_bytes, unit_bytes);
                UnitBuffer {
                    unit,
                    address: region.address_at(span.offset),
                    span,
                }
            })
            .collect();

        tracing::debug!(
            base_address = region.base_address,
            region_bytes = region.size_bytes,
            required_bytes,
            unit_bytes,
            attribute_bytes,
            "carved memory region"
        );

        Ok(BufferPlan {
            region,
            attribute,
            units,
            required_bytes,
        })
    }
}
