//! Borrowing carved buffers out of an in-process byte slice.

use fog_common::utils::error::ConfigError;

use super::carver::BufferPlan;
use super::region::MemoryRegion;

/// Disjoint mutable views of every buffer in a [`BufferPlan`].
#[derive(Debug)]
pub struct CarvedBuffers<'a> {
    /// The two attribute buffers, in address order.
    pub attribute: [&'a mut [u8]; 2],
    /// Private buffers, indexed by processing unit.
    pub units: Vec<&'a mut [u8]>,
}

/// An exclusively borrowed memory region backed by a byte slice.
///
/// The arena describes its own [`MemoryRegion`], so a plan carved from
/// [`RegionArena::region`] can be split into real slices. Splitting works
/// only from span offsets; no pointer arithmetic is involved.
#[derive(Debug)]
pub struct RegionArena<'a> {
    bytes: &'a mut [u8],
}

impl<'a> RegionArena<'a> {
    /// Wraps `bytes` as the engine's memory region.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes }
    }

    /// The region this arena covers.
    #[must_use]
    pub fn region(&self) -> MemoryRegion {
        MemoryRegion::of_slice(&*self.bytes)
    }

    /// Splits the arena into the buffers of `plan`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if `plan` was carved
    /// from a different region, and [`ConfigError::RegionTooSmall`] if the
    /// arena is shorter than the plan requires.
    pub fn split(self, plan: &BufferPlan) -> Result<CarvedBuffers<'a>, ConfigError> {
        let region = self.region();
        if plan.region().base_address != region.base_address {
            return Err(ConfigError::invalid(format!(
                "buffer plan was carved for region at {:#x}, arena is at {:#x}",
                plan.region().base_address,
                region.base_address
            )));
        }
        if region.size_bytes < plan.required_bytes() {
            return Err(ConfigError::RegionTooSmall {
                required_bytes: plan.required_bytes(),
                available_bytes: region.size_bytes,
            });
        }

        let mut rest = self.bytes;
        let mut cursor = 0usize;
        let mut slices = Vec::with_capacity(plan.unit_buffers().len() + 2);

        // Spans are ascending and disjoint, so each one starts at or after
        // the cursor.
        for span in plan.spans() {
            let offset = span.offset as usize;
            let len = span.len as usize;
            let (_, tail) = std::mem::take(&mut rest).split_at_mut(offset - cursor);
            let (buffer, tail) = tail.split_at_mut(len);
            slices.push(buffer);
            rest = tail;
            cursor = offset + len;
        }

        let second = slices.pop();
        let first = slices.pop();
        match (first, second) {
            (Some(first), Some(second)) => Ok(CarvedBuffers {
                attribute: [first, second],
                units: slices,
            }),
            _ => Err(ConfigError::invalid("buffer plan has no attribute buffers")),
        }
    }
}
