//! Segment and partition capacity planning.

use fog_common::types::{AttributeSpec, GraphDescriptor};
use fog_common::utils::error::ConfigError;
use serde::Serialize;

/// How vertices are batched into segments and split among processing units.
///
/// Planned once from a [`GraphDescriptor`] and immutable afterwards. It also
/// caches the planning inputs the carver needs, so buffer sizes are computed
/// in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentLayout {
    /// Vertices per segment.
    segment_capacity: u64,
    /// Vertices per processing unit within one segment.
    partition_capacity: u64,
    /// Segments needed to cover every vertex.
    segment_count: u64,
    /// Vertex slots covered, counting from id 0.
    vertex_count: u64,
    processor_count: u32,
    memory_budget_bytes: u64,
    attribute: AttributeSpec,
    /// Bytes of one attribute buffer, a whole number of records.
    attribute_buffer_bytes: u64,
}

impl SegmentLayout {
    /// Plans a layout for attribute records of `attribute_record_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the record size is 0
    /// or the descriptor fails validation, and
    /// [`ConfigError::InsufficientMemory`] if a quarter of the budget cannot
    /// hold at least one record per processing unit.
    pub fn plan(
        descriptor: &GraphDescriptor,
        attribute_record_size: u64,
    ) -> Result<Self, ConfigError> {
        Self::plan_with(descriptor, AttributeSpec::with_size(attribute_record_size))
    }

    /// Plans a layout for the attribute value type `A`.
    pub fn for_attribute<A>(descriptor: &GraphDescriptor) -> Result<Self, ConfigError> {
        Self::plan_with(descriptor, AttributeSpec::of::<A>())
    }

    /// Plans a layout for records described by `attribute`.
    pub fn plan_with(
        descriptor: &GraphDescriptor,
        attribute: AttributeSpec,
    ) -> Result<Self, ConfigError> {
        let record_size = attribute.size();
        if record_size == 0 {
            return Err(ConfigError::invalid("attribute_record_size must be at least 1"));
        }
        descriptor.validate()?;

        if descriptor.min_vertex_id() != 0 {
            tracing::warn!(
                min_vertex_id = descriptor.min_vertex_id(),
                "vertex ids below min_vertex_id still occupy attribute slots"
            );
        }

        let memory_budget_bytes = descriptor.memory_budget_bytes();
        let insufficient = ConfigError::InsufficientMemory {
            budget_bytes: memory_budget_bytes,
            record_size,
        };

        // Two attribute buffers take half the budget. Floor division keeps
        // each one a whole number of records for any record size.
        let attribute_buffer_bytes = memory_budget_bytes / 4 / record_size * record_size;
        let segment_capacity = attribute_buffer_bytes / record_size;
        if segment_capacity == 0 {
            return Err(insufficient);
        }

        let processor_count = descriptor.processor_count();
        let partition_capacity = segment_capacity / u64::from(processor_count);
        if partition_capacity == 0 {
            return Err(insufficient);
        }

        let vertex_count = descriptor.vertex_count();
        let segment_count = vertex_count.div_ceil(segment_capacity);

        tracing::debug!(
            segment_capacity,
            partition_capacity,
            segment_count,
            attribute_buffer_bytes,
            "planned segment layout"
        );

        Ok(Self {
            segment_capacity,
            partition_capacity,
            segment_count,
            vertex_count,
            processor_count,
            memory_budget_bytes,
            attribute,
            attribute_buffer_bytes,
        })
    }

    /// Vertices per segment.
    #[must_use]
    pub fn segment_capacity(&self) -> u64 {
        self.segment_capacity
    }

    /// Vertices per processing unit within one segment.
    #[must_use]
    pub fn partition_capacity(&self) -> u64 {
        self.partition_capacity
    }

    /// Number of segments covering the whole vertex range.
    #[must_use]
    pub fn segment_count(&self) -> u64 {
        self.segment_count
    }

    /// Vertex slots covered, counting from id 0.
    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.vertex_count
    }

    /// Number of processing units the layout was planned for.
    #[must_use]
    pub fn processor_count(&self) -> u32 {
        self.processor_count
    }

    /// Memory budget the layout was planned against.
    #[must_use]
    pub fn memory_budget_bytes(&self) -> u64 {
        self.memory_budget_bytes
    }

    /// The attribute record the layout was planned for.
    #[must_use]
    pub fn attribute(&self) -> AttributeSpec {
        self.attribute
    }

    /// Bytes in one attribute buffer.
    #[must_use]
    pub fn attribute_buffer_bytes(&self) -> u64 {
        self.attribute_buffer_bytes
    }

    /// Bytes in each processing unit's private buffer.
    #[must_use]
    pub fn unit_buffer_bytes(&self) -> u64 {
        self.memory_budget_bytes / (2 * u64::from(self.processor_count))
    }
}
