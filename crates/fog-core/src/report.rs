//! Human-readable summary of a resolved layout.
//!
//! The report is for operators inspecting a configuration. Its text form has
//! no stable format; use the `Serialize` impl when a tool needs the values.

use std::fmt;

use fog_common::types::GraphDescriptor;
use serde::Serialize;

use crate::memory::{AttributeBuffer, BufferPlan, MemoryRegion, UnitBuffer};
use crate::segment::SegmentLayout;

/// Everything the planner and carver resolved for one engine run.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Number of vertex slots.
    pub vertex_count: u64,
    /// Number of processing units.
    pub processor_count: u32,
    /// Memory budget in bytes.
    pub memory_budget_bytes: u64,
    /// Size of one attribute record in bytes.
    pub attribute_size: u64,
    /// Number of segments.
    pub segment_count: u64,
    /// Vertices per segment.
    pub segment_capacity: u64,
    /// Vertices per unit per segment.
    pub partition_capacity: u64,
    /// The carved region.
    pub region: MemoryRegion,
    /// The two attribute buffers.
    pub attribute_buffers: [AttributeBuffer; 2],
    /// One buffer per unit.
    pub unit_buffers: Vec<UnitBuffer>,
}

impl LayoutReport {
    /// Collects the resolved layout into a report.
    pub fn new(descriptor: &GraphDescriptor, layout: &SegmentLayout, plan: &BufferPlan) -> Self {
        let report = Self {
            vertex_count: descriptor.vertex_count(),
            processor_count: layout.processor_count(),
            memory_budget_bytes: layout.memory_budget_bytes(),
            attribute_size: layout.attribute().size(),
            segment_count: layout.segment_count(),
            segment_capacity: layout.segment_capacity(),
            partition_capacity: layout.partition_capacity(),
            region: plan.region(),
            attribute_buffers: *plan.attribute_buffers(),
            unit_buffers: plan.unit_buffers().to_vec(),
        };
        tracing::debug!(
            segments = report.segment_count,
            segment_capacity = report.segment_capacity,
            partition_capacity = report.partition_capacity,
            "resolved segment layout"
        );
        report
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Begin of layout ==========")?;
        writeln!(f, "Attribute record size: {} bytes", self.attribute_size)?;
        writeln!(
            f,
            "Segments: {} of {} vertices ({} vertices total)",
            self.segment_count, self.segment_capacity, self.vertex_count
        )?;
        writeln!(
            f,
            "Partition capacity: {} vertices x {} units",
            self.partition_capacity, self.processor_count
        )?;
        writeln!(f, "---------- Addressing ----------")?;
        writeln!(
            f,
            "Region: {:#x}, size {:#x} (budget {:#x})",
            self.region.base_address, self.region.size_bytes, self.memory_budget_bytes
        )?;
        for (i, buffer) in self.attribute_buffers.iter().enumerate() {
            writeln!(
                f,
                "Attribute buffer {i}: {:#x}, size {:#x}",
                buffer.address,
                buffer.capacity_bytes()
            )?;
        }
        for unit in &self.unit_buffers {
            writeln!(
                f,
                "Unit {}: scheduling and update buffer {:#x}, size {:#x}",
                unit.unit,
                unit.address,
                unit.size_bytes()
            )?;
        }
        write!(f, "========== End of layout ==========")
    }
}
