//! Vertex addressing over a planned [`SegmentLayout`].
//!
//! The four primitive mappings (`segment_of`, `unit_of`, `first_vertex`,
//! `last_vertex`) are plain arithmetic and never clamp. When
//! `segment_capacity` is not a multiple of the processor count, the trailing
//! `segment_capacity % processor_count` vertices of each segment map to a
//! unit index at or past `processor_count`, and `last_vertex` of the final
//! segment can run past the graph's last vertex. Callers that need ranges
//! confined to real vertices use [`SegmentLayout::segment_vertices`],
//! [`SegmentLayout::owning_unit`], or [`SegmentLayout::partitions`].

use std::ops::RangeInclusive;

use fog_common::types::VertexId;
use serde::Serialize;

use super::SegmentLayout;

/// The vertices one processing unit owns within a segment, clamped to the
/// segment and to the graph's last vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// Owning processing unit.
    pub unit: u32,
    /// First vertex owned (inclusive).
    pub first: VertexId,
    /// Last vertex owned (inclusive).
    pub last: VertexId,
}

impl Partition {
    /// Number of vertices in the partition.
    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.last - self.first + 1
    }

    /// Returns true if `vertex` belongs to this partition.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        (self.first..=self.last).contains(&vertex)
    }
}

impl SegmentLayout {
    /// Segment holding `vertex`.
    #[inline]
    #[must_use]
    pub fn segment_of(&self, vertex: VertexId) -> u64 {
        vertex / self.segment_capacity()
    }

    /// Processing unit `vertex` maps to within its segment, unclamped.
    #[inline]
    #[must_use]
    pub fn unit_of(&self, vertex: VertexId) -> u32 {
        ((vertex % self.segment_capacity()) / self.partition_capacity()) as u32
    }

    /// First vertex of `unit`'s partition in `segment`.
    #[inline]
    #[must_use]
    pub fn first_vertex(&self, segment: u64, unit: u32) -> VertexId {
        segment * self.segment_capacity() + u64::from(unit) * self.partition_capacity()
    }

    /// Last vertex of `unit`'s partition in `segment`, unclamped.
    #[inline]
    #[must_use]
    pub fn last_vertex(&self, segment: u64, unit: u32) -> VertexId {
        segment * self.segment_capacity() + (u64::from(unit) + 1) * self.partition_capacity() - 1
    }

    /// Returns true if `vertex` is inside the planned vertex range.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Unit that processes `vertex`, folding the remainder of an uneven
    /// split into the last unit.
    #[must_use]
    pub fn owning_unit(&self, vertex: VertexId) -> u32 {
        self.unit_of(vertex).min(self.processor_count() - 1)
    }

    /// Vertices of `segment`, clamped to the last vertex of the graph.
    ///
    /// Returns `None` if `segment` is past the last segment.
    #[must_use]
    pub fn segment_vertices(&self, segment: u64) -> Option<RangeInclusive<VertexId>> {
        if segment >= self.segment_count() {
            return None;
        }
        let first = segment * self.segment_capacity();
        let last = first
            .saturating_add(self.segment_capacity() - 1)
            .min(self.vertex_count() - 1);
        Some(first..=last)
    }

    /// Non-empty partitions of `segment` in unit order.
    ///
    /// Each unit's range is clamped to the segment and to the graph's last
    /// vertex; the last unit also takes the segment's uneven remainder.
    /// Units with no vertices in a short final segment are skipped.
    pub fn partitions(&self, segment: u64) -> impl Iterator<Item = Partition> + '_ {
        let bounds = self.segment_vertices(segment);
        let last_unit = self.processor_count() - 1;

        (0..self.processor_count()).filter_map(move |unit| {
            let (start, end) = bounds.as_ref().map(|r| (*r.start(), *r.end()))?;
            // Unclamped bounds can overflow near the top of the id space.
            let first = start
                .checked_add(u64::from(unit) * self.partition_capacity())
                .filter(|&first| first <= end)?;
            let last = if unit == last_unit {
                end
            } else {
                first.saturating_add(self.partition_capacity() - 1).min(end)
            };
            Some(Partition { unit, first, last })
        })
    }
}
