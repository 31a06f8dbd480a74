use fog_common::{ConfigError, GraphDescriptor};
use fog_core::{MemoryRegion, MemoryRegionCarver, SegmentLayout};
use proptest::prelude::*;

fn descriptor() -> impl Strategy<Value = (GraphDescriptor, u64)> {
    (
        0u64..5_000_000,
        1u32..=64,
        1u64..(1 << 32),
        1u64..=256,
    )
        .prop_map(|(max_vertex_id, processors, budget, record)| {
            (GraphDescriptor::new(max_vertex_id, processors, budget), record)
        })
}

proptest! {
    #[test]
    fn plan_capacities_hold((desc, record) in descriptor()) {
        match SegmentLayout::plan(&desc, record) {
            Ok(layout) => {
                let processors = u64::from(desc.processor_count());
                let vertices = desc.vertex_count();

                prop_assert!(layout.segment_capacity() > 0);
                prop_assert!(layout.partition_capacity() > 0);
                prop_assert!(layout.partition_capacity() * processors <= layout.segment_capacity());
                prop_assert_eq!(layout.segment_count(), vertices.div_ceil(layout.segment_capacity()));
                prop_assert!(layout.segment_count() * layout.segment_capacity() >= vertices);
                prop_assert!((layout.segment_count() - 1) * layout.segment_capacity() < vertices);
                prop_assert_eq!(layout.attribute_buffer_bytes() % record, 0);
                prop_assert!(layout.attribute_buffer_bytes() <= desc.memory_budget_bytes() / 4);
            }
            Err(err) => {
                // Only a budget too small for one record per unit may fail.
                let records = desc.memory_budget_bytes() / 4 / record;
                let is_insufficient = matches!(err, ConfigError::InsufficientMemory { .. });
                prop_assert!(is_insufficient);
                prop_assert!(records / u64::from(desc.processor_count()) == 0);
            }
        }
    }

    #[test]
    fn every_vertex_lies_in_its_partition(
        (desc, record) in descriptor(),
        pick in any::<u64>(),
    ) {
        let Ok(layout) = SegmentLayout::plan(&desc, record) else {
            return Ok(());
        };
        let v = pick % desc.vertex_count();
        let segment = layout.segment_of(v);
        let unit = layout.unit_of(v);

        prop_assert!(segment < layout.segment_count());
        prop_assert!(layout.first_vertex(segment, unit) <= v);
        prop_assert!(v <= layout.last_vertex(segment, unit));

        let owner = layout.owning_unit(v);
        prop_assert!(owner < desc.processor_count());
        let owned = layout.partitions(segment).find(|p| p.unit == owner);
        prop_assert!(owned.is_some_and(|p| p.contains(v)));
    }

    #[test]
    fn partitions_cover_each_segment_exactly(
        (desc, record) in descriptor(),
        pick in any::<u64>(),
    ) {
        let Ok(layout) = SegmentLayout::plan(&desc, record) else {
            return Ok(());
        };
        let segment = pick % layout.segment_count();
        let bounds = layout.segment_vertices(segment).unwrap();

        let mut next = *bounds.start();
        for part in layout.partitions(segment) {
            prop_assert_eq!(part.first, next);
            prop_assert!(part.last >= part.first);
            next = part.last + 1;
        }
        prop_assert_eq!(next, *bounds.end() + 1);
    }

    #[test]
    fn carved_buffers_are_disjoint_and_tiled(
        (desc, record) in descriptor(),
        base in 0u64..(1 << 40),
    ) {
        let Ok(layout) = SegmentLayout::plan(&desc, record) else {
            return Ok(());
        };
        let budget = desc.memory_budget_bytes();
        let plan = MemoryRegionCarver::new(&layout)
            .carve(MemoryRegion::new(base, budget))
            .unwrap();

        let spans: Vec<_> = plan.spans().collect();
        for (i, a) in spans.iter().enumerate() {
            prop_assert!(a.end() <= budget);
            for b in &spans[i + 1..] {
                prop_assert!(!a.overlaps(b));
                prop_assert!(!a.range().contains(&b.offset));
            }
        }

        let mut cursor = 0;
        for unit in plan.unit_buffers() {
            prop_assert_eq!(unit.span.offset, cursor);
            prop_assert_eq!(unit.address, base + cursor);
            cursor = unit.span.end();
        }
        prop_assert!(cursor <= budget / 2);
        if budget % (2 * u64::from(desc.processor_count())) == 0 {
            prop_assert_eq!(cursor, budget / 2);
        }

        for buffer in plan.attribute_buffers() {
            prop_assert!(buffer.span.offset >= budget / 2);
            prop_assert_eq!(buffer.capacity_bytes(), layout.attribute_buffer_bytes());
            prop_assert_eq!(buffer.address, base + buffer.span.offset);
        }
    }

    #[test]
    fn short_regions_are_rejected(
        (desc, record) in descriptor(),
        shortfall in 1u64..4096,
    ) {
        let Ok(layout) = SegmentLayout::plan(&desc, record) else {
            return Ok(());
        };
        let carver = MemoryRegionCarver::new(&layout);
        let required = carver.required_bytes();
        let size = required.saturating_sub(shortfall);

        let err = carver.carve(MemoryRegion::new(0, size)).unwrap_err();
        prop_assert_eq!(
            err,
            ConfigError::RegionTooSmall { required_bytes: required, available_bytes: size }
        );
    }
}
