//! Layout command: plan, carve, and print the resolved layout.

use std::path::Path;

use anyhow::Result;
use comfy_table::Cell;
use fog_core::{LayoutReport, MemoryRegion, MemoryRegionCarver};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the layout command.
pub fn run(
    path: &Path,
    attr_size: u64,
    base: u64,
    region_size: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let (descriptor, layout) = super::plan_from_file(path, attr_size)?;
    let region = MemoryRegion::new(
        base,
        region_size.unwrap_or(descriptor.memory_budget_bytes()),
    );
    let plan = MemoryRegionCarver::new(&layout).carve(region)?;
    let report = LayoutReport::new(&descriptor, &layout, &plan);
    tracing::info!(
        segments = report.segment_count,
        segment_capacity = report.segment_capacity,
        partition_capacity = report.partition_capacity,
        "resolved segment layout"
    );

    match Format::from(format) {
        Format::Json => output::print_json(&report, quiet)?,
        Format::Text => {
            if !quiet {
                println!("{report}");
            }
        }
        Format::Table => {
            let items = vec![
                ("Vertices", report.vertex_count.to_string()),
                ("Processing Units", report.processor_count.to_string()),
                ("Memory Budget", output::format_bytes(report.memory_budget_bytes)),
                ("Attribute Size", format!("{} bytes", report.attribute_size)),
                ("Segments", report.segment_count.to_string()),
                ("Segment Capacity", report.segment_capacity.to_string()),
                ("Partition Capacity", report.partition_capacity.to_string()),
            ];
            output::print_key_value_table(&items, quiet);

            if !quiet {
                let mut table = output::create_table();
                output::add_header(&mut table, &["Buffer", "Address", "Offset", "Size"]);
                for unit in &report.unit_buffers {
                    table.add_row(vec![
                        Cell::new(format!("unit {}", unit.unit)),
                        Cell::new(format!("{:#x}", unit.address)),
                        Cell::new(format!("{:#x}", unit.span.offset)),
                        Cell::new(output::format_bytes(unit.size_bytes())),
                    ]);
                }
                for (i, buffer) in report.attribute_buffers.iter().enumerate() {
                    table.add_row(vec![
                        Cell::new(format!("attribute {i}")),
                        Cell::new(format!("{:#x}", buffer.address)),
                        Cell::new(format!("{:#x}", buffer.span.offset)),
                        Cell::new(output::format_bytes(buffer.capacity_bytes())),
                    ]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
