//! Locate command: map vertex ids to their segment and owning unit.

use std::path::Path;

use anyhow::{Result, bail};
use comfy_table::Cell;
use fog_core::SegmentLayout;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Where one vertex is processed.
#[derive(Serialize)]
struct LocationOutput {
    vertex: u64,
    segment: u64,
    unit: u32,
    first: u64,
    last: u64,
}

fn locate(layout: &SegmentLayout, vertex: u64) -> Result<LocationOutput> {
    if !layout.contains(vertex) {
        bail!(
            "vertex {vertex} is outside the graph (last vertex is {})",
            layout.vertex_count() - 1
        );
    }
    let segment = layout.segment_of(vertex);
    let unit = layout.owning_unit(vertex);
    let Some(partition) = layout.partitions(segment).find(|p| p.unit == unit) else {
        bail!("vertex {vertex} has no owning partition in segment {segment}");
    };

    Ok(LocationOutput {
        vertex,
        segment,
        unit,
        first: partition.first,
        last: partition.last,
    })
}

/// Run the locate command.
pub fn run(
    path: &Path,
    attr_size: u64,
    vertices: &[u64],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let (_, layout) = super::plan_from_file(path, attr_size)?;
    let locations = vertices
        .iter()
        .map(|&v| locate(&layout, v))
        .collect::<Result<Vec<_>>>()?;

    match Format::from(format) {
        Format::Json => output::print_json(&locations, quiet)?,
        Format::Table | Format::Text => {
            if !quiet {
                let mut table = output::create_table();
                output::add_header(&mut table, &["Vertex", "Segment", "Unit", "Partition"]);
                for loc in &locations {
                    table.add_row(vec![
                        Cell::new(loc.vertex),
                        Cell::new(loc.segment),
                        Cell::new(loc.unit),
                        Cell::new(format!("{}..={}", loc.first, loc.last)),
                    ]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
