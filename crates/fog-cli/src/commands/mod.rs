//! CLI command implementations.

pub mod layout;
pub mod locate;

use std::path::Path;

use anyhow::{Context, Result};
use fog_common::GraphDescriptor;
use fog_core::SegmentLayout;

/// Loads a descriptor and plans its layout.
fn plan_from_file(path: &Path, attr_size: u64) -> Result<(GraphDescriptor, SegmentLayout)> {
    let descriptor = GraphDescriptor::from_json_file(path)
        .with_context(|| format!("failed to load descriptor {}", path.display()))?;
    let layout = SegmentLayout::plan(&descriptor, attr_size)?;
    Ok((descriptor, layout))
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
pub fn parse_address(s: &str) -> Result<u64, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
