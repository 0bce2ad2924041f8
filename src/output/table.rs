//! Table output formatter

use comfy_table::{presets::ASCII_FULL_CONDENSED, Table};
use std::io::{self, Write};

use super::Resource;

/// Build a bordered table with upper-case headers, one row per resource
pub(super) fn build_table(resources: &[&dyn Resource], headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_header(headers.iter().map(|h| h.to_uppercase()).collect::<Vec<_>>());

    for resource in resources {
        table.add_row(resource.table_row());
    }

    table
}

/// Write the table, followed by an optional caption line
pub(super) fn write_table<W: Write>(
    writer: &mut W,
    resources: &[&dyn Resource],
    headers: &[&str],
    caption: Option<&str>,
) -> io::Result<()> {
    let table = build_table(resources, headers);
    writeln!(writer, "{table}")?;
    if let Some(caption) = caption {
        writeln!(writer, "{caption}")?;
    }
    writer.flush()
}
