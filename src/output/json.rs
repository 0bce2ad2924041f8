//! JSON output formatter

use std::io::{self, Write};

use super::{Resource, ToJsonObject};

/// Collect the JSON object of every resource, in input order
pub(super) fn to_json_values(
    resources: &[&dyn Resource],
) -> serde_json::Result<Vec<serde_json::Value>> {
    resources
        .iter()
        .map(|resource| ToJsonObject::to_json(*resource))
        .collect()
}

/// Write resources as an indented JSON array followed by a newline
///
/// Objects are fully built before the first byte is written.
pub(super) fn write_json<W: Write>(
    writer: &mut W,
    resources: &[&dyn Resource],
) -> io::Result<()> {
    let values = to_json_values(resources)?;
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writeln!(writer)?;
    writer.flush()
}
