//! CSV output formatter

use std::io::{self, Write};

use super::common::csv_record;
use super::Resource;

/// Write a header record, then one record per resource
///
/// An empty resource list still produces the header line.
pub(super) fn write_csv<W: Write>(
    writer: &mut W,
    resources: &[&dyn Resource],
    headers: &[&str],
) -> io::Result<()> {
    writeln!(writer, "{}", csv_record(headers))?;
    for resource in resources {
        writeln!(writer, "{}", csv_record(&resource.table_row()))?;
    }
    writer.flush()
}
