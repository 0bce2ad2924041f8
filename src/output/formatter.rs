//! Format-agnostic rendering entry point

use log::debug;
use std::io::{self, Write};

use super::{csv, json, table, OutputFormat, Resource};
use crate::config::defaults;
use crate::error::{GcpError, OutputStage, Result};

/// Renders resources to a data sink, with human-directed messages on a
/// separate diagnostic sink
///
/// Record payloads (table, JSON, CSV, IDs) only ever go to `writer`.
/// "No {type} found." goes to `diagnostics`. The verbose table caption is
/// part of the table and therefore goes to `writer`.
pub struct Formatter<W: Write, E: Write = io::Stderr> {
    writer: W,
    diagnostics: E,
    verbose: bool,
    resource_type: String,
}

impl<W: Write> Formatter<W> {
    /// Create a formatter that writes diagnostics to stderr
    pub fn new(writer: W, verbose: bool, resource_type: &str) -> Self {
        Self::with_diagnostics(writer, io::stderr(), verbose, resource_type)
    }
}

impl<W: Write, E: Write> Formatter<W, E> {
    /// Create a formatter with an explicit diagnostic sink
    ///
    /// An empty `resource_type` falls back to "resources" in messages.
    pub fn with_diagnostics(
        writer: W,
        diagnostics: E,
        verbose: bool,
        resource_type: &str,
    ) -> Self {
        let resource_type = if resource_type.is_empty() {
            defaults::RESOURCE_TYPE.to_string()
        } else {
            resource_type.to_string()
        };

        Self {
            writer,
            diagnostics,
            verbose,
            resource_type,
        }
    }

    /// Label used in diagnostic messages
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Render `resources` in the format named by `format`
    ///
    /// The selector is resolved before anything is written, so an unknown
    /// format leaves both sinks untouched. `headers` are used by table and
    /// CSV output and ignored otherwise.
    pub fn format(
        &mut self,
        resources: &[&dyn Resource],
        format: &str,
        headers: &[&str],
    ) -> Result<()> {
        let format: OutputFormat = format.parse()?;
        self.format_as(resources, format, headers)
    }

    /// Render `resources` in an already-resolved format
    pub fn format_as(
        &mut self,
        resources: &[&dyn Resource],
        format: OutputFormat,
        headers: &[&str],
    ) -> Result<()> {
        debug!(
            "Formatting {} {} as {}",
            resources.len(),
            self.resource_type,
            format
        );

        match format {
            OutputFormat::Table => self.format_table(resources, headers),
            OutputFormat::Json => json::write_json(&mut self.writer, resources)
                .map_err(|e| output_error(OutputStage::Json, e)),
            OutputFormat::Csv => csv::write_csv(&mut self.writer, resources, headers)
                .map_err(|e| output_error(OutputStage::Csv, e)),
            OutputFormat::Id => self.format_id(resources),
        }
    }

    fn format_table(&mut self, resources: &[&dyn Resource], headers: &[&str]) -> Result<()> {
        if resources.is_empty() {
            return self.report_empty();
        }

        let caption = self
            .verbose
            .then(|| format!("Total {}: {}", self.resource_type, resources.len()));

        table::write_table(&mut self.writer, resources, headers, caption.as_deref())
            .map_err(|e| output_error(OutputStage::Table, e))
    }

    fn format_id(&mut self, resources: &[&dyn Resource]) -> Result<()> {
        if resources.is_empty() {
            return self.report_empty();
        }

        for resource in resources {
            writeln!(self.writer, "{}", resource.id())
                .map_err(|e| output_error(OutputStage::Id, e))?;
        }
        self.writer
            .flush()
            .map_err(|e| output_error(OutputStage::Id, e))
    }

    /// Print "No {type} found." on the diagnostic sink when verbose
    fn report_empty(&mut self) -> Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(self.diagnostics, "No {} found.", self.resource_type)
            .and_then(|_| self.diagnostics.flush())
            .map_err(|e| output_error(OutputStage::Diagnostic, e))
    }
}

fn output_error(stage: OutputStage, source: io::Error) -> GcpError {
    GcpError::Output { stage, source }
}
