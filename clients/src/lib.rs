//! Shared plumbing of the client binaries: logging setup, catalog loading
//! and report output.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;
use vips_introspect::OperationRecord;
use vips_registry::{snapshot, Catalog};

/// Installs the stderr log subscriber.
///
/// `level` overrides `RUST_LOG`; without either, only warnings are shown.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads the snapshot at `path`, or borrows the built-in catalog.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or decoded.
pub fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match path {
        Some(path) => {
            let catalog = snapshot::load(path)
                .with_context(|| format!("loading registry snapshot {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(Catalog::full())),
    }
}

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The line grammar consumed by binding generators.
    Text,
    /// A pretty-printed JSON array of records.
    Json,
}

/// Writes records one at a time as they arrive.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    inner: W,
    format: Format,
    written: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W, format: Format) -> Self {
        Self {
            inner,
            format,
            written: 0,
        }
    }

    /// Number of records written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes one record.
    ///
    /// # Errors
    ///
    /// Returns any error of the underlying writer.
    pub fn write_record(&mut self, record: &OperationRecord) -> io::Result<()> {
        match self.format {
            Format::Text => {
                for line in record.lines() {
                    writeln!(self.inner, "{line}")?;
                }
            }
            Format::Json => {
                self.inner
                    .write_all(if self.written == 0 { b"[\n" } else { b",\n" })?;
                serde_json::to_writer_pretty(&mut self.inner, record)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Closes the output and hands back the writer.
    ///
    /// # Errors
    ///
    /// Returns any error of the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.format == Format::Json {
            let tail: &[u8] = if self.written == 0 { b"[]\n" } else { b"\n]\n" };
            self.inner.write_all(tail)?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}
