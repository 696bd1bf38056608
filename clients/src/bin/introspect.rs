//! `vips-introspect`: writes the parameter report of every operation in a
//! registry.
//!
//! Walks the built-in catalog, or a registry snapshot given with
//! `--registry`, and writes one `OPERATION:` block per concrete,
//! non-deprecated operation. Records are written as they are produced, so a
//! failed run leaves the report complete up to the failing operation.
//!
//! **Usage:**
//! ```
//! vips-introspect [--registry <snapshot.json>] [--root <TypeName>] [--out <path>] [--format text|json]
//! ```
//!
//! Exits non-zero if any parameter cannot be classified or the registry
//! cannot be walked.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use vips_clients::{init_tracing, load_catalog, Format, ReportWriter};
use vips_introspect::{walker, OPERATION_ROOT};
use vips_registry::CatalogRegistry;

/// Report the parameter schema of every registered operation.
#[derive(Parser)]
#[command(
    name = "vips-introspect",
    about = "Report the parameter schema of every registered operation"
)]
struct Args {
    /// Registry snapshot to walk instead of the built-in catalog.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Type to start the walk from.
    #[arg(long, default_value = OPERATION_ROOT)]
    root: String,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log filter, overriding RUST_LOG (e.g. `debug`).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let catalog = load_catalog(args.registry.as_deref())?;
    let sink: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = ReportWriter::new(BufWriter::new(sink), args.format);

    let mut registry = CatalogRegistry::new(&catalog);
    let walked = walker::run(&mut registry, &args.root, |record| {
        writer.write_record(&record)?;
        Ok(())
    });
    let written = writer.written();
    writer.finish().context("writing report")?;

    let stats = walked.with_context(|| format!("introspecting operations below {}", args.root))?;
    info!(
        operations = stats.reported,
        written,
        "report complete"
    );
    Ok(())
}
