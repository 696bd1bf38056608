//! `vips-catalog`: writes the built-in operation catalog as a JSON snapshot.
//!
//! The snapshot is the input format of `vips-introspect --registry`.
//!
//! **Usage:**
//! ```
//! vips-catalog [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vips_registry::{snapshot, Catalog};

/// Write the built-in operation catalog as a JSON snapshot.
#[derive(Parser)]
#[command(name = "vips-catalog", about = "Write the built-in operation catalog as JSON")]
struct Args {
    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log filter, overriding RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    vips_clients::init_tracing(args.log_level.as_deref());
    let catalog = Catalog::full();

    match &args.out {
        Some(path) => {
            snapshot::save(catalog, path)
                .with_context(|| format!("writing snapshot {}", path.display()))?;
            eprintln!(
                "Wrote catalog v{}: {} concrete, {} abstract operations to {}",
                catalog.version,
                catalog.concrete_count(),
                catalog.abstract_count(),
                path.display()
            );
        }
        None => {
            let json = snapshot::to_string_pretty(catalog).context("encoding snapshot")?;
            println!("{json}");
        }
    }
    Ok(())
}
