//! Demonstrates loading the built-in catalog and walking its type tree.
//!
//! Run with: `cargo run --example dump_catalog -p vips-registry`

use vips_registry::{Catalog, CatalogRegistry, OperationRegistry};

fn main() -> Result<(), vips_registry::RegistryError> {
    let catalog = Catalog::full();

    println!("Operation catalog v{}", catalog.version);
    println!("  Classes:   {}", catalog.classes.len());
    println!("  Concrete:  {}", catalog.concrete_count());
    println!("  Abstract:  {}", catalog.abstract_count());
    println!();

    let mut registry = CatalogRegistry::new(catalog);
    registry.open()?;
    for ty in registry.enumerate_types(&catalog.root)? {
        let depth = ty.lineage.len().saturating_sub(2);
        println!(
            "  {:indent$}{:32} {}",
            "",
            ty.name,
            if ty.is_abstract { "(abstract)" } else { "" },
            indent = depth * 2
        );
    }
    registry.close();

    println!();
    let json = vips_registry::snapshot::to_string_pretty(catalog)?;
    println!("Snapshot ({} bytes)", json.len());
    Ok(())
}
