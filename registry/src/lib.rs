//! Operation registry model and the built-in operation catalog.
//!
//! The `vips-registry` crate describes a polymorphic operation registry as
//! typed Rust data: registered types with their ancestry, operation classes
//! with their flags, and the parameter descriptors each operation declares.
//! It also defines [`OperationRegistry`], the surface an introspector drives,
//! and serves a built-in [`Catalog`] through [`CatalogRegistry`].
//!
//! # Entry Point
//!
//! ```
//! use vips_registry::{Catalog, CatalogRegistry, OperationRegistry};
//!
//! let mut registry = CatalogRegistry::new(Catalog::full());
//! registry.open().expect("built-in catalog is valid");
//! let types = registry.enumerate_types("VipsOperation").expect("root exists");
//! assert_eq!(types[0].name, "VipsOperation");
//! registry.close();
//! ```
//!
//! # Snapshots
//!
//! ```
//! let catalog = vips_registry::Catalog::full();
//! let json = vips_registry::snapshot::to_string_pretty(catalog).expect("encodes");
//! let back = vips_registry::snapshot::from_str(&json).expect("decodes");
//! assert_eq!(back.classes.len(), catalog.classes.len());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod catalog;
pub mod model;
pub mod registry;
pub mod snapshot;

pub use catalog::Catalog;
pub use model::{
    Argument, ArgumentFlags, EnumValue, OperationClass, OperationFlags, ParamKind, ParamSpec,
    TypeHandle,
};
pub use registry::{CatalogInstance, CatalogRegistry, OperationRegistry, RegistryError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_inventory() {
        let catalog = Catalog::full();
        assert_eq!(catalog.root, model::types::VIPS_OPERATION);
        assert!(catalog.concrete_count() >= 30);
        assert!(catalog.abstract_count() >= 10);
    }

    #[test]
    fn every_category_has_a_witness() {
        use model::types;

        let specs: Vec<&ParamSpec> = Catalog::full()
            .classes
            .iter()
            .flat_map(|c| c.arguments.iter().map(|a| &a.spec))
            .collect();
        let has = |f: &dyn Fn(&ParamSpec) -> bool| specs.iter().any(|s| f(s));

        assert!(has(&|s| s.value_type.is_a(types::VIPS_IMAGE)));
        assert!(has(&|s| s.value_type.is_a(types::VIPS_INTERPOLATE)));
        assert!(has(&|s| matches!(s.kind, ParamKind::Boolean { .. })));
        assert!(has(&|s| matches!(s.kind, ParamKind::Int { .. })));
        assert!(has(&|s| matches!(s.kind, ParamKind::UInt64 { .. })));
        assert!(has(&|s| matches!(s.kind, ParamKind::Double { .. })));
        assert!(has(&|s| matches!(s.kind, ParamKind::Enum { .. })));
        assert!(has(&|s| matches!(s.kind, ParamKind::Flags { .. })));
        assert!(has(&|s| s.value_type.is_a(types::VIPS_ARRAY_INT)));
        assert!(has(&|s| s.value_type.is_a(types::VIPS_ARRAY_DOUBLE)));
        assert!(has(&|s| s.value_type.is_a(types::VIPS_ARRAY_IMAGE)));
        assert!(has(&|s| s.value_type.is_a(types::VIPS_BLOB)));
        assert!(has(&|s| s.value_type.name == types::G_STRING));
    }
}
