//! Operation schema introspection.
//!
//! `vips-introspect` walks an [`OperationRegistry`], classifies every
//! construction parameter of every concrete, non-deprecated operation and
//! produces a line-oriented report that binding generators consume.
//!
//! The pipeline, leaf first:
//!
//! - [`classify`](mod@classify): descriptor to [`TypeCategory`]
//! - [`param`]: argument to [`ParameterRecord`]
//! - [`operation`]: operation instance to [`OperationRecord`]
//! - [`walker`]: registry to [`Report`]
//!
//! [`parse`] reads a report back into records.
//!
//! # Example
//!
//! ```
//! use vips_introspect::walker::run;
//! use vips_registry::{Catalog, CatalogRegistry};
//!
//! let mut registry = CatalogRegistry::new(Catalog::full());
//! let mut text = String::new();
//! run(&mut registry, "VipsOperation", |record| {
//!     for line in record.lines() {
//!         text.push_str(&line);
//!         text.push('\n');
//!     }
//!     Ok(())
//! })
//! .expect("the built-in catalog is fully classifiable");
//! assert!(text.contains("invert:VipsInvert\n"));
//! ```
//!
//! [`OperationRegistry`]: vips_registry::OperationRegistry

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod error;
pub mod operation;
pub mod param;
pub mod parse;
pub mod render;
pub mod walker;

pub use classify::{classify, TypeCategory, ValueTable};
pub use error::{ClassifyError, Error};
pub use operation::{report_operation, OperationRecord};
pub use param::{report_parameter, ParameterRecord};
pub use parse::{parse_report, ParseError};
pub use walker::{walk, walk_each, Report, WalkStats};

/// Root of the operation type tree.
pub const OPERATION_ROOT: &str = vips_registry::model::types::VIPS_OPERATION;
