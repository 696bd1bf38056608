//! Test-only builders for synthetic descriptors and small registries.
//!
//! Every helper returns plain registry model values; tests wrap the
//! catalogs in a [`CatalogRegistry`](vips_registry::CatalogRegistry).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use vips_registry::builder::{arg, value_table};
use vips_registry::model::{types, Argument, ParamKind, ParamSpec, TypeHandle};
use vips_registry::{Catalog, OperationClass};

/// Owner type name used by synthetic descriptors.
pub const OWNER: &str = "VipsSynthetic";

/// Lineage of an operation registered directly below the root.
pub const BELOW_ROOT: &[&str] = &[types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT];

/// A small enum table with three values.
#[must_use]
pub fn direction_values() -> Vec<vips_registry::EnumValue> {
    value_table(
        "VIPS_DIRECTION",
        &[(0, "horizontal"), (1, "vertical"), (2, "diagonal")],
    )
}

/// A small flags table with four values.
#[must_use]
pub fn keep_values() -> Vec<vips_registry::EnumValue> {
    value_table(
        "VIPS_FOREIGN_KEEP",
        &[(0, "none"), (1, "exif"), (2, "xmp"), (4, "icc")],
    )
}

/// One classifiable descriptor per category, labelled with the category's
/// first report line.
#[must_use]
pub fn witnesses() -> Vec<(&'static str, ParamSpec)> {
    let a = |name: &str| arg(OWNER, name, name, name);
    vec![
        ("VipsImage", a("image").image().into_spec()),
        (
            "VipsInterpolate-VIPS interpolators",
            a("interpolate")
                .object(TypeHandle::object(
                    types::VIPS_INTERPOLATE,
                    "interpolate",
                    "VIPS interpolators",
                ))
                .into_spec(),
        ),
        ("bool:1", a("flag").boolean(true).into_spec()),
        ("int:0:100:10", a("count").int(0, 100, 10).into_spec()),
        ("uint64:0:4096:512", a("offset").uint64(0, 4096, 512).into_spec()),
        ("double:-1:1:0.5", a("scale").double(-1.0, 1.0, 0.5).into_spec()),
        (
            "enum-VipsDirection",
            a("direction")
                .enumeration("VipsDirection", direction_values(), 1)
                .into_spec(),
        ),
        ("array of int", a("ints").array_int().into_spec()),
        ("array of double", a("doubles").array_double().into_spec()),
        ("array of images", a("images").array_image().into_spec()),
        ("VipsBlob", profile_blob("VipsProfileLoad")),
        ("byte-data", arg(OWNER, "buffer", "Buffer", "Buffer").blob().into_spec()),
        ("string", a("text").string(Some("hello")).into_spec()),
        (
            "flags-VipsForeignKeep",
            a("keep")
                .flags("VipsForeignKeep", keep_values(), 31)
                .into_spec(),
        ),
    ]
}

/// A blob parameter declared by `owner`.
#[must_use]
pub fn profile_blob(owner: &str) -> ParamSpec {
    arg(owner, "profile", "Profile", "Loaded profile")
        .blob()
        .into_spec()
}

/// A descriptor of the untyped pointer type, which no rule accepts.
#[must_use]
pub fn pointer_spec() -> ParamSpec {
    arg(OWNER, "data", "Data", "Raw data")
        .typed(TypeHandle::fundamental(types::G_POINTER), ParamKind::Pointer)
        .into_spec()
}

/// A boxed descriptor of a type the boxed rules do not know.
#[must_use]
pub fn unknown_boxed_spec() -> ParamSpec {
    arg(OWNER, "area", "Area", "Memory area")
        .boxed("VipsArea")
        .into_spec()
}

/// The abstract root class every synthetic catalog starts with.
#[must_use]
pub fn root() -> OperationClass {
    OperationClass::abstract_class(
        types::VIPS_OPERATION,
        &[types::VIPS_OBJECT, types::G_OBJECT],
        "operation",
        "operations",
    )
}

/// A concrete operation directly below the root.
#[must_use]
pub fn operation(name: &str, nickname: &str, arguments: Vec<Argument>) -> OperationClass {
    OperationClass::new(name, BELOW_ROOT, nickname, &format!("{nickname} operation"))
        .with_arguments(arguments)
}

/// A catalog of the root followed by `classes`.
#[must_use]
pub fn catalog(classes: Vec<OperationClass>) -> Catalog {
    let mut all = vec![root()];
    all.extend(classes);
    Catalog {
        version: "test".to_owned(),
        root: types::VIPS_OPERATION.to_owned(),
        classes: all,
    }
}

/// An operation with `a` required input, `b` optional input, `c` required
/// output and `d` deprecated, declared in that order.
#[must_use]
pub fn partition_operation() -> OperationClass {
    let owner = "VipsPartition";
    operation(
        owner,
        "partition",
        vec![
            arg(owner, "a", "A", "Required input")
                .int(0, 10, 1)
                .required_input(1),
            arg(owner, "b", "B", "Optional input")
                .int(0, 10, 2)
                .optional_input(2),
            arg(owner, "c", "C", "Required output")
                .image()
                .required_output(3),
            arg(owner, "d", "D", "Deprecated input")
                .int(0, 10, 3)
                .required_input(4)
                .deprecated(),
        ],
    )
}

/// An operation whose single parameter is `spec`, as a required input.
#[must_use]
pub fn single_parameter_operation(name: &str, spec: ParamSpec) -> OperationClass {
    let argument = Argument {
        spec,
        flags: vips_registry::ArgumentFlags::REQUIRED_INPUT,
        priority: 1,
    };
    operation(name, &name.to_lowercase(), vec![argument])
}
