//! Classifier coverage against synthetic descriptors.

#![allow(clippy::unwrap_used)]

use vips_introspect::{classify, ClassifyError, TypeCategory};
use vips_introspect_test_helpers as helpers;

// =============================================================================
// Totality and exhaustive failure
// =============================================================================

#[test]
fn every_category_has_a_classifiable_witness() {
    for (label, spec) in helpers::witnesses() {
        let category = classify(&spec)
            .unwrap_or_else(|err| unreachable!("{label}: {err}"));
        assert_eq!(category.lines()[0], label, "parameter {}", spec.name);
    }
}

#[test]
fn witnesses_cover_every_variant() {
    let categories: Vec<TypeCategory> = helpers::witnesses()
        .iter()
        .map(|(_, spec)| classify(spec).unwrap())
        .collect();
    let has = |f: fn(&TypeCategory) -> bool| categories.iter().any(f);
    assert!(has(|c| matches!(c, TypeCategory::Image)));
    assert!(has(|c| matches!(c, TypeCategory::Object { .. })));
    assert!(has(|c| matches!(c, TypeCategory::Bool { .. })));
    assert!(has(|c| matches!(c, TypeCategory::Int { .. })));
    assert!(has(|c| matches!(c, TypeCategory::UInt64 { .. })));
    assert!(has(|c| matches!(c, TypeCategory::Double { .. })));
    assert!(has(|c| matches!(c, TypeCategory::Enum(_))));
    assert!(has(|c| matches!(c, TypeCategory::ArrayInt)));
    assert!(has(|c| matches!(c, TypeCategory::ArrayDouble)));
    assert!(has(|c| matches!(c, TypeCategory::ArrayImage)));
    assert!(has(|c| matches!(c, TypeCategory::ProfileBlob)));
    assert!(has(|c| matches!(c, TypeCategory::ByteData)));
    assert!(has(|c| matches!(c, TypeCategory::String)));
    assert!(has(|c| matches!(c, TypeCategory::Flags(_))));
}

#[test]
fn unmatched_value_type_fails() {
    assert!(matches!(
        classify(&helpers::pointer_spec()),
        Err(ClassifyError::UnsupportedValueType { .. })
    ));
}

#[test]
fn unmatched_boxed_type_fails() {
    assert!(matches!(
        classify(&helpers::unknown_boxed_spec()),
        Err(ClassifyError::UnsupportedBoxedType { .. })
    ));
}

// =============================================================================
// Enum and flags tables
// =============================================================================

#[test]
fn enum_renders_every_value_then_default() {
    let spec = vips_registry::builder::arg(helpers::OWNER, "direction", "Direction", "d")
        .enumeration("VipsDirection", helpers::direction_values(), 2)
        .into_spec();
    let lines = classify(&spec).unwrap().lines();
    assert_eq!(
        lines,
        [
            "enum-VipsDirection",
            "0:horizontal:VIPS_DIRECTION_HORIZONTAL",
            "1:vertical:VIPS_DIRECTION_VERTICAL",
            "2:diagonal:VIPS_DIRECTION_DIAGONAL",
            "2",
        ]
    );
}

#[test]
fn flags_render_every_value_then_default() {
    let values = helpers::keep_values();
    let spec = vips_registry::builder::arg(helpers::OWNER, "keep", "Keep", "k")
        .flags("VipsForeignKeep", values.clone(), 31)
        .into_spec();
    let lines = classify(&spec).unwrap().lines();
    assert_eq!(lines.len(), values.len() + 2);
    assert_eq!(lines[0], "flags-VipsForeignKeep");
    for (line, value) in lines[1..=values.len()].iter().zip(&values) {
        assert_eq!(line, &format!("{}:{}:{}", value.value, value.nick, value.name));
    }
    assert_eq!(lines.last().unwrap(), "31");
}

// =============================================================================
// Blob disambiguation
// =============================================================================

#[test]
fn blob_category_depends_on_owner() {
    assert_eq!(
        classify(&helpers::profile_blob("VipsProfileLoad")).unwrap(),
        TypeCategory::ProfileBlob
    );
    assert_eq!(
        classify(&helpers::profile_blob("VipsProfileLoadBuffer")).unwrap(),
        TypeCategory::ProfileBlob
    );
    assert_eq!(
        classify(&helpers::profile_blob("VipsForeignLoadJpegBuffer")).unwrap(),
        TypeCategory::ByteData
    );
    assert_eq!(
        classify(&helpers::profile_blob("VipsProfileSave")).unwrap(),
        TypeCategory::ByteData
    );
}
