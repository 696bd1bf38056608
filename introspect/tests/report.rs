//! Operation reports and registry walks.

#![allow(clippy::unwrap_used)]

use vips_introspect::walker::{run, walk};
use vips_introspect::{parse_report, Error, OPERATION_ROOT};
use vips_introspect_test_helpers as helpers;
use vips_registry::model::{types, OperationFlags};
use vips_registry::{Catalog, CatalogRegistry, OperationClass, OperationRegistry, RegistryError};

fn opened(catalog: &Catalog) -> CatalogRegistry<'_> {
    let mut registry = CatalogRegistry::new(catalog);
    registry.open().unwrap();
    registry
}

fn names(params: &[vips_introspect::ParameterRecord]) -> Vec<&str> {
    params.iter().map(|p| p.name.as_str()).collect()
}

// =============================================================================
// Partition and skip rules
// =============================================================================

#[test]
fn required_and_optional_partition() {
    let catalog = helpers::catalog(vec![helpers::partition_operation()]);
    let report = walk(&opened(&catalog), OPERATION_ROOT).unwrap();
    let record = report.find("VipsPartition").unwrap();
    assert_eq!(names(&record.required), ["a", "c"]);
    assert_eq!(names(&record.optional), ["b"]);
    assert!(record.required[1].output);

    let text = report.to_text();
    assert!(!text.contains("\nd\n"));
    let required = text.find("REQUIRED:").unwrap();
    let optional = text.find("OPTIONAL:").unwrap();
    assert!(required < optional);
}

#[test]
fn abstract_and_deprecated_operations_are_not_reported() {
    let catalog = helpers::catalog(vec![
        OperationClass::abstract_class("VipsFamily", helpers::BELOW_ROOT, "family", "a family"),
        helpers::operation("VipsOld", "old", Vec::new()).with_flags(OperationFlags::DEPRECATED),
        helpers::operation("VipsNew", "new", Vec::new()),
    ]);
    let text = walk(&opened(&catalog), OPERATION_ROOT).unwrap().to_text();
    assert_eq!(text.matches("OPERATION:").count(), 1);
    assert!(text.contains("new:VipsNew\n"));
    assert!(!text.contains("VipsOld"));
    assert!(!text.contains("VipsFamily"));
}

#[test]
fn non_construction_parameters_are_hidden_even_when_classifiable() {
    let report = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap();
    for record in &report.operations {
        assert!(
            record.parameter_names().all(|n| n != "nickname" && n != "description"),
            "{}",
            record.type_name
        );
    }
}

#[test]
fn deprecated_arguments_of_ancestors_are_hidden() {
    let report = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap();
    let jpeg = report.find("VipsForeignLoadJpegFile").unwrap();
    let names: Vec<&str> = jpeg.parameter_names().collect();
    assert!(names.contains(&"fail_on"));
    assert!(!names.contains(&"fail"));
    assert!(!names.contains(&"sequential"));
}

// =============================================================================
// Ordering and determinism
// =============================================================================

#[test]
fn two_walks_are_byte_identical() {
    let first = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap().to_text();
    let second = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap().to_text();
    assert_eq!(first, second);
}

#[test]
fn records_follow_registry_order() {
    let registry = opened(Catalog::full());
    let order: Vec<String> = registry
        .enumerate_types(OPERATION_ROOT)
        .unwrap()
        .into_iter()
        .filter(|t| !t.is_abstract)
        .map(|t| t.name)
        .filter(|name| name != "VipsCache")
        .collect();
    let report = walk(&registry, OPERATION_ROOT).unwrap();
    let reported: Vec<&str> = report.operations.iter().map(|r| r.type_name.as_str()).collect();
    assert_eq!(reported, order);
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn classification_failure_aborts_and_releases() {
    let catalog = helpers::catalog(vec![
        helpers::partition_operation(),
        helpers::single_parameter_operation("VipsOpaque", helpers::pointer_spec()),
        helpers::operation("VipsLater", "later", Vec::new()),
    ]);
    let registry = opened(&catalog);
    let mut seen = Vec::new();
    let err = vips_introspect::walk_each(&registry, OPERATION_ROOT, |record| {
        seen.push(record.type_name);
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, Error::Classify(_)));
    assert_eq!(seen, ["VipsPartition"]);
    assert_eq!(registry.live_instances(), 0);
}

#[test]
fn boxed_failure_names_the_parameter() {
    let catalog = helpers::catalog(vec![helpers::single_parameter_operation(
        "VipsOpaque",
        helpers::unknown_boxed_spec(),
    )]);
    let err = walk(&opened(&catalog), OPERATION_ROOT).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported boxed type VipsArea for parameter 'area' of VipsSynthetic"
    );
}

#[test]
fn instantiation_failure_is_fatal() {
    let catalog = helpers::catalog(vec![
        helpers::operation("VipsBroken", "broken", Vec::new()).not_instantiable(),
    ]);
    let registry = opened(&catalog);
    let err = walk(&registry, OPERATION_ROOT).unwrap_err();
    assert!(matches!(
        err,
        Error::InstantiationFailure {
            source: RegistryError::NotInstantiable(_),
            ..
        }
    ));
    assert_eq!(registry.live_instances(), 0);
}

#[test]
fn invalid_registry_fails_to_open() {
    let mut catalog = helpers::catalog(vec![helpers::operation("VipsAlone", "alone", Vec::new())]);
    catalog.classes[1].ty.lineage[0] = "VipsMissing".to_owned();
    let mut registry = CatalogRegistry::new(&catalog);
    let err = run(&mut registry, OPERATION_ROOT, |_| Ok(())).unwrap_err();
    assert!(matches!(
        err,
        Error::RegistryInitFailure(RegistryError::DanglingParent { .. })
    ));
}

#[test]
fn parent_cycle_fails_to_open() {
    let mut catalog = helpers::catalog(vec![helpers::operation("VipsLoop", "loop", Vec::new())]);
    catalog.classes[0].ty.lineage = vec!["VipsLoop".to_owned()];
    let mut registry = CatalogRegistry::new(&catalog);
    let mut seen = 0;
    let err = run(&mut registry, OPERATION_ROOT, |_| {
        seen += 1;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(
        err,
        Error::RegistryInitFailure(RegistryError::Cycle(_))
    ));
    assert_eq!(seen, 0);
    assert!(!registry.is_open());
}

#[test]
fn repeated_inherited_argument_fails_to_open() {
    let family = OperationClass::abstract_class("VipsFamily", helpers::BELOW_ROOT, "family", "a family")
        .with_arguments(vec![helpers::partition_operation().arguments[0].clone()]);
    let child = OperationClass::new(
        "VipsChild",
        &["VipsFamily", types::VIPS_OPERATION, types::VIPS_OBJECT, types::G_OBJECT],
        "child",
        "redeclares a",
    )
    .with_arguments(vec![helpers::partition_operation().arguments[0].clone()]);
    let catalog = helpers::catalog(vec![family, child]);
    let mut registry = CatalogRegistry::new(&catalog);
    let err = run(&mut registry, OPERATION_ROOT, |_| Ok(())).unwrap_err();
    assert!(matches!(
        err,
        Error::RegistryInitFailure(RegistryError::DuplicateArgument { .. })
    ));
}

// =============================================================================
// Built-in catalog
// =============================================================================

#[test]
fn builtin_catalog_walks_cleanly() {
    let mut registry = CatalogRegistry::new(Catalog::full());
    let mut count = 0;
    let stats = run(&mut registry, OPERATION_ROOT, |_| {
        count += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(stats.reported, count);
    assert!(count >= 30);
    assert_eq!(registry.live_instances(), 0);
}

#[test]
fn builtin_report_reads_back() {
    let report = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap();
    let parsed = parse_report(&report.to_text()).unwrap();
    assert_eq!(parsed, report.operations);
}

#[test]
fn builtin_blobs_disambiguate() {
    let report = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap();
    let text = |name: &str| report.find(name).unwrap().lines().join("\n");
    assert!(text("VipsProfileLoad").contains("\nVipsBlob"));
    assert!(text("VipsForeignLoadJpegBuffer").contains("\nbyte-data"));
    assert!(!text("VipsForeignLoadJpegBuffer").contains("\nVipsBlob"));
}

#[test]
fn builtin_object_reference() {
    let report = walk(&opened(Catalog::full()), OPERATION_ROOT).unwrap();
    let affine = report.find("VipsAffine").unwrap().lines();
    assert!(affine.iter().any(|l| l == "VipsInterpolate-VIPS interpolators"));
}

#[test]
fn json_form_carries_categories() {
    let report = walk(&opened(Catalog::full()), "VipsUnary").unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let invert = &json["operations"][0];
    assert_eq!(invert["type_name"], "VipsInvert");
    assert_eq!(invert["required"][0]["category"]["category"], "image");
    assert_eq!(invert["required"][1]["output"], true);
}

#[test]
fn root_constant_matches_model() {
    assert_eq!(OPERATION_ROOT, types::VIPS_OPERATION);
}
