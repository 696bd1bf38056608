//! The type classifier.
//!
//! [`classify`] maps one parameter descriptor to exactly one
//! [`TypeCategory`]. Categories overlap at the representation level (an
//! image is also an object, an object may also be boxed), so the rules are
//! an ordered table walked first-match-wins. A descriptor that no rule
//! claims is an error, never a guess.

use serde::Serialize;
use vips_registry::model::{types, EnumValue, ParamKind, ParamSpec};

use crate::error::ClassifyError;

/// Substring of the owner type name that turns a blob into a profile blob.
pub const PROFILE_LOAD_OWNER: &str = "ProfileLoad";

/// The value table of an enum or flags parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueTable {
    /// The enum or flags type name.
    pub type_name: String,
    /// Every legal value in declaration order.
    pub values: Vec<EnumValue>,
    /// Default integer value.
    pub default: i64,
}

/// The semantic category of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum TypeCategory {
    /// An image handle.
    Image,
    /// A reference to some other object class.
    Object {
        /// The object type name.
        type_name: String,
        /// The object class description.
        description: String,
    },
    /// A boolean.
    Bool {
        /// Default value.
        default: bool,
    },
    /// A signed integer range.
    Int {
        /// Smallest legal value.
        minimum: i64,
        /// Largest legal value.
        maximum: i64,
        /// Default value.
        default: i64,
    },
    /// An unsigned 64-bit integer range.
    #[serde(rename = "uint64")]
    UInt64 {
        /// Smallest legal value.
        minimum: u64,
        /// Largest legal value.
        maximum: u64,
        /// Default value.
        default: u64,
    },
    /// A double range.
    Double {
        /// Smallest legal value.
        minimum: f64,
        /// Largest legal value.
        maximum: f64,
        /// Default value.
        default: f64,
    },
    /// One value of an enumeration.
    Enum(ValueTable),
    /// An array of integers.
    ArrayInt,
    /// An array of doubles.
    ArrayDouble,
    /// An array of images.
    ArrayImage,
    /// An ICC profile held as an opaque blob.
    ProfileBlob,
    /// Any other binary blob.
    ByteData,
    /// A string.
    String,
    /// A bitwise combination of flag values.
    Flags(ValueTable),
}

type Matcher = fn(&ParamSpec) -> Option<Result<TypeCategory, ClassifyError>>;
type BoxedMatcher = fn(&ParamSpec) -> Option<TypeCategory>;

/// Top-level rules in match order.
const RULES: &[(&str, Matcher)] = &[
    ("image", image),
    ("object", object),
    ("bool", boolean),
    ("int", int),
    ("uint64", uint64),
    ("double", double),
    ("enum", enumeration),
    ("boxed", boxed),
    ("string", string),
    ("flags", flags),
];

/// Boxed sub-rules in match order.
const BOXED_RULES: &[(&str, BoxedMatcher)] = &[
    ("array of int", array_int),
    ("array of double", array_double),
    ("array of images", array_image),
    ("profile blob", profile_blob),
    ("byte-data", byte_data),
];

/// Classifies one parameter descriptor.
///
/// # Errors
///
/// Returns [`ClassifyError::UnsupportedBoxedType`] for a boxed type none of
/// the boxed rules claim and [`ClassifyError::UnsupportedValueType`] when
/// no rule matches at all.
pub fn classify(spec: &ParamSpec) -> Result<TypeCategory, ClassifyError> {
    RULES
        .iter()
        .find_map(|(_, matcher)| matcher(spec))
        .unwrap_or_else(|| {
            Err(ClassifyError::UnsupportedValueType {
                type_name: spec.value_type.name.clone(),
                param: spec.name.clone(),
                owner: spec.owner.clone(),
            })
        })
}

/// Names of the top-level rules in the order they are tried.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(name, _)| *name)
}

/// Names of the boxed sub-rules in the order they are tried.
pub fn boxed_rule_names() -> impl Iterator<Item = &'static str> {
    BOXED_RULES.iter().map(|(name, _)| *name)
}

fn image(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    spec.value_type
        .is_a(types::VIPS_IMAGE)
        .then_some(Ok(TypeCategory::Image))
}

fn object(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    let ty = &spec.value_type;
    ty.is_a(types::VIPS_OBJECT).then(|| {
        Ok(TypeCategory::Object {
            type_name: ty.name().to_owned(),
            description: ty.description().to_owned(),
        })
    })
}

fn boolean(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    match spec.kind {
        ParamKind::Boolean { default } => Some(Ok(TypeCategory::Bool { default })),
        _ => None,
    }
}

fn int(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    match spec.kind {
        ParamKind::Int {
            minimum,
            maximum,
            default,
        } => Some(Ok(TypeCategory::Int {
            minimum,
            maximum,
            default,
        })),
        _ => None,
    }
}

fn uint64(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    match spec.kind {
        ParamKind::UInt64 {
            minimum,
            maximum,
            default,
        } => Some(Ok(TypeCategory::UInt64 {
            minimum,
            maximum,
            default,
        })),
        _ => None,
    }
}

fn double(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    match spec.kind {
        ParamKind::Double {
            minimum,
            maximum,
            default,
        } => Some(Ok(TypeCategory::Double {
            minimum,
            maximum,
            default,
        })),
        _ => None,
    }
}

fn value_table(spec: &ParamSpec, values: &[EnumValue], default: i64) -> ValueTable {
    ValueTable {
        type_name: spec.value_type.name.clone(),
        values: values.to_vec(),
        default,
    }
}

fn enumeration(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    match &spec.kind {
        ParamKind::Enum { values, default } => {
            Some(Ok(TypeCategory::Enum(value_table(spec, values, *default))))
        }
        _ => None,
    }
}

fn boxed(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    if !matches!(spec.kind, ParamKind::Boxed) {
        return None;
    }
    let found = BOXED_RULES.iter().find_map(|(_, matcher)| matcher(spec));
    Some(found.ok_or_else(|| ClassifyError::UnsupportedBoxedType {
        type_name: spec.value_type.name.clone(),
        param: spec.name.clone(),
        owner: spec.owner.clone(),
    }))
}

fn array_int(spec: &ParamSpec) -> Option<TypeCategory> {
    spec.value_type
        .is_a(types::VIPS_ARRAY_INT)
        .then_some(TypeCategory::ArrayInt)
}

fn array_double(spec: &ParamSpec) -> Option<TypeCategory> {
    spec.value_type
        .is_a(types::VIPS_ARRAY_DOUBLE)
        .then_some(TypeCategory::ArrayDouble)
}

fn array_image(spec: &ParamSpec) -> Option<TypeCategory> {
    spec.value_type
        .is_a(types::VIPS_ARRAY_IMAGE)
        .then_some(TypeCategory::ArrayImage)
}

// Blobs declared by the profile loader family carry an ICC profile and are
// reported under their own category. Matched on the declaring type name
// only; must stay ahead of `byte_data`.
fn profile_blob(spec: &ParamSpec) -> Option<TypeCategory> {
    (spec.value_type.is_a(types::VIPS_BLOB) && spec.owner.contains(PROFILE_LOAD_OWNER))
        .then_some(TypeCategory::ProfileBlob)
}

fn byte_data(spec: &ParamSpec) -> Option<TypeCategory> {
    spec.value_type
        .is_a(types::VIPS_BLOB)
        .then_some(TypeCategory::ByteData)
}

fn string(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    (spec.value_type.name == types::G_STRING).then_some(Ok(TypeCategory::String))
}

fn flags(spec: &ParamSpec) -> Option<Result<TypeCategory, ClassifyError>> {
    match &spec.kind {
        ParamKind::Flags { values, default } => {
            Some(Ok(TypeCategory::Flags(value_table(spec, values, *default))))
        }
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vips_registry::builder::{arg, value_table as table};
    use vips_registry::model::TypeHandle;

    fn spec_of(owner: &str) -> vips_registry::builder::ArgBuilder {
        arg(owner, "x", "X", "An x")
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = rule_names().collect();
        assert_eq!(
            names,
            ["image", "object", "bool", "int", "uint64", "double", "enum", "boxed", "string", "flags"]
        );
        let boxed: Vec<_> = boxed_rule_names().collect();
        assert_eq!(
            boxed,
            ["array of int", "array of double", "array of images", "profile blob", "byte-data"]
        );
    }

    #[test]
    fn image_wins_over_object() {
        let spec = spec_of("VipsInvert").image().into_spec();
        assert_eq!(classify(&spec).unwrap(), TypeCategory::Image);
    }

    #[test]
    fn object_carries_type_and_description() {
        let spec = spec_of("VipsAffine")
            .object(TypeHandle::object(types::VIPS_INTERPOLATE, "interpolate", "VIPS interpolators"))
            .into_spec();
        assert_eq!(
            classify(&spec).unwrap(),
            TypeCategory::Object {
                type_name: "VipsInterpolate".to_owned(),
                description: "VIPS interpolators".to_owned(),
            }
        );
    }

    #[test]
    fn object_rule_precedes_boxed_kind() {
        let spec = spec_of("VipsFancy")
            .typed(TypeHandle::object("VipsRegion", "region", "pixel region"), ParamKind::Boxed)
            .into_spec();
        assert!(matches!(classify(&spec).unwrap(), TypeCategory::Object { .. }));
    }

    #[test]
    fn scalars_keep_their_payload() {
        let b = spec_of("VipsLinear").boolean(true).into_spec();
        assert_eq!(classify(&b).unwrap(), TypeCategory::Bool { default: true });

        let i = spec_of("VipsMax").int(1, 1_000_000, 10).into_spec();
        assert_eq!(
            classify(&i).unwrap(),
            TypeCategory::Int {
                minimum: 1,
                maximum: 1_000_000,
                default: 10
            }
        );

        let u = spec_of("VipsForeignLoadRaw").uint64(0, u64::MAX, 7).into_spec();
        assert_eq!(
            classify(&u).unwrap(),
            TypeCategory::UInt64 {
                minimum: 0,
                maximum: u64::MAX,
                default: 7
            }
        );

        let d = spec_of("VipsCopy").double(-1.0, 1.0, 0.5).into_spec();
        assert_eq!(
            classify(&d).unwrap(),
            TypeCategory::Double {
                minimum: -1.0,
                maximum: 1.0,
                default: 0.5
            }
        );
    }

    #[test]
    fn enum_and_flags_are_distinct() {
        let values = table("VIPS_ACCESS", &[(0, "random"), (1, "sequential")]);
        let e = spec_of("VipsForeignLoad")
            .enumeration("VipsAccess", values.clone(), 1)
            .into_spec();
        let f = spec_of("VipsForeignLoad")
            .flags("VipsAccess", values.clone(), 1)
            .into_spec();
        let expected = ValueTable {
            type_name: "VipsAccess".to_owned(),
            values,
            default: 1,
        };
        assert_eq!(classify(&e).unwrap(), TypeCategory::Enum(expected.clone()));
        assert_eq!(classify(&f).unwrap(), TypeCategory::Flags(expected));
    }

    #[test]
    fn boxed_sub_dispatch() {
        let cases = [
            (spec_of("VipsEmbed").array_int().into_spec(), TypeCategory::ArrayInt),
            (spec_of("VipsLinear").array_double().into_spec(), TypeCategory::ArrayDouble),
            (spec_of("VipsSum").array_image().into_spec(), TypeCategory::ArrayImage),
            (spec_of("VipsProfileLoad").blob().into_spec(), TypeCategory::ProfileBlob),
            (spec_of("VipsForeignLoadJpegBuffer").blob().into_spec(), TypeCategory::ByteData),
        ];
        for (spec, expected) in cases {
            assert_eq!(classify(&spec).unwrap(), expected, "{}", spec.owner);
        }
    }

    #[test]
    fn profile_rule_matches_substring() {
        let spec = spec_of("VipsForeignProfileLoadFile").blob().into_spec();
        assert_eq!(classify(&spec).unwrap(), TypeCategory::ProfileBlob);
    }

    #[test]
    fn unknown_boxed_type_fails() {
        let spec = spec_of("VipsFancy").boxed("VipsArea").into_spec();
        assert_eq!(
            classify(&spec).unwrap_err(),
            ClassifyError::UnsupportedBoxedType {
                type_name: "VipsArea".to_owned(),
                param: "x".to_owned(),
                owner: "VipsFancy".to_owned(),
            }
        );
    }

    #[test]
    fn string_requires_exact_type() {
        let s = spec_of("VipsText").string(Some("hi")).into_spec();
        assert_eq!(classify(&s).unwrap(), TypeCategory::String);

        let derived = spec_of("VipsText")
            .typed(
                TypeHandle::derived("VipsRefString", &[types::G_STRING]),
                ParamKind::String { default: None },
            )
            .into_spec();
        assert!(matches!(
            classify(&derived),
            Err(ClassifyError::UnsupportedValueType { .. })
        ));
    }

    #[test]
    fn pointer_fails() {
        let spec = spec_of("VipsFancy")
            .typed(TypeHandle::fundamental(types::G_POINTER), ParamKind::Pointer)
            .into_spec();
        assert_eq!(
            classify(&spec).unwrap_err(),
            ClassifyError::UnsupportedValueType {
                type_name: "gpointer".to_owned(),
                param: "x".to_owned(),
                owner: "VipsFancy".to_owned(),
            }
        );
    }
}
