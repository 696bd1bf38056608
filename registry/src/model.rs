//! Core registry model types.
//!
//! These types describe the host's dynamic type system as plain owned data:
//! registered types with their ancestry, operation classes with their flags,
//! and the parameter descriptors each operation declares. Everything here is
//! immutable once a catalog is built; the introspector only ever borrows it.

use serde::{Deserialize, Serialize};

/// Well-known type names of the host type system.
pub mod types {
    /// Root of every classed object type.
    pub const G_OBJECT: &str = "GObject";
    /// Fundamental of every boxed (opaque, copyable) value type.
    pub const G_BOXED: &str = "GBoxed";
    /// Fundamental of every enumerated type.
    pub const G_ENUM: &str = "GEnum";
    /// Fundamental of every bitmask type.
    pub const G_FLAGS: &str = "GFlags";
    /// The primitive string type.
    pub const G_STRING: &str = "gchararray";
    /// The primitive boolean type.
    pub const G_BOOLEAN: &str = "gboolean";
    /// The primitive signed integer type.
    pub const G_INT: &str = "gint";
    /// The primitive unsigned 64-bit integer type.
    pub const G_UINT64: &str = "guint64";
    /// The primitive double type.
    pub const G_DOUBLE: &str = "gdouble";
    /// The untyped pointer type.
    pub const G_POINTER: &str = "gpointer";

    /// Base class of every registry object.
    pub const VIPS_OBJECT: &str = "VipsObject";
    /// Image handle type.
    pub const VIPS_IMAGE: &str = "VipsImage";
    /// Root of the operation tree.
    pub const VIPS_OPERATION: &str = "VipsOperation";
    /// Boxed array of integers.
    pub const VIPS_ARRAY_INT: &str = "VipsArrayInt";
    /// Boxed array of doubles.
    pub const VIPS_ARRAY_DOUBLE: &str = "VipsArrayDouble";
    /// Boxed array of image handles.
    pub const VIPS_ARRAY_IMAGE: &str = "VipsArrayImage";
    /// Boxed binary large object.
    pub const VIPS_BLOB: &str = "VipsBlob";
    /// Pixel interpolator objects.
    pub const VIPS_INTERPOLATE: &str = "VipsInterpolate";
    /// Input byte source objects.
    pub const VIPS_SOURCE: &str = "VipsSource";
    /// Output byte target objects.
    pub const VIPS_TARGET: &str = "VipsTarget";
}

/// A registered type of the host type system.
///
/// `lineage` lists the ancestors nearest-first, so `lineage[0]` is the
/// parent. Fundamental types have an empty lineage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeHandle {
    /// Type name, unique within a registry (e.g. `"VipsInvert"`).
    pub name: String,
    /// Ancestor type names, nearest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lineage: Vec<String>,
    /// Whether the type can never be instantiated directly.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_abstract: bool,
    /// Short class nickname (e.g. `"invert"`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Human-readable class description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl TypeHandle {
    /// Creates a fundamental type with no ancestors.
    #[must_use]
    pub fn fundamental(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            lineage: Vec::new(),
            is_abstract: false,
            nickname: String::new(),
            description: String::new(),
        }
    }

    /// Creates a type derived from `lineage` (nearest ancestor first).
    #[must_use]
    pub fn derived(name: &str, lineage: &[&str]) -> Self {
        Self {
            lineage: lineage.iter().map(|s| (*s).to_owned()).collect(),
            ..Self::fundamental(name)
        }
    }

    /// Sets the class nickname and description.
    #[must_use]
    pub fn described(mut self, nickname: &str, description: &str) -> Self {
        self.nickname = nickname.to_owned();
        self.description = description.to_owned();
        self
    }

    /// Marks the type abstract.
    #[must_use]
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Returns true if this type is `name` or descends from it.
    #[must_use]
    pub fn is_a(&self, name: &str) -> bool {
        self.name == name || self.lineage.iter().any(|a| a == name)
    }

    /// The type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class description, empty for unclassed types.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The direct parent type name, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.lineage.first().map(String::as_str)
    }

    /// The image handle type.
    #[must_use]
    pub fn image() -> Self {
        Self::derived(types::VIPS_IMAGE, &[types::VIPS_OBJECT, types::G_OBJECT])
            .described("image", "image class")
    }

    /// A classed object type below the registry object root.
    #[must_use]
    pub fn object(name: &str, nickname: &str, description: &str) -> Self {
        Self::derived(name, &[types::VIPS_OBJECT, types::G_OBJECT]).described(nickname, description)
    }

    /// A boxed value type.
    #[must_use]
    pub fn boxed(name: &str) -> Self {
        Self::derived(name, &[types::G_BOXED])
    }

    /// An enumerated type.
    #[must_use]
    pub fn enumeration(name: &str) -> Self {
        Self::derived(name, &[types::G_ENUM])
    }

    /// A bitmask type.
    #[must_use]
    pub fn flags(name: &str) -> Self {
        Self::derived(name, &[types::G_FLAGS])
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_true(b: &bool) -> bool {
    *b
}

fn default_true() -> bool {
    true
}

/// One row of an enum or flags value table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumValue {
    /// Integer value.
    pub value: i64,
    /// Short nickname (e.g. `"mirror"`).
    pub nick: String,
    /// Full symbolic name (e.g. `"VIPS_EXTEND_MIRROR"`).
    pub name: String,
}

impl EnumValue {
    /// Creates a value-table row.
    #[must_use]
    pub fn new(value: i64, nick: &str, name: &str) -> Self {
        Self {
            value,
            nick: nick.to_owned(),
            name: name.to_owned(),
        }
    }
}

/// The representation class of a parameter descriptor.
///
/// Scalar kinds carry their bounds and defaults; enum and flags kinds carry
/// the complete value table in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamKind {
    /// Boolean with a default.
    Boolean {
        /// Default value.
        default: bool,
    },
    /// Signed integer range.
    Int {
        /// Smallest legal value.
        minimum: i64,
        /// Largest legal value.
        maximum: i64,
        /// Default value.
        default: i64,
    },
    /// Unsigned 64-bit integer range.
    #[serde(rename = "uint64")]
    UInt64 {
        /// Smallest legal value.
        minimum: u64,
        /// Largest legal value.
        maximum: u64,
        /// Default value.
        default: u64,
    },
    /// Double-precision range.
    Double {
        /// Smallest legal value.
        minimum: f64,
        /// Largest legal value.
        maximum: f64,
        /// Default value.
        default: f64,
    },
    /// Exclusive choice from a value table.
    Enum {
        /// Legal values in declaration order.
        values: Vec<EnumValue>,
        /// Default integer value.
        default: i64,
    },
    /// Bitwise-combinable choice from a value table.
    Flags {
        /// Legal values in declaration order.
        values: Vec<EnumValue>,
        /// Default integer value.
        default: i64,
    },
    /// String with an optional default.
    String {
        /// Default value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    /// Boxed composite value (arrays, blobs).
    Boxed,
    /// Object reference.
    Object,
    /// Untyped pointer.
    Pointer,
}

/// Descriptor of one named parameter of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name, unique within its operation.
    pub name: String,
    /// Short human label.
    pub nick: String,
    /// Human-readable description.
    pub blurb: String,
    /// Type name of the class that declared this parameter.
    pub owner: String,
    /// Declared value type.
    pub value_type: TypeHandle,
    /// Representation class with its category-specific payload.
    #[serde(flatten)]
    pub kind: ParamKind,
}

/// Role flags of one argument within its operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentFlags {
    /// Must be set before the operation can build.
    pub required: bool,
    /// Consumed at construction time.
    pub construct: bool,
    /// May only be set once.
    pub set_once: bool,
    /// An input of the operation.
    pub input: bool,
    /// An output of the operation.
    pub output: bool,
    /// Kept for compatibility only.
    pub deprecated: bool,
}

impl ArgumentFlags {
    /// Required construction input.
    pub const REQUIRED_INPUT: Self = Self {
        required: true,
        construct: true,
        set_once: false,
        input: true,
        output: false,
        deprecated: false,
    };

    /// Optional construction input.
    pub const OPTIONAL_INPUT: Self = Self {
        required: false,
        ..Self::REQUIRED_INPUT
    };

    /// Required construction output.
    pub const REQUIRED_OUTPUT: Self = Self {
        required: true,
        construct: true,
        set_once: false,
        input: false,
        output: true,
        deprecated: false,
    };

    /// Optional construction output.
    pub const OPTIONAL_OUTPUT: Self = Self {
        required: false,
        ..Self::REQUIRED_OUTPUT
    };

    /// Set-once object property that is not a construction argument.
    pub const SET_ONCE: Self = Self {
        required: false,
        construct: false,
        set_once: true,
        input: true,
        output: false,
        deprecated: false,
    };

    /// Returns these flags with the deprecated bit set.
    #[must_use]
    pub const fn deprecated(self) -> Self {
        Self {
            deprecated: true,
            ..self
        }
    }
}

/// One declared argument: the descriptor plus its role in the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// The parameter descriptor.
    pub spec: ParamSpec,
    /// Role flags.
    pub flags: ArgumentFlags,
    /// Ordering key; arguments are visited in ascending priority.
    #[serde(default)]
    pub priority: i32,
}

impl Argument {
    /// Returns the argument with the deprecated flag set.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.flags = self.flags.deprecated();
        self
    }

    /// The argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

/// Class-level operation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationFlags {
    /// Reads its input top-to-bottom.
    #[serde(skip_serializing_if = "is_false")]
    pub sequential: bool,
    /// Results must not be cached.
    #[serde(skip_serializing_if = "is_false")]
    pub nocache: bool,
    /// Superseded; hidden from listings.
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Unsafe on untrusted input.
    #[serde(skip_serializing_if = "is_false")]
    pub untrusted: bool,
}

impl OperationFlags {
    /// No flags set.
    pub const NONE: Self = Self {
        sequential: false,
        nocache: false,
        deprecated: false,
        untrusted: false,
    };

    /// Only the sequential flag set.
    pub const SEQUENTIAL: Self = Self {
        sequential: true,
        ..Self::NONE
    };

    /// Only the deprecated flag set.
    pub const DEPRECATED: Self = Self {
        deprecated: true,
        ..Self::NONE
    };

    /// Only the untrusted flag set.
    pub const UNTRUSTED: Self = Self {
        untrusted: true,
        ..Self::NONE
    };
}

/// A registered operation type with the arguments it declares itself.
///
/// Inherited arguments are not repeated here; the registry collects them
/// along the ancestry when an instance is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationClass {
    /// The operation type.
    #[serde(rename = "type")]
    pub ty: TypeHandle,
    /// Class flags.
    #[serde(default)]
    pub flags: OperationFlags,
    /// Whether the registry can construct instances of this type.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub instantiable: bool,
    /// Arguments declared by this class, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

impl OperationClass {
    /// Creates a concrete operation class below `lineage`.
    #[must_use]
    pub fn new(name: &str, lineage: &[&str], nickname: &str, description: &str) -> Self {
        Self {
            ty: TypeHandle::derived(name, lineage).described(nickname, description),
            flags: OperationFlags::NONE,
            instantiable: true,
            arguments: Vec::new(),
        }
    }

    /// Creates an abstract operation class below `lineage`.
    #[must_use]
    pub fn abstract_class(name: &str, lineage: &[&str], nickname: &str, description: &str) -> Self {
        let mut class = Self::new(name, lineage, nickname, description);
        class.ty.is_abstract = true;
        class
    }

    /// Sets the class flags.
    #[must_use]
    pub fn with_flags(mut self, flags: OperationFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the declared arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Marks the class as impossible to construct.
    #[must_use]
    pub fn not_instantiable(mut self) -> Self {
        self.instantiable = false;
        self
    }

    /// The operation type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.ty.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_a_checks_self_and_ancestors() {
        let image = TypeHandle::image();
        assert!(image.is_a(types::VIPS_IMAGE));
        assert!(image.is_a(types::VIPS_OBJECT));
        assert!(image.is_a(types::G_OBJECT));
        assert!(!image.is_a(types::G_BOXED));
        assert_eq!(image.parent(), Some(types::VIPS_OBJECT));
    }

    #[test]
    fn fundamental_has_no_parent() {
        let s = TypeHandle::fundamental(types::G_STRING);
        assert!(s.lineage.is_empty());
        assert_eq!(s.parent(), None);
        assert!(s.is_a(types::G_STRING));
    }

    #[test]
    fn flag_presets() {
        assert!(ArgumentFlags::REQUIRED_INPUT.required);
        assert!(ArgumentFlags::REQUIRED_INPUT.input);
        assert!(!ArgumentFlags::OPTIONAL_INPUT.required);
        assert!(ArgumentFlags::OPTIONAL_OUTPUT.output);
        assert!(!ArgumentFlags::OPTIONAL_OUTPUT.input);
        assert!(!ArgumentFlags::SET_ONCE.construct);
        assert!(ArgumentFlags::REQUIRED_INPUT.deprecated().deprecated);
    }

    #[test]
    fn abstract_class_marks_type() {
        let class = OperationClass::abstract_class(
            "VipsUnary",
            &[types::VIPS_OPERATION],
            "unary",
            "unary operations",
        );
        assert!(class.ty.is_abstract);
        assert!(class.instantiable);
        assert_eq!(class.ty.parent(), Some(types::VIPS_OPERATION));
    }
}
