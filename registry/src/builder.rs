//! Fluent construction of [`Argument`] values.
//!
//! ```
//! use vips_registry::builder::arg;
//!
//! let width = arg("VipsEmbed", "width", "Width", "Image width in pixels")
//!     .int(1, 10_000_000, 1)
//!     .required_input(5);
//! assert!(width.flags.required);
//! assert_eq!(width.spec.owner, "VipsEmbed");
//! ```

use crate::model::{
    types, Argument, ArgumentFlags, EnumValue, ParamKind, ParamSpec, TypeHandle,
};

/// Starts an argument declared by `owner`.
#[must_use]
pub fn arg(owner: &str, name: &str, nick: &str, blurb: &str) -> ArgBuilder {
    ArgBuilder {
        owner: owner.to_owned(),
        name: name.to_owned(),
        nick: nick.to_owned(),
        blurb: blurb.to_owned(),
    }
}

/// An argument whose name and documentation are known but not its type.
#[derive(Debug, Clone)]
pub struct ArgBuilder {
    owner: String,
    name: String,
    nick: String,
    blurb: String,
}

impl ArgBuilder {
    /// Finishes the descriptor with an explicit value type and kind.
    #[must_use]
    pub fn typed(self, value_type: TypeHandle, kind: ParamKind) -> TypedArg {
        TypedArg {
            spec: ParamSpec {
                name: self.name,
                nick: self.nick,
                blurb: self.blurb,
                owner: self.owner,
                value_type,
                kind,
            },
        }
    }

    /// Image handle.
    #[must_use]
    pub fn image(self) -> TypedArg {
        self.typed(TypeHandle::image(), ParamKind::Object)
    }

    /// Reference to a classed object type.
    #[must_use]
    pub fn object(self, value_type: TypeHandle) -> TypedArg {
        self.typed(value_type, ParamKind::Object)
    }

    /// Boolean.
    #[must_use]
    pub fn boolean(self, default: bool) -> TypedArg {
        self.typed(
            TypeHandle::fundamental(types::G_BOOLEAN),
            ParamKind::Boolean { default },
        )
    }

    /// Signed integer range.
    #[must_use]
    pub fn int(self, minimum: i64, maximum: i64, default: i64) -> TypedArg {
        self.typed(
            TypeHandle::fundamental(types::G_INT),
            ParamKind::Int {
                minimum,
                maximum,
                default,
            },
        )
    }

    /// Unsigned 64-bit range.
    #[must_use]
    pub fn uint64(self, minimum: u64, maximum: u64, default: u64) -> TypedArg {
        self.typed(
            TypeHandle::fundamental(types::G_UINT64),
            ParamKind::UInt64 {
                minimum,
                maximum,
                default,
            },
        )
    }

    /// Double range.
    #[must_use]
    pub fn double(self, minimum: f64, maximum: f64, default: f64) -> TypedArg {
        self.typed(
            TypeHandle::fundamental(types::G_DOUBLE),
            ParamKind::Double {
                minimum,
                maximum,
                default,
            },
        )
    }

    /// Enumerated choice of type `type_name`.
    #[must_use]
    pub fn enumeration(self, type_name: &str, values: Vec<EnumValue>, default: i64) -> TypedArg {
        self.typed(
            TypeHandle::enumeration(type_name),
            ParamKind::Enum { values, default },
        )
    }

    /// Bitmask of type `type_name`.
    #[must_use]
    pub fn flags(self, type_name: &str, values: Vec<EnumValue>, default: i64) -> TypedArg {
        self.typed(
            TypeHandle::flags(type_name),
            ParamKind::Flags { values, default },
        )
    }

    /// String with an optional default.
    #[must_use]
    pub fn string(self, default: Option<&str>) -> TypedArg {
        self.typed(
            TypeHandle::fundamental(types::G_STRING),
            ParamKind::String {
                default: default.map(str::to_owned),
            },
        )
    }

    /// Boxed value of type `type_name`.
    #[must_use]
    pub fn boxed(self, type_name: &str) -> TypedArg {
        self.typed(TypeHandle::boxed(type_name), ParamKind::Boxed)
    }

    /// Array of integers.
    #[must_use]
    pub fn array_int(self) -> TypedArg {
        self.boxed(types::VIPS_ARRAY_INT)
    }

    /// Array of doubles.
    #[must_use]
    pub fn array_double(self) -> TypedArg {
        self.boxed(types::VIPS_ARRAY_DOUBLE)
    }

    /// Array of images.
    #[must_use]
    pub fn array_image(self) -> TypedArg {
        self.boxed(types::VIPS_ARRAY_IMAGE)
    }

    /// Binary large object.
    #[must_use]
    pub fn blob(self) -> TypedArg {
        self.boxed(types::VIPS_BLOB)
    }
}

/// A finished descriptor waiting for its role.
#[derive(Debug, Clone)]
pub struct TypedArg {
    spec: ParamSpec,
}

impl TypedArg {
    /// Attaches role flags and a priority.
    #[must_use]
    pub fn with_flags(self, flags: ArgumentFlags, priority: i32) -> Argument {
        Argument {
            spec: self.spec,
            flags,
            priority,
        }
    }

    /// Required construction input.
    #[must_use]
    pub fn required_input(self, priority: i32) -> Argument {
        self.with_flags(ArgumentFlags::REQUIRED_INPUT, priority)
    }

    /// Optional construction input.
    #[must_use]
    pub fn optional_input(self, priority: i32) -> Argument {
        self.with_flags(ArgumentFlags::OPTIONAL_INPUT, priority)
    }

    /// Required construction output.
    #[must_use]
    pub fn required_output(self, priority: i32) -> Argument {
        self.with_flags(ArgumentFlags::REQUIRED_OUTPUT, priority)
    }

    /// Optional construction output.
    #[must_use]
    pub fn optional_output(self, priority: i32) -> Argument {
        self.with_flags(ArgumentFlags::OPTIONAL_OUTPUT, priority)
    }

    /// The descriptor without any role attached.
    #[must_use]
    pub fn into_spec(self) -> ParamSpec {
        self.spec
    }
}

/// Builds a value table for an enum or flags type.
///
/// Symbolic names are `prefix` followed by the upper-cased nickname with
/// dashes turned into underscores, the way the host's enum generator
/// spells them.
///
/// ```
/// use vips_registry::builder::value_table;
///
/// let table = value_table("VIPS_ACCESS", &[(0, "random"), (2, "sequential-unbuffered")]);
/// assert_eq!(table[1].name, "VIPS_ACCESS_SEQUENTIAL_UNBUFFERED");
/// ```
#[must_use]
pub fn value_table(prefix: &str, entries: &[(i64, &str)]) -> Vec<EnumValue> {
    entries
        .iter()
        .map(|(value, nick)| {
            let symbol = nick.to_uppercase().replace('-', "_");
            EnumValue::new(*value, nick, &format!("{prefix}_{symbol}"))
        })
        .collect()
}
