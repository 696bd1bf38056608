//! Line rendering of classified parameters.
//!
//! This is the only place that decides how a category looks in a report.

use crate::classify::{TypeCategory, ValueTable};

/// Magnitudes in `[DECIMAL_MIN, DECIMAL_MAX)` render in plain decimal.
const DECIMAL_MIN: f64 = 1e-5;
const DECIMAL_MAX: f64 = 1e16;

impl TypeCategory {
    /// The category-specific lines of a `PARAM:` block.
    ///
    /// ```
    /// use vips_introspect::TypeCategory;
    ///
    /// let d = TypeCategory::Double { minimum: -1.0, maximum: 1.0, default: 0.5 };
    /// assert_eq!(d.lines(), ["double:-1:1:0.5"]);
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Image => vec!["VipsImage".to_owned()],
            Self::Object {
                type_name,
                description,
            } => vec![format!("{type_name}-{description}")],
            Self::Bool { default } => vec![format!("bool:{}", u8::from(*default))],
            Self::Int {
                minimum,
                maximum,
                default,
            } => vec![format!("int:{minimum}:{maximum}:{default}")],
            Self::UInt64 {
                minimum,
                maximum,
                default,
            } => vec![format!("uint64:{minimum}:{maximum}:{default}")],
            Self::Double {
                minimum,
                maximum,
                default,
            } => vec![format!(
                "double:{}:{}:{}",
                format_double(*minimum),
                format_double(*maximum),
                format_double(*default)
            )],
            Self::Enum(table) => table_lines("enum", table),
            Self::ArrayInt => vec!["array of int".to_owned()],
            Self::ArrayDouble => vec!["array of double".to_owned()],
            Self::ArrayImage => vec!["array of images".to_owned()],
            Self::ProfileBlob => vec!["VipsBlob".to_owned()],
            Self::ByteData => vec!["byte-data".to_owned()],
            Self::String => vec!["string".to_owned()],
            Self::Flags(table) => table_lines("flags", table),
        }
    }
}

fn table_lines(tag: &str, table: &ValueTable) -> Vec<String> {
    let mut out = Vec::with_capacity(table.values.len() + 2);
    out.push(format!("{tag}-{}", table.type_name));
    out.extend(
        table
            .values
            .iter()
            .map(|v| format!("{}:{}:{}", v.value, v.nick, v.name)),
    );
    out.push(table.default.to_string());
    out
}

/// Formats a double in general notation.
///
/// Output is the shortest text that parses back to the same value, with
/// no padding: `1.0` is `"1"`, `1e20` is `"1e20"`.
///
/// ```
/// use vips_introspect::render::format_double;
///
/// assert_eq!(format_double(0.5), "0.5");
/// assert_eq!(format_double(-1.0), "-1");
/// assert_eq!(format_double(f64::MAX), "1.7976931348623157e308");
/// assert_eq!(format_double(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    let magnitude = value.abs();
    if value == 0.0 || (DECIMAL_MIN..DECIMAL_MAX).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vips_registry::EnumValue;

    #[test]
    fn scalar_lines() {
        assert_eq!(TypeCategory::Bool { default: true }.lines(), ["bool:1"]);
        assert_eq!(TypeCategory::Bool { default: false }.lines(), ["bool:0"]);
        assert_eq!(
            TypeCategory::Int {
                minimum: 0,
                maximum: 100,
                default: 10
            }
            .lines(),
            ["int:0:100:10"]
        );
        assert_eq!(
            TypeCategory::UInt64 {
                minimum: 0,
                maximum: u64::MAX,
                default: 0
            }
            .lines(),
            ["uint64:0:18446744073709551615:0"]
        );
    }

    #[test]
    fn fixed_keywords() {
        assert_eq!(TypeCategory::Image.lines(), ["VipsImage"]);
        assert_eq!(TypeCategory::ArrayInt.lines(), ["array of int"]);
        assert_eq!(TypeCategory::ArrayDouble.lines(), ["array of double"]);
        assert_eq!(TypeCategory::ArrayImage.lines(), ["array of images"]);
        assert_eq!(TypeCategory::ProfileBlob.lines(), ["VipsBlob"]);
        assert_eq!(TypeCategory::ByteData.lines(), ["byte-data"]);
        assert_eq!(TypeCategory::String.lines(), ["string"]);
    }

    #[test]
    fn object_line_joins_with_dash() {
        let object = TypeCategory::Object {
            type_name: "VipsInterpolate".to_owned(),
            description: "VIPS interpolators".to_owned(),
        };
        assert_eq!(object.lines(), ["VipsInterpolate-VIPS interpolators"]);
    }

    #[test]
    fn table_has_header_rows_and_default() {
        let table = ValueTable {
            type_name: "VipsDirection".to_owned(),
            values: vec![
                EnumValue::new(0, "horizontal", "VIPS_DIRECTION_HORIZONTAL"),
                EnumValue::new(1, "vertical", "VIPS_DIRECTION_VERTICAL"),
            ],
            default: 0,
        };
        assert_eq!(
            TypeCategory::Enum(table.clone()).lines(),
            [
                "enum-VipsDirection",
                "0:horizontal:VIPS_DIRECTION_HORIZONTAL",
                "1:vertical:VIPS_DIRECTION_VERTICAL",
                "0"
            ]
        );
        assert_eq!(TypeCategory::Flags(table).lines()[0], "flags-VipsDirection");
    }

    #[test]
    fn general_double_format() {
        assert_eq!(format_double(0.0), "0");
        assert_eq!(format_double(1.0), "1");
        assert_eq!(format_double(10_000_000.0), "10000000");
        assert_eq!(format_double(0.001), "0.001");
        assert_eq!(format_double(1e-6), "1e-6");
        assert_eq!(format_double(1e16), "1e16");
        assert_eq!(format_double(-f64::MAX), "-1.7976931348623157e308");
        assert_eq!(format_double(f64::INFINITY), "inf");
        assert_eq!(format_double(f64::NAN), "nan");
    }
}
