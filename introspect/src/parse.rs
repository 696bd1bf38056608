//! Reads report text back into records.
//!
//! Binding generators consume the line report; this is the reading side of
//! the same grammar. Both spellings of the output marker are accepted: a
//! line of its own, and the older form glued to the parameter name
//! (`OUTPUT:out`).

use vips_registry::EnumValue;

use crate::classify::{TypeCategory, ValueTable};
use crate::operation::OperationRecord;
use crate::param::ParameterRecord;

const OPERATION: &str = "OPERATION:";
const REQUIRED: &str = "REQUIRED:";
const OPTIONAL: &str = "OPTIONAL:";
const PARAM: &str = "PARAM:";
const OUTPUT: &str = "OUTPUT:";

/// A report that does not follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// One-based line number, or one past the end for truncated input.
    pub line: usize,
    /// What was wrong.
    pub message: String,
}

/// Parses a complete report.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first line that breaks the grammar.
///
/// ```
/// use vips_introspect::parse::parse_report;
///
/// let text = "OPERATION:\ninvert:VipsInvert\nVipsInvert (invert)\nREQUIRED:\nOPTIONAL:\n";
/// let records = parse_report(text).unwrap();
/// assert_eq!(records[0].type_name, "VipsInvert");
/// ```
pub fn parse_report(text: &str) -> Result<Vec<OperationRecord>, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut records = Vec::new();
    while cursor.peek().is_some() {
        records.push(operation(&mut cursor)?);
    }
    Ok(records)
}

struct Cursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self, what: &str) -> Result<&'a str, ParseError> {
        let line = self
            .peek()
            .ok_or_else(|| self.error(format!("unexpected end of report, expected {what}")))?;
        self.pos += 1;
        Ok(line)
    }

    fn keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        let line = self.advance(keyword)?;
        if line == keyword {
            Ok(())
        } else {
            Err(self.error_here(format!("expected {keyword}, found '{line}'")))
        }
    }

    // Error at the line just consumed.
    fn error_here(&self, message: String) -> ParseError {
        ParseError {
            line: self.pos,
            message,
        }
    }

    // Error at the line about to be consumed.
    fn error(&self, message: String) -> ParseError {
        ParseError {
            line: self.pos + 1,
            message,
        }
    }
}

fn operation(cursor: &mut Cursor<'_>) -> Result<OperationRecord, ParseError> {
    cursor.keyword(OPERATION)?;
    let header = cursor.advance("nickname:type")?;
    let (nickname, type_name) = header
        .split_once(':')
        .ok_or_else(|| cursor.error_here(format!("expected nickname:type, found '{header}'")))?;

    let mut summary = Vec::new();
    loop {
        let line = cursor.advance(REQUIRED)?;
        if line == REQUIRED {
            break;
        }
        summary.push(line.to_owned());
    }
    if summary.is_empty() {
        return Err(cursor.error_here("missing class summary".to_owned()));
    }

    let required = params(cursor)?;
    cursor.keyword(OPTIONAL)?;
    let optional = params(cursor)?;

    Ok(OperationRecord {
        nickname: nickname.to_owned(),
        type_name: type_name.to_owned(),
        summary,
        required,
        optional,
    })
}

fn params(cursor: &mut Cursor<'_>) -> Result<Vec<ParameterRecord>, ParseError> {
    let mut out = Vec::new();
    while cursor.peek() == Some(PARAM) {
        cursor.pos += 1;
        out.push(param(cursor)?);
    }
    Ok(out)
}

fn param(cursor: &mut Cursor<'_>) -> Result<ParameterRecord, ParseError> {
    let first = cursor.advance("parameter name")?;
    let (output, name) = if first == OUTPUT {
        (true, cursor.advance("parameter name")?)
    } else if let Some(glued) = first.strip_prefix(OUTPUT) {
        (true, glued)
    } else {
        (false, first)
    };
    let nick = cursor.advance("parameter nickname")?;
    let description = cursor.advance("parameter description")?;
    let category = category(cursor)?;
    Ok(ParameterRecord {
        name: name.to_owned(),
        nick: nick.to_owned(),
        description: description.to_owned(),
        output,
        category,
    })
}

fn category(cursor: &mut Cursor<'_>) -> Result<TypeCategory, ParseError> {
    let line = cursor.advance("parameter category")?;
    let fixed = match line {
        "VipsImage" => Some(TypeCategory::Image),
        "array of int" => Some(TypeCategory::ArrayInt),
        "array of double" => Some(TypeCategory::ArrayDouble),
        "array of images" => Some(TypeCategory::ArrayImage),
        "VipsBlob" => Some(TypeCategory::ProfileBlob),
        "byte-data" => Some(TypeCategory::ByteData),
        "string" => Some(TypeCategory::String),
        _ => None,
    };
    if let Some(category) = fixed {
        return Ok(category);
    }
    if let Some(type_name) = line.strip_prefix("enum-") {
        return Ok(TypeCategory::Enum(table(cursor, type_name)?));
    }
    if let Some(type_name) = line.strip_prefix("flags-") {
        return Ok(TypeCategory::Flags(table(cursor, type_name)?));
    }
    if let Some(rest) = line.strip_prefix("bool:") {
        return match rest {
            "0" => Ok(TypeCategory::Bool { default: false }),
            "1" => Ok(TypeCategory::Bool { default: true }),
            _ => Err(cursor.error_here(format!("bad boolean default '{rest}'"))),
        };
    }
    if let Some(rest) = line.strip_prefix("int:") {
        let [minimum, maximum, default] = triple(cursor, rest)?;
        return Ok(TypeCategory::Int {
            minimum,
            maximum,
            default,
        });
    }
    if let Some(rest) = line.strip_prefix("uint64:") {
        let [minimum, maximum, default] = triple(cursor, rest)?;
        return Ok(TypeCategory::UInt64 {
            minimum,
            maximum,
            default,
        });
    }
    if let Some(rest) = line.strip_prefix("double:") {
        let [minimum, maximum, default] = triple(cursor, rest)?;
        return Ok(TypeCategory::Double {
            minimum,
            maximum,
            default,
        });
    }
    match line.split_once('-') {
        Some((type_name, description)) if !type_name.is_empty() => Ok(TypeCategory::Object {
            type_name: type_name.to_owned(),
            description: description.to_owned(),
        }),
        _ => Err(cursor.error_here(format!("unrecognised category '{line}'"))),
    }
}

fn triple<T: std::str::FromStr>(cursor: &Cursor<'_>, text: &str) -> Result<[T; 3], ParseError> {
    let mut fields = text.split(':').map(str::parse::<T>);
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(Ok(a)), Some(Ok(b)), Some(Ok(c)), None) => Ok([a, b, c]),
        _ => Err(cursor.error_here(format!("expected min:max:default, found '{text}'"))),
    }
}

fn table(cursor: &mut Cursor<'_>, type_name: &str) -> Result<ValueTable, ParseError> {
    let mut values = Vec::new();
    loop {
        let line = cursor.advance("value row or default")?;
        if let Ok(default) = line.parse::<i64>() {
            return Ok(ValueTable {
                type_name: type_name.to_owned(),
                values,
                default,
            });
        }
        let mut fields = line.splitn(3, ':');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(value), Some(nick), Some(name)) => {
                let value = value
                    .parse::<i64>()
                    .map_err(|_| cursor.error_here(format!("bad value in row '{line}'")))?;
                values.push(EnumValue::new(value, nick, name));
            }
            _ => return Err(cursor.error_here(format!("expected value:nick:name, found '{line}'"))),
        }
    }
}
