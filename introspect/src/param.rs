//! The parameter reporter.
//!
//! The output marker is written on a line of its own, ahead of the name.
//! [`crate::parse`] still reads the older glued form `OUTPUT:name`.

use serde::Serialize;
use tracing::debug;
use vips_registry::model::{Argument, ArgumentFlags};

use crate::classify::{classify, TypeCategory};
use crate::error::ClassifyError;
use crate::operation::OperationRecord;

/// One reported parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRecord {
    /// Parameter name.
    pub name: String,
    /// Short human label.
    pub nick: String,
    /// Human-readable description.
    pub description: String,
    /// True when the parameter is not an input.
    pub output: bool,
    /// The classified value category.
    pub category: TypeCategory,
}

impl ParameterRecord {
    /// Classifies an argument into a record without regard to its flags.
    ///
    /// # Errors
    ///
    /// Returns the classifier's error unchanged.
    pub fn from_argument(argument: &Argument) -> Result<Self, ClassifyError> {
        let spec = &argument.spec;
        Ok(Self {
            name: spec.name.clone(),
            nick: spec.nick.clone(),
            description: spec.blurb.clone(),
            output: !argument.flags.input,
            category: classify(spec)?,
        })
    }

    /// The `PARAM:` block of this parameter.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec!["PARAM:".to_owned()];
        if self.output {
            out.push("OUTPUT:".to_owned());
        }
        out.push(self.name.clone());
        out.push(self.nick.clone());
        out.push(self.description.clone());
        out.extend(self.category.lines());
        out
    }
}

/// Whether an argument with these flags appears in a report at all.
#[must_use]
pub fn is_reportable(flags: ArgumentFlags) -> bool {
    flags.construct && !flags.deprecated
}

/// Reports one argument into `record`.
///
/// Deprecated and non-construction arguments are skipped. Others land in
/// the required or optional group according to their flags.
///
/// # Errors
///
/// Returns the classifier's error unchanged.
pub fn report_parameter(
    argument: &Argument,
    record: &mut OperationRecord,
) -> Result<(), ClassifyError> {
    if !is_reportable(argument.flags) {
        debug!(
            operation = %record.type_name,
            param = argument.name(),
            deprecated = argument.flags.deprecated,
            construct = argument.flags.construct,
            "parameter skipped"
        );
        return Ok(());
    }
    let param = ParameterRecord::from_argument(argument)?;
    if argument.flags.required {
        record.required.push(param);
    } else {
        record.optional.push(param);
    }
    Ok(())
}
