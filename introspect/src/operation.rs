//! The operation reporter.

use serde::Serialize;
use vips_registry::{OperationRegistry, TypeHandle};

use crate::error::ClassifyError;
use crate::param::{report_parameter, ParameterRecord};

/// The report of one operation type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    /// Class nickname.
    pub nickname: String,
    /// Operation type name.
    pub type_name: String,
    /// Structural summary, one entry per line.
    pub summary: Vec<String>,
    /// Required parameters in declared order.
    pub required: Vec<ParameterRecord>,
    /// Optional parameters in declared order.
    pub optional: Vec<ParameterRecord>,
}

impl OperationRecord {
    /// Starts an empty record for `ty`.
    #[must_use]
    pub fn new(ty: &TypeHandle, summary: &str) -> Self {
        Self {
            nickname: ty.nickname.clone(),
            type_name: ty.name.clone(),
            summary: summary.lines().map(str::to_owned).collect(),
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    /// The `OPERATION:` block of this record.
    ///
    /// ```text
    /// OPERATION:
    /// <nickname>:<type name>
    /// <summary lines>
    /// REQUIRED:
    /// <PARAM: blocks>
    /// OPTIONAL:
    /// <PARAM: blocks>
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            "OPERATION:".to_owned(),
            format!("{}:{}", self.nickname, self.type_name),
        ];
        out.extend(self.summary.iter().cloned());
        out.push("REQUIRED:".to_owned());
        out.extend(self.required.iter().flat_map(ParameterRecord::lines));
        out.push("OPTIONAL:".to_owned());
        out.extend(self.optional.iter().flat_map(ParameterRecord::lines));
        out
    }

    /// Names of every reported parameter, required first.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .chain(&self.optional)
            .map(|p| p.name.as_str())
    }
}

/// Reports one instantiated operation.
///
/// Declared parameters are visited twice in the registry's order: required
/// ones first, then optional ones.
///
/// # Errors
///
/// Returns the first classifier error met.
pub fn report_operation<R: OperationRegistry>(
    registry: &R,
    ty: &TypeHandle,
    handle: &R::Handle,
) -> Result<OperationRecord, ClassifyError> {
    let mut record = OperationRecord::new(ty, &registry.class_summary(ty));
    let arguments = registry.declared_parameters(handle);
    for argument in arguments.iter().filter(|a| a.flags.required) {
        report_parameter(argument, &mut record)?;
    }
    for argument in arguments.iter().filter(|a| !a.flags.required) {
        report_parameter(argument, &mut record)?;
    }
    Ok(record)
}
