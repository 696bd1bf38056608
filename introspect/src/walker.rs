//! The registry walker.
//!
//! Visits every type below a root in the registry's order, skips abstract
//! and deprecated operations, and reports the rest. The first error ends
//! the walk.

use serde::Serialize;
use tracing::{debug, error, info};
use vips_registry::{OperationRegistry, TypeHandle};

use crate::error::Error;
use crate::operation::{report_operation, OperationRecord};

/// Every record of one walk, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// One record per reported operation.
    pub operations: Vec<OperationRecord>,
}

impl Report {
    /// All report lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.operations
            .iter()
            .flat_map(OperationRecord::lines)
            .collect()
    }

    /// The report as newline-terminated text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in self.lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }

    /// Looks up a record by operation type name.
    #[must_use]
    pub fn find(&self, type_name: &str) -> Option<&OperationRecord> {
        self.operations.iter().find(|r| r.type_name == type_name)
    }
}

/// Counters of one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Types enumerated below the root, the root included.
    pub visited: usize,
    /// Abstract types passed over.
    pub abstract_skipped: usize,
    /// Deprecated operations passed over.
    pub deprecated_skipped: usize,
    /// Records produced.
    pub reported: usize,
}

/// Runs `f` on a fresh instance of `ty` and releases the instance on every
/// path out.
///
/// # Errors
///
/// Returns [`Error::InstantiationFailure`] if the registry cannot construct
/// `ty`, otherwise whatever `f` returns.
pub fn with_instance<R, T, F>(registry: &R, ty: &TypeHandle, f: F) -> Result<T, Error>
where
    R: OperationRegistry,
    F: FnOnce(&R::Handle) -> Result<T, Error>,
{
    let handle = registry
        .instantiate(ty)
        .map_err(|source| Error::InstantiationFailure {
            type_name: ty.name.clone(),
            source,
        })?;
    let result = f(&handle);
    registry.release(handle);
    result
}

/// Walks an open registry from `root`, handing each record to `on_record`
/// as soon as it is built.
///
/// # Errors
///
/// Returns [`Error::RegistryInitFailure`] if the types below `root` cannot
/// be enumerated, and otherwise the first error raised while reporting an
/// operation or by `on_record`.
pub fn walk_each<R, F>(registry: &R, root: &str, mut on_record: F) -> Result<WalkStats, Error>
where
    R: OperationRegistry,
    F: FnMut(OperationRecord) -> Result<(), Error>,
{
    info!(root, "walk started");
    let result = visit_all(registry, root, &mut on_record);
    match &result {
        Ok(stats) => info!(
            visited = stats.visited,
            reported = stats.reported,
            abstract_skipped = stats.abstract_skipped,
            deprecated_skipped = stats.deprecated_skipped,
            "walk finished"
        ),
        Err(err) => error!(error = %err, "walk aborted"),
    }
    result
}

fn visit_all<R, F>(registry: &R, root: &str, on_record: &mut F) -> Result<WalkStats, Error>
where
    R: OperationRegistry,
    F: FnMut(OperationRecord) -> Result<(), Error>,
{
    let types = registry
        .enumerate_types(root)
        .map_err(Error::RegistryInitFailure)?;
    let mut stats = WalkStats {
        visited: types.len(),
        ..WalkStats::default()
    };

    for ty in &types {
        if registry.is_abstract(ty) {
            debug!(operation = %ty.name, "abstract type skipped");
            stats.abstract_skipped += 1;
            continue;
        }
        let record = with_instance(registry, ty, |handle| {
            if registry.flags(handle).deprecated {
                return Ok(None);
            }
            Ok(Some(report_operation(registry, ty, handle)?))
        })?;
        match record {
            Some(record) => {
                on_record(record)?;
                stats.reported += 1;
            }
            None => {
                debug!(operation = %ty.name, "deprecated operation skipped");
                stats.deprecated_skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// Walks an open registry from `root` and collects the records.
///
/// # Errors
///
/// See [`walk_each`].
pub fn walk<R: OperationRegistry>(registry: &R, root: &str) -> Result<Report, Error> {
    let mut report = Report::default();
    walk_each(registry, root, |record| {
        report.operations.push(record);
        Ok(())
    })?;
    Ok(report)
}

/// Opens `registry`, walks it from `root` and closes it again, whether or
/// not the walk succeeded.
///
/// # Errors
///
/// Returns [`Error::RegistryInitFailure`] if the registry cannot be opened
/// and otherwise the errors of [`walk_each`].
pub fn run<R, F>(registry: &mut R, root: &str, on_record: F) -> Result<WalkStats, Error>
where
    R: OperationRegistry,
    F: FnMut(OperationRecord) -> Result<(), Error>,
{
    registry.open().map_err(Error::RegistryInitFailure)?;
    let result = walk_each(&*registry, root, on_record);
    registry.close();
    result
}
