//! JSON snapshots of a [`Catalog`].
//!
//! A snapshot describes a registry other than the built-in one. Optional
//! fields may be omitted: flags default to unset, `instantiable` to true,
//! argument priorities to zero.
//!
//! Double bounds must be finite; JSON has no spelling for infinities.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::registry::RegistryError;

/// Decodes a snapshot from a JSON string.
///
/// # Errors
///
/// Returns [`RegistryError::Json`] if the text is not a valid snapshot.
pub fn from_str(json: &str) -> Result<Catalog, RegistryError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a snapshot file.
///
/// # Errors
///
/// Returns [`RegistryError::Io`] if the file cannot be read and
/// [`RegistryError::Json`] if it is not a valid snapshot.
pub fn load(path: &Path) -> Result<Catalog, RegistryError> {
    let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = from_str(&text)?;
    debug!(
        path = %path.display(),
        classes = catalog.classes.len(),
        "snapshot loaded"
    );
    Ok(catalog)
}

/// Encodes a catalog as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`RegistryError::Json`] if encoding fails.
pub fn to_string_pretty(catalog: &Catalog) -> Result<String, RegistryError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Writes a catalog to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`RegistryError::Json`] if encoding fails and
/// [`RegistryError::Io`] if the file cannot be written.
pub fn save(catalog: &Catalog, path: &Path) -> Result<(), RegistryError> {
    let text = to_string_pretty(catalog)?;
    fs::write(path, text).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ArgumentFlags, ParamKind};

    #[test]
    fn full_catalog_survives_json() {
        let catalog = Catalog::full();
        let text = to_string_pretty(catalog).unwrap();
        let back = from_str(&text).unwrap();
        assert_eq!(&back, catalog);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "version": "test",
            "root": "VipsOperation",
            "classes": [
                { "type": { "name": "VipsOperation", "lineage": ["VipsObject", "GObject"], "is_abstract": true } },
                {
                    "type": { "name": "VipsNoop", "lineage": ["VipsOperation", "VipsObject", "GObject"],
                              "nickname": "noop", "description": "do nothing" },
                    "arguments": [
                        { "spec": { "name": "level", "nick": "Level", "blurb": "How much",
                                    "owner": "VipsNoop", "value_type": { "name": "gint" },
                                    "kind": "int", "minimum": 0, "maximum": 9, "default": 3 },
                          "flags": { "required": true, "construct": true, "input": true } }
                    ]
                }
            ]
        }"#;
        let catalog = from_str(json).unwrap();
        let noop = catalog.find("VipsNoop").unwrap();
        assert!(noop.instantiable);
        assert!(!noop.flags.deprecated);
        let level = &noop.arguments[0];
        assert_eq!(level.priority, 0);
        assert_eq!(level.flags, ArgumentFlags::REQUIRED_INPUT);
        assert_eq!(
            level.spec.kind,
            ParamKind::Int {
                minimum: 0,
                maximum: 9,
                default: 3
            }
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(from_str("{ not json"), Err(RegistryError::Json(_))));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        save(Catalog::full(), &path).unwrap();
        let back = load(&path).unwrap();
        assert_eq!(back.classes.len(), Catalog::full().classes.len());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
