//! Error types.
//!
//! Every error here is fatal to a walk: the introspector never skips an
//! operation it could not describe.

use vips_registry::RegistryError;

/// A parameter descriptor that matched no category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// A boxed value type outside the supported array and blob types.
    #[error("unsupported boxed type {type_name} for parameter '{param}' of {owner}")]
    UnsupportedBoxedType {
        /// Declared value type name.
        type_name: String,
        /// Parameter name.
        param: String,
        /// Type that declared the parameter.
        owner: String,
    },
    /// A value type no rule recognises.
    #[error("unsupported type {type_name} for parameter '{param}' of {owner}")]
    UnsupportedValueType {
        /// Declared value type name.
        type_name: String,
        /// Parameter name.
        param: String,
        /// Type that declared the parameter.
        owner: String,
    },
}

/// Any failure that aborts a walk.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter could not be classified.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// The registry could not construct an operation.
    #[error("could not instantiate {type_name}")]
    InstantiationFailure {
        /// The operation type.
        type_name: String,
        /// The registry's reason.
        #[source]
        source: RegistryError,
    },
    /// The registry could not be opened or enumerated.
    #[error("registry initialisation failed")]
    RegistryInitFailure(#[source] RegistryError),
    /// A produced record could not be written out.
    #[error("could not write report")]
    Output(#[from] std::io::Error),
}
