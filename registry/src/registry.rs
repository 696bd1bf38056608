//! The operation-registry collaborator interface and its catalog-backed
//! implementation.

use std::cell::Cell;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::model::{Argument, OperationClass, OperationFlags, TypeHandle};

/// Errors raised by a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A query arrived before `open()` or after `close()`.
    #[error("registry is not open")]
    NotOpen,
    /// The named type is not registered.
    #[error("unknown type '{0}'")]
    UnknownType(String),
    /// The type is registered but cannot be constructed.
    #[error("type '{0}' cannot be instantiated")]
    NotInstantiable(String),
    /// The root of the operation tree is missing.
    #[error("root type '{0}' is not registered")]
    MissingRoot(String),
    /// A type names a parent that is not registered.
    #[error("type '{name}' names unregistered parent '{parent}'")]
    DanglingParent {
        /// The registered type.
        name: String,
        /// The parent it names.
        parent: String,
    },
    /// Two classes share a type name.
    #[error("type '{0}' is registered more than once")]
    DuplicateType(String),
    /// A type appears among its own ancestors.
    #[error("type '{0}' is its own ancestor")]
    Cycle(String),
    /// An operation declares or inherits two arguments of one name.
    #[error("operation '{operation}' has more than one argument named '{argument}'")]
    DuplicateArgument {
        /// The operation type.
        operation: String,
        /// The repeated argument name.
        argument: String,
    },
    /// A snapshot file could not be read or written.
    #[error("snapshot I/O failed for {}", path.display())]
    Io {
        /// The snapshot path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A snapshot could not be decoded or encoded.
    #[error("malformed snapshot")]
    Json(#[from] serde_json::Error),
}

/// The host registry surface consumed by the introspector.
///
/// Calls other than `open`/`close` are only meaningful between the two.
/// Every handle returned by [`instantiate`](Self::instantiate) must be passed
/// back to [`release`](Self::release) exactly once.
pub trait OperationRegistry {
    /// An instantiated operation.
    type Handle;

    /// Initialises the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry's type tree is inconsistent.
    fn open(&mut self) -> Result<(), RegistryError>;

    /// Tears the registry down. Idempotent.
    fn close(&mut self);

    /// Every type reachable from `root`, `root` included, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not open or `root` is unknown.
    fn enumerate_types(&self, root: &str) -> Result<Vec<TypeHandle>, RegistryError>;

    /// Whether `ty` is abstract.
    fn is_abstract(&self, ty: &TypeHandle) -> bool;

    /// Constructs an instance of `ty`.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not open or the type cannot be
    /// constructed.
    fn instantiate(&self, ty: &TypeHandle) -> Result<Self::Handle, RegistryError>;

    /// Releases an instance.
    fn release(&self, handle: Self::Handle);

    /// Runtime flags of an instance.
    fn flags(&self, handle: &Self::Handle) -> OperationFlags;

    /// Every argument of an instance, inherited ones included, in the
    /// registry's declared order.
    fn declared_parameters(&self, handle: &Self::Handle) -> Vec<Argument>;

    /// One-line structural description of a type.
    fn class_summary(&self, ty: &TypeHandle) -> String;
}

/// A registry serving the operation tree of a [`Catalog`].
///
/// Tracks open state and live instances so leaks are observable.
#[derive(Debug)]
pub struct CatalogRegistry<'a> {
    catalog: &'a Catalog,
    open: bool,
    live: Cell<usize>,
    next_id: Cell<u64>,
}

/// An instance handed out by [`CatalogRegistry`].
#[derive(Debug)]
pub struct CatalogInstance<'a> {
    id: u64,
    class: &'a OperationClass,
}

impl CatalogInstance<'_> {
    /// Instance serial number, unique for the registry's lifetime.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The instance's operation type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.class.name()
    }
}

impl<'a> CatalogRegistry<'a> {
    /// Wraps a catalog. The registry starts closed.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            open: false,
            live: Cell::new(0),
            next_id: Cell::new(1),
        }
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Number of instances not yet released.
    #[must_use]
    pub fn live_instances(&self) -> usize {
        self.live.get()
    }

    /// Whether `open()` has succeeded and `close()` has not been called since.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn ensure_open(&self) -> Result<(), RegistryError> {
        if self.open {
            Ok(())
        } else {
            Err(RegistryError::NotOpen)
        }
    }
}

impl<'a> OperationRegistry for CatalogRegistry<'a> {
    type Handle = CatalogInstance<'a>;

    fn open(&mut self) -> Result<(), RegistryError> {
        self.catalog.validate()?;
        self.open = true;
        debug!(
            version = %self.catalog.version,
            classes = self.catalog.classes.len(),
            "registry opened"
        );
        Ok(())
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        let live = self.live.get();
        if live > 0 {
            warn!(live, "registry closed with unreleased instances");
        }
        self.open = false;
        debug!("registry closed");
    }

    fn enumerate_types(&self, root: &str) -> Result<Vec<TypeHandle>, RegistryError> {
        self.ensure_open()?;
        let start = self
            .catalog
            .find(root)
            .ok_or_else(|| RegistryError::UnknownType(root.to_owned()))?;

        // Depth-first pre-order, children in declaration order.
        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(class) = stack.pop() {
            out.push(class.ty.clone());
            let children: Vec<&OperationClass> = self.catalog.children(class.name()).collect();
            stack.extend(children.into_iter().rev());
        }
        Ok(out)
    }

    fn is_abstract(&self, ty: &TypeHandle) -> bool {
        self.catalog
            .find(ty.name())
            .map_or(ty.is_abstract, |class| class.ty.is_abstract)
    }

    fn instantiate(&self, ty: &TypeHandle) -> Result<Self::Handle, RegistryError> {
        self.ensure_open()?;
        let class = self
            .catalog
            .find(ty.name())
            .ok_or_else(|| RegistryError::UnknownType(ty.name.clone()))?;
        if class.ty.is_abstract || !class.instantiable {
            return Err(RegistryError::NotInstantiable(ty.name.clone()));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.set(self.live.get() + 1);
        Ok(CatalogInstance { id, class })
    }

    fn release(&self, handle: Self::Handle) {
        self.live.set(self.live.get().saturating_sub(1));
        debug!(id = handle.id, operation = handle.type_name(), "instance released");
    }

    fn flags(&self, handle: &Self::Handle) -> OperationFlags {
        handle.class.flags
    }

    fn declared_parameters(&self, handle: &Self::Handle) -> Vec<Argument> {
        let mut args: Vec<Argument> = self
            .catalog
            .ancestry(handle.class)
            .into_iter()
            .flat_map(|class| class.arguments.iter().cloned())
            .collect();
        // Stable: equal priorities keep ancestor-first order.
        args.sort_by_key(|a| a.priority);
        args
    }

    fn class_summary(&self, ty: &TypeHandle) -> String {
        let flags = self
            .catalog
            .find(ty.name())
            .map_or(OperationFlags::NONE, |class| class.flags);
        summarize(ty, flags)
    }
}

/// Formats `"<TypeName> (<nickname>), <description>"` followed by one
/// suffix per set flag.
#[must_use]
pub fn summarize(ty: &TypeHandle, flags: OperationFlags) -> String {
    let mut out = ty.name.clone();
    if !ty.nickname.is_empty() {
        out.push_str(&format!(" ({})", ty.nickname));
    }
    if !ty.description.is_empty() {
        out.push_str(&format!(", {}", ty.description));
    }
    if flags.sequential {
        out.push_str(", sequential");
    }
    if flags.nocache {
        out.push_str(", nocache");
    }
    if flags.deprecated {
        out.push_str(", deprecated");
    }
    if flags.untrusted {
        out.push_str(", untrusted");
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::types;

    fn opened(catalog: &Catalog) -> CatalogRegistry<'_> {
        let mut registry = CatalogRegistry::new(catalog);
        registry.open().unwrap();
        registry
    }

    #[test]
    fn queries_before_open_fail() {
        let registry = CatalogRegistry::new(Catalog::full());
        assert!(matches!(
            registry.enumerate_types(types::VIPS_OPERATION),
            Err(RegistryError::NotOpen)
        ));
    }

    #[test]
    fn enumeration_starts_at_root() {
        let registry = opened(Catalog::full());
        let all = registry.enumerate_types(types::VIPS_OPERATION).unwrap();
        assert_eq!(all[0].name, types::VIPS_OPERATION);
        assert_eq!(all.len(), Catalog::full().classes.len());
    }

    #[test]
    fn enumeration_is_preorder() {
        let registry = opened(Catalog::full());
        let all = registry.enumerate_types(types::VIPS_OPERATION).unwrap();
        let pos = |name: &str| all.iter().position(|t| t.name == name).unwrap();
        assert!(pos("VipsArithmetic") < pos("VipsUnary"));
        assert!(pos("VipsUnary") < pos("VipsInvert"));
        assert!(pos("VipsForeignLoad") < pos("VipsForeignLoadJpegFile"));
    }

    #[test]
    fn instances_are_counted() {
        let registry = opened(Catalog::full());
        let ty = Catalog::full().find("VipsInvert").unwrap().ty.clone();
        let a = registry.instantiate(&ty).unwrap();
        let b = registry.instantiate(&ty).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(registry.live_instances(), 2);
        registry.release(a);
        registry.release(b);
        assert_eq!(registry.live_instances(), 0);
    }

    #[test]
    fn abstract_types_are_not_instantiable() {
        let registry = opened(Catalog::full());
        let ty = Catalog::full().find("VipsUnary").unwrap().ty.clone();
        assert!(registry.is_abstract(&ty));
        assert!(matches!(
            registry.instantiate(&ty),
            Err(RegistryError::NotInstantiable(_))
        ));
        assert_eq!(registry.live_instances(), 0);
    }

    #[test]
    fn inherited_arguments_come_first_within_priority() {
        let registry = opened(Catalog::full());
        let ty = Catalog::full().find("VipsInvert").unwrap().ty.clone();
        let handle = registry.instantiate(&ty).unwrap();
        let names: Vec<String> = registry
            .declared_parameters(&handle)
            .into_iter()
            .map(|a| a.spec.name)
            .collect();
        registry.release(handle);
        assert_eq!(names, ["nickname", "description", "in", "out"]);
    }

    #[test]
    fn summary_lists_flags() {
        let registry = opened(Catalog::full());
        let ty = Catalog::full().find("VipsInvert").unwrap().ty.clone();
        assert_eq!(
            registry.class_summary(&ty),
            "VipsInvert (invert), invert an image, sequential"
        );
    }
}
