//! The built-in operation catalog.
//!
//! A static slice of the image-processing operation tree, assembled from one
//! module per operation family. Families are listed in registration order,
//! which is also the order children appear under a shared parent.

pub mod args;
pub mod arithmetic;
pub mod colour;
pub mod conversion;
pub mod create;
pub mod enums;
pub mod foreign;
pub mod resample;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{types, OperationClass};
use crate::registry::RegistryError;

/// A registry's complete set of operation classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog version string.
    pub version: String,
    /// Name of the root operation type.
    pub root: String,
    /// Every operation class, abstract ones included, in registration order.
    pub classes: Vec<OperationClass>,
}

impl Catalog {
    /// Returns the built-in catalog.
    ///
    /// Registration order follows the family dependency graph:
    /// `root → arithmetic → conversion → create → colour → resample → foreign`.
    #[must_use]
    pub fn full() -> &'static Catalog {
        static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            version: "8.15.0".to_owned(),
            root: types::VIPS_OPERATION.to_owned(),
            classes: [
                vec![root_class()],
                arithmetic::classes(),
                conversion::classes(),
                create::classes(),
                colour::classes(),
                resample::classes(),
                foreign::classes(),
            ]
            .concat(),
        })
    }

    /// Looks up a class by type name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&OperationClass> {
        self.classes.iter().find(|c| c.name() == name)
    }

    /// Direct children of `name`, in registration order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a OperationClass> + 'a {
        self.classes
            .iter()
            .filter(move |c| c.ty.parent() == Some(name))
    }

    /// The chain from the root down to `class`, `class` included.
    ///
    /// The walk stops at the first ancestor that is not a registered class,
    /// or that is already in the chain.
    #[must_use]
    pub fn ancestry<'a>(&'a self, class: &'a OperationClass) -> Vec<&'a OperationClass> {
        let mut chain = vec![class];
        let mut current = class;
        while let Some(parent) = current.ty.parent().and_then(|p| self.find(p)) {
            if chain.iter().any(|c| c.name() == parent.name()) {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// Number of concrete classes.
    #[must_use]
    pub fn concrete_count(&self) -> usize {
        self.classes.iter().filter(|c| !c.ty.is_abstract).count()
    }

    /// Number of abstract classes.
    #[must_use]
    pub fn abstract_count(&self) -> usize {
        self.classes.len() - self.concrete_count()
    }

    /// Checks that the type tree is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingRoot`] if the root class is absent,
    /// [`RegistryError::DuplicateType`] if two classes share a name, and
    /// [`RegistryError::DanglingParent`] if a non-root class names a parent
    /// that is not registered, [`RegistryError::Cycle`] if a class is its
    /// own ancestor, and [`RegistryError::DuplicateArgument`] if an
    /// operation inherits two arguments of the same name.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.find(&self.root).is_none() {
            return Err(RegistryError::MissingRoot(self.root.clone()));
        }
        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.name()) {
                return Err(RegistryError::DuplicateType(class.name().to_owned()));
            }
        }
        for class in &self.classes {
            if class.name() == self.root {
                continue;
            }
            match class.ty.parent() {
                Some(parent) if seen.contains(parent) => {}
                parent => {
                    return Err(RegistryError::DanglingParent {
                        name: class.name().to_owned(),
                        parent: parent.unwrap_or_default().to_owned(),
                    })
                }
            }
        }
        for class in &self.classes {
            self.check_lineage(class)?;
        }
        for class in &self.classes {
            let mut names = HashSet::new();
            for ancestor in self.ancestry(class) {
                for argument in &ancestor.arguments {
                    if !names.insert(argument.name()) {
                        return Err(RegistryError::DuplicateArgument {
                            operation: class.name().to_owned(),
                            argument: argument.name().to_owned(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    // Follows registered parents upward; the root may name an unregistered
    // parent but never one of its own descendants.
    fn check_lineage(&self, class: &OperationClass) -> Result<(), RegistryError> {
        let mut visited = HashSet::from([class.name()]);
        let mut current = class;
        while let Some(parent) = current.ty.parent().and_then(|p| self.find(p)) {
            if !visited.insert(parent.name()) {
                return Err(RegistryError::Cycle(class.name().to_owned()));
            }
            current = parent;
        }
        Ok(())
    }
}

/// The abstract root every operation descends from.
fn root_class() -> OperationClass {
    OperationClass::abstract_class(
        types::VIPS_OPERATION,
        &[types::VIPS_OBJECT, types::G_OBJECT],
        "operation",
        "operations",
    )
    .with_arguments(args::object_properties())
}
