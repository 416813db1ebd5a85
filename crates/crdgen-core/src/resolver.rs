//! Type-name resolution
//!
//! Names are resolved through the [`TypeResolver`] trait. Two backends exist:
//!
//! - [`TypeTable`]: the types of the in-progress compilation, supplied by
//!   whatever discovered them (source analysis, a fixture file, ...)
//! - [`TypeRegistry`]: the ambient runtime registry of library types that are
//!   known without being part of the compilation (e.g. the Kubernetes model)
//!
//! [`crate::AnalysisContext`] tries them in that fixed order.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::model::{ClassRef, Property, TypeDef, TypeRef};

/// Fully-qualified name of the Kubernetes custom resource base type
pub const CUSTOM_RESOURCE: &str = "io.fabric8.kubernetes.client.CustomResource";
/// Fully-qualified name of the namespaced marker interface
pub const NAMESPACED: &str = "io.fabric8.kubernetes.api.model.Namespaced";
/// Fully-qualified name of the metadata-bearing interface
pub const HAS_METADATA: &str = "io.fabric8.kubernetes.api.model.HasMetadata";
pub const OBJECT_META: &str = "io.fabric8.kubernetes.api.model.ObjectMeta";
pub const INT_OR_STRING: &str = "io.fabric8.kubernetes.api.model.IntOrString";
pub const QUANTITY: &str = "io.fabric8.kubernetes.api.model.Quantity";

/// Lookup of type definitions by fully-qualified name
pub trait TypeResolver {
    /// Resolve a fully-qualified name to its definition
    fn resolve(&self, name: &str) -> Option<&TypeDef>;
}

/// Types of the in-progress compilation, keyed by fully-qualified name
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: IndexMap<String, TypeDef>,
}

#[derive(Deserialize)]
struct TypeTableDocument {
    #[serde(default)]
    types: Vec<TypeDef>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from definitions, rejecting duplicate identities
    pub fn from_types<I: IntoIterator<Item = TypeDef>>(types: I) -> Result<Self> {
        let mut table = Self::new();
        for def in types {
            let name = def.fully_qualified_name();
            if table.types.contains_key(&name) {
                return Err(CoreError::DuplicateType { name });
            }
            table.types.insert(name, def);
        }
        Ok(table)
    }

    /// Parse a table from a YAML document with a top-level `types` list
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: TypeTableDocument = serde_yaml::from_str(yaml)?;
        Self::from_types(doc.types)
    }

    /// Load a table from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Insert or replace a definition
    pub fn insert(&mut self, def: TypeDef) {
        self.types.insert(def.fully_qualified_name(), def);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate definitions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }
}

impl TypeResolver for TypeTable {
    fn resolve(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }
}

/// Ambient registry of library types
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDef>,
}

impl TypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the Kubernetes model types the engine recognizes
    pub fn kubernetes() -> Self {
        let string = || TypeRef::class("java.lang.String");
        let mut registry = Self::new();

        registry.register(TypeDef::new(HAS_METADATA));
        registry.register(TypeDef::new(NAMESPACED));
        registry.register(
            TypeDef::new(OBJECT_META)
                .with_property(Property::new("name", string()))
                .with_property(Property::new("namespace", string()))
                .with_property(Property::new(
                    "labels",
                    ClassRef::new("java.util.Map")
                        .with_argument(string())
                        .with_argument(string())
                        .into(),
                )),
        );
        registry.register(
            TypeDef::new(CUSTOM_RESOURCE)
                .with_parameters(["S", "T"])
                .with_property(Property::new("kind", string()))
                .with_property(Property::new("apiVersion", string()))
                .with_property(Property::new("metadata", TypeRef::class(OBJECT_META)))
                .with_property(Property::new("spec", TypeRef::param("S")))
                .with_property(Property::new("status", TypeRef::param("T")))
                .with_implements(ClassRef::new(HAS_METADATA)),
        );
        registry.register(
            TypeDef::new(INT_OR_STRING)
                .with_property(Property::new("intVal", TypeRef::class("java.lang.Integer")))
                .with_property(Property::new("strVal", string())),
        );
        registry.register(
            TypeDef::new(QUANTITY)
                .with_property(Property::new("amount", string()))
                .with_property(Property::new("format", string())),
        );

        registry
    }

    /// Register a definition, replacing any previous one with the same identity
    pub fn register(&mut self, def: TypeDef) {
        self.types.insert(def.fully_qualified_name(), def);
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }
}
