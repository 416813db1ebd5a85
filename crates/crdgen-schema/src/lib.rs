//! crdgen Schema - structural CRD schemas from typed object models
//!
//! Builds on `crdgen-core` to derive, for a resource type:
//! - the OpenAPI property tree of its (inherited) properties
//! - its scope, from the namespaced capability
//! - its status subresource, from the detected or configured status type
//!
//! # Example
//!
//! ```rust
//! use crdgen_core::resolver::CUSTOM_RESOURCE;
//! use crdgen_core::{AnalysisContext, ClassRef, CustomResourceConfig, TypeDef, TypeRef, TypeRegistry, TypeTable};
//! use crdgen_schema::{CrdScope, SchemaBuilder};
//!
//! let table = TypeTable::new();
//! let registry = TypeRegistry::kubernetes();
//! let ctx = AnalysisContext::new(&table, &registry);
//!
//! let gizmo = TypeDef::new("io.example.Gizmo").with_extends(
//!     ClassRef::new(CUSTOM_RESOURCE)
//!         .with_argument(TypeRef::class("java.lang.String"))
//!         .with_argument(TypeRef::class("java.lang.String")),
//! );
//! let crd = SchemaBuilder::new(&ctx).build(&CustomResourceConfig::default(), &gizmo).unwrap();
//! assert_eq!(crd.name, "gizmos.io.example");
//! assert_eq!(crd.scope, CrdScope::Cluster);
//! assert!(crd.subresources.status);
//! ```

pub mod builder;
pub mod error;
pub mod schema;

pub use builder::SchemaBuilder;
pub use error::{Result, SchemaError};
pub use schema::{
    CrdDefinition, CrdNames, CrdScope, OpenApiSchema, PropertyType, SchemaProperty, Subresources,
};
