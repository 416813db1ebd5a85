//! crdgen Core - type hierarchy resolution for CRD schema generation
//!
//! This crate walks statically known type metadata to find out what a typed
//! object model looks like as a custom resource:
//! - `model`: Type graph snapshots (`TypeDef`, `TypeRef`, `Property`)
//! - `resolver`: Name lookup backends (`TypeTable`, `TypeRegistry`)
//! - `context`: The explicit `AnalysisContext` every operation runs in
//! - `generics`: Type argument substitution along inheritance edges
//! - `hierarchy`: Hierarchy unrolling and inherited property aggregation
//! - `capability`: Transitive marker detection (e.g. namespaced)
//! - `status`: Status type and status property resolution
//!
//! # Example
//!
//! ```rust
//! use crdgen_core::{AnalysisContext, ClassRef, Property, TypeDef, TypeRef, TypeRegistry, TypeTable};
//!
//! let table = TypeTable::from_types([TypeDef::new("io.example.Base")
//!     .with_parameters(["T"])
//!     .with_property(Property::new("item", TypeRef::param("T")))])
//! .unwrap();
//! let registry = TypeRegistry::kubernetes();
//! let ctx = AnalysisContext::new(&table, &registry);
//!
//! let sub = TypeDef::new("io.example.Sub")
//!     .with_extends(ClassRef::new("io.example.Base").with_argument(TypeRef::class("io.example.Widget")));
//! let props = ctx.all_properties(&sub);
//! assert_eq!(props[0].type_ref, TypeRef::class("io.example.Widget"));
//! ```

pub mod capability;
pub mod config;
pub mod context;
pub mod error;
pub mod generics;
pub mod hierarchy;
pub mod model;
pub mod resolver;
pub mod status;

pub use config::CustomResourceConfig;
pub use context::{AnalysisContext, AnalysisOptions, STATUS_ANNOTATION};
pub use error::{CoreError, Result};
pub use generics::apply_type_arguments;
pub use hierarchy::Hierarchy;
pub use model::{AnnotationRef, ClassRef, Property, TypeDef, TypeParamRef, TypeRef};
pub use resolver::{TypeRegistry, TypeResolver, TypeTable};
