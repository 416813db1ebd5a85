//! Hierarchy unrolling and property aggregation
//!
//! Unrolling collects a root type and every ancestor reachable through its
//! `extends` edges, specializing each ancestor with the arguments bound on the
//! edge that reaches it. Interfaces are not followed: they contribute no
//! properties.
//!
//! Ordering is deterministic: the root comes first, then ancestors depth-first
//! in declared `extends` order. [`AnalysisContext::all_properties`] keeps that
//! order, so a first-match scan prefers the most-derived declaration.

use indexmap::IndexMap;

use crate::context::AnalysisContext;
use crate::generics::apply_type_arguments;
use crate::model::{Property, TypeDef};

/// Unrolled hierarchy, keyed by fully-qualified name
pub type Hierarchy = IndexMap<String, TypeDef>;

impl AnalysisContext<'_> {
    /// Unroll the hierarchy of a type, including the type itself
    pub fn unroll_hierarchy(&self, root: &TypeDef) -> Hierarchy {
        let mut hierarchy = Hierarchy::new();
        self.unroll_into(root.clone(), &mut hierarchy, &mut Vec::new());
        hierarchy
    }

    /// `path` holds the types on the current descent, to tell cycles from diamonds
    fn unroll_into(&self, def: TypeDef, hierarchy: &mut Hierarchy, path: &mut Vec<String>) {
        let options = self.options();
        let name = def.fully_qualified_name();

        if options.is_excluded(&def) {
            tracing::debug!("Pruning runtime type {} from hierarchy", name);
            return;
        }

        if path.contains(&name) {
            tracing::warn!("Extends cycle through {}, skipping", name);
            return;
        }

        if hierarchy.contains_key(&name) {
            tracing::debug!("Type {} already unrolled through another edge", name);
            return;
        }

        if name == options.resource_base {
            tracing::debug!("Reducing {} to {:?}", name, options.resource_base_properties);
            let mut reduced = def;
            reduced
                .properties
                .retain(|p| options.resource_base_properties.contains(&p.name));
            hierarchy.insert(name, reduced);
            return;
        }

        let superclasses = def.extends.clone();
        hierarchy.insert(name.clone(), def);
        path.push(name);

        for superclass in &superclasses {
            match self.definition_of(superclass) {
                Some(target) => {
                    let specialized = apply_type_arguments(target, &superclass.arguments);
                    self.unroll_into(specialized, hierarchy, path);
                }
                None if options.is_excluded_package(superclass.package()) => {
                    tracing::debug!("Pruning runtime type {} from hierarchy", superclass.name);
                }
                None => {
                    tracing::warn!("Superclass {} could not be resolved, skipping", superclass);
                }
            }
        }
        path.pop();
    }

    /// All properties of a type, including inherited ones
    ///
    /// Properties with the same name in several ancestors are all returned;
    /// consumers pick the first.
    pub fn all_properties(&self, root: &TypeDef) -> Vec<Property> {
        self.unroll_hierarchy(root)
            .into_values()
            .flat_map(|def| def.properties)
            .collect()
    }
}
