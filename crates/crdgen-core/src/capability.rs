//! Capability detection
//!
//! A type has a capability if it is the marker type, or if anything reachable
//! through its `implements` and `extends` edges is. Unlike hierarchy
//! unrolling, interfaces are followed here.

use std::collections::HashSet;

use crate::context::AnalysisContext;
use crate::model::TypeDef;

impl AnalysisContext<'_> {
    /// Check if a type is, extends, or implements the namespaced marker
    pub fn is_namespaced(&self, def: &TypeDef) -> bool {
        self.has_capability(def, &self.options().namespaced_marker)
    }

    /// Check if a type is, extends, or implements `marker`
    pub fn has_capability(&self, def: &TypeDef, marker: &str) -> bool {
        self.has_capability_visited(def, marker, &HashSet::new())
    }

    fn has_capability_visited(&self, def: &TypeDef, marker: &str, visited: &HashSet<String>) -> bool {
        let name = def.fully_qualified_name();
        if name == marker {
            return true;
        }

        if visited.contains(&name) || self.options().is_excluded(def) {
            return false;
        }

        let mut visited = visited.clone();
        visited.insert(name);

        def.implements.iter().chain(&def.extends).any(|edge| {
            if edge.name == marker {
                return true;
            }
            match self.definition_of(edge) {
                Some(target) => self.has_capability_visited(target, marker, &visited),
                None => {
                    tracing::debug!("Edge target {} could not be resolved", edge.name);
                    false
                }
            }
        })
    }
}
