//! Analysis context
//!
//! Everything an analysis needs is carried explicitly by [`AnalysisContext`]:
//! the resolvers to look type names up in, and the well-known names the
//! engine gives special treatment. Operations are methods on the context
//! (see `hierarchy`, `capability` and `status`) and never consult any
//! process-wide state.

use crate::model::{ClassRef, TypeDef};
use crate::resolver::{CUSTOM_RESOURCE, NAMESPACED, TypeResolver};

/// Fully-qualified name of the status marker annotation
pub const STATUS_ANNOTATION: &str = "io.dekorate.crd.annotation.Status";

/// Well-known names recognized during analysis
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Package prefixes whose types contribute nothing (runtime/standard library)
    pub excluded_packages: Vec<String>,
    /// Base type that is reduced to `resource_base_properties`
    pub resource_base: String,
    /// Property names the resource base keeps
    pub resource_base_properties: Vec<String>,
    /// Marker type for the namespaced capability
    pub namespaced_marker: String,
    /// Annotation that marks a property as the status facet
    pub status_annotation: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            excluded_packages: ["java.", "javax.", "com.sun.", "com.ibm."]
                .into_iter()
                .map(String::from)
                .collect(),
            resource_base: CUSTOM_RESOURCE.to_string(),
            resource_base_properties: vec!["spec".to_string(), "status".to_string()],
            namespaced_marker: NAMESPACED.to_string(),
            status_annotation: STATUS_ANNOTATION.to_string(),
        }
    }
}

impl AnalysisOptions {
    /// Check if a definition lives in an excluded package
    pub fn is_excluded(&self, def: &TypeDef) -> bool {
        self.is_excluded_package(&def.package)
    }

    /// Check if a package name falls under an excluded prefix
    pub fn is_excluded_package(&self, package: &str) -> bool {
        !package.is_empty()
            && self
                .excluded_packages
                .iter()
                .any(|prefix| {
                    package.starts_with(prefix.as_str())
                        || package == prefix.trim_end_matches('.')
                })
    }
}

/// Explicit context threaded through every analysis operation
pub struct AnalysisContext<'a> {
    compilation: &'a dyn TypeResolver,
    runtime: &'a dyn TypeResolver,
    options: AnalysisOptions,
}

impl<'a> AnalysisContext<'a> {
    /// Create a context with default options
    pub fn new(compilation: &'a dyn TypeResolver, runtime: &'a dyn TypeResolver) -> Self {
        Self {
            compilation,
            runtime,
            options: AnalysisOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Resolve a name against the compilation first, then the runtime registry
    pub fn resolve(&self, name: &str) -> Option<&'a TypeDef> {
        let (compilation, runtime): (&'a dyn TypeResolver, &'a dyn TypeResolver) =
            (self.compilation, self.runtime);
        compilation.resolve(name).or_else(|| runtime.resolve(name))
    }

    /// Resolve the target of an edge
    pub fn definition_of(&self, class: &ClassRef) -> Option<&'a TypeDef> {
        self.resolve(&class.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{TypeRegistry, TypeTable};

    #[test]
    fn test_compilation_shadows_runtime() {
        let mut table = TypeTable::new();
        table.insert(TypeDef::new(NAMESPACED).with_parameters(["X"]));
        let registry = TypeRegistry::kubernetes();
        let ctx = AnalysisContext::new(&table, &registry);

        assert_eq!(ctx.resolve(NAMESPACED).unwrap().parameters.len(), 1);
        assert!(ctx.resolve(CUSTOM_RESOURCE).is_some());
        assert!(ctx.resolve("io.example.Nothing").is_none());
    }

    #[test]
    fn test_excluded_packages() {
        let options = AnalysisOptions::default();
        assert!(options.is_excluded(&TypeDef::new("java.lang.Object")));
        assert!(options.is_excluded(&TypeDef::new("javax.swing.JPanel")));
        assert!(options.is_excluded(&TypeDef::new("com.sun.Foo")));
        assert!(!options.is_excluded(&TypeDef::new("io.example.Foo")));
        assert!(!options.is_excluded(&TypeDef::new("Foo")));
        assert!(options.is_excluded_package("com.ibm"));
        assert!(!options.is_excluded_package("com.sunshine"));
        assert!(!options.is_excluded_package("javafoo"));
    }
}
