//! Status facet resolution
//!
//! The status type of a resource comes from the configuration when an explicit
//! `statusClassName` is set, and from its properties otherwise. A property is
//! the status property if it is named `status` or carries the status
//! annotation; the first one in aggregation order wins.

use crate::config::CustomResourceConfig;
use crate::context::AnalysisContext;
use crate::error::{CoreError, Result};
use crate::model::{Property, TypeDef, TypeRef};

impl AnalysisContext<'_> {
    /// Find the status type of a resource
    ///
    /// An explicit `statusClassName` must resolve, either in the compilation
    /// or in the runtime registry; otherwise this fails. With auto-detection
    /// the type of the status property is returned, if there is one.
    pub fn find_status_type(
        &self,
        config: &CustomResourceConfig,
        def: &TypeDef,
    ) -> Result<Option<TypeRef>> {
        if let Some(name) = config.explicit_status_class() {
            let status = self
                .resolve(name)
                .ok_or_else(|| CoreError::StatusClassNotFound {
                    name: name.to_string(),
                })?;
            return Ok(Some(status.to_reference()));
        }

        Ok(self
            .find_status_property(config, def)
            .map(|property| property.type_ref))
    }

    /// Find the first status property of a resource, including inherited ones
    pub fn find_status_property(
        &self,
        _config: &CustomResourceConfig,
        def: &TypeDef,
    ) -> Option<Property> {
        self.all_properties(def)
            .into_iter()
            .find(|property| self.is_status_property(property))
    }

    /// Check if a property is named `status` or annotated as status
    pub fn is_status_property(&self, property: &Property) -> bool {
        property.name == "status" || property.has_annotation(&self.options().status_annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::STATUS_ANNOTATION;
    use crate::model::{AnnotationRef, ClassRef};
    use crate::resolver::{TypeRegistry, TypeTable};

    fn table() -> TypeTable {
        TypeTable::from_types([
            TypeDef::new("a.GizmoStatus"),
            TypeDef::new("a.Parent")
                .with_property(Property::new("status", TypeRef::class("a.ParentStatus"))),
            TypeDef::new("a.Uncle")
                .with_property(Property::new("status", TypeRef::class("a.UncleStatus"))),
        ])
        .unwrap()
    }

    #[test]
    fn test_named_status() {
        let table = table();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);
        let config = CustomResourceConfig::default();

        let gizmo = TypeDef::new("a.Gizmo")
            .with_property(Property::new("spec", TypeRef::class("a.GizmoSpec")))
            .with_property(Property::new("status", TypeRef::class("a.GizmoStatus")));

        assert_eq!(
            ctx.find_status_type(&config, &gizmo).unwrap(),
            Some(TypeRef::class("a.GizmoStatus"))
        );
    }

    #[test]
    fn test_annotated_status() {
        let table = table();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);

        let gizmo = TypeDef::new("a.Gizmo").with_property(
            Property::new("state", TypeRef::class("a.GizmoState"))
                .with_annotation(AnnotationRef::new(STATUS_ANNOTATION)),
        );

        let found = ctx
            .find_status_property(&CustomResourceConfig::default(), &gizmo)
            .unwrap();
        assert_eq!(found.name, "state");
    }

    #[test]
    fn test_first_ancestor_wins() {
        let table = table();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);

        let gizmo = TypeDef::new("a.Gizmo")
            .with_extends(ClassRef::new("a.Parent"))
            .with_extends(ClassRef::new("a.Uncle"));

        for _ in 0..3 {
            let found = ctx
                .find_status_property(&CustomResourceConfig::default(), &gizmo)
                .unwrap();
            assert_eq!(found.type_ref, TypeRef::class("a.ParentStatus"));
        }
    }

    #[test]
    fn test_explicit_status_class_overrides_properties() {
        let table = table();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);
        let config = CustomResourceConfig::default().with_status_class("a.GizmoStatus");

        let gizmo = TypeDef::new("a.Gizmo").with_extends(ClassRef::new("a.Parent"));
        assert_eq!(
            ctx.find_status_type(&config, &gizmo).unwrap(),
            Some(TypeRef::class("a.GizmoStatus"))
        );
    }

    #[test]
    fn test_explicit_status_class_from_registry() {
        let table = table();
        let mut registry = TypeRegistry::new();
        registry.register(TypeDef::new("lib.SharedStatus"));
        let ctx = AnalysisContext::new(&table, &registry);
        let config = CustomResourceConfig::default().with_status_class("lib.SharedStatus");

        let gizmo = TypeDef::new("a.Gizmo");
        assert_eq!(
            ctx.find_status_type(&config, &gizmo).unwrap(),
            Some(TypeRef::class("lib.SharedStatus"))
        );
    }

    #[test]
    fn test_explicit_status_class_not_found() {
        let table = table();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);
        let config = CustomResourceConfig::default().with_status_class("a.Missing");

        let gizmo = TypeDef::new("a.Gizmo")
            .with_property(Property::new("status", TypeRef::class("a.GizmoStatus")));
        let err = ctx.find_status_type(&config, &gizmo).unwrap_err();
        assert!(matches!(err, CoreError::StatusClassNotFound { ref name } if name == "a.Missing"));
        assert!(err.to_string().contains("a.Missing"));
    }

    #[test]
    fn test_no_status() {
        let table = table();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);

        let gizmo = TypeDef::new("a.Gizmo")
            .with_property(Property::new("spec", TypeRef::class("a.GizmoSpec")));
        assert_eq!(
            ctx.find_status_type(&CustomResourceConfig::default(), &gizmo).unwrap(),
            None
        );
    }
}
