//! Schema derivation
//!
//! [`SchemaBuilder`] turns a root type into a [`CrdDefinition`] using the
//! analysis operations of [`AnalysisContext`]: inherited properties become
//! schema properties (first declaration of a name wins), the namespaced
//! capability decides the scope, and a detected status type enables the
//! status subresource.

use std::collections::{BTreeMap, HashSet};

use crdgen_core::resolver::{INT_OR_STRING, QUANTITY};
use crdgen_core::{
    AnalysisContext, ClassRef, CustomResourceConfig, Property, TypeDef, TypeRef,
    apply_type_arguments,
};

use crate::error::{Result, SchemaError};
use crate::schema::{CrdDefinition, CrdNames, CrdScope, OpenApiSchema, SchemaProperty, Subresources};

const DEFAULT_VERSION: &str = "v1";

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "float", "double", "char",
];

/// Builds structural schemas for resource types
pub struct SchemaBuilder<'c, 'a> {
    ctx: &'c AnalysisContext<'a>,
}

impl<'c, 'a> SchemaBuilder<'c, 'a> {
    pub fn new(ctx: &'c AnalysisContext<'a>) -> Self {
        Self { ctx }
    }

    /// Derive the CRD of a resource type
    pub fn build(&self, config: &CustomResourceConfig, root: &TypeDef) -> Result<CrdDefinition> {
        let status_type = self.ctx.find_status_type(config, root)?;
        let explicit_status = config.explicit_status_class().is_some();

        let mut visiting = vec![root.fully_qualified_name()];
        let (mut properties, required) = self.object_properties(root, &mut visiting);

        if let (true, Some(status)) = (explicit_status, &status_type) {
            let schema = self.property_schema(status, &mut visiting);
            let status_names: Vec<String> = first_match(self.ctx.all_properties(root))
                .into_iter()
                .filter(|p| self.ctx.is_status_property(p))
                .map(|p| p.name)
                .collect();
            for name in status_names {
                properties.remove(&name);
            }
            properties.insert("status".to_string(), schema);
        }

        let kind = config.kind.clone().unwrap_or_else(|| root.name.clone());
        let singular = kind.to_lowercase();
        let plural = config
            .plural
            .clone()
            .unwrap_or_else(|| format!("{}s", singular));
        let group = match &config.group {
            Some(group) => group.clone(),
            None if !root.package.is_empty() => root.package.clone(),
            None => {
                return Err(SchemaError::MissingField {
                    field: "group".to_string(),
                });
            }
        };

        let scope = if self.ctx.is_namespaced(root) {
            CrdScope::Namespaced
        } else {
            CrdScope::Cluster
        };

        tracing::debug!(
            "Derived {} ({} root properties, scope {})",
            kind,
            properties.len(),
            scope
        );

        Ok(CrdDefinition {
            name: format!("{}.{}", plural, group),
            group,
            version: config
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            scope,
            names: CrdNames {
                kind,
                plural,
                singular,
            },
            schema: OpenApiSchema {
                properties,
                required,
            },
            subresources: Subresources {
                status: status_type.is_some(),
            },
        })
    }

    /// Schema of a property type
    pub fn property_schema(&self, type_ref: &TypeRef, visiting: &mut Vec<String>) -> SchemaProperty {
        match type_ref {
            TypeRef::Param(param) => {
                tracing::debug!("Unbound type parameter {} in schema", param.param);
                SchemaProperty::preserve_unknown()
            }
            TypeRef::Class(class) => self.class_schema(class, visiting),
        }
    }

    fn class_schema(&self, class: &ClassRef, visiting: &mut Vec<String>) -> SchemaProperty {
        match class.name.as_str() {
            "boolean" | "java.lang.Boolean" => SchemaProperty::boolean(),
            "byte" | "short" | "int" | "long" | "java.lang.Byte" | "java.lang.Short"
            | "java.lang.Integer" | "java.lang.Long" | "java.math.BigInteger" => {
                SchemaProperty::integer()
            }
            "float" | "double" | "java.lang.Float" | "java.lang.Double" | "java.math.BigDecimal" => {
                SchemaProperty::number()
            }
            "char" | "java.lang.Character" | "java.lang.String" => SchemaProperty::string(),
            INT_OR_STRING | QUANTITY => SchemaProperty::int_or_string(),
            "java.util.List" | "java.util.Set" | "java.util.Collection" => {
                let items = match class.arguments.first() {
                    Some(item) => self.property_schema(item, visiting),
                    None => SchemaProperty::preserve_unknown(),
                };
                SchemaProperty::array(items)
            }
            "java.util.Map" => {
                let values = match class.arguments.get(1) {
                    Some(value) => self.property_schema(value, visiting),
                    None => SchemaProperty::preserve_unknown(),
                };
                SchemaProperty::map(values)
            }
            name => {
                if visiting.iter().any(|v| v == name) {
                    tracing::debug!("Recursive reference to {}, preserving unknown fields", name);
                    return SchemaProperty::preserve_unknown();
                }
                let Some(def) = self.ctx.definition_of(class) else {
                    tracing::debug!("Type {} could not be resolved", name);
                    return SchemaProperty::preserve_unknown();
                };

                let specialized = apply_type_arguments(def, &class.arguments);
                visiting.push(name.to_string());
                let (properties, required) = self.object_properties(&specialized, visiting);
                visiting.pop();
                SchemaProperty::object(properties, required)
            }
        }
    }

    fn object_properties(
        &self,
        def: &TypeDef,
        visiting: &mut Vec<String>,
    ) -> (BTreeMap<String, SchemaProperty>, Vec<String>) {
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for property in first_match(self.ctx.all_properties(def)) {
            if is_primitive(&property.type_ref) {
                required.push(property.name.clone());
            }
            let schema = self.property_schema(&property.type_ref, visiting);
            properties.insert(property.name, schema);
        }

        (properties, required)
    }
}

/// Keep the first property of each name
fn first_match(properties: Vec<Property>) -> Vec<Property> {
    let mut seen = HashSet::new();
    properties
        .into_iter()
        .filter(|p| seen.insert(p.name.clone()))
        .collect()
}

fn is_primitive(type_ref: &TypeRef) -> bool {
    type_ref
        .as_class()
        .is_some_and(|c| PRIMITIVES.contains(&c.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PropertyType;
    use crdgen_core::{TypeRegistry, TypeTable};

    #[test]
    fn test_first_match_keeps_order() {
        let props = vec![
            Property::new("a", TypeRef::class("int")),
            Property::new("b", TypeRef::class("int")),
            Property::new("a", TypeRef::class("java.lang.String")),
        ];
        let kept = first_match(props);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].type_ref, TypeRef::class("int"));
    }

    #[test]
    fn test_scalar_mapping() {
        let table = TypeTable::new();
        let registry = TypeRegistry::kubernetes();
        let ctx = AnalysisContext::new(&table, &registry);
        let builder = SchemaBuilder::new(&ctx);
        let mut visiting = Vec::new();

        let cases = [
            ("int", PropertyType::Integer),
            ("java.lang.Long", PropertyType::Integer),
            ("double", PropertyType::Number),
            ("java.lang.String", PropertyType::String),
            ("boolean", PropertyType::Boolean),
            ("io.example.Unknown", PropertyType::Object),
        ];
        for (name, expected) in cases {
            let schema = builder.property_schema(&TypeRef::class(name), &mut visiting);
            assert_eq!(schema.type_, expected, "{}", name);
        }
    }

    #[test]
    fn test_collections() {
        let table = TypeTable::new();
        let registry = TypeRegistry::kubernetes();
        let ctx = AnalysisContext::new(&table, &registry);
        let builder = SchemaBuilder::new(&ctx);
        let mut visiting = Vec::new();

        let list = ClassRef::new("java.util.List").with_argument(TypeRef::class("int"));
        let schema = builder.property_schema(&list.into(), &mut visiting);
        assert_eq!(schema.type_, PropertyType::Array);
        assert_eq!(schema.items.unwrap().type_, PropertyType::Integer);

        let map = ClassRef::new("java.util.Map")
            .with_argument(TypeRef::class("java.lang.String"))
            .with_argument(TypeRef::class(QUANTITY));
        let schema = builder.property_schema(&map.into(), &mut visiting);
        assert_eq!(schema.type_, PropertyType::Object);
        let values = schema.additional_properties.unwrap();
        assert_eq!(values.type_, PropertyType::AnyOf);
        assert!(values.x_int_or_string);
    }

    #[test]
    fn test_recursive_type_terminates() {
        let table = TypeTable::from_types([TypeDef::new("a.Node")
            .with_property(Property::new("value", TypeRef::class("int")))
            .with_property(Property::new("next", TypeRef::class("a.Node")))])
        .unwrap();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);
        let builder = SchemaBuilder::new(&ctx);

        let schema = builder.property_schema(&TypeRef::class("a.Node"), &mut Vec::new());
        assert!(schema.is_required("value"));
        assert!(schema.get_nested("next").unwrap().x_preserve_unknown);
    }

    #[test]
    fn test_generic_usage_is_specialized() {
        let table = TypeTable::from_types([TypeDef::new("a.Holder")
            .with_parameters(["T"])
            .with_property(Property::new("held", TypeRef::param("T")))])
        .unwrap();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);
        let builder = SchemaBuilder::new(&ctx);

        let holder = ClassRef::new("a.Holder").with_argument(TypeRef::class("java.lang.String"));
        let schema = builder.property_schema(&holder.into(), &mut Vec::new());
        assert_eq!(schema.get_nested("held").unwrap().type_, PropertyType::String);
    }

    #[test]
    fn test_missing_group() {
        let table = TypeTable::new();
        let registry = TypeRegistry::new();
        let ctx = AnalysisContext::new(&table, &registry);

        let result = SchemaBuilder::new(&ctx).build(&CustomResourceConfig::default(), &TypeDef::new("Bare"));
        assert!(matches!(result, Err(SchemaError::MissingField { field }) if field == "group"));
    }
}
