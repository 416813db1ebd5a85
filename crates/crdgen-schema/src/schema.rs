//! Structural CRD schema representation
//!
//! In-memory types describing the schema derived from a typed object model.
//! Rendering them into YAML or JSON is left to the caller.

use std::collections::BTreeMap;

/// A derived CustomResourceDefinition
#[derive(Debug, Clone, PartialEq)]
pub struct CrdDefinition {
    /// Full CRD name (e.g., "gizmos.example.io")
    pub name: String,
    /// API group (e.g., "example.io")
    pub group: String,
    /// API version (e.g., "v1")
    pub version: String,
    /// Resource scope
    pub scope: CrdScope,
    /// Resource names
    pub names: CrdNames,
    /// OpenAPI v3 schema of the resource
    pub schema: OpenApiSchema,
    /// Subresources configuration
    pub subresources: Subresources,
}

impl CrdDefinition {
    /// Get the root spec schema if present
    pub fn spec_schema(&self) -> Option<&SchemaProperty> {
        self.schema.properties.get("spec")
    }

    /// Get the root status schema if present
    pub fn status_schema(&self) -> Option<&SchemaProperty> {
        self.schema.properties.get("status")
    }
}

/// CRD scope - whether resources are namespaced or cluster-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrdScope {
    #[default]
    Namespaced,
    Cluster,
}

impl std::fmt::Display for CrdScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Namespaced => write!(f, "Namespaced"),
            Self::Cluster => write!(f, "Cluster"),
        }
    }
}

/// CRD naming information
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrdNames {
    /// Kind (e.g., "Gizmo")
    pub kind: String,
    /// Plural name (e.g., "gizmos")
    pub plural: String,
    /// Singular name (e.g., "gizmo")
    pub singular: String,
}

/// OpenAPI v3 schema at the root of a resource
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenApiSchema {
    /// Root properties (typically: spec, status)
    pub properties: BTreeMap<String, SchemaProperty>,
    /// Required field names at root level
    pub required: Vec<String>,
}

impl OpenApiSchema {
    /// Check if a property exists at root level
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Check if a property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Schema for a single property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaProperty {
    /// Property type
    pub type_: PropertyType,
    /// Alternative schemas (e.g., integer or string)
    pub any_of: Option<Vec<SchemaProperty>>,
    /// Nested object properties
    pub properties: Option<BTreeMap<String, SchemaProperty>>,
    /// Required nested properties
    pub required: Option<Vec<String>>,
    /// Array item schema
    pub items: Option<Box<SchemaProperty>>,
    /// Schema every additional (map) value must match
    pub additional_properties: Option<Box<SchemaProperty>>,
    /// Preserve unknown fields
    pub x_preserve_unknown: bool,
    /// Integer or string (for ports, quantities, etc.)
    pub x_int_or_string: bool,
}

impl SchemaProperty {
    /// Create a simple string property
    pub fn string() -> Self {
        Self {
            type_: PropertyType::String,
            ..Default::default()
        }
    }

    /// Create a simple integer property
    pub fn integer() -> Self {
        Self {
            type_: PropertyType::Integer,
            ..Default::default()
        }
    }

    /// Create a simple number property
    pub fn number() -> Self {
        Self {
            type_: PropertyType::Number,
            ..Default::default()
        }
    }

    /// Create a simple boolean property
    pub fn boolean() -> Self {
        Self {
            type_: PropertyType::Boolean,
            ..Default::default()
        }
    }

    /// Create an object property with nested properties
    pub fn object(properties: BTreeMap<String, SchemaProperty>, required: Vec<String>) -> Self {
        Self {
            type_: PropertyType::Object,
            properties: Some(properties),
            required: (!required.is_empty()).then_some(required),
            ..Default::default()
        }
    }

    /// Create an array property with item schema
    pub fn array(items: SchemaProperty) -> Self {
        Self {
            type_: PropertyType::Array,
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// Create a map property whose values follow `values`
    pub fn map(values: SchemaProperty) -> Self {
        Self {
            type_: PropertyType::Object,
            additional_properties: Some(Box::new(values)),
            ..Default::default()
        }
    }

    /// Create an integer-or-string property with both branches spelled out
    pub fn int_or_string() -> Self {
        Self {
            type_: PropertyType::AnyOf,
            any_of: Some(vec![Self::integer(), Self::string()]),
            x_int_or_string: true,
            ..Default::default()
        }
    }

    /// Create an object that accepts any content
    pub fn preserve_unknown() -> Self {
        Self {
            type_: PropertyType::Object,
            x_preserve_unknown: true,
            ..Default::default()
        }
    }

    /// Check if this property has nested properties
    pub fn has_nested_properties(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Get a nested property by path (dot-separated)
    pub fn get_nested(&self, path: &str) -> Option<&SchemaProperty> {
        let mut current = self;
        for part in path.split('.') {
            current = current.properties.as_ref()?.get(part)?;
        }
        Some(current)
    }

    /// Check if a nested property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }
}

/// Property type in OpenAPI schema
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    #[default]
    Object,
    /// No single type; the alternatives live in `any_of`
    AnyOf,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::AnyOf => write!(f, "anyOf"),
        }
    }
}

/// Subresources configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Subresources {
    /// Whether status subresource is enabled
    pub status: bool,
}
