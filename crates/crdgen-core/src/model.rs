//! Type graph model
//!
//! Immutable snapshots of type metadata: definitions, references, properties
//! and annotations. These carry no behavior beyond construction helpers and
//! accessors; the analysis lives in [`crate::context::AnalysisContext`].
//!
//! Types are identified by their fully-qualified name. Edges (`extends`,
//! `implements`) point at their target by name and carry the type arguments
//! bound at that point in the graph.

use serde::Deserialize;

/// A definition of a class or interface
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    /// Owning package (e.g., "io.example.model"), empty for the default package
    #[serde(default)]
    pub package: String,
    /// Simple name (e.g., "Recipe")
    pub name: String,
    /// Generic type parameter names, in declaration order
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Declared properties, in declaration order
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Superclass edges
    #[serde(default)]
    pub extends: Vec<ClassRef>,
    /// Interface edges
    #[serde(default)]
    pub implements: Vec<ClassRef>,
    /// Annotations attached to the type itself
    #[serde(default)]
    pub annotations: Vec<AnnotationRef>,
}

impl TypeDef {
    /// Create an empty definition from a fully-qualified name
    pub fn new(fully_qualified_name: impl AsRef<str>) -> Self {
        let (package, name) = split_qualified(fully_qualified_name.as_ref());
        Self {
            package: package.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Fully-qualified name, the identity of this definition
    pub fn fully_qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_extends(mut self, superclass: ClassRef) -> Self {
        self.extends.push(superclass);
        self
    }

    pub fn with_implements(mut self, interface: ClassRef) -> Self {
        self.implements.push(interface);
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Get a declared property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Reference to this type, without type arguments
    pub fn to_reference(&self) -> TypeRef {
        TypeRef::Class(ClassRef::new(self.fully_qualified_name()))
    }
}

/// Reference to a type as it appears in a declaration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    /// Bare generic parameter (e.g., `T`), unbound
    Param(TypeParamRef),
    /// Concrete class, possibly with bound arguments
    Class(ClassRef),
}

impl TypeRef {
    /// Concrete reference without arguments
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(ClassRef::new(name))
    }

    /// Parameter reference
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(TypeParamRef { param: name.into() })
    }

    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Self::Class(c) => Some(c),
            Self::Param(_) => None,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }
}

impl From<ClassRef> for TypeRef {
    fn from(class: ClassRef) -> Self {
        Self::Class(class)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Param(p) => write!(f, "{}", p.param),
            Self::Class(c) => write!(f, "{}", c),
        }
    }
}

/// Generic type parameter reference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeParamRef {
    pub param: String,
}

/// Concrete class reference with positional type arguments
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassRef {
    /// Fully-qualified name of the referenced definition
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<TypeRef>,
}

impl ClassRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: TypeRef) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Simple (unqualified) name of the referenced type
    pub fn simple_name(&self) -> &str {
        split_qualified(&self.name).1
    }

    /// Package of the referenced type
    pub fn package(&self) -> &str {
        split_qualified(&self.name).0
    }
}

impl std::fmt::Display for ClassRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            let args: Vec<String> = self.arguments.iter().map(ToString::to_string).collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        Ok(())
    }
}

/// A declared property
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub annotations: Vec<AnnotationRef>,
}

impl Property {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationRef) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Check if an annotation with the given fully-qualified name is attached
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name == name)
    }
}

/// Marker annotation, identified by fully-qualified name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AnnotationRef {
    pub name: String,
}

impl AnnotationRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Split "a.b.C" into ("a.b", "C")
fn split_qualified(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}
