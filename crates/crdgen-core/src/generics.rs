//! Generic type argument substitution
//!
//! Specializing `Base<T>` through an edge `extends Base<Widget>` yields a copy
//! of `Base` where every property declared as `T` is declared as `Widget`.
//! Only properties whose declared type is the bare parameter are rewritten;
//! a property of type `List<T>` is left as is. Edge arguments that are bare
//! parameters are rewritten too, so `Middle<U> extends Base<U>` reached as
//! `Middle<Widget>` forwards `Widget` to `Base`.

use std::collections::HashMap;

use crate::model::{TypeDef, TypeRef};

/// Produce a copy of `definition` with its parameters bound positionally to `arguments`
pub fn apply_type_arguments(definition: &TypeDef, arguments: &[TypeRef]) -> TypeDef {
    if definition.parameters.len() != arguments.len() {
        tracing::warn!(
            "Type {} declares {} parameter(s) but {} argument(s) were bound",
            definition.fully_qualified_name(),
            definition.parameters.len(),
            arguments.len()
        );
    }

    let bounds: HashMap<&str, &TypeRef> = definition
        .parameters
        .iter()
        .map(String::as_str)
        .zip(arguments)
        .collect();

    let mut specialized = definition.clone();
    for property in &mut specialized.properties {
        bind(&mut property.type_ref, &bounds);
    }
    for edge in specialized.extends.iter_mut().chain(&mut specialized.implements) {
        for argument in &mut edge.arguments {
            bind(argument, &bounds);
        }
    }
    specialized
}

fn bind(type_ref: &mut TypeRef, bounds: &HashMap<&str, &TypeRef>) {
    let bound = match &*type_ref {
        TypeRef::Param(param) => bounds.get(param.param.as_str()).copied(),
        TypeRef::Class(_) => None,
    };
    if let Some(bound) = bound {
        *type_ref = bound.clone();
    }
}
