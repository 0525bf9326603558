//! C# emitter
//!
//! Emits one `.cs` file per node:
//! - value objects as `readonly record struct` with a validating `Create` factory
//! - entities as classes with private setters
//! - aggregates as classes wrapping their root entity
//! - repositories as interfaces under `Application.Ports`
//! - use cases as classes with request/response records
//!
//! Unresolved references never fail emission. Entities and aggregates render
//! a `// Missing ...` comment; use cases drop the dependency.

mod aggregate;
mod entity;
mod repository;
pub mod source;
mod use_case;
mod value_object;

use crate::domain::entities::{Aggregate, Entity, Field, Repository, UseCase, ValueObject};
use crate::domain::ports::CodeEmitter;
use crate::domain::services::pascal;
use crate::domain::value_objects::Primitive;

/// C# code emitter
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpEmitter;

impl CSharpEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl CodeEmitter for CSharpEmitter {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn emit_value_object(&self, value_object: &ValueObject) -> String {
        value_object::emit(value_object)
    }

    fn emit_entity(&self, entity: &Entity, value_objects: &[ValueObject]) -> String {
        entity::emit(entity, value_objects)
    }

    fn emit_aggregate(&self, aggregate: &Aggregate, entities: &[Entity]) -> String {
        aggregate::emit(aggregate, entities)
    }

    fn emit_repository(&self, repository: &Repository) -> String {
        repository::emit(repository)
    }

    fn emit_use_case(&self, use_case: &UseCase, repositories: &[Repository]) -> String {
        use_case::emit(use_case, repositories)
    }
}

/// C# spelling of a primitive
pub(crate) fn type_name(ty: Primitive) -> &'static str {
    match ty {
        Primitive::String => "string",
        Primitive::Int => "int",
        Primitive::Decimal => "decimal",
        Primitive::Guid => "Guid",
        Primitive::DateTime => "DateTime",
        Primitive::Bool => "bool",
    }
}

/// `<type> <PascalName>` as used in positional record members
fn record_member(field: &Field) -> String {
    format!("{} {}", type_name(field.ty), pascal(&field.name))
}
