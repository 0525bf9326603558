//! CodeEmitter port
//!
//! One emission function per building-block kind. Emitters are pure: they
//! never validate and never fail. Unresolved references are rendered however
//! the target language's templates dictate.

use crate::domain::entities::{Aggregate, Entity, Repository, UseCase, ValueObject};
use crate::domain::value_objects::NodeKind;

/// Renders graph nodes as source text for one target language
pub trait CodeEmitter: Send + Sync {
    /// Human-readable language name
    fn language(&self) -> &'static str;

    /// Conventional source extension, without the dot
    fn file_extension(&self) -> &'static str;

    fn emit_value_object(&self, value_object: &ValueObject) -> String;

    /// `value_objects` resolves `vo` fields
    fn emit_entity(&self, entity: &Entity, value_objects: &[ValueObject]) -> String;

    /// `entities` resolves the root entity
    fn emit_aggregate(&self, aggregate: &Aggregate, entities: &[Entity]) -> String;

    fn emit_repository(&self, repository: &Repository) -> String;

    /// `repositories` resolves dependencies
    fn emit_use_case(&self, use_case: &UseCase, repositories: &[Repository]) -> String;

    /// Output path for a node of `kind` named `name`
    ///
    /// The name is used verbatim.
    fn path_for(&self, kind: NodeKind, name: &str) -> String {
        format!("{}/{}.{}", kind_directory(kind), name, self.file_extension())
    }
}

/// Directory each kind is emitted under
pub fn kind_directory(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::ValueObject => "/Domain/ValueObjects",
        NodeKind::Entity => "/Domain/Entities",
        NodeKind::Aggregate => "/Domain/Aggregates",
        NodeKind::Repository => "/Application/Ports",
        NodeKind::UseCase => "/Application/UseCases",
    }
}
