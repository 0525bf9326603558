//! Whole-graph code generation
//!
//! Walks the collections in fixed order (value objects, entities, aggregates,
//! repositories, use cases) and pairs each node's path with its emitted
//! content. Paths are not deduplicated: two nodes with the same kind and
//! name produce two files with the same path.

use crate::domain::entities::{DomainGraph, GeneratedFile};
use crate::domain::ports::CodeEmitter;
use crate::domain::value_objects::NodeKind;

pub fn generate_all_code(graph: &DomainGraph, emitter: &dyn CodeEmitter) -> Vec<GeneratedFile> {
    let mut files = Vec::with_capacity(graph.node_count());

    for vo in &graph.value_objects {
        files.push(GeneratedFile::new(
            emitter.path_for(NodeKind::ValueObject, &vo.name),
            emitter.emit_value_object(vo),
        ));
    }

    for entity in &graph.entities {
        files.push(GeneratedFile::new(
            emitter.path_for(NodeKind::Entity, &entity.name),
            emitter.emit_entity(entity, &graph.value_objects),
        ));
    }

    for agg in &graph.aggregates {
        files.push(GeneratedFile::new(
            emitter.path_for(NodeKind::Aggregate, &agg.name),
            emitter.emit_aggregate(agg, &graph.entities),
        ));
    }

    for repo in &graph.repositories {
        files.push(GeneratedFile::new(
            emitter.path_for(NodeKind::Repository, &repo.name),
            emitter.emit_repository(repo),
        ));
    }

    for uc in &graph.use_cases {
        files.push(GeneratedFile::new(
            emitter.path_for(NodeKind::UseCase, &uc.name),
            emitter.emit_use_case(uc, &graph.repositories),
        ));
    }

    files
}

/// Paths that occur more than once, in first-occurrence order
pub fn duplicate_paths(files: &[GeneratedFile]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for file in files {
        if !seen.insert(file.path.as_str()) && !duplicates.contains(&file.path.as_str()) {
            duplicates.push(file.path.as_str());
        }
    }
    duplicates
}
