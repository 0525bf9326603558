//! Graph validator
//!
//! Checks referential integrity and modeling heuristics across all five
//! collections. Findings come back in a fixed order: aggregates, use cases,
//! entities, value objects, repositories, each in collection order. No check
//! short-circuits another.

use std::collections::HashSet;

use crate::domain::entities::DomainGraph;
use crate::domain::value_objects::{Finding, NodeId, Severity};

/// Validate `graph` and return every finding
pub fn validate(graph: &DomainGraph) -> Vec<Finding> {
    let index = IdIndex::new(graph);
    let mut findings = Vec::new();

    check_aggregates(graph, &index, &mut findings);
    check_use_cases(graph, &index, &mut findings);
    check_entities(graph, &index, &mut findings);
    check_value_objects(graph, &mut findings);
    check_repositories(graph, &mut findings);

    findings
}

struct IdIndex<'a> {
    value_objects: HashSet<&'a NodeId>,
    entities: HashSet<&'a NodeId>,
    aggregates: HashSet<&'a NodeId>,
    repositories: HashSet<&'a NodeId>,
}

impl<'a> IdIndex<'a> {
    fn new(graph: &'a DomainGraph) -> Self {
        Self {
            value_objects: graph.value_objects.iter().map(|v| &v.id).collect(),
            entities: graph.entities.iter().map(|e| &e.id).collect(),
            aggregates: graph.aggregates.iter().map(|a| &a.id).collect(),
            repositories: graph.repositories.iter().map(|r| &r.id).collect(),
        }
    }
}

fn check_aggregates(graph: &DomainGraph, index: &IdIndex<'_>, findings: &mut Vec<Finding>) {
    for agg in &graph.aggregates {
        if !index.entities.contains(&agg.root_entity_id) {
            findings.push(Finding::error(
                &agg.id,
                "Aggregate must have a valid root entity",
            ));
        }

        for entity_id in &agg.entity_ids {
            if !index.entities.contains(entity_id) {
                findings.push(Finding::error(
                    &agg.id,
                    format!("Entity {} not found in aggregate", entity_id),
                ));
            }
        }

        if agg.invariants.is_empty() {
            findings.push(Finding::warning(
                &agg.id,
                "Aggregate should define at least one invariant",
            ));
        }
    }
}

fn check_use_cases(graph: &DomainGraph, index: &IdIndex<'_>, findings: &mut Vec<Finding>) {
    for uc in &graph.use_cases {
        for repo_id in &uc.repo_ids {
            if !index.repositories.contains(repo_id) {
                findings.push(Finding::error(
                    &uc.id,
                    format!("Repository {} not found", repo_id),
                ));
            }
        }

        for target in uc.targets() {
            if !index.entities.contains(target) && !index.aggregates.contains(target) {
                findings.push(Finding::error(
                    &uc.id,
                    format!("Target {} not found", target),
                ));
            }
        }
    }
}

fn check_entities(graph: &DomainGraph, index: &IdIndex<'_>, findings: &mut Vec<Finding>) {
    for entity in &graph.entities {
        for field in &entity.fields {
            if let Some(vo_id) = field.vo_id() {
                if !index.value_objects.contains(vo_id) {
                    findings.push(Finding::error(
                        &entity.id,
                        format!(
                            "Value Object {} not found for field {}",
                            vo_id,
                            field.name()
                        ),
                    ));
                }
            }
        }
    }
}

fn check_value_objects(graph: &DomainGraph, findings: &mut Vec<Finding>) {
    for vo in &graph.value_objects {
        if vo.fields.is_empty() {
            findings.push(Finding::warning(
                &vo.id,
                "Value Object should have at least one field",
            ));
        }
    }
}

fn check_repositories(graph: &DomainGraph, findings: &mut Vec<Finding>) {
    for repo in &graph.repositories {
        if repo.methods.is_empty() {
            findings.push(Finding::warning(
                &repo.id,
                "Repository should define at least one method",
            ));
        }
    }
}

/// Findings plus the summaries callers usually want
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn of(graph: &DomainGraph) -> Self {
        Self {
            findings: validate(graph),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether any finding is at least as severe as `threshold`
    pub fn fails(&self, threshold: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= threshold)
    }

    pub fn for_node<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| &f.node_id == id)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}
