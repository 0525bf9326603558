//! Validator properties.

use proptest::prelude::*;

use archlab::{validate, Severity, ValidationReport};

use super::strategies::{graph, well_formed_graph};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every finding is attached to a node that exists in the graph.
    #[test]
    fn property_findings_point_at_existing_nodes(g in graph()) {
        for finding in validate(&g) {
            prop_assert!(
                g.node_kind(&finding.node_id).is_some(),
                "finding for unknown node {}", finding.node_id
            );
        }
    }

    /// PROPERTY: validation is a pure function of the graph.
    #[test]
    fn property_validation_is_deterministic(g in graph()) {
        prop_assert_eq!(validate(&g), validate(&g));
    }

    /// PROPERTY: report counts partition the findings.
    #[test]
    fn property_report_counts_add_up(g in graph()) {
        let report = ValidationReport::of(&g);
        prop_assert_eq!(report.error_count() + report.warning_count(), report.findings.len());
        prop_assert_eq!(report.fails(Severity::Warning), !report.is_clean());
        prop_assert_eq!(report.fails(Severity::Error), report.error_count() > 0);
    }

    /// PROPERTY: removing every aggregate and use case leaves only
    /// entity errors and warnings.
    #[test]
    fn property_only_entities_reference_value_objects(g in graph()) {
        let mut trimmed = g.clone();
        trimmed.aggregates.clear();
        trimmed.use_cases.clear();
        for finding in validate(&trimmed) {
            if finding.severity == Severity::Error {
                prop_assert!(trimmed.entities.iter().any(|e| e.id == finding.node_id));
            }
        }
    }

    /// PROPERTY: a graph whose references all resolve and whose lists are
    /// all non-empty has no findings.
    #[test]
    fn property_well_formed_graph_is_clean(g in well_formed_graph()) {
        let findings = validate(&g);
        prop_assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    }

    /// PROPERTY: every aggregate whose root is not an entity gets a
    /// "root entity" error on its own id.
    #[test]
    fn property_unresolved_root_is_an_error(g in graph()) {
        let findings = validate(&g);
        for agg in &g.aggregates {
            if g.entity(&agg.root_entity_id).is_none() {
                prop_assert!(
                    findings.iter().any(|f| f.node_id == agg.id
                        && f.severity == Severity::Error
                        && f.message.contains("root entity")),
                    "no root error for {}", agg.id
                );
            }
        }
    }

    /// PROPERTY: an aggregate gets exactly one invariant warning when it has
    /// no invariants, and none otherwise.
    #[test]
    fn property_empty_invariants_warn_once(g in graph()) {
        let findings = validate(&g);
        for agg in &g.aggregates {
            let warnings = findings
                .iter()
                .filter(|f| f.node_id == agg.id
                    && f.severity == Severity::Warning
                    && f.message.contains("invariant"))
                .count();
            let expected = usize::from(agg.invariants.is_empty());
            prop_assert_eq!(warnings, expected, "aggregate {}", agg.id);
        }
    }
}
