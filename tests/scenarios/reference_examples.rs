//! Scenario: the reference examples every implementation must reproduce.
//!
//! A. A Money value object becomes `/Domain/ValueObjects/Money.cs` with
//!    guards and a factory.
//! B. An aggregate with a dangling root is an error on the aggregate.
//! C. An entity referencing a missing value object is an error on the entity.
//! D. An empty graph validates clean and generates nothing.

use archlab::{
    generate_all_code, import_graph, validate, Aggregate, CSharpEmitter, DomainGraph, Entity,
    EntityField, Field, NodeId, Primitive, Severity, ValueObject,
};

use crate::common::EMPTY_GRAPH;

#[test]
fn scenario_a_money_value_object() {
    let mut graph = DomainGraph::new("Payments");
    graph.value_objects.push(ValueObject::new(
        "vo-1",
        "Money",
        vec![
            Field::new("Amount", Primitive::Decimal),
            Field::new("Currency", Primitive::String),
        ],
    ));

    let files = generate_all_code(&graph, &CSharpEmitter::new());

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "/Domain/ValueObjects/Money.cs");
    let code = &files[0].content;
    assert!(code.contains("if (amount < 0) throw new ArgumentException(\"Amount cannot be negative\");"));
    assert!(code.contains(
        "if (string.IsNullOrWhiteSpace(currency)) throw new ArgumentException(\"Currency is required\");"
    ));
    assert!(code.contains("public static Money Create(decimal amount, string currency)"));
    assert!(code.contains("return new Money(amount, currency);"));
}

#[test]
fn scenario_b_aggregate_with_missing_root() {
    let mut graph = DomainGraph::new("Shop");
    graph.aggregates.push(
        Aggregate::new("agg-1", "OrderAggregate", "nonexistent").with_invariants(["Total >= 0"]),
    );

    let findings = validate(&graph);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].node_id, NodeId::new("agg-1"));
    assert_eq!(findings[0].severity, Severity::Error);
    assert!(findings[0].message.contains("root entity"));
}

#[test]
fn scenario_c_entity_with_missing_value_object() {
    let mut graph = DomainGraph::new("Fleet");
    graph.entities.push(Entity::new(
        "e-1",
        "Driver",
        Primitive::Guid,
        vec![EntityField::value_object("Rating", "missing-vo")],
    ));

    let findings = validate(&graph);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].node_id, NodeId::new("e-1"));
    assert_eq!(findings[0].severity, Severity::Error);
}

#[test]
fn scenario_d_empty_graph() {
    let graph = import_graph(EMPTY_GRAPH).unwrap();

    assert!(validate(&graph).is_empty());
    assert!(generate_all_code(&graph, &CSharpEmitter::new()).is_empty());
}
