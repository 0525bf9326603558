//! Snapshot fixtures.

/// The starter graph as a snapshot document
pub fn starter_snapshot() -> String {
    archlab::export_graph(&archlab::starter_graph()).expect("starter graph exports")
}

/// Graph with no nodes
pub const EMPTY_GRAPH: &str = r#"{
  "valueObjects": [],
  "entities": [],
  "aggregates": [],
  "repositories": [],
  "useCases": [],
  "meta": { "name": "Empty", "version": 1 }
}"#;

/// Aggregate whose root entity does not exist
pub const BROKEN_AGGREGATE: &str = r#"{
  "valueObjects": [],
  "entities": [
    { "id": "e-1", "name": "Order", "idType": "Guid", "fields": [] }
  ],
  "aggregates": [
    {
      "id": "agg-1",
      "name": "OrderAggregate",
      "rootEntityId": "nonexistent",
      "entityIds": [],
      "invariants": ["Total is never negative"]
    }
  ],
  "repositories": [],
  "useCases": [],
  "meta": { "name": "Shop", "version": 1 }
}"#;

/// Entity referencing a value object that does not exist
pub const MISSING_VO_ENTITY: &str = r#"{
  "valueObjects": [],
  "entities": [
    {
      "id": "e-1",
      "name": "Driver",
      "idType": "Guid",
      "fields": [
        { "kind": "primitive", "name": "Name", "type": "string" },
        { "kind": "vo", "name": "Rating", "voId": "missing-vo" }
      ]
    }
  ],
  "aggregates": [],
  "repositories": [],
  "useCases": [],
  "meta": { "name": "Fleet", "version": 1 }
}"#;

/// Warning-only graph: an aggregate without invariants
pub const WARNING_ONLY: &str = r#"{
  "entities": [
    { "id": "e-1", "name": "Ride", "idType": "Guid", "fields": [] }
  ],
  "aggregates": [
    {
      "id": "agg-1",
      "name": "RideAggregate",
      "rootEntityId": "e-1",
      "entityIds": ["e-1"],
      "invariants": []
    }
  ],
  "meta": { "name": "Rides", "version": 1 }
}"#;
