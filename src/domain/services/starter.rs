//! Starter graph
//!
//! A small ride-sharing design that new projects are seeded with. It is
//! valid: the validator reports nothing for it.

use crate::domain::entities::{
    Aggregate, DomainGraph, Entity, EntityField, Field, GraphMeta, IoShape, Repository,
    RepositoryMethod, UseCase, ValueObject,
};
use crate::domain::value_objects::Primitive;

pub const STARTER_GRAPH_NAME: &str = "Ride Sharing Domain";

pub fn starter_graph() -> DomainGraph {
    DomainGraph {
        value_objects: vec![ValueObject::new(
            "vo-1",
            "Money",
            vec![
                Field::new("Amount", Primitive::Decimal),
                Field::new("Currency", Primitive::String),
            ],
        )],
        entities: vec![Entity::new(
            "entity-1",
            "Ride",
            Primitive::Guid,
            vec![
                EntityField::primitive("PassengerId", Primitive::Guid),
                EntityField::primitive("DriverId", Primitive::Guid),
                EntityField::primitive("Pickup", Primitive::String),
                EntityField::primitive("Dropoff", Primitive::String),
                EntityField::primitive("Status", Primitive::String),
            ],
        )],
        aggregates: vec![Aggregate::new("agg-1", "RideAggregate", "entity-1")
            .with_members(["entity-1"])
            .with_invariants(["Cannot complete ride without driver assigned"])],
        repositories: vec![Repository::new(
            "repo-1",
            "IRideRepository",
            vec![
                RepositoryMethod::new("Save", "Task Save(Ride ride)"),
                RepositoryMethod::new("Get", "Task<Ride?> Get(Guid id)"),
            ],
        )],
        use_cases: vec![UseCase::new(
            "uc-1",
            "RequestRideUseCase",
            IoShape::new("Request", vec![Field::new("PassengerId", Primitive::Guid)]),
            IoShape::new("Response", vec![Field::new("RideId", Primitive::Guid)]),
        )
        .with_repos(["repo-1"])
        .with_writes(["entity-1"])],
        meta: GraphMeta::new(STARTER_GRAPH_NAME),
    }
}
