//! Graph strategies.
//!
//! `graph()` draws ids from a small pool so that references resolve some of
//! the time and dangle the rest. `well_formed_graph()` only ever references
//! nodes it generated, and never leaves a field, method or invariant list
//! empty.

use proptest::prelude::*;
use proptest::sample::Index;

use archlab::{
    Aggregate, DomainGraph, Entity, EntityField, Field, GraphMeta, IoShape, NodeId, Primitive,
    Repository, RepositoryMethod, UseCase, ValueObject,
};

pub fn node_id() -> impl Strategy<Value = NodeId> {
    prop_oneof![
        (0u8..6).prop_map(|n| NodeId::new(format!("vo-{n}"))),
        (0u8..6).prop_map(|n| NodeId::new(format!("e-{n}"))),
        (0u8..4).prop_map(|n| NodeId::new(format!("agg-{n}"))),
        (0u8..4).prop_map(|n| NodeId::new(format!("repo-{n}"))),
    ]
}

pub fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,11}"
}

pub fn primitive() -> impl Strategy<Value = Primitive> {
    proptest::sample::select(Primitive::ALL.to_vec())
}

fn field() -> impl Strategy<Value = Field> {
    (name(), primitive()).prop_map(|(n, ty)| Field::new(n, ty))
}

fn entity_field() -> impl Strategy<Value = EntityField> {
    prop_oneof![
        (name(), primitive()).prop_map(|(n, ty)| EntityField::primitive(n, ty)),
        (name(), node_id()).prop_map(|(n, id)| EntityField::value_object(n, id)),
    ]
}

fn value_object(index: usize) -> impl Strategy<Value = ValueObject> {
    (name(), prop::collection::vec(field(), 0..4))
        .prop_map(move |(n, fields)| ValueObject::new(format!("vo-{index}"), n, fields))
}

fn entity(index: usize) -> impl Strategy<Value = Entity> {
    (name(), primitive(), prop::collection::vec(entity_field(), 0..4))
        .prop_map(move |(n, id_type, fields)| Entity::new(format!("e-{index}"), n, id_type, fields))
}

fn aggregate(index: usize) -> impl Strategy<Value = Aggregate> {
    (
        name(),
        node_id(),
        prop::collection::vec(node_id(), 0..3),
        prop::collection::vec("[ -~]{0,24}", 0..3),
    )
        .prop_map(move |(n, root, members, invariants)| {
            Aggregate::new(format!("agg-{index}"), n, root)
                .with_members(members)
                .with_invariants(invariants)
        })
}

fn repository(index: usize) -> impl Strategy<Value = Repository> {
    (name(), prop::collection::vec((name(), "[ -~]{0,32}"), 0..3)).prop_map(
        move |(n, methods)| {
            Repository::new(
                format!("repo-{index}"),
                n,
                methods
                    .into_iter()
                    .map(|(m, sig)| RepositoryMethod::new(m, sig))
                    .collect(),
            )
        },
    )
}

fn use_case(index: usize) -> impl Strategy<Value = UseCase> {
    (
        name(),
        prop::collection::vec(field(), 0..3),
        prop::collection::vec(field(), 0..3),
        prop::collection::vec(node_id(), 0..3),
        prop::collection::vec(node_id(), 0..2),
        prop::collection::vec(node_id(), 0..2),
    )
        .prop_map(move |(n, input, output, repos, reads, writes)| {
            UseCase::new(
                format!("uc-{index}"),
                n.clone(),
                IoShape::new(format!("{n}Request"), input),
                IoShape::new(format!("{n}Response"), output),
            )
            .with_repos(repos)
            .with_reads(reads)
            .with_writes(writes)
        })
}

fn indexed<S, F>(max: usize, make: F) -> impl Strategy<Value = Vec<S::Value>>
where
    S: Strategy + 'static,
    F: Fn(usize) -> S + Clone + 'static,
{
    (0..=max).prop_flat_map(move |len| {
        let make = make.clone();
        (0..len).map(make).collect::<Vec<_>>()
    })
}

pub fn graph() -> impl Strategy<Value = DomainGraph> {
    (
        indexed(4, value_object),
        indexed(4, entity),
        indexed(3, aggregate),
        indexed(3, repository),
        indexed(3, use_case),
        name(),
        1u32..10,
    )
        .prop_map(
            |(value_objects, entities, aggregates, repositories, use_cases, n, version)| {
                DomainGraph {
                    value_objects,
                    entities,
                    aggregates,
                    repositories,
                    use_cases,
                    meta: GraphMeta { name: n, version },
                }
            },
        )
}

pub fn well_formed_graph() -> impl Strategy<Value = DomainGraph> {
    (1usize..=4, 1usize..=4, 0usize..=3, 1usize..=3, 0usize..=3).prop_flat_map(
        |(vos, entities, aggs, repos, ucs)| {
            let entity_id = move |i: &Index| format!("e-{}", i.index(entities));
            let repo_id = move |i: &Index| format!("repo-{}", i.index(repos));
            // Reads and writes may target any entity or aggregate
            let target_id = move |i: &Index| {
                let n = i.index(entities + aggs);
                if n < entities {
                    format!("e-{n}")
                } else {
                    format!("agg-{}", n - entities)
                }
            };

            let value_objects: Vec<_> = (0..vos)
                .map(|i| {
                    (name(), prop::collection::vec(field(), 1..4))
                        .prop_map(move |(n, f)| ValueObject::new(format!("vo-{i}"), n, f))
                })
                .collect();

            let entity_list: Vec<_> = (0..entities)
                .map(|i| {
                    let fields = prop::collection::vec(
                        (name(), primitive(), any::<bool>(), any::<Index>()).prop_map(
                            move |(n, ty, is_vo, vo)| {
                                if is_vo {
                                    EntityField::value_object(n, format!("vo-{}", vo.index(vos)))
                                } else {
                                    EntityField::primitive(n, ty)
                                }
                            },
                        ),
                        0..4,
                    );
                    (name(), primitive(), fields).prop_map(move |(n, id_type, fields)| {
                        Entity::new(format!("e-{i}"), n, id_type, fields)
                    })
                })
                .collect();

            let aggregates: Vec<_> = (0..aggs)
                .map(|i| {
                    (
                        name(),
                        any::<Index>(),
                        prop::collection::vec(any::<Index>(), 0..3),
                        prop::collection::vec("[ -~]{1,24}", 1..3),
                    )
                        .prop_map(move |(n, root, members, invariants)| {
                            Aggregate::new(format!("agg-{i}"), n, entity_id(&root))
                                .with_members(members.iter().map(entity_id))
                                .with_invariants(invariants)
                        })
                })
                .collect();

            let repositories: Vec<_> = (0..repos)
                .map(|i| {
                    (name(), prop::collection::vec((name(), "[ -~]{0,32}"), 1..3)).prop_map(
                        move |(n, methods)| {
                            Repository::new(
                                format!("repo-{i}"),
                                n,
                                methods
                                    .into_iter()
                                    .map(|(m, sig)| RepositoryMethod::new(m, sig))
                                    .collect(),
                            )
                        },
                    )
                })
                .collect();

            let use_cases: Vec<_> = (0..ucs)
                .map(|i| {
                    (
                        name(),
                        prop::collection::vec(field(), 0..3),
                        prop::collection::vec(field(), 0..3),
                        prop::collection::vec(any::<Index>(), 0..3),
                        prop::collection::vec(any::<Index>(), 0..2),
                        prop::collection::vec(any::<Index>(), 0..2),
                    )
                        .prop_map(move |(n, input, output, deps, reads, writes)| {
                            UseCase::new(
                                format!("uc-{i}"),
                                n.clone(),
                                IoShape::new(format!("{n}Request"), input),
                                IoShape::new(format!("{n}Response"), output),
                            )
                            .with_repos(deps.iter().map(repo_id))
                            .with_reads(reads.iter().map(target_id))
                            .with_writes(writes.iter().map(target_id))
                        })
                })
                .collect();

            (
                value_objects,
                entity_list,
                aggregates,
                repositories,
                use_cases,
                name(),
            )
                .prop_map(
                    |(value_objects, entities, aggregates, repositories, use_cases, n)| {
                        DomainGraph {
                            value_objects,
                            entities,
                            aggregates,
                            repositories,
                            use_cases,
                            meta: GraphMeta { name: n, version: 1 },
                        }
                    },
                )
        },
    )
}
