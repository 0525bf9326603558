//! DomainGraph entity - the whole user design
//!
//! The graph is plain data. Every mutation takes `&self` and returns a new
//! graph with the affected collection replaced, so a snapshot handed to the
//! validator or an emitter can never change underneath it.

use serde::{Deserialize, Serialize};

use super::{Aggregate, Entity, Repository, UseCase, ValueObject};
use crate::domain::services::IdGenerator;
use crate::domain::value_objects::{Edge, EdgeKind, NodeId, NodeKind};

/// Name given to graphs created from scratch
pub const DEFAULT_GRAPH_NAME: &str = "Untitled Project";

/// Snapshot metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMeta {
    pub name: String,
    #[serde(default = "first_version")]
    pub version: u32,
}

fn first_version() -> u32 {
    1
}

impl GraphMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: first_version(),
        }
    }
}

/// The five building-block collections plus metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainGraph {
    #[serde(default)]
    pub value_objects: Vec<ValueObject>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub aggregates: Vec<Aggregate>,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    pub meta: GraphMeta,
}

impl Default for DomainGraph {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

/// Anything stored in one of the graph collections
trait Node: Clone {
    fn id(&self) -> &NodeId;
    fn set_id(&mut self, id: NodeId);
}

macro_rules! impl_node {
    ($($ty:ty),*) => {
        $(
            impl Node for $ty {
                fn id(&self) -> &NodeId {
                    &self.id
                }

                fn set_id(&mut self, id: NodeId) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_node!(ValueObject, Entity, Aggregate, Repository, UseCase);

fn appended<T: Node>(items: &[T], mut draft: T, id: NodeId) -> Vec<T> {
    draft.set_id(id);
    let mut next = items.to_vec();
    next.push(draft);
    next
}

fn patched<T: Node>(items: &[T], id: &NodeId, patch: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|item| item.id() == id) {
        patch(item);
        // Identity survives any patch
        item.set_id(id.clone());
    }
    next
}

fn without<T: Node>(items: &[T], id: &NodeId) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

fn find<'a, T: Node>(items: &'a [T], id: &NodeId) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

impl DomainGraph {
    /// Create an empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            value_objects: Vec::new(),
            entities: Vec::new(),
            aggregates: Vec::new(),
            repositories: Vec::new(),
            use_cases: Vec::new(),
            meta: GraphMeta::new(name),
        }
    }

    // === Lookups ===

    pub fn value_object(&self, id: &NodeId) -> Option<&ValueObject> {
        find(&self.value_objects, id)
    }

    pub fn entity(&self, id: &NodeId) -> Option<&Entity> {
        find(&self.entities, id)
    }

    pub fn aggregate(&self, id: &NodeId) -> Option<&Aggregate> {
        find(&self.aggregates, id)
    }

    pub fn repository(&self, id: &NodeId) -> Option<&Repository> {
        find(&self.repositories, id)
    }

    pub fn use_case(&self, id: &NodeId) -> Option<&UseCase> {
        find(&self.use_cases, id)
    }

    /// Which collection holds `id`, searched in emission order
    pub fn node_kind(&self, id: &NodeId) -> Option<NodeKind> {
        if self.value_object(id).is_some() {
            Some(NodeKind::ValueObject)
        } else if self.entity(id).is_some() {
            Some(NodeKind::Entity)
        } else if self.aggregate(id).is_some() {
            Some(NodeKind::Aggregate)
        } else if self.repository(id).is_some() {
            Some(NodeKind::Repository)
        } else if self.use_case(id).is_some() {
            Some(NodeKind::UseCase)
        } else {
            None
        }
    }

    /// Name of the node with `id`, whatever its kind
    pub fn node_name(&self, id: &NodeId) -> Option<&str> {
        let name = match self.node_kind(id)? {
            NodeKind::ValueObject => &self.value_object(id)?.name,
            NodeKind::Entity => &self.entity(id)?.name,
            NodeKind::Aggregate => &self.aggregate(id)?.name,
            NodeKind::Repository => &self.repository(id)?.name,
            NodeKind::UseCase => &self.use_case(id)?.name,
        };
        Some(name.as_str())
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        match kind {
            NodeKind::ValueObject => self.value_objects.len(),
            NodeKind::Entity => self.entities.len(),
            NodeKind::Aggregate => self.aggregates.len(),
            NodeKind::Repository => self.repositories.len(),
            NodeKind::UseCase => self.use_cases.len(),
        }
    }

    pub fn node_count(&self) -> usize {
        NodeKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    // === Additions ===
    //
    // The draft's own id is discarded; a fresh one comes from `ids`.

    pub fn with_value_object(
        &self,
        draft: ValueObject,
        ids: &mut dyn IdGenerator,
    ) -> (Self, NodeId) {
        let id = ids.next_id();
        let graph = Self {
            value_objects: appended(&self.value_objects, draft, id.clone()),
            ..self.clone()
        };
        (graph, id)
    }

    pub fn with_entity(&self, draft: Entity, ids: &mut dyn IdGenerator) -> (Self, NodeId) {
        let id = ids.next_id();
        let graph = Self {
            entities: appended(&self.entities, draft, id.clone()),
            ..self.clone()
        };
        (graph, id)
    }

    pub fn with_aggregate(&self, draft: Aggregate, ids: &mut dyn IdGenerator) -> (Self, NodeId) {
        let id = ids.next_id();
        let graph = Self {
            aggregates: appended(&self.aggregates, draft, id.clone()),
            ..self.clone()
        };
        (graph, id)
    }

    pub fn with_repository(
        &self,
        draft: Repository,
        ids: &mut dyn IdGenerator,
    ) -> (Self, NodeId) {
        let id = ids.next_id();
        let graph = Self {
            repositories: appended(&self.repositories, draft, id.clone()),
            ..self.clone()
        };
        (graph, id)
    }

    pub fn with_use_case(&self, draft: UseCase, ids: &mut dyn IdGenerator) -> (Self, NodeId) {
        let id = ids.next_id();
        let graph = Self {
            use_cases: appended(&self.use_cases, draft, id.clone()),
            ..self.clone()
        };
        (graph, id)
    }

    // === Updates ===
    //
    // Unknown ids leave the graph unchanged.

    pub fn updating_value_object(&self, id: &NodeId, patch: impl FnOnce(&mut ValueObject)) -> Self {
        Self {
            value_objects: patched(&self.value_objects, id, patch),
            ..self.clone()
        }
    }

    pub fn updating_entity(&self, id: &NodeId, patch: impl FnOnce(&mut Entity)) -> Self {
        Self {
            entities: patched(&self.entities, id, patch),
            ..self.clone()
        }
    }

    pub fn updating_aggregate(&self, id: &NodeId, patch: impl FnOnce(&mut Aggregate)) -> Self {
        Self {
            aggregates: patched(&self.aggregates, id, patch),
            ..self.clone()
        }
    }

    pub fn updating_repository(&self, id: &NodeId, patch: impl FnOnce(&mut Repository)) -> Self {
        Self {
            repositories: patched(&self.repositories, id, patch),
            ..self.clone()
        }
    }

    pub fn updating_use_case(&self, id: &NodeId, patch: impl FnOnce(&mut UseCase)) -> Self {
        Self {
            use_cases: patched(&self.use_cases, id, patch),
            ..self.clone()
        }
    }

    /// Remove the node with `id` from whichever collection holds it
    ///
    /// References to the removed node are left in place; they surface as
    /// validator findings.
    pub fn without_node(&self, id: &NodeId) -> Self {
        Self {
            value_objects: without(&self.value_objects, id),
            entities: without(&self.entities, id),
            aggregates: without(&self.aggregates, id),
            repositories: without(&self.repositories, id),
            use_cases: without(&self.use_cases, id),
            meta: self.meta.clone(),
        }
    }

    /// Relationship edges, including ones pointing at missing nodes
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();

        for entity in &self.entities {
            for vo_id in entity.referenced_value_objects() {
                edges.push(Edge::new(vo_id, &entity.id, EdgeKind::HasField));
            }
        }

        for agg in &self.aggregates {
            edges.push(Edge::new(&agg.root_entity_id, &agg.id, EdgeKind::Root));
            for member in agg.entity_ids.iter().filter(|id| **id != agg.root_entity_id) {
                edges.push(Edge::new(member, &agg.id, EdgeKind::Member));
            }
        }

        for uc in &self.use_cases {
            for repo_id in &uc.repo_ids {
                edges.push(Edge::new(repo_id, &uc.id, EdgeKind::UsesRepo));
            }
            for target in &uc.reads {
                edges.push(Edge::new(&uc.id, target, EdgeKind::Reads));
            }
            for target in &uc.writes {
                edges.push(Edge::new(&uc.id, target, EdgeKind::Writes));
            }
        }

        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EntityField, Field, IoShape, RepositoryMethod};
    use crate::domain::services::SequentialIdGenerator;
    use crate::domain::value_objects::Primitive;

    fn money() -> ValueObject {
        ValueObject::new(
            "",
            "Money",
            vec![
                Field::new("Amount", Primitive::Decimal),
                Field::new("Currency", Primitive::String),
            ],
        )
    }

    #[test]
    fn new_graph_is_empty_with_version_one() {
        let graph = DomainGraph::default();

        assert!(graph.is_empty());
        assert_eq!(graph.meta.name, DEFAULT_GRAPH_NAME);
        assert_eq!(graph.meta.version, 1);
    }

    #[test]
    fn add_assigns_fresh_ids_and_keeps_receiver() {
        let mut ids = SequentialIdGenerator::new();
        let empty = DomainGraph::new("Test");

        let (one, first) = empty.with_value_object(money(), &mut ids);
        let (two, second) = one.with_value_object(money(), &mut ids);

        assert!(empty.is_empty());
        assert_eq!(one.value_objects.len(), 1);
        assert_eq!(two.value_objects.len(), 2);
        assert_eq!(first, "node-1");
        assert_eq!(second, "node-2");
        assert_eq!(two.value_objects[1].id, second);
    }

    #[test]
    fn add_replaces_draft_id() {
        let mut ids = SequentialIdGenerator::new();
        let draft = ValueObject::new("client-chosen", "Money", vec![]);

        let (graph, id) = DomainGraph::default().with_value_object(draft, &mut ids);

        assert!(graph.value_object(&NodeId::from("client-chosen")).is_none());
        assert!(graph.value_object(&id).is_some());
    }

    #[test]
    fn update_patches_matching_node_only() {
        let mut ids = SequentialIdGenerator::new();
        let (graph, id) = DomainGraph::default().with_entity(
            Entity::new("", "Ride", Primitive::Guid, vec![]),
            &mut ids,
        );

        let updated = graph.updating_entity(&id, |e| {
            e.name = "Trip".to_string();
            e.fields.push(EntityField::primitive("Status", Primitive::String));
        });

        assert_eq!(graph.entities[0].name, "Ride");
        assert_eq!(updated.entities[0].name, "Trip");
        assert_eq!(updated.entities[0].fields.len(), 1);
    }

    #[test]
    fn update_cannot_change_identity() {
        let mut ids = SequentialIdGenerator::new();
        let (graph, id) = DomainGraph::default().with_repository(
            Repository::new("", "IRideRepository", vec![]),
            &mut ids,
        );

        let updated = graph.updating_repository(&id, |r| r.id = NodeId::from("hijacked"));

        assert_eq!(updated.repositories[0].id, id);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let graph = DomainGraph::default();
        let updated = graph.updating_aggregate(&NodeId::from("missing"), |a| {
            a.name = "X".to_string();
        });
        assert_eq!(graph, updated);
    }

    #[test]
    fn remove_does_not_cascade() {
        let mut ids = SequentialIdGenerator::new();
        let (graph, vo_id) = DomainGraph::default().with_value_object(money(), &mut ids);
        let (graph, entity_id) = graph.with_entity(
            Entity::new(
                "",
                "Ride",
                Primitive::Guid,
                vec![EntityField::value_object("Fare", vo_id.clone())],
            ),
            &mut ids,
        );

        let removed = graph.without_node(&vo_id);

        assert!(removed.value_object(&vo_id).is_none());
        let entity = removed.entity(&entity_id).unwrap();
        assert_eq!(entity.fields[0].vo_id(), Some(&vo_id));
        assert_eq!(graph.value_objects.len(), 1);
    }

    #[test]
    fn node_kind_and_name_lookup() {
        let mut ids = SequentialIdGenerator::new();
        let (graph, uc_id) = DomainGraph::default().with_use_case(
            UseCase::new(
                "",
                "RequestRide",
                IoShape::new("Request", vec![]),
                IoShape::new("Response", vec![]),
            ),
            &mut ids,
        );

        assert_eq!(graph.node_kind(&uc_id), Some(NodeKind::UseCase));
        assert_eq!(graph.node_name(&uc_id), Some("RequestRide"));
        assert_eq!(graph.node_kind(&NodeId::from("nope")), None);
    }

    #[test]
    fn edges_follow_collection_order() {
        let graph = DomainGraph {
            value_objects: vec![ValueObject::new("vo-1", "Money", vec![])],
            entities: vec![
                Entity::new(
                    "e-1",
                    "Ride",
                    Primitive::Guid,
                    vec![EntityField::value_object("Fare", "vo-1")],
                ),
                Entity::new("e-2", "Stop", Primitive::Int, vec![]),
            ],
            aggregates: vec![Aggregate::new("agg-1", "RideAggregate", "e-1")
                .with_members(["e-1", "e-2"])],
            repositories: vec![Repository::new(
                "r-1",
                "IRideRepository",
                vec![RepositoryMethod::new("Save", "Task Save(Ride ride)")],
            )],
            use_cases: vec![UseCase::new(
                "uc-1",
                "RequestRide",
                IoShape::new("Request", vec![]),
                IoShape::new("Response", vec![]),
            )
            .with_repos(["r-1"])
            .with_reads(["agg-1"])
            .with_writes(["e-1"])],
            meta: GraphMeta::new("Test"),
        };

        let kinds: Vec<_> = graph.edges().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EdgeKind::HasField,
                EdgeKind::Root,
                EdgeKind::Member,
                EdgeKind::UsesRepo,
                EdgeKind::Reads,
                EdgeKind::Writes,
            ]
        );

        let has_field = &graph.edges()[0];
        assert_eq!(has_field.source, "vo-1");
        assert_eq!(has_field.target, "e-1");
    }
}
