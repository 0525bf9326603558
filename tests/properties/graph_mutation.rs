//! Persistent-update properties: every mutation returns a new graph.

use proptest::prelude::*;

use archlab::{DomainGraph, Field, Primitive, SequentialIdGenerator, ValueObject};

use super::strategies::{graph, name};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding a node never changes the receiver and assigns a fresh id.
    #[test]
    fn property_add_leaves_receiver_untouched(g in graph(), n in name()) {
        let before = g.clone();
        let mut ids = SequentialIdGenerator::with_prefix("fresh");

        let draft = ValueObject::new("ignored", n, vec![Field::new("Value", Primitive::Int)]);
        let (next, id) = g.with_value_object(draft, &mut ids);

        prop_assert_eq!(&g, &before);
        prop_assert_eq!(next.node_count(), g.node_count() + 1);
        prop_assert_eq!(id.as_str(), "fresh-1");
        prop_assert!(next.value_object(&id).is_some());
        prop_assert!(g.value_object(&id).is_none());
    }

    /// PROPERTY: removing a node removes exactly that node.
    #[test]
    fn property_remove_drops_one_node(g in graph()) {
        let Some(target) = first_node(&g) else {
            return Ok(());
        };
        let before = g.clone();

        let next = g.without_node(&target);

        prop_assert_eq!(&g, &before);
        prop_assert!(next.node_kind(&target).is_none());
        prop_assert_eq!(next.node_count(), g.node_count() - 1);
        prop_assert_eq!(&next.meta, &g.meta);
    }

    /// PROPERTY: updating an unknown id is a no-op.
    #[test]
    fn property_update_unknown_id_is_noop(g in graph()) {
        let unknown = archlab::NodeId::new("no-such-node");
        let next = g.updating_entity(&unknown, |e| e.name.push('X'));
        prop_assert_eq!(next, g);
    }
}

fn first_node(g: &DomainGraph) -> Option<archlab::NodeId> {
    g.value_objects
        .first()
        .map(|n| n.id.clone())
        .or_else(|| g.entities.first().map(|n| n.id.clone()))
        .or_else(|| g.aggregates.first().map(|n| n.id.clone()))
        .or_else(|| g.repositories.first().map(|n| n.id.clone()))
        .or_else(|| g.use_cases.first().map(|n| n.id.clone()))
}
