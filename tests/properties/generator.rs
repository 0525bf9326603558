//! Generator properties.

use proptest::prelude::*;

use archlab::{generate_all_code, CSharpEmitter, CodeEmitter, NodeKind};

use super::strategies::graph;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one file per node, whatever the findings.
    #[test]
    fn property_one_file_per_node(g in graph()) {
        let files = generate_all_code(&g, &CSharpEmitter::new());
        prop_assert_eq!(files.len(), g.node_count());
    }

    /// PROPERTY: files come in kind order and follow the emitter's path scheme.
    #[test]
    fn property_paths_follow_kind_order(g in graph()) {
        let emitter = CSharpEmitter::new();
        let files = generate_all_code(&g, &emitter);

        let mut expected = Vec::new();
        expected.extend(g.value_objects.iter().map(|n| emitter.path_for(NodeKind::ValueObject, &n.name)));
        expected.extend(g.entities.iter().map(|n| emitter.path_for(NodeKind::Entity, &n.name)));
        expected.extend(g.aggregates.iter().map(|n| emitter.path_for(NodeKind::Aggregate, &n.name)));
        expected.extend(g.repositories.iter().map(|n| emitter.path_for(NodeKind::Repository, &n.name)));
        expected.extend(g.use_cases.iter().map(|n| emitter.path_for(NodeKind::UseCase, &n.name)));

        let actual: Vec<String> = files.into_iter().map(|f| f.path).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: output is byte-identical across runs and never ends in a newline.
    #[test]
    fn property_generation_is_deterministic(g in graph()) {
        let emitter = CSharpEmitter::new();
        let first = generate_all_code(&g, &emitter);
        let second = generate_all_code(&g, &emitter);
        prop_assert!(first.iter().all(|f| !f.content.ends_with('\n')));
        prop_assert_eq!(first, second);
    }
}
