//! Snapshot codec properties.

use proptest::prelude::*;

use archlab::{export_graph, import_graph, ArchlabError};

use super::strategies::graph;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: import(export(g)) == g.
    #[test]
    fn property_snapshot_round_trip(g in graph()) {
        let text = export_graph(&g).unwrap();
        prop_assert_eq!(import_graph(&text).unwrap(), g);
    }

    /// PROPERTY: importing arbitrary text never panics.
    #[test]
    fn property_import_never_panics(s in "(?s).{0,256}") {
        let _ = import_graph(&s);
    }

    /// PROPERTY: a blank graph name is always rejected as missing.
    #[test]
    fn property_blank_name_is_missing_meta(version in 0u32..100) {
        let text = format!(r#"{{"meta":{{"name":"","version":{version}}}}}"#);
        prop_assert!(matches!(import_graph(&text), Err(ArchlabError::MissingMetaName)));
    }
}
