//! Scenario: keeping designs in the project store
//!
//! Save a snapshot under a name, list it, load it back elsewhere, delete it.

use crate::common::*;
use crate::assert_output_contains;

#[test]
fn scenario_save_list_load_delete() {
    let env = TestEnv::new().with_starter_snapshot();

    let result = env.run(&["project", "save", "rides", "model.json"]);
    assert!(result.success, "save failed:\n{}", result.combined_output());
    assert!(env.store_dir().join("rides.json").exists());

    let result = env.run(&["project", "list", "--json"]);
    assert!(result.success);
    let listing = &result.json_lines()[0];
    assert_eq!(listing["event"], "projects");
    assert_eq!(listing["count"], 1);
    assert_eq!(listing["projects"][0]["name"], "rides");
    assert_eq!(listing["projects"][0]["node_count"], 5);

    let result = env.run(&["project", "list"]);
    assert_output_contains!(result, "rides");

    let result = env.run(&["project", "load", "rides", "--out", "copy.json"]);
    assert!(result.success, "load failed:\n{}", result.combined_output());
    let copy = archlab::import_graph(&env.read_file("copy.json")).unwrap();
    assert_eq!(copy, archlab::starter_graph());

    // stdin is not a terminal here, so no prompt is shown
    let result = env.run(&["project", "delete", "rides"]);
    assert!(result.success, "delete failed:\n{}", result.combined_output());
    assert!(!env.store_dir().join("rides.json").exists());

    let result = env.run(&["project", "list"]);
    assert_output_contains!(result, "No projects saved.");
}

#[test]
fn scenario_missing_project_is_an_error() {
    let env = TestEnv::new();

    let result = env.run(&["project", "load", "nope"]);
    assert!(!result.success);
    assert_output_contains!(result, "nope");

    let result = env.run(&["project", "delete", "nope", "--yes"]);
    assert!(!result.success);
}

#[test]
fn scenario_invalid_project_name_is_rejected() {
    let env = TestEnv::new().with_starter_snapshot();

    let result = env.run(&["project", "save", "../escape", "model.json"]);

    assert!(!result.success);
    assert!(!env.home_path("escape.json").exists());
}
