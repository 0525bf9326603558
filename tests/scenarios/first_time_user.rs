//! Scenario: first-time user
//!
//! Steps:
//! 1. Writes the starter snapshot
//! 2. Checks it (clean)
//! 3. Generates source into `generated/`
//! 4. Regenerates without changes (nothing rewritten)
//! 5. Edits the snapshot and previews the change with `diff`
//! 6. Prints a single generated file with `show`

use crate::common::*;
use crate::{assert_generated, assert_output_contains};

#[test]
fn scenario_first_time_user_complete_journey() {
    let env = TestEnv::new();

    // Step 1
    let result = env.run(&["starter", "--out", "model.json"]);
    assert!(result.success, "starter failed:\n{}", result.combined_output());
    assert_output_contains!(result, "Wrote starter snapshot");

    // Step 2
    let result = env.run(&["check", "model.json"]);
    assert!(result.success, "check failed:\n{}", result.combined_output());
    assert_output_contains!(result, "Graph is valid");

    // Step 3
    let result = env.run(&["generate", "model.json"]);
    assert!(result.success, "generate failed:\n{}", result.combined_output());
    assert_generated!(env, "generated/Domain/ValueObjects/Money.cs");
    assert_generated!(env, "generated/Domain/Entities/Ride.cs");
    assert_generated!(env, "generated/Domain/Aggregates/RideAggregate.cs");
    assert_generated!(env, "generated/Application/Ports/IRideRepository.cs");
    assert_generated!(env, "generated/Application/UseCases/RequestRideUseCase.cs");
    assert_eq!(relative_files(&env.work_path("generated")).len(), 5);

    // Step 4
    let result = env.run(&["generate", "model.json", "--json"]);
    assert!(result.success);
    let complete = result
        .json_lines()
        .into_iter()
        .find(|e| e["event"] == "complete")
        .expect("complete event");
    assert_eq!(complete["written"], 0);
    assert_eq!(complete["unchanged"], 5);

    // Step 5
    let snapshot = env.read_file("model.json").replace("\"Money\"", "\"Price\"");
    env.write_file("model.json", &snapshot);
    let result = env.run(&["diff", "model.json"]);
    assert!(result.success, "diff failed:\n{}", result.combined_output());
    assert_output_contains!(result, "Price");
    assert!(
        !env.work_path("generated/Domain/ValueObjects/Price.cs").exists(),
        "diff must not write"
    );

    // Step 6
    let result = env.run(&["show", "model.json", "Domain/ValueObjects/Price.cs"]);
    assert!(result.success, "show failed:\n{}", result.combined_output());
    assert!(result.stdout.starts_with("namespace Domain.ValueObjects;"));
    assert!(result.stdout.contains("public readonly record struct Price("));
}

#[test]
fn scenario_starter_to_stdout_round_trips() {
    let env = TestEnv::new();

    let result = env.run(&["starter"]);

    assert!(result.success);
    let graph = archlab::import_graph(&result.stdout).expect("stdout is a snapshot");
    assert_eq!(graph, archlab::starter_graph());
}
