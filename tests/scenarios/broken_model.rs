//! Scenario: a model with dangling references
//!
//! `check` fails, `generate --strict` refuses to write, and a plain
//! `generate` still writes files with placeholders.

use crate::common::*;
use crate::{assert_generated, assert_not_generated, assert_output_contains};

#[test]
fn scenario_check_fails_on_dangling_root() {
    let env = TestEnv::new();
    env.write_file("shop.json", BROKEN_AGGREGATE);

    let result = env.run(&["check", "shop.json"]);

    assert_eq!(result.exit_code, 1, "output:\n{}", result.combined_output());
    assert_output_contains!(result, "Aggregate must have a valid root entity");
    assert_output_contains!(result, "Check FAILED");
}

#[test]
fn scenario_check_json_reports_each_finding() {
    let env = TestEnv::new();
    env.write_file("fleet.json", MISSING_VO_ENTITY);

    let result = env.run(&["check", "fleet.json", "--json"]);

    assert!(!result.success);
    let events = result.json_lines();
    assert_eq!(events.first().unwrap()["event"], "start");
    let findings: Vec<_> = events.iter().filter(|e| e["event"] == "finding").collect();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["node_id"], "e-1");
    assert_eq!(findings[0]["severity"], "error");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["errors"], 1);
    assert_eq!(last["success"], false);
}

#[test]
fn scenario_warnings_pass_unless_configured() {
    let env = TestEnv::new();
    env.write_file("rides.json", WARNING_ONLY);

    let result = env.run(&["check", "rides.json"]);
    assert!(result.success, "warnings alone should pass:\n{}", result.combined_output());
    assert_output_contains!(result, "Check passed with findings");

    env.write_file("archlab.toml", "[generate]\nfail_on = \"warning\"\n");
    let result = env.run(&["check", "rides.json"]);
    assert_eq!(result.exit_code, 1);

    let result = env.run_with_env(&["check", "rides.json"], &[("ARCHLAB_FAIL_ON", "error")]);
    assert!(result.success, "env overrides the project file");
}

#[test]
fn scenario_strict_generate_writes_nothing() {
    let env = TestEnv::new();
    env.write_file("shop.json", BROKEN_AGGREGATE);

    let result = env.run(&["generate", "shop.json", "--strict"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Generate blocked by findings");
    assert_not_generated!(env, "generated");
}

#[test]
fn scenario_lenient_generate_emits_placeholders() {
    let env = TestEnv::new();
    env.write_file("shop.json", BROKEN_AGGREGATE);

    let result = env.run(&["generate", "shop.json", "--out", "src-gen"]);

    assert!(result.success, "output:\n{}", result.combined_output());
    assert_generated!(env, "src-gen/Domain/Entities/Order.cs");
    assert_eq!(
        env.read_file("src-gen/Domain/Aggregates/OrderAggregate.cs"),
        "// Missing root entity for aggregate OrderAggregate"
    );
}

#[test]
fn scenario_dry_run_lists_plan_without_writing() {
    let env = TestEnv::new().with_starter_snapshot();

    let result = env.run(&["generate", "model.json", "--dry-run"]);

    assert!(result.success);
    assert_output_contains!(result, "Dry run complete");
    assert_output_contains!(result, "Money.cs");
    assert_not_generated!(env, "generated");
}
