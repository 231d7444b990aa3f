//! Integration tests for the config module public API.

use std::fs;

use nocturne::config::{builtin_flows, load_builtin, load_file, resolve};
use nocturne::NocturneError;
use tempfile::TempDir;

#[test]
fn builtins_are_valid_and_sorted() {
    let flows = builtin_flows().unwrap();
    assert!(flows.len() >= 3);

    let names: Vec<_> = flows.iter().map(|f| f.name.clone()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    for flow in &flows {
        assert!(flow.validate().is_ok(), "builtin '{}' invalid", flow.name);
        assert!(flow.total_steps() > 0, "builtin '{}' has zero steps", flow.name);
    }
}

#[test]
fn morning_flow_accounting_matches_definition() {
    let morning = load_builtin("morning").unwrap();
    let config = morning.step_config();

    // The completion screen carries no progress weight.
    let complete = morning.step("complete").unwrap();
    assert_eq!(complete.step_count(), 0);

    // Offsets accumulate the preceding question counts.
    let order = morning.step_order();
    let mut running = 0;
    for id in &order {
        assert_eq!(config.step_offset_default(id), running);
        running += morning.step(id).unwrap().step_count();
    }
    assert_eq!(running, morning.total_steps());
}

#[test]
fn custom_definitions_load_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("weekly.yml");
    fs::write(
        &path,
        r#"
name: weekly
title: Weekly review
description: Look back over the week.
steps:
  - id: wins
    title: Wins
    questions:
      - id: best_dream
        text: Best dream this week?
        kind: short_text
      - id: recall_trend
        text: Recall felt stronger this week.
        kind: statement
  - id: outlook
    title: Outlook
    questions:
      - id: next_focus
        text: What to focus on next week?
        kind: text
"#,
    )
    .unwrap();

    let flow = load_file(&path).unwrap();
    assert_eq!(flow.name, "weekly");
    assert_eq!(flow.total_steps(), 3);
    assert_eq!(flow.step_config().step_offset_default(&"outlook".to_string()), 2);

    let resolved = resolve(path.to_str().unwrap()).unwrap();
    assert_eq!(resolved, flow);
}

#[test]
fn duplicate_question_ids_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dupes.yml");
    fs::write(
        &path,
        r#"
name: dupes
title: Duplicates
steps:
  - id: one
    title: One
    questions:
      - id: q
        text: First?
        kind: short_text
  - id: two
    title: Two
    questions:
      - id: q
        text: Second?
        kind: short_text
"#,
    )
    .unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, NocturneError::DefinitionInvalid { .. }));
    assert!(err.to_string().contains("duplicate question id"));
}

#[test]
fn resolve_falls_back_to_builtin_names() {
    let night = resolve("night").unwrap();
    assert_eq!(night.name, "night");

    let err = resolve("afternoon").unwrap_err();
    assert!(matches!(err, NocturneError::UnknownFlow { .. }));
}
