use std::path::Path;

use flytrap_cli::{Replay, Scenario, ScenarioError, Step};
use flytrap_core::{Point, Stage};

fn events(replay: &Replay) -> Vec<(u64, &str)> {
    replay
        .timeline()
        .iter()
        .map(|entry| (entry.at_ms, entry.event.as_str()))
        .collect()
}

#[test]
fn bundled_catch_scenario_digests_after_two_seconds() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/catch.toml");
    let scenario = Scenario::load(&path).unwrap();
    let replay = Replay::run(&scenario, None).unwrap();

    assert_eq!(
        events(&replay),
        vec![
            (0, "mount"),
            (0, "press"),
            (0, "move"),
            (0, "move"),
            (0, "release"),
            (0, "catch"),
            (2000, "digest"),
            (2000, "reset"),
        ]
    );

    let timeline = replay.timeline();
    let released = &timeline[4].state;
    assert!(released.leaf_closed);
    assert!(!released.dragging);
    assert_eq!(released.stage, Stage::Waiting);
    assert_eq!(timeline[6].state.stage, Stage::Digesting);

    let last = &timeline[7].state;
    assert_eq!(last.stage, Stage::Waiting);
    assert_eq!(last.fly, Point::new(100.0, 100.0));
    assert!(!last.leaf_closed);
}

#[test]
fn move_positions_are_region_relative() {
    let scenario = Scenario::from_toml(
        r#"
[region]
left = 16
top = 40

[[steps]]
action = "press"

[[steps]]
action = "move"
x = 200
y = 150
"#,
    )
    .unwrap();
    let replay = Replay::run(&scenario, None).unwrap();
    assert_eq!(replay.game().state().fly, Point::new(164.0, 90.0));
    assert!(replay.game().state().dragging);
}

#[test]
fn miss_keeps_fly_where_dropped() {
    let scenario = Scenario::from_toml(
        r#"
[[steps]]
action = "touch_start"
x = 120
y = 120

[[steps]]
action = "touch_move"
x = 60
y = 60

[[steps]]
action = "touch_end"

[[steps]]
action = "wait"
ms = 5000
"#,
    )
    .unwrap();
    let replay = Replay::run(&scenario, None).unwrap();
    let state = replay.game().state();
    assert_eq!(state.fly, Point::new(40.0, 40.0));
    assert!(!state.leaf_closed);
    assert!(!state.dragging);
    assert_eq!(state.stage, Stage::Waiting);
    assert_eq!(replay.pending_catches(), 0);
}

#[test]
fn reset_before_timer_leaves_stage_alone() {
    let scenario = Scenario::from_toml(
        r#"
[rules]
delay = 800

[leaf]
left = 0
top = 0

[[steps]]
action = "press"

[[steps]]
action = "move"
x = 40
y = 40

[[steps]]
action = "release"

[[steps]]
action = "wait"
ms = 300

[[steps]]
action = "reset"

[[steps]]
action = "wait"
ms = 1000
"#,
    )
    .unwrap();
    let replay = Replay::run(&scenario, None).unwrap();
    let events = events(&replay);
    assert!(events.contains(&(800, "stale_catch")));
    assert!(!events.iter().any(|(_, event)| *event == "digest"));
    assert_eq!(replay.game().stage(), Stage::Waiting);
}

#[test]
fn timer_after_manual_digest_still_digests() {
    let scenario = Scenario::from_toml(
        r#"
[leaf]
left = 0
top = 0

[[steps]]
action = "press"

[[steps]]
action = "move"
x = 40
y = 40

[[steps]]
action = "release"

[[steps]]
action = "select"
stage = "digesting"

[[steps]]
action = "wait"
ms = 2000
"#,
    )
    .unwrap();
    let replay = Replay::run(&scenario, None).unwrap();
    let events = events(&replay);
    assert_eq!(events.last(), Some(&(2000, "digest")));
    assert!(!events.iter().any(|(_, event)| *event == "stale_catch"));
    assert_eq!(replay.game().stage(), Stage::Digesting);
    assert!(replay.game().state().leaf_closed);
}

#[test]
fn delay_override_beats_scenario_rules() {
    let scenario = Scenario::from_toml(
        r#"
[rules]
delay = "5000"

[leaf]
left = 0
top = 0
size = 100

[[steps]]
action = "press"

[[steps]]
action = "move"
x = 50
y = 50

[[steps]]
action = "leave"

[[steps]]
action = "wait"
ms = 250
"#,
    )
    .unwrap();
    let replay = Replay::run(&scenario, Some(250)).unwrap();
    assert_eq!(replay.game().stage(), Stage::Digesting);
    assert_eq!(replay.now_ms(), 250);
}

#[test]
fn stage_steps_follow_selector_rules() {
    let scenario = Scenario::from_toml(
        r#"
[rules]
stage = "digesting"

[[steps]]
action = "click_fly"

[[steps]]
action = "advance"

[[steps]]
action = "click_fly"

[[steps]]
action = "select"
stage = "catching"
"#,
    )
    .unwrap();
    assert_eq!(scenario.steps[3], Step::Select { stage: Stage::Catching });
    let replay = Replay::run(&scenario, None).unwrap();
    let stages: Vec<_> = replay.timeline().iter().map(|entry| entry.state.stage).collect();
    assert_eq!(
        stages,
        vec![
            Stage::Digesting,
            Stage::Digesting,
            Stage::Waiting,
            Stage::Catching,
            Stage::Catching,
        ]
    );
}

#[test]
fn bad_rules_are_reported() {
    let scenario = Scenario::from_toml("[rules]\ntoken = \"huge\"\n").unwrap();
    let err = Replay::run(&scenario, None).err().unwrap();
    assert!(matches!(err, ScenarioError::Rules(_)));
    assert!(err.to_string().contains("token"));
}

#[test]
fn malformed_scenarios_are_rejected() {
    assert!(matches!(
        Scenario::from_toml("[[steps]]\naction = \"jump\"\n"),
        Err(ScenarioError::Parse(_))
    ));

    let flat = Scenario::from_toml("[region]\nwidth = 0\n").unwrap();
    assert!(matches!(
        Replay::run(&flat, None),
        Err(ScenarioError::Region { .. })
    ));

    let missing = Scenario::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(missing, ScenarioError::Io { .. }));
}
