use flytrap_core::rules::{CATCH_DELAY_MAX_MS, DEFAULT_TARGET_SIZE, DEFAULT_TOKEN_SIZE};
use flytrap_core::{FlytrapGame, GameRules, Point, RulesError, Stage, DEFAULT_CATCH_DELAY_MS};

#[test]
fn defaults_match_page_constants() {
    let rules = GameRules::default();
    assert_eq!(rules.catch_delay_ms, DEFAULT_CATCH_DELAY_MS);
    assert_eq!(rules.catch_delay_ms, 2000);
    assert_eq!(rules.token_size, DEFAULT_TOKEN_SIZE);
    assert_eq!(rules.target_size, DEFAULT_TARGET_SIZE);
    assert_eq!(rules.default_fly, Point::new(100.0, 100.0));
    assert_eq!(rules.initial_stage, Stage::Waiting);
    assert_eq!(rules.half_token(), 20.0);
}

#[test]
fn pairs_override_known_keys() {
    let rules = GameRules::from_pairs([
        ("delay", "250"),
        ("token", "48"),
        ("leaf", "180"),
        ("fly_x", "12.5"),
        ("fly_y", "-4"),
        ("stage", "Digesting"),
    ])
    .unwrap();
    assert_eq!(rules.catch_delay_ms, 250);
    assert_eq!(rules.token_size, 48.0);
    assert_eq!(rules.target_size, 180.0);
    assert_eq!(rules.default_fly, Point::new(12.5, -4.0));
    assert_eq!(rules.initial_stage, Stage::Digesting);
}

#[test]
fn unknown_keys_are_skipped() {
    let rules = GameRules::from_pairs([("room", "abc"), ("utm_source", "x")]).unwrap();
    assert_eq!(rules, GameRules::default());

    let mut rules = GameRules::default();
    assert!(!rules.apply_pair("theme", "dark").unwrap());
    assert!(rules.apply_pair(" delay ", "0").unwrap());
    assert_eq!(rules.catch_delay_ms, 0);
}

#[test]
fn bad_numbers_are_reported_with_their_key() {
    let err = GameRules::from_pairs([("delay", "soon")]).unwrap_err();
    assert_eq!(
        err,
        RulesError::InvalidNumber {
            key: "delay",
            value: "soon".to_string(),
        }
    );
    assert!(err.to_string().contains("delay"));

    assert!(matches!(
        GameRules::from_pairs([("token", "NaN")]),
        Err(RulesError::InvalidNumber { key: "token", .. })
    ));
    assert!(matches!(
        GameRules::from_pairs([("fly_x", "inf")]),
        Err(RulesError::InvalidNumber { key: "fly_x", .. })
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    let too_long = (CATCH_DELAY_MAX_MS + 1).to_string();
    assert!(matches!(
        GameRules::from_pairs([("delay", too_long.as_str())]),
        Err(RulesError::OutOfRange { key: "delay", .. })
    ));
    assert!(matches!(
        GameRules::from_pairs([("delay", "-1")]),
        Err(RulesError::OutOfRange { key: "delay", .. })
    ));
    assert!(matches!(
        GameRules::from_pairs([("token", "2")]),
        Err(RulesError::OutOfRange { key: "token", .. })
    ));
    assert!(matches!(
        GameRules::from_pairs([("leaf", "5000")]),
        Err(RulesError::OutOfRange { key: "leaf", .. })
    ));
    let message = GameRules::from_pairs([("token", "2")])
        .unwrap_err()
        .to_string();
    assert!(message.contains("between"));
}

#[test]
fn bad_stage_keeps_parse_error_as_source() {
    use std::error::Error;

    let err = GameRules::from_pairs([("stage", "sleeping")]).unwrap_err();
    assert!(matches!(err, RulesError::Stage(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("sleeping"));
}

#[test]
fn configured_fly_is_the_reset_position() {
    let rules = GameRules::from_pairs([("fly_x", "30"), ("fly_y", "60")]).unwrap();
    let mut game = FlytrapGame::new(rules);
    assert_eq!(game.state().fly, Point::new(30.0, 60.0));
    game.press_start();
    game.reset();
    assert_eq!(game.state().fly, Point::new(30.0, 60.0));
    assert!(game.state().is_reset(&rules));
}
