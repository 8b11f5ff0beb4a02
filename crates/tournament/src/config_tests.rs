use super::*;

#[test]
fn test_default_config() {
    let config = TournamentConfig::default();
    assert_eq!(config.games, 10);
    assert_eq!(config.seed, None);
    assert!(config.alternate_first);
    assert!(config.verbose);
    assert_eq!(config.think_delay_ms, 0);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config =
        TournamentConfig::from_toml_str("games = 4\nseed = 99\n", Path::new("t.toml")).unwrap();
    assert_eq!(config.games, 4);
    assert_eq!(config.seed, Some(99));
    assert!(config.alternate_first);
}

#[test]
fn test_bad_toml_is_an_error() {
    let err = TournamentConfig::from_toml_str("games = \"many\"", Path::new("t.toml"));
    assert!(matches!(err, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = TournamentConfig::from_path(Path::new("/nonexistent/tournament.toml"));
    assert!(matches!(err, Err(ConfigError::Read { .. })));
}

#[test]
fn test_env_overrides() {
    let lookup = |key: &str| match key {
        "TTT_GAMES" => Some("3".to_string()),
        "TTT_SEED" => Some(" 12 ".to_string()),
        _ => None,
    };
    let config = apply_env_overrides(TournamentConfig::default(), lookup).unwrap();
    assert_eq!(config.games, 3);
    assert_eq!(config.seed, Some(12));

    let bad = apply_env_overrides(TournamentConfig::default(), |_| Some("x".to_string()));
    assert!(matches!(bad, Err(ConfigError::InvalidOverride { .. })));
}
