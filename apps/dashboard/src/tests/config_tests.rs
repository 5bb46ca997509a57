use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_point_at_demo_directory() {
    let settings = Settings::default();
    assert_eq!(settings.source_url, "https://dummyjson.com/users");
    assert_eq!(settings.fetch_limit, 20);
    assert_eq!(settings.rng_seed, None);
    assert_eq!(settings.log_filter, "info");
    validate(&settings).expect("defaults are valid");
}

#[test]
fn file_settings_override_defaults() {
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        r#"
source_url = "http://127.0.0.1:9000/users"
fetch_limit = 5
rng_seed = 17
"#,
    )
    .expect("parse");

    assert_eq!(settings.source_url, "http://127.0.0.1:9000/users");
    assert_eq!(settings.fetch_limit, 5);
    assert_eq!(settings.rng_seed, Some(17));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    let err = apply_file_settings(&mut settings, "bind_addr = \"0.0.0.0:80\"").expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err:?}");
}

#[test]
fn app_prefixed_env_wins_over_short_names() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("HR_DASHBOARD_SOURCE_URL", "http://short.example/users"),
            ("APP__SOURCE_URL", "http://app.example/users"),
            ("HR_DASHBOARD_FETCH_LIMIT", "10"),
            ("HR_DASHBOARD_SEED", "3"),
            ("APP__RNG_SEED", "4"),
            ("RUST_LOG", "debug"),
        ]),
    )
    .expect("apply env");

    assert_eq!(settings.source_url, "http://app.example/users");
    assert_eq!(settings.fetch_limit, 10);
    assert_eq!(settings.rng_seed, Some(4));
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn malformed_numeric_env_is_an_error() {
    let mut settings = Settings::default();
    let err = apply_env_overrides(&mut settings, env(&[("APP__FETCH_LIMIT", "twenty")]))
        .expect_err("must fail");
    assert_eq!(err.to_string(), "invalid value for fetch_limit: 'twenty'");
}

#[test]
fn validate_rejects_bad_url_and_zero_limit() {
    let settings = Settings {
        source_url: "not a url".into(),
        ..Settings::default()
    };
    assert!(matches!(
        validate(&settings),
        Err(ConfigError::InvalidUrl { .. })
    ));

    let settings = Settings {
        fetch_limit: 0,
        ..Settings::default()
    };
    assert!(matches!(
        validate(&settings),
        Err(ConfigError::InvalidValue { key: "fetch_limit", .. })
    ));
}

#[test]
fn explicit_missing_config_file_fails() {
    let path = std::env::temp_dir().join("hr_dashboard_missing_config_for_test.toml");
    let err = load_settings(Some(&path)).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"));
}
