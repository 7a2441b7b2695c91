use queue_lab::config::Config;
use queue_lab::model::QueueKind;

// Env-var tests mutate process state, so they run as one test.
#[test]
fn config_from_env_reads_and_validates_vars() {
    unsafe {
        std::env::set_var("QUEUE_INITIAL_CAPACITY", "8");
        std::env::set_var("QUEUE_KIND", "Circular");
        std::env::remove_var("OTEL_ENDPOINT");
        std::env::remove_var("LOG_LEVEL");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.initial_capacity, Some(8));
    assert_eq!(config.kind, Some(QueueKind::Circular));
    assert_eq!(config.otel_endpoint, None);
    assert_eq!(config.log_level, None);
    assert_eq!(config.effective_log_level(), "info");

    unsafe {
        std::env::set_var("QUEUE_INITIAL_CAPACITY", "eight");
    }
    assert!(Config::from_env().is_err());

    unsafe {
        std::env::set_var("QUEUE_INITIAL_CAPACITY", "8");
        std::env::set_var("QUEUE_KIND", "stack");
    }
    assert!(Config::from_env().is_err());

    // Clean up
    unsafe {
        std::env::remove_var("QUEUE_INITIAL_CAPACITY");
        std::env::remove_var("QUEUE_KIND");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.initial_capacity, None);
    assert_eq!(config.kind, None);
}

#[test]
fn config_from_toml_reads_both_tables() {
    let config = Config::from_toml(
        r#"
        [queue]
        initial_capacity = 4
        kind = "linear"

        [telemetry]
        endpoint = "http://localhost:4317"
        log_level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.initial_capacity, Some(4));
    assert_eq!(config.kind, Some(QueueKind::Linear));
    assert_eq!(config.otel_endpoint.as_deref(), Some("http://localhost:4317"));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn config_from_toml_rejects_unknown_keys() {
    assert!(Config::from_toml("[queue]\nsize = 4\n").is_err());
}

#[test]
fn config_from_file_reports_missing_file() {
    let path = std::env::temp_dir().join("queue-lab-does-not-exist.toml");
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn config_from_file_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!("queue-lab-{}.toml", std::process::id()));
    std::fs::write(&path, "[queue]\ninitial_capacity = 6\n").unwrap();
    let config = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(config.initial_capacity, Some(6));
    assert_eq!(config.kind, None);
}

#[test]
fn merge_prefers_values_set_in_overlay() {
    let base = Config {
        initial_capacity: Some(3),
        kind: Some(QueueKind::Linear),
        otel_endpoint: None,
        log_level: Some("warn".to_string()),
    };
    let overlay = Config {
        initial_capacity: Some(10),
        kind: None,
        otel_endpoint: Some("http://collector:4317".to_string()),
        log_level: None,
    };

    let merged = base.merge(overlay);
    assert_eq!(merged.initial_capacity, Some(10));
    assert_eq!(merged.kind, Some(QueueKind::Linear));
    assert_eq!(merged.otel_endpoint.as_deref(), Some("http://collector:4317"));
    // unset in the overlay, so the base level survives
    assert_eq!(merged.effective_log_level(), "warn");
}

#[test]
fn merge_lets_explicit_info_override_base_level() {
    let base = Config {
        log_level: Some("warn".to_string()),
        ..Config::default()
    };
    let file = Config::from_toml("[telemetry]\nlog_level = \"info\"\n").unwrap();

    let merged = base.merge(file);
    assert_eq!(merged.log_level.as_deref(), Some("info"));
    assert_eq!(merged.effective_log_level(), "info");
}

#[test]
fn log_level_defaults_to_info_when_unset_everywhere() {
    let merged = Config::default().merge(Config::from_toml("").unwrap());
    assert_eq!(merged.log_level, None);
    assert_eq!(merged.effective_log_level(), "info");
}
