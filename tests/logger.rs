use reddit_api::config::LoggingConfig;
use reddit_api::logger;

#[test]
fn test_disabled_logging_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!logger::init(&config).unwrap());
}

#[test]
fn test_dispatch_opens_log_file() {
    let dir = std::env::temp_dir().join("reddit_api_test_logger");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("reddit-api.log");

    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(path.clone()),
    };

    assert!(logger::dispatch(&config).is_ok());
    assert!(path.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_dispatch_rejects_unknown_level() {
    let config = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
        file: None,
    };
    assert!(logger::dispatch(&config).is_err());
}
