use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_vars(vars(&[("HOST", "127.0.0.1"), ("PORT", " 8080 "), ("RUST_LOG", "server=debug")]))
        .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_filter, "server=debug");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(vars(&[("PORT", ""), ("RUST_LOG", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_vars(vars(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn invalid_host_is_an_error() {
    assert!(matches!(
        ServerConfig::from_vars(vars(&[("HOST", "not-an-ip")])),
        Err(ConfigError::Invalid { var: "HOST", .. })
    ));
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("RUST_LOG");
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4100");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.host, DEFAULT_HOST);

    unsafe { clear_server_env() };
}
