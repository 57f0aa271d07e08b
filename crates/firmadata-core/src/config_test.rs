use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.registry_base_url, DEFAULT_REGISTRY_BASE_URL);
    assert_eq!(cfg.directory_base_url, DEFAULT_DIRECTORY_BASE_URL);
    assert_eq!(cfg.directory_user_agent, "Mozilla/5.0");
    assert_eq!(cfg.ads_base_url, DEFAULT_ADS_BASE_URL);
    assert!(cfg.request_timeout_secs.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FIRMADATA_BIND_ADDR"),
        "expected InvalidEnvVar(FIRMADATA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn base_urls_are_passed_through_unchanged() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_REGISTRY_BASE_URL", "http://127.0.0.1:9000/enheter/");
    map.insert("FIRMADATA_DIRECTORY_BASE_URL", "http://127.0.0.1:9000/firma");
    map.insert("FIRMADATA_ADS_BASE_URL", "graph.facebook.com/ads_archive");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.registry_base_url, "http://127.0.0.1:9000/enheter/");
    assert_eq!(cfg.directory_base_url, "http://127.0.0.1:9000/firma");
    assert_eq!(cfg.ads_base_url, "graph.facebook.com/ads_archive");
}

#[test]
fn directory_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_DIRECTORY_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.directory_user_agent, "custom-agent/2.0");
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_REQUEST_TIMEOUT_SECS", "15");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, Some(15));
}

#[test]
fn request_timeout_secs_blank_means_unset() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_REQUEST_TIMEOUT_SECS", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.request_timeout_secs.is_none());
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FIRMADATA_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FIRMADATA_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("FIRMADATA_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FIRMADATA_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FIRMADATA_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}
