use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.upstream_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.api_prefix, "/api/v1");
    assert_eq!(cfg.upstream_timeout_secs, 30);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://backend.internal:5000/"),
        ("API_PREFIX", "api/v2/"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url, "https://backend.internal:5000");
    assert_eq!(cfg.api_prefix, "/api/v2");
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("API_UPSTREAM_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, DEFAULT_API_UPSTREAM_URL);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn from_lookup_rejects_upstream_without_scheme() {
    let err = HostConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "backend:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "API_UPSTREAM_URL", value: "backend:5000".into() });
}

#[test]
fn from_lookup_rejects_root_prefix() {
    let err = HostConfig::from_lookup(lookup_from(&[("API_PREFIX", "/")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "API_PREFIX", .. }));
}

#[test]
fn normalize_prefix_adds_leading_and_strips_trailing_slash() {
    assert_eq!(normalize_prefix("api/v1"), "/api/v1");
    assert_eq!(normalize_prefix("/api/v1/"), "/api/v1");
    assert_eq!(normalize_prefix("//"), "");
}
