use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
    assert_eq!(cfg.public_dir, PathBuf::from(DEFAULT_PUBLIC_DIR));
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://api.marito.example/"),
        ("PUBLIC_DIR", "/srv/marito/public"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url, "https://api.marito.example");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/marito/public"));
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    let err = Config::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_upstream_without_scheme() {
    let err = Config::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "localhost:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::UpstreamScheme("localhost:8000".into()));
}

#[test]
fn blank_upstream_falls_back_to_default() {
    let cfg = Config::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "  ")])).unwrap();
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
}
