use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_requires_database_url() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_rejects_blank_database_url() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/inventorydb")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/inventorydb");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(cfg.static_dir.is_none());
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/inv"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("STATIC_DIR", "client/dist"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.static_dir, Some(PathBuf::from("client/dist")));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/inv"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".to_owned() });
}
