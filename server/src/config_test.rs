use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("CRM_HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("RUST_LOG", "crm_server=debug,tower_http=info"),
        ("CRM_LOG_JSON", "yes"),
    ]))
    .unwrap();

    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_filter, "crm_server=debug,tower_http=info");
    assert!(cfg.log_json);
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("CRM_HOST", "::1")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "   "), ("RUST_LOG", ""), ("CRM_LOG_JSON", " ")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { var: "PORT", value: "70000".into() });
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("CRM_HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { var: "CRM_HOST", .. }));
    assert!(err.to_string().contains("localhost"));
}

#[test]
fn invalid_bool_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("CRM_LOG_JSON", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBool { var: "CRM_LOG_JSON", value: "maybe".into() });
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_accepts_common_spellings() {
    for val in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
    for val in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
}

// =============================================================================
// from_env — sets the real CRM_LOG_JSON; no other test touches it.
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe { std::env::set_var("CRM_LOG_JSON", "on") };
    let cfg = ServerConfig::from_env();
    unsafe { std::env::remove_var("CRM_LOG_JSON") };
    assert!(cfg.unwrap().log_json);
}
