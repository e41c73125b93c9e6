use super::*;
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_port_and_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("CASEGRID_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_accepts_ipv6() {
    let cfg = ServerConfig::from_lookup(lookup(&[("CASEGRID_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    for bad in ["abc", "0", "70000", ""] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", bad)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: bad.to_owned() });
    }
}

#[test]
fn from_lookup_rejects_bad_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("CASEGRID_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidAddr { value: "localhost".to_owned() });
    assert!(err.to_string().contains("CASEGRID_ADDR"));
}
