use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, HostConfig { port: 3000, upstream: None });
}

#[test]
fn port_is_parsed() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn bad_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn upstream_trailing_slash_is_trimmed() {
    let config = HostConfig::from_lookup(lookup(&[("ASSET_API_UPSTREAM", "http://backend:8000/")])).unwrap();
    assert_eq!(config.upstream.as_deref(), Some("http://backend:8000"));
}

#[test]
fn blank_upstream_disables_proxy() {
    let config = HostConfig::from_lookup(lookup(&[("ASSET_API_UPSTREAM", "  ")])).unwrap();
    assert!(config.upstream.is_none());
}

#[test]
fn upstream_without_scheme_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("ASSET_API_UPSTREAM", "backend:8000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUpstream(_)));
}
