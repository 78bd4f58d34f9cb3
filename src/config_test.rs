use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_trimmed() {
    let cfg = SiteConfig::from_lookup(lookup(&[
        ("SITE_HOST", " 127.0.0.1 "),
        ("PORT", "8080\n"),
        ("SITE_ASSETS_DIR", "/srv/island/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/island/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_HOST", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn invalid_port_is_rejected() {
    let err = SiteConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "70000".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}
