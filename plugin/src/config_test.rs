use super::*;

#[test]
fn resolve_without_overrides_uses_defaults() {
    let cfg = PluginConfig::resolve(None, None);
    assert_eq!(cfg, PluginConfig::default());
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.access_token, DEFAULT_ACCESS_TOKEN);
}

#[test]
fn resolve_trims_overrides() {
    let cfg = PluginConfig::resolve(Some("  https://briefs.example.test/api  "), Some(" tok "));
    assert_eq!(cfg.backend_url, "https://briefs.example.test/api");
    assert_eq!(cfg.access_token, "tok");
}

#[test]
fn resolve_blank_override_falls_back() {
    let cfg = PluginConfig::resolve(Some("   "), Some(""));
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.access_token, DEFAULT_ACCESS_TOKEN);
}
