use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme.storage_key, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(cfg.nav.header_offset, 80.0);
    assert_eq!(cfg.nav.drawer_breakpoint, 768.0);
    assert_eq!(cfg.nav.scroll_throttle_ms, 100);
    assert_eq!(cfg.contact.endpoint, None);
    assert_eq!(cfg.contact.banner_dismiss_ms, 5000);
    assert_eq!(cfg.effects.ripple_duration_ms, 600);
}

#[test]
fn partial_json_fills_missing_keys_with_defaults() {
    let cfg: SiteConfig = serde_json::from_str(r#"{"nav":{"header_offset":64}}"#).unwrap();
    assert_eq!(cfg.nav.header_offset, 64.0);
    assert_eq!(cfg.nav.drawer_breakpoint, DEFAULT_DRAWER_BREAKPOINT);
    assert_eq!(cfg.theme, ThemeConfig::default());
}

#[test]
fn normalized_clamps_out_of_range_values() {
    let mut cfg = SiteConfig::default();
    cfg.reveal.threshold = 3.0;
    cfg.nav.header_offset = -10.0;
    cfg.nav.drawer_breakpoint = 0.0;
    cfg.theme.storage_key = "  ".to_owned();
    cfg.contact.endpoint = Some(String::new());

    let cfg = cfg.normalized();
    assert_eq!(cfg.reveal.threshold, 1.0);
    assert_eq!(cfg.nav.header_offset, 0.0);
    assert_eq!(cfg.nav.drawer_breakpoint, DEFAULT_DRAWER_BREAKPOINT);
    assert_eq!(cfg.theme.storage_key, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(cfg.contact.endpoint, None);
}

#[test]
fn normalized_keeps_valid_values() {
    let mut cfg = SiteConfig::default();
    cfg.contact.endpoint = Some("https://forms.example.com/contact".to_owned());
    let normalized = cfg.clone().normalized();
    assert_eq!(normalized, cfg);
}
