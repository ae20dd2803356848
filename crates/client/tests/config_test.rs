use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;
use vdrive_client::config::ClientConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ClientConfig::from_lookup(lookup(&[(
        "VDRIVE_API_BASE_URL",
        "https://admin.vdrive.test/api",
    )]))
    .expect("Failed to load config");

    assert_eq!(config.api_base_url, "https://admin.vdrive.test/api");
    assert_eq!(config.api_token, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_all_values() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("VDRIVE_API_BASE_URL", "http://localhost:8000"),
        ("VDRIVE_API_TOKEN", "secret-token"),
        ("VDRIVE_REQUEST_TIMEOUT_SECONDS", "5"),
        ("LOG_LEVEL", "DEBUG"),
    ]))
    .expect("Failed to load config");

    assert_eq!(config.api_token.as_deref(), Some("secret-token"));
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[rstest]
#[case::missing(&[])]
#[case::blank(&[("VDRIVE_API_BASE_URL", "   ")])]
#[case::bad_timeout(&[("VDRIVE_API_BASE_URL", "http://localhost"), ("VDRIVE_REQUEST_TIMEOUT_SECONDS", "soon")])]
fn test_invalid_config(#[case] vars: &[(&str, &str)]) {
    assert!(ClientConfig::from_lookup(lookup(vars)).is_err());
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("VDRIVE_API_BASE_URL", "http://localhost"),
        ("LOG_LEVEL", "verbose"),
    ]))
    .expect("Failed to load config");

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_blank_token_is_ignored() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("VDRIVE_API_BASE_URL", "http://localhost"),
        ("VDRIVE_API_TOKEN", ""),
    ]))
    .expect("Failed to load config");

    assert_eq!(config.api_token, None);
}

#[rstest]
#[case("http://localhost:8000/api")]
#[case("http://localhost:8000/api/")]
fn test_pricing_rule_urls(#[case] base: &str) {
    let config = ClientConfig::from_lookup(lookup(&[("VDRIVE_API_BASE_URL", base)]))
        .expect("Failed to load config");

    assert_eq!(
        config.pricing_rules_url(),
        "http://localhost:8000/api/pricing-rules"
    );
    assert_eq!(
        config.pricing_rule_url(17),
        "http://localhost:8000/api/pricing-rules/17"
    );
}
