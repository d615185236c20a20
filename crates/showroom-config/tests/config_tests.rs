// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading and validation.

use showroom_config::{load_config_from_str, validate_config, ConfigError};

#[test]
fn full_config_round_trips() {
    let config = load_config_from_str(
        r#"
[agent]
name = "automax"
system_prompt = "Eres un asistente de ventas."
max_history_messages = 30
fallback_reply = "Disculpa, intenta otra vez."

[anthropic]
default_model = "claude-sonnet-4-20250514"
max_tokens = 800
temperature = 0.5
request_timeout_secs = 45

[gateway]
host = "0.0.0.0"
port = 3000
"#,
    )
    .unwrap();

    assert_eq!(config.agent.name, "automax");
    assert_eq!(
        config.agent.system_prompt.as_deref(),
        Some("Eres un asistente de ventas.")
    );
    assert_eq!(config.agent.max_history_messages, 30);
    assert_eq!(config.anthropic.max_tokens, 800);
    assert_eq!(config.anthropic.temperature, 0.5);
    assert_eq!(config.anthropic.request_timeout_secs, 45);
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 3000);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn partial_sections_merge_with_defaults() {
    let config = load_config_from_str("[anthropic]\nmax_tokens = 500\n").unwrap();
    assert_eq!(config.anthropic.max_tokens, 500);
    assert_eq!(config.anthropic.temperature, 0.7);
    assert_eq!(config.agent.name, "showroom");
}

#[test]
fn unknown_section_is_rejected() {
    assert!(load_config_from_str("[telemetry]\nenabled = true\n").is_err());
}

#[test]
fn typo_in_key_produces_suggestion() {
    let err = load_config_from_str("[anthropic]\napi_kye = \"sk-1\"\n").unwrap_err();
    let errors = showroom_config::diagnostic::figment_to_config_errors(err);
    let found = errors.iter().any(|e| {
        matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "api_kye" && suggestion.as_deref() == Some("api_key")
        )
    });
    assert!(found, "expected a suggestion for api_kye: {errors:?}");
}

#[test]
fn validation_errors_render_without_panicking() {
    let mut config = load_config_from_str("").unwrap();
    config.gateway.port = 0;
    let errors = validate_config(&config).unwrap_err();
    // Smoke test for the miette rendering path.
    showroom_config::render_errors(&errors);
}
