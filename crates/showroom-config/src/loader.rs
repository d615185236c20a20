// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./showroom.toml` > `~/.config/showroom/showroom.toml`
//! > `/etc/showroom/showroom.toml` with environment variable overrides via
//! `SHOWROOM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ShowroomConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/showroom/showroom.toml` (system-wide)
/// 3. `~/.config/showroom/showroom.toml` (user XDG config)
/// 4. `./showroom.toml` (local directory)
/// 5. `SHOWROOM_*` environment variables
pub fn load_config() -> Result<ShowroomConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ShowroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowroomConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShowroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowroomConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for
/// diagnostic use). Returned before extraction so callers can inspect
/// metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ShowroomConfig::default()))
        .merge(Toml::file("/etc/showroom/showroom.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("showroom/showroom.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("showroom.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SHOWROOM_ANTHROPIC_API_KEY` must map
/// to `anthropic.api_key`, not `anthropic.api.key`.
fn env_provider() -> Env {
    Env::prefixed("SHOWROOM_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_without_any_file() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.agent.name, "showroom");
        assert_eq!(config.agent.max_history_messages, 20);
        assert_eq!(config.anthropic.max_tokens, 1000);
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn toml_values_override_defaults() {
        let config = load_config_from_str(
            r#"
[agent]
name = "automax"
max_history_messages = 10

[gateway]
port = 9090
"#,
        )
        .unwrap();
        assert_eq!(config.agent.name, "automax");
        assert_eq!(config.agent.max_history_messages, 10);
        assert_eq!(config.gateway.port, 9090);
        // Untouched sections keep defaults.
        assert_eq!(config.anthropic.temperature, 0.7);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
[agent]
naem = "typo"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn env_mapping_targets_dotted_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SHOWROOM_ANTHROPIC_API_KEY", "sk-test-123");
            jail.set_env("SHOWROOM_AGENT_NAME", "envbot");
            let config: ShowroomConfig = Figment::new()
                .merge(Serialized::defaults(ShowroomConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-test-123"));
            assert_eq!(config.agent.name, "envbot");
            Ok(())
        });
    }

    #[test]
    fn fallback_reply_defaults_to_spanish_apology() {
        let config = load_config_from_str("").unwrap();
        assert!(config.agent.fallback_reply.starts_with("Lo siento"));
    }
}
