// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. Collects every violation instead of failing fast.

use crate::diagnostic::ConfigError;
use crate::model::ShowroomConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors.
pub fn validate_config(config: &ShowroomConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    // A history cap below 2 cannot hold one user/assistant exchange.
    if config.agent.max_history_messages < 2 {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.max_history_messages must be at least 2, got {}",
                config.agent.max_history_messages
            ),
        });
    }

    if config.agent.fallback_reply.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.fallback_reply must not be empty".to_string(),
        });
    }

    if config.anthropic.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.max_tokens must be at least 1".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.anthropic.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "anthropic.temperature must be between 0.0 and 2.0, got {}",
                config.anthropic.temperature
            ),
        });
    }

    if config.anthropic.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.request_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let addr = config.gateway.host.trim();
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "gateway.host `{addr}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if config.gateway.port == 0 {
        errors.push(ConfigError::Validation {
            message: "gateway.port must not be 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = ShowroomConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn tiny_history_cap_fails_validation() {
        let mut config = ShowroomConfig::default();
        config.agent.max_history_messages = 1;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::Validation { message } if message.contains("max_history_messages")
        )));
    }

    #[test]
    fn out_of_range_temperature_fails_validation() {
        let mut config = ShowroomConfig::default();
        config.anthropic.temperature = 3.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::Validation { message } if message.contains("temperature")
        )));
    }

    #[test]
    fn zero_port_fails_validation() {
        let mut config = ShowroomConfig::default();
        config.gateway.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn multiple_violations_are_all_collected() {
        let mut config = ShowroomConfig::default();
        config.agent.name = " ".into();
        config.agent.fallback_reply = "".into();
        config.anthropic.max_tokens = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn garbage_host_fails_but_hostname_passes() {
        let mut config = ShowroomConfig::default();
        config.gateway.host = "bad host!".into();
        assert!(validate_config(&config).is_err());

        config.gateway.host = "dealership.internal".into();
        assert!(validate_config(&config).is_ok());
    }
}
