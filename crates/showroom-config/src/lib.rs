// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Showroom dealership assistant.
//!
//! Layered TOML loading (XDG hierarchy + `SHOWROOM_*` env overrides),
//! typed model structs with defaults, collect-all-errors validation, and
//! miette diagnostics with fuzzy key suggestions.

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AgentConfig, AnthropicConfig, GatewayConfig, ShowroomConfig};
pub use validation::validate_config;

/// Load and validate configuration in one step.
///
/// Figment extraction errors and semantic validation errors both come back
/// as `ConfigError` lists ready for [`render_errors`].
pub fn load_and_validate() -> Result<ShowroomConfig, Vec<ConfigError>> {
    let config = load_config().map_err(diagnostic::figment_to_config_errors)?;
    validate_config(&config)?;
    Ok(config)
}
