// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `showroom serve` command implementation.
//!
//! Wires the full stack (catalog -> engine -> tools -> provider ->
//! session directory) and runs the HTTP gateway until Ctrl-C.

use std::sync::Arc;

use tracing::info;

use showroom_agent::{load_system_prompt, SessionDirectory, TurnOptions};
use showroom_anthropic::AnthropicProvider;
use showroom_catalog::Catalog;
use showroom_config::ShowroomConfig;
use showroom_core::{ChatProvider, ShowroomError};
use showroom_engine::QueryEngine;
use showroom_gateway::{start_server, GatewayState, ServerConfig};
use showroom_tools::dealership_registry;

/// Runs the gateway server until shutdown.
pub async fn run_serve(config: ShowroomConfig) -> Result<(), ShowroomError> {
    let catalog = Arc::new(Catalog::sample());
    info!(
        vehicles = catalog.vehicles.len(),
        plans = catalog.financing_plans.len(),
        "catalog loaded"
    );

    let engine = Arc::new(QueryEngine::new(catalog));
    let registry = Arc::new(dealership_registry(Arc::clone(&engine)));

    let provider: Arc<dyn ChatProvider> =
        Arc::new(AnthropicProvider::new(&config).inspect_err(|_| {
            eprintln!(
                "error: Anthropic API key required. Set anthropic.api_key in showroom.toml \
                 or the ANTHROPIC_API_KEY environment variable."
            );
        })?);

    let system_prompt = load_system_prompt(&config.agent).await;
    let directory = Arc::new(SessionDirectory::new(
        provider,
        registry,
        TurnOptions::from_config(&config),
        system_prompt,
    ));

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };
    let state = GatewayState { directory };

    info!(agent = config.agent.name.as_str(), "showroom serving");

    tokio::select! {
        result = start_server(&server_config, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, stopping gateway");
            Ok(())
        }
    }
}
