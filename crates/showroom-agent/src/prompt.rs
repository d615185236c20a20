// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompt resolution: file > inline config > built-in default.

use showroom_config::AgentConfig;
use tracing::{info, warn};

/// The built-in dealership system prompt.
///
/// The assistant must never answer from general knowledge: every claim
/// about vehicles, prices, slots, or financing has to come from a tool
/// result, and missing data is admitted honestly.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
Eres un asistente experto de ventas de un concesionario de automóviles llamado \"AutoMax\". \
Ayudas a los clientes con consultas de inventario, información detallada de vehículos, \
agendamiento de citas, opciones de financiamiento e información general del concesionario.

REGLA FUNDAMENTAL: NUNCA inventes información. SOLO responde con datos obtenidos de las \
herramientas del sistema. Si no tienes información específica, di claramente \"No tengo esa \
información disponible en nuestro sistema\". NO uses conocimiento general sobre marcas, \
garantías o el mercado automotriz, y evita frases como \"generalmente\" o \"típicamente\".

USO DE HERRAMIENTAS: consulta SIEMPRE las herramientas antes de hablar de vehículos, precios, \
horarios o financiamiento. Si una búsqueda no devuelve resultados, explica honestamente que no \
hay vehículos que coincidan. Combina varias herramientas cuando haga falta.

RECOPILACIÓN DE DATOS: no pidas información innecesaria. Para agendar citas necesitas nombre \
completo y teléfono (el email es opcional); en los demás casos trabaja con lo que el cliente \
ofrece voluntariamente.

TONO: profesional pero amigable, directo y honesto sobre tus limitaciones. Tu credibilidad \
depende de ser preciso: es mejor decir \"no tengo esa información\" que inventar datos.";

/// Loads the system prompt following config priority: file > inline > default.
pub async fn load_system_prompt(config: &AgentConfig) -> String {
    // Priority 1: file path
    if let Some(ref file_path) = config.system_prompt_file {
        match tokio::fs::read_to_string(file_path).await {
            Ok(content) => {
                let trimmed = content.trim().to_string();
                if !trimmed.is_empty() {
                    info!(path = file_path.as_str(), "loaded system prompt from file");
                    return trimmed;
                }
            }
            Err(e) => {
                warn!(
                    path = file_path.as_str(),
                    error = %e,
                    "failed to read system prompt file, falling back"
                );
            }
        }
    }

    // Priority 2: inline string
    if let Some(ref prompt) = config.system_prompt {
        if !prompt.is_empty() {
            return prompt.clone();
        }
    }

    // Priority 3: built-in default
    DEFAULT_SYSTEM_PROMPT.to_string()
}
