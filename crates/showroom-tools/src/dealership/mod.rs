// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The six dealership tools advertised to the LLM provider.

mod business;
mod details;
mod financing;
mod schedule;
mod search;
mod slots;

use std::sync::Arc;

use showroom_engine::QueryEngine;

use crate::tool::ToolRegistry;

pub use business::BusinessInfoTool;
pub use details::CarDetailsTool;
pub use financing::FinancingOptionsTool;
pub use schedule::ScheduleAppointmentTool;
pub use search::SearchInventoryTool;
pub use slots::AppointmentSlotsTool;

/// Registers all six dealership tools against one shared query engine.
pub fn register_dealership_tools(registry: &mut ToolRegistry, engine: Arc<QueryEngine>) {
    registry.register(Arc::new(SearchInventoryTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(CarDetailsTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(AppointmentSlotsTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(ScheduleAppointmentTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(BusinessInfoTool::new(Arc::clone(&engine))));
    registry.register(Arc::new(FinancingOptionsTool::new(engine)));
}
