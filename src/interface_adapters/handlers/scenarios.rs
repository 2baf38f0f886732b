use crate::domain::scenario::Scenario;
use crate::interface_adapters::http::{ApiError, parse_json_body};
use crate::interface_adapters::protocol::{
    ActionResponse, GenerateScenarioRequest, GenerateScenarioResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::fixtures::ai_scenarios;
use crate::use_cases::{GenerateScenarioUseCase, ScenarioPrompt};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use serde_json::Value;
use std::sync::Arc;

// Return the scenario catalog as stored.
pub async fn list_scenarios(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let scenarios = state.catalog.list().await.map_err(|err| {
        tracing::error!(error = %err, "failed to load scenario catalog");
        ApiError::InternalFailure("Failed to load scenarios".to_string())
    })?;

    Ok(Json(scenarios))
}

pub async fn list_ai_scenarios() -> Json<Vec<Scenario>> {
    Json(ai_scenarios(&SystemClock))
}

// Build a scenario from the fixed story template.
pub async fn generate_scenario(body: Bytes) -> Result<Json<GenerateScenarioResponse>, ApiError> {
    let request: GenerateScenarioRequest = parse_json_body(&body)?;

    let use_case = GenerateScenarioUseCase { clock: SystemClock };
    let scenario = use_case.execute(ScenarioPrompt {
        theme: request.theme,
        difficulty: request.difficulty,
        file_content: request.file_content,
    });

    tracing::info!(
        scenario_id = %scenario.scenario.id,
        theme = %scenario.scenario.theme,
        difficulty = %scenario.scenario.difficulty,
        "scenario generated"
    );

    Ok(Json(GenerateScenarioResponse {
        success: true,
        scenario,
    }))
}

// Acknowledge a favorite toggle. Nothing is recorded.
#[tracing::instrument(name = "toggle_favorite", skip_all, fields(scenario_id = %id))]
pub async fn toggle_favorite(Path(id): Path<String>) -> Json<ActionResponse> {
    tracing::debug!("favorite toggle acknowledged");

    Json(ActionResponse {
        success: true,
        message: format!("Favorite status toggled for scenario {id}"),
    })
}
