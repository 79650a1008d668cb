//! API Handlers
use advisor_config::{target_thresholds, ConfigMap};
use advisor_core::{EnvironmentalSample, Recommendation, ADVISOR_VERSION};
use advisor_out::EntityState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::metrics::SOURCE_EVALUATE;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateRequest {
    pub sample: EnvironmentalSample,
    #[serde(default)]
    pub target: Option<Target>,
}

/// Comfort target; everything else stays at the configured defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    #[serde(default)]
    pub target_temp: Option<f64>,
    #[serde(default)]
    pub target_hum: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct StateUpdate {
    pub entity_id: String,
    /// `null` when the sensor disappeared
    #[serde(default)]
    pub state: Option<String>,
}

/// Stateless evaluation of one sample
pub async fn evaluate(
    State(app): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Recommendation>, ApiError> {
    let target = request.target.unwrap_or_default();
    let thresholds = target_thresholds(target.target_temp, target.target_hum)
        .map_err(|err| ApiError::Unprocessable(err.to_string()))?;

    let recommendation = advisor_engine::evaluate(&request.sample, &thresholds);
    app.metrics.record(
        SOURCE_EVALUATE,
        recommendation.action,
        recommendation.reason_code,
    );
    Ok(Json(recommendation))
}

pub async fn state_changed(
    State(app): State<AppState>,
    Json(update): Json<StateUpdate>,
) -> Result<StatusCode, ApiError> {
    app.runtime
        .state_changed(update.entity_id, update.state)
        .await?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn update_options(
    State(app): State<AppState>,
    Path(entry_id): Path<String>,
    Json(options): Json<ConfigMap>,
) -> Result<StatusCode, ApiError> {
    app.runtime.update_options(entry_id, options).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_entities(State(app): State<AppState>) -> Json<Vec<EntityState>> {
    Json(app.states.all())
}

pub async fn get_entity(
    State(app): State<AppState>,
    Path(entity_id): Path<String>,
) -> Result<Json<EntityState>, ApiError> {
    app.states
        .get(&entity_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("entity {entity_id}")))
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": ADVISOR_VERSION })),
    )
}

pub async fn metrics(State(app): State<AppState>) -> impl IntoResponse {
    match app.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        ),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
                String::new(),
            )
        }
    }
}
