//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! conversion service layer for business logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    ConversionResponse, ConvertQuery, HealthResponse, UnitInfoDto, UnitListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{convert_input, result_sentence};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Input applied when the query string omits or blanks the `input` parameter.
const DEFAULT_INPUT: &str = "1L";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and report which
/// unit profile it serves.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        profile: state.table.profile().as_str().to_string(),
        units: state.table.len(),
    }))
}

// =============================================================================
// Conversion
// =============================================================================

/// GET /api/convert
///
/// Convert a quantity expressed in one unit into its counterpart unit.
/// The `input` parameter carries the magnitude and source unit glued
/// together (for example `4gal` or `1/2km`); the optional `target`
/// parameter selects a destination unit other than the default partner.
pub async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> HandlerResult<ConversionResponse> {
    let input = query
        .input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_INPUT);
    let target = query
        .target
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let conversion = convert_input(&state.table, input, target)?;
    let sentence = result_sentence(&state.table, &conversion);

    Ok(Json(ConversionResponse::new(&conversion, sentence)))
}

// =============================================================================
// Unit Listing
// =============================================================================

/// GET /api/units
///
/// List every unit in the active table together with its conversion targets.
pub async fn list_units(State(state): State<AppState>) -> HandlerResult<UnitListResponse> {
    let unit_dtos: Vec<UnitInfoDto> = state.table.iter().map(Into::into).collect();
    let total = unit_dtos.len();

    Ok(Json(UnitListResponse {
        units: unit_dtos,
        total,
    }))
}
