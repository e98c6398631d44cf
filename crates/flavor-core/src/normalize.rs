//! Ingredient resolution and response normalization.

use crate::error::{GatewayError, GatewayResult};
use crate::response::{ApiResponse, Insights, UpstreamResponse};
use crate::transport::TransportKind;
use crate::types::{AlgorithmMode, Ingredient};
use std::time::Duration;

/// Maximum suggestions kept for the fast mode.
pub const FAST_MODE_LIMIT: usize = 3;

/// Resolve selected ids against the known ingredients.
///
/// Ids with no match are dropped. The result keeps catalog order.
///
/// # Errors
/// Returns `InvalidInput` if nothing resolved.
pub fn resolve_ingredients(
    selected_ids: &[i64],
    known: &[Ingredient],
) -> GatewayResult<Vec<Ingredient>> {
    let selected: Vec<Ingredient> = known
        .iter()
        .filter(|ingredient| selected_ids.contains(&ingredient.id))
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(GatewayError::no_ingredients());
    }

    Ok(selected)
}

/// Normalize an upstream response into the fixed `ApiResponse` contract.
///
/// Overrides are applied in order: algorithm, complexity, execution time,
/// then the fast-mode cap. Only the caller's mode is trusted; whatever the
/// upstream echoed for algorithm and complexity is discarded.
pub fn normalize(
    upstream: UpstreamResponse,
    mode: &AlgorithmMode,
    kind: TransportKind,
    elapsed: Duration,
) -> ApiResponse {
    let measured_ms = elapsed.as_secs_f64() * 1000.0;
    let reported_ms = upstream.insights.and_then(|i| i.execution_time_ms);

    let algorithm = mode.clone();
    let time_complexity = mode.time_complexity();
    let execution_time_ms = match kind {
        TransportKind::Model => measured_ms,
        TransportKind::Backend => reported_ms.unwrap_or(measured_ms),
    };

    let mut suggestions = upstream.suggestions;
    if mode.is_fast() && suggestions.len() > FAST_MODE_LIMIT {
        suggestions.truncate(FAST_MODE_LIMIT);
    }

    ApiResponse {
        insights: Insights {
            algorithm,
            execution_time_ms,
            time_complexity,
        },
        suggestions,
    }
}
