use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use firmadata_core::{AggregateResponse, LookupRequest};
use tracing::Instrument;

use super::AppState;
use crate::middleware::RequestId;

/// `POST /api/firma`
///
/// Always answers 200; a failed lookup is reported in the body's `error`
/// field and failed sources show up as `null`/`[]`.
pub(super) async fn lookup_company(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<LookupRequest>,
) -> Json<AggregateResponse> {
    let span = tracing::info_span!("company_lookup", request_id = %req_id.0);
    let response = Arc::clone(&state.aggregator)
        .lookup(request)
        .instrument(span)
        .await;
    Json(response)
}
