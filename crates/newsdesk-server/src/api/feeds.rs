use axum::{extract::State, Extension, Json};
use newsdesk_core::FeedEntry;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_feeds(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<FeedEntry>>> {
    Json(ApiResponse {
        data: state.registry.entries().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}
