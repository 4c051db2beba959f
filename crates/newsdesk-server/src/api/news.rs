use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use newsdesk_core::{FeedEntry, LayoutMode};
use newsdesk_sentiment::{
    run_news_pipeline, LexiconScorer, NewsView, SentimentClassifier, SvgWordCloud,
    WordCloudRenderer,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{resolve_feed, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct NewsQuery {
    pub feed: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct NewsData {
    feed: FeedEntry,
    layout: LayoutMode,
    #[serde(flatten)]
    view: NewsView,
}

async fn load_view(state: &AppState, feed: &FeedEntry, query: &str) -> NewsView {
    let classifier = SentimentClassifier::new(LexiconScorer::new());
    tracing::debug!(feed = %feed.name, query, "serving news view");
    run_news_pipeline(&state.source, &classifier, &feed.url, query).await
}

pub(super) async fn get_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<ApiResponse<NewsData>>, ApiError> {
    let feed = resolve_feed(&state, &req_id.0, query.feed.as_deref())?;
    let view = load_view(&state, &feed, query.q.as_deref().unwrap_or_default()).await;

    Ok(Json(ApiResponse {
        data: NewsData {
            feed,
            layout: state.layout,
            view,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_suggestions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let feed = resolve_feed(&state, &req_id.0, query.feed.as_deref())?;
    let view = load_view(&state, &feed, query.q.as_deref().unwrap_or_default()).await;

    Ok(Json(ApiResponse {
        data: view.suggestions,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Word cloud over every fetched title in the feed. `q` is ignored.
pub(super) async fn get_wordcloud(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NewsQuery>,
) -> Result<Response, ApiError> {
    let feed = resolve_feed(&state, &req_id.0, query.feed.as_deref())?;
    let view = load_view(&state, &feed, "").await;
    let raster = SvgWordCloud.render(&view.word_cloud_text);

    Ok(([(header::CONTENT_TYPE, raster.media_type)], raster.bytes).into_response())
}
