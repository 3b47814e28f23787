// src/presentation/http/controllers/articles.rs
use crate::application::error::ApplicationError;
use crate::application::ports::webspace::RequestContext;
use crate::application::queries::articles::{FindRecentQuery, DEFAULT_LIMIT};
use crate::domain::article::Locale;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::Query,
    http::{header, HeaderMap},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct RecentArticlesParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    /// Template key to restrict the listing to, e.g. `?type=blogpost`.
    #[serde(default, rename = "type")]
    pub template_key: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Widget endpoint: fetches a page of recent articles, renders them through
/// the article-list template, and wraps the fragment in a JSON envelope.
pub async fn list_recent_articles(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    Query(params): Query<RecentArticlesParams>,
) -> HttpResult<Json<Value>> {
    let locale = params
        .locale
        .map(Locale::new)
        .transpose()
        .map_err(|err| HttpError::from_error(ApplicationError::validation(err.to_string())))?;

    let ctx = RequestContext {
        host: headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        environment: None,
    };

    let query = FindRecentQuery {
        limit: params.limit,
        offset: params.offset,
        template_keys: params.template_key.into_iter().collect(),
        locale,
        ctx,
        ..FindRecentQuery::default()
    };

    let page = state
        .services
        .load_recent_paginated(query)
        .await
        .into_http()?;

    let html = state
        .renderer
        .render_list(&page.articles)
        .map_err(HttpError::internal)?;

    Ok(Json(json!({
        "success": true,
        "html": html,
        "pagination": page.pagination,
        "articlesCount": page.articles.len(),
    })))
}
