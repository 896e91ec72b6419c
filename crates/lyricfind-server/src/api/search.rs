use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use lyricfind_core::Error;
use serde::Deserialize;

use super::{required, CallerIp};
use crate::response::ModelResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
    limit: Option<u32>,
}

/// `GET /search?query=&limit=`: tracks matching a keyword.
pub async fn search(
    State(state): State<AppState>,
    CallerIp(caller): CallerIp,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ModelResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return ModelResponse::malformed(&rejection),
    };
    let Some(query) = required(params.query.as_deref()) else {
        return ModelResponse::bad_request();
    };
    let limit = params.limit.unwrap_or_else(|| state.client().limit());

    let territory = state.territory_for(caller.as_deref()).await;
    let client = state.client_for(territory.as_deref());
    let limit_key = limit.to_string();

    state
        .cached("search", territory.as_deref(), &[query, &limit_key], || async move {
            let tracks = client.search_with_limit(query, limit).await?;
            Ok::<_, Error>(serde_json::to_value(tracks)?)
        })
        .await
}
