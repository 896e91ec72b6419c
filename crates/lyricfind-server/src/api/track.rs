use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use lyricfind_core::Error;
use serde::Deserialize;

use super::{required, CallerIp};
use crate::response::ModelResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TrackParams {
    trackid: Option<String>,
}

/// `GET /track?trackid=`: one track by namespaced ID, e.g. `lfid:…` or `apple:…`.
pub async fn track(
    State(state): State<AppState>,
    CallerIp(caller): CallerIp,
    params: Result<Query<TrackParams>, QueryRejection>,
) -> ModelResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return ModelResponse::malformed(&rejection),
    };
    let Some(track_id) = required(params.trackid.as_deref()) else {
        return ModelResponse::bad_request();
    };

    let territory = state.territory_for(caller.as_deref()).await;
    let client = state.client_for(territory.as_deref());

    state
        .cached("track", territory.as_deref(), &[track_id], || async move {
            let track = client.fetch_by_id(track_id).await?;
            Ok::<_, Error>(serde_json::to_value(track)?)
        })
        .await
}
