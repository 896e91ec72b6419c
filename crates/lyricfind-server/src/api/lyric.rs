use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use lyricfind_core::Error;
use serde::Deserialize;

use super::{required, CallerIp};
use crate::response::ModelResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LyricParams {
    lfid: Option<String>,
}

/// `GET /lyric?lfid=`: full lyrics of a track.
pub async fn lyric(
    State(state): State<AppState>,
    CallerIp(caller): CallerIp,
    params: Result<Query<LyricParams>, QueryRejection>,
) -> ModelResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return ModelResponse::malformed(&rejection),
    };
    let Some(lfid) = required(params.lfid.as_deref()) else {
        return ModelResponse::bad_request();
    };

    let territory = state.territory_for(caller.as_deref()).await;
    let client = state.client_for(territory.as_deref());

    state
        .cached("lyric", territory.as_deref(), &[lfid], || async move {
            let song = client.fetch_lyrics(lfid).await?;
            Ok::<_, Error>(serde_json::to_value(song)?)
        })
        .await
}
