use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use lyricfind_core::Error;
use serde::Deserialize;

use super::{required, CallerIp};
use crate::response::ModelResponse;
use crate::state::AppState;

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
pub struct TranslationParams {
    lfid: Option<String>,
    lang: Option<String>,
}

/// `GET /translation?lfid=&lang=`: translated lyrics, English by default.
///
/// The track is looked up first so the language can be checked against its
/// available translations.
pub async fn translation(
    State(state): State<AppState>,
    CallerIp(caller): CallerIp,
    params: Result<Query<TranslationParams>, QueryRejection>,
) -> ModelResponse {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return ModelResponse::malformed(&rejection),
    };
    let Some(lfid) = required(params.lfid.as_deref()) else {
        return ModelResponse::bad_request();
    };
    let language = required(params.lang.as_deref())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_lowercase();

    let language = language.as_str();

    let territory = state.territory_for(caller.as_deref()).await;
    let client = state.client_for(territory.as_deref());

    state
        .cached("translation", territory.as_deref(), &[lfid, language], || async move {
            let track = client.fetch_by_id(&format!("lfid:{lfid}")).await?;
            let translation = client.fetch_translation(&track, language).await?;
            Ok::<_, Error>(serde_json::to_value(translation)?)
        })
        .await
}
