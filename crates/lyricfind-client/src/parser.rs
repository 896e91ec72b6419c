//! Response parsers for `LyricFind` API bodies.

use lyricfind_core::{Error, ProviderError, Result, SongData, Track, Translation};
use serde::Deserialize;
use serde_json::Value;

use crate::types::{Endpoint, ResponseStatus};

/// Error code embedded in a 200 body, if the provider reported a failure.
pub fn embedded_error(body: &Value) -> Option<ProviderError> {
    let status = ResponseStatus::deserialize(body.get("response")?).ok()?;
    let code = status.error_code()?;
    let error = ProviderError::embedded(code);
    Some(if status.description.is_empty() {
        error
    } else {
        error.with_description(status.description)
    })
}

/// Take the payload for `endpoint` out of a response body.
///
/// A missing or `null` payload is a provider error: the embedded code when the
/// body carries one, otherwise a plain 404.
pub fn payload(mut body: Value, endpoint: Endpoint) -> Result<Value> {
    match body.get_mut(endpoint.payload_key()).map(Value::take) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(missing(&body)),
    }
}

fn missing(body: &Value) -> Error {
    embedded_error(body)
        .unwrap_or_else(ProviderError::not_found)
        .into()
}

/// Parse search results. An empty list counts as not found.
pub fn parse_tracks(body: Value) -> Result<Vec<Track>> {
    let embedded = embedded_error(&body);
    let Value::Array(items) = payload(body, Endpoint::Search)? else {
        return Err(Error::Parse("`tracks` is not a list".to_string()));
    };

    if items.is_empty() {
        return Err(embedded.unwrap_or_else(ProviderError::not_found).into());
    }

    items.into_iter().map(Track::from_value).collect()
}

pub fn parse_track(body: Value) -> Result<Track> {
    Track::from_value(payload(body, Endpoint::Metadata)?)
}

pub fn parse_song(body: Value) -> Result<SongData> {
    SongData::from_value(payload(body, Endpoint::Lyric)?)
}

pub fn parse_translation(body: Value) -> Result<Translation> {
    Translation::from_value(payload(body, Endpoint::Translation)?)
}
