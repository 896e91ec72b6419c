//! Route handlers.
//!
//! Every handler answers with a [`ModelResponse`](crate::response::ModelResponse).
//! Required parameters are trimmed; a missing or blank one is a 400 and an
//! undecodable query string is a 422.

mod caller;
mod health;
mod lyric;
mod search;
mod track;
mod translation;

pub use caller::CallerIp;
pub use health::{health, not_found};
pub use lyric::lyric;
pub use search::search;
pub use track::track;
pub use translation::translation;

/// Trimmed value of a required parameter, or `None` when missing or blank.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
