//! # lyricfind-server
//!
//! HTTP facade over [`lyricfind_client`].
//!
//! Four read-only routes (`/search`, `/track`, `/lyric`, `/translation`) plus
//! `/health`, each answering with a `{status, message, data}` envelope.
//! Successful answers are cached in memory per route, territory and query.

pub mod api;
pub mod cache;
pub mod config;
pub mod response;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use response::ModelResponse;
pub use state::AppState;
