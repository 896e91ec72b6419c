//! # lyricfind-client
//!
//! Client for the JSON API behind the `LyricFind` lyrics website.
//!
//! The client resolves the caller's territory through a geolocation service,
//! takes a session token from the landing page's cookies, then issues the
//! search, metadata, lyric and translation calls with both attached.
//!
//! ```no_run
//! # async fn run() -> lyricfind_core::Result<()> {
//! use lyricfind_client::LyricFindClient;
//!
//! let client = LyricFindClient::new()?;
//! let track = client.search("Anytime anywhere milet").await?.remove(0);
//! let lyrics = client.fetch_lyrics(&track.lfid).await?;
//! println!("{}", lyrics.lyrics);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod context;
pub mod endpoints;
pub mod geo;
pub mod params;
pub mod parser;
pub mod session;
pub mod types;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::LyricFindClient;
pub use context::ClientConfig;
pub use geo::GeoLocator;
pub use params::Operation;
pub use session::SessionToken;
pub use types::Endpoint;
