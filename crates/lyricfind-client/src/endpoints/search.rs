//! Search endpoint implementation.

use lyricfind_core::{Result, Track};
use tracing::debug;

use crate::{params::Operation, parser::parse_tracks, LyricFindClient};

impl LyricFindClient {
    /// Search all tracks by keyword, using the client's default limit.
    pub async fn search(&self, query: &str) -> Result<Vec<Track>> {
        self.search_with_limit(query, self.limit()).await
    }

    /// Search all tracks by keyword.
    ///
    /// # Returns
    /// At least one track. An empty result is reported as a not-found
    /// provider error.
    pub async fn search_with_limit(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let body = self.get(&Operation::Search { query, limit }).await?;
        let tracks = parse_tracks(body)?;
        debug!("Search for {query:?} returned {} tracks", tracks.len());
        Ok(tracks)
    }
}
