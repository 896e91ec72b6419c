//! Metadata endpoint implementation.

use lyricfind_core::{Result, Track};

use crate::{params::Operation, parser::parse_track, LyricFindClient};

impl LyricFindClient {
    /// Fetch one track by ID.
    ///
    /// The ID must carry its namespace, e.g. `lfid:002-1537029` or
    /// `apple:1609284511`. It is sent verbatim.
    pub async fn fetch_by_id(&self, track_id: &str) -> Result<Track> {
        let body = self.get(&Operation::Metadata { track_id }).await?;
        parse_track(body)
    }
}
