//! Translation endpoint implementation.

use lyricfind_core::{Result, Track, Translation};
use tracing::debug;

use crate::{params::Operation, parser::parse_translation, LyricFindClient};

impl LyricFindClient {
    /// Fetch the lyrics of `track` translated into `language`.
    ///
    /// `language` is checked against `track.available_translations`, ignoring
    /// case, before anything is sent. A track without translations or an
    /// unlisted language fails with a validation error.
    pub async fn fetch_translation(&self, track: &Track, language: &str) -> Result<Translation> {
        let language = track.translation_language(language)?;
        debug!("Fetching {language} translation of {}", track.lfid);

        let body = self
            .get(&Operation::Translation {
                lfid: &track.lfid,
                language: &language,
            })
            .await?;
        parse_translation(body)
    }
}
