//! Lyric endpoint implementation.

use lyricfind_core::{Result, SongData};

use crate::{params::Operation, parser::parse_song, LyricFindClient};

impl LyricFindClient {
    /// Fetch the full lyrics of a track by its `lfid`.
    pub async fn fetch_lyrics(&self, lfid: &str) -> Result<SongData> {
        let body = self.get(&Operation::Lyric { lfid }).await?;
        parse_song(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::testing::StubProvider;
    use lyricfind_core::{Album, Track};
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_lyrics_uses_defaults() {
        let lyrics = "Anytime anywhere\n\nI will be there";
        let stub = StubProvider::builder()
            .respond(
                "lyric",
                200,
                json!({"track": {"lfid": "002-1537029", "lyrics": lyrics}}),
            )
            .spawn()
            .await;
        let client = stub.client(Some("JP"));

        let song = client.fetch_lyrics("002-1537029").await.unwrap();
        assert_eq!(song.lyrics, lyrics);
        assert_eq!(song.copyright, "");
        assert_eq!(song.writer, "");

        let track = &song.track;
        assert_eq!(track.lfid, "002-1537029");
        assert_eq!(track.title, "");
        assert_eq!(track.apple, 0);
        assert!(!track.instrumental);
        assert!(track.available_translations.is_empty());
        assert_eq!(track.album, Album::default());
        assert_eq!(
            *track,
            Track {
                lfid: "002-1537029".into(),
                ..Track::default()
            }
        );

        assert_eq!(
            stub.last_request("lyric").unwrap().query["trackid"],
            "lfid:002-1537029"
        );
    }

    #[tokio::test]
    async fn test_lyrics_rate_limited() {
        let stub = StubProvider::builder()
            .respond("lyric", 429, json!({}))
            .spawn()
            .await;
        let client = stub.client(Some("JP"));

        let err = client.fetch_lyrics("1").await.unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "LyricFind error 429: Too many requests");
    }
}
