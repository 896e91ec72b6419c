//! Typed projections of `LyricFind` API payloads.

pub mod album;
pub mod artist;
pub mod common;
pub mod lrc;
pub mod song;
pub mod track;
pub mod translation;

pub use album::Album;
pub use artist::Artist;
pub use common::RawSource;
pub use lrc::Lrc;
pub use song::SongData;
pub use track::Track;
pub use translation::Translation;
