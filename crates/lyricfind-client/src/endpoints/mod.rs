//! The four read operations of the `LyricFind` API.

mod lyric;
mod metadata;
mod search;
mod translation;
