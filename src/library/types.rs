//! Library service data types.
//!
//! These types mirror the JSON bodies of the library service. Only the fields
//! the scanner reads are modelled; anything else in a response is ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// A track entry from the library listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Filesystem-like identifier, used as the lyrics lookup key.
    /// `None` when the entry's `path` is missing or not a string.
    pub path: Option<String>,
    /// Display title, when the service provides one
    pub title: Option<String>,
    /// Display artist, when the service provides one
    pub artist: Option<String>,
}

impl Track {
    /// Track with only a path, as returned by minimal listings
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: Some(path.into()), title: None, artist: None }
    }

    /// Read a listing entry.
    ///
    /// Never fails: a malformed entry yields a track without a path, which
    /// only matters if the scan reaches it.
    pub fn from_entry(entry: &Value) -> Self {
        let text = |key: &str| entry.get(key).and_then(Value::as_str).map(String::from);
        Self {
            path: text("path"),
            title: text("title"),
            artist: text("artist"),
        }
    }

    /// Lookup key, if the entry carried a usable one
    pub fn lookup_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Human-friendly label for log lines
    pub fn label(&self) -> String {
        let path = self.path.as_deref().unwrap_or("<no path>");
        match (self.artist.as_deref(), self.title.as_deref()) {
            (Some(artist), Some(title)) => format!("{artist} - {title} ({path})"),
            (None, Some(title)) => format!("{title} ({path})"),
            _ => path.to_string(),
        }
    }
}

/// Body of `/api/library`.
///
/// Older builds of the service return a bare array; current builds wrap the
/// page in an envelope (`{"tracks": [...], "total": N}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryListing {
    /// Tracks in the service's order
    pub tracks: Vec<Track>,
    /// Library size reported by the envelope, if any
    pub total: Option<usize>,
}

impl LibraryListing {
    /// Listing from already-built tracks, without a reported total
    pub const fn from_tracks(tracks: Vec<Track>) -> Self {
        Self { tracks, total: None }
    }

    /// Interpret a decoded `/api/library` body.
    ///
    /// Only the outer shape is checked here; individual entries are read
    /// leniently by [`Track::from_entry`].
    pub fn from_body(body: &Value) -> Result<Self> {
        match body {
            Value::Array(entries) => Ok(Self::from_tracks(
                entries.iter().map(Track::from_entry).collect(),
            )),
            Value::Object(envelope) => {
                let entries = envelope
                    .get("tracks")
                    .and_then(Value::as_array)
                    .ok_or_else(|| Error::parse("Missing 'tracks' array in library response"))?;
                let total = envelope
                    .get("total")
                    .and_then(Value::as_u64)
                    .and_then(|t| usize::try_from(t).ok());
                Ok(Self {
                    tracks: entries.iter().map(Track::from_entry).collect(),
                    total,
                })
            }
            other => Err(Error::parse(format!(
                "Expected a track array or envelope from library, got {other}"
            ))),
        }
    }
}

/// Body of `/api/lyrics/{path}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResult {
    /// Time-aligned (LRC) lyrics
    #[serde(default)]
    pub synced_lyrics: Option<String>,
    /// Untimed lyrics text
    #[serde(default)]
    pub plain_lyrics: Option<String>,
    /// Whether the track is known to be instrumental
    #[serde(default)]
    pub instrumental: Option<bool>,
}

impl LyricsResult {
    /// Synced lyrics, empty when absent or null
    pub fn synced(&self) -> &str {
        self.synced_lyrics.as_deref().unwrap_or("")
    }

    /// Plain lyrics, empty when absent or null
    pub fn plain(&self) -> &str {
        self.plain_lyrics.as_deref().unwrap_or("")
    }

    /// Whether the service flagged the track as instrumental
    pub fn is_instrumental(&self) -> bool {
        self.instrumental.unwrap_or(false)
    }
}
