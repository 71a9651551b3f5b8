//! Romaji lyrics scanner.
//!
//! Walks the head of the library listing, fetching lyrics one track at a time,
//! and stops at the first track whose synced lyrics carry romaji annotations.
//! Only a failed listing aborts a scan; a track whose lyrics can't be fetched
//! is logged and skipped.

use std::fmt;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::library::{LibraryApi, Track};
use crate::lyrics;

/// A track whose synced lyrics carry romaji annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Library path of the track
    pub path: String,
    /// Leading portion of the synced lyrics
    pub snippet: String,
}

/// Why a track was passed over without being inspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The listing entry had no usable path to look up
    MissingPath,
    /// The service has no lyrics record for the track
    NotFound,
    /// Any other non-success status
    Status(u16),
    /// The request could not be sent or never got a response
    Network(String),
    /// The response body was not valid lyrics JSON
    Parse(String),
}

impl From<Error> for SkipReason {
    fn from(err: Error) -> Self {
        match err {
            Error::Status { status: 404, .. } => Self::NotFound,
            Error::Status { status, .. } => Self::Status(status),
            Error::Network(msg) => Self::Network(msg),
            Error::Parse(msg) => Self::Parse(msg),
            err @ Error::Config { .. } => Self::Network(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(f, "missing or empty path"),
            Self::NotFound => write!(f, "no lyrics found"),
            Self::Status(code) => write!(f, "service returned {code}"),
            Self::Network(msg) | Self::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

/// Result of inspecting a single track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Romaji marker found; the scan stops here
    Romaji(Match),
    /// Synced lyrics without the marker
    Lyrics,
    /// Lyrics record without synced text (plain-only, instrumental or empty)
    NoLyrics,
    /// The track could not be inspected
    Skipped(SkipReason),
}

/// Summary of a finished scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of tracks in the listing
    pub total_tracks: usize,
    /// Number of tracks inspected (including skipped ones)
    pub checked: usize,
    /// Tracks that had synced lyrics
    pub with_lyrics: usize,
    /// Tracks skipped because their lyrics couldn't be fetched
    pub skipped: usize,
    /// First romaji match, if any
    pub matched: Option<Match>,
}

/// Sequential scanner over a [`LibraryApi`]
pub struct Scanner<A> {
    api: A,
    scan_limit: usize,
    snippet_chars: usize,
}

impl<A: LibraryApi> Scanner<A> {
    /// Create a scanner using the limits from `config`
    pub const fn new(api: A, config: &Config) -> Self {
        Self::with_limits(api, config.scan_limit, config.snippet_chars)
    }

    /// Create a scanner with explicit limits
    pub const fn with_limits(api: A, scan_limit: usize, snippet_chars: usize) -> Self {
        Self { api, scan_limit, snippet_chars }
    }

    /// The underlying library API
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Scan the head of the library for the first romaji-annotated track.
    ///
    /// Fails only when the library listing itself can't be fetched.
    pub async fn scan(&self) -> Result<ScanReport> {
        let listing = self.api.fetch_library().await?;
        let tracks = listing.tracks;

        if let Some(total) = listing.total {
            tracing::info!("Library reports {total} tracks, {} listed", tracks.len());
        }

        let mut report = ScanReport {
            total_tracks: tracks.len(),
            ..ScanReport::default()
        };
        tracing::info!(
            "Checking {} of {} tracks...",
            tracks.len().min(self.scan_limit),
            tracks.len()
        );

        for track in tracks.iter().take(self.scan_limit) {
            report.checked += 1;

            match self.inspect(track).await {
                TrackOutcome::Romaji(found) => {
                    report.with_lyrics += 1;
                    tracing::info!("Found romaji lyrics for {}", found.path);
                    report.matched = Some(found);
                    break;
                }
                TrackOutcome::Lyrics => {
                    report.with_lyrics += 1;
                    tracing::info!("Found lyrics (no romaji detected yet)");
                }
                TrackOutcome::NoLyrics => {
                    tracing::debug!("No synced lyrics for {}", track.label());
                }
                TrackOutcome::Skipped(reason) => {
                    report.skipped += 1;
                    tracing::warn!("Skipping {}: {reason}", track.label());
                }
            }
        }

        Ok(report)
    }

    /// Fetch and classify the lyrics of one track
    pub async fn inspect(&self, track: &Track) -> TrackOutcome {
        let Some(path) = track.lookup_path() else {
            return TrackOutcome::Skipped(SkipReason::MissingPath);
        };

        tracing::info!("Checking: {}", track.label());

        let lyrics = match self.api.fetch_lyrics(path).await {
            Ok(lyrics) => lyrics,
            Err(e) => return TrackOutcome::Skipped(e.into()),
        };

        let synced = lyrics.synced();
        if lyrics::has_romaji_marker(synced) {
            TrackOutcome::Romaji(Match {
                path: path.to_string(),
                snippet: lyrics::snippet(synced, self.snippet_chars),
            })
        } else if synced.is_empty() {
            if lyrics.is_instrumental() {
                tracing::debug!("{path} is instrumental");
            } else if !lyrics.plain().is_empty() {
                tracing::debug!("{path} has plain lyrics only");
            }
            TrackOutcome::NoLyrics
        } else {
            TrackOutcome::Lyrics
        }
    }
}
