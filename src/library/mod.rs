//! Music-library service integration.
//!
//! Provides the wire types exposed by the library service's HTTP API and a
//! client for the two routes the scanner needs: the track listing and the
//! per-track lyrics lookup.

/// API client for library service requests
pub mod api;
/// Data types returned by the library service
pub mod types;

// Re-export key components
pub use api::{LibraryApi, LibraryClient};
pub use types::{LibraryListing, LyricsResult, Track};
