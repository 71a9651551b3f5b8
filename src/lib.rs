//! `romaji-scan` - find romaji-annotated lyrics in a local music library.
//!
//! This crate queries a running library service over HTTP, walks the head of
//! its track listing and reports the first track whose synced lyrics carry
//! romaji annotations.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod error;
pub mod library;
pub mod lyrics;
pub mod scanner;
