//! Application constants.
//!
//! Centralizes the defaults used when no configuration overrides them.

/// Library service connection defaults.
pub mod service {
    /// Default host of the library service.
    pub const DEFAULT_HOST: &str = "localhost";

    /// Default port of the library service.
    pub const DEFAULT_PORT: u16 = 5000;

    /// Default per-request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Route listing the library's tracks.
    pub const LIBRARY_ROUTE: &str = "/api/library";

    /// Route prefix for lyrics lookups; the encoded path is appended.
    pub const LYRICS_ROUTE: &str = "/api/lyrics/";
}

/// Scan constants.
pub mod scan {
    /// Default number of tracks inspected from the start of the listing.
    pub const DEFAULT_SCAN_LIMIT: usize = 20;

    /// Default snippet length, in characters.
    pub const DEFAULT_SNIPPET_CHARS: usize = 200;

    /// Separator that marks a line annotated with its romaji reading.
    pub const ROMAJI_MARKER: &str = " / ";
}
