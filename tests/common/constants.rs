//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (canned provider replies, timeouts, etc.),
//! update only this file.

// ============================================================================
// Canned Provider Replies
// ============================================================================

/// Input text paired with [`WAVE_REPLY`]
pub const WAVE_TEXT: &str = "a huge wave crashing on the shore at sunset";

/// A well-formed reply with energy 8 (medium-spin, 6s, conic, energetic)
pub const WAVE_REPLY: &str = r##"{
  "dominant_colors": ["#1E3A5F", "#4A7BA6", "#F4A460"],
  "energy_level": 8,
  "svg_path": "M0,50 Q25,20 50,50 T100,50"
}"##;

/// A well-formed reply with energy 7 (medium-spin, 6s, radial, energetic)
pub const MEADOW_REPLY: &str = r##"{
  "dominant_colors": ["#7FB069", "#D4E09B", "#F6F4D2"],
  "energy_level": 7,
  "svg_path": null
}"##;

/// A well-formed reply with energy 2 (slow-pulse, 15s, radial, peaceful)
pub const STILL_LAKE_REPLY: &str = r##"{
  "dominant_colors": ["#2C3E50", "#95A5A6"],
  "energy_level": 2,
  "svg_path": null
}"##;

/// [`WAVE_REPLY`] wrapped in a markdown code fence, as Gemini often
/// returns despite instructions
pub const FENCED_WAVE_REPLY: &str = "```json\n{\n  \"dominant_colors\": [\"#1E3A5F\", \"#4A7BA6\", \"#F4A460\"],\n  \"energy_level\": 8,\n  \"svg_path\": \"M0,50 Q25,20 50,50 T100,50\"\n}\n```";

/// A reply missing the required dominant_colors field, which the
/// analyzer rejects wholesale
pub const NO_COLORS_REPLY: &str = r#"{"energy_level": 4}"#;

// ============================================================================
// Fallback Expectations
// ============================================================================

/// Colors of the built-in fallback parameters
pub const FALLBACK_COLORS: [&str; 3] = ["#4A90E2", "#6BB6FF", "#A8E6CF"];

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Default timeout for HTTP requests in tests
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server readiness
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
