//! Playback time formatting.
//!
//! Positions are shown as `M:SS`: minutes are never padded and never roll
//! over into hours, seconds are always two digits.
//!
//! ```rust
//! use bubbletea_playhead::timefmt::format_time;
//!
//! assert_eq!(format_time(0), "0:00");
//! assert_eq!(format_time(65_000), "1:05");
//! assert_eq!(format_time(3_661_000), "61:01");
//! ```

/// Formats a position given in milliseconds as `M:SS`.
///
/// Sub-second remainders are truncated, so `59_999` renders as `0:59`.
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}
