//! Conversion of a committed scrub position into a seek target.

/// Returns the absolute seek target in milliseconds for a scrub offset.
///
/// The offset is a percentage of `duration_ms` and is clamped to `[0, 100]`
/// before conversion; the result is floored.
///
/// ```rust
/// use bubbletea_playhead::seek::seek_target_ms;
///
/// assert_eq!(seek_target_ms(51.5, 200_000), 103_000);
/// assert_eq!(seek_target_ms(25.0, 180_000), 45_000);
/// ```
pub fn seek_target_ms(offset_percent: f64, duration_ms: u64) -> u64 {
    let offset = if offset_percent.is_nan() {
        0.0
    } else {
        offset_percent.clamp(0.0, 100.0)
    };
    (offset / 100.0 * duration_ms as f64).floor() as u64
}
