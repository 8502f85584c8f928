//! Authoritative playback state reported by the remote player.
//!
//! A [`Truth`] is what the widget is told, as opposed to what it displays.
//! Values are sanitized on ingestion so the rest of the crate can rely on
//! `progress` being inside `[0, 100]`.
//!
//! Polling the remote service is left to the host application; this module
//! only turns a response body into a [`Truth`]:
//!
//! ```rust
//! use bubbletea_playhead::truth::decode_snapshot;
//!
//! let body = r#"{"progress_ms": 50000, "is_playing": true, "item": {"duration_ms": 200000}}"#;
//! let truth = decode_snapshot(body).unwrap().unwrap();
//! assert_eq!(truth.progress, 25.0);
//! assert!(truth.is_playing);
//! assert_eq!(truth.duration_ms, 200_000);
//!
//! // Nothing playing
//! assert!(decode_snapshot("").unwrap().is_none());
//! ```

use crate::error::Result;
use serde::Deserialize;

/// The last authoritative playback position and state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Truth {
    /// Position as a percentage of `duration_ms`, always within `[0, 100]`.
    pub progress: f64,
    /// Whether the remote player is currently playing.
    pub is_playing: bool,
    /// Track duration in milliseconds. Zero means unknown.
    pub duration_ms: u64,
}

impl Truth {
    /// Creates a new truth value, clamping `progress` into `[0, 100]`.
    ///
    /// A NaN progress is treated as `0`.
    pub fn new(progress: f64, is_playing: bool, duration_ms: u64) -> Self {
        Self {
            progress: clamp_percent(progress),
            is_playing,
            duration_ms,
        }
    }

    /// Builds a truth value from a decoded playback snapshot.
    pub fn from_snapshot(snapshot: &PlaybackSnapshot) -> Self {
        let duration_ms = snapshot
            .item
            .as_ref()
            .and_then(|item| item.duration_ms)
            .unwrap_or_default();
        let progress = match (snapshot.progress_ms, duration_ms) {
            (Some(position), d) if d > 0 => position as f64 / d as f64 * 100.0,
            _ => 0.0,
        };
        Self::new(progress, snapshot.is_playing.unwrap_or_default(), duration_ms)
    }

    /// Whether an engine fed with this truth should advance on its own.
    pub fn advances(&self) -> bool {
        self.is_playing && self.duration_ms > 0
    }
}

impl Default for Truth {
    fn default() -> Self {
        Self::new(0.0, false, 0)
    }
}

/// Clamps a percentage into `[0, 100]`, mapping NaN to `0`.
pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        tracing::debug!("Discarding NaN progress");
        return 0.0;
    }
    let clamped = value.clamp(0.0, 100.0);
    if clamped != value {
        tracing::debug!(value, clamped, "Clamped out-of-range progress");
    }
    clamped
}

/// Remote player state as returned by a `/me/player` style endpoint.
///
/// Only the fields the widget needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaybackSnapshot {
    /// Position inside the current item in milliseconds.
    #[serde(default)]
    pub progress_ms: Option<u64>,
    /// Whether playback is running; absent or `null` means paused.
    #[serde(default)]
    pub is_playing: Option<bool>,
    /// The track or episode being played, if any.
    #[serde(default)]
    pub item: Option<SnapshotItem>,
}

/// The playing item inside a [`PlaybackSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnapshotItem {
    /// Item duration in milliseconds; absent or `null` means unknown.
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

/// Decodes a playback snapshot response body.
///
/// Returns `Ok(None)` when nothing is playing: an empty body (the remote
/// answers `204 No Content` in that case), an empty object, or a snapshot
/// without an item.
pub fn decode_snapshot(body: &str) -> Result<Option<Truth>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let snapshot: PlaybackSnapshot = serde_json::from_str(body)?;
    if snapshot.item.is_none() {
        return Ok(None);
    }
    Ok(Some(Truth::from_snapshot(&snapshot)))
}
