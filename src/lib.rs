#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-playhead/")]

//! # bubbletea-playhead
//!
//! A playback-progress widget for terminal media players built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Remote players (streaming services, network speakers, daemons) report their
//! position every second or so. Redrawing only on those reports makes the bar
//! jump. The playhead interpolates between reports at the real playback rate
//! and lets the user scrub the position with the wheel or the keyboard
//! without the animation getting in the way.
//!
//! ## Features
//!
//! - **Smooth interpolation** derived from wall-clock time, capped a
//!   configurable distance ahead of the last report
//! - **Scrubbing** with horizontal wheel deltas or arrow keys, committed with
//!   Enter or abandoned with Escape
//! - **Hooks** for seek requests, scrub start/end and play/pause
//! - **Scoped input capture** held only while a scrub is active
//! - **Snapshot decoding** for `/me/player` style JSON responses
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`playhead`] | The widget: bubbletea-rs model, messages, options, view |
//! | [`interpolation`] | The advancing display position |
//! | [`scrub`] | The scrubbing state machine |
//! | [`truth`] | Reported playback state and snapshot decoding |
//! | [`seek`] | Scrub position to seek target |
//! | [`timefmt`] | `M:SS` formatting |
//! | [`grab`] | Host input capture held during a scrub |
//! | [`key`] | Key bindings |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_playhead::prelude::*;
//!
//! let mut playhead = playhead_new(Truth::new(50.0, false, 200_000), &[]);
//! playhead.set_on_seek(Box::new(|ms| println!("seek to {}", format_time(ms))));
//!
//! playhead.press();
//! playhead.update(Box::new(WheelMsg { delta_x: 1.0, delta_y: 0.0 }));
//! playhead.commit(); // prints "seek to 1:41"
//! ```

pub mod error;
pub mod grab;
pub mod interpolation;
pub mod key;
pub mod playhead;
pub mod scrub;
pub mod seek;
pub mod timefmt;
pub mod truth;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused playhead reacts to its play/pause key while idle. Scrub keys
/// act regardless of focus once a scrub has been started by a press.
///
/// ```rust
/// use bubbletea_playhead::prelude::*;
///
/// let mut playhead = Playhead::default();
/// assert!(!playhead.focused());
///
/// playhead.focus();
/// assert!(playhead.focused());
///
/// playhead.blur();
/// assert!(!playhead.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command to run once focus is gained.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::{Error, Result};
pub use playhead::Model as Playhead;
pub use truth::Truth;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_playhead::prelude::*;
/// ```
pub mod prelude {
    pub use crate::grab::{InputGrab, NoopGrab, SharedGrab};
    pub use crate::interpolation::Engine;
    pub use crate::key::{Binding, KeyPress};
    pub use crate::playhead::{
        default_key_map as playhead_default_key_map, is_press, new as playhead_new, with_fps,
        with_input_grab, with_scrub_step, with_slack, with_width, FrameMsg, KeyMap as PlayheadKeyMap,
        Model as Playhead, PlayheadOption, PressMsg, TruthMsg, WheelMsg,
    };
    pub use crate::scrub::{Direction, Mode};
    pub use crate::seek::seek_target_ms;
    pub use crate::timefmt::format_time;
    pub use crate::truth::{decode_snapshot, Truth};
    pub use crate::Component;
}
