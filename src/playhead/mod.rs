//! Playback-progress widget for Bubble Tea applications.
//!
//! The playhead shows where a remote player is in the current track. Remote
//! players report their position rarely, so between reports the bar keeps
//! moving at the playback rate on its own. The user can take over the
//! position ("scrub") without the animation fighting them:
//!
//! 1. A press on the track starts a scrub. The animation stops and the time
//!    of the scrub position is drawn on the bar.
//! 2. Horizontal wheel events and the arrow keys move it in fixed steps.
//! 3. Enter seeks there; Escape returns to the reported position.
//!
//! While a scrub is active the playhead owns wheel and arrow input. Hosts
//! that scroll their own views should check
//! [`Model::is_scrubbing`](model::Model::is_scrubbing) before handling such
//! an event and leave it to the playhead when it returns true.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_playhead::playhead::{new, with_width};
//! use bubbletea_playhead::truth::Truth;
//!
//! let mut playhead = new(Truth::new(25.0, true, 180_000), &[with_width(50)]);
//! let _frames = playhead.init();
//!
//! // A poll came back with a new position.
//! let _frames = playhead.set_truth(Truth::new(26.0, true, 180_000));
//! assert_eq!(playhead.displayed(), 26.0);
//! ```
//!
//! # Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_playhead::playhead::{self, PressMsg, WheelMsg};
//! use bubbletea_playhead::truth::Truth;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Player {
//!     playhead: playhead::Model,
//! }
//!
//! impl Model for Player {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let playhead = playhead::new(Truth::default(), &[]);
//!         let cmd = playhead.init();
//!         (Self { playhead }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if !self.playhead.is_scrubbing() {
//!             // Scroll the host's own views here.
//!         }
//!         // Frames, truth reports, presses, wheel and key events.
//!         self.playhead.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.playhead.view()
//!     }
//! }
//! ```

pub mod keymap;
pub mod model;
pub mod options;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
pub use options::{
    with_empty_color, with_fill_characters, with_fps, with_input_grab, with_key_map,
    with_label_color, with_label_threshold, with_scrub_step, with_slack, with_solid_fill,
    with_width, PlayheadOption,
};
pub use types::{
    is_press, FrameMsg, PlayPauseFunc, PressMsg, ScrubbingFunc, SeekFunc, TruthMsg, WheelMsg,
};
