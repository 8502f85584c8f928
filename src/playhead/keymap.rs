//! Key bindings for the playhead widget.

use crate::key::Binding;
use crossterm::event::KeyCode;

/// Keys understood by the playhead.
///
/// `commit`, `cancel`, `backward` and `forward` only act while scrubbing;
/// `play_pause` only acts while idle and focused.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Seek to the scrubbed position.
    pub commit: Binding,
    /// Abandon the scrub and return to the reported position.
    pub cancel: Binding,
    /// Move the scrub position one step back.
    pub backward: Binding,
    /// Move the scrub position one step forward.
    pub forward: Binding,
    /// Toggle playback.
    pub play_pause: Binding,
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        commit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "seek here"),
        cancel: Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
        backward: Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]).with_help("←/h", "back"),
        forward: Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
            .with_help("→/l", "forward"),
        play_pause: Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "play/pause"),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl KeyMap {
    /// Bindings active in the current mode, for help rendering.
    pub fn short_help(&self, scrubbing: bool) -> Vec<&Binding> {
        if scrubbing {
            vec![&self.backward, &self.forward, &self.commit, &self.cancel]
        } else {
            vec![&self.play_pause]
        }
    }
}
