//! Key bindings matched against `bubbletea_rs::KeyMsg`.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held, and no others. `NONE` matches only
    /// unmodified presses. Shift is ignored for character keys, where it is
    /// already part of the character.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// A set of keys that trigger one action, with help text.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Any of these presses triggers the binding.
    pub keys: Vec<KeyPress>,
    /// Short key label shown in help, e.g. `"enter"`.
    pub help: String,
    /// What the binding does, e.g. `"seek here"`.
    pub description: String,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: String::new(),
            description: String::new(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding can match.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Whether `key` triggers this binding.
    pub fn matches(&self, key: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|press| press.code == key.key && press.accepts(key.modifiers))
    }
}

impl KeyPress {
    fn accepts(&self, held: KeyModifiers) -> bool {
        match self.code {
            KeyCode::Char(_) => {
                (held - KeyModifiers::SHIFT) == (self.modifiers - KeyModifiers::SHIFT)
            }
            _ => held == self.modifiers,
        }
    }
}
