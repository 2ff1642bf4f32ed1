use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    /// Builds a binding from canonical key names such as `"ctrl+w"`.
    ///
    /// The first name doubles as the help key. Names that fail to parse are skipped.
    pub fn from_names(names: &[&str], help_desc: impl Into<String>) -> Self {
        let keys = names.iter().filter_map(|n| n.parse().ok()).collect();
        Self::new(names.first().copied().unwrap_or_default(), help_desc, keys)
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }
}

/// Exact match on key and modifiers.
///
/// Shift is ignored for character keys, since terminals already report it through the case (or
/// symbol) of the character itself.
pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    if pattern.code != event.code {
        return false;
    }
    let ignore_shift = matches!(pattern.code, KeyCode::Char(_));
    modifiers_match(pattern.modifiers, event.modifiers, ignore_shift)
}

fn modifiers_match(pattern: KeyModifiers, event: KeyModifiers, ignore_shift: bool) -> bool {
    (ignore_shift || pattern.shift == event.shift)
        && pattern.ctrl == event.ctrl
        && pattern.alt == event.alt
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::ctrl())
}

pub fn key_alt(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers::alt())
}
