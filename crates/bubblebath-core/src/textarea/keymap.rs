use crate::input::KeyEvent;
use crate::keymap::Binding;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAreaKeyAction {
    CharacterForward,
    CharacterBackward,
    WordForward,
    WordBackward,
    LineNext,
    LinePrevious,
    DeleteWordBackward,
    DeleteWordForward,
    DeleteAfterCursor,
    DeleteBeforeCursor,
    InsertNewline,
    DeleteCharacterBackward,
    DeleteCharacterForward,
    LineStart,
    LineEnd,
    Paste,
    InputBegin,
    InputEnd,
}

#[derive(Clone, Debug)]
pub struct TextAreaKeyMap {
    pub character_forward: Binding,
    pub character_backward: Binding,
    pub word_forward: Binding,
    pub word_backward: Binding,
    pub line_next: Binding,
    pub line_previous: Binding,
    pub delete_word_backward: Binding,
    pub delete_word_forward: Binding,
    pub delete_after_cursor: Binding,
    pub delete_before_cursor: Binding,
    pub insert_newline: Binding,
    pub delete_character_backward: Binding,
    pub delete_character_forward: Binding,
    pub line_start: Binding,
    pub line_end: Binding,
    pub paste: Binding,
    pub input_begin: Binding,
    pub input_end: Binding,
}

impl Default for TextAreaKeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::from_names(&["right", "ctrl+f"], "character forward"),
            character_backward: Binding::from_names(&["left", "ctrl+b"], "character backward"),
            word_forward: Binding::from_names(&["alt+right", "alt+f"], "word forward"),
            word_backward: Binding::from_names(&["alt+left", "alt+b"], "word backward"),
            line_next: Binding::from_names(&["down", "ctrl+n"], "next line"),
            line_previous: Binding::from_names(&["up", "ctrl+p"], "previous line"),
            delete_word_backward: Binding::from_names(
                &["alt+backspace", "ctrl+w"],
                "delete word backward",
            ),
            delete_word_forward: Binding::from_names(
                &["alt+delete", "alt+d"],
                "delete word forward",
            ),
            delete_after_cursor: Binding::from_names(&["ctrl+k"], "delete after cursor"),
            delete_before_cursor: Binding::from_names(&["ctrl+u"], "delete before cursor"),
            insert_newline: Binding::from_names(&["enter", "ctrl+m"], "insert newline"),
            delete_character_backward: Binding::from_names(
                &["backspace", "ctrl+h"],
                "delete character backward",
            ),
            delete_character_forward: Binding::from_names(
                &["delete", "ctrl+d"],
                "delete character forward",
            ),
            line_start: Binding::from_names(&["home", "ctrl+a"], "line start"),
            line_end: Binding::from_names(&["end", "ctrl+e"], "line end"),
            paste: Binding::from_names(&["ctrl+v"], "paste"),
            input_begin: Binding::from_names(&["alt+<", "ctrl+home"], "input begin"),
            input_end: Binding::from_names(&["alt+>", "ctrl+end"], "input end"),
        }
    }
}

impl TextAreaKeyMap {
    fn entries(&self) -> [(&Binding, TextAreaKeyAction); 18] {
        use TextAreaKeyAction as A;
        [
            (&self.character_forward, A::CharacterForward),
            (&self.character_backward, A::CharacterBackward),
            (&self.word_forward, A::WordForward),
            (&self.word_backward, A::WordBackward),
            (&self.line_next, A::LineNext),
            (&self.line_previous, A::LinePrevious),
            (&self.delete_word_backward, A::DeleteWordBackward),
            (&self.delete_word_forward, A::DeleteWordForward),
            (&self.delete_after_cursor, A::DeleteAfterCursor),
            (&self.delete_before_cursor, A::DeleteBeforeCursor),
            (&self.insert_newline, A::InsertNewline),
            (&self.delete_character_backward, A::DeleteCharacterBackward),
            (&self.delete_character_forward, A::DeleteCharacterForward),
            (&self.line_start, A::LineStart),
            (&self.line_end, A::LineEnd),
            (&self.paste, A::Paste),
            (&self.input_begin, A::InputBegin),
            (&self.input_end, A::InputEnd),
        ]
    }

    /// First bound action for `key`, in declaration order.
    pub fn action_for(&self, key: &KeyEvent) -> Option<TextAreaKeyAction> {
        self.entries()
            .into_iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| action)
    }

    /// Every binding in declaration order, for help views.
    pub fn bindings(&self) -> Vec<&Binding> {
        self.entries().into_iter().map(|(b, _)| b).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;
    use crate::input::KeyModifiers;
    use crate::keymap::key_alt;
    use crate::keymap::key_char;
    use crate::keymap::key_ctrl;

    #[test]
    fn default_bindings_resolve() {
        let km = TextAreaKeyMap::default();
        assert_eq!(
            km.action_for(&KeyEvent::new(KeyCode::Right)),
            Some(TextAreaKeyAction::CharacterForward)
        );
        assert_eq!(
            km.action_for(&key_ctrl('w')),
            Some(TextAreaKeyAction::DeleteWordBackward)
        );
        assert_eq!(
            km.action_for(&KeyEvent::new(KeyCode::Backspace).with_modifiers(KeyModifiers::alt())),
            Some(TextAreaKeyAction::DeleteWordBackward)
        );
        assert_eq!(
            km.action_for(&KeyEvent::new(KeyCode::Home).with_modifiers(KeyModifiers::ctrl())),
            Some(TextAreaKeyAction::InputBegin)
        );
        assert_eq!(km.action_for(&key_alt('>')), Some(TextAreaKeyAction::InputEnd));
        assert_eq!(km.action_for(&key_ctrl('v')), Some(TextAreaKeyAction::Paste));
    }

    #[test]
    fn plain_characters_are_unbound() {
        let km = TextAreaKeyMap::default();
        assert_eq!(km.action_for(&key_char('f')), None);
        assert_eq!(km.action_for(&KeyEvent::new(KeyCode::Tab)), None);
    }

    #[test]
    fn every_binding_has_keys_and_help() {
        let km = TextAreaKeyMap::default();
        let bindings = km.bindings();
        assert_eq!(bindings.len(), 18);
        for b in bindings {
            assert!(!b.keys.is_empty(), "{} has no keys", b.help_desc);
            assert!(!b.help_key.is_empty());
        }
    }
}
