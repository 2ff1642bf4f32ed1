//! Multi-line text input with soft wrapping, line numbers and a scrolling viewport.
//!
//! [`TextArea`] is event-loop agnostic: the host feeds it [`InputEvent`]s and sizes, and draws it
//! with [`TextArea::render_ref`] (or takes the styled [`TextArea::view`] block). Clipboard access
//! stays with the host: the paste binding yields [`TextAreaAction::PasteRequested`] and the host
//! answers through [`TextArea::paste_result`].
mod buffer;
mod cursor;
mod keymap;
mod line_info;
mod view;

use std::fmt;
use std::sync::Arc;

pub use buffer::Cursor;
pub use buffer::DEFAULT_CHAR_LIMIT;
pub use buffer::DEFAULT_MAX_HEIGHT;
pub use buffer::TextBuffer;
pub use cursor::CharStop;
pub use cursor::Direction;
pub use cursor::WordStop;
pub use keymap::TextAreaKeyAction;
pub use keymap::TextAreaKeyMap;
pub use line_info::LineInfo;

use crate::error::ClipboardError;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::text::str_width;
use crate::theme::Focus;
use crate::theme::TextAreaStyle;
use crate::theme::TextAreaTheme;
use crate::viewport::ViewportState;
use tracing::trace;
use tracing::warn;

pub const MIN_HEIGHT: usize = 1;
pub const MIN_WIDTH: usize = 2;
pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_HEIGHT: u16 = 6;
pub const DEFAULT_MAX_WIDTH: usize = 500;

// Two columns for the number plus one separating space.
const GUTTER_WIDTH: usize = 3;

/// Text drawn in front of every visual row.
#[derive(Clone)]
pub enum Prompt {
    Static(String),
    /// Called with the absolute visual row index. Output narrower than `width` is left-padded.
    Dynamic {
        width: usize,
        generate: Arc<dyn Fn(usize) -> String + Send + Sync>,
    },
}

impl Prompt {
    pub fn dynamic(width: usize, generate: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        Prompt::Dynamic {
            width,
            generate: Arc::new(generate),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Prompt::Static(s) => str_width(s),
            Prompt::Dynamic { width, .. } => *width,
        }
    }

    pub fn text_for_row(&self, row: usize) -> String {
        match self {
            Prompt::Static(s) => s.clone(),
            Prompt::Dynamic { width, generate } => {
                let s = generate(row);
                let pad = width.saturating_sub(str_width(&s));
                format!("{}{s}", " ".repeat(pad))
            }
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Prompt::Static("┃ ".to_string())
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Prompt::Dynamic { width, .. } => f
                .debug_struct("Dynamic")
                .field("width", width)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextAreaOptions {
    /// Maximum [`TextArea::length`]; zero means unlimited.
    pub char_limit: usize,
    pub show_line_numbers: bool,
    pub prompt: Prompt,
    pub placeholder: String,
    pub end_of_buffer_char: char,
    /// Ceiling on both the number of logical lines and the viewport height.
    pub max_height: usize,
    /// Ceiling on the wrap width.
    pub max_width: usize,
    pub theme: TextAreaTheme,
    pub keymap: TextAreaKeyMap,
}

impl Default for TextAreaOptions {
    fn default() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
            show_line_numbers: true,
            prompt: Prompt::default(),
            placeholder: String::new(),
            end_of_buffer_char: '~',
            max_height: DEFAULT_MAX_HEIGHT,
            max_width: DEFAULT_MAX_WIDTH,
            theme: TextAreaTheme::default(),
            keymap: TextAreaKeyMap::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextAreaAction {
    None,
    Changed,
    /// The paste binding fired; fetch the clipboard and call [`TextArea::paste_result`].
    PasteRequested,
    PasteFailed(ClipboardError),
}

#[derive(Clone, Debug)]
pub struct TextArea {
    buffer: TextBuffer,
    viewport: ViewportState,
    // Wrap width and visible row count derived from the last resize.
    width: usize,
    height: usize,
    last_size: (u16, u16),
    focus: Focus,
    options: TextAreaOptions,
    last_error: Option<ClipboardError>,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::with_options(TextAreaOptions::default())
    }

    pub fn with_options(options: TextAreaOptions) -> Self {
        let mut buffer = TextBuffer::new();
        buffer.set_char_limit(options.char_limit);
        buffer.set_max_height(options.max_height);
        let mut ta = Self {
            buffer,
            viewport: ViewportState::default(),
            width: 0,
            height: 0,
            last_size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            focus: Focus::default(),
            options,
            last_error: None,
        };
        ta.resize(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        ta
    }

    pub fn options(&self) -> &TextAreaOptions {
        &self.options
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn y_offset(&self) -> usize {
        self.viewport.y as usize
    }

    /// Width available to the line wrapper.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets the outer size in cells. The wrap width is what remains after the prompt and the
    /// line-number gutter.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.last_size = (width, height);
        let max_width = self.options.max_width.max(MIN_WIDTH);
        let max_height = self.options.max_height.max(MIN_HEIGHT);
        let reserved = self.prompt_width() + self.gutter_width();

        self.width = (width as usize)
            .saturating_sub(reserved)
            .clamp(MIN_WIDTH, max_width);
        self.height = (height as usize).clamp(MIN_HEIGHT, max_height);
        self.viewport.set_viewport_height(self.height as u16);
        trace!(
            width = self.width,
            height = self.height,
            reserved,
            "text area resized"
        );
        self.reposition();
    }

    pub fn set_prompt(&mut self, prompt: Prompt) {
        self.options.prompt = prompt;
        self.resize(self.last_size.0, self.last_size.1);
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.options.show_line_numbers = show;
        self.resize(self.last_size.0, self.last_size.1);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.options.placeholder = placeholder.into();
    }

    pub fn set_end_of_buffer_char(&mut self, ch: char) {
        self.options.end_of_buffer_char = ch;
    }

    pub fn set_char_limit(&mut self, limit: usize) {
        self.options.char_limit = limit;
        self.buffer.set_char_limit(limit);
    }

    pub fn set_max_height(&mut self, max_height: usize) {
        self.options.max_height = max_height;
        self.buffer.set_max_height(max_height);
        self.resize(self.last_size.0, self.last_size.1);
    }

    pub fn set_max_width(&mut self, max_width: usize) {
        self.options.max_width = max_width;
        self.resize(self.last_size.0, self.last_size.1);
    }

    pub fn set_theme(&mut self, theme: TextAreaTheme) {
        self.options.theme = theme;
    }

    pub fn keymap_mut(&mut self) -> &mut TextAreaKeyMap {
        &mut self.options.keymap
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus(&mut self) {
        self.set_focus(Focus::Focused);
    }

    pub fn blur(&mut self) {
        self.set_focus(Focus::Blurred);
    }

    pub fn is_focused(&self) -> bool {
        self.focus == Focus::Focused
    }

    /// The style set for the current focus state.
    pub fn style(&self) -> &TextAreaStyle {
        self.options.theme.for_focus(self.focus)
    }

    pub fn last_error(&self) -> Option<&ClipboardError> {
        self.last_error.as_ref()
    }

    pub fn value(&self) -> String {
        self.buffer.value()
    }

    pub fn set_value(&mut self, s: &str) {
        self.buffer.set_value(s);
        self.reposition();
    }

    pub fn reset(&mut self) {
        self.buffer.reset();
        self.reposition();
    }

    pub fn length(&self) -> usize {
        self.buffer.length()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.buffer.cursor()
    }

    pub fn cursor_row(&self) -> usize {
        self.buffer.cursor().row
    }

    pub fn cursor_col(&self) -> usize {
        self.buffer.cursor().col
    }

    pub fn line_info(&self) -> LineInfo {
        self.buffer.line_info(self.width)
    }

    pub fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(s);
        self.reposition();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert_char(ch);
        self.reposition();
    }

    pub fn insert_line_above(&mut self) {
        self.buffer.insert_line_above();
        self.reposition();
    }

    pub fn insert_line_below(&mut self) {
        self.buffer.insert_line_below();
        self.reposition();
    }

    pub fn set_cursor_column(&mut self, col: usize) {
        self.buffer.set_cursor_column(col);
        self.reposition();
    }

    pub fn set_cursor_row(&mut self, row: usize) {
        self.buffer.set_cursor_row(row, self.width);
        self.reposition();
    }

    pub fn move_to_line_start(&mut self) {
        self.buffer.move_to_line_start();
        self.reposition();
    }

    pub fn move_to_line_end(&mut self, bind_to_line: bool) {
        self.buffer.move_to_line_end(bind_to_line);
        self.reposition();
    }

    pub fn move_to_first_row(&mut self) {
        self.buffer.move_to_first_row(self.width);
        self.reposition();
    }

    pub fn move_to_last_row(&mut self) {
        self.buffer.move_to_last_row(self.width);
        self.reposition();
    }

    pub fn move_up(&mut self, bind_to_line: bool) {
        self.buffer.move_up(bind_to_line, self.width);
        self.reposition();
    }

    pub fn move_down(&mut self, bind_to_line: bool) {
        self.buffer.move_down(bind_to_line, self.width);
        self.reposition();
    }

    pub fn move_by_word(&mut self, direction: Direction, stop: WordStop) {
        self.buffer.move_by_word(direction, stop);
        self.reposition();
    }

    pub fn move_word_right(&mut self) {
        self.buffer.move_word_right();
        self.reposition();
    }

    pub fn seek_to_char(&mut self, target: char, direction: Direction, stop: CharStop) {
        self.buffer.seek_to_char(target, direction, stop);
        self.reposition();
    }

    pub fn delete_line(&mut self, row: usize) {
        self.buffer.delete_line(row);
        self.reposition();
    }

    pub fn clear_line(&mut self, row: usize) {
        self.buffer.clear_line(row);
        self.reposition();
    }

    /// Handles one host event. Blurred text areas ignore input.
    pub fn input(&mut self, event: InputEvent) -> TextAreaAction {
        if !self.is_focused() {
            return TextAreaAction::None;
        }
        let revision = self.buffer.revision();
        let action = match event {
            InputEvent::Paste(s) => {
                self.buffer.insert_str(&s);
                TextAreaAction::None
            }
            InputEvent::Key(key) => self.handle_key(&key),
        };
        self.reposition();
        self.changed_since(revision, action)
    }

    /// Delivers the clipboard contents requested by [`TextAreaAction::PasteRequested`].
    ///
    /// A failed retrieval leaves the buffer untouched and is kept as [`TextArea::last_error`].
    pub fn paste_result(&mut self, result: Result<String, ClipboardError>) -> TextAreaAction {
        match result {
            Ok(s) => {
                self.last_error = None;
                let revision = self.buffer.revision();
                self.buffer.insert_str(&s);
                self.reposition();
                self.changed_since(revision, TextAreaAction::None)
            }
            Err(err) => {
                warn!(error = %err, "clipboard paste failed");
                self.last_error = Some(err.clone());
                TextAreaAction::PasteFailed(err)
            }
        }
    }

    fn changed_since(&self, revision: u64, action: TextAreaAction) -> TextAreaAction {
        if action == TextAreaAction::None && self.buffer.revision() != revision {
            TextAreaAction::Changed
        } else {
            action
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> TextAreaAction {
        let Some(action) = self.options.keymap.action_for(key) else {
            if !key.modifiers.ctrl && !key.modifiers.alt {
                match key.code {
                    KeyCode::Char(c) => self.buffer.insert_char(c),
                    KeyCode::Tab => self.buffer.insert_str("\t"),
                    _ => {}
                }
            }
            return TextAreaAction::None;
        };

        let width = self.width;
        let Cursor { row, col } = self.buffer.cursor();
        let at_line_end = col >= self.buffer.line(row).len();
        let b = &mut self.buffer;
        match action {
            TextAreaKeyAction::CharacterForward => b.move_right(false),
            TextAreaKeyAction::CharacterBackward => b.move_left(),
            TextAreaKeyAction::WordForward => b.move_by_word(Direction::Right, WordStop::Incidence),
            TextAreaKeyAction::WordBackward => b.move_by_word(Direction::Left, WordStop::Terminus),
            TextAreaKeyAction::LineNext => b.move_down(false, width),
            TextAreaKeyAction::LinePrevious => b.move_up(false, width),
            TextAreaKeyAction::DeleteWordBackward => {
                if col == 0 {
                    b.merge_line_with_previous(row);
                } else {
                    b.delete_word_left();
                }
            }
            TextAreaKeyAction::DeleteWordForward => {
                if at_line_end {
                    b.merge_line_with_next(row);
                } else {
                    b.delete_word_right();
                }
            }
            TextAreaKeyAction::DeleteAfterCursor => {
                if at_line_end {
                    b.merge_line_with_next(row);
                } else {
                    b.delete_after_cursor();
                }
            }
            TextAreaKeyAction::DeleteBeforeCursor => {
                if col == 0 {
                    b.merge_line_with_previous(row);
                } else {
                    b.delete_before_cursor();
                }
            }
            TextAreaKeyAction::InsertNewline => {
                if b.line_count() < b.max_height() {
                    b.split_line(row, col);
                }
            }
            TextAreaKeyAction::DeleteCharacterBackward => {
                b.delete_char_before_cursor();
            }
            TextAreaKeyAction::DeleteCharacterForward => {
                b.delete_char_at_cursor(false);
            }
            TextAreaKeyAction::LineStart => b.move_to_line_start(),
            TextAreaKeyAction::LineEnd => b.move_to_line_end(false),
            TextAreaKeyAction::Paste => return TextAreaAction::PasteRequested,
            TextAreaKeyAction::InputBegin => {
                b.move_to_first_row(width);
                b.move_to_line_start();
            }
            TextAreaKeyAction::InputEnd => {
                b.move_to_last_row(width);
                b.move_to_line_end(false);
            }
        }
        TextAreaAction::None
    }

    /// Scrolls the minimum distance that keeps the cursor's visual row on screen.
    pub fn reposition(&mut self) {
        let rows = self.buffer.visual_row_count(self.width) as u32;
        self.viewport.set_content(rows);
        let row = self.buffer.cursor_visual_row(self.width) as u32;
        self.viewport.scroll_to_include(row);
    }

    fn prompt_width(&self) -> usize {
        self.options.prompt.width()
    }

    fn gutter_width(&self) -> usize {
        if self.options.show_line_numbers {
            GUTTER_WIDTH
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyModifiers;
    use crate::keymap::key_alt;
    use crate::keymap::key_char;
    use crate::keymap::key_ctrl;

    fn focused(text: &str) -> TextArea {
        let mut ta = TextArea::new();
        ta.focus();
        ta.set_value(text);
        ta
    }

    fn key(ta: &mut TextArea, k: KeyEvent) -> TextAreaAction {
        ta.input(InputEvent::Key(k))
    }

    fn code(c: KeyCode) -> KeyEvent {
        KeyEvent::new(c)
    }

    #[test]
    fn typing_inserts_and_reports_change() {
        let mut ta = focused("");
        assert_eq!(key(&mut ta, key_char('h')), TextAreaAction::Changed);
        assert_eq!(key(&mut ta, key_char('i')), TextAreaAction::Changed);
        assert_eq!(ta.value(), "hi");
        assert_eq!(key(&mut ta, code(KeyCode::Left)), TextAreaAction::None);
        assert_eq!(ta.cursor_col(), 1);
    }

    #[test]
    fn blurred_text_area_ignores_input() {
        let mut ta = TextArea::new();
        assert!(!ta.is_focused());
        assert_eq!(key(&mut ta, key_char('x')), TextAreaAction::None);
        assert_eq!(ta.value(), "");
    }

    #[test]
    fn unbound_modified_characters_are_ignored() {
        let mut ta = focused("");
        assert_eq!(key(&mut ta, key_ctrl('z')), TextAreaAction::None);
        assert_eq!(key(&mut ta, key_alt('z')), TextAreaAction::None);
        assert_eq!(ta.value(), "");
    }

    #[test]
    fn tab_inserts_four_spaces() {
        let mut ta = focused("ab");
        assert_eq!(key(&mut ta, code(KeyCode::Tab)), TextAreaAction::Changed);
        assert_eq!(ta.value(), "ab    ");
        assert_eq!(ta.cursor_col(), 6);
    }

    #[test]
    fn backspace_family_merges_at_line_start() {
        for k in [code(KeyCode::Backspace), key_ctrl('u'), key_ctrl('w')] {
            let mut ta = focused("ab\ncd");
            ta.set_cursor_row(1);
            ta.move_to_line_start();
            assert_eq!(key(&mut ta, k.clone()), TextAreaAction::Changed, "{k}");
            assert_eq!(ta.value(), "abcd", "{k}");
            assert_eq!(ta.cursor(), Cursor::new(0, 2), "{k}");
        }
    }

    #[test]
    fn delete_family_merges_at_line_end() {
        for k in [code(KeyCode::Delete), key_ctrl('k'), key_alt('d')] {
            let mut ta = focused("ab\ncd");
            ta.move_to_first_row();
            ta.move_to_line_end(false);
            assert_eq!(key(&mut ta, k.clone()), TextAreaAction::Changed, "{k}");
            assert_eq!(ta.value(), "abcd", "{k}");
        }
    }

    #[test]
    fn word_keys_move_and_delete() {
        let mut ta = focused("foo bar baz");
        key(&mut ta, code(KeyCode::Home));
        key(&mut ta, key_alt('f'));
        assert_eq!(ta.cursor_col(), 4);
        key(&mut ta, code(KeyCode::End));
        key(&mut ta, key_alt('b'));
        assert_eq!(ta.cursor_col(), 8);
        key(&mut ta, key_ctrl('w'));
        assert_eq!(ta.value(), "foo baz");
    }

    #[test]
    fn newline_respects_height_ceiling() {
        let mut ta = TextArea::with_options(TextAreaOptions {
            max_height: 2,
            ..Default::default()
        });
        ta.focus();
        assert_eq!(key(&mut ta, code(KeyCode::Enter)), TextAreaAction::Changed);
        assert_eq!(key(&mut ta, code(KeyCode::Enter)), TextAreaAction::None);
        assert_eq!(ta.line_count(), 2);
    }

    #[test]
    fn input_begin_and_end_jump_across_lines() {
        let mut ta = focused("one\ntwo\nthree");
        let ctrl_home = code(KeyCode::Home).with_modifiers(KeyModifiers::ctrl());
        key(&mut ta, ctrl_home);
        assert_eq!(ta.cursor(), Cursor::new(0, 0));
        key(&mut ta, key_alt('>'));
        assert_eq!(ta.cursor(), Cursor::new(2, 5));
    }

    #[test]
    fn paste_binding_requests_clipboard() {
        let mut ta = focused("");
        assert_eq!(key(&mut ta, key_ctrl('v')), TextAreaAction::PasteRequested);
        assert_eq!(
            ta.paste_result(Ok("a\nb".to_string())),
            TextAreaAction::Changed
        );
        assert_eq!(ta.value(), "a\nb");
        assert_eq!(ta.last_error(), None);
    }

    #[test]
    fn failed_paste_leaves_buffer_untouched() {
        let mut ta = focused("keep");
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(
            ta.paste_result(Err(err.clone())),
            TextAreaAction::PasteFailed(err.clone())
        );
        assert_eq!(ta.value(), "keep");
        assert_eq!(ta.last_error(), Some(&err));
    }

    #[test]
    fn bracketed_paste_respects_char_limit() {
        let mut ta = TextArea::with_options(TextAreaOptions {
            char_limit: 5,
            ..Default::default()
        });
        ta.focus();
        let act = ta.input(InputEvent::Paste("hello world".to_string()));
        assert_eq!(act, TextAreaAction::Changed);
        assert_eq!(ta.value(), "hello");
        assert_eq!(ta.cursor(), Cursor::new(0, 5));
    }

    #[test]
    fn resize_subtracts_prompt_and_gutter() {
        let mut ta = TextArea::new();
        ta.resize(20, 4);
        assert_eq!(ta.width(), 20 - 2 - 3);
        assert_eq!(ta.height(), 4);
        ta.set_show_line_numbers(false);
        assert_eq!(ta.width(), 18);
        ta.set_prompt(Prompt::dynamic(4, |row| format!("{row}>")));
        assert_eq!(ta.width(), 16);
        ta.resize(1, 0);
        assert_eq!(ta.width(), MIN_WIDTH);
        assert_eq!(ta.height(), MIN_HEIGHT);
    }

    #[test]
    fn dynamic_prompt_is_left_padded() {
        let p = Prompt::dynamic(4, |row| format!("{row}>"));
        assert_eq!(p.text_for_row(7), "  7>");
        assert_eq!(p.width(), 4);
        assert_eq!(Prompt::default().width(), 2);
    }

    #[test]
    fn viewport_follows_cursor() {
        let mut ta = focused("");
        ta.resize(20, 3);
        for _ in 0..6 {
            key(&mut ta, key_char('x'));
            key(&mut ta, code(KeyCode::Enter));
        }
        assert_eq!(ta.cursor_row(), 6);
        assert_eq!(ta.y_offset(), 4);
        key(&mut ta, key_alt('<'));
        assert_eq!(ta.y_offset(), 0);
    }

    #[test]
    fn reposition_is_idempotent() {
        let mut ta = focused("a\nb\nc\nd\ne\nf\ng");
        ta.resize(20, 2);
        ta.reposition();
        let once = *ta.viewport();
        ta.reposition();
        assert_eq!(*ta.viewport(), once);
    }

    #[test]
    fn vertical_keys_walk_wrapped_rows() {
        let mut ta = focused("aaaaa bbbbb");
        // 5 columns of wrap width once the prompt and gutter are taken off.
        ta.resize(10, 4);
        assert_eq!(ta.width(), 5);
        ta.move_to_line_start();
        key(&mut ta, code(KeyCode::Down));
        assert_eq!(ta.cursor(), Cursor::new(0, 6));
        key(&mut ta, code(KeyCode::Up));
        assert_eq!(ta.cursor(), Cursor::new(0, 0));
    }
}
