use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Whether a component currently receives input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    Focused,
    #[default]
    Blurred,
}

/// One complete set of text area styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAreaStyle {
    pub cursor: Style,
    pub cursor_line: Style,
    pub cursor_line_number: Style,
    pub end_of_buffer: Style,
    pub line_number: Style,
    pub placeholder: Style,
    pub prompt: Style,
    pub text: Style,
}

/// Styles for both focus states; [`TextAreaTheme::for_focus`] picks the active set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAreaTheme {
    pub focused: TextAreaStyle,
    pub blurred: TextAreaStyle,
}

impl TextAreaTheme {
    pub fn for_focus(&self, focus: Focus) -> &TextAreaStyle {
        match focus {
            Focus::Focused => &self.focused,
            Focus::Blurred => &self.blurred,
        }
    }
}

impl Default for TextAreaTheme {
    fn default() -> Self {
        let cursor = Style::default().add_modifier(Modifier::REVERSED);
        let muted = Style::default().fg(Color::Indexed(7));
        Self {
            focused: TextAreaStyle {
                cursor,
                cursor_line: Style::default().bg(Color::Indexed(0)),
                cursor_line_number: Style::default().fg(Color::Indexed(240)),
                end_of_buffer: Style::default().fg(Color::Indexed(0)),
                line_number: muted,
                placeholder: Style::default().fg(Color::Indexed(240)),
                prompt: muted,
                text: Style::default(),
            },
            blurred: TextAreaStyle {
                cursor,
                cursor_line: muted,
                cursor_line_number: muted,
                end_of_buffer: Style::default().fg(Color::Indexed(0)),
                line_number: muted,
                placeholder: Style::default().fg(Color::Indexed(240)),
                prompt: muted,
                text: muted,
            },
        }
    }
}
