//! The editable line store behind [`super::TextArea`].
//!
//! Lines are owned `Vec<char>` rows so every cursor column is a character index. All mutations
//! leave the cursor clamped to `0 <= row < line_count` and `0 <= col <= line_len(row)`.
use crate::text::chars_width;
use crate::text::sanitize;
use tracing::debug;

pub const DEFAULT_MAX_HEIGHT: usize = 99;
pub const DEFAULT_CHAR_LIMIT: usize = 400;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize, // char index within line, may equal the line length
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    lines: Vec<Vec<char>>,
    pub(crate) cursor: Cursor,
    // Display offset remembered across vertical moves; horizontal moves reset it.
    pub(crate) last_char_offset: usize,
    char_limit: usize,
    max_height: usize,
    revision: u64,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            cursor: Cursor::default(),
            last_char_offset: 0,
            char_limit: DEFAULT_CHAR_LIMIT,
            max_height: DEFAULT_MAX_HEIGHT,
            revision: 0,
        }
    }

    /// Maximum accepted length as reported by [`TextBuffer::length`]. Zero means unlimited.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Ceiling on the number of logical lines. Existing lines are never dropped when lowering it.
    pub fn set_max_height(&mut self, max_height: usize) {
        self.max_height = max_height.max(1);
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn lines(&self) -> &[Vec<char>] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> &[char] {
        self.lines.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn last_char_offset(&self) -> usize {
        self.last_char_offset
    }

    /// Bumped on every content mutation; lets callers detect whether an edit did anything.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn value(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line.iter());
        }
        out
    }

    /// Total display width of all lines plus one per line break.
    pub fn length(&self) -> usize {
        let widths: usize = self.lines.iter().map(|l| chars_width(l)).sum();
        widths + self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn set_value(&mut self, s: &str) {
        self.reset();
        self.insert_str(s);
    }

    pub fn reset(&mut self) {
        self.lines = vec![Vec::new()];
        self.cursor = Cursor::default();
        self.last_char_offset = 0;
        self.touch();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut tmp));
    }

    /// Inserts text at the cursor, which ends up right after the inserted content.
    ///
    /// Input beyond the char limit is cut from the end; lines beyond the height ceiling are
    /// dropped.
    pub fn insert_str(&mut self, s: &str) {
        let mut chars = sanitize(s);
        if chars.is_empty() {
            return;
        }
        if self.char_limit > 0 {
            let avail = self.char_limit.saturating_sub(self.length());
            if avail == 0 {
                debug!(limit = self.char_limit, requested = chars.len(), "char limit reached");
                return;
            }
            if chars.len() > avail {
                debug!(
                    limit = self.char_limit,
                    requested = chars.len(),
                    accepted = avail,
                    "truncating input to char limit"
                );
                chars.truncate(avail);
            }
        }

        let mut parts: Vec<Vec<char>> = chars.split(|&c| c == '\n').map(<[char]>::to_vec).collect();
        let room = self.max_height.saturating_sub(self.lines.len()) + 1;
        if parts.len() > room {
            debug!(
                max_height = self.max_height,
                requested = parts.len(),
                accepted = room,
                "dropping lines beyond height ceiling"
            );
            parts.truncate(room);
        }

        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        let last = parts.len() - 1;
        let new_col = if last == 0 {
            col + parts[0].len()
        } else {
            parts[last].len()
        };

        let line = &self.lines[row];
        let tail = line[col..].to_vec();
        let mut first = line[..col].to_vec();
        first.append(&mut parts[0]);
        parts[0] = first;
        parts[last].extend(tail);
        self.lines.splice(row..=row, parts);

        self.cursor = Cursor::new(row + last, new_col);
        self.last_char_offset = 0;
        self.touch();
    }

    /// Removes everything left of the cursor on the current line.
    pub fn delete_before_cursor(&mut self) {
        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        self.lines[row].drain(..col);
        self.set_col(0);
        self.touch();
    }

    /// Removes everything from the cursor to the end of the current line; the cursor lands on the
    /// new last character.
    pub fn delete_after_cursor(&mut self) {
        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        self.lines[row].truncate(col);
        self.set_col(col.saturating_sub(1));
        self.touch();
    }

    /// Deletes the character under the cursor and returns it.
    ///
    /// When the cursor sits past the last character the next line is joined instead and `None` is
    /// returned. With `bind_to_line` the cursor is pulled back onto the last remaining character.
    pub fn delete_char_at_cursor(&mut self, bind_to_line: bool) -> Option<char> {
        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        if col >= self.lines[row].len() {
            self.merge_line_with_next(row);
            return None;
        }
        let ch = self.lines[row].remove(col);
        let len = self.lines[row].len();
        let col = if bind_to_line {
            col.min(len.saturating_sub(1))
        } else {
            col.min(len)
        };
        self.set_col(col);
        self.touch();
        Some(ch)
    }

    /// Deletes the character left of the cursor, joining with the previous line at column 0.
    pub fn delete_char_before_cursor(&mut self) -> Option<char> {
        self.clamp_cursor();
        let Cursor { row, col } = self.cursor;
        if col == 0 {
            self.merge_line_with_previous(row);
            return None;
        }
        let ch = self.lines[row].remove(col - 1);
        self.set_col(col - 1);
        self.touch();
        Some(ch)
    }

    /// Hard line break: text from `col` onward moves to a new line below `row`.
    pub fn split_line(&mut self, row: usize, col: usize) {
        if row >= self.lines.len() || self.lines.len() >= self.max_height {
            return;
        }
        let col = col.min(self.lines[row].len());
        let tail = self.lines[row].split_off(col);
        self.lines.insert(row + 1, tail);
        self.cursor = Cursor::new(row + 1, 0);
        self.last_char_offset = 0;
        self.touch();
    }

    pub fn merge_line_with_next(&mut self, row: usize) {
        if row + 1 >= self.lines.len() {
            return;
        }
        let next = self.lines.remove(row + 1);
        let joint = self.lines[row].len();
        self.lines[row].extend(next);
        if self.cursor.row == row + 1 {
            self.cursor = Cursor::new(row, joint + self.cursor.col);
        } else if self.cursor.row > row + 1 {
            self.cursor.row -= 1;
        }
        self.clamp_cursor();
        self.touch();
    }

    pub fn merge_line_with_previous(&mut self, row: usize) {
        if row == 0 || row >= self.lines.len() {
            return;
        }
        let current = self.lines.remove(row);
        let joint = self.lines[row - 1].len();
        self.lines[row - 1].extend(current);
        if self.cursor.row == row {
            self.cursor = Cursor::new(row - 1, joint + self.cursor.col);
        } else if self.cursor.row > row {
            self.cursor.row -= 1;
        }
        self.clamp_cursor();
        self.touch();
    }

    pub fn clear_line(&mut self, row: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        line.clear();
        if self.cursor.row == row {
            self.set_col(0);
        }
        self.clamp_cursor();
        self.touch();
    }

    /// Removes a line; the last remaining line is cleared instead.
    pub fn delete_line(&mut self, row: usize) {
        if row >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            self.lines = vec![Vec::new()];
            self.set_col(0);
        } else {
            self.lines.remove(row);
            if self.cursor.row > row {
                self.cursor.row -= 1;
            }
        }
        self.clamp_cursor();
        self.touch();
    }

    /// Opens an empty line above the cursor; the cursor stays with its text.
    pub fn insert_line_above(&mut self) {
        if self.lines.len() >= self.max_height {
            return;
        }
        self.lines.insert(self.cursor.row, Vec::new());
        self.cursor.row += 1;
        self.touch();
    }

    pub fn insert_line_below(&mut self) {
        if self.lines.len() >= self.max_height {
            return;
        }
        self.lines.insert(self.cursor.row + 1, Vec::new());
        self.touch();
    }

    pub(crate) fn current_line(&self) -> &[char] {
        self.line(self.cursor.row)
    }

    pub(crate) fn current_line_mut(&mut self) -> &mut Vec<char> {
        &mut self.lines[self.cursor.row]
    }

    /// Moves the cursor column (clamped) and forgets the remembered vertical offset.
    pub(crate) fn set_col(&mut self, col: usize) {
        self.cursor.col = col.min(self.current_line().len());
        self.last_char_offset = 0;
    }

    pub(crate) fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.lines.len() - 1);
        self.cursor.col = self.cursor.col.min(self.lines[self.cursor.row].len());
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
