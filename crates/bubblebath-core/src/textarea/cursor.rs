//! Cursor motion: character, visual-row, word and character-seek movement.
//!
//! Every motion is total. Hitting a buffer edge simply stops the cursor; nothing here fails.
use super::buffer::TextBuffer;
use crate::text::char_width;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Where word motion stops, measured in the direction of travel.
///
/// Moving right, `Incidence` is the first character of the next word and `Terminus` is just past
/// the end of the current (or next) word. Moving left, `Incidence` is the last character of the
/// previous word and `Terminus` is its first character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStop {
    Incidence,
    Terminus,
}

impl WordStop {
    // Offset of the cell that must be whitespace, relative to the direction of travel.
    fn adjacent(self) -> isize {
        match self {
            WordStop::Incidence => -1,
            WordStop::Terminus => 1,
        }
    }
}

/// Where a character seek stops: on the target (Vim `f`) or one cell short of it (Vim `t`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharStop {
    On,
    Before,
}

impl TextBuffer {
    pub fn set_cursor_column(&mut self, col: usize) {
        self.set_col(col);
    }

    pub fn move_to_line_start(&mut self) {
        self.set_col(0);
    }

    /// With `bind_to_line` the cursor stops on the last character instead of one past it.
    pub fn move_to_line_end(&mut self, bind_to_line: bool) {
        let len = self.current_line().len();
        let col = if bind_to_line {
            len.saturating_sub(1)
        } else {
            len
        };
        self.set_col(col);
    }

    pub fn move_right(&mut self, bind_to_line: bool) {
        let len = self.current_line().len();
        let limit = if bind_to_line {
            len.saturating_sub(1)
        } else {
            len
        };
        if self.cursor.col < limit {
            self.set_col(self.cursor.col + 1);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.set_col(self.cursor.col - 1);
        }
    }

    /// Moves one visual row down, into the next logical line once the last wrapped row is left.
    pub fn move_down(&mut self, bind_to_line: bool, width: usize) {
        let li = self.line_info(width);
        let char_offset = self.last_char_offset.max(li.char_offset);
        self.last_char_offset = char_offset;

        if li.row_offset + 1 >= li.height {
            if self.cursor.row + 1 < self.line_count() {
                self.cursor.row += 1;
                self.cursor.col = 0;
            } else {
                self.cursor.col = li.start_column;
            }
        } else {
            self.cursor.col = li.start_column + li.width;
        }
        self.align_to_offset(char_offset, bind_to_line, width);
    }

    /// Moves one visual row up, into the previous logical line once the first wrapped row is left.
    pub fn move_up(&mut self, bind_to_line: bool, width: usize) {
        let li = self.line_info(width);
        let char_offset = self.last_char_offset.max(li.char_offset);
        self.last_char_offset = char_offset;

        if li.row_offset == 0 {
            if self.cursor.row > 0 {
                self.cursor.row -= 1;
                self.cursor.col = self.current_line().len();
            } else {
                self.cursor.col = li.start_column;
            }
        } else {
            self.cursor.col = li.start_column - 1;
        }
        self.align_to_offset(char_offset, bind_to_line, width);
    }

    /// Walks from the start of the cursor's visual row until `char_offset` columns are covered.
    fn align_to_offset(&mut self, char_offset: usize, bind_to_line: bool, width: usize) {
        self.clamp_cursor();
        let li = self.line_info(width);
        self.cursor.col = li.start_column;
        if li.width == 0 {
            return;
        }

        let len = self.current_line().len();
        let stop = if bind_to_line {
            len.saturating_sub(1)
        } else {
            len
        };
        let mut offset = 0usize;
        while offset < char_offset {
            if self.cursor.col >= stop || offset >= li.char_width.saturating_sub(1) {
                break;
            }
            offset += char_width(self.current_line()[self.cursor.col]);
            self.cursor.col += 1;
        }
    }

    /// Moves vertically until `target` (clamped) is the cursor's logical row.
    pub fn set_cursor_row(&mut self, target: usize, width: usize) {
        let target = target.min(self.line_count() - 1);
        while self.cursor.row != target {
            let before = self.cursor;
            if self.cursor.row < target {
                self.move_down(true, width);
            } else {
                self.move_up(true, width);
            }
            if self.cursor == before {
                break;
            }
        }
    }

    pub fn move_to_first_row(&mut self, width: usize) {
        self.set_cursor_row(0, width);
    }

    pub fn move_to_last_row(&mut self, width: usize) {
        self.set_cursor_row(self.line_count() - 1, width);
    }

    /// Word motion over the whole buffer read as one tape, line breaks acting as whitespace.
    ///
    /// The cursor stops when the character under it is not whitespace and its neighbour on the
    /// `stop` side is whitespace or off the line. Empty lines always stop the motion. At either
    /// end of the tape the cursor stays at the last position it reached.
    pub fn move_by_word(&mut self, direction: Direction, stop: WordStop) {
        self.clamp_cursor();
        let step = direction.step();
        let past_word_end = direction == Direction::Right && stop == WordStop::Terminus;

        let len = self.current_line().len() as isize;
        let col = self.cursor.col as isize;
        let mut next = if past_word_end {
            col
        } else {
            col.min(len - 1) + step
        };

        loop {
            let len = self.current_line().len() as isize;
            let off_line = match direction {
                Direction::Right => next > len - 1,
                Direction::Left => next < 0,
            };
            if off_line {
                let row = self.cursor.row as isize + step;
                if row < 0 || row >= self.line_count() as isize {
                    return;
                }
                self.cursor.row = row as usize;
                next = match direction {
                    Direction::Right => 0,
                    Direction::Left => self.current_line().len() as isize - 1,
                };
            }

            self.set_col(next.max(0) as usize);
            next = self.cursor.col as isize + step;

            let line = self.current_line();
            if line.is_empty() {
                return;
            }
            let here = line[self.cursor.col];
            let adjacent = self.cursor.col as isize + stop.adjacent() * step;
            let adjacent_is_space = usize::try_from(adjacent)
                .ok()
                .and_then(|i| line.get(i))
                .is_none_or(|c| c.is_whitespace());
            if !here.is_whitespace() && adjacent_is_space {
                if past_word_end {
                    self.set_col(self.cursor.col + 1);
                }
                return;
            }
        }
    }

    /// Forward word jump: stops on the first non-whitespace character after whitespace has been
    /// crossed, on the last character of the buffer, or on a newly reached empty line.
    pub fn move_word_right(&mut self) {
        self.clamp_cursor();
        let mut crossed_space = false;
        loop {
            if let Some(&here) = self.current_line().get(self.cursor.col) {
                if crossed_space && !here.is_whitespace() {
                    return;
                }
                if here.is_whitespace() {
                    crossed_space = true;
                }
            }

            if self.cursor.col + 1 < self.current_line().len() {
                self.move_right(true);
                continue;
            }
            if self.cursor.row + 1 >= self.line_count() {
                return;
            }
            self.cursor.row += 1;
            self.set_col(0);
            if self.current_line().is_empty() {
                return;
            }
            crossed_space = true;
        }
    }

    /// Vim-style `f`/`t` within the current line. The cursor does not move if `target` is not
    /// found before the line boundary.
    pub fn seek_to_char(&mut self, target: char, direction: Direction, stop: CharStop) {
        let step = direction.step();
        let line = self.current_line();
        let mut candidate = self.cursor.col as isize + step;
        let ahead = match stop {
            CharStop::On => 0,
            CharStop::Before => step,
        };
        loop {
            let examined = candidate + ahead;
            let Some(&ch) = usize::try_from(examined).ok().and_then(|i| line.get(i)) else {
                return;
            };
            if ch == target {
                self.set_col(candidate as usize);
                return;
            }
            candidate += step;
        }
    }

    /// Deletes whitespace then the word left of the cursor, keeping the space that separates it
    /// from the word before.
    pub fn delete_word_left(&mut self) {
        self.clamp_cursor();
        let col = self.cursor.col;
        let line = self.current_line();
        let mut start = col;
        while start > 0 && line[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !line[start - 1].is_whitespace() {
            start -= 1;
        }
        if start == col {
            return;
        }
        self.current_line_mut().drain(start..col);
        self.set_col(start);
        self.touch();
    }

    /// Deletes whitespace then the word right of the cursor.
    pub fn delete_word_right(&mut self) {
        self.clamp_cursor();
        let col = self.cursor.col;
        let line = self.current_line();
        let mut end = col;
        while end < line.len() && line[end].is_whitespace() {
            end += 1;
        }
        while end < line.len() && !line[end].is_whitespace() {
            end += 1;
        }
        if end == col {
            return;
        }
        self.current_line_mut().drain(col..end);
        self.set_col(col);
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::super::buffer::Cursor;
    use super::*;

    fn buffer(text: &str, row: usize, col: usize) -> TextBuffer {
        let mut b = TextBuffer::new();
        b.set_value(text);
        b.cursor = Cursor::new(row, col);
        b
    }

    #[test]
    fn word_right_terminus_lands_past_each_word() {
        let mut b = buffer("hello world", 0, 0);
        b.move_by_word(Direction::Right, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(0, 5));
        b.move_by_word(Direction::Right, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(0, 11));
        b.move_by_word(Direction::Right, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(0, 11));
    }

    #[test]
    fn word_right_incidence_crosses_lines() {
        let mut b = buffer("foo bar\n  baz", 0, 0);
        b.move_by_word(Direction::Right, WordStop::Incidence);
        assert_eq!(b.cursor(), Cursor::new(0, 4));
        b.move_by_word(Direction::Right, WordStop::Incidence);
        assert_eq!(b.cursor(), Cursor::new(1, 2));
    }

    #[test]
    fn word_left_terminus_stops_on_word_start() {
        let mut b = buffer("foo bar\nbaz", 1, 3);
        b.move_by_word(Direction::Left, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(1, 0));
        b.move_by_word(Direction::Left, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(0, 4));
        b.move_by_word(Direction::Left, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(0, 0));
        b.move_by_word(Direction::Left, WordStop::Terminus);
        assert_eq!(b.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn word_left_incidence_stops_on_word_end() {
        let mut b = buffer("foo bar", 0, 7);
        b.move_by_word(Direction::Left, WordStop::Incidence);
        assert_eq!(b.cursor(), Cursor::new(0, 2));
        b.move_by_word(Direction::Left, WordStop::Incidence);
        assert_eq!(b.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn word_motion_stops_on_empty_lines() {
        let mut b = buffer("foo\n\nbar", 0, 0);
        b.move_by_word(Direction::Right, WordStop::Incidence);
        assert_eq!(b.cursor(), Cursor::new(1, 0));
        b.move_by_word(Direction::Right, WordStop::Incidence);
        assert_eq!(b.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn move_word_right_skips_to_next_word() {
        let mut b = buffer("ab  cd\nef", 0, 0);
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(0, 4));
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(1, 0));
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(1, 1));
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn move_word_right_stops_on_last_char_of_line() {
        let mut b = buffer("a b\ncd", 0, 0);
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(0, 2));
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn move_word_right_stops_on_single_char_line() {
        let mut b = buffer("ab\nc\nde", 0, 0);
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(1, 0));
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn move_word_right_stops_on_empty_line() {
        let mut b = buffer("ab\n\ncd", 0, 1);
        b.move_word_right();
        assert_eq!(b.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn seek_on_and_before() {
        let mut b = buffer("a-b-c-d", 0, 0);
        b.seek_to_char('-', Direction::Right, CharStop::On);
        assert_eq!(b.cursor.col, 1);
        b.seek_to_char('-', Direction::Right, CharStop::On);
        assert_eq!(b.cursor.col, 3);
        b.seek_to_char('d', Direction::Right, CharStop::Before);
        assert_eq!(b.cursor.col, 5);
        b.seek_to_char('a', Direction::Left, CharStop::Before);
        assert_eq!(b.cursor.col, 1);
        b.seek_to_char('z', Direction::Left, CharStop::On);
        assert_eq!(b.cursor.col, 1);
    }

    #[test]
    fn seek_before_at_first_column_is_noop() {
        let mut b = buffer("abc", 0, 0);
        b.seek_to_char('a', Direction::Left, CharStop::Before);
        assert_eq!(b.cursor.col, 0);
        b.seek_to_char('b', Direction::Right, CharStop::Before);
        assert_eq!(b.cursor.col, 0);
    }

    #[test]
    fn vertical_motion_walks_wrapped_rows() {
        let mut b = buffer("aaaaa bbbbb\ncc", 0, 2);
        b.move_down(false, 5);
        assert_eq!(b.cursor(), Cursor::new(0, 8));
        b.move_down(false, 5);
        assert_eq!(b.cursor(), Cursor::new(1, 2));
        b.move_up(false, 5);
        assert_eq!(b.cursor(), Cursor::new(0, 8));
        b.move_up(false, 5);
        assert_eq!(b.cursor(), Cursor::new(0, 2));
    }

    #[test]
    fn vertical_motion_keeps_sticky_column() {
        let mut b = buffer("abcdef\nab\nabcdef", 0, 5);
        b.move_down(false, 40);
        assert_eq!(b.cursor(), Cursor::new(1, 2));
        b.move_down(false, 40);
        assert_eq!(b.cursor(), Cursor::new(2, 5));
        b.move_left();
        assert_eq!(b.last_char_offset(), 0);
    }

    #[test]
    fn vertical_motion_bound_to_line_stops_on_last_char() {
        let mut b = buffer("abcdef\nab", 0, 5);
        b.move_down(true, 40);
        assert_eq!(b.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn vertical_motion_at_edges_stays_on_row() {
        let mut b = buffer("abc\nxyz", 0, 2);
        b.move_up(false, 40);
        assert_eq!(b.cursor(), Cursor::new(0, 2));

        let mut b = buffer("abc\nxyz", 1, 1);
        b.move_down(false, 40);
        assert_eq!(b.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn set_cursor_row_reaches_logical_row() {
        let mut b = buffer("aaaaa bbbbb\nccccc ddddd\nee", 0, 0);
        b.set_cursor_row(2, 5);
        assert_eq!(b.cursor.row, 2);
        b.move_to_first_row(5);
        assert_eq!(b.cursor.row, 0);
    }

    #[test]
    fn delete_word_left_keeps_boundary_space() {
        let mut b = buffer("foo bar  ", 0, 9);
        b.delete_word_left();
        assert_eq!(b.value(), "foo ");
        assert_eq!(b.cursor.col, 4);
        b.delete_word_left();
        assert_eq!(b.value(), "");
        b.delete_word_left();
        assert_eq!(b.value(), "");
    }

    #[test]
    fn delete_word_right_skips_leading_space() {
        let mut b = buffer("foo   bar baz", 0, 3);
        b.delete_word_right();
        assert_eq!(b.value(), "foo baz");
        assert_eq!(b.cursor.col, 3);
        b.cursor.col = 7;
        b.delete_word_right();
        assert_eq!(b.value(), "foo baz");
    }

    #[test]
    fn character_motion_respects_binding() {
        let mut b = buffer("ab", 0, 1);
        b.move_right(true);
        assert_eq!(b.cursor.col, 1);
        b.move_right(false);
        assert_eq!(b.cursor.col, 2);
        b.move_to_line_end(true);
        assert_eq!(b.cursor.col, 1);
        b.move_to_line_start();
        b.move_left();
        assert_eq!(b.cursor.col, 0);
    }
}
