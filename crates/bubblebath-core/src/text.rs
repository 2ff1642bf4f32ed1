//! Display-width helpers and input sanitizing shared by the text components.
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub const TAB_WIDTH: usize = 4;

/// Number of terminal columns `ch` occupies. Control characters count as zero.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn chars_width(chars: &[char]) -> usize {
    chars.iter().map(|&ch| char_width(ch)).sum()
}

pub fn str_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cleans typed or pasted text before it reaches the buffer.
///
/// Line endings are normalized to `\n`, tabs expand to [`TAB_WIDTH`] spaces and any other control
/// character is dropped.
pub fn sanitize(input: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\n' => out.push('\n'),
            '\t' => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Truncates `s` to at most `max_cols` columns, ending with `tail` when anything was cut.
pub fn truncate_with_tail(s: &str, max_cols: usize, tail: &str) -> String {
    if str_width(s) <= max_cols {
        return s.to_string();
    }
    let tail_w = str_width(tail);
    if tail_w >= max_cols {
        return take_cols(tail, max_cols);
    }
    let mut out = take_cols(s, max_cols - tail_w);
    out.push_str(tail);
    out
}

fn take_cols(s: &str, max_cols: usize) -> String {
    let mut cols = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = char_width(ch);
        if cols + w > max_cols {
            break;
        }
        cols += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_chars_take_two_columns() {
        assert_eq!(str_width("abc"), 3);
        assert_eq!(str_width("你好"), 4);
        assert_eq!(chars_width(&['a', '好']), 3);
        assert_eq!(char_width('\u{7}'), 0);
    }

    #[test]
    fn sanitize_normalizes_newlines_and_tabs() {
        let out: String = sanitize("a\r\nb\rc\td\u{1b}").into_iter().collect();
        assert_eq!(out, "a\nb\nc    d");
    }

    #[test]
    fn truncate_adds_tail_only_when_cut() {
        assert_eq!(truncate_with_tail("hello", 10, "..."), "hello");
        assert_eq!(truncate_with_tail("hello world", 8, "..."), "hello...");
        assert_eq!(truncate_with_tail("hello", 2, "..."), "..");
        assert_eq!(truncate_with_tail("你好世界", 5, "..."), "你...");
    }
}
