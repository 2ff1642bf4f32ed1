//! Soft wrapping of a single logical line into visual rows.
//!
//! Wrapped rows keep every character of the source line in order, so the character offset of a
//! visual row can be recovered by summing the lengths of the rows before it. The final row always
//! carries one extra padding space that stands in for the "one past the end" cursor position.
use crate::text::chars_width;

/// Splits `line` into visual rows no wider than `width` columns where possible.
///
/// Words (runs of non-space characters) are never split: a word that does not fit on an empty
/// row is placed as-is and overflows. Whitespace keeps its character count but is emitted as
/// plain spaces. A `width` of zero disables wrapping.
pub fn wrap(line: &[char], width: usize) -> Vec<Vec<char>> {
    if line.is_empty() {
        return vec![Vec::new()];
    }
    if width == 0 {
        return vec![line.to_vec()];
    }

    let mut rows: Vec<Vec<char>> = vec![Vec::new()];
    let mut row_w = 0usize;
    let mut i = 0usize;
    while i < line.len() {
        let word_start = i;
        while i < line.len() && !line[i].is_whitespace() {
            i += 1;
        }
        let word = &line[word_start..i];
        let spaces_start = i;
        while i < line.len() && line[i].is_whitespace() {
            i += 1;
        }
        let spaces = i - spaces_start;

        let run_w = chars_width(word) + spaces;
        if row_w > 0 && row_w + run_w > width {
            rows.push(Vec::new());
            row_w = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.extend_from_slice(word);
            row.extend(std::iter::repeat_n(' ', spaces));
        }
        row_w += run_w;
    }

    if let Some(row) = rows.last_mut() {
        row.push(' ');
    }
    rows
}

/// Number of visual rows `line` occupies at `width`.
pub fn visual_row_count(line: &[char], width: usize) -> usize {
    wrap(line, width).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn rows(line: &str, width: usize) -> Vec<String> {
        wrap(&chars(line), width)
            .into_iter()
            .map(|r| r.into_iter().collect())
            .collect()
    }

    #[test]
    fn keeps_trailing_pad_on_every_row() {
        assert_eq!(rows("aaaaa bbbbb", 5), vec!["aaaaa ", "bbbbb "]);
    }

    #[test]
    fn short_word_stays_on_one_row() {
        assert_eq!(rows("abc", 5), vec!["abc "]);
        assert_eq!(rows("abcde", 5), vec!["abcde "]);
    }

    #[test]
    fn empty_line_is_one_empty_row() {
        assert_eq!(wrap(&[], 10), vec![Vec::<char>::new()]);
    }

    #[test]
    fn packs_words_greedily() {
        assert_eq!(rows("ab cd ef", 5), vec!["ab ", "cd ef "]);
        assert_eq!(rows("the quick brown fox", 10), vec!["the quick ", "brown fox "]);
    }

    #[test]
    fn overlong_word_overflows_on_its_own_row() {
        assert_eq!(rows("a abcdefgh b", 4), vec!["a ", "abcdefgh ", "b "]);
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(rows("你好 世界", 5), vec!["你好 ", "世界 "]);
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(rows("a b c", 0), vec!["a b c"]);
    }

    #[test]
    fn rows_preserve_source_characters() {
        let line = chars("lorem ipsum  dolor sit amet");
        let joined: Vec<char> = wrap(&line, 7).concat();
        assert_eq!(&joined[..line.len()], line.as_slice());
        assert_eq!(joined.len(), line.len() + 1);
    }
}
