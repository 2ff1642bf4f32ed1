use super::buffer::TextBuffer;
use crate::text::chars_width;
use crate::wrapping;
use crate::wrapping::wrap;

/// Position of the cursor within the soft-wrapped rows of its logical line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineInfo {
    /// Number of characters in the visual row.
    pub width: usize,
    /// Display width of the visual row.
    pub char_width: usize,
    /// Number of visual rows in the logical line.
    pub height: usize,
    /// Character index where the visual row starts in the logical line.
    pub start_column: usize,
    /// Characters between the row start and the cursor.
    pub column_offset: usize,
    /// Visual row index within the logical line.
    pub row_offset: usize,
    /// Display columns between the row start and the cursor.
    pub char_offset: usize,
}

impl TextBuffer {
    pub fn line_info(&self, width: usize) -> LineInfo {
        let col = self.cursor.col;
        let grid = wrap(self.current_line(), width);
        let mut counter = 0usize;
        for (i, row) in grid.iter().enumerate() {
            // At the exact end of a wrapped row the cursor belongs to the start of the next one.
            if counter + row.len() == col && i + 1 < grid.len() {
                let next = &grid[i + 1];
                return LineInfo {
                    width: next.len(),
                    char_width: chars_width(next),
                    height: grid.len(),
                    start_column: col,
                    column_offset: 0,
                    row_offset: i + 1,
                    char_offset: 0,
                };
            }
            if counter + row.len() >= col {
                let column_offset = col - counter;
                return LineInfo {
                    width: row.len(),
                    char_width: chars_width(row),
                    height: grid.len(),
                    start_column: counter,
                    column_offset,
                    row_offset: i,
                    char_offset: chars_width(&row[..column_offset]),
                };
            }
            counter += row.len();
        }
        LineInfo::default()
    }

    /// Index of the cursor's visual row counted over the whole buffer.
    pub fn cursor_visual_row(&self, width: usize) -> usize {
        let above: usize = self.lines()[..self.cursor.row]
            .iter()
            .map(|l| wrapping::visual_row_count(l, width))
            .sum();
        above + self.line_info(width).row_offset
    }

    pub fn visual_row_count(&self, width: usize) -> usize {
        self.lines().iter().map(|l| wrapping::visual_row_count(l, width)).sum()
    }
}
