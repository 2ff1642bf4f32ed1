use super::LineInfo;
use super::TextArea;
use crate::render;
use crate::text::char_width;
use crate::text::chars_width;
use crate::text::str_width;
use crate::text::truncate_with_tail;
use crate::wrapping::wrap;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;

impl TextArea {
    /// Styled block of exactly [`TextArea::height`] rows for the current scroll position.
    pub fn view(&self) -> Text<'static> {
        if self.shows_placeholder() {
            return self.placeholder_view();
        }

        let style = self.style();
        let cursor = self.buffer.cursor();
        let li = self.buffer.line_info(self.width);
        let top = self.viewport.y as usize;
        let bottom = top + self.height;

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(self.height);
        let mut display_row = 0usize;
        'rows: for (row, line) in self.buffer.lines().iter().enumerate() {
            let on_cursor_line = row == cursor.row;
            let row_style = if on_cursor_line {
                style.cursor_line
            } else {
                style.text
            };
            for (sub, wrapped) in wrap(line, self.width).iter().enumerate() {
                if display_row >= bottom {
                    break 'rows;
                }
                if display_row >= top {
                    let mut spans = vec![self.prompt_span(display_row, row_style)];
                    if self.options.show_line_numbers {
                        let number_style = if on_cursor_line && sub == 0 {
                            style.cursor_line_number
                        } else {
                            style.line_number
                        };
                        let gutter = if sub == 0 {
                            format!("{:>2} ", row + 1)
                        } else {
                            "   ".to_string()
                        };
                        spans.push(Span::styled(gutter, row_style.patch(number_style)));
                    }
                    let cursor_here = (self.is_focused() && on_cursor_line && sub == li.row_offset)
                        .then_some(li);
                    self.push_content(&mut spans, wrapped, cursor_here, row_style);
                    lines.push(Line::from(spans));
                }
                display_row += 1;
            }
        }

        while lines.len() < self.height {
            lines.push(self.filler_line(display_row));
            display_row += 1;
        }
        Text::from(lines)
    }

    /// Draws [`TextArea::view`] into `area`, resizing first when the area changed.
    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if (area.width, area.height) != self.last_size {
            self.resize(area.width, area.height);
        }
        render::render_text(area, buf, &self.view());
    }

    /// Terminal cell of the cursor inside `area`, or `None` when it is not drawn.
    pub fn cursor_pos(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.is_focused() || area.width == 0 || area.height == 0 {
            return None;
        }
        let li = self.buffer.line_info(self.width);
        let row = self.buffer.cursor_visual_row(self.width) as u32;
        if !self.viewport.is_visible(row) {
            return None;
        }
        let x = self.prompt_width() + self.gutter_width() + self.cursor_cell_offset(li);
        let y = (row - self.viewport.y) as usize;
        if x >= area.width as usize || y >= area.height as usize {
            return None;
        }
        Some((area.x + x as u16, area.y + y as u16))
    }

    /// Column of the cursor cell within the content. A cursor past the end of a full row is
    /// pinned to that row's last cell.
    fn cursor_cell_offset(&self, li: LineInfo) -> usize {
        if li.char_offset < self.width {
            return li.char_offset;
        }
        let cursor = self.buffer.cursor();
        let rows = wrap(&self.buffer.lines()[cursor.row], self.width);
        let visible = rows
            .get(li.row_offset)
            .map_or(&[][..], |r| clip_to_width(r, self.width));
        visible
            .split_last()
            .map_or(0, |(_, head)| chars_width(head))
    }

    fn shows_placeholder(&self) -> bool {
        self.buffer.is_empty()
            && self.buffer.cursor().row == 0
            && self.buffer.cursor().col == 0
            && !self.options.placeholder.is_empty()
    }

    fn placeholder_view(&self) -> Text<'static> {
        let style = self.style();
        let row_style = style.cursor_line;
        let text_style = row_style.patch(style.placeholder);
        let placeholder = truncate_with_tail(&self.options.placeholder, self.width, "...");
        let mut chars = placeholder.chars();
        let first = chars.next().unwrap_or(' ');
        let rest: String = chars.collect();

        let mut spans = vec![self.prompt_span(0, row_style)];
        if self.options.show_line_numbers {
            spans.push(Span::styled(
                format!("{:>2} ", 1),
                row_style.patch(style.cursor_line_number),
            ));
        }
        let first_style = if self.is_focused() {
            text_style.patch(style.cursor)
        } else {
            text_style
        };
        spans.push(Span::styled(first.to_string(), first_style));
        let pad = self.width.saturating_sub(str_width(&placeholder));
        spans.push(Span::styled(
            format!("{rest}{}", " ".repeat(pad)),
            text_style,
        ));

        let mut lines = vec![Line::from(spans)];
        for row in 1..self.height {
            lines.push(self.filler_line(row));
        }
        Text::from(lines)
    }

    fn prompt_span(&self, display_row: usize, row_style: Style) -> Span<'static> {
        Span::styled(
            self.options.prompt.text_for_row(display_row),
            row_style.patch(self.style().prompt),
        )
    }

    fn filler_line(&self, display_row: usize) -> Line<'static> {
        let style = self.style();
        let mut spans = vec![self.prompt_span(display_row, Style::default())];
        if self.options.show_line_numbers {
            spans.push(Span::styled(
                format!("{:>2} ", self.options.end_of_buffer_char),
                style.end_of_buffer,
            ));
        }
        spans.push(Span::raw(" ".repeat(self.width)));
        Line::from(spans)
    }

    /// Appends one wrapped row clipped and padded to the wrap width. The overflow pad space of a
    /// full row is clipped away with everything else past the width.
    fn push_content(
        &self,
        spans: &mut Vec<Span<'static>>,
        wrapped: &[char],
        cursor: Option<LineInfo>,
        row_style: Style,
    ) {
        let visible = clip_to_width(wrapped, self.width);
        let mut used: usize = visible.iter().map(|&c| char_width(c)).sum();
        match cursor {
            Some(li) if li.char_offset < self.width => {
                let at = li.column_offset.min(visible.len());
                let before: String = visible[..at].iter().collect();
                if !before.is_empty() {
                    spans.push(Span::styled(before, row_style));
                }
                let under = match visible.get(at) {
                    Some(&c) => c,
                    None => {
                        used += 1;
                        ' '
                    }
                };
                spans.push(Span::styled(
                    under.to_string(),
                    row_style.patch(self.style().cursor),
                ));
                let after: String = visible.iter().skip(at + 1).collect();
                if !after.is_empty() {
                    spans.push(Span::styled(after, row_style));
                }
            }
            Some(_) => match visible.split_last() {
                Some((&last, head)) => {
                    let head: String = head.iter().collect();
                    if !head.is_empty() {
                        spans.push(Span::styled(head, row_style));
                    }
                    spans.push(Span::styled(
                        last.to_string(),
                        row_style.patch(self.style().cursor),
                    ));
                }
                None => {
                    used += 1;
                    spans.push(Span::styled(" ", row_style.patch(self.style().cursor)));
                }
            },
            None => spans.push(Span::styled(visible.iter().collect::<String>(), row_style)),
        }
        let pad = self.width.saturating_sub(used);
        if pad > 0 {
            spans.push(Span::styled(" ".repeat(pad), row_style));
        }
    }
}

fn clip_to_width(row: &[char], width: usize) -> &[char] {
    let mut cols = 0usize;
    for (i, &c) in row.iter().enumerate() {
        cols += char_width(c);
        if cols > width {
            return &row[..i];
        }
    }
    row
}
