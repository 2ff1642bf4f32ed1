use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::text::Text;
use unicode_width::UnicodeWidthChar;

/// Writes a styled block into `area` line by line, clipping each line to the area width.
pub fn render_text(area: Rect, buf: &mut Buffer, text: &Text<'static>) {
    buf.set_style(area, text.style);
    for (dy, line) in text.lines.iter().take(area.height as usize).enumerate() {
        let y = area.y + dy as u16;
        let line_style = text.style.patch(line.style);
        render_spans_clipped(area.x, y, area.width, buf, &line.spans, line_style);
    }
}

/// Writes spans left to right starting at `(x, y)`, stopping before `max_cols` columns.
///
/// Spans with the default style take `fallback_style`. A wide character that would straddle the
/// limit is dropped, and the trailing half of every wide character is written as an empty symbol.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'static>],
    fallback_style: Style,
) {
    let max_cols = max_cols as usize;
    let mut out_cols = 0usize;
    let mut tmp = [0u8; 4];

    for span in spans {
        let style = if span.style == Style::default() {
            fallback_style
        } else {
            fallback_style.patch(span.style)
        };
        for ch in span.content.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if out_cols + w > max_cols {
                return;
            }

            let s = ch.encode_utf8(&mut tmp);
            if let Some(cell) = buf.cell_mut((x + out_cols as u16, y)) {
                cell.set_style(style);
                cell.set_symbol(s);
            }
            out_cols += 1;

            if w == 2 {
                if let Some(cell) = buf.cell_mut((x + out_cols as u16, y)) {
                    cell.set_style(style);
                    cell.set_symbol("");
                }
                out_cols += 1;
            }
        }
    }
}
