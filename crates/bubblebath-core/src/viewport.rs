/// A vertically scrolling window over a list of visual rows.
///
/// `y` is the index of the first visible row. Content and window heights are kept separately so
/// the offset can be clamped whenever either side changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub y: u32,
    pub viewport_h: u16,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport_height(&mut self, h: u16) {
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, h: u32) {
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
    }

    /// Scrolls the minimum amount needed for `row` to be inside the window.
    pub fn scroll_to_include(&mut self, row: u32) {
        if self.viewport_h == 0 {
            return;
        }
        let last_visible = self.y + (self.viewport_h as u32 - 1);
        if row < self.y {
            self.y = row;
        } else if row > last_visible {
            self.y += row - last_visible;
        }
    }

    pub fn is_visible(&self, row: u32) -> bool {
        row >= self.y && row < self.y.saturating_add(self.viewport_h as u32)
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }
}
