//! Row-based scroll state for list containers such as a dropdown panel.
//!
//! `ScrollState` tracks which slice of rows is visible. The offset is always
//! clamped to `[0, max_scroll]` where `max_scroll = content_len - viewport_len`
//! (saturating at zero).

/// Vertical scroll position over a list of equally tall rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Index of the first visible row.
    pub offset: usize,
    /// Total number of rows.
    pub content_len: usize,
    /// Number of rows that fit in the viewport.
    pub viewport_len: usize,
}

impl ScrollState {
    /// Create a new scroll state at the top.
    pub fn new(content_len: usize, viewport_len: usize) -> Self {
        Self {
            offset: 0,
            content_len,
            viewport_len,
        }
    }

    /// The largest valid offset.
    pub fn max_scroll(&self) -> usize {
        self.content_len.saturating_sub(self.viewport_len)
    }

    /// Scroll to an absolute row offset, clamping to the valid range.
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_scroll());
    }

    /// Half-open range of visible rows.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.viewport_len).min(self.content_len)
    }

    /// Whether `row` is fully inside the viewport.
    pub fn is_visible(&self, row: usize) -> bool {
        self.visible_rows().contains(&row)
    }

    /// Scroll the minimum distance that brings `row` into view, aligning it to
    /// whichever edge is nearest (`scrollIntoView({ block: 'nearest' })`).
    ///
    /// Rows already visible, and rows past the end, leave the offset alone.
    pub fn scroll_into_view(&mut self, row: usize) {
        if row >= self.content_len || self.viewport_len == 0 || self.is_visible(row) {
            return;
        }
        if row < self.offset {
            self.scroll_to(row);
        } else {
            self.scroll_to(row + 1 - self.viewport_len);
        }
    }

    /// Update the row count and re-clamp the offset.
    pub fn set_content_len(&mut self, len: usize) {
        self.content_len = len;
        self.scroll_to(self.offset);
    }

    /// Update the viewport height and re-clamp the offset.
    pub fn set_viewport_len(&mut self, len: usize) {
        self.viewport_len = len;
        self.scroll_to(self.offset);
    }
}
