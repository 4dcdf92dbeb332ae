use std::ops::Range;

/// A resolved slice of source pages, 0-based and half-open.
///
/// Built from a manifest row's 1-based inclusive bounds. The lower bound is
/// clamped to the first page and the upper bound to the last page, so the span
/// always lies inside the document. It may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    start: u32,
    end: u32,
}

impl PageSpan {
    /// Resolve 1-based inclusive bounds against a document of `total_pages`.
    ///
    /// Returns `None` when the start page lies past the last page (an overrun).
    /// An end page past the last page is truncated. A start page of zero or
    /// less is treated as the first page. An inverted range yields an empty span.
    pub fn resolve(start_page: i64, end_page: i64, total_pages: u32) -> Option<Self> {
        let total = i64::from(total_pages);
        let first = start_page.saturating_sub(1);
        if first >= total {
            return None;
        }

        let first = first.max(0);
        let last = end_page.saturating_sub(1).min(total - 1);
        let end = last.saturating_add(1).max(first);

        // both bounds are within 0..=total here
        Some(PageSpan {
            start: first as u32,
            end: end as u32,
        })
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 1-based page numbers covered by this span, in ascending order
    pub fn page_numbers(&self) -> Range<u32> {
        self.start + 1..self.end + 1
    }
}
