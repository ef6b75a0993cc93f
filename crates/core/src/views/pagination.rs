/// Page bookkeeping for a table.
///
/// Pages are 1-based. With zero items there are zero pages and the
/// current page stays at 1 so the label reads "Page 1 of 0".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
    total_items: usize,
}

impl Paginator {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            total_items: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Replace the item count and go back to the first page.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = 1;
    }

    /// Jump to `page` if it exists. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page > 0 && page <= self.page_count() && page != self.page {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.page > 1 && self.go_to(self.page - 1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Index range of the current page within the full list.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// "Page 2 of 10".
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count())
    }
}
