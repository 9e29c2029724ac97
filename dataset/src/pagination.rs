/// Page size carried over from the original display; configurable at the
/// server boundary.
pub const DEFAULT_PAGE_SIZE: usize = 1;

/// Number of pages needed to show `item_count` items, `page_size` at a time.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size)
}

/// The contiguous run of items visible on `current_page`. Out-of-range pages
/// yield an empty slice rather than an error.
pub fn page_slice<T>(items: &[T], page_size: usize, current_page: usize) -> &[T] {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// A page cursor with pure, clamped transitions. `current_page` always stays
/// within `[1, total_pages]`; when there are no pages, transitions leave the
/// cursor unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages(item_count, page_size),
        }
    }

    pub fn previous(self) -> Self {
        self.jump_to(self.current_page.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        self.jump_to(self.current_page + 1)
    }

    pub fn jump_to(self, page: usize) -> Self {
        if self.total_pages == 0 {
            return self;
        }

        Self {
            current_page: page.clamp(1, self.total_pages),
            ..self
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
