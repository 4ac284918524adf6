//! Page slicing over an already-filtered list.
//!
//! Pages are 1-based. Requests outside `1..=total_pages` yield an empty
//! slice rather than an error or a clamped page; the views never offer
//! out-of-range page controls.

/// Number of pages needed for `len` items, never less than 1.
///
/// A page size of 0 also reports a single (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// The items on `page` (1-based) when split into pages of `page_size`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
