/// Slice bounds for a 1-indexed page over `total` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub limit: usize,
    pub start: usize,
    pub end: usize,
    pub has_more: bool,
}

/// Compute the window for `page`/`limit`. Zero values are clamped to 1.
/// Pages past the end yield an empty window (`start == end`).
pub fn page_window(page: usize, limit: usize, total: usize) -> PageWindow {
    let page = page.max(1);
    let limit = limit.max(1);
    let start_index = (page - 1).saturating_mul(limit);
    let end_index = page.saturating_mul(limit);
    PageWindow {
        page,
        limit,
        start: start_index.min(total),
        end: end_index.min(total),
        has_more: end_index < total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page() {
        let w = page_window(1, 10, 25);
        assert_eq!((w.start, w.end, w.has_more), (0, 10, true));
    }

    #[test]
    fn last_partial_page() {
        let w = page_window(3, 10, 25);
        assert_eq!((w.start, w.end, w.has_more), (20, 25, false));
    }

    #[test]
    fn exact_boundary_has_no_more() {
        let w = page_window(2, 10, 20);
        assert_eq!((w.start, w.end, w.has_more), (10, 20, false));
    }

    #[test]
    fn out_of_range_is_empty() {
        let w = page_window(9, 10, 25);
        assert_eq!(w.start, w.end);
        assert!(!w.has_more);
    }

    #[test]
    fn zero_page_and_limit_are_clamped() {
        let w = page_window(0, 0, 5);
        assert_eq!((w.page, w.limit, w.start, w.end), (1, 1, 0, 1));
        assert!(w.has_more);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let w = page_window(usize::MAX, 50, 10);
        assert_eq!(w.start, 10);
        assert!(!w.has_more);
    }
}
