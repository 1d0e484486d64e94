//! Client-side table paging.

use serde::Serialize;

/// Page numbers to render, `None` marking a gap ("…").
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    /// 1-based current page.
    pub page: usize,
    pub total_pages: usize,
    /// Row count before slicing.
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_items: usize,
    ) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 2, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
        }
    }
}

/// Slices already-filtered rows into one page. Out-of-range pages clamp to the last one.
pub fn paginate_slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> Paginated<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let rows = items
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    Paginated::new(rows, page, total_pages, items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_are_inserted_around_the_current_window() {
        assert_eq!(
            get_pages(20, 10, 2, 2, 2, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20)
            ]
        );
        assert_eq!(get_pages(3, 1, 2, 2, 2, 2), vec![Some(1), Some(2), Some(3)]);
        assert!(get_pages(0, 1, 2, 2, 2, 2).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_first_page() {
        let page = Paginated::new(vec!["a"], 0, 1, 1);

        assert_eq!(page.page, 1);
        assert_eq!(page.pages, vec![Some(1)]);
    }

    #[test]
    fn slice_returns_requested_page() {
        let items: Vec<u32> = (1..=25).collect();

        let page = paginate_slice(&items, 3, 10);

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
    }

    #[test]
    fn slice_clamps_out_of_range_pages() {
        let items: Vec<u32> = (1..=5).collect();

        assert_eq!(paginate_slice(&items, 9, 2).page, 3);
        assert_eq!(paginate_slice(&items, 0, 2).items, vec![1, 2]);

        let empty = paginate_slice::<u32>(&[], 4, 10);
        assert_eq!(empty.page, 1);
        assert!(empty.items.is_empty());
        assert!(empty.pages.is_empty());
    }
}
