//! Paginator

/// Rows per page.
pub const PAGE_SIZE: usize = 25;

/// Number of pages needed for `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Slice out page `page` (1-based) of `items`.
///
/// The range `[(page-1)*size, page*size)` is clamped to the slice bounds, so
/// a page past the end is empty rather than an error. Page 0 is read as
/// page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn page_count_floor_is_one() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(25, PAGE_SIZE), 1);
        assert_eq!(total_pages(26, PAGE_SIZE), 2);
        assert_eq!(total_pages(250, PAGE_SIZE), 10);
        assert_eq!(total_pages(251, PAGE_SIZE), 11);
    }

    #[test]
    fn zero_page_size_does_not_divide_by_zero() {
        assert_eq!(total_pages(10, 0), 1);
    }

    #[test]
    fn pages_cover_everything_without_overlap() {
        for len in [0_usize, 1, 24, 25, 26, 49, 50, 51, 250] {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, PAGE_SIZE);

            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(paginate(&items, page, PAGE_SIZE));
            }
            assert_eq!(rebuilt, items, "len = {len}");

            let last = paginate(&items, pages, PAGE_SIZE).len();
            let expected = len - PAGE_SIZE * (pages - 1);
            assert_eq!(last, expected, "len = {len}");
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (0..30).collect();
        assert!(paginate(&items, 3, PAGE_SIZE).is_empty());
        assert!(paginate(&items, usize::MAX, PAGE_SIZE).is_empty());
    }

    #[test]
    fn page_zero_reads_as_first() {
        let items: Vec<usize> = (0..30).collect();
        assert_eq!(paginate(&items, 0, PAGE_SIZE), paginate(&items, 1, PAGE_SIZE));
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let items: Vec<usize> = (1..=30).collect();
        assert_eq!(paginate(&items, 2, PAGE_SIZE), &[26, 27, 28, 29, 30]);
    }

    proptest! {
        #[test]
        fn pages_rebuild_the_sequence(len in 0_usize..600, size in 1_usize..60) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, size);
            prop_assert!(pages >= 1);

            let mut rebuilt = Vec::with_capacity(len);
            for page in 1..=pages {
                let slice = paginate(&items, page, size);
                prop_assert!(slice.len() <= size);
                rebuilt.extend_from_slice(slice);
            }
            prop_assert_eq!(&rebuilt, &items);

            let last = paginate(&items, pages, size).len();
            if len == 0 {
                prop_assert_eq!(last, 0);
            } else {
                prop_assert!(last >= 1 && last <= size);
                prop_assert_eq!(last, len - size * (pages - 1));
            }
            prop_assert!(paginate(&items, pages + 1, size).is_empty());
        }

        #[test]
        fn any_page_is_in_bounds(len in 0_usize..300, page in any::<usize>()) {
            let items: Vec<usize> = (0..len).collect();
            let slice = paginate(&items, page, PAGE_SIZE);
            prop_assert!(slice.len() <= PAGE_SIZE);
            if let Some(first) = slice.first() {
                prop_assert_eq!(*first, (page.max(1) - 1) * PAGE_SIZE);
            }
        }
    }
}
