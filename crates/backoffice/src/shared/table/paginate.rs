//! Paginate stage: pure slicing of the sorted rows.

use contracts::shared::table::PageState;

/// `ceil(count / page_size)`, never below 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Rows at `[(page-1)*size, page*size)` clipped to the list. Pages outside
/// `1..=total_pages` give an empty slice; clamping is the caller's job.
pub fn paginate<'s, T>(rows: &'s [T], state: &PageState) -> &'s [T] {
    if state.current_page == 0 || state.page_size == 0 {
        return &[];
    }
    let (start, end) = state.window();
    if start >= rows.len() {
        return &[];
    }
    &rows[start..end.min(rows.len())]
}

/// Page index moved into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(page_size: usize, current_page: usize) -> PageState {
        PageState {
            page_size,
            current_page,
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 1), 3);
    }

    #[test]
    fn test_last_page_is_clipped() {
        let rows: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&rows, &state(10, 3)), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_empty_list_page_one() {
        let rows: Vec<u32> = Vec::new();
        assert!(paginate(&rows, &state(10, 1)).is_empty());
        assert_eq!(total_pages(rows.len(), 10), 1);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let rows: Vec<u32> = (1..=5).collect();
        assert!(paginate(&rows, &state(2, 0)).is_empty());
        assert!(paginate(&rows, &state(2, 4)).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }

    proptest! {
        #[test]
        fn prop_pages_concatenate_to_list(len in 0usize..200, page_size in 1usize..25) {
            let rows: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, page_size);

            let mut joined = Vec::with_capacity(len);
            for page in 1..=pages {
                let slice = paginate(&rows, &state(page_size, page));
                prop_assert!(slice.len() <= page_size);
                joined.extend_from_slice(slice);
            }
            prop_assert_eq!(joined, rows);
        }
    }
}
