use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Page size options of the order table.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of page buttons shown around the current page.
pub const PAGE_WINDOW_WIDTH: usize = 5;

/// Pagination input. `current_page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Clamps `current_page` into `[1, total_pages]`.
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = clamp_page(self.current_page, total_pages);
    }

    pub fn start_index(&self) -> usize {
        (self.current_page.max(1) - 1) * self.page_size.max(1)
    }
}

/// `ceil(count / page_size)`, but never less than one page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the rows of the requested page; an out-of-range page yields no rows.
pub fn page_slice<'a, T>(rows: &'a [T], pagination: &PaginationState) -> &'a [T] {
    let start = pagination.start_index().min(rows.len());
    let end = (start + pagination.page_size.max(1)).min(rows.len());
    &rows[start..end]
}

/// Page numbers rendered between the prev/next buttons.
///
/// Shows every page when there are at most five, otherwise a five-wide window
/// that keeps the current page centred except near either end.
pub fn page_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let total = total_pages.max(1);
    let current = clamp_page(current_page, total);
    let width = PAGE_WINDOW_WIDTH;

    if total <= width || current <= 3 {
        1..=total.min(width)
    } else if current >= total - 2 {
        (total - width + 1)..=total
    } else {
        (current - 2)..=(current + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(10, 50), 1);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_page_slice_lengths() {
        let rows: Vec<usize> = (1..=12).collect();
        for page_size in PAGE_SIZE_OPTIONS {
            let pages = total_pages(rows.len(), page_size);
            for current_page in 1..=pages + 1 {
                let state = PaginationState {
                    current_page,
                    page_size,
                };
                let start = state.start_index();
                let expected = page_size.min(rows.len().saturating_sub(start));
                assert_eq!(page_slice(&rows, &state).len(), expected);
            }
        }
    }

    #[test]
    fn test_page_slice_contents() {
        let rows: Vec<usize> = (1..=10).collect();
        let mut state = PaginationState::new(5);
        assert_eq!(page_slice(&rows, &state), &[1, 2, 3, 4, 5]);
        state.current_page = 2;
        assert_eq!(page_slice(&rows, &state), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_slice_borrows_rows_only() {
        let rows: Vec<usize> = (1..=7).collect();
        let last_page = {
            let state = PaginationState {
                current_page: 2,
                page_size: 5,
            };
            page_slice(&rows, &state)
        };
        assert_eq!(last_page, &[6, 7]);
    }

    #[test]
    fn test_clamp() {
        let mut state = PaginationState {
            current_page: 7,
            page_size: 5,
        };
        state.clamp(2);
        assert_eq!(state.current_page, 2);

        state.current_page = 0;
        state.clamp(2);
        assert_eq!(state.current_page, 1);

        state.current_page = 3;
        state.clamp(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1), 1..=1);
        assert_eq!(page_window(2, 4), 1..=4);
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(3, 10), 1..=5);
        assert_eq!(page_window(4, 10), 2..=6);
        assert_eq!(page_window(7, 10), 5..=9);
        assert_eq!(page_window(8, 10), 6..=10);
        assert_eq!(page_window(10, 10), 6..=10);
        assert_eq!(page_window(99, 10), 6..=10);
    }
}
