//! Pagination stage
//!
//! Two chunking policies over the sorted, occupied-only reservation list.
//! Both are total: empty input produces zero pages, never one empty page.

/// Name cards per printed page.
pub const CARD_PAGE_SIZE: usize = 8;

/// First list page capacity; the header and stats block eat the rest.
pub const LIST_FIRST_PAGE_SIZE: usize = 16;

/// Capacity of every later list page.
pub const LIST_NEXT_PAGE_SIZE: usize = 21;

/// Consecutive groups of exactly `size` items; the last may be shorter.
pub fn chunk_fixed<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    debug_assert!(size > 0);
    items.chunks(size).map(|c| c.to_vec()).collect()
}

/// First page holds 16 items, every later page 21 (the final one may be
/// shorter). The smaller first page leaves room for the header/stats block
/// only page 1 carries.
pub fn chunk_dynamic<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    let split = items.len().min(LIST_FIRST_PAGE_SIZE);
    let (first, rest) = items.split_at(split);
    let mut pages = vec![first.to_vec()];
    pages.extend(rest.chunks(LIST_NEXT_PAGE_SIZE).map(|c| c.to_vec()));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_chunk_page_count_and_sizes() {
        let items: Vec<u32> = (0..20).collect();
        let pages = chunk_fixed(&items, CARD_PAGE_SIZE);
        assert_eq!(pages.len(), 3); // ceil(20/8)
        assert_eq!(pages[0].len(), 8);
        assert_eq!(pages[1].len(), 8);
        assert_eq!(pages[2].len(), 4);
    }

    #[test]
    fn test_fixed_chunk_empty() {
        let pages = chunk_fixed::<u32>(&[], CARD_PAGE_SIZE);
        assert!(pages.is_empty());
    }

    #[test]
    fn test_dynamic_chunk_empty() {
        assert!(chunk_dynamic::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_dynamic_chunk_short_input_single_page() {
        let items: Vec<u32> = (0..5).collect();
        let pages = chunk_dynamic(&items);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 5);
    }

    #[test]
    fn test_dynamic_chunk_37_items() {
        // 16 + 21 consumes the input exactly
        let items: Vec<u32> = (0..37).collect();
        let pages = chunk_dynamic(&items);
        let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![16, 21]);
    }

    #[test]
    fn test_dynamic_chunk_round_trip_and_page_sizes() {
        for n in [0usize, 1, 15, 16, 17, 36, 37, 38, 60, 100] {
            let items: Vec<usize> = (0..n).collect();
            let pages = chunk_dynamic(&items);
            let rejoined: Vec<usize> = pages.iter().flatten().copied().collect();
            assert_eq!(rejoined, items, "round trip failed for n={n}");
            if n > 0 {
                assert_eq!(pages[0].len(), n.min(LIST_FIRST_PAGE_SIZE));
            }
            // every non-first, non-last page is exactly 21
            for page in pages.iter().skip(1).rev().skip(1) {
                assert_eq!(page.len(), LIST_NEXT_PAGE_SIZE);
            }
        }
    }
}
