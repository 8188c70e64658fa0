use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 無結果時為 0
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// 第 `page` 頁（從 1 開始）在清單中的索引範圍；超出範圍的頁數得到空範圍
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(page, page_size, items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_items_five_per_page() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(page_range(1, 5, 12), 0..5);
        assert_eq!(page_range(2, 5, 12), 5..10);
        assert_eq!(page_range(3, 5, 12), 10..12);
    }

    #[test]
    fn test_edges() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(3, 0), 0);

        assert!(page_range(0, 5, 12).is_empty());
        assert!(page_range(4, 5, 12).is_empty());
        assert!(page_range(usize::MAX, 5, 12).is_empty());
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(page_slice(&items, 3, 5), &[10, 11]);
        assert!(page_slice(&items, 9, 5).is_empty());
    }
}
