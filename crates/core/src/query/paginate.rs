//! Slicing filtered results into pages.

use spendsight_shared::types::{PageRequest, PageResponse};

/// Cuts one page out of an already filtered and sorted list.
///
/// `meta.total` counts the whole list, not the page. A page past the end
/// comes back with empty `data`; the page number is echoed as requested,
/// never clamped.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> PageResponse<T> {
    let total = u64::try_from(items.len()).unwrap_or(u64::MAX);

    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);

    let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();

    PageResponse::new(data, request.page, request.per_page, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let response = paginate((1..=12).collect(), &PageRequest::for_page(1));

        assert_eq!(response.data, vec![1, 2, 3, 4, 5]);
        assert_eq!(response.meta.page, 1);
        assert_eq!(response.meta.total, 12);
        assert_eq!(response.meta.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let response = paginate((1..=12).collect(), &PageRequest::for_page(3));

        assert_eq!(response.data, vec![11, 12]);
        assert_eq!(response.meta.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let response = paginate((1..=12).collect(), &PageRequest::for_page(4));

        assert!(response.data.is_empty());
        // The requested page is echoed back, not clamped.
        assert_eq!(response.meta.page, 4);
        assert_eq!(response.meta.total, 12);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let response = paginate(Vec::<i32>::new(), &PageRequest::for_page(1));

        assert!(response.data.is_empty());
        assert_eq!(response.meta.total, 0);
        assert_eq!(response.meta.total_pages, 1);
    }
}
