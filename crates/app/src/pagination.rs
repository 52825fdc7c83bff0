//! Page requests and paged results.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Builds a page request, clamping the size into `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or_default(),
            size: size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// SQL `LIMIT` for this page.
    #[must_use]
    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }

    /// SQL `OFFSET` for this page.
    #[must_use]
    pub fn offset(self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// A page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(request.size())),
        }
    }

    /// An empty first page.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    /// Maps every item, failing on the first conversion error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            content: self.content.into_iter().map(f).collect::<Result<_, _>>()?,
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults() {
        let request = PageRequest::default();

        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn page_request_clamps_size() {
        assert_eq!(PageRequest::new(None, Some(0)).size(), 1);
        assert_eq!(PageRequest::new(None, Some(1_000)).size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_request_offset_uses_page_and_size() {
        let request = PageRequest::new(Some(3), Some(25));

        assert_eq!(request.limit(), 25);
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn page_counts_total_pages() {
        let page = Page::new(vec![1, 2], PageRequest::new(Some(0), Some(2)), 5);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 5);
    }

    #[test]
    fn empty_page_has_no_pages() {
        let page: Page<u8> = Page::empty(PageRequest::default());

        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn try_map_stops_on_first_error() {
        let page = Page::new(vec![1, -1, 2], PageRequest::default(), 3);

        let result = page.try_map(|n: i32| u32::try_from(n));

        assert!(result.is_err());
    }
}
