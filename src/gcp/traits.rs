//! Common traits for Resource Manager API responses

/// Trait for search responses that are paged with a continuation token
///
/// Implement this trait for any `Search*Response` struct to enable use with
/// `GcpClient::fetch_all_pages()` helper.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;

    /// Token for the next page; `None` or empty when this is the last page
    fn next_page_token(&self) -> Option<&str>;

    /// Whether another page should be requested
    fn has_next_page(&self) -> bool {
        self.next_page_token().is_some_and(|t| !t.is_empty())
    }
}
