//! Ad-hoc in-memory caches.
//!
//! The service keeps two of these: a single-item cache keyed by pokemon id
//! and a paginated-list cache keyed by `{limit}-{page}`. Neither evicts nor
//! expires entries; a cache lives as long as the service that owns it.

mod memory;

pub use memory::MemoryCache;

/// Composite key for the paginated-list cache.
pub fn page_key(limit: u32, page: u32) -> String {
    format!("{limit}-{page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_format() {
        assert_eq!(page_key(10, 1), "10-1");
        assert_eq!(page_key(5, 3), "5-3");
    }
}
