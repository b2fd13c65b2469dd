/// Typed query-string contract implemented by request query types.
///
/// The transport serializes an implementation exactly once per request: a
/// present 1-based `page` is decremented to the backend's 0-based
/// convention at that single point, `size` follows, and every `params`
/// pair is appended in order, repeating the key for list-valued
/// parameters.
pub trait ApiQuery: Send + Sync {
    /// 1-based page number, when the query paginates.
    fn page(&self) -> Option<u32> {
        None
    }

    /// Page size, when the query paginates.
    fn size(&self) -> Option<u32> {
        None
    }

    /// Remaining key/value pairs in serialization order.
    fn params(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Query for operations that send no query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoQuery;

impl ApiQuery for NoQuery {}
