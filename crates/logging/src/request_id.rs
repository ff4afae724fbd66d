//! # Request ID Tracking
//!
//! Utilities for generating and propagating request IDs across the
//! application. Uses CUID2 for collision-resistant, URL-safe identifiers.

/// A request ID type using CUID2.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random request ID using CUID2.
    #[inline]
    pub fn new() -> Self { Self(cuid2::create_id()) }

    /// Get the request ID as a string.
    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consume and return the inner string.
    #[inline]
    pub fn into_string(self) -> String { self.0 }
}

impl Default for RequestId {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Try to get a request ID from a header value.
///
/// CUID2 identifiers are lowercase alphanumeric; anything close enough is
/// accepted so upstream proxies can propagate their own correlation ids.
pub fn try_from_header(value: &str) -> Option<RequestId> {
    let value = value.trim();
    if value.len() >= 20 &&
        value.len() <= 64 &&
        value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some(RequestId(value.to_string()))
    }
    else {
        None
    }
}
