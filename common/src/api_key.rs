//! API key wrapper that keeps the secret out of logs.

use std::fmt;

use zeroize::Zeroize;

/// Placeholder values commonly left behind in `.env` templates.
const PLACEHOLDER_VALUES: [&str; 3] = ["changeme", "your-api-key", "<api_key>"];

/// A movie database API key.
///
/// Debug and Display never show the value, the buffer is zeroized on drop,
/// and there is deliberately no `Serialize` impl so the key cannot end up in
/// a config file by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { inner: key.into() }
    }

    /// The raw key, for building request addresses only.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True for blank keys and template leftovers like `changeme`.
    pub fn is_placeholder(&self) -> bool {
        let trimmed = self.inner.trim();
        trimmed.is_empty()
            || PLACEHOLDER_VALUES
                .iter()
                .any(|p| trimmed.eq_ignore_ascii_case(p))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
