//! HTTP status code value used by response classification.

/// Status code as reported by the transport.
///
/// Signed because platform networking stacks report their own failure codes
/// (e.g. `-1004`) through the same field. Those never fall in the success
/// band and never match a named code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub i32);

impl HttpStatusCode {
    pub const FORBIDDEN: HttpStatusCode = HttpStatusCode(403);
    pub const NOT_FOUND: HttpStatusCode = HttpStatusCode(404);
    pub const INTERNAL_SERVER_ERROR: HttpStatusCode = HttpStatusCode(500);

    /// 2xx band (200-299 inclusive).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    #[inline]
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(i32::from(code))
    }
}

impl From<i32> for HttpStatusCode {
    fn from(code: i32) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
