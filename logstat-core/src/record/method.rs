use serde::Serialize;
use std::fmt;

/// Request method taken from the quoted request line.
///
/// Tokens are matched case-insensitively. Anything else becomes
/// [`HttpMethod::Unknown`] instead of failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Trace,
    Connect,
    Patch,
    #[serde(rename = "unknown")]
    Unknown,
}

const KNOWN_METHODS: &[HttpMethod] = &[
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Delete,
    HttpMethod::Head,
    HttpMethod::Options,
    HttpMethod::Trace,
    HttpMethod::Connect,
    HttpMethod::Patch,
];

impl HttpMethod {
    pub fn from_token(token: &str) -> Self {
        KNOWN_METHODS
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
            .unwrap_or(HttpMethod::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
