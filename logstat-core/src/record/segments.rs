/// Quote-delimited view of one combined log line.
///
/// ```text
/// prefix "request" status_size "referer" gap "user_agent"
/// ```
///
/// Trailing empty segments are dropped before positions are assigned, so
/// a line ending in `""` has no user-agent segment at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub prefix: &'a str,
    pub request: Option<&'a str>,
    pub status_size: Option<&'a str>,
    pub referer: Option<&'a str>,
    pub user_agent: Option<&'a str>,
}

const REQUEST: usize = 1;
const STATUS_SIZE: usize = 2;
const REFERER: usize = 3;
const USER_AGENT: usize = 5;

impl<'a> Segments<'a> {
    pub fn split(line: &'a str) -> Self {
        let mut parts: Vec<&'a str> = line.split('"').collect();
        while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }

        Self {
            prefix: parts.first().copied().unwrap_or_default(),
            request: parts.get(REQUEST).copied(),
            status_size: parts.get(STATUS_SIZE).copied(),
            referer: parts.get(REFERER).copied(),
            user_agent: parts.get(USER_AGENT).copied(),
        }
    }
}
