use crate::enrichment::user_agent::{BrowserCategory, OsCategory};

/// Ordered `(needle, category)` pairs. Needles are lowercase and the first
/// one contained in the lowercased user-agent wins.
pub(crate) type Rules<T> = &'static [(&'static str, T)];

pub(crate) const OS_RULES: Rules<OsCategory> = &[
    ("windows", OsCategory::Windows),
    ("macintosh", OsCategory::MacOs),
    ("mac os", OsCategory::MacOs),
    ("linux", OsCategory::Linux),
];

// Chromium-based Edge also says "chrome", and nearly everything says
// "safari", so order matters here.
pub(crate) const BROWSER_RULES: Rules<BrowserCategory> = &[
    ("edge", BrowserCategory::Edge),
    ("firefox", BrowserCategory::Firefox),
    ("chrome", BrowserCategory::Chrome),
    ("opera", BrowserCategory::Opera),
];

pub(crate) fn first_match<T: Copy>(lowered: &str, rules: Rules<T>, fallback: T) -> T {
    rules
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, category)| *category)
        .unwrap_or(fallback)
}
