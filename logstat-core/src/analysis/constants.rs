pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;
pub const DEFAULT_TOP_PAGES: usize = 5;
