pub mod analyze;
pub mod conf;
pub mod prompt;
pub mod render;

#[cfg(test)]
mod tests;

pub use analyze::{AnalyzeArgs, resolve_config, run_analyze};
pub use prompt::{PromptArgs, run_prompt};
pub use render::{ReportStyle, render, render_report};
