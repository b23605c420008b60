mod error;
mod loader;
mod types;
mod validate;


pub use error::*;
pub use loader::{load_config, parse_config};
pub use types::*;
pub use validate::validate_config;
