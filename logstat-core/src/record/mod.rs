mod error;
mod method;
mod parse;
mod segments;
mod timestamp;
mod types;


pub use error::*;
pub use method::*;
pub use parse::*;
pub use types::*;
