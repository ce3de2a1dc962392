pub mod error;
pub mod parse;
pub mod render;
pub mod types;

pub use error::MalformedFeed;
pub use parse::parse;
pub use render::{render, Rendered};
