pub mod content;
pub mod contentful;
pub mod error;
pub mod filter;
pub mod locale;
pub mod model;
pub mod rich_text;
mod wire;
