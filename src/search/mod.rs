pub mod searx;

pub use searx::{SearchResult, SearxClient};
