mod cache_store;
mod fetch;
mod resolver;
pub use cache_store::*;
pub use fetch::*;
pub use resolver::*;
