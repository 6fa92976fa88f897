pub mod cache;
pub mod client;
pub mod error;

pub use cache::ResultCache;
pub use client::PagespeedClient;
pub use error::RequestError;
