// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod retry;

pub use http::ScraperClient;
pub use retry::RetryingSource;
