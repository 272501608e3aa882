pub mod backoff;
pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

pub use client::{Fetcher, fetch};
pub use errors::FetchError;
pub use types::{FetchOptions, Page};
