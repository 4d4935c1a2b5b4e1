//! Result download adapters

mod http;

pub use http::HttpFetcher;
