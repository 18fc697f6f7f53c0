//! HTTP access to the shortening backend.

mod http_shortener;

pub use http_shortener::{HttpShortenerGateway, SHORTEN_PATH};
