//! Shared provider utilities

/// HTTP response checking and error categorization
pub mod http_response;

pub use http_response::HttpResponseUtils;
