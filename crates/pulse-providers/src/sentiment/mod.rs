//! Sentiment provider implementations
//!
//! Each provider implements the `SentimentProvider` port from
//! `pulse-domain`. The HTTP provider talks to a remote detection service;
//! the lexicon provider scores offline for tests and development.

/// Shared constructor helpers
pub mod helpers;
/// Remote HTTP/JSON sentiment service provider
pub mod http;
/// Deterministic offline keyword provider
pub mod lexicon;

pub use http::HttpSentimentProvider;
pub use lexicon::LexiconSentimentProvider;
