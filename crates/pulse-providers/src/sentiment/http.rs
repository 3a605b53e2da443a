//! HTTP Sentiment Provider
//!
//! Implements the `SentimentProvider` port against a remote HTTP/JSON
//! sentiment detection service. The service exposes a single-text endpoint
//! and a batch endpoint capped at 25 texts per request; per-item failures
//! inside a batch are reported in an `errors` list next to the successful
//! `results`, each entry carrying the index of the item it belongs to.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pulse_domain::constants::SENTIMENT_BATCH_MAX_ITEMS;
use pulse_domain::error::{Error, Result};
use pulse_domain::ports::providers::{
    BatchItemError, BatchSentimentDetection, IndexedDetection, SentimentDetection,
    SentimentProvider,
};
use pulse_domain::value_objects::{RawSentimentLabel, SentimentScores};

use crate::constants::{
    HTTP_SENTIMENT_BATCH_PATH, HTTP_SENTIMENT_DEFAULT_URL, HTTP_SENTIMENT_DETECT_PATH,
};
use crate::sentiment::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Remote sentiment service provider
///
/// Implements the `SentimentProvider` domain port against an HTTP/JSON
/// detection service. Receives the HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use pulse_providers::sentiment::HttpSentimentProvider;
/// use reqwest::Client;
///
/// fn example() {
///     let client = Client::new();
///     let provider = HttpSentimentProvider::new(
///         "api-key".to_string(),
///         None,
///         "en".to_string(),
///         client,
///     );
/// }
/// ```
pub struct HttpSentimentProvider {
    api_key: String,
    base_url: Option<String>,
    language_code: String,
    http_client: Client,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    text: &'a str,
    language: &'a str,
}

#[derive(Serialize)]
struct BatchDetectRequest<'a> {
    texts: &'a [String],
    language: &'a str,
}

#[derive(Deserialize)]
struct DetectResponse {
    sentiment: String,
    scores: SentimentScores,
}

#[derive(Deserialize)]
struct BatchItemResponse {
    index: usize,
    sentiment: String,
    scores: SentimentScores,
}

#[derive(Deserialize)]
struct BatchErrorResponse {
    index: usize,
    message: String,
}

#[derive(Deserialize)]
struct BatchDetectResponse {
    results: Vec<BatchItemResponse>,
    #[serde(default)]
    errors: Vec<BatchErrorResponse>,
}

impl HttpSentimentProvider {
    /// Create a new HTTP sentiment provider
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for the detection service
    /// * `base_url` - Optional custom base URL (defaults to the local service)
    /// * `language_code` - Language tag passed through with every request
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        language_code: String,
        http_client: Client,
    ) -> Self {
        let api_key = constructor::normalize_api_key(&api_key);
        let base_url = constructor::normalize_url(base_url);
        Self {
            api_key,
            base_url,
            language_code,
            http_client,
        }
    }

    /// Get the effective base URL
    fn effective_base_url(&self) -> String {
        constructor::effective_url(self.base_url.as_deref(), HTTP_SENTIMENT_DEFAULT_URL)
    }

    /// Send a JSON request to a service endpoint and parse the response
    async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http_client
            .post(format!("{}{path}", self.effective_base_url()))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(&e, "sentiment service"))?;

        HttpResponseUtils::check_and_parse(response, "sentiment service").await
    }
}

#[async_trait]
impl SentimentProvider for HttpSentimentProvider {
    async fn detect_sentiment(&self, text: &str) -> Result<SentimentDetection> {
        let request = DetectRequest {
            text,
            language: &self.language_code,
        };
        let response: DetectResponse =
            self.post_json(HTTP_SENTIMENT_DETECT_PATH, &request).await?;

        Ok(SentimentDetection {
            label: RawSentimentLabel::from(response.sentiment.as_str()),
            scores: response.scores,
        })
    }

    async fn batch_detect_sentiment(&self, texts: &[String]) -> Result<BatchSentimentDetection> {
        if texts.is_empty() {
            return Ok(BatchSentimentDetection::default());
        }
        if texts.len() > SENTIMENT_BATCH_MAX_ITEMS {
            return Err(Error::validation(format!(
                "batch size cannot exceed {SENTIMENT_BATCH_MAX_ITEMS} items, got {}",
                texts.len()
            )));
        }

        debug!(count = texts.len(), "submitting sentiment batch");
        let request = BatchDetectRequest {
            texts,
            language: &self.language_code,
        };
        let response: BatchDetectResponse =
            self.post_json(HTTP_SENTIMENT_BATCH_PATH, &request).await?;

        Ok(BatchSentimentDetection {
            results: response
                .results
                .into_iter()
                .map(|item| IndexedDetection {
                    index: item.index,
                    label: RawSentimentLabel::from(item.sentiment.as_str()),
                    scores: item.scores,
                })
                .collect(),
            errors: response
                .errors
                .into_iter()
                .map(|item| BatchItemError {
                    index: item.index,
                    message: item.message,
                })
                .collect(),
        })
    }

    fn provider_name(&self) -> &str {
        "http"
    }

    fn language_code(&self) -> &str {
        &self.language_code
    }
}
