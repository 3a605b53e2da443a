//! Provider and analyzer factories
//!
//! Pure construction functions: configuration in, caller-owned handles out.
//! There is no registry and no cached singleton; a process that wants one
//! shared analyzer keeps the `Arc` itself.

use std::sync::Arc;
use std::time::Duration;

use pulse_application::SentimentAnalyzer;
use pulse_domain::error::{Error, Result};
use pulse_domain::ports::providers::SentimentProvider;
use pulse_providers::sentiment::{HttpSentimentProvider, LexiconSentimentProvider};
use tracing::info;

use crate::config::{AppConfig, ProviderConfig};

/// Construct the sentiment provider named by the configuration.
pub fn create_sentiment_provider(config: &ProviderConfig) -> Result<Arc<dyn SentimentProvider>> {
    match config.provider.as_str() {
        "lexicon" => {
            info!("using lexicon sentiment provider");
            Ok(Arc::new(LexiconSentimentProvider::new(
                config.language_code.clone(),
            )))
        }
        "http" => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| Error::config("http sentiment provider requires an api_key"))?;
            let http_client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .map_err(|e| Error::config_with_source("failed to build HTTP client", e))?;

            info!(
                base_url = config.base_url.as_deref().unwrap_or("<default>"),
                "using http sentiment provider"
            );
            Ok(Arc::new(HttpSentimentProvider::new(
                api_key,
                config.base_url.clone(),
                config.language_code.clone(),
                http_client,
            )))
        }
        other => Err(Error::config(format!(
            "unknown sentiment provider: {other}"
        ))),
    }
}

/// Construct a fully wired analyzer from the application configuration.
pub fn build_analyzer(config: &AppConfig) -> Result<SentimentAnalyzer> {
    let provider = create_sentiment_provider(&config.provider)?;
    Ok(SentimentAnalyzer::new(provider, config.analyzer.clone()))
}
