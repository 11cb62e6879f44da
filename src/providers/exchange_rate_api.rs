use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::currency_provider::CurrencyRateProvider;

// ExchangeRateApiProvider implementation for CurrencyRateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

/// Latest-rates payload. The provider only guarantees a `rates` table keyed
/// by currency code; both levels are optional so absence is an explicit check.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: Option<HashMap<String, Decimal>>,
}

#[async_trait]
impl CurrencyRateProvider for ExchangeRateApiProvider {
    async fn get_rate(&self, base: &str, target: &str) -> Result<Decimal> {
        let endpoint = format!("/v4/latest/{base}");
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting latest rates from {}", url);

        let client = reqwest::Client::builder().user_agent("fxc/1.0").build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, base))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;

        let data: Option<LatestRatesResponse> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        data.and_then(|d| d.rates)
            .and_then(|mut rates| rates.remove(target))
            .ok_or_else(|| anyhow!("Currency not found."))
    }
}
