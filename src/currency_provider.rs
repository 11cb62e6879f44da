//! Exchange-rate lookup abstraction.

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, base: &str, target: &str) -> Result<Decimal>;
}
