// ============================================================================
// API Client : Binance
// ============================================================================
// Récupère le prix d'une paire via GET /api/v3/ticker/price?symbol=...
//
// Réponse attendue : {"symbol": "USDTARS", "price": "1234.56000000"}
// Binance encode le prix en string, mais on accepte aussi un nombre JSON.
// ============================================================================

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::api::{FetchError, QuoteSource};
use crate::config::TickerConfig;

// ============================================================================
// Structures pour parser la réponse JSON
// ============================================================================

#[derive(Debug, Deserialize)]
struct TickerPriceResponse {
    price: PriceField,
}

/// CONCEPT SERDE : #[serde(untagged)]
/// - Essaie chaque variant dans l'ordre
/// - "123.45" → Text, 123.45 → Number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Text(String),
    Number(f64),
}

// ============================================================================
// BinanceSource
// ============================================================================

/// Source de cotisation basée sur l'API publique Binance
#[derive(Debug, Clone)]
pub struct BinanceSource {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceSource {
    /// Crée la source avec un client HTTP réutilisé entre les fetchs
    pub fn new(config: &TickerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("ecucondor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QuoteSource for BinanceSource {
    #[instrument(skip(self))]
    async fn fetch_price(&self, symbol: &str) -> Result<f64, FetchError> {
        let url = build_price_url(&self.base_url, symbol);
        debug!(url = %url, "Sending price request");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            error!(status = %status, "Price source returned error status");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        parse_price(&body)
    }
}

/// Construit l'URL de l'endpoint ticker/price
pub fn build_price_url(base_url: &str, symbol: &str) -> String {
    format!("{}/api/v3/ticker/price?symbol={}", base_url, symbol)
}

/// Extrait le champ `price` d'un body JSON
///
/// Refuse les prix non finis (NaN, inf) et négatifs : une cotisation
/// affichée est toujours >= 0.
pub fn parse_price(body: &str) -> Result<f64, FetchError> {
    let response: TickerPriceResponse = serde_json::from_str(body)?;

    let price = match response.price {
        PriceField::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| FetchError::InvalidPrice(text.clone()))?,
        PriceField::Number(value) => value,
    };

    if !price.is_finite() || price < 0.0 {
        return Err(FetchError::InvalidPrice(price.to_string()));
    }

    Ok(price)
}

// ============================================================================
// Tests unitaires
// ============================================================================
