// ============================================================================
// Module : api
// ============================================================================
// Sources de cotisation utilisées par le ticker de prix
//
// CONCEPT RUST : Trait comme point d'injection
// - Le ticker ne connaît que QuoteSource
// - BinanceSource en production, des fakes dans les tests
// ============================================================================

pub mod binance; // Client de l'endpoint public Binance
pub mod error;   // FetchError

use async_trait::async_trait;

pub use binance::BinanceSource;
pub use error::FetchError;

/// Source capable de fournir le prix courant d'une paire
#[async_trait]
pub trait QuoteSource: Send + Sync + 'static {
    /// Récupère le prix courant de `symbol` (ex: "USDTARS")
    async fn fetch_price(&self, symbol: &str) -> Result<f64, FetchError>;
}
