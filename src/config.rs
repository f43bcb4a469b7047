// ============================================================================
// Configuration : TickerConfig
// ============================================================================
// Paramètres du ticker de prix (endpoint, symbole, intervalle de polling)
//
// Pas de fichier de configuration : les valeurs par défaut correspondent à
// la landing page en production, les setters servent aux tests.
// ============================================================================

use std::time::Duration;

/// URL de base de l'API publique Binance
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Paire USDT → ARS
pub const DEFAULT_SYMBOL: &str = "USDTARS";

/// Unité affichée après la cotisation
pub const DEFAULT_UNIT_LABEL: &str = "ARS/USDT";

/// Intervalle entre deux fetchs
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);

/// Timeout d'une requête HTTP (reste inférieur à l'intervalle de polling)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration du ticker de prix
#[derive(Debug, Clone, PartialEq)]
pub struct TickerConfig {
    /// URL de base de la source de prix (sans slash final)
    pub base_url: String,

    /// Symbole de la paire (ex: "USDTARS")
    pub symbol: String,

    /// Unité affichée (ex: "ARS/USDT")
    pub unit_label: String,

    /// Intervalle entre deux fetchs
    pub poll_interval: Duration,

    /// Timeout HTTP par requête
    pub request_timeout: Duration,
}

impl TickerConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>, unit_label: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self.unit_label = unit_label.into();
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            unit_label: DEFAULT_UNIT_LABEL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
