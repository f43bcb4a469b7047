// ============================================================================
// Ecucondor - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // Source de cotisation (Binance)
pub mod config;    // Configuration du ticker de prix
pub mod models;    // Quote, PollState, RateCard
pub mod ticker;    // Polling périodique du prix
pub mod app;       // État de la landing page
pub mod ui;        // Interface utilisateur
