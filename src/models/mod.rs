// ============================================================================
// Module : models
// ============================================================================
// Structures de données de la landing page
// ============================================================================

pub mod quote; // Quote, PollState, TickerUpdate, RateCard

pub use quote::{PollState, Quote, RateCard, TickerUpdate, LOADING_PLACEHOLDER};
