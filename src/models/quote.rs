// ============================================================================
// Structure : RateCard
// ============================================================================
// État côté vue de la carte "Mejores Tasas" : dernière cotisation connue
// et indicateur Loading/Ready
//
// CONCEPTS RUST :
// 1. Newtype : Quote enveloppe un f64
// 2. Enum + Default : PollState démarre en Loading
// 3. Un seul écrivain : seule la boucle UI appelle apply()
// ============================================================================

use chrono::{DateTime, Utc};

/// Texte affiché tant qu'aucun fetch n'a réussi
pub const LOADING_PLACEHOLDER: &str = "Cargando...";

/// Cotisation : unités de monnaie locale par unité de l'actif de référence
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quote(f64);

impl Quote {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Formatte avec exactement deux décimales suivies de l'unité
    pub fn display(&self, unit_label: &str) -> String {
        format!("{:.2} {}", self.0, unit_label)
    }
}

/// Indique si une cotisation a déjà été reçue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    /// Aucun fetch réussi pour l'instant
    #[default]
    Loading,

    /// Au moins un fetch a réussi
    Ready,
}

/// Message envoyé par le ticker à la vue après un fetch réussi
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerUpdate {
    pub price: f64,
    pub fetched_at: DateTime<Utc>,
}

impl TickerUpdate {
    /// Crée une mise à jour horodatée maintenant
    pub fn new(price: f64) -> Self {
        Self {
            price,
            fetched_at: Utc::now(),
        }
    }
}

/// Carte de cotisation affichée sur la landing page
#[derive(Debug, Clone)]
pub struct RateCard {
    quote: Quote,
    state: PollState,
    unit_label: String,
    fetched_at: Option<DateTime<Utc>>,
}

impl RateCard {
    /// Carte vide : Quote à zéro, état Loading
    pub fn new(unit_label: impl Into<String>) -> Self {
        Self {
            quote: Quote::default(),
            state: PollState::Loading,
            unit_label: unit_label.into(),
            fetched_at: None,
        }
    }

    /// Applique une mise à jour du ticker
    ///
    /// Écrase la cotisation en place (dernier arrivé gagne) et passe en Ready.
    pub fn apply(&mut self, update: TickerUpdate) {
        self.quote = Quote::new(update.price);
        self.state = PollState::Ready;
        self.fetched_at = Some(update.fetched_at);
    }

    pub fn quote(&self) -> Quote {
        self.quote
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == PollState::Ready
    }

    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    /// Heure de la dernière cotisation reçue
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// "Cargando..." ou "<valeur> <unité>" (ex: "123.46 ARS/USDT")
    pub fn rate_text(&self) -> String {
        match self.state {
            PollState::Loading => LOADING_PLACEHOLDER.to_string(),
            PollState::Ready => self.quote.display(&self.unit_label),
        }
    }

    /// Texte du corps de la carte tel qu'affiché sur la page
    pub fn body_text(&self) -> String {
        match self.state {
            PollState::Loading => LOADING_PLACEHOLDER.to_string(),
            PollState::Ready => format!("Cotización actual: {}", self.rate_text()),
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
