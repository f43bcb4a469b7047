// ============================================================================
// Structure : App
// ============================================================================
// État de la landing page : menus, bouton survolé, carte de cotisation
//
// CONCEPTS RUST :
// 1. State Management : tout l'état UI dans une seule structure
// 2. Mutabilité contrôlée : seule la boucle UI modifie App
// 3. Enums pour les cibles de focus (pas de chaînes magiques)
// ============================================================================

use crate::models::{RateCard, TickerUpdate};

// ============================================================================
// Enum : FocusTarget
// ============================================================================
// Les boutons "survolables" de la page, dans l'ordre de navigation Tab
// ============================================================================

/// Boutons de la page pouvant recevoir le focus (équivalent du survol)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Services,
    About,
    Contact,
    Register,
    Start,
    HowItWorks,
}

impl FocusTarget {
    /// Ordre de navigation : header de gauche à droite, puis le hero
    pub const ALL: [FocusTarget; 6] = [
        FocusTarget::Services,
        FocusTarget::About,
        FocusTarget::Contact,
        FocusTarget::Register,
        FocusTarget::Start,
        FocusTarget::HowItWorks,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// Bouton suivant (cyclique)
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Bouton précédent (cyclique)
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Libellé du bouton
    ///
    /// Les trois appels à l'action changent de texte au survol.
    pub fn label(self, focused: bool) -> &'static str {
        match (self, focused) {
            (FocusTarget::Services, _) => "Servicios ▾",
            (FocusTarget::About, _) => "Sobre Nosotros",
            (FocusTarget::Contact, _) => "Contacto",
            (FocusTarget::Register, false) => "Registrarse",
            (FocusTarget::Register, true) => "¡Únete Ahora!",
            (FocusTarget::Start, false) => "Comenzar Ahora",
            (FocusTarget::Start, true) => "¡Empieza Ya!",
            (FocusTarget::HowItWorks, false) => "Cómo Funciona",
            (FocusTarget::HowItWorks, true) => "Descubre Más",
        }
    }

    /// Route cible du lien (affichée, jamais suivie)
    pub fn route(self) -> Option<&'static str> {
        match self {
            FocusTarget::Services => None,
            FocusTarget::About => Some("/about"),
            FocusTarget::Contact => Some("/contact"),
            FocusTarget::Register | FocusTarget::Start => Some("/register"),
            FocusTarget::HowItWorks => Some("/how-it-works"),
        }
    }
}

/// État principal de la landing page
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Menu mobile déplié (terminal étroit)
    pub menu_open: bool,

    /// Dropdown "Servicios" déplié
    pub services_open: bool,

    /// Bouton actuellement survolé (None = aucun)
    pub focus: Option<FocusTarget>,

    /// Carte "Mejores Tasas" alimentée par le ticker
    pub rate_card: RateCard,
}

impl App {
    /// Crée l'état initial : menus fermés, aucun focus, cotisation en chargement
    pub fn new(unit_label: &str) -> Self {
        Self {
            running: true,
            menu_open: false,
            services_open: false,
            focus: None,
            rate_card: RateCard::new(unit_label),
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ouvre/ferme le menu mobile
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Ouvre/ferme le dropdown des services
    pub fn toggle_services(&mut self) {
        self.services_open = !self.services_open;
    }

    /// Passe le focus au bouton suivant (le premier si aucun)
    pub fn focus_next(&mut self) {
        self.focus = Some(match self.focus {
            Some(target) => target.next(),
            None => FocusTarget::ALL[0],
        });
    }

    /// Passe le focus au bouton précédent (le dernier si aucun)
    pub fn focus_previous(&mut self) {
        self.focus = Some(match self.focus {
            Some(target) => target.previous(),
            None => FocusTarget::ALL[FocusTarget::ALL.len() - 1],
        });
    }

    /// Vérifie si `target` est survolé
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    /// Retire le focus et ferme les menus
    ///
    /// Retourne false s'il n'y avait rien à fermer (Esc quitte alors l'app).
    pub fn dismiss(&mut self) -> bool {
        let had_something = self.focus.is_some() || self.menu_open || self.services_open;
        self.focus = None;
        self.menu_open = false;
        self.services_open = false;
        had_something
    }

    /// Applique une cotisation reçue du ticker
    pub fn apply_update(&mut self, update: TickerUpdate) {
        self.rate_card.apply(update);
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
