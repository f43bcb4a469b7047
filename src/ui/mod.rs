// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod content; // Textes statiques de la page
pub mod events;  // Gestion des événements clavier
pub mod page;    // Rendu de la landing page

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use page::render;
