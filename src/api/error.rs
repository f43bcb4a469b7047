// ============================================================================
// Erreur : FetchError
// ============================================================================
// Toute erreur empêchant une mise à jour de la cotisation
// (réseau, statut HTTP, JSON invalide, prix non numérique)
//
// Ces erreurs ne remontent jamais jusqu'à l'affichage : le ticker les
// logge et attend le prochain tick.
// ============================================================================

use thiserror::Error;

/// Échec d'un fetch de cotisation
#[derive(Error, Debug)]
pub enum FetchError {
    /// Erreur de transport (DNS, connexion, timeout, lecture du body)
    #[error("Échec de la requête HTTP : {0}")]
    Network(#[from] reqwest::Error),

    /// La source a répondu avec un statut hors 2xx
    #[error("La source de prix a retourné une erreur : HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Body vide, JSON malformé ou champ `price` absent
    #[error("Échec du parsing JSON : {0}")]
    Parse(#[from] serde_json::Error),

    /// Le champ `price` n'est pas un nombre fini et positif
    #[error("Prix invalide : {0:?}")]
    InvalidPrice(String),
}
