// ============================================================================
// Contenu statique de la landing page
// ============================================================================

pub const BRAND: &str = "Ecucondor";

/// Entrées du dropdown "Servicios"
pub const SERVICES: [&str; 3] = [
    "Transferencias Internacionales",
    "Cambio de Divisas",
    "Asesoría Financiera",
];

pub const HERO_TITLE: &str = "Transferencias Internacionales";
pub const HERO_HIGHLIGHT: &str = "Rápidas y Seguras";
pub const HERO_TAGLINE: &str =
    "Conectamos Ecuador con el mundo a través de soluciones financieras innovadoras y confiables";

/// Carte de fonctionnalité statique (la carte de cotisation est dynamique)
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const RATES_ICON: &str = "$";
pub const RATES_TITLE: &str = "Mejores Tasas";

pub const STATIC_FEATURES: [Feature; 2] = [
    Feature {
        icon: "◆",
        title: "100% Seguro",
        body: "Transacciones protegidas y verificadas",
    },
    Feature {
        icon: "◷",
        title: "Rápido",
        body: "Transferencias procesadas en minutos",
    },
];

pub const COVERAGE_TITLE: &str = "Cobertura Global";
pub const COVERAGE_TEXT: &str = "Realizamos transferencias a más de 100 países en todo el mundo";

pub const FOOTER_BLURB: &str = "Soluciones financieras innovadoras para un mundo conectado";

/// (libellé, route) des liens rapides du footer
pub const QUICK_LINKS: [(&str, &str); 4] = [
    ("Sobre Nosotros", "/about"),
    ("Servicios", "/services"),
    ("Contacto", "/contact"),
    ("Preguntas Frecuentes", "/faq"),
];

pub const CONTACT_EMAIL: &str = "info@ecucondor.com";
pub const CONTACT_PHONE: &str = "+593 123 456 789";

pub const COPYRIGHT: &str = "© 2024 Ecucondor. Todos los derechos reservados.";
