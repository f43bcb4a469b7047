// ============================================================================
// Landing page - Rendu
// ============================================================================
// Dessine la page complète : header, hero, cartes, couverture, footer
//
// CONCEPTS RATATUI :
// 1. Layout : découpage vertical de la page en sections
// 2. Clear : efface une zone avant d'y dessiner un overlay (dropdown)
// 3. Responsive : en dessous de NARROW_WIDTH colonnes, la navigation passe
//    derrière un menu et les cartes s'empilent
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FocusTarget};
use crate::ui::content;

/// Largeur en dessous de laquelle la page passe en mode mobile
pub const NARROW_WIDTH: u16 = 100;

/// Boutons de la barre de navigation (header)
const NAV_BUTTONS: [FocusTarget; 4] = [
    FocusTarget::Services,
    FocusTarget::About,
    FocusTarget::Contact,
    FocusTarget::Register,
];

/// Dessine la landing page complète
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let narrow = area.width < NARROW_WIDTH;

    let header_height = if narrow && app.menu_open {
        3 + NAV_BUTTONS.len() as u16
    } else {
        3
    };
    let features_height = if narrow { 12 } else { 5 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(8),               // Hero
            Constraint::Length(features_height), // Cartes
            Constraint::Length(4),               // Couverture
            Constraint::Min(0),                  // Footer
        ])
        .split(area);

    render_header(frame, app, chunks[0], narrow);
    render_hero(frame, app, chunks[1]);
    render_features(frame, app, chunks[2], narrow);
    render_coverage(frame, chunks[3]);
    render_footer(frame, app, chunks[4], narrow);

    // Overlay dessiné en dernier pour passer au-dessus du hero
    if app.services_open && !narrow {
        render_services_dropdown(frame, chunks[0]);
    }
}

// ============================================================================
// Boutons
// ============================================================================

/// Style d'un bouton selon son type et son état de survol
fn button_style(target: FocusTarget, focused: bool) -> Style {
    let base = match target {
        // Appels à l'action : fond jaune, texte noir
        FocusTarget::Register | FocusTarget::Start => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::White),
    };

    if focused {
        match target {
            FocusTarget::Register | FocusTarget::Start => base.bg(Color::Cyan),
            _ => base.add_modifier(Modifier::REVERSED),
        }
    } else {
        base
    }
}

fn button_span(app: &App, target: FocusTarget) -> Span<'static> {
    let focused = app.is_focused(target);
    Span::styled(
        format!(" {} ", target.label(focused)),
        button_style(target, focused),
    )
}

// ============================================================================
// Header
// ============================================================================

fn render_header(frame: &mut Frame, app: &App, area: Rect, narrow: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let brand = Paragraph::new(Line::from(Span::styled(
        content::BRAND,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, rows[0]);

    let nav = if narrow {
        let style = if app.menu_open {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled("[m] ", Style::default().fg(Color::Yellow)),
            Span::styled("☰", style),
        ])
    } else {
        let mut spans = Vec::new();
        for (i, &target) in NAV_BUTTONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(button_span(app, target));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(nav).alignment(Alignment::Right), rows[0]);

    if narrow && app.menu_open {
        // Menu mobile : libellés fixes, le survol ne fait que surligner
        let items: Vec<Line> = NAV_BUTTONS
            .iter()
            .map(|&target| {
                let label = match target {
                    FocusTarget::Services => "Servicios",
                    other => other.label(false),
                };
                Line::from(Span::styled(
                    format!(" {} ", label),
                    button_style(target, app.is_focused(target)),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(items), rows[1]);
    }
}

/// Dropdown "Servicios" sous le header, aligné à droite
fn render_services_dropdown(frame: &mut Frame, header: Rect) {
    let width = content::SERVICES
        .iter()
        .map(|s| s.chars().count() as u16)
        .max()
        .unwrap_or(0)
        + 4;
    let height = content::SERVICES.len() as u16 + 2;

    let area = Rect {
        x: header.right().saturating_sub(width + 2),
        y: header.bottom(),
        width,
        height,
    }
    .intersection(frame.size());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<Line> = content::SERVICES
        .iter()
        .map(|&service| Line::from(Span::styled(format!(" {}", service), Style::default().fg(Color::White))))
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(items).block(block), area);
}

// ============================================================================
// Hero
// ============================================================================

fn render_hero(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            content::HERO_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            content::HERO_HIGHLIGHT,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(content::HERO_TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            button_span(app, FocusTarget::Start),
            Span::styled(" → ", button_style(FocusTarget::Start, app.is_focused(FocusTarget::Start))),
            Span::raw("   "),
            button_span(app, FocusTarget::HowItWorks),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Cartes de fonctionnalités
// ============================================================================

fn render_features(frame: &mut Frame, app: &App, area: Rect, narrow: bool) {
    // md:grid-cols-3 : côte à côte en large, empilées en étroit
    let (direction, constraints) = if narrow {
        (Direction::Vertical, [Constraint::Length(4); 3])
    } else {
        (Direction::Horizontal, [Constraint::Ratio(1, 3); 3])
    };

    let cards = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    render_card(
        frame,
        cards[0],
        content::RATES_ICON,
        content::RATES_TITLE,
        app.rate_card.body_text(),
        Color::Yellow,
    );

    for (feature, (&slot, color)) in content::STATIC_FEATURES
        .iter()
        .zip(cards[1..].iter().zip([Color::Cyan, Color::Magenta]))
    {
        render_card(frame, slot, feature.icon, feature.title, feature.body.to_string(), color);
    }
}

fn render_card(frame: &mut Frame, area: Rect, icon: &str, title: &str, body: String, accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(accent)),
            Span::styled(
                format!("{} ", title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(Line::from(Span::styled(body, Style::default().fg(Color::Gray))))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Couverture
// ============================================================================

fn render_coverage(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            content::COVERAGE_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(content::COVERAGE_TEXT, Style::default().fg(Color::Gray))),
        Line::from(Span::styled("◍", Style::default().fg(Color::Cyan))),
    ];

    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        area,
    );
}

// ============================================================================
// Footer
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect, narrow: bool) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns_height = if narrow { 11 } else { 5 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(columns_height),
            Constraint::Length(1), // Copyright
            Constraint::Length(1), // Raccourcis + statut
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Gray);

    let about = vec![
        Line::from(Span::styled(content::BRAND, heading)),
        Line::from(Span::styled(content::FOOTER_BLURB, muted)),
    ];

    let mut links = vec![Line::from(Span::styled("Enlaces Rápidos", heading))];
    links.extend(
        content::QUICK_LINKS
            .iter()
            .map(|&(label, _route)| Line::from(Span::styled(label, muted))),
    );

    let contact = vec![
        Line::from(Span::styled("Contáctanos", heading)),
        Line::from(Span::styled(format!("Email: {}", content::CONTACT_EMAIL), muted)),
        Line::from(Span::styled(format!("Teléfono: {}", content::CONTACT_PHONE), muted)),
    ];

    let columns = if narrow {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(5), Constraint::Length(3)])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[0])
    };

    for (lines, &slot) in [about, links, contact].into_iter().zip(columns.iter()) {
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), slot);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(content::COPYRIGHT, muted)).alignment(Alignment::Center),
        rows[1],
    );

    frame.render_widget(Paragraph::new(status_line(app)), rows[2]);
}

/// Raccourcis clavier, lien survolé et heure de la dernière cotisation
fn status_line(app: &App) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled("[q]", key),
        Span::raw(" Salir  "),
        Span::styled("[Tab/←→]", key),
        Span::raw(" Navegar  "),
        Span::styled("[s]", key),
        Span::raw(" Servicios  "),
        Span::styled("[m]", key),
        Span::raw(" Menú  "),
        Span::styled("[Esc]", key),
        Span::raw(" Cerrar"),
    ];

    if let Some(route) = app.focus.and_then(FocusTarget::route) {
        spans.push(Span::styled(format!("   → {}", route), Style::default().fg(Color::Cyan)));
    }

    if let Some(fetched_at) = app.rate_card.fetched_at() {
        spans.push(Span::styled(
            format!("   Actualizado {} UTC", fetched_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

// ============================================================================
// Tests unitaires
// ============================================================================
// CONCEPT RATATUI : TestBackend
// - Backend en mémoire : on dessine puis on lit le buffer cellule par cellule
// ============================================================================

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::models::TickerUpdate;

    const WIDE: (u16, u16) = (120, 40);
    const NARROW: (u16, u16) = (80, 50);

    /// Dessine la page et retourne une ligne de texte par rangée
    fn render_lines(app: &App, (width, height): (u16, u16)) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer.get(x, y).symbol()).collect::<String>())
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_loading_placeholder_before_first_quote() {
        let app = App::new("ARS/USDT");
        let lines = render_lines(&app, WIDE);

        assert!(contains(&lines, "Cargando..."));
        assert!(!contains(&lines, "Cotización actual"));
    }

    #[test]
    fn test_rate_card_shows_formatted_quote() {
        let mut app = App::new("ARS/USDT");
        app.apply_update(TickerUpdate::new(123.456));
        let lines = render_lines(&app, WIDE);

        assert!(contains(&lines, "Cotización actual: 123.46 ARS/USDT"));
        assert!(contains(&lines, "Actualizado"));
        assert!(!contains(&lines, "Cargando..."));
    }

    #[test]
    fn test_wide_layout_shows_all_sections() {
        let app = App::new("ARS/USDT");
        let lines = render_lines(&app, WIDE);

        assert!(lines[1].contains("Ecucondor"));
        assert!(lines[1].contains("Registrarse"));
        assert!(lines[1].contains("Sobre Nosotros"));
        assert!(contains(&lines, "Rápidas y Seguras"));
        assert!(contains(&lines, "Comenzar Ahora"));
        assert!(contains(&lines, "100% Seguro"));
        assert!(contains(&lines, "Cobertura Global"));
        assert!(contains(&lines, "Preguntas Frecuentes"));
        assert!(contains(&lines, content::CONTACT_EMAIL));
    }

    #[test]
    fn test_focused_register_swaps_label() {
        let mut app = App::new("ARS/USDT");
        app.focus = Some(FocusTarget::Register);
        let lines = render_lines(&app, WIDE);

        assert!(lines[1].contains("¡Únete Ahora!"));
        assert!(!lines[1].contains("Registrarse"));
        assert!(contains(&lines, "→ /register"));
    }

    #[test]
    fn test_services_dropdown() {
        let mut app = App::new("ARS/USDT");
        assert!(!contains(&render_lines(&app, WIDE), "Cambio de Divisas"));

        app.toggle_services();
        let lines = render_lines(&app, WIDE);
        assert!(contains(&lines, "Cambio de Divisas"));
        assert!(contains(&lines, "Asesoría Financiera"));
    }

    #[test]
    fn test_narrow_layout_collapses_nav() {
        let app = App::new("ARS/USDT");
        let lines = render_lines(&app, NARROW);

        assert!(lines[1].contains("Ecucondor"));
        assert!(lines[1].contains("☰"));
        assert!(!lines[1].contains("Registrarse"));
        assert!(contains(&lines, "Cargando..."));
    }

    #[test]
    fn test_narrow_mobile_menu_open() {
        let mut app = App::new("ARS/USDT");
        app.toggle_menu();
        let lines = render_lines(&app, NARROW);

        let menu: Vec<String> = lines[2..6].to_vec();
        assert!(contains(&menu, "Servicios"));
        assert!(contains(&menu, "Sobre Nosotros"));
        assert!(contains(&menu, "Contacto"));
        assert!(contains(&menu, "Registrarse"));
    }
}
