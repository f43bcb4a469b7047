// ============================================================================
// Ecucondor - Landing page terminal
// ============================================================================
// Affiche la landing page Ecucondor dans le terminal et rafraîchit la
// cotisation USDT/ARS toutes les 20 secondes
//
// ARCHITECTURE :
// 1. Runtime tokio : le timer du ticker et les fetchs HTTP y tournent
// 2. Thread principal : boucle TUI synchrone (render → input → update)
// 3. Channel mpsc : les cotisations passent du ticker vers la boucle UI
// ============================================================================

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tracing::{debug, error, info, warn};

use ecucondor::api::BinanceSource;
use ecucondor::app::App;
use ecucondor::config::TickerConfig;
use ecucondor::models::TickerUpdate;
use ecucondor::ticker::PriceTicker;
use ecucondor::ui::{events::EventHandler, render, Event};

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent pas une fois le TUI lancé : on log vers un
// fichier avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers ./logs/ecucondor.log
///
/// # Utilisation
/// ```bash
/// tail -f logs/ecucondor.log
/// RUST_LOG=ecucondor=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::PathBuf::from("./logs");

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "ecucondor.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true) // Le ticker tourne sur les threads tokio
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour ecucondor, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecucondor=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("Ecucondor starting up");

    let config = TickerConfig::default();

    // Runtime multi-thread : le ticker avance pendant que le thread
    // principal bloque sur les événements clavier
    let runtime = tokio::runtime::Runtime::new().context("Échec de la création du runtime tokio")?;

    let source = BinanceSource::new(&config).context("Échec de la création du client HTTP")?;
    let (mut ticker, updates) = PriceTicker::new(source, &config, runtime.handle().clone());

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let mut app = App::new(&config.unit_label);
    ticker.start();

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, updates);

    // Vue détruite : plus aucun fetch ne doit être planifié
    ticker.stop();

    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   0. Appliquer les cotisations reçues du ticker
//   1. Dessiner la page
//   2. Traiter l'événement clavier (ou le tick)
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    mut updates: UnboundedReceiver<TickerUpdate>,
) -> Result<()> {
    while app.is_running() {
        drain_updates(app, &mut updates);

        terminal.draw(|frame| render(frame, app))?;

        let event = events.next().context("Échec de la lecture des événements terminal")?;
        handle_event(app, event);
    }

    Ok(())
}

/// Applique toutes les cotisations en attente, sans bloquer
///
/// CONCEPT : try_recv
/// - Ok(update) : applique et continue
/// - Empty : plus rien en attente
/// - Disconnected : le ticker a disparu, la carte garde sa dernière valeur
fn drain_updates(app: &mut App, updates: &mut UnboundedReceiver<TickerUpdate>) {
    loop {
        match updates.try_recv() {
            Ok(update) => {
                debug!(price = update.price, "Applying exchange rate update");
                app.apply_update(update);
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                warn!("Price ticker channel disconnected");
                break;
            }
        }
    }
}

// ============================================================================
// Gestion des événements
// ============================================================================

fn handle_event(app: &mut App, event: Event) {
    use ecucondor::ui::events::{
        is_escape_event, is_menu_event, is_next_focus_event, is_previous_focus_event,
        is_quit_event, is_services_event,
    };

    match event {
        Event::Key(_) if is_quit_event(&event) => {
            info!("User requested quit");
            app.quit();
        }

        // Esc : ferme d'abord menus et survol, quitte si rien n'était ouvert
        Event::Key(_) if is_escape_event(&event) => {
            if !app.dismiss() {
                info!("User requested quit (escape)");
                app.quit();
            }
        }

        Event::Key(_) if is_next_focus_event(&event) => {
            app.focus_next();
            debug!(focus = ?app.focus, "Focus moved forward");
        }

        Event::Key(_) if is_previous_focus_event(&event) => {
            app.focus_previous();
            debug!(focus = ?app.focus, "Focus moved backward");
        }

        Event::Key(_) if is_menu_event(&event) => {
            app.toggle_menu();
            debug!(open = app.menu_open, "Mobile menu toggled");
        }

        Event::Key(_) if is_services_event(&event) => {
            app.toggle_services();
            debug!(open = app.services_open, "Services dropdown toggled");
        }

        Event::Key(_) | Event::Tick => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI (raw mode + alternate screen)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Échec de l'activation du raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
