// ============================================================================
// PriceTicker : polling périodique de la cotisation
// ============================================================================
// Un fetch immédiat au start(), puis un fetch par intervalle (20s par
// défaut), jusqu'au stop().
//
// CONCEPTS RUST :
// 1. tokio::time::interval : timer périodique dans une tâche async
// 2. JoinHandle::abort() : annulation déterministe du timer
// 3. Arc<AtomicBool> : drapeau de vie partagé avec les fetchs en vol
// 4. Drop : le timer ne survit jamais à son propriétaire (RAII)
//
// Les résultats passent par un channel mpsc vers la boucle UI, seule à
// modifier la RateCard.
// ============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::api::QuoteSource;
use crate::config::TickerConfig;
use crate::models::TickerUpdate;

/// Ticker de prix avec cycle de vie start/stop explicite
pub struct PriceTicker<S: QuoteSource> {
    source: Arc<S>,
    symbol: String,
    poll_interval: Duration,
    runtime: Handle,
    updates: UnboundedSender<TickerUpdate>,

    /// Drapeau de vie du polling courant
    /// Recréé à chaque start() pour qu'un fetch d'un cycle précédent
    /// ne puisse jamais publier après un redémarrage.
    live: Arc<AtomicBool>,

    /// Timer actif (au plus un par instance)
    timer: Option<JoinHandle<()>>,
}

impl<S: QuoteSource> PriceTicker<S> {
    /// Crée le ticker et le receiver des mises à jour
    ///
    /// Le ticker est créé arrêté : rien n'est fetché avant start().
    pub fn new(
        source: S,
        config: &TickerConfig,
        runtime: Handle,
    ) -> (Self, UnboundedReceiver<TickerUpdate>) {
        let (updates, receiver) = mpsc::unbounded_channel();

        let ticker = Self {
            source: Arc::new(source),
            symbol: config.symbol.clone(),
            poll_interval: config.poll_interval,
            runtime,
            updates,
            live: Arc::new(AtomicBool::new(false)),
            timer: None,
        };

        (ticker, receiver)
    }

    /// Démarre le polling : un fetch immédiat puis un par intervalle
    ///
    /// Sans effet si le polling tourne déjà.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            warn!(symbol = %self.symbol, "Price ticker already running, ignoring start");
            return;
        }

        let live = Arc::new(AtomicBool::new(true));
        self.live = live.clone();

        let source = self.source.clone();
        let symbol = self.symbol.clone();
        let updates = self.updates.clone();
        let period = self.poll_interval;

        info!(symbol = %symbol, interval_secs = period.as_secs(), "Starting price polling");

        self.timer = Some(self.runtime.spawn(async move {
            // Le premier tick d'un interval se résout immédiatement
            let mut ticks = time::interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;

                if !live.load(Ordering::Acquire) {
                    break;
                }

                // Chaque fetch est une tâche indépendante : un fetch lent
                // ne décale pas le suivant
                tokio::spawn(fetch_once(
                    source.clone(),
                    symbol.clone(),
                    updates.clone(),
                    live.clone(),
                ));
            }
        }));
    }

    /// Arrête le polling
    ///
    /// Idempotent. Aucun fetch n'est émis après l'appel ; les fetchs déjà
    /// en vol terminent mais leur résultat est jeté.
    pub fn stop(&mut self) {
        self.live.store(false, Ordering::Release);

        if let Some(timer) = self.timer.take() {
            timer.abort();
            info!(symbol = %self.symbol, "Price polling stopped");
        }
    }

    /// Vérifie si un timer de polling est actif
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl<S: QuoteSource> Drop for PriceTicker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Un fetch : succès → TickerUpdate, échec → log seulement
async fn fetch_once<S: QuoteSource>(
    source: Arc<S>,
    symbol: String,
    updates: UnboundedSender<TickerUpdate>,
    live: Arc<AtomicBool>,
) {
    match source.fetch_price(&symbol).await {
        Ok(price) => {
            // La vue a pu être détruite pendant la requête
            if !live.load(Ordering::Acquire) {
                debug!(symbol = %symbol, price, "Ticker stopped during fetch, discarding price");
                return;
            }

            debug!(symbol = %symbol, price, "Exchange rate fetched");
            if updates.send(TickerUpdate::new(price)).is_err() {
                debug!("Update receiver dropped, discarding price");
            }
        }
        Err(e) => {
            error!(symbol = %symbol, error = %e, "Failed to fetch exchange rate");
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
// CONCEPT : Horloge tokio en pause (feature test-util)
// - #[tokio::test(start_paused = true)] : le temps n'avance que quand le
//   runtime est inactif
// - sleep(20s) s'exécute instantanément et déclenche les ticks dus
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::sync::Notify;

    use super::*;
    use crate::api::FetchError;
    use crate::models::RateCard;

    /// Source qui compte les appels et renvoie toujours le même prix
    struct CountingSource {
        calls: Arc<AtomicUsize>,
        price: f64,
    }

    #[async_trait]
    impl QuoteSource for CountingSource {
        async fn fetch_price(&self, _symbol: &str) -> Result<f64, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.price)
        }
    }

    /// Source qui rejoue une suite de réponses scriptées
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<f64, FetchError>>>,
    }

    #[async_trait]
    impl QuoteSource for ScriptedSource {
        async fn fetch_price(&self, _symbol: &str) -> Result<f64, FetchError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::InvalidPrice(String::new())))
        }
    }

    /// Source bloquée jusqu'à ce que le test ouvre la porte
    struct GatedSource {
        gate: Arc<Notify>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl QuoteSource for GatedSource {
        async fn fetch_price(&self, _symbol: &str) -> Result<f64, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(1500.0)
        }
    }

    fn config() -> TickerConfig {
        TickerConfig::default()
    }

    /// Laisse tourner les tâches prêtes (et avance l'horloge de 10ms)
    async fn settle() {
        time::sleep(Duration::from_millis(10)).await;
    }

    fn drain(receiver: &mut UnboundedReceiver<TickerUpdate>, card: &mut RateCard) {
        while let Ok(update) = receiver.try_recv() {
            card.apply(update);
        }
    }

    fn counting(calls: &Arc<AtomicUsize>) -> CountingSource {
        CountingSource {
            calls: calls.clone(),
            price: 1234.5,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fetched_before_start() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (ticker, _rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_immediately_then_every_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut ticker, mut rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        ticker.start();
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(rx.try_recv().is_ok());

        // Juste avant le deuxième tick
        time::sleep(Duration::from_millis(19_900)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        time::sleep(Duration::from_secs(40)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);

        ticker.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fetch_after_stop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut ticker, _rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        ticker.start();
        settle().await;
        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        ticker.stop();
        assert!(!ticker.is_running());

        time::sleep(Duration::from_secs(600)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut ticker, _rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        ticker.stop();
        ticker.start();
        settle().await;
        ticker.stop();
        ticker.stop();

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_keeps_single_timer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut ticker, _rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        ticker.start();
        ticker.start();
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_polling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut ticker, _rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        ticker.start();
        settle().await;
        drop(ticker);

        time::sleep(Duration::from_secs(120)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_shows_formatted_rate() {
        let source = ScriptedSource {
            responses: Mutex::new(VecDeque::from(vec![Ok(123.456)])),
        };
        let (mut ticker, mut rx) = PriceTicker::new(source, &config(), Handle::current());
        let mut card = RateCard::new("ARS/USDT");
        assert_eq!(card.rate_text(), "Cargando...");

        ticker.start();
        settle().await;
        drain(&mut rx, &mut card);

        assert_eq!(card.rate_text(), "123.46 ARS/USDT");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_previous_display() {
        let source = ScriptedSource {
            responses: Mutex::new(VecDeque::from(vec![
                Ok(1100.0),
                Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY)),
                Err(FetchError::InvalidPrice("abc".to_string())),
            ])),
        };
        let (mut ticker, mut rx) = PriceTicker::new(source, &config(), Handle::current());
        let mut card = RateCard::new("ARS/USDT");

        ticker.start();
        settle().await;
        drain(&mut rx, &mut card);
        assert_eq!(card.rate_text(), "1100.00 ARS/USDT");

        time::sleep(Duration::from_secs(20)).await;
        drain(&mut rx, &mut card);
        assert_eq!(card.rate_text(), "1100.00 ARS/USDT");

        time::sleep(Duration::from_secs(20)).await;
        drain(&mut rx, &mut card);
        assert_eq!(card.rate_text(), "1100.00 ARS/USDT");
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_before_first_success_stays_loading() {
        let source = ScriptedSource {
            responses: Mutex::new(VecDeque::from(vec![Err(FetchError::InvalidPrice(String::new()))])),
        };
        let (mut ticker, mut rx) = PriceTicker::new(source, &config(), Handle::current());
        let mut card = RateCard::new("ARS/USDT");

        ticker.start();
        settle().await;
        drain(&mut rx, &mut card);

        assert_eq!(card.rate_text(), "Cargando...");
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_fetch_discarded_after_stop() {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let source = GatedSource {
            gate: gate.clone(),
            calls: calls.clone(),
        };
        let (mut ticker, mut rx) = PriceTicker::new(source, &config(), Handle::current());

        ticker.start();
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Vue détruite pendant que la requête est en vol
        ticker.stop();
        gate.notify_one();
        settle().await;

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_stop_fetches_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (mut ticker, _rx) = PriceTicker::new(counting(&calls), &config(), Handle::current());

        ticker.start();
        settle().await;
        ticker.stop();

        ticker.start();
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(ticker.is_running());
    }
}
