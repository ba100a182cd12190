//! Simulated presence feed
//!
//! There is no real presence source. A background task rewrites the
//! activity state on a fixed period and publishes the result through a
//! `watch` channel. The task lives exactly as long as its
//! [`PresenceSimulator`] handle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info, warn};

/// How often the simulated activity state is rewritten
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(30);

/// Longest period a simulator will run with
pub const MAX_PERIOD: Duration = Duration::from_secs(86_400);

/// Shortest period a simulator will run with; the timer rejects zero
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Upper bound (exclusive) of the simulated "minutes" counter
pub const MINUTES_RANGE: u32 = 60;

/// What the user is "doing"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: String,
    pub state: String,
}

/// Presence blurb shown in the secondary panel.
///
/// Only `activity.state` ever changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceStatus {
    pub avatar_url: String,
    pub username: String,
    pub activity: Activity,
}

impl Default for PresenceStatus {
    fn default() -> Self {
        Self {
            avatar_url: "/placeholder.svg?height=40&width=40".to_string(),
            username: "exoticnitron".to_string(),
            activity: Activity {
                name: "Visual Studio Code".to_string(),
                details: "Workspace: exo.dev".to_string(),
                state: activity_state(9),
            },
        }
    }
}

/// Render the activity state line for a minute count
pub fn activity_state(minutes: u32) -> String {
    format!("Coding for {} minutes", minutes)
}

/// Draw a fresh activity state line
pub fn random_activity_state<R: Rng + ?Sized>(rng: &mut R) -> String {
    activity_state(rng.random_range(0..MINUTES_RANGE))
}

/// Bring a period into `MIN_PERIOD..=MAX_PERIOD`
pub fn clamp_period(period: Duration) -> Duration {
    let clamped = period.clamp(MIN_PERIOD, MAX_PERIOD);
    if clamped != period {
        warn!(
            requested_ms = period.as_millis() as u64,
            clamped_ms = clamped.as_millis() as u64,
            "presence period out of range, clamped"
        );
    }
    clamped
}

static ACTIVE_SIMULATORS: AtomicUsize = AtomicUsize::new(0);

/// Diagnostics: simulator tasks in this process whose future has not
/// been dropped yet. Nonzero after every card has unmounted means a
/// timer leaked.
pub fn active_simulators() -> usize {
    ACTIVE_SIMULATORS.load(Ordering::SeqCst)
}

/// Counts a task as active for as long as its future holds this
struct ActiveGuard;

impl ActiveGuard {
    fn acquire() -> Self {
        ACTIVE_SIMULATORS.fetch_add(1, Ordering::SeqCst);
        Self
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_SIMULATORS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Handle to the running presence task.
///
/// Dropping the handle aborts the task; there is no other way to stop it.
pub struct PresenceSimulator {
    task: JoinHandle<()>,
    rx: watch::Receiver<PresenceStatus>,
    alive: Weak<()>,
}

impl PresenceSimulator {
    /// Start the feed with an OS-seeded RNG. Must be called inside a
    /// tokio runtime.
    pub fn start(initial: PresenceStatus, period: Duration) -> Self {
        Self::start_with_rng(initial, period, StdRng::from_os_rng())
    }

    /// Start the feed with a caller-supplied RNG.
    ///
    /// The first update fires one full `period` after start. Periods
    /// outside `MIN_PERIOD..=MAX_PERIOD` are clamped.
    pub fn start_with_rng<R>(initial: PresenceStatus, period: Duration, mut rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let period = clamp_period(period);
        let (tx, rx) = watch::channel(initial);
        let token = Arc::new(());
        let alive = Arc::downgrade(&token);
        let guard = ActiveGuard::acquire();

        let task = tokio::spawn(async move {
            let _token = token;
            let _guard = guard;
            let now = Instant::now();
            let first = now.checked_add(period).unwrap_or(now);
            let mut ticker = interval_at(first, period);
            loop {
                ticker.tick().await;
                let state = random_activity_state(&mut rng);
                debug!(%state, "presence tick");
                // Always notify, even if the minute count repeated
                tx.send_modify(|status| status.activity.state = state);
            }
        });

        info!(period_secs = period.as_secs(), "presence simulator started");
        Self { task, rx, alive }
    }

    /// New receiver that sees every future update
    pub fn subscribe(&self) -> watch::Receiver<PresenceStatus> {
        self.rx.clone()
    }

    /// Latest published status
    pub fn current(&self) -> PresenceStatus {
        self.rx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Diagnostics: a weak handle that dangles once the task's future
    /// has been dropped
    pub fn liveness(&self) -> Weak<()> {
        self.alive.clone()
    }
}

impl Drop for PresenceSimulator {
    fn drop(&mut self) {
        self.task.abort();
        info!("presence simulator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_presence_matches_card() {
        let status = PresenceStatus::default();
        assert_eq!(status.username, "exoticnitron");
        assert_eq!(status.activity.name, "Visual Studio Code");
        assert_eq!(status.activity.details, "Workspace: exo.dev");
        assert_eq!(status.activity.state, "Coding for 9 minutes");
    }

    #[test]
    fn random_state_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let state = random_activity_state(&mut rng);
            let minutes: u32 = state
                .strip_prefix("Coding for ")
                .and_then(|s| s.strip_suffix(" minutes"))
                .and_then(|n| n.parse().ok())
                .expect("well-formed state");
            assert!(minutes < MINUTES_RANGE);
        }
    }

    #[test]
    fn period_is_clamped_into_range() {
        assert_eq!(clamp_period(Duration::ZERO), MIN_PERIOD);
        assert_eq!(clamp_period(Duration::MAX), MAX_PERIOD);
        assert_eq!(clamp_period(DEFAULT_PERIOD), DEFAULT_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn huge_period_keeps_task_alive() {
        let sim = PresenceSimulator::start_with_rng(
            PresenceStatus::default(),
            Duration::MAX,
            StdRng::seed_from_u64(3),
        );
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(sim.is_running());
        assert_eq!(sim.current(), PresenceStatus::default());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribe_sees_initial_status() {
        let sim = PresenceSimulator::start_with_rng(
            PresenceStatus::default(),
            DEFAULT_PERIOD,
            StdRng::seed_from_u64(1),
        );
        let rx = sim.subscribe();
        assert_eq!(*rx.borrow(), PresenceStatus::default());
        assert!(sim.is_running());
    }
}
