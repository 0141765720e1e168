//! Timer-driven round controller.
//!
//! Wraps a [`SessionState`] and adds the one piece of timing in the game:
//! after the player chooses, the round sits in `resolving` for a fixed
//! delay before the computer's choice is revealed.
//!
//! ## Cancellation
//!
//! The pending resolution is a spawned tokio task. It holds only a weak
//! reference to the session, and its handle is aborted on
//! [`RoundController::shutdown`] and on drop, so a torn-down session is
//! never touched by a late timer.

use log::{debug, trace};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::phase::Submission;
use super::state::{SessionSnapshot, SessionState};
use crate::core::{Choice, RoundResult, SessionConfig};
use crate::notify::{self, Notifier};

struct Shared {
    state: Mutex<SessionState>,
    notifier: Arc<dyn Notifier>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl Shared {
    fn publish(&self, snapshot: SessionSnapshot) {
        // send_replace never fails, even with no subscribers.
        self.snapshots.send_replace(snapshot);
    }
}

/// Drives one session's rounds on a tokio runtime.
///
/// Must be used from within a tokio runtime: submitting a choice spawns
/// the deferred resolution task.
pub struct RoundController {
    shared: Arc<Shared>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl RoundController {
    /// Wrap `state`, resolving rounds `delay` after each accepted choice.
    pub fn new(state: SessionState, notifier: Arc<dyn Notifier>, delay: Duration) -> Self {
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                notifier,
                snapshots,
            }),
            delay,
            pending: None,
        }
    }

    /// Build a session and controller from config.
    pub fn from_config(config: &SessionConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self::new(
            SessionState::with_seed(config.seed),
            notifier,
            config.resolve_delay(),
        )
    }

    /// Delay between an accepted choice and its resolution.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.shared.state.lock().snapshot()
    }

    /// Observe a fresh snapshot after every transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Whether a resolution timer is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Player picks a choice.
    ///
    /// When accepted, the round resolves after the configured delay.
    /// Ignored submissions change nothing and arm no timer.
    pub fn submit(&mut self, choice: Choice) -> Submission {
        let snapshot = {
            let mut state = self.shared.state.lock();
            let submission = state.submit(choice);
            if !submission.is_accepted() {
                return submission;
            }
            state.snapshot()
        };
        self.shared.publish(snapshot);
        self.schedule();
        Submission::Accepted
    }

    /// Clear the last round. Returns `false` unless a round has resolved.
    pub fn play_again(&mut self) -> bool {
        let snapshot = {
            let mut state = self.shared.state.lock();
            if !state.play_again() {
                return false;
            }
            state.snapshot()
        };
        self.shared.publish(snapshot);
        true
    }

    /// Cancel any pending resolution. The session stays as it is.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending round resolution");
            }
            handle.abort();
        }
    }

    fn schedule(&mut self) {
        self.shutdown();

        let session = Arc::downgrade(&self.shared);
        let delay = self.delay;
        trace!("Resolving in {:?}", delay);

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            resolve_pending(&session);
        }));
    }
}

/// Timer body: resolve the round if the session is still alive.
fn resolve_pending(session: &Weak<Shared>) -> Option<RoundResult> {
    let Some(shared) = session.upgrade() else {
        trace!("Session dropped before resolution");
        return None;
    };

    let (round, snapshot) = {
        let mut state = shared.state.lock();
        let round = state.resolve()?;
        (round, state.snapshot())
    };

    shared.publish(snapshot);
    notify::deliver(shared.notifier.as_ref(), round.outcome);
    Some(round)
}

impl Drop for RoundController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for RoundController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundController")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .field("snapshot", &self.snapshot())
            .finish()
    }
}
