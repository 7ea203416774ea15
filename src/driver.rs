//! Real-time glue for a shared session.
//!
//! The state machine never reads a clock; `ClockDriver` feeds it one tick per
//! period from a tokio task, and `fetch_insight` runs an insight request
//! against the active cell without holding the session lock across the
//! network call.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::game::{Phase, Session};
use crate::insight::InsightService;

/// Session shared between UI handlers and background tasks.
pub type SharedSession = Arc<Mutex<Session>>;

/// Wrap a session for sharing.
#[must_use]
pub fn shared(session: Session) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// Background ticker for the match that is running when it is spawned.
///
/// The task ends by itself once that match finishes or is abandoned, and is
/// aborted when the driver is dropped. Start a new driver for every match.
pub struct ClockDriver {
    handle: JoinHandle<()>,
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl ClockDriver {
    /// Tick `session` once per `period` (one second in play).
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(session: SharedSession, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut match_id = None;
            loop {
                interval.tick().await;
                let mut session = session.lock().await;

                let Some(state) = session.state().filter(|s| s.phase() == Phase::InProgress) else {
                    break;
                };
                let id = state.id();
                if *match_id.get_or_insert(id) != id {
                    break;
                }
                if let Some(cell) = session.tick() {
                    debug!(match_id = id, %cell, "driver tick forced a selection");
                }
            }
            debug!(?match_id, "clock driver stopped");
        });
        Self { handle }
    }

    /// The background task has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop ticking now.
    pub fn stop(self) {
        drop(self);
    }
}

/// Request an insight for the active cell and attach it if still relevant.
///
/// Returns `true` when the insight was applied, `false` when nothing was
/// selected or the selection changed while the request was in flight.
pub async fn fetch_insight<S: InsightService>(session: &Mutex<Session>, service: &S) -> bool {
    let Some(request) = session.lock().await.insight_request() else {
        return false;
    };
    let insight = service.request_insight(&request.concept, &request.context).await;
    session.lock().await.resolve_insight(request.ticket, insight)
}
