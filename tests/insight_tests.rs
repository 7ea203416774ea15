//! Insight requests racing against the player's selection.
//!
//! A slow service is raced against dismissals and reselections; late answers
//! must never land on a different selection.

use std::time::Duration;

use linhas::core::{Coordinate, GridSize, MatchConfig, TurnTime};
use linhas::driver::{fetch_insight, shared, SharedSession};
use linhas::game::{CellResult, Session};
use linhas::insight::{Insight, InsightService};
use linhas::words::WordBank;

/// Answers after a fixed delay, echoing the pair it was asked about.
struct SlowService {
    delay: Duration,
}

impl InsightService for SlowService {
    async fn request_insight(&self, concept: &str, context: &str) -> Insight {
        tokio::time::sleep(self.delay).await;
        Insight::new(format!("{concept} / {context}"), "Hb 11:1")
    }
}

fn running() -> SharedSession {
    let mut session = Session::new();
    let config = MatchConfig::new()
        .grid_size(GridSize::Two)
        .turn_time(TurnTime::Unlimited)
        .seed(21);
    session.start_match(config, &WordBank::default()).unwrap();
    shared(session)
}

fn slow() -> SlowService {
    SlowService {
        delay: Duration::from_secs(5),
    }
}

#[tokio::test(start_paused = true)]
async fn test_insight_applied_when_selection_unchanged() {
    let session = running();
    session.lock().await.select_cell(Coordinate::new(1, 1)).unwrap();

    assert!(fetch_insight(&session, &slow()).await);

    let guard = session.lock().await;
    let state = guard.state().unwrap();
    let labels = state.active_labels().unwrap();
    let insight = state.insight().unwrap();
    assert_eq!(insight.explanation, format!("{} / {}", labels.concept, labels.context));
}

#[tokio::test(start_paused = true)]
async fn test_dismissed_before_response() {
    let session = running();
    session.lock().await.select_cell(Coordinate::new(1, 1)).unwrap();

    let task = {
        let session = session.clone();
        tokio::spawn(async move { fetch_insight(&session, &slow()).await })
    };

    tokio::time::sleep(Duration::from_secs(1)).await;
    session.lock().await.dismiss_cell().unwrap();
    session.lock().await.select_cell(Coordinate::new(0, 0)).unwrap();

    assert!(!task.await.unwrap());

    let guard = session.lock().await;
    let state = guard.state().unwrap();
    assert_eq!(state.active_cell(), Some(Coordinate::new(0, 0)));
    assert!(state.insight().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_resolved_before_response() {
    let session = running();
    session.lock().await.select_cell(Coordinate::new(0, 1)).unwrap();

    let task = {
        let session = session.clone();
        tokio::spawn(async move { fetch_insight(&session, &slow()).await })
    };

    tokio::time::sleep(Duration::from_secs(1)).await;
    session.lock().await.mark_result(CellResult::Correct).unwrap();

    assert!(!task.await.unwrap());
    assert!(session.lock().await.state().unwrap().insight().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_before_response() {
    let session = running();
    session.lock().await.select_cell(Coordinate::new(0, 1)).unwrap();

    let task = {
        let session = session.clone();
        tokio::spawn(async move { fetch_insight(&session, &slow()).await })
    };

    tokio::time::sleep(Duration::from_secs(1)).await;
    session.lock().await.return_to_config().unwrap();

    assert!(!task.await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_new_selection_clears_previous_insight() {
    let session = running();
    session.lock().await.select_cell(Coordinate::new(0, 0)).unwrap();
    assert!(fetch_insight(&session, &slow()).await);

    let mut guard = session.lock().await;
    guard.dismiss_cell().unwrap();
    assert!(guard.state().unwrap().insight().is_none());
}
