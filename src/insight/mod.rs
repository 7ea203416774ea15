//! Insight service boundary.
//!
//! An insight is an optional hint for the active cell: a short explanation
//! of how the concept relates to the context, plus a supporting verse. It
//! comes from a remote text-generation service and may take seconds to
//! arrive, so the match never waits on it and never sees it fail: every
//! failure resolves to [`Insight::fallback`].
//!
//! Staleness is handled by the session (see `Session::insight_request`
//! and `Session::resolve_insight`), not here.

pub mod gemini;

use std::future::Future;

use serde::{Deserialize, Serialize};

pub use gemini::{GeminiClient, GeminiConfig, InsightError};

/// Explanation shown when the service response lacks one.
pub const MISSING_EXPLANATION: &str = "Sem explicação disponível.";

/// Verse shown when the service response lacks one.
pub const MISSING_VERSE: &str = "Referência não encontrada.";

/// Generated hint for a concept/context pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub explanation: String,
    pub verse: String,
}

impl Insight {
    pub fn new(explanation: impl Into<String>, verse: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            verse: verse.into(),
        }
    }

    /// Value used whenever the service cannot be reached or answers garbage.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(
            "Não foi possível carregar o insight teológico agora.",
            "Tente novamente mais tarde.",
        )
    }

    /// Build from possibly missing fields, substituting per-field defaults.
    #[must_use]
    pub fn from_parts(explanation: Option<String>, verse: Option<String>) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        Self {
            explanation: non_empty(explanation).unwrap_or_else(|| MISSING_EXPLANATION.to_string()),
            verse: non_empty(verse).unwrap_or_else(|| MISSING_VERSE.to_string()),
        }
    }
}

/// Source of insights.
///
/// Implementations must not fail: anything that goes wrong is reported as
/// [`Insight::fallback`].
pub trait InsightService {
    fn request_insight(&self, concept: &str, context: &str) -> impl Future<Output = Insight> + Send;
}

/// Service that always answers with the same insight. Useful offline and in tests.
#[derive(Clone, Debug)]
pub struct FixedInsight(pub Insight);

impl InsightService for FixedInsight {
    async fn request_insight(&self, _concept: &str, _context: &str) -> Insight {
        self.0.clone()
    }
}
