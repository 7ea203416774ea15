//! The two label pools and their built-in defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::store::KeyValueStore;
use crate::core::{Axis, Result};

/// Storage key for the concept list.
pub const CONCEPTS_KEY: &str = "linhas_db_theology";

/// Storage key for the context list.
pub const CONTEXTS_KEY: &str = "linhas_db_context";

/// Built-in theology concepts (column labels).
pub const DEFAULT_CONCEPTS: [&str; 25] = [
    "Graça", "Justiça", "Ira", "Misericórdia", "Soberania", "Santidade", "Fidelidade", "Amor",
    "Sabedoria", "Paz", "Verdade", "Glória", "Eternidade", "Onisciência", "Humildade", "Poder",
    "Redenção", "Esperança", "Criação", "Liberdade", "Obediência", "Comunhão",
    "Reconciliação", "Imutabilidade", "Trindade",
];

/// Built-in contexts (row labels).
pub const DEFAULT_CONTEXTS: [&str; 25] = [
    "Cruz", "Deserto", "Dinheiro", "Rei", "Templo", "Casamento", "Espada",
    "Pão", "Sangue", "Água", "Fogo", "Túmulo", "Cidade", "Pecador", "Lei",
    "Espinho", "Porta", "Vento", "Pastor", "Semente",
    "Mar", "Vinha", "Cálice", "Rocha", "Serpente",
];

/// Concept and context label pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBank {
    concepts: Vec<String>,
    contexts: Vec<String>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            concepts: DEFAULT_CONCEPTS.iter().map(|s| (*s).to_string()).collect(),
            contexts: DEFAULT_CONTEXTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl WordBank {
    /// Create a bank from explicit lists.
    pub fn new(concepts: Vec<String>, contexts: Vec<String>) -> Self {
        Self { concepts, contexts }
    }

    /// Column labels.
    #[must_use]
    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }

    /// Row labels.
    #[must_use]
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// Labels for one axis.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Concepts => &self.concepts,
            Axis::Contexts => &self.contexts,
        }
    }

    /// Load both lists from a store, falling back per list to the defaults
    /// when a key is absent or holds something other than a string array.
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            concepts: load_list(store, CONCEPTS_KEY)?.unwrap_or(defaults.concepts),
            contexts: load_list(store, CONTEXTS_KEY)?.unwrap_or(defaults.contexts),
        })
    }

    /// Write both lists to a store as JSON arrays.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(CONCEPTS_KEY, &serde_json::to_string(&self.concepts)?)?;
        store.set(CONTEXTS_KEY, &serde_json::to_string(&self.contexts)?)?;
        Ok(())
    }

    /// Remove both stored lists, so the next load yields the defaults.
    pub fn clear(store: &mut impl KeyValueStore) -> Result<()> {
        store.remove(CONCEPTS_KEY)?;
        store.remove(CONTEXTS_KEY)?;
        Ok(())
    }
}

fn load_list(store: &impl KeyValueStore, key: &str) -> Result<Option<Vec<String>>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(list) => Ok(Some(list)),
        Err(err) => {
            warn!(key, %err, "stored word list is unreadable, using defaults");
            Ok(None)
        }
    }
}
