//! Word bank: the concept and context label pools.
//!
//! - `bank`: the pools, built-in defaults, load/save against a store
//! - `store`: `KeyValueStore` with in-memory and JSON-file backends
//! - `editor`: shared-secret gate and comma-separated list editing

pub mod bank;
pub mod store;
pub mod editor;

pub use bank::{WordBank, CONCEPTS_KEY, CONTEXTS_KEY, DEFAULT_CONCEPTS, DEFAULT_CONTEXTS};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use editor::{parse_word_list, EditorGate, WordBankEditor, DEFAULT_EDITOR_SECRET};
