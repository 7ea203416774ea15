//! Password-gated word list editing.
//!
//! Editing happens in two steps: `EditorGate::unlock` checks the shared
//! secret and hands out a `WordBankEditor` holding comma-separated drafts of
//! both lists; `WordBankEditor::save` parses the drafts, persists them and
//! replaces the live bank. The secret is a plain string comparison, enough
//! to keep players from editing the lists by accident.

use tracing::info;

use super::bank::WordBank;
use super::store::KeyValueStore;
use crate::core::{Error, Result};

/// Secret shipped with the game.
pub const DEFAULT_EDITOR_SECRET: &str = "989833";

/// Separator used when joining a list into an editable draft.
const DRAFT_SEPARATOR: &str = ", ";

/// Split a comma-separated draft into trimmed, non-empty labels.
///
/// ```
/// use linhas::words::parse_word_list;
///
/// assert_eq!(parse_word_list(" Graça, ,Amor ,"), vec!["Graça", "Amor"]);
/// ```
#[must_use]
pub fn parse_word_list(draft: &str) -> Vec<String> {
    draft
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks the shared secret before allowing edits.
#[derive(Clone, Debug)]
pub struct EditorGate {
    secret: String,
}

impl Default for EditorGate {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_SECRET)
    }
}

impl EditorGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Open an editor on `bank` if `attempt` matches the secret.
    ///
    /// On `UnauthorizedEdit` nothing changes; the caller clears its input
    /// field and lets the user retry.
    pub fn unlock(&self, attempt: &str, bank: &WordBank) -> Result<WordBankEditor> {
        if attempt != self.secret {
            return Err(Error::UnauthorizedEdit);
        }
        Ok(WordBankEditor::new(bank))
    }
}

/// Open editing session with a draft per list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBankEditor {
    /// Comma-separated concepts as shown in the text box.
    pub concepts_draft: String,

    /// Comma-separated contexts as shown in the text box.
    pub contexts_draft: String,
}

impl WordBankEditor {
    fn new(bank: &WordBank) -> Self {
        Self {
            concepts_draft: bank.concepts().join(DRAFT_SEPARATOR),
            contexts_draft: bank.contexts().join(DRAFT_SEPARATOR),
        }
    }

    /// Parse both drafts, persist them and replace `bank`.
    ///
    /// The bank is only replaced once the store accepted both lists.
    pub fn save(self, bank: &mut WordBank, store: &mut impl KeyValueStore) -> Result<()> {
        let updated = WordBank::new(parse_word_list(&self.concepts_draft), parse_word_list(&self.contexts_draft));
        updated.save(store)?;
        info!(
            concepts = updated.concepts().len(),
            contexts = updated.contexts().len(),
            "word bank saved"
        );
        *bank = updated;
        Ok(())
    }

    /// Drop stored lists and go back to the built-in words.
    pub fn reset_to_defaults(self, bank: &mut WordBank, store: &mut impl KeyValueStore) -> Result<()> {
        WordBank::clear(store)?;
        info!("word bank reset to defaults");
        *bank = WordBank::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::MemoryStore;

    #[test]
    fn test_parse_word_list() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list(" , ,").is_empty());
        assert_eq!(parse_word_list("Fogo"), vec!["Fogo"]);
        assert_eq!(parse_word_list("Fogo,  Água , Vento"), vec!["Fogo", "Água", "Vento"]);
    }

    #[test]
    fn test_wrong_secret() {
        let gate = EditorGate::default();
        let bank = WordBank::default();

        assert!(matches!(gate.unlock("1234", &bank), Err(Error::UnauthorizedEdit)));
        assert!(matches!(gate.unlock("", &bank), Err(Error::UnauthorizedEdit)));
    }

    #[test]
    fn test_unlock_shows_drafts() {
        let gate = EditorGate::new("s3cret");
        let bank = WordBank::new(vec!["Graça".into(), "Paz".into()], vec!["Mar".into()]);

        let editor = gate.unlock("s3cret", &bank).unwrap();
        assert_eq!(editor.concepts_draft, "Graça, Paz");
        assert_eq!(editor.contexts_draft, "Mar");
    }

    #[test]
    fn test_save_replaces_bank() {
        let gate = EditorGate::default();
        let mut bank = WordBank::default();
        let mut store = MemoryStore::new();

        let mut editor = gate.unlock(DEFAULT_EDITOR_SECRET, &bank).unwrap();
        editor.concepts_draft = "Amor, Fé,".into();
        editor.contexts_draft = " Pão ".into();
        editor.save(&mut bank, &mut store).unwrap();

        assert_eq!(bank.concepts(), ["Amor", "Fé"]);
        assert_eq!(bank.contexts(), ["Pão"]);
        assert_eq!(WordBank::load(&store).unwrap(), bank);
    }

    #[test]
    fn test_reset_to_defaults() {
        let gate = EditorGate::default();
        let mut bank = WordBank::new(vec!["X".into()], vec!["Y".into()]);
        let mut store = MemoryStore::new();
        bank.save(&mut store).unwrap();

        let editor = gate.unlock(DEFAULT_EDITOR_SECRET, &bank).unwrap();
        editor.reset_to_defaults(&mut bank, &mut store).unwrap();

        assert_eq!(bank, WordBank::default());
        assert_eq!(WordBank::load(&store).unwrap(), WordBank::default());
    }
}
