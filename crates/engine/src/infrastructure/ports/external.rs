//! External service port traits (remote spell provider).

use async_trait::async_trait;
use spellbook_domain::Spell;

use super::error::SourceError;

/// Read-only access to a spell provider.
///
/// Implementations make one request per call and never retry. Returned
/// spells carry no icon; the caller derives it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellSourcePort: Send + Sync {
    /// Class identifiers, in provider order.
    async fn list_classes(&self) -> Result<Vec<String>, SourceError>;

    /// Spell identifiers belonging to one class.
    async fn list_class_spells(&self, class_id: &str) -> Result<Vec<String>, SourceError>;

    /// Detail record for one spell.
    async fn get_spell(&self, spell_id: &str) -> Result<Spell, SourceError>;
}
