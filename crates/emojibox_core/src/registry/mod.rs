//! In-memory emoji registry.
//!
//! Entries are keyed on the glyph alone; the author is carried data. All
//! access goes through one mutex so a presence check and its insert are a
//! single step.

use crate::emoji::{scalars_are_emoji, seed_glyphs, single_grapheme};
use crate::{RegistryError, DEFAULT_SEED};
use rand::seq::IteratorRandom;
use std::collections::{hash_map, HashMap};
use std::sync::{Mutex, MutexGuard};

/// Author recorded for entries seeded at startup.
pub const SYSTEM_AUTHOR: &str = "System";

/// One accepted emoji and who submitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub glyph: String,
    pub author: String,
}

/// Shared, deduplicated set of emoji entries.
pub struct EmojiRegistry {
    entries: Mutex<HashMap<String, String>>,
}

impl Default for EmojiRegistry {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

/// Check a candidate in submission order and return its glyph.
fn validate_candidate(candidate: &str) -> Result<&str, RegistryError> {
    if candidate.is_empty() {
        return Err(RegistryError::EmptySubmission);
    }
    let glyph = single_grapheme(candidate).ok_or(RegistryError::MultipleCharacters)?;
    if !scalars_are_emoji(glyph) {
        return Err(RegistryError::NotAnEmoji);
    }
    Ok(glyph)
}

impl EmojiRegistry {
    /// Registry with no entries.
    ///
    /// Only useful for exercising the empty-pick path; servers should start
    /// from a seed.
    pub fn empty() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Build a registry from every qualifying glyph in `seed`.
    ///
    /// Seeded entries are attributed to [`SYSTEM_AUTHOR`].
    pub fn with_seed(seed: &str) -> Self {
        let entries: HashMap<String, String> = seed_glyphs(seed)
            .into_iter()
            .map(|glyph| (glyph.to_string(), SYSTEM_AUTHOR.to_string()))
            .collect();
        tracing::debug!("Seeded emoji registry with {} entries", entries.len());
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Build a registry from `seed`, falling back to [`DEFAULT_SEED`] when the
    /// seed has no qualifying glyphs.
    pub fn seeded_or_default(seed: &str) -> Self {
        let registry = Self::with_seed(seed);
        if registry.is_empty() {
            tracing::warn!(
                "Seed '{}' contains no emoji; using default seed '{}'",
                seed,
                DEFAULT_SEED
            );
            return Self::default();
        }
        registry
    }

    fn state(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, RegistryError> {
        self.entries.lock().map_err(|_| RegistryError::Unavailable)
    }

    /// Validate `candidate` and store it on behalf of `source`.
    ///
    /// # Arguments
    /// - `candidate`: Raw submitted text.
    /// - `source`: Attribution recorded for the new entry, stored verbatim.
    ///
    /// # Returns
    /// `Ok(())` when a new entry was inserted.
    ///
    /// # Errors
    /// Returns the first failing check in order: [`RegistryError::EmptySubmission`],
    /// [`RegistryError::MultipleCharacters`], [`RegistryError::NotAnEmoji`],
    /// [`RegistryError::AlreadyExists`] (carrying the original author). The
    /// registry is left untouched on every error.
    pub fn submit(&self, candidate: &str, source: &str) -> Result<(), RegistryError> {
        let glyph = validate_candidate(candidate)?;
        let mut entries = self.state()?;
        match entries.entry(glyph.to_string()) {
            hash_map::Entry::Occupied(existing) => Err(RegistryError::AlreadyExists {
                author: existing.get().clone(),
            }),
            hash_map::Entry::Vacant(slot) => {
                slot.insert(source.to_string());
                Ok(())
            }
        }
    }

    /// Pick one entry uniformly at random.
    ///
    /// # Errors
    /// Returns [`RegistryError::EmptyRegistry`] when nothing is stored.
    pub fn pick(&self) -> Result<Entry, RegistryError> {
        let entries = self.state()?;
        entries
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|(glyph, author)| Entry {
                glyph: glyph.clone(),
                author: author.clone(),
            })
            .ok_or(RegistryError::EmptyRegistry)
    }

    /// Number of stored entries.
    ///
    /// # Errors
    /// Returns [`RegistryError::Unavailable`] when the registry lock is poisoned.
    pub fn count(&self) -> Result<usize, RegistryError> {
        self.state().map(|entries| entries.len())
    }

    /// Number of stored entries, or zero when the registry is unavailable.
    ///
    /// Use [`EmojiRegistry::count`] where a poisoned lock must be reported.
    pub fn len(&self) -> usize {
        self.count().unwrap_or(0)
    }

    /// Whether no entries are stored (or the registry is unavailable).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Author of `glyph`, if it is registered.
    pub fn author_of(&self, glyph: &str) -> Option<String> {
        self.state().ok()?.get(glyph).cloned()
    }

    /// Snapshot of all entries ordered by glyph.
    pub fn entries(&self) -> Result<Vec<Entry>, RegistryError> {
        let entries = self.state()?;
        let mut snapshot: Vec<Entry> = entries
            .iter()
            .map(|(glyph, author)| Entry {
                glyph: glyph.clone(),
                author: author.clone(),
            })
            .collect();
        snapshot.sort_by(|a, b| a.glyph.cmp(&b.glyph));
        Ok(snapshot)
    }
}
