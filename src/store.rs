use crate::error::{CommandError, Result};
use indexmap::IndexMap;

/// Outcome of [`ContactStore::insert`].
///
/// A duplicate name is an ordinary outcome, not a failure: the caller decides
/// how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The contact was stored.
    Added,
    /// A contact with this name already exists; nothing was changed.
    AlreadyExists,
}

/// In-memory phone directory keyed by contact name.
///
/// Names are unique and case-sensitive. Every stored name maps to exactly one
/// phone; deleting a contact removes the key entirely. Iteration follows
/// insertion order. The store lives only as long as its owner, nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: IndexMap<String, String>,
}

impl ContactStore {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when no contacts are stored.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Store `phone` under `name` unless the name is already taken.
    pub fn insert(&mut self, name: &str, phone: &str) -> Insertion {
        if self.contacts.contains_key(name) {
            return Insertion::AlreadyExists;
        }
        tracing::debug!(name, phone, "contact inserted");
        self.contacts.insert(name.to_string(), phone.to_string());
        Insertion::Added
    }

    /// Replace the phone of an existing contact and return the previous one.
    pub fn update(&mut self, name: &str, phone: &str) -> Result<String> {
        let slot = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
        let previous = std::mem::replace(slot, phone.to_string());
        tracing::debug!(name, from = %previous, to = phone, "contact updated");
        Ok(previous)
    }

    /// Phone stored for `name`.
    pub fn lookup(&self, name: &str) -> Result<&str> {
        self.contacts
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))
    }

    /// Delete `name` and return the phone it had.
    pub fn remove(&mut self, name: &str) -> Result<String> {
        let phone = self
            .contacts
            .shift_remove(name)
            .ok_or_else(|| CommandError::NotFound(name.to_string()))?;
        tracing::debug!(name, phone = %phone, "contact removed");
        Ok(phone)
    }

    /// All contacts ordered by name, ignoring case.
    ///
    /// Names that differ only in case keep the order they were added in.
    pub fn list_all(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .contacts
            .iter()
            .map(|(name, phone)| (name.as_str(), phone.as_str()))
            .collect();
        entries.sort_by_cached_key(|(name, _)| name.to_lowercase());
        entries
    }

    /// Contacts whose name contains `query` ignoring case, or whose phone contains it.
    ///
    /// Matches come back in the order the contacts were added.
    pub fn search(&self, query: &str) -> Vec<(&str, &str)> {
        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|(name, phone)| name.to_lowercase().contains(&needle) || phone.contains(&needle))
            .map(|(name, phone)| (name.as_str(), phone.as_str()))
            .collect()
    }
}
