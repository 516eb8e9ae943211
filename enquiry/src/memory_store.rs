//! In-memory enquiry store.
//!
//! `MemoryStore` keeps definitions in a map, for tests and for callers that
//! do not need durable storage. Definitions go in and come out as whole
//! snapshots, like any other [`EnquiryStore`].

use std::collections::HashMap;

use crate::{EnquiryDefinition, EnquiryId, EnquiryStore};

/// Error type for [`MemoryStore`].
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("no enquiry stored under id {0}")]
    UnknownEnquiry(EnquiryId),
}

/// An [`EnquiryStore`] backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    definitions: HashMap<EnquiryId, EnquiryDefinition>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Check whether a definition is stored under `id`.
    pub fn contains(&self, id: EnquiryId) -> bool {
        self.definitions.contains_key(&id)
    }

    /// Get the number of stored definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl EnquiryStore for MemoryStore {
    type Error = MemoryStoreError;

    fn save(&mut self, definition: &EnquiryDefinition) -> Result<(), Self::Error> {
        self.definitions.insert(definition.id(), definition.clone());
        Ok(())
    }

    fn load(&self, id: EnquiryId) -> Result<EnquiryDefinition, Self::Error> {
        self.definitions
            .get(&id)
            .cloned()
            .ok_or(MemoryStoreError::UnknownEnquiry(id))
    }
}
