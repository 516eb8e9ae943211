use crate::{EnquiryDefinition, EnquiryId};

/// Trait for persistence collaborators that keep enquiry definitions.
///
/// A store moves whole trees: `save` persists a definition with all of its
/// nested choices and sub-questions, and `load` materializes a complete,
/// consistent snapshot before any path lookup happens. The core performs no
/// partial loads and no lazy traversal; serializing writes to durable
/// storage is the implementation's concern.
pub trait EnquiryStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Persist a definition as one snapshot.
    fn save(&mut self, definition: &EnquiryDefinition) -> Result<(), Self::Error>;

    /// Load the full definition stored under `id`.
    fn load(&self, id: EnquiryId) -> Result<EnquiryDefinition, Self::Error>;
}

/// Trait for notification collaborators that deliver messages to external
/// actors.
///
/// Implementations report success or failure per recipient. Callers in the
/// answer-processing flow may trigger a notification, but the correctness
/// of the definition and answer model never depends on the outcome.
pub trait Notifier {
    /// The error type for this notifier.
    type Error: Into<anyhow::Error>;

    /// Deliver `message` to the actor identified by `recipient`.
    fn notify(&mut self, recipient: &str, message: &str) -> Result<(), Self::Error>;
}
