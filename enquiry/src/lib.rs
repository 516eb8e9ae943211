#![doc = include_str!("../README.md")]

// Re-export all types from enquiry-types
pub use enquiry_types::*;

// In-memory store for keeping definitions without a persistence engine
mod memory_store;
pub use memory_store::{MemoryStore, MemoryStoreError};

// Notifier doubles for exercising the notification seam
mod notify;
pub use notify::{DeliveryRefused, RecordingNotifier, RefusingNotifier};

// Answer submission flow: record answers, acknowledge respondents
mod submission;
pub use submission::{ACKNOWLEDGEMENT, Submission, SubmissionService};
