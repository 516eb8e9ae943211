//! Core types for the enquiry crate.
//!
//! This crate provides the foundational types for modelling enquiries:
//! - `EnquiryDefinition` - An immutable, ordered tree of questions
//! - `Question`, `QuestionKind` and `ChoiceOption` - The tree's nodes
//! - `QuestionPath` - Dotted index paths addressing any node in the tree
//! - `AnswerInstance` - Answers validated against the question they answer
//! - `EnquiryStore` and `Notifier` traits - Seams for external collaborators

mod path;
pub use path::{ParsePathError, QuestionPath};

mod binding;
pub use binding::{ChoiceRef, EnquiryId, QuestionRef};

mod question;
pub use question::{ChoiceOption, LookupError, Question, QuestionKind};

mod definition;
pub use definition::{DefinitionError, EnquiryDefinition};

mod answer;
pub use answer::{AnswerError, AnswerInstance, SelectionAnswer, TextAnswer};

mod traits;
pub use traits::{EnquiryStore, Notifier};
