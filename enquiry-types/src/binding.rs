use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::QuestionPath;

/// The identity of one constructed enquiry definition instance.
///
/// Minted once when the definition is built. A cloned definition keeps its
/// id: a snapshot copy is the same definition, not a new one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnquiryId(Uuid);

impl EnquiryId {
    /// Mint a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EnquiryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EnquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The structural identity of a question: which definition instance it
/// belongs to, and where it sits in that definition's tree.
///
/// Two questions are "the same question" iff their `QuestionRef`s are equal.
/// This is the upward link of the tree, stored as coordinates rather than a
/// pointer, so ownership runs strictly downward and no cycles exist.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionRef {
    enquiry: EnquiryId,
    path: QuestionPath,
}

impl QuestionRef {
    /// Create a reference from an enquiry identity and a tree position.
    pub fn new(enquiry: EnquiryId, path: QuestionPath) -> Self {
        Self { enquiry, path }
    }

    /// The definition instance this question belongs to.
    pub fn enquiry(&self) -> EnquiryId {
        self.enquiry
    }

    /// The position of this question in the tree. Resolving this path on the
    /// owning definition reaches exactly this question.
    pub fn path(&self) -> &QuestionPath {
        &self.path
    }

    /// The reference of a question nested under this one, reached through
    /// the choice option at `option_index` at position `sub_index`.
    pub(crate) fn descend(&self, option_index: usize, sub_index: usize) -> Self {
        Self {
            enquiry: self.enquiry,
            path: self.path.child(option_index).child(sub_index),
        }
    }
}

impl fmt::Display for QuestionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.enquiry, self.path)
    }
}

/// The structural identity of a choice option: its owning question plus its
/// position among that question's options. Text plays no part in identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceRef {
    question: QuestionRef,
    index: usize,
}

impl ChoiceRef {
    /// Create a reference from an owning question and an option position.
    pub fn new(question: QuestionRef, index: usize) -> Self {
        Self { question, index }
    }

    /// The question this choice belongs to.
    pub fn question(&self) -> &QuestionRef {
        &self.question
    }

    /// The position of this choice among its siblings.
    pub fn index(&self) -> usize {
        self.index
    }
}
