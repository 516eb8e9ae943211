use serde::{Deserialize, Serialize};

use crate::{ChoiceRef, DefinitionError, ParsePathError, QuestionRef};

/// Error type for path resolution.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The path text was malformed.
    #[error(transparent)]
    Path(#[from] ParsePathError),

    /// A segment's index has no corresponding sibling at that tree level.
    #[error("no node at index {index}, only {len} present at this level")]
    IndexOutOfRange { index: usize, len: usize },

    /// The path continues through a choice option that has no nested questions.
    #[error("choice option {index} has no nested questions")]
    NoNestedQuestions { index: usize },

    /// The path stops on a choice option. Paths address questions.
    #[error("path stops at a choice option, not a question")]
    EndsAtChoice,

    /// Resolution was attempted on a question that has no children.
    #[error("a free-text question has no sub-questions")]
    FreeTextHasNoChildren,
}

/// A single question in an enquiry.
///
/// A question starts out detached. Building an [`EnquiryDefinition`]
/// attaches it: the definition assigns its sibling index and its identity
/// coordinates, exactly once for the question's lifetime.
///
/// [`EnquiryDefinition`]: crate::EnquiryDefinition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to a respondent.
    text: String,

    /// The kind of question (determines how it is answered and whether it
    /// carries nested children).
    kind: QuestionKind,

    /// Position among siblings. Meaningless until attached.
    index: usize,

    /// Identity coordinates, set when the owning definition is built.
    binding: Option<QuestionRef>,
}

impl Question {
    /// Create a detached free-text question.
    pub fn free_text(text: impl Into<String>) -> Self {
        Self::new(text, QuestionKind::FreeText)
    }

    /// Create a detached question offering `options`, of which exactly one
    /// may be selected when answered.
    pub fn single_choice(text: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self::new(text, QuestionKind::SingleChoice { options })
    }

    /// Create a detached question offering `options`, of which any subset
    /// may be selected when answered.
    pub fn multiple_choice(text: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self::new(text, QuestionKind::MultipleChoice { options })
    }

    fn new(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
            index: 0,
            binding: None,
        }
    }

    /// Get the question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the position among siblings. Meaningless until attached.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the identity coordinates, if this question has been attached.
    pub fn question_ref(&self) -> Option<&QuestionRef> {
        self.binding.as_ref()
    }

    /// Check whether this question belongs to a definition.
    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Get the choice options of this question. Empty for free text.
    pub fn options(&self) -> &[ChoiceOption] {
        match &self.kind {
            QuestionKind::FreeText => &[],
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                options
            }
        }
    }

    /// Identity equality: true iff both questions are attached and occupy
    /// the same tree position within the same definition instance.
    pub fn same_question(&self, other: &Question) -> bool {
        match (&self.binding, &other.binding) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Resolve the remaining segments of a path against this question.
    ///
    /// The first segment selects one of this question's choice options; the
    /// next selects a question nested under that option, recursing on the
    /// rest. With no segments left, this question is the target.
    pub fn sub_question_by_path(&self, segments: &[usize]) -> Result<&Question, LookupError> {
        let Some((&option_index, rest)) = segments.split_first() else {
            return Ok(self);
        };
        let options = match &self.kind {
            QuestionKind::FreeText => return Err(LookupError::FreeTextHasNoChildren),
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                options
            }
        };
        let option = options.get(option_index).ok_or(LookupError::IndexOutOfRange {
            index: option_index,
            len: options.len(),
        })?;
        let Some((&sub_index, tail)) = rest.split_first() else {
            return Err(LookupError::EndsAtChoice);
        };
        if option.sub_questions().is_empty() {
            return Err(LookupError::NoNestedQuestions {
                index: option_index,
            });
        }
        let sub = option
            .sub_questions()
            .get(sub_index)
            .ok_or(LookupError::IndexOutOfRange {
                index: sub_index,
                len: option.sub_questions().len(),
            })?;
        sub.sub_question_by_path(tail)
    }

    /// Bind this question to a definition: assign its sibling index and
    /// identity, then attach its options and their nested questions.
    ///
    /// Binding happens exactly once. A question that already carries a
    /// binding (for example a clone taken out of a finished definition)
    /// refuses a second one.
    pub(crate) fn attach(
        &mut self,
        reference: QuestionRef,
        index: usize,
    ) -> Result<(), DefinitionError> {
        if let Some(existing) = &self.binding {
            return Err(DefinitionError::AlreadyAttached {
                enquiry: existing.enquiry(),
            });
        }
        self.index = index;
        match &mut self.kind {
            QuestionKind::FreeText => {}
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                for (i, option) in options.iter_mut().enumerate() {
                    option.attach(&reference, i)?;
                }
            }
        }
        self.binding = Some(reference);
        Ok(())
    }
}

/// The kind of question, determining how it accepts answers and whether it
/// branches into nested children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Answered with free text. No children.
    FreeText,

    /// Answered by selecting exactly one of the options.
    SingleChoice { options: Vec<ChoiceOption> },

    /// Answered by selecting any subset of the options.
    MultipleChoice { options: Vec<ChoiceOption> },
}

impl QuestionKind {
    /// Check if this kind carries choice options.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice { .. } | Self::MultipleChoice { .. })
    }

    /// Get the name of this kind for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FreeText => "free-text",
            Self::SingleChoice { .. } => "single-choice",
            Self::MultipleChoice { .. } => "multiple-choice",
        }
    }
}

/// A selectable option belonging to a choice question.
///
/// An option may carry its own sub-tree of follow-up questions, asked when
/// the option is selected. Identity is position plus owning question, never
/// text: renaming an option does not make it a different option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// The display text of this option.
    text: String,

    /// Position among siblings. Meaningless until attached.
    index: usize,

    /// Identity coordinates, set when the owning definition is built.
    binding: Option<ChoiceRef>,

    /// Follow-up questions asked when this option is selected.
    sub_questions: Vec<Question>,
}

impl ChoiceOption {
    /// Create a detached terminal option with no follow-up questions.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index: 0,
            binding: None,
            sub_questions: Vec::new(),
        }
    }

    /// Create a detached option that branches into follow-up questions.
    pub fn branching(text: impl Into<String>, sub_questions: Vec<Question>) -> Self {
        Self {
            text: text.into(),
            index: 0,
            binding: None,
            sub_questions,
        }
    }

    /// Get the display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the position among siblings. Meaningless until attached.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the follow-up questions of this option.
    pub fn sub_questions(&self) -> &[Question] {
        &self.sub_questions
    }

    /// Check if this option carries no follow-up questions.
    pub fn is_terminal(&self) -> bool {
        self.sub_questions.is_empty()
    }

    /// Get the identity coordinates, if the owning tree has been built.
    pub fn choice_ref(&self) -> Option<&ChoiceRef> {
        self.binding.as_ref()
    }

    /// Get the identity of the question owning this option, if attached.
    pub fn owner(&self) -> Option<&QuestionRef> {
        self.binding.as_ref().map(ChoiceRef::question)
    }

    /// Identity equality: true iff both options are attached and occupy the
    /// same position under the same question.
    pub fn same_choice(&self, other: &ChoiceOption) -> bool {
        match (&self.binding, &other.binding) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub(crate) fn attach(
        &mut self,
        question: &QuestionRef,
        index: usize,
    ) -> Result<(), DefinitionError> {
        if let Some(existing) = &self.binding {
            return Err(DefinitionError::AlreadyAttached {
                enquiry: existing.question().enquiry(),
            });
        }
        self.index = index;
        for (i, sub) in self.sub_questions.iter_mut().enumerate() {
            sub.attach(question.descend(index, i), i)?;
        }
        self.binding = Some(ChoiceRef::new(question.clone(), index));
        Ok(())
    }
}
