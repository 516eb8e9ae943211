use serde::{Deserialize, Serialize};

use crate::{ChoiceOption, Question, QuestionKind, QuestionRef};

/// Error type for answer construction.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// The answered question is not part of any definition, so there is no
    /// identity to validate the answer against.
    #[error("question is not part of any enquiry")]
    QuestionDetached,

    /// The answer form does not fit the question kind.
    #[error("expected a {expected} question, got {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A supplied choice belongs to a different question (or to none).
    #[error("choice {text:?} does not belong to the answered question")]
    ForeignChoice { text: String },

    /// A single-choice question accepts at most one selection.
    #[error("a single-choice question allows at most one selection, got {count}")]
    TooManySelections { count: usize },
}

/// A recorded answer to one question of an enquiry.
///
/// An answer references the definition tree by identity coordinates; it
/// never owns or modifies it. Construction validates the answer against the
/// question it claims to answer: an `AnswerInstance` that exists is
/// consistent. There is no partially-valid state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerInstance {
    /// Free text, answering a free-text question.
    Text(TextAnswer),

    /// At most one selected option, answering a single-choice question.
    SingleSelection(SelectionAnswer),

    /// Any selected options, answering a multiple-choice question.
    MultiSelection(SelectionAnswer),
}

impl AnswerInstance {
    /// Record a free-text answer to `question`.
    ///
    /// The question must be attached to a definition and of free-text kind.
    pub fn text(question: &Question, value: impl Into<String>) -> Result<Self, AnswerError> {
        let reference = question
            .question_ref()
            .ok_or(AnswerError::QuestionDetached)?
            .clone();
        if question.kind().is_choice() {
            return Err(AnswerError::KindMismatch {
                expected: "free-text",
                actual: question.kind().name(),
            });
        }
        Ok(Self::Text(TextAnswer {
            question: reference,
            value: value.into(),
        }))
    }

    /// Record a selection answer to `question` from the given choices, kept
    /// in the given order.
    ///
    /// Every choice must belong to exactly the answered question; the first
    /// foreign choice aborts construction. An empty selection is valid and
    /// means no option was chosen. A single-choice question accepts at most
    /// one selection (the constructor picks the [`SingleSelection`] or
    /// [`MultiSelection`] form from the question kind); duplicates are
    /// permitted on multiple-choice questions.
    ///
    /// [`SingleSelection`]: AnswerInstance::SingleSelection
    /// [`MultiSelection`]: AnswerInstance::MultiSelection
    pub fn selection(
        question: &Question,
        choices: Vec<ChoiceOption>,
    ) -> Result<Self, AnswerError> {
        let reference = question
            .question_ref()
            .ok_or(AnswerError::QuestionDetached)?
            .clone();
        let single = match question.kind() {
            QuestionKind::FreeText => {
                return Err(AnswerError::KindMismatch {
                    expected: "single-choice or multiple-choice",
                    actual: question.kind().name(),
                });
            }
            QuestionKind::SingleChoice { .. } => true,
            QuestionKind::MultipleChoice { .. } => false,
        };
        for choice in &choices {
            let belongs = choice.owner().is_some_and(|owner| owner == &reference);
            if !belongs {
                return Err(AnswerError::ForeignChoice {
                    text: choice.text().to_string(),
                });
            }
        }
        if single && choices.len() > 1 {
            return Err(AnswerError::TooManySelections {
                count: choices.len(),
            });
        }
        let answer = SelectionAnswer {
            question: reference,
            selections: choices,
        };
        Ok(if single {
            Self::SingleSelection(answer)
        } else {
            Self::MultiSelection(answer)
        })
    }

    /// The identity of the answered question.
    pub fn question(&self) -> &QuestionRef {
        match self {
            Self::Text(answer) => answer.question(),
            Self::SingleSelection(answer) | Self::MultiSelection(answer) => answer.question(),
        }
    }

    /// Render this answer as display text.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(answer) => answer.value().to_string(),
            Self::SingleSelection(answer) | Self::MultiSelection(answer) => answer.as_text(),
        }
    }

    /// Get the selection payload, if this is a selection answer.
    pub fn as_selection(&self) -> Option<&SelectionAnswer> {
        match self {
            Self::Text(_) => None,
            Self::SingleSelection(answer) | Self::MultiSelection(answer) => Some(answer),
        }
    }

    /// Get the text payload, if this is a free-text answer.
    pub fn as_text_answer(&self) -> Option<&TextAnswer> {
        match self {
            Self::Text(answer) => Some(answer),
            _ => None,
        }
    }
}

/// A free-text answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnswer {
    question: QuestionRef,
    value: String,
}

impl TextAnswer {
    /// The identity of the answered question.
    pub fn question(&self) -> &QuestionRef {
        &self.question
    }

    /// The submitted text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A selection answer: the chosen options, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionAnswer {
    question: QuestionRef,
    selections: Vec<ChoiceOption>,
}

impl SelectionAnswer {
    /// The identity of the answered question.
    pub fn question(&self) -> &QuestionRef {
        &self.question
    }

    /// The selected options, in submission order.
    pub fn selections(&self) -> &[ChoiceOption] {
        &self.selections
    }

    /// Check whether `choice` is among the selections, by identity.
    pub fn is_selected(&self, choice: &ChoiceOption) -> bool {
        self.selections
            .iter()
            .any(|selected| selected.same_choice(choice))
    }

    /// Render the selected options' display text, comma-separated, in
    /// selection order. An empty selection renders as the empty string.
    pub fn as_text(&self) -> String {
        self.selections
            .iter()
            .map(ChoiceOption::text)
            .collect::<Vec<_>>()
            .join(",")
    }
}
