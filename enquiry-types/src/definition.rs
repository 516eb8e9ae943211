use serde::{Deserialize, Serialize};

use crate::{EnquiryId, LookupError, Question, QuestionPath, QuestionRef};

/// Error type for building an enquiry definition.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// An enquiry must have at least one question.
    #[error("an enquiry requires at least one question")]
    NoQuestions,

    /// A question or choice option already belongs to another definition.
    #[error("node already belongs to enquiry {enquiry}")]
    AlreadyAttached { enquiry: EnquiryId },
}

/// The definition of an enquiry: a titled, immutable, ordered tree of
/// questions.
///
/// The definition owns the whole tree. It is built once, from root questions
/// supplied in order; construction attaches every node, assigning its
/// sibling index and its identity coordinates. After that nothing in the
/// tree changes: answers reference it, they never modify it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnquiryDefinition {
    id: EnquiryId,
    title: String,
    questions: Vec<Question>,
}

impl EnquiryDefinition {
    /// Build a definition from a title and its root questions, in order.
    ///
    /// Every supplied question must be detached; handing over a question
    /// that already belongs to a definition (including a clone of one)
    /// fails with [`DefinitionError::AlreadyAttached`], and nothing is
    /// constructed. An empty question list is rejected outright.
    pub fn new(
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, DefinitionError> {
        if questions.is_empty() {
            return Err(DefinitionError::NoQuestions);
        }
        let id = EnquiryId::new();
        let mut questions = questions;
        for (index, question) in questions.iter_mut().enumerate() {
            question.attach(QuestionRef::new(id, QuestionPath::root(index)), index)?;
        }
        Ok(Self {
            id,
            title: title.into(),
            questions,
        })
    }

    /// The identity of this definition instance.
    pub fn id(&self) -> EnquiryId {
        self.id
    }

    /// The title of this enquiry, as provided at construction.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The root-level questions, in definition order. Read-only: the tree
    /// cannot be restructured through this view.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The number of root-level questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false: a definition carries at least one question.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by a textual path such as `"0.1.0"`.
    ///
    /// The first index selects a root question; the rest are resolved by the
    /// nodes along the way (option index, then nested question index, and so
    /// on). Returns the question at the path or a typed failure, never a
    /// silently wrong node.
    pub fn question_by_path(&self, path: &str) -> Result<&Question, LookupError> {
        let path: QuestionPath = path.parse()?;
        self.question_at(&path)
    }

    /// Look up a question by an already-parsed path.
    pub fn question_at(&self, path: &QuestionPath) -> Result<&Question, LookupError> {
        let (first, rest) = path.split_first();
        let question = self
            .questions
            .get(first)
            .ok_or(LookupError::IndexOutOfRange {
                index: first,
                len: self.questions.len(),
            })?;
        question.sub_question_by_path(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoiceOption, ParsePathError};

    fn pet_survey() -> EnquiryDefinition {
        EnquiryDefinition::new(
            "Pet Survey",
            vec![Question::single_choice(
                "Do you have a dog or a cat?",
                vec![
                    ChoiceOption::new("Dog"),
                    ChoiceOption::branching("Cat", vec![Question::free_text("Cat's name?")]),
                ],
            )],
        )
        .unwrap()
    }

    #[test]
    fn construction_assigns_indices_in_order() {
        let enquiry = EnquiryDefinition::new(
            "Three questions",
            vec![
                Question::free_text("First?"),
                Question::free_text("Second?"),
                Question::free_text("Third?"),
            ],
        )
        .unwrap();

        for (i, question) in enquiry.questions().iter().enumerate() {
            assert_eq!(question.index(), i);
            let reference = question.question_ref().unwrap();
            assert_eq!(reference.enquiry(), enquiry.id());
            assert_eq!(reference.path(), &QuestionPath::root(i));
        }
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = EnquiryDefinition::new("Nothing to ask", Vec::new()).unwrap_err();
        assert!(matches!(err, DefinitionError::NoQuestions));
    }

    #[test]
    fn title_is_preserved() {
        assert_eq!(pet_survey().title(), "Pet Survey");
    }

    #[test]
    fn nested_question_is_reachable_by_path() {
        let enquiry = pet_survey();
        let nested = enquiry.question_by_path("0.1.0").unwrap();
        assert_eq!(nested.text(), "Cat's name?");

        // The same node is reachable by walking indices manually.
        let by_hand = &enquiry.questions()[0].options()[1].sub_questions()[0];
        assert!(nested.same_question(by_hand));
    }

    #[test]
    fn binding_path_round_trips_through_lookup() {
        let enquiry = pet_survey();
        let nested = enquiry.question_by_path("0.1.0").unwrap();
        let path = nested.question_ref().unwrap().path();
        assert!(enquiry.question_at(path).unwrap().same_question(nested));
    }

    #[test]
    fn resolving_past_a_free_text_question_fails() {
        let err = pet_survey().question_by_path("0.1.0.0").unwrap_err();
        assert!(matches!(err, LookupError::FreeTextHasNoChildren));
    }

    #[test]
    fn malformed_paths_fail_with_format_errors() {
        let enquiry = pet_survey();
        for path in ["", "1..2", "a.b", "+1", "0 .1"] {
            let err = enquiry.question_by_path(path).unwrap_err();
            assert!(matches!(err, LookupError::Path(_)), "path {path:?}");
        }
        assert!(matches!(
            enquiry.question_by_path("").unwrap_err(),
            LookupError::Path(ParsePathError::Empty)
        ));
    }

    #[test]
    fn first_segment_out_of_range() {
        let err = pet_survey().question_by_path("1").unwrap_err();
        assert!(matches!(
            err,
            LookupError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn attaching_a_question_twice_is_rejected() {
        let first = pet_survey();
        let reused = first.questions()[0].clone();

        let err = EnquiryDefinition::new("Second enquiry", vec![reused]).unwrap_err();
        match err {
            DefinitionError::AlreadyAttached { enquiry } => assert_eq!(enquiry, first.id()),
            other => panic!("expected AlreadyAttached, got {other:?}"),
        }
    }

    #[test]
    fn clone_preserves_identity() {
        let enquiry = pet_survey();
        let snapshot = enquiry.clone();
        assert_eq!(enquiry.id(), snapshot.id());
        assert!(
            enquiry.questions()[0].same_question(&snapshot.questions()[0]),
            "a snapshot copy answers for the same questions"
        );
    }

    #[test]
    fn serde_snapshot_round_trip() {
        let enquiry = pet_survey();
        let json = serde_json::to_string(&enquiry).unwrap();
        let loaded: EnquiryDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.id(), enquiry.id());
        assert_eq!(loaded.title(), enquiry.title());
        let nested = loaded.question_by_path("0.1.0").unwrap();
        assert!(nested.same_question(enquiry.question_by_path("0.1.0").unwrap()));
    }
}
