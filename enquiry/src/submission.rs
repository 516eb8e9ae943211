//! Answer submission flow.
//!
//! `SubmissionService` records answers as they come in from respondents and
//! acknowledges each one through a [`Notifier`]. Acknowledgement is a
//! courtesy: a failed delivery is logged and the submission stands.

use crate::{AnswerInstance, Notifier};

/// The acknowledgement sent to a respondent after a submission.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your response";

/// One recorded submission: who answered, and with what.
#[derive(Debug, Clone)]
pub struct Submission {
    respondent: String,
    answer: AnswerInstance,
}

impl Submission {
    /// The identifier of the respondent.
    pub fn respondent(&self) -> &str {
        &self.respondent
    }

    /// The submitted answer.
    pub fn answer(&self) -> &AnswerInstance {
        &self.answer
    }
}

/// Records submitted answers and acknowledges respondents.
#[derive(Debug, Clone, Default)]
pub struct SubmissionService<N> {
    notifier: N,
    submissions: Vec<Submission>,
}

impl<N: Notifier> SubmissionService<N> {
    /// Create a service that acknowledges through `notifier`.
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            submissions: Vec::new(),
        }
    }

    /// Record an answer from `respondent` and send the acknowledgement.
    ///
    /// The answer is already validated against its question; recording never
    /// fails. A refused acknowledgement is logged and otherwise ignored.
    pub fn submit(&mut self, respondent: impl Into<String>, answer: AnswerInstance) {
        let respondent = respondent.into();
        if let Err(err) = self.notifier.notify(&respondent, ACKNOWLEDGEMENT) {
            let err: anyhow::Error = err.into();
            tracing::warn!("cannot acknowledge submission from {respondent}: {err}");
        }
        self.submissions.push(Submission { respondent, answer });
    }

    /// Get the recorded submissions, in arrival order.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Get the notifier this service acknowledges through.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AnswerInstance, ChoiceOption, EnquiryDefinition, Question, RecordingNotifier,
        RefusingNotifier,
    };

    fn answered() -> AnswerInstance {
        let enquiry = EnquiryDefinition::new(
            "Lunch",
            vec![Question::single_choice(
                "Soup or salad?",
                vec![ChoiceOption::new("Soup"), ChoiceOption::new("Salad")],
            )],
        )
        .unwrap();
        let question = &enquiry.questions()[0];
        AnswerInstance::selection(question, vec![question.options()[0].clone()]).unwrap()
    }

    #[test]
    fn submission_is_recorded_and_acknowledged() {
        let mut service = SubmissionService::new(RecordingNotifier::new());
        service.submit("alice@example.com", answered());

        assert_eq!(service.submissions().len(), 1);
        assert_eq!(service.submissions()[0].respondent(), "alice@example.com");
        assert_eq!(
            service.notifier().sent(),
            &[(
                "alice@example.com".to_string(),
                ACKNOWLEDGEMENT.to_string()
            )]
        );
    }

    #[test]
    fn refused_acknowledgement_does_not_lose_the_submission() {
        let mut service = SubmissionService::new(RefusingNotifier);
        service.submit("bob@example.com", answered());

        assert_eq!(service.submissions().len(), 1);
        assert_eq!(service.submissions()[0].answer().as_text(), "Soup");
    }
}
