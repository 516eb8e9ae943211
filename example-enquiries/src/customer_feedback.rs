use enquiry::{ChoiceOption, EnquiryDefinition, Question};

/// A customer feedback enquiry exercising every question kind and two
/// levels of nesting.
///
/// Tree layout:
/// - `0` - "How did you hear about us?" (single choice)
///   - choice `0` - "A friend"
///     - `0.0.0` - "Who may we thank?" (free text)
///   - choice `1` - "Advertising"
///     - `0.1.0` - "Where did you see it?" (single choice: "Online", "Print")
///   - choice `2` - "Other" (terminal)
/// - `1` - "Which products do you use?" (multiple choice: "Basic", "Pro",
///   "Enterprise")
/// - `2` - "Anything else you want to tell us?" (free text)
pub fn customer_feedback() -> EnquiryDefinition {
    EnquiryDefinition::new(
        "Customer Feedback",
        vec![
            Question::single_choice(
                "How did you hear about us?",
                vec![
                    ChoiceOption::branching(
                        "A friend",
                        vec![Question::free_text("Who may we thank?")],
                    ),
                    ChoiceOption::branching(
                        "Advertising",
                        vec![Question::single_choice(
                            "Where did you see it?",
                            vec![ChoiceOption::new("Online"), ChoiceOption::new("Print")],
                        )],
                    ),
                    ChoiceOption::new("Other"),
                ],
            ),
            Question::multiple_choice(
                "Which products do you use?",
                vec![
                    ChoiceOption::new("Basic"),
                    ChoiceOption::new("Pro"),
                    ChoiceOption::new("Enterprise"),
                ],
            ),
            Question::free_text("Anything else you want to tell us?"),
        ],
    )
    .expect("customer feedback definition is well-formed")
}
