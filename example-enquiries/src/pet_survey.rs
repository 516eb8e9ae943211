use enquiry::{ChoiceOption, EnquiryDefinition, Question};

/// The pet survey: one single-choice root question whose "Cat" option
/// branches into a follow-up free-text question.
///
/// Tree layout:
/// - `0` - "Do you have a dog or a cat?" (single choice)
///   - choice `0` - "Dog" (terminal)
///   - choice `1` - "Cat"
///     - `0.1.0` - "Cat's name?" (free text)
pub fn pet_survey() -> EnquiryDefinition {
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
    .expect("pet survey definition is well-formed")
}
