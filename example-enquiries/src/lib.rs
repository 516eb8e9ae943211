//! Canned enquiry definitions used by integration tests and docs.

pub mod customer_feedback;
pub mod pet_survey;

pub use customer_feedback::customer_feedback;
pub use pet_survey::pet_survey;
