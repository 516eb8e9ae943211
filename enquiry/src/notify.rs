//! Notifier doubles for exercising the notification seam without a real
//! messaging integration.

use std::convert::Infallible;

use crate::Notifier;

/// A [`Notifier`] that records every delivery and always succeeds.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Vec<(String, String)>,
}

impl RecordingNotifier {
    /// Create a new notifier with nothing sent.
    pub fn new() -> Self {
        Self { sent: Vec::new() }
    }

    /// Get the `(recipient, message)` pairs delivered so far, in order.
    pub fn sent(&self) -> &[(String, String)] {
        &self.sent
    }
}

impl Notifier for RecordingNotifier {
    type Error = Infallible;

    fn notify(&mut self, recipient: &str, message: &str) -> Result<(), Self::Error> {
        self.sent.push((recipient.to_string(), message.to_string()));
        Ok(())
    }
}

/// Error type for [`RefusingNotifier`].
#[derive(Debug, thiserror::Error)]
#[error("recipient {recipient} is unavailable")]
pub struct DeliveryRefused {
    recipient: String,
}

/// A [`Notifier`] that refuses every delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefusingNotifier;

impl Notifier for RefusingNotifier {
    type Error = DeliveryRefused;

    fn notify(&mut self, recipient: &str, _message: &str) -> Result<(), Self::Error> {
        Err(DeliveryRefused {
            recipient: recipient.to_string(),
        })
    }
}
