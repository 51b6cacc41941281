//! Contact Submission Flow
//!
//! State machine behind the contact form:
//!
//! ```text
//! Idle | Succeeded | Failed --submit--> Submitting
//! Submitting --ok-->    Succeeded  (fields cleared, auto-reset after 5 s)
//! Submitting --error--> Failed     (fields kept, no auto-reset)
//! ```
//!
//! A submit while `Submitting` is dropped, so at most one request is ever
//! in flight.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::api::{ApiError, PortfolioBackend};

/// How long the success banner stays up
pub const CONTACT_RESET_DELAY: Duration = Duration::from_millis(5000);

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I will get back to you soon.";

pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Contact form fields; also the JSON body of `POST /api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactSubmission {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Banner shown above the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubmissionStatus {
    pub submitted: bool,
    pub success: bool,
    pub message: String,
}

impl SubmissionStatus {
    fn succeeded() -> Self {
        Self {
            submitted: true,
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failed() -> Self {
        Self {
            submitted: true,
            success: false,
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Handle for the success auto-reset timer
///
/// Stamped with the submission generation so a timer left over from an
/// earlier submission cannot clear a newer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFlow {
    fields: ContactSubmission,
    phase: SubmissionPhase,
    status: SubmissionStatus,
    generation: u64,
    reset_after: Duration,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new(CONTACT_RESET_DELAY)
    }
}

impl ContactFlow {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            fields: ContactSubmission::default(),
            phase: SubmissionPhase::Idle,
            status: SubmissionStatus::default(),
            generation: 0,
            reset_after,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// While true the submit control is disabled
    pub fn is_in_flight(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Enter `Submitting` and hand back the payload to send
    ///
    /// Returns `None` when a submission is already in flight; the caller
    /// must not issue a request in that case.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_in_flight() {
            tracing::debug!("Contact submit ignored, request already in flight");
            return None;
        }
        self.generation += 1;
        self.phase = SubmissionPhase::Submitting;
        self.status = SubmissionStatus::default();
        tracing::debug!(generation = self.generation, "Contact submission started");
        Some(self.fields.clone())
    }

    /// Resolve the in-flight submission
    ///
    /// On success returns the ticket the host should redeem with
    /// [`ContactFlow::reset`] once `ticket.after` has elapsed.
    pub fn complete(&mut self, outcome: Result<(), ApiError>) -> Option<ResetTicket> {
        if !self.is_in_flight() {
            tracing::warn!("Contact outcome arrived with no submission in flight");
            return None;
        }
        match outcome {
            Ok(()) => {
                self.phase = SubmissionPhase::Succeeded;
                self.status = SubmissionStatus::succeeded();
                self.fields = ContactSubmission::default();
                tracing::info!("Contact message sent");
                Some(ResetTicket {
                    generation: self.generation,
                    after: self.reset_after,
                })
            }
            Err(e) => {
                self.phase = SubmissionPhase::Failed;
                self.status = SubmissionStatus::failed();
                tracing::warn!(error = %e, "Contact submission failed");
                None
            }
        }
    }

    /// Auto-reset after success; returns true if the status was cleared
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation || self.phase != SubmissionPhase::Succeeded {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        self.status = SubmissionStatus::default();
        true
    }

    /// Run one full submission against `backend`
    pub async fn submit<B>(&mut self, backend: &B) -> Option<ResetTicket>
    where
        B: PortfolioBackend + ?Sized,
    {
        let payload = self.begin_submit()?;
        let outcome = backend.submit_contact(&payload).await;
        self.complete(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::ContactMessage;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records every submission and answers with a fixed outcome
    struct MockBackend {
        outcome: Result<(), ApiError>,
        sent: RefCell<Vec<ContactSubmission>>,
    }

    impl MockBackend {
        fn accepting() -> Self {
            Self {
                outcome: Ok(()),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            Self {
                outcome: Err(ApiError::Status { status: 500 }),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PortfolioBackend for MockBackend {
        async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
            self.sent.borrow_mut().push(submission.clone());
            self.outcome.clone()
        }

        async fn fetch_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
            Ok(Vec::new())
        }
    }

    fn filled_flow() -> ContactFlow {
        let mut flow = ContactFlow::default();
        flow.set_field(ContactField::Name, "A");
        flow.set_field(ContactField::Email, "a@b.com");
        flow.set_field(ContactField::Subject, "S");
        flow.set_field(ContactField::Message, "M");
        flow
    }

    fn expected_fields() -> ContactSubmission {
        ContactSubmission {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let backend = MockBackend::accepting();
        let mut flow = filled_flow();

        let ticket = flow.submit(&backend).await;

        assert!(ticket.is_some());
        assert_eq!(flow.phase(), SubmissionPhase::Succeeded);
        assert!(flow.status().submitted);
        assert!(flow.status().success);
        assert_eq!(flow.status().message, SUCCESS_MESSAGE);
        assert_eq!(flow.fields(), &ContactSubmission::default());
        assert_eq!(backend.sent.borrow().as_slice(), &[expected_fields()]);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let backend = MockBackend::rejecting();
        let mut flow = filled_flow();

        let ticket = flow.submit(&backend).await;

        assert!(ticket.is_none());
        assert_eq!(flow.phase(), SubmissionPhase::Failed);
        assert!(flow.status().submitted);
        assert!(!flow.status().success);
        assert_eq!(flow.status().message, FAILURE_MESSAGE);
        assert_eq!(flow.fields(), &expected_fields());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_sends_nothing() {
        let backend = MockBackend::accepting();
        let mut flow = filled_flow();

        let first = flow.begin_submit();
        assert!(first.is_some());
        assert!(flow.is_in_flight());

        assert!(flow.submit(&backend).await.is_none());
        assert!(flow.begin_submit().is_none());
        assert!(backend.sent.borrow().is_empty());

        flow.complete(Ok(()));
        assert!(!flow.is_in_flight());
    }

    #[test]
    fn test_success_auto_resets() {
        let mut flow = filled_flow();
        flow.begin_submit();
        let ticket = flow.complete(Ok(())).unwrap();
        assert_eq!(ticket.after, CONTACT_RESET_DELAY);

        assert!(flow.reset(ticket));
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert_eq!(flow.status(), &SubmissionStatus::default());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut flow = filled_flow();
        flow.begin_submit();
        let stale = flow.complete(Ok(())).unwrap();

        // A second message goes out before the first banner timer fires
        flow.set_field(ContactField::Name, "B");
        flow.begin_submit();
        let fresh = flow.complete(Ok(())).unwrap();

        assert!(!flow.reset(stale));
        assert!(flow.status().success);
        assert!(flow.reset(fresh));
    }

    #[test]
    fn test_failure_persists_until_next_attempt() {
        let mut flow = filled_flow();
        flow.begin_submit();
        assert!(flow.complete(Err(ApiError::Timeout)).is_none());
        assert_eq!(flow.status().message, FAILURE_MESSAGE);

        let resubmitted = flow.begin_submit().unwrap();
        assert_eq!(resubmitted, expected_fields());
        assert!(!flow.status().submitted);
    }

    #[test]
    fn test_outcome_without_submission_ignored() {
        let mut flow = ContactFlow::default();
        assert!(flow.complete(Ok(())).is_none());
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_payload_json_shape() {
        let json = serde_json::to_value(expected_fields()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "A", "email": "a@b.com", "subject": "S", "message": "M"})
        );
    }
}
