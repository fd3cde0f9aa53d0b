//! Submission controller for the credential forms
//!
//! One attempt moves through `Idle -> Submitting -> Succeeded | Failed -> Idle`.
//! [`SubmissionController::begin`] gates the attempt on field constraints and,
//! for sign-up, the validation rule set. The credential call itself runs in
//! [`perform`], which the caller may spawn; its report is fed back through
//! [`SubmissionController::finish`], which always releases the busy flag.

use super::account::{Registration, Session, SignInCredentials};
use super::app_state::View;
use super::forms::{validate, FieldStore, FormKind, ValidationResult};
use crate::auth::CredentialService;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle phase of the current attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Terminal outcome of a credential call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Faults raised while performing the call. Never shown to the user.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("credential call failed: {0}")]
    Call(#[from] anyhow::Error),
    #[error("credential call aborted: {0}")]
    Aborted(String),
}

/// Payload for the credential service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionRequest {
    SignIn(SignInCredentials),
    SignUp(Registration),
}

impl SubmissionRequest {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::SignIn(_) => FormKind::SignIn,
            Self::SignUp(_) => FormKind::SignUp,
        }
    }
}

/// What the controller did with a submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A call is already pending; the action was ignored
    Busy,
    /// Client-side checks failed; the reason is in the error slot
    Rejected(String),
    /// The caller must run the request through [`perform`]
    Started {
        attempt: Uuid,
        request: SubmissionRequest,
    },
}

/// Result of [`perform`], handed back to [`SubmissionController::finish`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Id handed out by [`SubmissionController::begin`]
    pub attempt: Uuid,
    pub kind: FormKind,
    pub outcome: SubmissionOutcome,
    /// Issued on successful sign-in only
    pub session: Option<Session>,
}

/// Fixed user-facing message for a failed call
pub fn failure_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignIn => "Invalid email or password",
        FormKind::SignUp => "Registration failed. Please try again.",
    }
}

/// Where a successful attempt navigates
pub fn success_destination(kind: FormKind) -> View {
    match kind {
        FormKind::SignIn => View::Dashboard,
        FormKind::SignUp => View::Login,
    }
}

/// Busy flag and phase tracking for one form instance
#[derive(Debug, Clone)]
pub struct SubmissionController {
    kind: FormKind,
    phase: SubmitPhase,
    /// Attempt whose report is awaited
    pending: Option<Uuid>,
    trace: Vec<SubmitPhase>,
}

impl SubmissionController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            phase: SubmitPhase::Idle,
            pending: None,
            trace: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Phases visited by the latest attempt that reached the service
    #[cfg(test)]
    pub fn trace(&self) -> &[SubmitPhase] {
        &self.trace
    }

    fn enter(&mut self, phase: SubmitPhase) {
        tracing::debug!(form = self.kind.label(), from = ?self.phase, to = ?phase, "submission phase");
        self.phase = phase;
        self.trace.push(phase);
    }

    /// Handle a submit action against the current field values
    pub fn begin(&mut self, store: &mut FieldStore) -> SubmitAttempt {
        if self.is_busy() {
            tracing::debug!(form = self.kind.label(), "submit ignored while busy");
            return SubmitAttempt::Busy;
        }

        if let Err(e) = store.check_constraints() {
            let reason = e.to_string();
            store.set_error(reason.clone());
            return SubmitAttempt::Rejected(reason);
        }

        if self.kind == FormKind::SignUp {
            if let ValidationResult::Invalid(reason) = validate(store) {
                tracing::debug!(form = self.kind.label(), %reason, "validation failed");
                store.set_error(reason.clone());
                return SubmitAttempt::Rejected(reason);
            }
        }

        self.trace.clear();
        self.trace.push(self.phase);
        self.enter(SubmitPhase::Submitting);
        let attempt = Uuid::new_v4();
        self.pending = Some(attempt);

        let request = match self.kind {
            FormKind::SignIn => SubmissionRequest::SignIn(SignInCredentials::from_store(store)),
            FormKind::SignUp => SubmissionRequest::SignUp(Registration::from_store(store)),
        };
        SubmitAttempt::Started { attempt, request }
    }

    /// Apply a finished call and return to idle.
    ///
    /// Returns the view to navigate to on success. Reports for any attempt
    /// other than the pending one are dropped.
    pub fn finish(&mut self, store: &mut FieldStore, report: &SubmissionReport) -> Option<View> {
        if self.pending != Some(report.attempt) {
            tracing::warn!(
                form = self.kind.label(),
                attempt = %report.attempt,
                "dropping stale submission report"
            );
            return None;
        }
        self.pending = None;

        let destination = match &report.outcome {
            SubmissionOutcome::Success => {
                self.enter(SubmitPhase::Succeeded);
                Some(success_destination(self.kind))
            }
            SubmissionOutcome::Failure(message) => {
                self.enter(SubmitPhase::Failed);
                store.set_error(message.clone());
                None
            }
        };
        self.enter(SubmitPhase::Idle);
        destination
    }
}

async fn call(
    service: Arc<dyn CredentialService>,
    request: SubmissionRequest,
) -> Result<Option<Session>, SubmissionError> {
    match request {
        SubmissionRequest::SignIn(credentials) => Ok(Some(service.sign_in(&credentials).await?)),
        SubmissionRequest::SignUp(registration) => {
            service.sign_up(&registration).await?;
            Ok(None)
        }
    }
}

/// Run the credential call to completion.
///
/// The call runs in its own task so a panic inside the service is observed
/// here and reported as a failure like any other fault.
pub async fn perform(
    service: Arc<dyn CredentialService>,
    attempt: Uuid,
    request: SubmissionRequest,
) -> SubmissionReport {
    let kind = request.kind();
    let result = match tokio::spawn(call(service, request)).await {
        Ok(result) => result,
        Err(join_error) => Err(SubmissionError::Aborted(join_error.to_string())),
    };

    match result {
        Ok(session) => SubmissionReport {
            attempt,
            kind,
            outcome: SubmissionOutcome::Success,
            session,
        },
        Err(e) => {
            tracing::warn!(form = kind.label(), error = %e, "submission failed");
            SubmissionReport {
                attempt,
                kind,
                outcome: SubmissionOutcome::Failure(failure_message(kind).to_string()),
                session: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MockCredentialService, SimulatedCredentialService};
    use crate::state::forms::{
        LoginForm, RegisterForm, AGREE_TO_TERMS, CONFIRM_PASSWORD, EMAIL, FIRST_NAME, LAST_NAME,
        PASSWORD, PHONE,
    };
    use crate::state::UserProfile;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn login(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.store.set_field(EMAIL, email);
        form.store.set_field(PASSWORD, password);
        form
    }

    fn register(password: &str, confirm: &str, agree: bool) -> RegisterForm {
        let mut form = RegisterForm::new();
        form.store.set_field(FIRST_NAME, "Ada");
        form.store.set_field(LAST_NAME, "Lovelace");
        form.store.set_field(EMAIL, "ada@fleet.io");
        form.store.set_field(PHONE, "555-0100");
        form.store.set_field(PASSWORD, password);
        form.store.set_field(CONFIRM_PASSWORD, confirm);
        form.store.set_field(AGREE_TO_TERMS, agree);
        form
    }

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: UserProfile {
                name: "Ops".to_string(),
                email: "ops@fleet.io".to_string(),
            },
        }
    }

    fn started(attempt: SubmitAttempt) -> (Uuid, SubmissionRequest) {
        match attempt {
            SubmitAttempt::Started { attempt, request } => (attempt, request),
            other => panic!("expected Started, got {other:?}"),
        }
    }

    fn report(attempt: Uuid, outcome: SubmissionOutcome) -> SubmissionReport {
        SubmissionReport {
            attempt,
            kind: FormKind::SignIn,
            outcome,
            session: None,
        }
    }

    mod gating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatch_never_sets_busy() {
            let mut form = register("abc123", "xyz999", true);
            let mut controller = SubmissionController::new(FormKind::SignUp);

            let attempt = controller.begin(&mut form.store);

            assert_eq!(
                attempt,
                SubmitAttempt::Rejected("Passwords do not match".to_string())
            );
            assert_eq!(form.store.error(), Some("Passwords do not match"));
            assert!(!controller.is_busy());
            assert!(controller.trace().is_empty());
        }

        #[test]
        fn test_short_password_rejected() {
            let mut form = register("abc", "abc", true);
            let mut controller = SubmissionController::new(FormKind::SignUp);
            assert_eq!(
                controller.begin(&mut form.store),
                SubmitAttempt::Rejected("Password must be at least 8 characters long".to_string())
            );
        }

        #[test]
        fn test_missing_consent_rejected() {
            let mut form = register("longenough1", "longenough1", false);
            let mut controller = SubmissionController::new(FormKind::SignUp);
            assert_eq!(
                controller.begin(&mut form.store),
                SubmitAttempt::Rejected("Please agree to the terms and conditions".to_string())
            );
            assert_eq!(controller.phase(), SubmitPhase::Idle);
        }

        #[test]
        fn test_sign_in_skips_rule_set() {
            let mut form = login("ops@fleet.io", "short");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let (_, request) = started(controller.begin(&mut form.store));
            assert_eq!(request.kind(), FormKind::SignIn);
            assert!(controller.is_busy());
        }

        #[test]
        fn test_sign_in_requires_fields() {
            let mut form = login("", "");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            assert_eq!(
                controller.begin(&mut form.store),
                SubmitAttempt::Rejected("Please fill out the Email Address field".to_string())
            );
            assert!(!controller.is_busy());
        }

        #[test]
        fn test_second_submit_while_pending_is_noop() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            started(controller.begin(&mut form.store));
            assert_eq!(controller.begin(&mut form.store), SubmitAttempt::Busy);
            assert_eq!(controller.trace(), &[SubmitPhase::Idle, SubmitPhase::Submitting]);
        }

        #[test]
        fn test_sign_up_request_carries_registration() {
            let mut form = register("longenough1", "longenough1", true);
            let mut controller = SubmissionController::new(FormKind::SignUp);
            match started(controller.begin(&mut form.store)).1 {
                SubmissionRequest::SignUp(registration) => {
                    assert_eq!(registration.email, "ada@fleet.io");
                    assert_eq!(registration.phone, "555-0100");
                }
                other => panic!("unexpected request {other:?}"),
            }
        }
    }

    mod finishing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_failure_sets_error_and_releases_busy() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let (attempt, _) = started(controller.begin(&mut form.store));

            let report = report(
                attempt,
                SubmissionOutcome::Failure(failure_message(FormKind::SignIn).to_string()),
            );
            assert_eq!(controller.finish(&mut form.store, &report), None);

            assert_eq!(form.store.error(), Some("Invalid email or password"));
            assert_eq!(controller.phase(), SubmitPhase::Idle);
            assert_eq!(
                controller.trace(),
                &[
                    SubmitPhase::Idle,
                    SubmitPhase::Submitting,
                    SubmitPhase::Failed,
                    SubmitPhase::Idle
                ]
            );
        }

        #[test]
        fn test_stale_report_dropped() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let report = report(Uuid::new_v4(), SubmissionOutcome::Success);
            assert_eq!(controller.finish(&mut form.store, &report), None);
            assert!(controller.trace().is_empty());
        }

        #[test]
        fn test_report_for_other_attempt_keeps_pending() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let (attempt, _) = started(controller.begin(&mut form.store));

            let other = report(
                Uuid::new_v4(),
                SubmissionOutcome::Failure(failure_message(FormKind::SignIn).to_string()),
            );
            assert_eq!(controller.finish(&mut form.store, &other), None);
            assert!(controller.is_busy());
            assert!(form.store.error().is_none());

            let own = report(attempt, SubmissionOutcome::Success);
            assert_eq!(
                controller.finish(&mut form.store, &own),
                Some(View::Dashboard)
            );
            assert!(!controller.is_busy());
        }

        #[test]
        fn test_report_applied_once() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let (attempt, _) = started(controller.begin(&mut form.store));
            let report = report(attempt, SubmissionOutcome::Success);

            assert_eq!(
                controller.finish(&mut form.store, &report),
                Some(View::Dashboard)
            );
            assert_eq!(controller.finish(&mut form.store, &report), None);
        }

        #[test]
        fn test_retry_after_failure_allowed() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let (attempt, _) = started(controller.begin(&mut form.store));
            let report = report(attempt, SubmissionOutcome::Failure("x".to_string()));
            controller.finish(&mut form.store, &report);
            started(controller.begin(&mut form.store));
            assert!(controller.is_busy());
        }
    }

    mod full_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_sign_in_success_navigates_to_dashboard() {
            let mut form = login("ops@fleet.io", "pw");
            let mut controller = SubmissionController::new(FormKind::SignIn);
            let service: Arc<dyn CredentialService> =
                Arc::new(SimulatedCredentialService::instant());

            let (attempt, request) = started(controller.begin(&mut form.store));
            let report = perform(service, attempt, request).await;
            let destination = controller.finish(&mut form.store, &report);

            assert_eq!(destination, Some(View::Dashboard));
            assert!(report.session.is_some());
            assert_eq!(
                controller.trace(),
                &[
                    SubmitPhase::Idle,
                    SubmitPhase::Submitting,
                    SubmitPhase::Succeeded,
                    SubmitPhase::Idle
                ]
            );
        }

        #[tokio::test]
        async fn test_sign_up_success_navigates_to_login() {
            let mut form = register("longenough1", "longenough1", true);
            let mut controller = SubmissionController::new(FormKind::SignUp);
            let mut mock = MockCredentialService::new();
            mock.expect_sign_up()
                .withf(|r| r.email == "ada@fleet.io")
                .times(1)
                .returning(|_| Ok(()));
            mock.expect_sign_in().never();

            let (attempt, request) = started(controller.begin(&mut form.store));
            let report = perform(Arc::new(mock), attempt, request).await;

            assert_eq!(report.attempt, attempt);
            assert_eq!(report.outcome, SubmissionOutcome::Success);
            assert_eq!(report.session, None);
            assert_eq!(
                controller.finish(&mut form.store, &report),
                Some(View::Login)
            );
            assert!(form.store.error().is_none());
        }

        #[tokio::test]
        async fn test_sign_in_fault_maps_to_fixed_message() {
            let mut mock = MockCredentialService::new();
            mock.expect_sign_in()
                .times(1)
                .returning(|_| Err(anyhow!("connection refused: 10.0.0.7")));

            let request = SubmissionRequest::SignIn(SignInCredentials {
                email: "ops@fleet.io".to_string(),
                password: "pw".to_string(),
            });
            let report = perform(Arc::new(mock), Uuid::new_v4(), request).await;

            assert_eq!(
                report.outcome,
                SubmissionOutcome::Failure("Invalid email or password".to_string())
            );
        }

        #[tokio::test]
        async fn test_sign_up_fault_maps_to_fixed_message() {
            let service: Arc<dyn CredentialService> =
                Arc::new(SimulatedCredentialService::instant().failing());
            let mut form = register("longenough1", "longenough1", true);
            let mut controller = SubmissionController::new(FormKind::SignUp);

            let (attempt, request) = started(controller.begin(&mut form.store));
            let report = perform(service, attempt, request).await;
            assert_eq!(controller.finish(&mut form.store, &report), None);
            assert_eq!(
                form.store.error(),
                Some("Registration failed. Please try again.")
            );
            assert!(!controller.is_busy());
        }

        #[tokio::test]
        async fn test_panicking_service_reports_failure() {
            let mut mock = MockCredentialService::new();
            mock.expect_sign_in()
                .returning(|_| panic!("service blew up"));

            let request = SubmissionRequest::SignIn(SignInCredentials {
                email: "ops@fleet.io".to_string(),
                password: "pw".to_string(),
            });
            let report = perform(Arc::new(mock), Uuid::new_v4(), request).await;

            assert_eq!(
                report.outcome,
                SubmissionOutcome::Failure("Invalid email or password".to_string())
            );
        }

        #[tokio::test]
        async fn test_session_returned_from_service() {
            let mut mock = MockCredentialService::new();
            mock.expect_sign_in().returning(|_| Ok(session()));
            let request = SubmissionRequest::SignIn(SignInCredentials {
                email: "ops@fleet.io".to_string(),
                password: "pw".to_string(),
            });
            let report = perform(Arc::new(mock), Uuid::new_v4(), request).await;
            assert_eq!(report.session, Some(session()));
        }
    }
}
