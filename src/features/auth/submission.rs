//! Submission flow shared by the login and registration forms.
//!
//! A submission moves `Idle -> Submitting -> (Succeeded | Failed)`. Validation
//! runs before any request; a failed check ends the attempt without touching
//! the network. Otherwise exactly one JSON POST is sent and its envelope
//! decides between a delayed redirect and an error message. The loading
//! affordance is cleared on every path. Nothing is retried; a new attempt needs
//! a new submit from the user.

use crate::{
    app_lib::{config::DEFAULT_FALLBACK_REDIRECT, AppError, RawReply},
    features::auth::{
        status::{FormView, StatusMessage},
        types::{AuthResponse, Credentials, RegistrationRequest},
        validation::{
            ValidationError, ValidationErrors, is_institutional_email, is_valid_email,
            is_valid_name, is_valid_password, normalize_email, passwords_match,
        },
    },
};
use serde::Serialize;
use std::{cell::Cell, future::Future, time::Duration};
use tracing::{debug, info, warn};

/// Shown for transport failures and unreadable replies.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error de conexión con el servidor";

/// Sends a form body to an auth endpoint.
pub trait AuthTransport {
    /// Posts `body` as JSON to `path` with same-origin credentials.
    fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<RawReply, AppError>>;
}

impl<T: AuthTransport + ?Sized> AuthTransport for &T {
    fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<RawReply, AppError>> {
        (**self).post_json(path, body)
    }
}

/// Leaves the page once a submission is accepted.
pub trait Navigator {
    fn navigate_after(&self, target: &str, delay: Duration);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate_after(&self, target: &str, delay: Duration) {
        (**self).navigate_after(target, delay);
    }
}

/// A form the coordinator knows how to validate and submit.
pub trait AuthForm: Serialize + Sized {
    const ENDPOINT: &'static str;
    /// Time the success message stays visible before navigation.
    const REDIRECT_DELAY: Duration;
    /// Shown when the server rejects the form without a message.
    const FAILURE_FALLBACK: &'static str;

    /// Copy with user input trimmed and normalized for submission.
    fn normalized(&self) -> Self;

    fn validate(&self) -> Result<(), ValidationErrors>;

    fn success_message(&self, response: &AuthResponse) -> String;
}

impl AuthForm for Credentials {
    const ENDPOINT: &'static str = "/auth/login";
    const REDIRECT_DELAY: Duration = Duration::from_millis(1500);
    const FAILURE_FALLBACK: &'static str = "Error de autenticación";

    fn normalized(&self) -> Self {
        Self {
            email: normalize_email(&self.email),
            password: self.password.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.email.is_empty() {
            errors.check(false, ValidationError::MissingEmail);
        } else {
            errors.check(is_valid_email(&self.email), ValidationError::InvalidEmail);
        }
        errors.check(!self.password.is_empty(), ValidationError::MissingPassword);
        errors.into_result()
    }

    fn success_message(&self, _response: &AuthResponse) -> String {
        "✅ Acceso correcto. Redirigiendo...".to_string()
    }
}

impl AuthForm for RegistrationRequest {
    const ENDPOINT: &'static str = "/auth/register";
    const REDIRECT_DELAY: Duration = Duration::from_millis(2000);
    const FAILURE_FALLBACK: &'static str = "Error al crear la cuenta";

    fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(is_valid_name(&self.name), ValidationError::NameTooShort);
        errors.check(is_valid_email(&self.email), ValidationError::InvalidEmail);
        errors.check(
            is_institutional_email(&self.email),
            ValidationError::NonInstitutionalEmail,
        );
        errors.check(
            is_valid_password(&self.password),
            ValidationError::PasswordTooShort,
        );
        errors.check(
            passwords_match(&self.password, &self.confirm_password),
            ValidationError::PasswordMismatch,
        );
        errors.into_result()
    }

    fn success_message(&self, response: &AuthResponse) -> String {
        server_message(response.message.as_deref())
            .unwrap_or_else(|| "✅ Cuenta creada exitosamente. Redirigiendo...".to_string())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// How a submission attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Accepted; navigation to `target` is scheduled.
    Redirecting { target: String, message: String },
    /// Sent but refused, or the request itself failed.
    Rejected { message: String },
    /// Stopped by client-side validation; nothing was sent.
    Invalid(ValidationErrors),
}

impl SubmissionOutcome {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionOutcome::Redirecting { .. } => SubmissionPhase::Succeeded,
            SubmissionOutcome::Rejected { .. } | SubmissionOutcome::Invalid(_) => {
                SubmissionPhase::Failed
            }
        }
    }
}

/// Drives one form's submissions through injected transport, view, and navigator.
pub struct SubmissionCoordinator<T, V, N> {
    transport: T,
    view: V,
    navigator: N,
    fallback_redirect: String,
    phase: Cell<SubmissionPhase>,
}

impl<T, V, N> SubmissionCoordinator<T, V, N>
where
    T: AuthTransport,
    V: FormView,
    N: Navigator,
{
    pub fn new(transport: T, view: V, navigator: N) -> Self {
        Self {
            transport,
            view,
            navigator,
            fallback_redirect: DEFAULT_FALLBACK_REDIRECT.to_string(),
            phase: Cell::new(SubmissionPhase::Idle),
        }
    }

    /// Overrides where accepted submissions go when the server names no target.
    #[must_use]
    pub fn with_fallback_redirect(mut self, target: impl Into<String>) -> Self {
        self.fallback_redirect = target.into();
        self
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    /// Runs one submission attempt to completion.
    pub async fn submit<F: AuthForm>(&self, form: &F) -> SubmissionOutcome {
        self.view.hide_status();
        self.view.set_loading(true);
        self.phase.set(SubmissionPhase::Submitting);
        debug!(endpoint = F::ENDPOINT, "submission started");

        let outcome = {
            let _loading = LoadingGuard(&self.view);
            self.run(form).await
        };

        self.phase.set(outcome.phase());
        outcome
    }

    async fn run<F: AuthForm>(&self, form: &F) -> SubmissionOutcome {
        let form = form.normalized();
        if let Err(errors) = form.validate() {
            info!(
                endpoint = F::ENDPOINT,
                failures = errors.len(),
                "submission stopped by validation"
            );
            self.view.show_status(StatusMessage::error(errors.to_string()));
            return SubmissionOutcome::Invalid(errors);
        }

        let reply = match self.transport.post_json(F::ENDPOINT, &form).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(endpoint = F::ENDPOINT, error = %err, "auth request failed");
                return self.reject(CONNECTION_ERROR_MESSAGE.to_string());
            }
        };

        let response = match parse_response(&reply) {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    endpoint = F::ENDPOINT,
                    status = reply.status,
                    error = %err,
                    "auth response unreadable"
                );
                return self.reject(CONNECTION_ERROR_MESSAGE.to_string());
            }
        };

        if reply.ok() && response.success {
            let target = response
                .redirect
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(&self.fallback_redirect)
                .to_string();
            let message = form.success_message(&response);
            info!(endpoint = F::ENDPOINT, redirect = %target, "submission accepted");

            self.view.show_status(StatusMessage::success(message.clone()));
            self.navigator.navigate_after(&target, F::REDIRECT_DELAY);
            SubmissionOutcome::Redirecting { target, message }
        } else {
            info!(
                endpoint = F::ENDPOINT,
                status = reply.status,
                "submission refused by server"
            );
            let message = server_message(response.message.as_deref())
                .unwrap_or_else(|| F::FAILURE_FALLBACK.to_string());
            self.reject(message)
        }
    }

    fn reject(&self, message: String) -> SubmissionOutcome {
        self.view.show_status(StatusMessage::error(message.clone()));
        SubmissionOutcome::Rejected { message }
    }
}

/// Clears the loading affordance when dropped, whichever way `run` ends.
struct LoadingGuard<'a, V: FormView>(&'a V);

impl<V: FormView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

/// Decodes the reply envelope. A non-2xx reply without one is an HTTP error.
fn parse_response(reply: &RawReply) -> Result<AuthResponse, AppError> {
    serde_json::from_str(&reply.body).map_err(|err| {
        if reply.ok() {
            AppError::Parse(format!("Failed to decode response: {err}"))
        } else {
            AppError::Http {
                status: reply.status,
                message: reply.body.clone(),
            }
        }
    })
}

/// The server's message exactly as sent; only an empty one counts as absent.
fn server_message(message: Option<&str>) -> Option<String> {
    message
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::status::Severity;
    use serde_json::{Value, json};
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum ViewEvent {
        Shown(StatusMessage),
        Hidden,
        Loading(bool),
    }

    #[derive(Default)]
    struct RecordingView {
        events: RefCell<Vec<ViewEvent>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.borrow().clone()
        }

        fn last_message(&self) -> Option<StatusMessage> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::Shown(message) => Some(message.clone()),
                _ => None,
            })
        }

        fn loading(&self) -> Option<bool> {
            self.events.borrow().iter().rev().find_map(|event| match event {
                ViewEvent::Loading(loading) => Some(*loading),
                _ => None,
            })
        }
    }

    impl FormView for RecordingView {
        fn show_status(&self, message: StatusMessage) {
            self.events.borrow_mut().push(ViewEvent::Shown(message));
        }

        fn hide_status(&self) {
            self.events.borrow_mut().push(ViewEvent::Hidden);
        }

        fn set_loading(&self, loading: bool) {
            self.events.borrow_mut().push(ViewEvent::Loading(loading));
        }
    }

    struct FakeTransport {
        reply: Result<RawReply, AppError>,
        requests: RefCell<Vec<(String, Value)>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: Value) -> Self {
            Self::with(Ok(RawReply {
                status,
                body: body.to_string(),
            }))
        }

        fn with(reply: Result<RawReply, AppError>) -> Self {
            Self {
                reply,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl AuthTransport for FakeTransport {
        async fn post_json<B: Serialize>(
            &self,
            path: &str,
            body: &B,
        ) -> Result<RawReply, AppError> {
            let value = serde_json::to_value(body).expect("serialize request body");
            self.requests.borrow_mut().push((path.to_string(), value));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<(String, Duration)>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_after(&self, target: &str, delay: Duration) {
            self.visits.borrow_mut().push((target.to_string(), delay));
        }
    }

    fn registration() -> RegistrationRequest {
        RegistrationRequest {
            name: "  Ana Pérez ".to_string(),
            email: " Ana@Alumnos.INACAP.cl ".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: " Ana@INACAP.cl".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_login_redirects_to_server_target_after_delay() {
        let transport = FakeTransport::replying(200, json!({"success": true, "redirect": "/x"}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        let outcome = coordinator.submit(&credentials()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Redirecting {
                target: "/x".to_string(),
                message: "✅ Acceso correcto. Redirigiendo...".to_string(),
            }
        );
        assert_eq!(coordinator.phase(), SubmissionPhase::Succeeded);
        assert_eq!(
            navigator.visits.borrow().as_slice(),
            &[("/x".to_string(), Duration::from_millis(1500))]
        );
        assert_eq!(
            transport.requests.borrow().as_slice(),
            &[(
                "/auth/login".to_string(),
                json!({"email": "ana@inacap.cl", "password": "secret1"})
            )]
        );
        assert_eq!(
            view.last_message().map(|message| message.severity),
            Some(Severity::Success)
        );
    }

    #[tokio::test]
    async fn missing_redirect_falls_back_to_dashboard() {
        let transport = FakeTransport::replying(200, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        coordinator.submit(&credentials()).await;

        assert_eq!(
            navigator.visits.borrow().as_slice(),
            &[("/dashboard".to_string(), Duration::from_millis(1500))]
        );
    }

    #[tokio::test]
    async fn configured_fallback_redirect_is_used() {
        let transport = FakeTransport::replying(200, json!({"success": true, "redirect": "  "}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator)
            .with_fallback_redirect("/inicio");

        coordinator.submit(&registration()).await;

        assert_eq!(
            navigator.visits.borrow().as_slice(),
            &[("/inicio".to_string(), Duration::from_millis(2000))]
        );
    }

    #[tokio::test]
    async fn refused_login_shows_server_message_without_navigation() {
        let transport =
            FakeTransport::replying(401, json!({"success": false, "message": "bad"}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        let outcome = coordinator.submit(&credentials()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                message: "bad".to_string()
            }
        );
        assert_eq!(view.last_message(), Some(StatusMessage::error("bad")));
        assert!(navigator.visits.borrow().is_empty());
        assert_eq!(coordinator.phase(), SubmissionPhase::Failed);
    }

    #[tokio::test]
    async fn success_flag_false_on_ok_status_is_a_failure() {
        let transport = FakeTransport::replying(200, json!({"success": false}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        coordinator.submit(&credentials()).await;

        assert_eq!(
            view.last_message(),
            Some(StatusMessage::error("Error de autenticación"))
        );
        assert!(navigator.visits.borrow().is_empty());
    }

    #[tokio::test]
    async fn non_ok_status_fails_even_when_body_claims_success() {
        let transport = FakeTransport::replying(500, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        coordinator.submit(&registration()).await;

        assert_eq!(
            view.last_message(),
            Some(StatusMessage::error("Error al crear la cuenta"))
        );
        assert!(navigator.visits.borrow().is_empty());
    }

    #[tokio::test]
    async fn network_failure_shows_connectivity_message_and_clears_loading() {
        let transport =
            FakeTransport::with(Err(AppError::Network("connection refused".to_string())));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        let outcome = coordinator.submit(&credentials()).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                message: CONNECTION_ERROR_MESSAGE.to_string()
            }
        );
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Hidden,
                ViewEvent::Loading(true),
                ViewEvent::Shown(StatusMessage::error(CONNECTION_ERROR_MESSAGE)),
                ViewEvent::Loading(false),
            ]
        );
    }

    #[tokio::test]
    async fn unreadable_body_is_treated_as_connection_failure() {
        let transport = FakeTransport::with(Ok(RawReply {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        }));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        coordinator.submit(&credentials()).await;

        assert_eq!(
            view.last_message(),
            Some(StatusMessage::error(CONNECTION_ERROR_MESSAGE))
        );
        assert_eq!(view.loading(), Some(false));
    }

    #[tokio::test]
    async fn short_name_never_reaches_the_network() {
        let transport = FakeTransport::replying(200, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);
        let form = RegistrationRequest {
            name: " Jo ".to_string(),
            ..registration()
        };

        let outcome = coordinator.submit(&form).await;

        assert_eq!(transport.request_count(), 0);
        assert!(matches!(outcome, SubmissionOutcome::Invalid(ref errors)
            if errors.first() == Some(ValidationError::NameTooShort)));
        assert_eq!(view.loading(), Some(false));
        assert!(navigator.visits.borrow().is_empty());
    }

    #[tokio::test]
    async fn mismatched_confirmation_never_reaches_the_network() {
        let transport = FakeTransport::replying(200, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);
        let form = RegistrationRequest {
            confirm_password: "secret2".to_string(),
            ..registration()
        };

        coordinator.submit(&form).await;

        assert_eq!(transport.request_count(), 0);
        assert_eq!(
            view.last_message(),
            Some(StatusMessage::error("Las contraseñas no coinciden"))
        );
        assert_eq!(coordinator.phase(), SubmissionPhase::Failed);
    }

    #[tokio::test]
    async fn registration_reports_every_failed_rule() {
        let transport = FakeTransport::replying(200, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);
        let form = RegistrationRequest {
            name: "Al".to_string(),
            email: "al@gmail.com".to_string(),
            password: "123".to_string(),
            confirm_password: "1234".to_string(),
        };

        let outcome = coordinator.submit(&form).await;

        let SubmissionOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.iter().copied().collect::<Vec<_>>(),
            vec![
                ValidationError::NameTooShort,
                ValidationError::NonInstitutionalEmail,
                ValidationError::PasswordTooShort,
                ValidationError::PasswordMismatch,
            ]
        );
        let shown = view.last_message().expect("status shown");
        assert_eq!(shown.text.matches(" | ").count(), 3);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn registration_sends_normalized_body_and_server_message() {
        let transport = FakeTransport::replying(
            200,
            json!({"success": true, "message": "Cuenta creada exitosamente", "redirect": "/dashboard"}),
        );
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        coordinator.submit(&registration()).await;

        assert_eq!(
            transport.requests.borrow().as_slice(),
            &[(
                "/auth/register".to_string(),
                json!({
                    "nombre": "Ana Pérez",
                    "email": "ana@alumnos.inacap.cl",
                    "password": "secret1",
                })
            )]
        );
        assert_eq!(
            view.last_message(),
            Some(StatusMessage::success("Cuenta creada exitosamente"))
        );
    }

    #[tokio::test]
    async fn login_requires_email_and_password() {
        let transport = FakeTransport::replying(200, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        let outcome = coordinator.submit(&Credentials::default()).await;

        let SubmissionOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.iter().copied().collect::<Vec<_>>(),
            vec![ValidationError::MissingEmail, ValidationError::MissingPassword]
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn prior_status_is_cleared_before_loading_starts() {
        let transport = FakeTransport::replying(200, json!({"success": true}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);
        assert_eq!(coordinator.phase(), SubmissionPhase::Idle);

        coordinator.submit(&credentials()).await;

        let events = view.events();
        assert_eq!(events.first(), Some(&ViewEvent::Hidden));
        assert_eq!(events.get(1), Some(&ViewEvent::Loading(true)));
        assert_eq!(events.last(), Some(&ViewEvent::Loading(false)));
    }

    #[test]
    fn server_message_passes_through_unchanged() {
        assert_eq!(server_message(None), None);
        assert_eq!(server_message(Some("")), None);
        assert_eq!(server_message(Some("   ")), Some("   ".to_string()));
        assert_eq!(server_message(Some(" bad ")), Some(" bad ".to_string()));
        let long = "x".repeat(500);
        assert_eq!(server_message(Some(&long)), Some(long.clone()));
    }

    #[tokio::test]
    async fn long_padded_server_message_is_shown_verbatim() {
        let message = format!("  {}  ", "y".repeat(250));
        let transport =
            FakeTransport::replying(400, json!({"success": false, "message": message.clone()}));
        let view = RecordingView::default();
        let navigator = RecordingNavigator::default();
        let coordinator = SubmissionCoordinator::new(&transport, &view, &navigator);

        let outcome = coordinator.submit(&credentials()).await;

        assert_eq!(outcome, SubmissionOutcome::Rejected { message: message.clone() });
        assert_eq!(view.last_message(), Some(StatusMessage::error(message)));
    }

    #[test]
    fn unreadable_error_reply_maps_to_http_error() {
        let reply = RawReply {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(
            parse_response(&reply),
            Err(AppError::Http {
                status: 502,
                message: "<html>Bad Gateway</html>".to_string(),
            })
        );

        let reply = RawReply {
            status: 200,
            body: "not json".to_string(),
        };
        assert!(matches!(parse_response(&reply), Err(AppError::Parse(_))));
    }
}
