//! Status message model for the forms. The view layer renders whatever message
//! is current; this module only decides text and colour.

/// Severity of a status message; selects its colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "inherit",
            Severity::Success => "#28a745",
            Severity::Error => "#dc3545",
        }
    }
}

/// Text shown in a form's status element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    pub fn color(&self) -> &'static str {
        self.severity.color()
    }
}

/// Presenter for one form's status element and the shared loading affordance.
/// Implementations mutate UI state only; nothing is returned.
pub trait FormView {
    fn show_status(&self, message: StatusMessage);
    fn hide_status(&self);
    fn set_loading(&self, loading: bool);
}

impl<V: FormView + ?Sized> FormView for &V {
    fn show_status(&self, message: StatusMessage) {
        (**self).show_status(message);
    }

    fn hide_status(&self) {
        (**self).hide_status();
    }

    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }
}
