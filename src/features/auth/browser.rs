//! Browser-side adapters for the submission and tab ports: status and loading
//! state live in Leptos signals, navigation goes through `window.location`.

use crate::features::auth::{
    status::{FormView, StatusMessage},
    submission::Navigator,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::time::Duration;
use tracing::warn;

/// Status element and loading affordance of one form, backed by signals.
#[derive(Clone, Copy)]
pub struct SignalFormView {
    pub status: RwSignal<Option<StatusMessage>>,
    pub loading: RwSignal<bool>,
}

impl SignalFormView {
    pub fn new(loading: RwSignal<bool>) -> Self {
        Self {
            status: RwSignal::new(None),
            loading,
        }
    }
}

impl FormView for SignalFormView {
    fn show_status(&self, message: StatusMessage) {
        self.status.set(Some(message));
    }

    fn hide_status(&self) {
        self.status.set(None);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

/// Full-page navigation once the delay elapses.
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_after(&self, target: &str, delay: Duration) {
        let target = target.to_string();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            let Some(window) = web_sys::window() else {
                warn!("window unavailable; redirect skipped");
                return;
            };
            if let Err(err) = window.location().set_href(&target) {
                warn!(error = ?err, "redirect failed");
            }
        });
        let _ = timeout.forget();
    }
}
