//! Auth feature module: field validation, the submission flow for the login and
//! registration forms, tab selection, and status presentation. Everything here
//! except the browser adapters is platform independent. Form payloads hold
//! plaintext passwords and must never be logged.
//!
//! Flow Overview: a submit event builds a form payload, the coordinator
//! validates it, posts it once, and either schedules a redirect or shows the
//! server's error through the form's status view.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod status;
pub mod submission;
pub mod tabs;
pub mod types;
pub mod validation;
