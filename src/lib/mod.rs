//! Shared frontend utilities for configuration, HTTP access, errors, logging,
//! and build metadata.
//!
//! ## Auth endpoints
//!
//! 1. **Login:** `POST /auth/login` with `{email, password}`.
//! 2. **Register:** `POST /auth/register` with `{nombre, email, password}`.
//!
//! Both reply with `{success, message?, redirect?}` and set the session cookie
//! on success, so requests carry same-origin credentials. These utilities never
//! see anything but the serialized body; callers must avoid logging it.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod theme;

pub use api::RawReply;
#[cfg(target_arch = "wasm32")]
pub use api::post_json_with_credentials;
pub use config::AppConfig;
pub use errors::AppError;
pub use theme::{ButtonVariant, Theme};
