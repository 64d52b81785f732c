//! Layout components shared across routes.

mod auth_layout;

pub(crate) use auth_layout::AuthLayout;
