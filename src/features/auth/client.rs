//! HTTP transport for the auth endpoints. Requests carry same-origin cookies so
//! the backend can set the session on a successful login or registration.

use crate::{
    app_lib::{AppConfig, AppError, RawReply, post_json_with_credentials},
    features::auth::submission::AuthTransport,
};
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct HttpAuthTransport {
    config: AppConfig,
}

impl HttpAuthTransport {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl AuthTransport for HttpAuthTransport {
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<RawReply, AppError> {
        let url = self.config.endpoint_url(path);
        post_json_with_credentials(&url, body).await
    }
}
