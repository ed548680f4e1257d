use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::StackConfig;
use crate::types::{error::AppError, user::StackUser};

/// Resolves a bearer access token into the provider's user record.
/// `Ok(None)` means the token does not belong to a live session.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn resolve(&self, access_token: &str) -> Result<Option<StackUser>, AppError>;
}

pub type SharedAuthProvider = Arc<dyn AuthProvider>;

/// Talks to the Stack Auth REST API with the project's server key.
pub struct StackAuthProvider {
    client: Client,
    config: StackConfig,
}

impl StackAuthProvider {
    pub fn new(config: StackConfig) -> Result<Self, AppError> {
        let client = ClientBuilder::new()
            .user_agent("saberroar-portal/0.1 (+reqwest)")
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Internal(format!("build client failed: {e}")))?;

        Ok(Self { client, config })
    }

    fn me_url(&self) -> String {
        format!("{}/users/me", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AuthProvider for StackAuthProvider {
    async fn resolve(&self, access_token: &str) -> Result<Option<StackUser>, AppError> {
        let t0 = Instant::now();
        let res = self
            .client
            .get(self.me_url())
            .header("x-stack-access-type", "server")
            .header("x-stack-project-id", &self.config.project_id)
            .header("x-stack-secret-server-key", &self.config.secret_server_key) // do NOT log
            .header("x-stack-access-token", access_token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("send failed: {e}")))?;

        let status = res.status();
        match status {
            s if s.is_success() => {
                let user = res
                    .json::<StackUser>()
                    .await
                    .map_err(|e| AppError::Upstream(format!("decode user failed: {e}")))?;
                info!("resolved stack user {} in {} ms", user.id, t0.elapsed().as_millis());
                Ok(Some(user))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                Ok(None)
            }
            _ => {
                let body = res.text().await.unwrap_or_default();
                warn!("stack auth returned HTTP {status}: {body}");
                Err(AppError::Upstream(format!("HTTP {status}")))
            }
        }
    }
}

/// Fixed token table. Used by the tests and for running the portal without the provider.
#[derive(Default, Clone)]
pub struct StaticAuthProvider {
    users: HashMap<String, StackUser>,
}

impl StaticAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: StackUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn resolve(&self, access_token: &str) -> Result<Option<StackUser>, AppError> {
        Ok(self.users.get(access_token).cloned())
    }
}
