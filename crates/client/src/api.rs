//! HTTP client for the folio API server, using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use folio_core::project::ProjectRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::backend::ProjectsBackend;
use crate::error::ClientError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Message used when an error response has no readable JSON body.
const UNREADABLE_ERROR_MESSAGE: &str = "Network error";

/// Message used when an error body carries no `error` string.
const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// HTTP client for one folio API deployment.
pub struct HttpProjectsApi {
    client: reqwest::Client,
    /// Base URL including the API prefix, e.g. `http://host:3000/api/v1`.
    base_url: String,
    token: RwLock<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct ListBody {
    #[serde(default)]
    projects: Option<Vec<ProjectRecord>>,
}

#[derive(Debug, Deserialize)]
struct ProjectBody {
    project: ProjectRecord,
}

/// An open server admits the session without issuing a token.
#[derive(Debug, Deserialize)]
struct LoginBody {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
}

impl HttpProjectsApi {
    /// Create a client with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an admin token is currently held.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of one project, with `id` percent-encoded as a single segment.
    fn project_url(&self, id: &str) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.url("/projects"))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    /// Attach the bearer token (if any), send, and decode a JSON success body.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = match self.token.read().await.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Turn a non-2xx response into [`ClientError::Api`] carrying the
    /// server's `error` string.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            Err(_) => UNREADABLE_ERROR_MESSAGE.to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ProjectsBackend for HttpProjectsApi {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        let body: ListBody = self.send(self.client.get(self.url("/projects"))).await?;
        Ok(body.projects.unwrap_or_default())
    }

    async fn create(&self, project: &ProjectRecord) -> Result<ProjectRecord, ClientError> {
        let body: ProjectBody = self
            .send(self.client.post(self.url("/projects")).json(project))
            .await?;
        Ok(body.project)
    }

    async fn update(
        &self,
        id: &str,
        project: &ProjectRecord,
    ) -> Result<ProjectRecord, ClientError> {
        let body: ProjectBody = self
            .send(
                self.client
                    .put(self.project_url(id)?)
                    .json(project),
            )
            .await?;
        Ok(body.project)
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .send(self.client.delete(self.project_url(id)?))
            .await?;
        Ok(())
    }

    async fn login(&self, password: &str) -> Result<(), ClientError> {
        let body: LoginBody = self
            .send(
                self.client
                    .post(self.url("/auth/login"))
                    .json(&LoginRequest { password }),
            )
            .await?;
        *self.token.write().await = body.token;
        Ok(())
    }

    async fn logout(&self) {
        *self.token.write().await = None;
    }
}
