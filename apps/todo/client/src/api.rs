//! Remote task API: the five `/tasks` endpoints behind a trait.

use async_trait::async_trait;
use domain_tasks::{Task, TaskInput};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{ClientError, ClientResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Task>>;

    async fn get(&self, id: &str) -> ClientResult<Task>;

    async fn create(&self, input: &TaskInput) -> ClientResult<Task>;

    async fn update(&self, id: &str, input: &TaskInput) -> ClientResult<Task>;

    async fn delete(&self, id: &str) -> ClientResult<Task>;
}

/// `TaskApi` over HTTP.
///
/// No request timeout is configured; a hung server hangs the calling operation.
#[derive(Clone)]
pub struct HttpTaskApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTaskApi {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    /// The id is pushed as a single path segment, so `/`, `?` and `#` are
    /// percent-encoded instead of reshaping the request.
    fn task_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.tasks_url())
            .map_err(|e| ClientError::Network(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Network(format!("Invalid API URL: {}", self.base_url)))?
            .push(id);
        Ok(url)
    }
}

/// Map non-2xx to `Api`, 404 to `NotFound`, then decode the JSON body.
async fn decode<T: DeserializeOwned>(response: Response, id: Option<&str>) -> ClientResult<T> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ClientError::NotFound(id.to_string()));
        }
    }

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "API request failed");
        return Err(ClientError::Api {
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Network(format!("Failed to decode response: {}", e)))
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    #[instrument(skip(self))]
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let response = self.http_client.get(self.tasks_url()).send().await?;
        decode(response, None).await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> ClientResult<Task> {
        let response = self.http_client.get(self.task_url(id)?).send().await?;
        decode(response, Some(id)).await
    }

    #[instrument(skip(self, input), fields(task_title = %input.title))]
    async fn create(&self, input: &TaskInput) -> ClientResult<Task> {
        let response = self
            .http_client
            .post(self.tasks_url())
            .json(input)
            .send()
            .await?;
        decode(response, None).await
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: &TaskInput) -> ClientResult<Task> {
        let response = self
            .http_client
            .put(self.task_url(id)?)
            .json(input)
            .send()
            .await?;
        decode(response, Some(id)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ClientResult<Task> {
        let response = self.http_client.delete(self.task_url(id)?).send().await?;
        decode(response, Some(id)).await
    }
}
