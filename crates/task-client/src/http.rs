//! HTTP Task Store
//!
//! `TaskStore` over the REST collection resource:
//! `GET|POST {base}` and `PUT|DELETE {base}/{id}`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::{FetchError, FetchResult, Operation};
use crate::model::{Draft, Task, TaskId};
use crate::store::TaskStore;

/// Characters escaped when an id is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// REST-backed task store
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    config: ApiConfig,
}

impl HttpTaskStore {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// URL of a single task resource
    pub fn task_url(&self, id: &TaskId) -> String {
        format!(
            "{}/{}",
            self.config.base_url(),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    /// Send a request and reject transport failures and non-success statuses
    async fn send(&self, operation: Operation, request: RequestBuilder) -> FetchResult<Response> {
        let response = request.send().await.map_err(|e| {
            log::warn!("[STORE] {} request failed: {}", operation, e);
            FetchError::transport(operation, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[STORE] {} returned status {}", operation, status);
            return Err(FetchError::status(operation));
        }
        Ok(response)
    }
}

impl Default for HttpTaskStore {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn list_tasks(&self) -> FetchResult<Vec<Task>> {
        let url = self.config.base_url();
        log::debug!("[STORE] GET {}", url);
        let response = self.send(Operation::List, self.client.get(url)).await?;
        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| FetchError::transport(Operation::List, e))
    }

    async fn create_task(&self, draft: &Draft) -> FetchResult<()> {
        let url = self.config.base_url();
        log::debug!("[STORE] POST {}", url);
        self.send(Operation::Create, self.client.post(url).json(draft)).await?;
        Ok(())
    }

    async fn update_task(&self, id: &TaskId, draft: &Draft) -> FetchResult<()> {
        let url = self.task_url(id);
        log::debug!("[STORE] PUT {}", url);
        self.send(Operation::Update, self.client.put(&url).json(draft)).await?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> FetchResult<()> {
        let url = self.task_url(id);
        log::debug!("[STORE] DELETE {}", url);
        self.send(Operation::Delete, self.client.delete(&url)).await?;
        Ok(())
    }
}
