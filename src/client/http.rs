//! `reqwest` implementation of [`TaskApi`].

use super::ports::{ClientError, ClientOperation, ClientResult, TaskApi};
use crate::{
    api::StatusChangeRequest,
    config::DEFAULT_API_BASE_URL,
    task::domain::{Task, TaskContent, TaskId, TaskInput, TaskStatus},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Task API reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl Default for HttpTaskApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl HttpTaskApi {
    /// Creates a client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        operation: ClientOperation,
        request: RequestBuilder,
    ) -> ClientResult<Response> {
        request
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|err| failed(operation, &err))
    }

    async fn execute_json<T: DeserializeOwned>(
        operation: ClientOperation,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        Self::execute(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|err| failed(operation, &err))
    }
}

fn failed(operation: ClientOperation, err: &reqwest::Error) -> ClientError {
    tracing::warn!(%operation, error = %err, status = ?err.status(), "task API call failed");
    ClientError::OperationFailed(operation)
}

fn body_for(content: &TaskContent) -> TaskInput {
    TaskInput::new(content.title(), content.description())
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn fetch_tasks(&self) -> ClientResult<Vec<Task>> {
        Self::execute_json(
            ClientOperation::FetchTasks,
            self.client.get(self.url("/tasks")),
        )
        .await
    }

    async fn create_task(&self, content: &TaskContent) -> ClientResult<Task> {
        Self::execute_json(
            ClientOperation::AddTask,
            self.client.post(self.url("/tasks")).json(&body_for(content)),
        )
        .await
    }

    async fn update_task(&self, id: TaskId, content: &TaskContent) -> ClientResult<()> {
        Self::execute(
            ClientOperation::UpdateTask,
            self.client
                .put(self.url(&format!("/tasks/{id}")))
                .json(&body_for(content)),
        )
        .await
        .map(drop)
    }

    async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> ClientResult<()> {
        Self::execute(
            ClientOperation::UpdateStatus,
            self.client
                .put(self.url(&format!("/tasks/{id}/status")))
                .json(&StatusChangeRequest::new(status.as_str())),
        )
        .await
        .map(drop)
    }

    async fn delete_task(&self, id: TaskId) -> ClientResult<()> {
        Self::execute(
            ClientOperation::DeleteTask,
            self.client.delete(self.url(&format!("/tasks/{id}"))),
        )
        .await
        .map(drop)
    }

    async fn restore_task(&self, id: TaskId) -> ClientResult<()> {
        Self::execute(
            ClientOperation::RestoreTask,
            self.client.put(self.url(&format!("/tasks/{id}/restore"))),
        )
        .await
        .map(drop)
    }

    async fn permanently_delete_task(&self, id: TaskId) -> ClientResult<()> {
        Self::execute(
            ClientOperation::PermanentlyDeleteTask,
            self.client.delete(self.url(&format!("/tasks/{id}/permanent"))),
        )
        .await
        .map(drop)
    }
}
