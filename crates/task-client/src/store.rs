//! Task Store - Core Trait
//!
//! Abstract interface over the remote task collection.
//! Implementations: HTTP (`HttpTaskStore`) and in-memory (`MemoryTaskStore`).

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::model::{Draft, Task, TaskId};

/// CRUD operations against the remote task collection.
///
/// Futures are not `Send`: the UI drives them on the browser's single
/// event loop.
#[async_trait(?Send)]
pub trait TaskStore {
    /// Fetch the whole collection, in server order
    async fn list_tasks(&self) -> FetchResult<Vec<Task>>;

    /// Create a task from the draft
    async fn create_task(&self, draft: &Draft) -> FetchResult<()>;

    /// Overwrite an existing task with the draft
    async fn update_task(&self, id: &TaskId, draft: &Draft) -> FetchResult<()>;

    /// Remove a task. Confirming with the user is the caller's job.
    async fn delete_task(&self, id: &TaskId) -> FetchResult<()>;
}
