//! In-Memory Task Store
//!
//! A `TaskStore` kept in process. Records every call and can be told to fail
//! the next call of a given operation.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult, Operation};
use crate::model::{Draft, Task, TaskId};
use crate::store::TaskStore;

/// A store call as observed by `MemoryTaskStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create(Draft),
    Update(TaskId, Draft),
    Delete(TaskId),
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: Vec<Task>,
    next_id: u64,
    calls: Vec<StoreCall>,
    pending_failures: Vec<Operation>,
}

impl MemoryState {
    fn take_failure(&mut self, operation: Operation) -> FetchResult<()> {
        match self.pending_failures.iter().position(|op| *op == operation) {
            Some(index) => {
                self.pending_failures.remove(index);
                Err(FetchError::status(operation))
            }
            None => Ok(()),
        }
    }

    fn assign_id(&mut self) -> TaskId {
        loop {
            self.next_id += 1;
            let id = TaskId::new(self.next_id.to_string());
            if !self.tasks.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }
}

fn apply_draft(task: &mut Task, draft: &Draft) {
    task.title = draft.title.clone();
    task.duration = draft.duration.trim().parse().unwrap_or_default();
    task.description = draft.description.clone();
    task.category = draft.category.clone();
}

/// Single-threaded in-memory store
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    state: RefCell<MemoryState>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with tasks, kept in the given order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let store = Self::new();
        store.state.borrow_mut().tasks = tasks;
        store
    }

    /// Make the next call of `operation` fail as a non-success status would
    pub fn fail_next(&self, operation: Operation) {
        self.state.borrow_mut().pending_failures.push(operation);
    }

    /// Calls seen so far, oldest first
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Current contents
    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }
}

#[async_trait(?Send)]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> FetchResult<Vec<Task>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(StoreCall::List);
        state.take_failure(Operation::List)?;
        Ok(state.tasks.clone())
    }

    async fn create_task(&self, draft: &Draft) -> FetchResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(StoreCall::Create(draft.clone()));
        state.take_failure(Operation::Create)?;

        let id = state.assign_id();
        let mut task = Task::new(id, String::new());
        apply_draft(&mut task, draft);
        state.tasks.push(task);
        Ok(())
    }

    async fn update_task(&self, id: &TaskId, draft: &Draft) -> FetchResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(StoreCall::Update(id.clone(), draft.clone()));
        state.take_failure(Operation::Update)?;

        let task = state
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| FetchError::status(Operation::Update))?;
        apply_draft(task, draft);
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> FetchResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(StoreCall::Delete(id.clone()));
        state.take_failure(Operation::Delete)?;

        let before = state.tasks.len();
        state.tasks.retain(|t| &t.id != id);
        if state.tasks.len() == before {
            return Err(FetchError::status(Operation::Delete));
        }
        Ok(())
    }
}
