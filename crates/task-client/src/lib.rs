//! Task Client
//!
//! Layered core of the task manager page:
//! - model / error / config: wire types and the single `FetchError`
//! - store: the `TaskStore` trait with HTTP and in-memory backends
//! - session / board: edit-session state machine and page state
//! - controller: async load / submit / delete flows

mod board;
mod config;
mod controller;
mod error;
mod http;
mod memory;
mod model;
mod session;
mod store;

pub use board::{Board, BoardCell, BoardView, EMPTY_MESSAGE, LOADING_MESSAGE};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use controller::{delete_task, load_tasks, submit};
pub use error::{FetchError, FetchResult, Operation};
pub use http::HttpTaskStore;
pub use memory::{MemoryTaskStore, StoreCall};
pub use model::{Draft, DraftField, Task, TaskId};
pub use session::{Session, SessionMode, SubmitOutcome, Submission};
pub use store::TaskStore;
