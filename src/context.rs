//! Application Context
//!
//! The page's single `Board`, shared with every component via Leptos context.

use leptos::prelude::*;
use task_client::{ApiConfig, Board, BoardCell, HttpTaskStore};

/// Board signal + the store client talking to the backend
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Snapshot, error slot and edit session
    pub board: RwSignal<Board>,
    store: StoredValue<HttpTaskStore, LocalStorage>,
}

impl AppContext {
    pub fn new(board: RwSignal<Board>, config: ApiConfig) -> Self {
        Self {
            board,
            store: StoredValue::new_local(HttpTaskStore::new(config)),
        }
    }

    /// Shared store client; clones reuse the same connection pool
    pub fn store(&self) -> HttpTaskStore {
        self.store.get_value()
    }
}

impl BoardCell for AppContext {
    fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        self.board.try_update(f)
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
