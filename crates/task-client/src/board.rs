//! Board State
//!
//! The one state container behind the page: task snapshot, initial-load
//! flag, error slot and edit session.

use std::cell::RefCell;

use crate::error::FetchError;
use crate::model::Task;
use crate::session::Session;

/// Shown while the first list fetch is outstanding
pub const LOADING_MESSAGE: &str = "Cargando tareas...";

/// Shown when the backend returns no tasks
pub const EMPTY_MESSAGE: &str = "No hay tareas disponibles.";

/// Page-level state
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<FetchError>,
    session: Session,
}

impl Board {
    /// Fresh board waiting on its first list fetch
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            error: None,
            session: Session::new(),
        }
    }

    /// Cached snapshot, in server order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Swap in a freshly fetched list
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
    }

    /// Store an error, replacing any earlier one. Errors are never cleared.
    pub fn record_error(&mut self, error: FetchError) {
        self.error = Some(error);
        self.loading = false;
    }

    pub fn view(&self) -> BoardView<'_> {
        if self.loading {
            BoardView::Loading
        } else if let Some(error) = &self.error {
            BoardView::Failed(error.message())
        } else if self.tasks.is_empty() {
            BoardView::Empty
        } else {
            BoardView::Tasks(&self.tasks)
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// What the page should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Tasks(&'a [Task]),
}

impl BoardView<'_> {
    /// Plain-text line replacing the list, if any
    pub fn notice(&self) -> Option<String> {
        match self {
            BoardView::Loading => Some(LOADING_MESSAGE.to_string()),
            BoardView::Failed(message) => Some(format!("Error: {}", message)),
            BoardView::Empty => Some(EMPTY_MESSAGE.to_string()),
            BoardView::Tasks(_) => None,
        }
    }
}

/// Somewhere a `Board` lives and can be mutated in short, synchronous steps.
///
/// Controller operations never hold the board across an await, so a reactive
/// signal and a plain `RefCell` work the same way.
pub trait BoardCell {
    /// Run `f` against the board; `None` if the board is gone
    fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> Option<R>;
}

impl BoardCell for RefCell<Board> {
    fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
