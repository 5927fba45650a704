//! Board Controller
//!
//! Async operations tying the session and the snapshot to a `TaskStore`.
//! Every failure is written to the board's error slot and also returned.

use crate::board::BoardCell;
use crate::error::FetchResult;
use crate::model::TaskId;
use crate::session::SubmitOutcome;
use crate::store::TaskStore;

/// Fetch the full list and replace the snapshot
pub async fn load_tasks<S, B>(store: &S, board: &B) -> FetchResult<usize>
where
    S: TaskStore + ?Sized,
    B: BoardCell,
{
    match store.list_tasks().await {
        Ok(tasks) => {
            let count = tasks.len();
            log::info!("[BOARD] Loaded {} tasks", count);
            board.with_board(|b| b.replace_tasks(tasks));
            Ok(count)
        }
        Err(e) => {
            log::error!("[BOARD] Loading tasks failed: {}", e);
            board.with_board(|b| b.record_error(e.clone()));
            Err(e)
        }
    }
}

/// Create or update from the current draft, then reset and refetch.
///
/// On failure the session is left as it was. A refetch failure after a
/// successful mutation only lands on the board.
pub async fn submit<S, B>(store: &S, board: &B) -> FetchResult<SubmitOutcome>
where
    S: TaskStore + ?Sized,
    B: BoardCell,
{
    let Some(submission) = board.with_board(|b| b.session_mut().begin_submit()).flatten() else {
        log::debug!("[BOARD] Submit ignored, previous one still in flight");
        return Ok(SubmitOutcome::Busy);
    };

    let result = submission.send(store).await;
    board.with_board(|b| {
        b.session_mut().complete_submit(result.is_ok());
        if let Err(e) = &result {
            b.record_error(e.clone());
        }
    });
    if let Err(e) = result {
        log::error!("[BOARD] Submit failed: {}", e);
        return Err(e);
    }

    let outcome = submission.outcome();
    log::info!("[BOARD] Submit succeeded: {:?}", outcome);
    let _ = load_tasks(store, board).await;
    Ok(outcome)
}

/// Delete a task and refetch. The caller confirms with the user first.
pub async fn delete_task<S, B>(store: &S, board: &B, id: &TaskId) -> FetchResult<()>
where
    S: TaskStore + ?Sized,
    B: BoardCell,
{
    if let Err(e) = store.delete_task(id).await {
        log::error!("[BOARD] Deleting task {} failed: {}", id, e);
        board.with_board(|b| b.record_error(e.clone()));
        return Err(e);
    }
    log::info!("[BOARD] Deleted task {}", id);
    let _ = load_tasks(store, board).await;
    Ok(())
}
