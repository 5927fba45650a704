//! Task Manager App
//!
//! Top-level component: owns the board, loads the list once on mount, and
//! swaps the whole page for a notice while loading or after an error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_client::{load_tasks, ApiConfig, Board, BoardView};

use crate::components::{TaskForm, TaskList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let board = RwSignal::new(Board::new());
    let ctx = AppContext::new(board, ApiConfig::default());
    provide_context(ctx);

    // Initial list fetch
    Effect::new(move |_| {
        spawn_local(async move {
            let _ = match load_tasks(&ctx.store(), &ctx).await {
                Ok(count) => rolling_logger::info(&format!("Initial load: {} tasks", count)),
                Err(e) => rolling_logger::error(&format!("Initial load failed: {}", e)),
            };
        });
    });

    // Only loading and error replace the page; keystrokes must not re-render it.
    let page_notice = Memo::new(move |_| {
        board.with(|b| match b.view() {
            BoardView::Loading => Some((BoardView::Loading.notice().unwrap_or_default(), false)),
            failed @ BoardView::Failed(_) => Some((failed.notice().unwrap_or_default(), true)),
            BoardView::Empty | BoardView::Tasks(_) => None,
        })
    });

    view! {
        {move || match page_notice.get() {
            Some((notice, failed)) => view! {
                <p class="page-notice">{notice}</p>
                <Show when=move || failed>
                    <RecentLog />
                </Show>
            }.into_any(),
            None => view! {
                <div class="task-page">
                    <h1>"Task Manager"</h1>
                    <TaskForm />
                    <TaskList />
                </div>
            }.into_any(),
        }}
    }
}

/// Recent log lines, shown under the error notice
#[component]
fn RecentLog() -> impl IntoView {
    let lines = rolling_logger::recent();

    view! {
        <details class="recent-log">
            <summary>"Registro"</summary>
            <pre>{lines.join("\n")}</pre>
        </details>
    }
}
