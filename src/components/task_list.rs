//! Task List Component

use leptos::prelude::*;
use task_client::EMPTY_MESSAGE;

use super::TaskCard;
use crate::context::use_app_context;

/// All tasks in server order, or the empty notice
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let tasks = Memo::new(move |_| ctx.board.with(|b| b.tasks().to_vec()));

    view! {
        <Show
            when=move || tasks.with(|t| !t.is_empty())
            fallback=|| view! { <p class="empty-notice">{EMPTY_MESSAGE}</p> }
        >
            <ul class="task-list">
                {move || tasks.get().into_iter().map(|task| view! { <TaskCard task=task /> }).collect_view()}
            </ul>
        </Show>
    }
}
