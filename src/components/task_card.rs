//! Task Card Component
//!
//! One task with its edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_client::{delete_task, Task};

use crate::context::use_app_context;

const DELETE_PROMPT: &str = "¿Seguro que quieres eliminar esta tarea?";

/// Blocking browser confirm; a missing window counts as "no"
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let status = task.status_label();
    let title = task.title.clone();
    let description = task.description.clone();
    let id = task.id.clone();

    let edit = move |_| ctx.board.update(|b| b.session_mut().begin_edit(&task));

    let delete = move |_| {
        if !confirm_delete() {
            return;
        }
        let id = id.clone();
        spawn_local(async move {
            let _ = delete_task(&ctx.store(), &ctx, &id).await;
        });
    };

    view! {
        <li class="task-card">
            <h3>{title}</h3>
            <p>{description}</p>
            <p>"Estado: " {status}</p>
            <div class="task-actions">
                <button class="edit-btn" title="Editar" on:click=edit>
                    <img src="public/edit.svg" alt="edit" width="20" height="20" class="invert" />
                </button>
                <button class="delete-btn" title="Eliminar" on:click=delete>
                    <img src="public/trash.svg" alt="delete" width="20" height="20" class="invert" />
                </button>
            </div>
        </li>
    }
}
