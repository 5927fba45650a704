//! Task Form Component
//!
//! Create/edit form bound to the board's edit session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_client::{submit, DraftField};
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Form for creating a task, or editing the one selected from the list
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let editing = Memo::new(move |_| ctx.board.with(|b| b.session().is_editing()));
    let submitting = Memo::new(move |_| ctx.board.with(|b| b.session().is_submitting()));

    let field_value = move |field: DraftField| {
        move || ctx.board.with(|b| b.session().draft().field(field).to_string())
    };

    // Inputs are routed by their `name` attribute
    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(field) = DraftField::from_name(&input.name()) {
            ctx.board.update(|b| b.session_mut().set_field(field, input.value()));
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = submit(&ctx.store(), &ctx).await;
        });
    };

    let cancel = move |_| ctx.board.update(|b| b.session_mut().cancel());

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                name=DraftField::Title.as_str()
                placeholder="Tarea"
                prop:value=field_value(DraftField::Title)
                on:input=on_input
            />
            <input
                type="number"
                name=DraftField::Duration.as_str()
                placeholder="Duración"
                prop:value=field_value(DraftField::Duration)
                on:input=on_input
            />
            <input
                name=DraftField::Description.as_str()
                placeholder="Descripción"
                prop:value=field_value(DraftField::Description)
                on:input=on_input
            />
            <button type="submit" disabled=move || submitting.get()>
                {move || if editing.get() { "Editar" } else { "Crear" }}
            </button>
            <Show when=move || editing.get()>
                <button type="button" class="cancel-btn" on:click=cancel>
                    "Cancelar"
                </button>
            </Show>
        </form>
    }
}
