//! Todo list screen.
//!
//! All state lives in one `TodoView` behind a signal. Handlers ask it for the
//! next request, run the request on the local executor and feed the outcome
//! back; rendering only reads from it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{ClientConfig, PendingRequest, Todo, TodoClient, TodoId, TodoView};

use crate::transport;

#[component]
pub fn App() -> impl IntoView {
    let client = TodoClient::from_config(&ClientConfig::from_build_env());
    web_sys::console::log_1(&format!("[todos] API at {}", client.base_url()).into());
    let state = RwSignal::new(TodoView::new(client));

    // Initial load, once.
    if let Some(pending) = state.try_update(|view| view.begin_load()) {
        dispatch(state, pending);
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(pending) = state.try_update(|view| view.begin_create()).flatten() {
            dispatch(state, pending);
        }
    };

    view! {
        <div class="container">
            <div class="card">
                <h1 class="title">"Todo List"</h1>
                <form class="form" on:submit=on_submit>
                    <input
                        class="input"
                        placeholder="Add a task"
                        prop:value=move || state.with(|view| view.draft().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|view| view.set_draft(value));
                        }
                    />
                    <button type="submit" class="btn-primary">"Add"</button>
                </form>
                {move || {
                    state
                        .with(|view| view.error().map(str::to_string))
                        .map(|message| view! { <div class="error">{message}</div> })
                }}
                <Show
                    when=move || !state.with(TodoView::is_loading)
                    fallback=|| view! { <div class="loading">"Loading…"</div> }
                >
                    <ul class="list">
                        <For
                            each=move || state.with(|view| view.todos().to_vec())
                            key=|todo: &Todo| todo.id
                            children=move |todo: Todo| view! { <TodoRow id=todo.id title=todo.title state=state /> }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

/// Checkbox and title read the row's todo from `state` on every change, so a
/// rejected toggle leaves the box where the list says it is.
#[component]
fn TodoRow(id: TodoId, title: String, state: RwSignal<TodoView>) -> impl IntoView {
    let completed = move || state.with(|view| is_completed(view, id));

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        // The box only moves once the server has answered.
        ev.prevent_default();
        if let Some(pending) = state.try_update(|view| view.begin_toggle_id(id)).flatten() {
            dispatch(state, pending);
        }
    };
    let on_delete = move |_| {
        if let Some(pending) = state.try_update(|view| view.begin_delete(id)) {
            dispatch(state, pending);
        }
    };

    view! {
        <li class="item">
            <input type="checkbox" prop:checked=completed on:click=on_toggle />
            <span class="todo-title" style=move || title_style(completed())>{title}</span>
            <button class="btn-ghost" on:click=on_delete>"Delete"</button>
        </li>
    }
}

fn is_completed(view: &TodoView, id: TodoId) -> bool {
    view.todo(id).is_some_and(|todo| todo.completed)
}

fn title_style(completed: bool) -> &'static str {
    if completed {
        "text-decoration: line-through; opacity: 0.7"
    } else {
        "text-decoration: none; opacity: 1"
    }
}

/// Run `pending` in the background and apply its outcome when it resolves.
fn dispatch(state: RwSignal<TodoView>, pending: PendingRequest) {
    let PendingRequest { operation, request } = pending;
    spawn_local(async move {
        let outcome = transport::execute(request).await;
        if let Err(err) = &outcome {
            web_sys::console::error_1(&format!("[todos] {operation:?} failed: {err}").into());
        }
        state.update(|view| view.complete(operation, outcome));
    });
}
