//! View-state controller for the todo list screen.
//!
//! # Design
//! `TodoView` owns everything the screen renders: the cached list, the draft
//! title, the loading flag and the current error. It never performs I/O.
//! Each user action is split in two, like the client underneath it:
//!
//! - `begin_*` updates the "request started" state and returns a
//!   [`PendingRequest`] for the host to execute;
//! - [`TodoView::complete`] takes the tagged [`Operation`] back together with
//!   the host's outcome and reconciles local state from the response.
//!
//! Overlapping operations are not coordinated. Whichever `complete` call
//! happens last wins for shared fields such as `error` and `loading`.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Which user action a request belongs to, plus what `complete` needs to
/// apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Toggle(TodoId),
    Delete(TodoId),
}

impl Operation {
    /// Message shown when the server rejects the request.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos",
            Operation::Create => "Failed to add todo",
            Operation::Toggle(_) => "Failed to update todo",
            Operation::Delete(_) => "Failed to delete todo",
        }
    }
}

/// A request the host must execute before calling [`TodoView::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub operation: Operation,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
pub struct TodoView {
    client: TodoClient,
    todos: Vec<Todo>,
    draft: String,
    loading: bool,
    error: Option<String>,
}

impl TodoView {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
            draft: String::new(),
            loading: false,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The cached copy of the todo with `id`, if it is still listed.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Toggle the cached copy of `id` rather than a caller-held snapshot,
    /// so the PATCH always inverts what the list currently shows.
    pub fn begin_toggle_id(&mut self, id: TodoId) -> Option<PendingRequest> {
        let todo = self.todo(id)?.clone();
        self.begin_toggle(&todo)
    }

    pub fn begin_load(&mut self) -> PendingRequest {
        self.loading = true;
        self.error = None;
        PendingRequest {
            operation: Operation::Load,
            request: self.client.build_list_todos(),
        }
    }

    /// Returns `None` without touching any state when the trimmed draft is
    /// empty.
    pub fn begin_create(&mut self) -> Option<PendingRequest> {
        let title = self.draft.trim();
        if title.is_empty() {
            return None;
        }
        let input = CreateTodo {
            title: title.to_string(),
        };
        self.error = None;
        self.start(Operation::Create, self.client.build_create_todo(&input))
    }

    pub fn begin_toggle(&mut self, todo: &Todo) -> Option<PendingRequest> {
        let input = UpdateTodo {
            completed: !todo.completed,
        };
        self.error = None;
        self.start(Operation::Toggle(todo.id), self.client.build_update_todo(todo.id, &input))
    }

    pub fn begin_delete(&mut self, id: TodoId) -> PendingRequest {
        self.error = None;
        PendingRequest {
            operation: Operation::Delete(id),
            request: self.client.build_delete_todo(id),
        }
    }

    /// Apply the outcome of a request previously returned by a `begin_*`
    /// method. `Err` is for round-trips that never produced a response.
    pub fn complete(&mut self, operation: Operation, outcome: Result<HttpResponse, ApiError>) {
        match operation {
            Operation::Load => {
                self.loading = false;
                match outcome.and_then(|r| self.client.parse_list_todos(r)) {
                    Ok(todos) => self.todos = todos,
                    Err(err) => self.fail(operation, err),
                }
            }
            Operation::Create => match outcome.and_then(|r| self.client.parse_create_todo(r)) {
                Ok(created) => {
                    self.todos.insert(0, created);
                    self.draft.clear();
                }
                Err(err) => self.fail(operation, err),
            },
            Operation::Toggle(id) => match outcome.and_then(|r| self.client.parse_update_todo(r)) {
                Ok(updated) => {
                    if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
                        *slot = updated;
                    }
                }
                Err(err) => self.fail(operation, err),
            },
            Operation::Delete(id) => match outcome.and_then(|r| self.client.parse_delete_todo(r)) {
                Ok(()) => self.todos.retain(|t| t.id != id),
                Err(err) => self.fail(operation, err),
            },
        }
    }

    fn start(&mut self, operation: Operation, request: Result<HttpRequest, ApiError>) -> Option<PendingRequest> {
        match request {
            Ok(request) => Some(PendingRequest { operation, request }),
            Err(err) => {
                self.fail(operation, err);
                None
            }
        }
    }

    fn fail(&mut self, operation: Operation, err: ApiError) {
        let message = if err.is_status() {
            operation.failure_message().to_string()
        } else {
            err.to_string()
        };
        self.error = Some(message);
    }
}
