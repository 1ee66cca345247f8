//! API client core and view-state controller for the todo list screen.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `TodoView` layers the screen
//! state on top: the host asks it for the next request, executes it, and
//! hands the outcome back.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoView` reuses the same split: `begin_*` / `complete`.
//! - DTOs are defined independently from the mock-server crate; the
//!   end-to-end test catches schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
pub use view::{Operation, PendingRequest, TodoView};
