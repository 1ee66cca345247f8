//! Full screen lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoView` the way
//! the browser host does: take the pending request, execute it over real
//! HTTP with ureq, hand the outcome back.

use todo_core::{ApiError, HttpMethod, HttpResponse, PendingRequest, TodoClient, TodoView};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation.
fn execute(req: todo_core::HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.unwrap_or_default();
    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        HttpMethod::Delete => agent.delete(&req.path).call(),
        HttpMethod::Post => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        HttpMethod::Patch => agent
            .patch(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(HttpResponse::new(status, body))
}

fn run(view: &mut TodoView, pending: PendingRequest) {
    let outcome = execute(pending.request);
    view.complete(pending.operation, outcome);
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/")
}

#[test]
fn screen_lifecycle() {
    let mut view = TodoView::new(TodoClient::new(&start_server()));

    // Step 1: initial load, empty.
    let pending = view.begin_load();
    run(&mut view, pending);
    assert!(!view.is_loading());
    assert!(view.error().is_none(), "{:?}", view.error());
    assert!(view.todos().is_empty());

    // Step 2: blank draft sends nothing.
    view.set_draft("   ");
    assert!(view.begin_create().is_none());

    // Step 3: create two todos; the newest is first.
    for title in ["Write report", "Water plants"] {
        view.set_draft(format!("  {title} "));
        let pending = view.begin_create().unwrap();
        run(&mut view, pending);
        assert_eq!(view.draft(), "");
    }
    let titles: Vec<_> = view.todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Water plants", "Write report"]);

    // Step 4: toggle the older one.
    let target = view.todos()[1].clone();
    let pending = view.begin_toggle(&target).unwrap();
    run(&mut view, pending);
    assert!(view.todos()[1].completed);
    assert!(!view.todos()[0].completed);

    // Step 5: reload; the server agrees about the toggle.
    let pending = view.begin_load();
    run(&mut view, pending);
    let reloaded = view.todos().iter().find(|t| t.id == target.id).unwrap();
    assert!(reloaded.completed);

    // Step 6: delete it (server answers 204).
    let pending = view.begin_delete(target.id);
    run(&mut view, pending);
    assert!(view.error().is_none());
    assert_eq!(view.todos().len(), 1);
    assert!(view.todos().iter().all(|t| t.id != target.id));

    // Step 7: deleting again is a 404 and surfaces an error.
    let pending = view.begin_delete(target.id);
    run(&mut view, pending);
    assert_eq!(view.error(), Some("Failed to delete todo"));
    assert_eq!(view.todos().len(), 1);

    // Step 8: toggling a missing id fails the same way.
    let mut ghost = target.clone();
    ghost.completed = false;
    let pending = view.begin_toggle(&ghost).unwrap();
    run(&mut view, pending);
    assert_eq!(view.error(), Some("Failed to update todo"));
}

#[test]
fn unreachable_server_keeps_list_and_reports_error() {
    // Bind then drop so the port is almost certainly closed.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut view = TodoView::new(TodoClient::new(&format!("http://{addr}")));

    let pending = view.begin_load();
    run(&mut view, pending);
    assert!(!view.is_loading());
    assert!(view.todos().is_empty());
    let message = view.error().unwrap();
    assert!(message.starts_with("network error"), "{message}");
}
