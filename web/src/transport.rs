//! Executes core `HttpRequest` values with the browser's `fetch`.
//!
//! Any status the server answers with comes back as an `HttpResponse`; the
//! core decides what it means. Only a failed round-trip (refused connection,
//! CORS rejection, unreadable body) becomes `ApiError::Transport`.

use todo_core::{ApiError, HttpRequest, HttpResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub async fn execute(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    fetch(request)
        .await
        .map_err(|err| ApiError::Transport(describe(&err)))
}

async fn fetch(request: HttpRequest) -> Result<HttpResponse, JsValue> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());

    if !request.headers.is_empty() {
        let headers = Headers::new()?;
        for (name, value) in &request.headers {
            headers.set(name, value)?;
        }
        init.set_headers(&headers);
    }
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let req = Request::new_with_str_and_init(&request.path, &init)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&req))
        .await?
        .dyn_into()?;

    let status = response.status();
    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(HttpResponse::new(status, body))
}

/// Browsers reject fetch with a `TypeError` whose message is all we get.
fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| "Unknown error".to_string())
}
