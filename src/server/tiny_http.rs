//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::{Cursor, Read as _};

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use kanban_board::api::{
    self, ApiError, ApiResponse, CreateTaskRequest, DragStartRequest, DragTargetRequest,
    MoveTaskRequest, ReorderTaskRequest, Session, UpdateTaskRequest,
};

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
///
/// This is the main routing function that maps URL paths to handlers.
pub fn handle_api_request(session: &mut Session, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let url = request.url().to_string();
    let method = request.method().clone();

    let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));

    // Supports both /api/v1/... and /api/...
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    log::debug!("{method} {api_path}");

    match (&method, api_path) {
        (&Method::Get, "/board") => match query_param(query, "q") {
            Ok(q) => handle_result(api::get_board(session, &q.unwrap_or_default())),
            Err(e) => error_response(&e),
        },
        (&Method::Get, "/stats") => handle_result(api::get_stats(session)),
        (&Method::Get, "/tasks") => handle_result(api::list_tasks(session)),

        (&Method::Post, "/tasks") => match read_json_body::<CreateTaskRequest>(request) {
            Ok(req) => handle_result(api::create_task(session, &req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/drag/start") => match read_json_body::<DragStartRequest>(request) {
            Ok(req) => handle_result(api::drag_start(session, &req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/drag/over") => match read_json_body::<DragTargetRequest>(request) {
            Ok(req) => handle_result(api::drag_over(session, &req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/drag/end") => match read_json_body::<DragTargetRequest>(request) {
            Ok(req) => handle_result(api::drag_end(session, &req)),
            Err(e) => error_response(&e),
        },
        (&Method::Post, "/drag/cancel") => handle_result(api::drag_cancel(session)),

        _ => match task_route(api_path) {
            Err(e) => error_response(&e),
            Ok(Some((id, None))) => match method {
                Method::Get => handle_result(api::get_task(session, &id)),
                Method::Patch => match read_json_body::<UpdateTaskRequest>(request) {
                    Ok(req) => handle_result(api::update_task(session, &id, &req)),
                    Err(e) => error_response(&e),
                },
                Method::Delete => handle_result(api::delete_task(session, &id)),
                _ => not_found(&method, api_path),
            },
            Ok(Some((id, Some("move")))) if method == Method::Post => {
                match read_json_body::<MoveTaskRequest>(request) {
                    Ok(req) => handle_result(api::move_task(session, &id, &req)),
                    Err(e) => error_response(&e),
                }
            },
            Ok(Some((id, Some("reorder")))) if method == Method::Post => {
                match read_json_body::<ReorderTaskRequest>(request) {
                    Ok(req) => handle_result(api::reorder_task(session, &id, req)),
                    Err(e) => error_response(&e),
                }
            },
            _ => not_found(&method, api_path),
        },
    }
}

/// Split `/tasks/{id}[/{action}]`
fn task_route(path: &str) -> Result<Option<(String, Option<&str>)>, ApiError> {
    let Some(rest) = path.strip_prefix("/tasks/") else {
        return Ok(None);
    };
    let (id, action) = match rest.split_once('/') {
        Some((id, action)) => (id, Some(action)),
        None => (rest, None),
    };
    if id.is_empty() {
        return Ok(None);
    }
    Ok(Some((decode(id)?, action)))
}

// =============================================================================
// QUERY STRING
// =============================================================================

/// Find `name` in a `a=1&b=2` query string
fn query_param(query: &str, name: &str) -> Result<Option<String>, ApiError> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| decode(&v.replace('+', " ")))
        .transpose()
}

/// Percent-decode a URL component; escapes that are not UTF-8 are a bad request
fn decode(component: &str) -> Result<String, ApiError> {
    urlencoding::decode(component)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ApiError::bad_request(format!("Invalid URL encoding in '{component}': {e}")))
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to an HTTP response
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(e) => error_response(&e),
    }
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(&ApiResponse::failure(error), error.status_code())
}

fn not_found(method: &Method, path: &str) -> Response<Cursor<Vec<u8>>> {
    error_response(&ApiError::not_found(format!("API endpoint not found: {method} {path}")))
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
