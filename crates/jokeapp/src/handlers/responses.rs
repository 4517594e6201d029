use super::Response;
use serde_json::{Map, Value};

fn message(text: &str) -> Value {
    let mut body = Map::new();
    body.insert("message".to_string(), Value::String(text.to_string()));
    Value::Object(body)
}

pub fn ok(data: Value) -> Response {
    Response {
        status: 200,
        data: Some(data),
    }
}

pub fn created(data: Value) -> Response {
    Response {
        status: 201,
        data: Some(data),
    }
}

pub fn no_content() -> Response {
    Response {
        status: 204,
        data: None,
    }
}

pub fn bad_request(text: &str) -> Response {
    Response {
        status: 400,
        data: Some(message(text)),
    }
}

pub fn not_found() -> Response {
    Response {
        status: 404,
        data: Some(message("Not found")),
    }
}

/// The only body a transport sends for unexpected failures.
pub fn internal_server_error() -> Response {
    Response {
        status: 500,
        data: Some(message("Internal server error")),
    }
}
