//! # Request Handlers
//!
//! Handlers sit between a transport (HTTP, or a test) and the repository. They
//! take a transport-agnostic [`Request`] and return a transport-agnostic
//! [`Response`]; status codes live here, sockets and JSON framing do not.
//!
//! ## Contract
//!
//! | Handler | Success | Failure |
//! |---------|---------|---------|
//! | [`jokes::index`] | `200 {"jokes": [...]}` | |
//! | [`jokes::show`] | `200 {"joke": {...}}` | `404 {"message": "Not found"}` |
//! | [`jokes::create`] | `201 {"joke": {...}}` | `400 {"message": ...}` |
//! | [`jokes::update`] | `204` | `400 {"message": ...}` |
//! | [`jokes::destroy`] | `204` | |
//!
//! Validation failures are responses, not errors. An `Err` from a handler means
//! something unexpected went wrong (storage, id generation); the transport turns
//! it into a generic `500` without leaking details.

use serde_json::Value;
use std::collections::HashMap;

pub mod jokes;
pub mod responses;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub params: HashMap<String, String>,
    pub data: Option<Value>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub data: Option<Value>,
}
