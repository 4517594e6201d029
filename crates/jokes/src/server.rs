//! HTTP transport for the joke handlers.
//!
//! The router does three things and nothing else: pull path params and the
//! JSON body into a [`Request`], call the matching handler, and turn the
//! handler's [`Response`] back into HTTP. A handler `Err` is logged and
//! answered with a bare 500.

use anyhow::{bail, Context, Result};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::routing::get;
use axum::{Json, Router};
use jokeapp::handlers::jokes::{self, JOKE_ID_PARAM};
use jokeapp::handlers::responses::{bad_request, internal_server_error};
use jokeapp::handlers::{Request, Response};
use jokeapp::infrastructure::Infrastructure;
use serde_json::Value;
use std::collections::HashMap;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

type Params = HashMap<String, String>;

pub fn router(infrastructure: Infrastructure) -> Router {
    let item_path = format!("/jokes/:{JOKE_ID_PARAM}");
    Router::new()
        .route("/jokes", get(index).post(create))
        .route(&item_path, get(show).put(update).delete(destroy))
        .with_state(infrastructure)
}

async fn index(State(infrastructure): State<Infrastructure>) -> HttpResponse {
    respond(jokes::index(&infrastructure, Request::new()).await)
}

async fn show(
    State(infrastructure): State<Infrastructure>,
    Path(params): Path<Params>,
) -> HttpResponse {
    let request = Request {
        params,
        data: None,
    };
    respond(jokes::show(&infrastructure, request).await)
}

async fn create(State(infrastructure): State<Infrastructure>, body: Bytes) -> HttpResponse {
    match request(Params::new(), &body) {
        Ok(request) => respond(jokes::create(&infrastructure, request).await),
        Err(response) => response,
    }
}

async fn update(
    State(infrastructure): State<Infrastructure>,
    Path(params): Path<Params>,
    body: Bytes,
) -> HttpResponse {
    match request(params, &body) {
        Ok(request) => respond(jokes::update(&infrastructure, request).await),
        Err(response) => response,
    }
}

async fn destroy(
    State(infrastructure): State<Infrastructure>,
    Path(params): Path<Params>,
) -> HttpResponse {
    let request = Request {
        params,
        data: None,
    };
    respond(jokes::destroy(&infrastructure, request).await)
}

/// Build a handler request. An empty body is no data; anything else must be JSON.
fn request(params: Params, body: &Bytes) -> std::result::Result<Request, HttpResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Request { params, data: None });
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(data) => Ok(Request {
            params,
            data: Some(data),
        }),
        Err(_) => Err(to_http(bad_request("Request body is not valid JSON"))),
    }
}

fn respond(result: jokeapp::error::Result<Response>) -> HttpResponse {
    match result {
        Ok(response) => to_http(response),
        Err(err) => {
            error!(target: "jokes::server", error = %err, "Request failed");
            to_http(internal_server_error())
        }
    }
}

fn to_http(response: Response) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match response.data {
        Some(data) if status != StatusCode::NO_CONTENT => (status, Json(data)).into_response(),
        _ => status.into_response(),
    }
}

struct Running {
    port: u16,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

/// A startable, stoppable HTTP server around [`router`].
pub struct Server {
    infrastructure: Infrastructure,
    running: Option<Running>,
}

impl Server {
    pub fn new(infrastructure: Infrastructure) -> Self {
        Self {
            infrastructure,
            running: None,
        }
    }

    /// Bind `port` on all interfaces and start serving. Port `0` picks a free port.
    pub async fn start(&mut self, port: u16) -> Result<()> {
        if self.running.is_some() {
            bail!("Server is already running");
        }

        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind port {port}"))?;
        let port = listener.local_addr()?.port();
        let app = router(self.infrastructure.clone());
        let (shutdown, signal) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = signal.await;
                })
                .await
        });

        info!(target: "jokes::server", port, "Server started");
        self.running = Some(Running {
            port,
            shutdown,
            task,
        });
        Ok(())
    }

    pub fn port(&self) -> Result<u16> {
        match &self.running {
            Some(running) => Ok(running.port),
            None => bail!("Server has not been started"),
        }
    }

    /// Stop accepting connections and wait for in-flight requests. No-op if not started.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(running) = self.running.take() else {
            return Ok(());
        };
        let _ = running.shutdown.send(());
        running.task.await??;
        info!(target: "jokes::server", port = running.port, "Server stopped");
        Ok(())
    }
}
