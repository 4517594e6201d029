//! # Jokeapp Architecture
//!
//! Jokeapp is a small joke-keeping service built as a **transport-agnostic library**.
//! The `jokes` binary puts it behind HTTP, but nothing in here knows about sockets,
//! status lines or process exit codes beyond the numbers a [`handlers::Response`] carries.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport (jokes binary, axum)                             │
//! │  - Routes, body parsing, turns handler errors into 500s     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Handlers (handlers/)                                       │
//! │  - Request in, Response out                                 │
//! │  - Validation failures become 400s, missing jokes 404s      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repo.rs) + validation (model.rs)               │
//! │  - Typed jokes, domain events                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Item store (store/)                                        │
//! │  - One JSON object per file, keyed by item id               │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers reach the lower layers only through [`infrastructure::Infrastructure`],
//! which bundles the id generator and the repository.
//!
//! ## Testing Strategy
//!
//! Every layer that touches the outside world has a null counterpart:
//! [`store::mem_backend::MemBackend`] for the file, [`ids::NullUuid`] for random ids.
//! [`infrastructure::Infrastructure::create_null`] wires both together, so handler
//! tests run without disk or randomness. [`events::EventRecorder`] captures what was
//! emitted along the way.
//!
//! 1. **Store** (`store/`): self-healing, ordering, events. File behaviour is covered
//!    against real temp dirs.
//! 2. **Handlers** (`handlers/`): status codes and bodies for each route.
//! 3. **Transport** (`jokes` binary): routing and body parsing via in-process requests.
//!
//! ## Module Overview
//!
//! - [`store`]: Item storage over a pluggable document backend
//! - [`events`]: Listener registry used for store and repository events
//! - [`model`]: `Joke`, `JokeId` and input validation
//! - [`repo`]: The joke repository
//! - [`ids`]: UUID generation, real or canned
//! - [`infrastructure`]: Dependency bundle handed to handlers
//! - [`handlers`]: The five joke handlers and response helpers
//! - [`error`]: Error types

pub mod error;
pub mod events;
pub mod handlers;
pub mod ids;
pub mod infrastructure;
pub mod model;
pub mod repo;
pub mod store;

#[cfg(test)]
mod test_utils;
