//! HTTP surface for custbook.
//!
//! # Responsibility
//! - Map REST verbs and paths onto core customer/address services.
//! - Serialize results as `{data}`, `{message}` or `{message, id}` envelopes.
//! - Map every failure to HTTP 400 `{error}`.
//!
//! # Invariants
//! - Handlers never touch SQL; they go through `custbook_core` services.
//! - Storage work runs on the blocking pool, never on the async executor.

mod error;
mod middleware;
mod response;
mod routes;
mod server;
mod state;

pub use error::{ApiError, ApiResult};
pub use response::{CreatedResponse, DataResponse, ErrorResponse, MessageResponse};
pub use routes::create_router;
pub use server::{serve, ServerConfig};
pub use state::AppState;
