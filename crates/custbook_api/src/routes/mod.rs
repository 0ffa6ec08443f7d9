//! Router construction.
//!
//! | Method | Path                                | Handler                  |
//! |--------|-------------------------------------|--------------------------|
//! | GET    | `/api/health`                       | `health::health`         |
//! | POST   | `/api/customers`                    | `customers::create`      |
//! | GET    | `/api/customers`                    | `customers::list`        |
//! | GET    | `/api/customers/:id`                | `customers::get_one`     |
//! | PUT    | `/api/customers/:id`                | `customers::update`      |
//! | DELETE | `/api/customers/:id`                | `customers::remove`      |
//! | POST   | `/api/customers/:id/addresses`      | `addresses::create`      |
//! | GET    | `/api/customers/:id/addresses`      | `addresses::list`        |
//! | PUT    | `/api/addresses/:address_id`        | `addresses::update`      |
//! | DELETE | `/api/addresses/:address_id`        | `addresses::remove`      |

mod addresses;
mod customers;
mod health;

use crate::middleware::log_request;
use crate::state::AppState;
use axum::http::Method;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Builds the full router with CORS (any origin) and request logging.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes())
        .layer(axum::middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/customers", post(customers::create).get(customers::list))
        .route(
            "/customers/:id",
            get(customers::get_one)
                .put(customers::update)
                .delete(customers::remove),
        )
        .route(
            "/customers/:id/addresses",
            post(addresses::create).get(addresses::list),
        )
        .route(
            "/addresses/:address_id",
            put(addresses::update).delete(addresses::remove),
        )
}
