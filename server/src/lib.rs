//! HTTP surface for the items service.
//!
//! # Overview
//! One axum router serves the JSON API under `/api/v1` and the HTML pages at
//! `/`, `/items` and `/create`. Both surfaces share one `ItemStore`.
//!
//! # Design
//! - `negotiate` picks JSON or HTML once per request; handlers receive the
//!   answer as an extractor and delegate encoding to its `Responder`.
//! - `bind` decodes JSON or form bodies outside of any store lock.
//! - `middleware` adds panic recovery, request ids, security headers, CORS
//!   and trailing-slash redirects around every route, fallback included.
//! - Errors are `ApiError` values converted into responses at the handler
//!   boundary; none escape a request.

pub mod bind;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod negotiate;
pub mod pages;

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use items_core::ItemStore;
use tokio::net::TcpListener;

pub use config::{Config, LogFormat};
pub use error::{ApiError, ErrorBody};
pub use handlers::{Deleted, SharedStore};
pub use items_core::{Item, NewItemInput};
pub use negotiate::ResponseFormat;

pub fn app() -> Router {
    app_with_store(Arc::new(ItemStore::new()))
}

pub fn app_with_store(store: SharedStore) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::home_page))
        .route("/items", get(handlers::items_page))
        .route("/create", get(handlers::create_page))
        .route(
            "/api/v1/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/api/v1/items/{id}",
            get(handlers::get_item).delete(handlers::delete_item),
        )
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 page not found") });
    middleware::apply(routes).with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
