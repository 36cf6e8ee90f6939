use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Response},
    Json,
};
use items_core::{validate, Item, ItemId, ItemStore, NewItemInput};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bind::CreatePayload;
use crate::error::ApiError;
use crate::negotiate::ResponseFormat;
use crate::pages;

pub type SharedStore = Arc<ItemStore>;

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    /// Sent as a string; existing clients read it that way.
    pub id: String,
}

fn parse_id(text: &str) -> Result<ItemId, ApiError> {
    text.parse().map_err(|_| ApiError::MalformedIdentifier)
}

pub async fn list_items(State(store): State<SharedStore>, format: ResponseFormat) -> Response {
    format.responder().list(store.list())
}

pub async fn get_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(store.get(id)?))
}

pub async fn create_item(
    State(store): State<SharedStore>,
    format: ResponseFormat,
    CreatePayload(bound): CreatePayload,
) -> Response {
    let responder = format.responder();
    let input = match bound {
        Ok(input) => input,
        Err(err) => {
            debug!(error = %err, ?format, "create payload could not be bound");
            return responder.rejected(&NewItemInput::default(), err);
        }
    };
    let valid = match validate(&input) {
        Ok(valid) => valid,
        Err(failure) => {
            debug!(%failure, ?format, "create payload rejected");
            return responder.rejected(&input, failure.into());
        }
    };
    let item = store.create(valid);
    info!(id = item.id, name = %item.name, "item created");
    responder.created(item)
}

pub async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError> {
    let id = parse_id(&id)?;
    store.delete(id)?;
    info!(id, "item deleted");
    Ok(Json(Deleted {
        message: "Item deleted successfully".to_string(),
        id: id.to_string(),
    }))
}

pub async fn home_page() -> Html<String> {
    Html(pages::home())
}

pub async fn items_page(State(store): State<SharedStore>) -> Response {
    ResponseFormat::Html.responder().list(store.list())
}

pub async fn create_page() -> Html<String> {
    Html(pages::create_form(&NewItemInput::default(), None))
}
