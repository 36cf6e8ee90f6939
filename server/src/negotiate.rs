//! Per-request choice between a JSON and an HTML response.
//!
//! # Design
//! `ResponseFormat` is extracted once from the request headers and handed to
//! the handler. The two encodings sit behind `Responder`, so a handler asks
//! for "the responder for this request" instead of branching on headers.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use items_core::{Item, NewItemInput};

use crate::error::ApiError;
use crate::pages;

const JSON_MIME: &str = "application/json";
const HTML_MIME: &str = "text/html";
pub(crate) const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// Where a successful HTML create lands.
pub const LIST_PAGE: &str = "/items";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Html,
}

impl ResponseFormat {
    /// `Accept` wins when it names JSON or HTML; otherwise a form body means
    /// a browser submission and anything else is treated as an API call.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accept = header_str(headers, header::ACCEPT);
        if accept.contains(JSON_MIME) {
            ResponseFormat::Json
        } else if accept.contains(HTML_MIME) {
            ResponseFormat::Html
        } else if is_form(headers) {
            ResponseFormat::Html
        } else {
            ResponseFormat::Json
        }
    }

    pub fn wants_json(self) -> bool {
        self == ResponseFormat::Json
    }

    pub fn responder(self) -> &'static dyn Responder {
        match self {
            ResponseFormat::Json => &JsonResponder,
            ResponseFormat::Html => &HtmlResponder,
        }
    }
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> &str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub(crate) fn is_form(headers: &HeaderMap) -> bool {
    header_str(headers, header::CONTENT_TYPE)
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_MIME))
}

/// Encodes handler outcomes for one response format.
pub trait Responder: Send + Sync {
    fn list(&self, items: Vec<Item>) -> Response;

    fn created(&self, item: Item) -> Response;

    /// `input` is what the caller submitted, kept so a form can be refilled.
    fn rejected(&self, input: &NewItemInput, error: ApiError) -> Response;
}

pub struct JsonResponder;

impl Responder for JsonResponder {
    fn list(&self, items: Vec<Item>) -> Response {
        Json(items).into_response()
    }

    fn created(&self, item: Item) -> Response {
        (StatusCode::CREATED, Json(item)).into_response()
    }

    fn rejected(&self, _input: &NewItemInput, error: ApiError) -> Response {
        error.into_response()
    }
}

pub struct HtmlResponder;

impl Responder for HtmlResponder {
    fn list(&self, items: Vec<Item>) -> Response {
        Html(pages::items_list(&items)).into_response()
    }

    // 302 so a browser reload after submitting re-fetches the list instead of
    // re-posting the form.
    fn created(&self, _item: Item) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, LIST_PAGE)]).into_response()
    }

    // The form itself carries the error; the status stays 200.
    fn rejected(&self, input: &NewItemInput, error: ApiError) -> Response {
        Html(pages::create_form(input, Some(&error.detail()))).into_response()
    }
}
