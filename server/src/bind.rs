//! Decoding of create payloads.
//!
//! Form bodies and JSON bodies bind to the same `NewItemInput`. A decode error
//! is not a rejection: it is handed to the handler, which answers in the
//! negotiated format like any other invalid input.

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, Request},
    Form, Json,
};
use items_core::NewItemInput;
use serde::Deserialize;

use crate::error::ApiError;
use crate::negotiate::is_form;

/// Outcome of binding the request body.
#[derive(Debug)]
pub struct CreatePayload(pub Result<NewItemInput, ApiError>);

/// Browser form fields. An unchecked checkbox is simply absent.
#[derive(Debug, Default, Deserialize)]
struct FormInput {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "isActive")]
    is_active: Option<String>,
}

impl From<FormInput> for NewItemInput {
    fn from(form: FormInput) -> Self {
        NewItemInput {
            name: form.name,
            is_active: form.is_active.as_deref().is_some_and(checkbox_on),
        }
    }
}

fn checkbox_on(value: &str) -> bool {
    ["on", "true", "1", "yes"]
        .iter()
        .any(|truthy| value.trim().eq_ignore_ascii_case(truthy))
}

impl<S> FromRequest<S> for CreatePayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bound = if is_form(req.headers()) {
            Form::<FormInput>::from_request(req, state)
                .await
                .map(|Form(form)| NewItemInput::from(form))
                .map_err(|rejection| ApiError::BindingFailed(rejection.body_text()))
        } else {
            Json::<NewItemInput>::from_request(req, state)
                .await
                .map(|Json(input)| input)
                .map_err(|rejection| ApiError::BindingFailed(rejection.body_text()))
        };
        Ok(CreatePayload(bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{self, header},
    };

    async fn bind(content_type: &str, body: &'static str) -> Result<NewItemInput, ApiError> {
        let req = http::Request::builder()
            .method("POST")
            .uri("/api/v1/items")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        let CreatePayload(bound) = CreatePayload::from_request(req, &()).await.unwrap();
        bound
    }

    #[tokio::test]
    async fn binds_json_body() {
        let input = bind("application/json", r#"{"name":"Foo","isActive":true}"#)
            .await
            .unwrap();
        assert_eq!(input.name, "Foo");
        assert!(input.is_active);
    }

    #[tokio::test]
    async fn binds_form_body_with_checked_box() {
        let input = bind("application/x-www-form-urlencoded", "name=Foo&isActive=on")
            .await
            .unwrap();
        assert_eq!(input.name, "Foo");
        assert!(input.is_active);
    }

    #[tokio::test]
    async fn unchecked_box_is_inactive() {
        let input = bind("application/x-www-form-urlencoded", "name=Bar")
            .await
            .unwrap();
        assert!(!input.is_active);
    }

    #[tokio::test]
    async fn missing_name_binds_as_empty() {
        let input = bind("application/json", "{}").await.unwrap();
        assert!(input.name.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_a_binding_failure() {
        let err = bind("application/json", "{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::BindingFailed(_)));
    }

    #[tokio::test]
    async fn unsupported_content_type_is_a_binding_failure() {
        let err = bind("text/plain", "name=Foo").await.unwrap_err();
        assert!(matches!(err, ApiError::BindingFailed(_)));
    }

    #[test]
    fn checkbox_values() {
        assert!(checkbox_on("on"));
        assert!(checkbox_on("TRUE"));
        assert!(!checkbox_on("off"));
        assert!(!checkbox_on(""));
    }
}
