//! Request validation extractors.
//!
//! [`ValidatedJson`] and [`ValidatedQuery`] run before the handler body. They
//! never reject the request themselves: deserialization failures and `garde`
//! rule violations are collected into a [`ValidationResult`] that the handler
//! inspects, so each resource decides which status code a failed validation
//! maps to.
//!
//! ```ignore
//! async fn create(
//!     State(ctrl): State<ColecaoController>,
//!     ValidatedJson(body): ValidatedJson<ColecaoRequest>,
//! ) -> Result<Json<Colecao>, HttpError> {
//!     let payload = body.or_reject(ctrl.validation_status)?;
//!     ...
//! }
//! ```

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::convert::Infallible;

use crate::error::HttpError;

pub use garde::Validate;

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Ordered list of field errors produced by a validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors, in the order the rules were evaluated.
    pub fn array(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Field paths are reported with their camelCase JSON names.
    fn from_report(report: &garde::Report) -> Self {
        let mut result = Self::default();
        for (path, error) in report.iter() {
            let field = match path.to_string() {
                s if s.is_empty() => "value".to_string(),
                s => camel_case(&s),
            };
            result.push(FieldError::new(field, error.message(), "validation"));
        }
        result
    }
}

/// `colecao_id` -> `colecaoId`; dots and indices in nested paths are kept.
fn camel_case(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut upper_next = false;
    for c in path.chars() {
        match c {
            '_' if !out.is_empty() && !out.ends_with(|p: char| p == '.' || p == '[') => {
                upper_next = true
            }
            c if upper_next => {
                out.extend(c.to_uppercase());
                upper_next = false;
            }
            c => out.push(c),
        }
    }
    out
}

/// A parsed input together with the outcome of validating it.
#[derive(Debug)]
pub struct Validated<T> {
    value: Option<T>,
    result: ValidationResult,
}

impl<T> Validated<T>
where
    T: Validate,
    T::Context: Default,
{
    /// Run the `garde` rules of `value`.
    pub fn check(value: T) -> Self {
        let result = match value.validate() {
            Ok(()) => ValidationResult::default(),
            Err(report) => ValidationResult::from_report(&report),
        };
        Self {
            value: Some(value),
            result,
        }
    }
}

impl<T> Validated<T> {
    /// An input that could not even be parsed.
    pub fn rejected(error: FieldError) -> Self {
        let mut result = ValidationResult::default();
        result.push(error);
        Self {
            value: None,
            result,
        }
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn into_result(self) -> Result<T, ValidationResult> {
        match self.value {
            Some(value) if self.result.is_empty() => Ok(value),
            _ => Err(self.result),
        }
    }

    /// Unwrap the valid value or turn the errors into an [`HttpError`] with `status`.
    pub fn or_reject(self, status: StatusCode) -> Result<T, HttpError> {
        self.into_result()
            .map_err(|result| HttpError::validation(status, result.into_errors()))
    }
}

/// Validated JSON body.
pub struct ValidatedJson<T>(pub Validated<T>);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                return Ok(Self(Validated::rejected(FieldError::new(
                    "body",
                    rejection.body_text(),
                    "invalid_body",
                ))))
            }
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(Self(Validated::check(value))),
            Err(err) => Ok(Self(Validated::rejected(FieldError::new(
                "body",
                err.to_string(),
                "invalid_json",
            )))),
        }
    }
}

/// Validated query string.
pub struct ValidatedQuery<T>(pub Validated<T>);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(Self(Validated::check(value))),
            Err(rejection) => Ok(Self(Validated::rejected(FieldError::new(
                "query",
                rejection.body_text(),
                "invalid_query",
            )))),
        }
    }
}

/// Rejects strings made only of whitespace. Absent values are left to `required`.
pub fn not_blank(value: &Option<String>, _ctx: &()) -> garde::Result {
    match value {
        Some(s) if s.trim().is_empty() => Err(garde::Error::new("must not be blank")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Payload {
        #[garde(required, length(min = 1, max = 5), custom(not_blank))]
        name: Option<String>,
        #[garde(required, range(min = 1))]
        count: Option<i64>,
    }

    #[derive(Debug, serde::Deserialize, Validate)]
    struct Nested {
        #[garde(required)]
        parent_id: Option<i64>,
        #[garde(dive)]
        first_item: Payload,
    }

    #[test]
    fn valid_value_passes_through() {
        let validated = Validated::check(Payload {
            name: Some("abc".into()),
            count: Some(2),
        });
        assert!(validated.result().is_empty());
        let payload = validated.into_result().unwrap();
        assert_eq!(payload.count, Some(2));
    }

    #[test]
    fn violations_are_reported_per_field() {
        let validated = Validated::check(Payload {
            name: None,
            count: Some(0),
        });
        let fields: Vec<_> = validated
            .result()
            .array()
            .iter()
            .map(|e| e.field.clone())
            .collect();
        assert_eq!(fields, vec!["name", "count"]);
    }

    #[test]
    fn fields_use_camel_case_names() {
        let validated = Validated::check(Nested {
            parent_id: None,
            first_item: Payload {
                name: Some("ok".into()),
                count: None,
            },
        });
        let fields: Vec<_> = validated
            .result()
            .array()
            .iter()
            .map(|e| e.field.clone())
            .collect();
        assert_eq!(fields, vec!["parentId", "firstItem.count"]);
    }

    #[test]
    fn camel_case_keeps_path_separators() {
        assert_eq!(camel_case("colecao_id"), "colecaoId");
        assert_eq!(camel_case("items[0].author_name"), "items[0].authorName");
        assert_eq!(camel_case("titulo"), "titulo");
        assert_eq!(camel_case("_private"), "_private");
    }

    #[test]
    fn blank_string_is_rejected() {
        let validated = Validated::check(Payload {
            name: Some("   ".into()),
            count: Some(1),
        });
        let errors = validated.into_result().unwrap_err();
        assert_eq!(errors.array().len(), 1);
        assert_eq!(errors.array()[0].message, "must not be blank");
    }

    #[test]
    fn rejected_input_maps_to_requested_status() {
        let validated: Validated<Payload> =
            Validated::rejected(FieldError::new("body", "EOF", "invalid_json"));
        let err = validated.or_reject(StatusCode::UNPROCESSABLE_ENTITY).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
