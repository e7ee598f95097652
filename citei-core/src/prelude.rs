//! Re-exports of the most commonly used types.

pub use crate::builder::AppBuilder;
pub use crate::config::{CiteiConfig, ConfigError, ConfigProperties};
pub use crate::error::HttpError;
pub use crate::params::Id;
pub use crate::plugin::Plugin;
pub use crate::plugins::{Cors, ErrorHandling, Health, Tracing};
pub use crate::validation::{
    not_blank, FieldError, Validate, Validated, ValidatedJson, ValidatedQuery, ValidationResult,
};

pub use axum::extract::{FromRef, State};
pub use axum::http::StatusCode;
pub use axum::response::{IntoResponse, Response};
pub use axum::routing::{delete, get, post, put};
pub use axum::{Json, Router};
