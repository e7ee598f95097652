//! # citei-core
//!
//! HTTP runtime shared by the Citei services: an [`AppBuilder`] with
//! [`Plugin`]s, the [`HttpError`] type that every handler funnels its failures
//! through, validation extractors, and layered configuration.

pub mod builder;
pub mod config;
pub mod error;
pub mod layers;
pub mod params;
pub mod plugin;
pub mod plugins;
pub mod prelude;
pub mod validation;

pub use builder::AppBuilder;
pub use config::{CiteiConfig, ConfigError, ConfigProperties, ConfigValue, FromConfigValue};
pub use error::{error_response, HttpError};
pub use layers::{catch_panic_layer, default_cors, default_trace, init_tracing};
pub use params::Id;
pub use plugin::Plugin;
pub use validation::{FieldError, Validated, ValidatedJson, ValidatedQuery, ValidationResult};

/// Re-export of axum so downstream crates share one version.
pub use axum;
