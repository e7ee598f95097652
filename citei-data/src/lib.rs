//! # citei-data
//!
//! Data access layer: the [`Entity`] and [`Repository`] abstractions, a small
//! [`QueryBuilder`], and [`SqlxRepository`], which implements the
//! metadata-driven part of a repository on top of an SQLite pool.
//!
//! `sqlx::Error` is bridged into [`DataError`] with [`SqlxErrorExt`], and
//! `DataError` converts into `citei_core::HttpError` so handlers can use `?`.

pub mod crud;
pub mod entity;
pub mod error;
pub mod query;
pub mod repository;

pub use crud::SqlxRepository;
pub use entity::Entity;
pub use error::{DataError, SqlxErrorExt};
pub use query::{Param, QueryBuilder};
pub use repository::Repository;

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{DataError, Entity, QueryBuilder, Repository, SqlxErrorExt, SqlxRepository};
}
