//! # citei-api
//!
//! REST API for citations (`/citacao`) grouped into collections (`/colecao`).
//! Each resource is a controller over a service over a repository; the
//! controllers are plain axum handlers registered on an [`AppBuilder`].

pub mod controllers;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod state;

use citei_core::prelude::*;

use crate::controllers::{CitacaoController, ColecaoController};
use crate::settings::{DatabaseSettings, ValidationSettings};
use crate::state::AppState;

/// Register the resource routes and the cross-cutting plugins.
pub fn app(state: AppState) -> AppBuilder<AppState> {
    AppBuilder::new(state)
        .with(Health)
        .with(Cors::permissive())
        .register_routes(ColecaoController::routes())
        .register_routes(CitacaoController::routes())
        .with(ErrorHandling)
}

/// Connect and migrate the database, then build the state from `config`.
pub async fn bootstrap(config: &CiteiConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let database: DatabaseSettings = config.section()?;
    let validation: ValidationSettings = config.section()?;

    let pool = db::connect(&database).await?;
    db::migrate(&pool).await?;

    Ok(AppState::new(pool, validation))
}
