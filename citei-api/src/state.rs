use citei_core::prelude::*;
use sqlx::SqlitePool;

use crate::controllers::{CitacaoController, ColecaoController};
use crate::repositories::{CitacaoRepository, ColecaoRepository};
use crate::services::{CitacaoService, ColecaoService};
use crate::settings::ValidationSettings;

/// Shared application state, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub colecao_controller: ColecaoController,
    pub citacao_controller: CitacaoController,
}

impl AppState {
    /// Wire repositories, services and controllers on top of `pool`.
    pub fn new(pool: SqlitePool, validation: ValidationSettings) -> Self {
        let colecoes = ColecaoRepository::new(pool.clone());
        let citacoes = CitacaoRepository::new(pool.clone());

        let colecao_service = ColecaoService::new(colecoes.clone(), citacoes.clone());
        let citacao_service = CitacaoService::new(citacoes, colecoes);

        Self {
            pool,
            colecao_controller: ColecaoController::new(colecao_service, validation.colecao),
            citacao_controller: CitacaoController::new(citacao_service, validation.citacao),
        }
    }
}

impl FromRef<AppState> for ColecaoController {
    fn from_ref(state: &AppState) -> Self {
        state.colecao_controller.clone()
    }
}

impl FromRef<AppState> for CitacaoController {
    fn from_ref(state: &AppState) -> Self {
        state.citacao_controller.clone()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
