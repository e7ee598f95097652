use citei_core::prelude::*;

use super::MessageResponse;
use crate::models::{Citacao, CitacaoQuery, CitacaoRequest};
use crate::services::CitacaoService;

/// `/citacao` routes. Listing accepts `titulo` and `colecaoId` filters.
#[derive(Clone)]
pub struct CitacaoController {
    service: CitacaoService,
    validation_status: StatusCode,
}

impl CitacaoController {
    pub fn new(service: CitacaoService, validation_status: StatusCode) -> Self {
        Self {
            service,
            validation_status,
        }
    }

    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
        CitacaoController: FromRef<S>,
    {
        Router::new()
            .route("/citacao", get(Self::find_all).post(Self::create))
            .route(
                "/citacao/{id}",
                get(Self::find_by_id).put(Self::update).delete(Self::delete),
            )
    }

    /// An empty `titulo` lists everything.
    async fn find_all(
        State(ctrl): State<Self>,
        ValidatedQuery(query): ValidatedQuery<CitacaoQuery>,
    ) -> Result<Json<Vec<Citacao>>, HttpError> {
        let filter = query.or_reject(ctrl.validation_status)?.into_filter();
        Ok(Json(ctrl.service.find_all(&filter).await?))
    }

    async fn find_by_id(
        State(ctrl): State<Self>,
        Id(id): Id,
    ) -> Result<Json<Citacao>, HttpError> {
        Ok(Json(ctrl.service.find_by_id(id).await?))
    }

    async fn create(
        State(ctrl): State<Self>,
        ValidatedJson(body): ValidatedJson<CitacaoRequest>,
    ) -> Result<Json<Citacao>, HttpError> {
        let draft = body.or_reject(ctrl.validation_status)?.into_draft();
        Ok(Json(ctrl.service.create(draft).await?))
    }

    async fn update(
        State(ctrl): State<Self>,
        Id(id): Id,
        ValidatedJson(body): ValidatedJson<CitacaoRequest>,
    ) -> Result<Json<Citacao>, HttpError> {
        let draft = body.or_reject(ctrl.validation_status)?.into_draft();
        Ok(Json(ctrl.service.update(id, draft).await?))
    }

    async fn delete(
        State(ctrl): State<Self>,
        Id(id): Id,
    ) -> Result<Json<MessageResponse>, HttpError> {
        ctrl.service.delete(id).await?;
        Ok(Json(MessageResponse {
            message: "Citacao removida com sucesso!",
        }))
    }
}
