use citei_core::prelude::*;

use super::MessageResponse;
use crate::models::{Colecao, ColecaoQuery, ColecaoRequest};
use crate::services::ColecaoService;

/// `/colecao` routes.
#[derive(Clone)]
pub struct ColecaoController {
    service: ColecaoService,
    validation_status: StatusCode,
}

impl ColecaoController {
    pub fn new(service: ColecaoService, validation_status: StatusCode) -> Self {
        Self {
            service,
            validation_status,
        }
    }

    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
        ColecaoController: FromRef<S>,
    {
        Router::new()
            .route("/colecao", get(Self::find_all).post(Self::create))
            .route(
                "/colecao/{id}",
                get(Self::find_by_id).put(Self::update).delete(Self::delete),
            )
    }

    async fn find_all(
        State(ctrl): State<Self>,
        ValidatedQuery(query): ValidatedQuery<ColecaoQuery>,
    ) -> Result<Json<Vec<Colecao>>, HttpError> {
        let filter = query.or_reject(ctrl.validation_status)?.into_filter();
        Ok(Json(ctrl.service.find_all(&filter).await?))
    }

    async fn find_by_id(
        State(ctrl): State<Self>,
        Id(id): Id,
    ) -> Result<Json<Colecao>, HttpError> {
        Ok(Json(ctrl.service.find_by_id(id).await?))
    }

    async fn create(
        State(ctrl): State<Self>,
        ValidatedJson(body): ValidatedJson<ColecaoRequest>,
    ) -> Result<Json<Colecao>, HttpError> {
        let draft = body.or_reject(ctrl.validation_status)?.into_draft();
        Ok(Json(ctrl.service.create(draft).await?))
    }

    async fn update(
        State(ctrl): State<Self>,
        Id(id): Id,
        ValidatedJson(body): ValidatedJson<ColecaoRequest>,
    ) -> Result<Json<Colecao>, HttpError> {
        let draft = body.or_reject(ctrl.validation_status)?.into_draft();
        Ok(Json(ctrl.service.update(id, draft).await?))
    }

    async fn delete(
        State(ctrl): State<Self>,
        Id(id): Id,
    ) -> Result<Json<MessageResponse>, HttpError> {
        ctrl.service.delete(id).await?;
        Ok(Json(MessageResponse {
            message: "Colecao removida com sucesso!",
        }))
    }
}
