use citei_data::{DataError, Repository};
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Citacao, CitacaoDraft, CitacaoFilter};
use crate::repositories::{CitacaoRepository, ColecaoRepository};

#[derive(Clone)]
pub struct CitacaoService {
    citacoes: CitacaoRepository,
    colecoes: ColecaoRepository,
}

impl CitacaoService {
    pub fn new(citacoes: CitacaoRepository, colecoes: ColecaoRepository) -> Self {
        Self { citacoes, colecoes }
    }

    pub async fn find_all(&self, filter: &CitacaoFilter) -> ServiceResult<Vec<Citacao>> {
        Ok(self.citacoes.find_all(filter).await?)
    }

    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Citacao> {
        self.citacoes
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, draft: CitacaoDraft) -> ServiceResult<Citacao> {
        self.ensure_colecao(draft.colecao_id).await?;
        let citacao = self
            .citacoes
            .insert(&draft)
            .await
            .map_err(|err| reference_error(err, draft.colecao_id))?;
        info!(id = citacao.id, colecao_id = citacao.colecao_id, "citacao created");
        Ok(citacao)
    }

    pub async fn update(&self, id: i64, draft: CitacaoDraft) -> ServiceResult<Citacao> {
        if !self.citacoes.exists(&id).await? {
            return Err(not_found(id));
        }
        self.ensure_colecao(draft.colecao_id).await?;
        let citacao = self
            .citacoes
            .update(&id, &draft)
            .await
            .map_err(|err| reference_error(err, draft.colecao_id))?
            .ok_or_else(|| not_found(id))?;
        info!(id, colecao_id = citacao.colecao_id, "citacao updated");
        Ok(citacao)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.citacoes.delete(&id).await? {
            return Err(not_found(id));
        }
        info!(id, "citacao deleted");
        Ok(())
    }

    async fn ensure_colecao(&self, colecao_id: i64) -> ServiceResult<()> {
        if self.colecoes.exists(&colecao_id).await? {
            Ok(())
        } else {
            Err(missing_colecao(colecao_id))
        }
    }
}

fn missing_colecao(colecao_id: i64) -> ServiceError {
    ServiceError::InvalidReference(format!("Colecao {colecao_id} does not exist"))
}

/// The collection can vanish between the existence check and the write; the
/// foreign key then rejects the row.
fn reference_error(err: DataError, colecao_id: i64) -> ServiceError {
    match err {
        DataError::Constraint(_) => missing_colecao(colecao_id),
        other => other.into(),
    }
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Citacao {id} not found"))
}
