use citei_data::Repository;
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Colecao, ColecaoDraft, ColecaoFilter};
use crate::repositories::{CitacaoRepository, ColecaoRepository};

#[derive(Clone)]
pub struct ColecaoService {
    colecoes: ColecaoRepository,
    citacoes: CitacaoRepository,
}

impl ColecaoService {
    pub fn new(colecoes: ColecaoRepository, citacoes: CitacaoRepository) -> Self {
        Self { colecoes, citacoes }
    }

    pub async fn find_all(&self, filter: &ColecaoFilter) -> ServiceResult<Vec<Colecao>> {
        Ok(self.colecoes.find_all(filter).await?)
    }

    pub async fn find_by_id(&self, id: i64) -> ServiceResult<Colecao> {
        self.colecoes
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, draft: ColecaoDraft) -> ServiceResult<Colecao> {
        let colecao = self.colecoes.insert(&draft).await?;
        info!(id = colecao.id, title = %colecao.title, "colecao created");
        Ok(colecao)
    }

    pub async fn update(&self, id: i64, draft: ColecaoDraft) -> ServiceResult<Colecao> {
        let colecao = self
            .colecoes
            .update(&id, &draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(id, "colecao updated");
        Ok(colecao)
    }

    /// Refuses to remove a collection that still holds citations.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        if !self.colecoes.exists(&id).await? {
            return Err(not_found(id));
        }
        let remaining = self.citacoes.count_by_colecao(id).await?;
        if remaining > 0 {
            return Err(ServiceError::Conflict(format!(
                "Colecao {id} still has {remaining} citacao(s)"
            )));
        }
        if !self.colecoes.delete(&id).await? {
            return Err(not_found(id));
        }
        info!(id, "colecao deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Colecao {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::models::CitacaoDraft;

    async fn service() -> (ColecaoService, CitacaoRepository) {
        let pool = memory_pool().await;
        let citacoes = CitacaoRepository::new(pool.clone());
        let service = ColecaoService::new(ColecaoRepository::new(pool), citacoes.clone());
        (service, citacoes)
    }

    fn draft(title: &str) -> ColecaoDraft {
        ColecaoDraft {
            title: title.into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_then_find() {
        let (service, _) = service().await;
        let created = service.create(draft("Poesia")).await.unwrap();
        assert_eq!(service.find_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_substring() {
        let (service, _) = service().await;
        service.create(draft("Poesia Moderna")).await.unwrap();
        service.create(draft("Filosofia")).await.unwrap();

        let filter = ColecaoFilter {
            title: Some("moder".into()),
        };
        let found = service.find_all(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Poesia Moderna");
    }

    #[tokio::test]
    async fn filter_folds_non_ascii_case() {
        let (service, _) = service().await;
        service.create(draft("ÉPOCA DE OURO")).await.unwrap();

        let filter = ColecaoFilter {
            title: Some("época".into()),
        };
        assert_eq!(service.find_all(&filter).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let (service, _) = service().await;
        let err = service.update(42, draft("x")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_with_citacoes_is_a_conflict() {
        let (service, citacoes) = service().await;
        let colecao = service.create(draft("Poesia")).await.unwrap();
        citacoes
            .insert(&CitacaoDraft {
                title: "Soneto".into(),
                author: None,
                content: None,
                colecao_id: colecao.id,
            })
            .await
            .unwrap();

        let err = service.delete(colecao.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert!(service.find_by_id(colecao.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let (service, _) = service().await;
        let colecao = service.create(draft("Poesia")).await.unwrap();
        service.delete(colecao.id).await.unwrap();
        assert!(matches!(
            service.delete(colecao.id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
