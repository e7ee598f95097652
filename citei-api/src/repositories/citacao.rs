use citei_data::prelude::*;
use sqlx::SqlitePool;

use super::{search_key, TITLE_SEARCH};
use crate::models::{Citacao, CitacaoDraft, CitacaoFilter};

#[derive(Clone)]
pub struct CitacaoRepository {
    inner: SqlxRepository<Citacao>,
}

impl CitacaoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: SqlxRepository::new(pool),
        }
    }

    /// Number of citations stored in `colecao_id`.
    pub async fn count_by_colecao(&self, colecao_id: i64) -> Result<u64, DataError> {
        self.inner
            .count_where(self.inner.query().where_eq("colecao_id", colecao_id))
            .await
    }
}

impl Repository<Citacao> for CitacaoRepository {
    type Draft = CitacaoDraft;
    type Filter = CitacaoFilter;

    async fn find_by_id(&self, id: &i64) -> Result<Option<Citacao>, DataError> {
        self.inner.find_by_id(*id).await
    }

    async fn find_all(&self, filter: &CitacaoFilter) -> Result<Vec<Citacao>, DataError> {
        let mut query = self.inner.query();
        if let Some(colecao_id) = filter.colecao_id {
            query = query.where_eq("colecao_id", colecao_id);
        }
        if let Some(title) = &filter.title {
            query = query.where_contains(TITLE_SEARCH, &search_key(title));
        }
        self.inner.find_where(query.order_by("id", true)).await
    }

    async fn insert(&self, draft: &CitacaoDraft) -> Result<Citacao, DataError> {
        sqlx::query_as::<_, Citacao>(
            "INSERT INTO citacoes (title, title_search, author, content, colecao_id) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING id, title, author, content, colecao_id",
        )
        .bind(&draft.title)
        .bind(search_key(&draft.title))
        .bind(&draft.author)
        .bind(&draft.content)
        .bind(draft.colecao_id)
        .fetch_one(self.inner.pool())
        .await
        .map_err(SqlxErrorExt::into_data_error)
    }

    async fn update(&self, id: &i64, draft: &CitacaoDraft) -> Result<Option<Citacao>, DataError> {
        sqlx::query_as::<_, Citacao>(
            "UPDATE citacoes SET title = ?, title_search = ?, author = ?, content = ?, \
             colecao_id = ? WHERE id = ? \
             RETURNING id, title, author, content, colecao_id",
        )
        .bind(&draft.title)
        .bind(search_key(&draft.title))
        .bind(&draft.author)
        .bind(&draft.content)
        .bind(draft.colecao_id)
        .bind(id)
        .fetch_optional(self.inner.pool())
        .await
        .map_err(SqlxErrorExt::into_data_error)
    }

    async fn delete(&self, id: &i64) -> Result<bool, DataError> {
        self.inner.delete_by_id(*id).await
    }

    async fn exists(&self, id: &i64) -> Result<bool, DataError> {
        self.inner.exists(*id).await
    }
}
