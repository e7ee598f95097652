use citei_data::prelude::*;
use sqlx::SqlitePool;

use super::{search_key, TITLE_SEARCH};
use crate::models::{Colecao, ColecaoDraft, ColecaoFilter};

#[derive(Clone)]
pub struct ColecaoRepository {
    inner: SqlxRepository<Colecao>,
}

impl ColecaoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: SqlxRepository::new(pool),
        }
    }
}

impl Repository<Colecao> for ColecaoRepository {
    type Draft = ColecaoDraft;
    type Filter = ColecaoFilter;

    async fn find_by_id(&self, id: &i64) -> Result<Option<Colecao>, DataError> {
        self.inner.find_by_id(*id).await
    }

    async fn find_all(&self, filter: &ColecaoFilter) -> Result<Vec<Colecao>, DataError> {
        let mut query = self.inner.query();
        if let Some(title) = &filter.title {
            query = query.where_contains(TITLE_SEARCH, &search_key(title));
        }
        self.inner.find_where(query.order_by("id", true)).await
    }

    async fn insert(&self, draft: &ColecaoDraft) -> Result<Colecao, DataError> {
        sqlx::query_as::<_, Colecao>(
            "INSERT INTO colecoes (title, title_search, description) VALUES (?, ?, ?) \
             RETURNING id, title, description",
        )
        .bind(&draft.title)
        .bind(search_key(&draft.title))
        .bind(&draft.description)
        .fetch_one(self.inner.pool())
        .await
        .map_err(SqlxErrorExt::into_data_error)
    }

    async fn update(&self, id: &i64, draft: &ColecaoDraft) -> Result<Option<Colecao>, DataError> {
        sqlx::query_as::<_, Colecao>(
            "UPDATE colecoes SET title = ?, title_search = ?, description = ? WHERE id = ? \
             RETURNING id, title, description",
        )
        .bind(&draft.title)
        .bind(search_key(&draft.title))
        .bind(&draft.description)
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
