use crate::entity::Entity;
use crate::error::{DataError, SqlxErrorExt};
use crate::query::{Param, QueryBuilder};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Pool, Sqlite};
use std::marker::PhantomData;

type SqliteQueryAs<'q, O> = sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;
type SqliteQueryScalar<'q, O> = sqlx::query::QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>;

/// A generic SQLite repository driven by [`Entity`] metadata.
///
/// Covers the statements that only need the table, id column and column
/// list (lookup, filtered listing, counting, deletion). Inserts and updates
/// are entity-specific and stay in the concrete repositories, which reuse
/// [`pool()`](Self::pool).
///
/// ```ignore
/// let repo = SqlxRepository::<Colecao>::new(pool.clone());
/// let colecao = repo.find_by_id(1).await?;
/// ```
pub struct SqlxRepository<T> {
    pool: Pool<Sqlite>,
    _marker: PhantomData<T>,
}

impl<T> SqlxRepository<T> {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Get the underlying pool reference.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

impl<T> SqlxRepository<T>
where
    T: Entity<Id = i64> + for<'r> sqlx::FromRow<'r, SqliteRow>,
{
    /// Create a `QueryBuilder` pre-configured for this entity's table.
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::new(T::table_name())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<T>, DataError> {
        let (sql, params) = self
            .query()
            .where_eq(T::id_column(), id)
            .limit(1)
            .build_select(T::columns());
        bind_all(sqlx::query_as::<_, T>(&sql), params)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    pub async fn find_where(&self, query: QueryBuilder) -> Result<Vec<T>, DataError> {
        let (sql, params) = query.build_select(T::columns());
        tracing::trace!(%sql, "select");
        bind_all(sqlx::query_as::<_, T>(&sql), params)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    pub async fn count_where(&self, query: QueryBuilder) -> Result<u64, DataError> {
        let (sql, params) = query.build_count();
        let count = bind_scalar(sqlx::query_scalar::<_, i64>(&sql), params)
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(count.max(0) as u64)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DataError> {
        let count = self
            .count_where(self.query().where_eq(T::id_column(), id))
            .await?;
        Ok(count > 0)
    }

    /// Delete by id, returning whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, DataError> {
        let (sql, params) = self.query().where_eq(T::id_column(), id).build_delete();
        let mut query = sqlx::query(&sql);
        for param in params {
            query = match param {
                Param::Integer(i) => query.bind(i),
                Param::Text(s) => query.bind(s),
            };
        }
        let result = query
            .execute(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
        Ok(result.rows_affected() > 0)
    }
}

impl<T> Clone for SqlxRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

fn bind_all<'q, O>(mut query: SqliteQueryAs<'q, O>, params: Vec<Param>) -> SqliteQueryAs<'q, O> {
    for param in params {
        query = match param {
            Param::Integer(i) => query.bind(i),
            Param::Text(s) => query.bind(s),
        };
    }
    query
}

fn bind_scalar<'q, O>(
    mut query: SqliteQueryScalar<'q, O>,
    params: Vec<Param>,
) -> SqliteQueryScalar<'q, O> {
    for param in params {
        query = match param {
            Param::Integer(i) => query.bind(i),
            Param::Text(s) => query.bind(s),
        };
    }
    query
}
