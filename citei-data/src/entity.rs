/// Trait representing a database entity with a table name, id column, and column list.
///
/// ```ignore
/// impl Entity for Colecao {
///     type Id = i64;
///     fn table_name() -> &'static str { "colecoes" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["id", "title", "description"] }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    type Id: Send + Sync + 'static;

    fn table_name() -> &'static str;
    fn id_column() -> &'static str;
    fn columns() -> &'static [&'static str];
}
