/// A fluent query builder for SQLite `SELECT` / `COUNT` / `DELETE` statements.
///
/// Values never end up in the SQL text; they are returned as [`Param`]s to be
/// bound in order.
///
/// ```ignore
/// let q = QueryBuilder::new("citacoes")
///     .where_eq("colecao_id", 3)
///     .where_contains("title", "amor")
///     .order_by("id", true);
/// let (sql, params) = q.build_select(&["id", "title"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Integer(i64),
    Text(String),
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Integer(value)
    }
}

/// Escape character used in `LIKE ... ESCAPE` clauses.
const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone)]
enum Condition {
    Eq(String, Param),
    /// Substring match. SQLite `LIKE` folds ASCII case only.
    Contains(String, String),
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    conditions: Vec<Condition>,
    order: Vec<(String, bool)>,
    limit_val: Option<u64>,
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: Vec::new(),
            order: Vec::new(),
            limit_val: None,
        }
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<Param>) -> Self {
        self.conditions
            .push(Condition::Eq(column.to_string(), value.into()));
        self
    }

    /// Match rows whose `column` contains `needle`. `%` and `_` in `needle`
    /// are matched literally. Non-ASCII letters are compared exactly, so
    /// callers wanting full case folding match a pre-folded column.
    pub fn where_contains(mut self, column: &str, needle: &str) -> Self {
        self.conditions
            .push(Condition::Contains(column.to_string(), needle.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order.push((column.to_string(), ascending));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit_val = Some(limit);
        self
    }

    /// Build a SELECT query returning `(sql, bind_values)`.
    pub fn build_select(&self, columns: &[&str]) -> (String, Vec<Param>) {
        let mut sql = format!("SELECT {} FROM {}", columns.join(", "), self.table);
        let params = self.append_where(&mut sql);
        self.append_order(&mut sql);
        if let Some(limit) = self.limit_val {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        (sql, params)
    }

    /// Build a COUNT query returning `(sql, bind_values)`.
    pub fn build_count(&self) -> (String, Vec<Param>) {
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let params = self.append_where(&mut sql);
        (sql, params)
    }

    /// Build a DELETE statement. Ordering and limits are ignored.
    pub fn build_delete(&self) -> (String, Vec<Param>) {
        let mut sql = format!("DELETE FROM {}", self.table);
        let params = self.append_where(&mut sql);
        (sql, params)
    }

    fn append_where(&self, sql: &mut String) -> Vec<Param> {
        let mut params = Vec::with_capacity(self.conditions.len());
        if self.conditions.is_empty() {
            return params;
        }
        let clauses: Vec<String> = self
            .conditions
            .iter()
            .map(|cond| match cond {
                Condition::Eq(col, val) => {
                    params.push(val.clone());
                    format!("{col} = ?")
                }
                Condition::Contains(col, needle) => {
                    params.push(Param::Text(format!("%{}%", escape_like(needle))));
                    format!("{col} LIKE ? ESCAPE '{LIKE_ESCAPE}'")
                }
            })
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        params
    }

    fn append_order(&self, sql: &mut String) {
        if self.order.is_empty() {
            return;
        }
        let clauses: Vec<_> = self
            .order
            .iter()
            .map(|(col, asc)| {
                if *asc {
                    format!("{col} ASC")
                } else {
                    format!("{col} DESC")
                }
            })
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&clauses.join(", "));
    }
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}
