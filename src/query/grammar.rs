//! Select statement grammars
//!
//! A grammar turns a `QueryBuilder` into SQL text for one database. The
//! provided methods of [`Grammar`] implement the common pipeline (wrapping,
//! aggregates, `from`, statement assembly); `compile_columns` is the hook a
//! grammar overrides to change how the select list is introduced.

use super::builder::{Aggregate, Column, QueryBuilder};
use super::dialects::{
    create_dialect, DatabaseBackend, PostgresDialect, QueryError, SqlDialect,
};
use std::sync::Arc;

/// Compiles select statements for a specific dialect
pub trait Grammar: Send + Sync {
    /// Dialect used to quote identifiers
    fn dialect(&self) -> &dyn SqlDialect;

    /// Prefix prepended to every table name
    fn table_prefix(&self) -> &str;

    /// Compile the "select *" portion of the query
    ///
    /// Returns `None` for aggregate queries: the aggregate compiler builds the
    /// whole select clause for those.
    fn compile_columns(&self, query: &QueryBuilder, columns: &[Column]) -> Option<String> {
        if query.aggregate_spec().is_some() {
            return None;
        }

        let select = if query.is_distinct() {
            "select distinct "
        } else {
            "select "
        };

        Some(format!("{}{}", select, self.columnize(columns)))
    }

    /// Compile an aggregate select clause, e.g. `select count(*) as aggregate`
    fn compile_aggregate(&self, query: &QueryBuilder, aggregate: &Aggregate) -> String {
        let mut column = self.columnize(&aggregate.columns);

        if query.is_distinct() && column != "*" {
            column = format!("distinct {}", column);
        }

        format!(
            "select {}({}) as aggregate",
            aggregate.function.as_sql(),
            column
        )
    }

    fn compile_from(&self, table: &str) -> String {
        format!("from {}", self.wrap_table(table))
    }

    /// Assemble the complete select statement
    fn compile_select(&self, query: &QueryBuilder) -> Result<String, QueryError> {
        let table = query.table().ok_or_else(|| QueryError::MissingClause {
            clause: "from".to_string(),
        })?;

        let select = match query.aggregate_spec() {
            Some(aggregate) => self.compile_aggregate(query, aggregate),
            None => {
                let wildcard = [Column::all()];
                let columns = if query.columns().is_empty() {
                    &wildcard[..]
                } else {
                    query.columns()
                };
                self.compile_columns(query, columns).unwrap_or_default()
            }
        };

        let sql = format!("{} {}", select, self.compile_from(table));

        #[cfg(debug_assertions)]
        log::debug!("{:?} select SQL: {}", self.dialect().backend(), sql);

        Ok(sql)
    }

    /// Comma-join wrapped columns, preserving order and duplicates
    fn columnize(&self, columns: &[Column]) -> String {
        columns
            .iter()
            .map(|column| self.wrap(column))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Wrap a single column for this dialect
    fn wrap(&self, column: &Column) -> String {
        match column {
            Column::Raw(expression) => expression.clone(),
            Column::Name(name) => match split_alias(name) {
                Some((value, alias)) => format!(
                    "{} as {}",
                    self.wrap_segment(value),
                    self.dialect().quote_identifier(alias)
                ),
                None => self.wrap_segment(name),
            },
        }
    }

    /// Wrap an identifier, leaving the `*` wildcard alone
    fn wrap_segment(&self, value: &str) -> String {
        if value == "*" {
            value.to_string()
        } else {
            self.dialect().quote_identifier(value)
        }
    }

    /// Wrap a table name with the table prefix applied
    fn wrap_table(&self, table: &str) -> String {
        self.dialect()
            .quote_identifier(&format!("{}{}", self.table_prefix(), table))
    }
}

/// Split `value as alias` (case-insensitive) into its two halves
fn split_alias(name: &str) -> Option<(&str, &str)> {
    let lowered = name.to_ascii_lowercase();
    lowered
        .find(" as ")
        .map(|idx| (name[..idx].trim(), name[idx + 4..].trim()))
}

/// Grammar shared by the MySQL, SQLite and SQL Server connections
pub struct StandardGrammar {
    dialect: Box<dyn SqlDialect>,
    table_prefix: String,
}

impl StandardGrammar {
    pub fn new(backend: DatabaseBackend) -> Self {
        Self {
            dialect: create_dialect(backend),
            table_prefix: String::new(),
        }
    }

    pub fn with_table_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.table_prefix = prefix.into();
        self
    }
}

impl Grammar for StandardGrammar {
    fn dialect(&self) -> &dyn SqlDialect {
        self.dialect.as_ref()
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}

/// PostgreSQL grammar with `DISTINCT ON` support
pub struct PostgresGrammar {
    dialect: PostgresDialect,
    table_prefix: String,
}

impl PostgresGrammar {
    pub fn new() -> Self {
        Self {
            dialect: PostgresDialect::new(),
            table_prefix: String::new(),
        }
    }

    pub fn with_table_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.table_prefix = prefix.into();
        self
    }
}

impl Default for PostgresGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar for PostgresGrammar {
    fn dialect(&self) -> &dyn SqlDialect {
        &self.dialect
    }

    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }

    fn compile_columns(&self, query: &QueryBuilder, columns: &[Column]) -> Option<String> {
        if query.aggregate_spec().is_some() {
            return None;
        }

        // The distinct-on expression must also lead the select list
        let select = match query.distinct_on_expression() {
            Some(expr) => format!("select distinct on({expr}) {expr}, "),
            None if query.is_distinct() => "select distinct ".to_string(),
            None => "select ".to_string(),
        };

        Some(format!("{}{}", select, self.columnize(columns)))
    }
}

/// Factory function to create the grammar for a database backend
pub fn create_grammar(backend: DatabaseBackend, table_prefix: &str) -> Arc<dyn Grammar> {
    match backend {
        DatabaseBackend::Postgres => {
            Arc::new(PostgresGrammar::new().with_table_prefix(table_prefix))
        }
        other => Arc::new(StandardGrammar::new(other).with_table_prefix(table_prefix)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pg() -> QueryBuilder {
        QueryBuilder::new(DatabaseBackend::Postgres)
    }

    fn cols(names: &[&str]) -> Vec<Column> {
        names.iter().map(|n| Column::name(*n)).collect()
    }

    #[test]
    fn test_distinct_on_prefix() {
        let query = pg().distinct_on("user_id");
        let sql = query
            .grammar()
            .compile_columns(&query, &cols(&["user_id", "name"]));

        assert_eq!(
            sql.as_deref(),
            Some(r#"select distinct on(user_id) user_id, "user_id", "name""#)
        );
    }

    #[test]
    fn test_distinct_on_beats_distinct() {
        let query = pg().distinct().distinct_on("user_id");
        let sql = query
            .grammar()
            .compile_columns(&query, &cols(&["name"]))
            .unwrap();

        assert_eq!(sql, r#"select distinct on(user_id) user_id, "name""#);
        assert_eq!(sql.matches("select").count(), 1);
    }

    #[test]
    fn test_empty_distinct_on_falls_through() {
        let query = pg().distinct().distinct_on("");
        let sql = query.grammar().compile_columns(&query, &cols(&["name"]));
        assert_eq!(sql.as_deref(), Some(r#"select distinct "name""#));

        let query = pg().distinct_on("");
        let sql = query.grammar().compile_columns(&query, &cols(&["name"]));
        assert_eq!(sql.as_deref(), Some(r#"select "name""#));
    }

    #[test]
    fn test_aggregate_short_circuits() {
        let query = pg().distinct().distinct_on("user_id").count();
        assert_eq!(query.grammar().compile_columns(&query, &cols(&["id"])), None);

        let query = QueryBuilder::new(DatabaseBackend::MySQL).count();
        assert_eq!(query.grammar().compile_columns(&query, &[]), None);
    }

    #[test]
    fn test_empty_columns_render_empty() {
        let query = pg();
        assert_eq!(
            query.grammar().compile_columns(&query, &[]).as_deref(),
            Some("select ")
        );

        let query = pg().distinct();
        assert_eq!(
            query.grammar().compile_columns(&query, &[]).as_deref(),
            Some("select distinct ")
        );
    }

    #[test]
    fn test_standard_grammar_ignores_distinct_on() {
        let query = QueryBuilder::new(DatabaseBackend::MySQL).distinct_on("user_id");
        let sql = query.grammar().compile_columns(&query, &cols(&["name"]));

        assert_eq!(sql.as_deref(), Some("select `name`"));
    }

    #[test]
    fn test_wrap_alias_and_wildcard() {
        let grammar = PostgresGrammar::new();

        assert_eq!(grammar.wrap(&Column::name("*")), "*");
        assert_eq!(grammar.wrap(&Column::name("users.*")), "users.*");
        assert_eq!(
            grammar.wrap(&Column::name("name AS display")),
            r#""name" as "display""#
        );
        assert_eq!(grammar.wrap(&Column::raw("LOWER(name)")), "LOWER(name)");
    }

    #[test]
    fn test_split_alias() {
        assert_eq!(split_alias("a as b"), Some(("a", "b")));
        assert_eq!(split_alias("a As  b"), Some(("a", "b")));
        assert_eq!(split_alias("alias"), None);
    }

    #[test]
    fn test_compile_aggregate_distinct_column() {
        let query = pg().distinct().count_column("user_id");
        let aggregate = query.aggregate_spec().unwrap();

        assert_eq!(
            query.grammar().compile_aggregate(&query, aggregate),
            r#"select count(distinct "user_id") as aggregate"#
        );
    }

    #[test]
    fn test_compile_aggregate_distinct_wildcard() {
        let query = pg().distinct().count();
        let aggregate = query.aggregate_spec().unwrap();

        assert_eq!(
            query.grammar().compile_aggregate(&query, aggregate),
            "select count(*) as aggregate"
        );
    }

    #[test]
    fn test_table_prefix() {
        let grammar = create_grammar(DatabaseBackend::SQLite, "app_");
        assert_eq!(grammar.wrap_table("users"), r#""app_users""#);
        assert_eq!(grammar.table_prefix(), "app_");
    }

    #[test]
    fn test_create_grammar_postgres_type() {
        let grammar = create_grammar(DatabaseBackend::Postgres, "");
        assert_eq!(grammar.dialect().backend(), DatabaseBackend::Postgres);

        let query = QueryBuilder::with_grammar(grammar).distinct_on("id");
        let sql = query.grammar().compile_columns(&query, &[]).unwrap();
        assert!(sql.starts_with("select distinct on(id) id, "));
    }
}
