//! Select query builder
//!
//! `QueryBuilder` accumulates what the grammar needs to compile a select
//! statement: the table, the selected columns, an optional aggregate, the
//! plain `distinct` flag and the PostgreSQL `distinct on` expression.

use super::dialects::{DatabaseBackend, QueryError};
use super::grammar::{create_grammar, Grammar};
use std::fmt;
use std::sync::Arc;

/// A column in the select list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Column {
    /// Identifier wrapped by the dialect (`name`, `table.name`, `*`, `name as alias`)
    Name(String),
    /// Expression inserted verbatim
    Raw(String),
}

impl Column {
    pub fn name<S: Into<String>>(name: S) -> Self {
        Column::Name(name.into())
    }

    pub fn raw<S: Into<String>>(expression: S) -> Self {
        Column::Raw(expression.into())
    }

    /// The `*` wildcard
    pub fn all() -> Self {
        Column::Name("*".to_string())
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::Name(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::Name(name)
    }
}

impl From<&String> for Column {
    fn from(name: &String) -> Self {
        Column::Name(name.clone())
    }
}

/// Aggregate functions understood by the grammars
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
        }
    }
}

/// Aggregate descriptor; when set, the grammar compiles the aggregate
/// instead of the column list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregate {
    pub function: AggregateFunction,
    pub columns: Vec<Column>,
}

/// Select query builder bound to a grammar
#[derive(Clone)]
pub struct QueryBuilder {
    pub(crate) grammar: Arc<dyn Grammar>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Vec<Column>,
    pub(crate) aggregate: Option<Aggregate>,
    pub(crate) distinct: bool,
    pub(crate) distinct_on: Option<String>,
}

impl QueryBuilder {
    /// Create a new query builder for the specified database backend
    pub fn new(backend: DatabaseBackend) -> Self {
        Self::with_grammar(create_grammar(backend, ""))
    }

    /// Create a query builder that compiles with the given grammar
    pub fn with_grammar(grammar: Arc<dyn Grammar>) -> Self {
        QueryBuilder {
            grammar,
            table: None,
            columns: Vec::new(),
            aggregate: None,
            distinct: false,
            distinct_on: None,
        }
    }

    /// Set the table to query from
    pub fn from<S: Into<String>>(mut self, table: S) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the columns to select, replacing any previous selection
    ///
    /// An empty selection means "all columns"; the statement compiler
    /// substitutes `*`.
    pub fn select<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append columns to the current selection
    pub fn add_select<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append a raw expression to the selection
    pub fn select_raw<S: Into<String>>(mut self, expression: S) -> Self {
        self.columns.push(Column::raw(expression));
        self
    }

    /// Force the query to only return distinct results
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Deduplicate rows on `expression` (PostgreSQL `DISTINCT ON`)
    ///
    /// The expression is inserted into the SQL exactly as given, both inside
    /// `distinct on(...)` and as the first selected column. It is never
    /// escaped, so computed expressions such as `LOWER(name)` work; the caller
    /// must not pass untrusted input.
    ///
    /// Overwrites any previous expression. An empty string is stored but
    /// compiles as if no expression was set.
    pub fn distinct_on<S: Into<String>>(mut self, expression: S) -> Self {
        self.distinct_on = Some(expression.into());
        self
    }

    /// Remove the `distinct on` expression
    pub fn clear_distinct_on(mut self) -> Self {
        self.distinct_on = None;
        self
    }

    /// Turn the query into an aggregate query
    pub fn aggregate<I, C>(mut self, function: AggregateFunction, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        let mut columns: Vec<Column> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            columns.push(Column::all());
        }
        self.aggregate = Some(Aggregate { function, columns });
        self
    }

    /// Convert to COUNT(*) query
    pub fn count(self) -> Self {
        self.aggregate(AggregateFunction::Count, [Column::all()])
    }

    /// COUNT specific column
    pub fn count_column<C: Into<Column>>(self, column: C) -> Self {
        self.aggregate(AggregateFunction::Count, [column.into()])
    }

    pub fn sum<C: Into<Column>>(self, column: C) -> Self {
        self.aggregate(AggregateFunction::Sum, [column.into()])
    }

    pub fn avg<C: Into<Column>>(self, column: C) -> Self {
        self.aggregate(AggregateFunction::Avg, [column.into()])
    }

    pub fn min<C: Into<Column>>(self, column: C) -> Self {
        self.aggregate(AggregateFunction::Min, [column.into()])
    }

    pub fn max<C: Into<Column>>(self, column: C) -> Self {
        self.aggregate(AggregateFunction::Max, [column.into()])
    }

    /// Drop the aggregate so the column list is compiled again
    pub fn clear_aggregate(mut self) -> Self {
        self.aggregate = None;
        self
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn aggregate_spec(&self) -> Option<&Aggregate> {
        self.aggregate.as_ref()
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// The stored `distinct on` value, exactly as last set
    pub fn distinct_on_value(&self) -> Option<&str> {
        self.distinct_on.as_deref()
    }

    /// The `distinct on` expression the grammar will use
    ///
    /// Returns `None` when nothing is set or the stored value is empty.
    pub fn distinct_on_expression(&self) -> Option<&str> {
        self.distinct_on.as_deref().filter(|expr| !expr.is_empty())
    }

    pub fn grammar(&self) -> &dyn Grammar {
        self.grammar.as_ref()
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.grammar.dialect().backend()
    }

    /// Compile the select statement with this builder's grammar
    pub fn to_sql(&self) -> Result<String, QueryError> {
        self.grammar.compile_select(self)
    }
}

impl fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("backend", &self.backend())
            .field("table", &self.table)
            .field("columns", &self.columns)
            .field("aggregate", &self.aggregate)
            .field("distinct", &self.distinct)
            .field("distinct_on", &self.distinct_on)
            .finish()
    }
}
