use rustf_dbext::query::{Column, DatabaseBackend, QueryBuilder};

fn raw(columns: &[&str]) -> Vec<Column> {
    columns.iter().map(|c| Column::raw(*c)).collect()
}

fn compile(query: &QueryBuilder, columns: &[Column]) -> Option<String> {
    query.grammar().compile_columns(query, columns)
}

#[test]
fn test_distinct_on_scenario() {
    let query = QueryBuilder::new(DatabaseBackend::Postgres).distinct_on("user_id");

    assert_eq!(
        compile(&query, &raw(&["user_id", "name"])).as_deref(),
        Some("select distinct on(user_id) user_id, user_id, name")
    );
}

#[test]
fn test_distinct_scenario() {
    let query = QueryBuilder::new(DatabaseBackend::Postgres).distinct();

    assert_eq!(
        compile(&query, &raw(&["name"])).as_deref(),
        Some("select distinct name")
    );
}

#[test]
fn test_plain_empty_scenario() {
    let query = QueryBuilder::new(DatabaseBackend::Postgres);
    assert_eq!(compile(&query, &[]).as_deref(), Some("select "));
}

#[test]
fn test_distinct_on_exact_form_for_many_inputs() {
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("id", vec![]),
        ("LOWER(name)", vec!["name", "email"]),
        ("orders.user_id", vec!["orders.*"]),
        ("a, b", vec!["a", "a", "b"]),
    ];

    for (expr, columns) in &cases {
        let query = QueryBuilder::new(DatabaseBackend::Postgres)
            .distinct()
            .distinct_on(*expr);
        let rendered = columns.join(", ");

        assert_eq!(
            compile(&query, &raw(columns)),
            Some(format!(
                "select distinct on({}) {}, {}",
                expr, expr, rendered
            ))
        );
    }
}

#[test]
fn test_aggregate_always_absent() {
    for distinct in [false, true] {
        for distinct_on in [None, Some(""), Some("user_id")] {
            let mut query = QueryBuilder::new(DatabaseBackend::Postgres).count();
            if distinct {
                query = query.distinct();
            }
            if let Some(expr) = distinct_on {
                query = query.distinct_on(expr);
            }

            assert_eq!(compile(&query, &raw(&["id", "name"])), None);
            assert_eq!(compile(&query, &[]), None);
        }
    }
}

#[test]
fn test_columns_are_quoted_by_dialect() {
    let query = QueryBuilder::new(DatabaseBackend::Postgres).distinct_on("user_id");
    let columns = vec![Column::name("user_id"), Column::name("name")];

    assert_eq!(
        compile(&query, &columns).as_deref(),
        Some(r#"select distinct on(user_id) user_id, "user_id", "name""#)
    );
}

#[test]
fn test_full_statement_with_distinct_on() {
    let sql = QueryBuilder::new(DatabaseBackend::Postgres)
        .from("events")
        .distinct_on("session_id")
        .select(vec!["session_id", "created_at"])
        .to_sql()
        .unwrap();

    assert_eq!(
        sql,
        r#"select distinct on(session_id) session_id, "session_id", "created_at" from "events""#
    );
}

#[test]
fn test_full_statement_defaults_to_wildcard() {
    let sql = QueryBuilder::new(DatabaseBackend::Postgres)
        .from("events")
        .distinct_on("session_id")
        .to_sql()
        .unwrap();

    assert_eq!(
        sql,
        r#"select distinct on(session_id) session_id, * from "events""#
    );
}

#[test]
fn test_full_statement_aggregate() {
    let sql = QueryBuilder::new(DatabaseBackend::Postgres)
        .from("events")
        .distinct_on("session_id")
        .select(vec!["session_id"])
        .count()
        .to_sql()
        .unwrap();

    assert_eq!(sql, r#"select count(*) as aggregate from "events""#);
}

#[test]
fn test_missing_table() {
    let result = QueryBuilder::new(DatabaseBackend::Postgres)
        .distinct_on("id")
        .to_sql();

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("from"));
}

#[test]
fn test_cleared_distinct_on_uses_distinct() {
    let sql = QueryBuilder::new(DatabaseBackend::Postgres)
        .from("users")
        .distinct()
        .distinct_on("email")
        .clear_distinct_on()
        .select(vec!["email"])
        .to_sql()
        .unwrap();

    assert_eq!(sql, r#"select distinct "email" from "users""#);
}
