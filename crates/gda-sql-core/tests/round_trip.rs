//! Rendering tests: parse, render, and check the rendered text is a fixed
//! point of parse-then-render.

mod common;
use common::*;

#[test]
fn renders_lower_case_with_grouped_where() {
    assert_eq!(
        round_trip(
            "SELECT DISTINCT a AS x, t.b FROM t AS tt, u \
             WHERE a = 1 OR NOT b LIKE 'x%' ORDER BY a DESC, 2 GROUP BY t.b"
        ),
        "select distinct a as x, t.b from t as tt, u \
         where ((a = 1) or (not (b like 'x%'))) order by a desc, 2 group by t.b"
    );
}

#[test]
fn in_lists_and_subselects() {
    assert_eq!(
        round_trip("SELECT a FROM t WHERE a IN (1, 2, 3) AND b NOT IN (SELECT id FROM u)"),
        "select a from t where ((a in (1, 2, 3)) and (b not in (select id from u)))"
    );
}

#[test]
fn equations_keep_their_grouping() {
    assert_eq!(
        round_trip("SELECT a + b * 2 AS s, (a + b) * 2, c - (d - e), a - -5 FROM t"),
        "select a+b*2 as s, (a+b)*2, c-(d-e), a-(-5) from t"
    );
}

#[test]
fn joins() {
    assert_eq!(
        round_trip("SELECT * FROM a LEFT JOIN b ON a.id = b.a_id, c"),
        "select * from a left join b on (a.id = b.a_id), c"
    );
    assert_eq!(
        round_trip("SELECT * FROM (a LEFT JOIN b ON a.id = b.id) AS j"),
        "select * from (a left join b on a.id = b.id) as j"
    );
    assert_eq!(
        round_trip("SELECT * FROM (a FULL OUTER JOIN b AS bb ON a.k = bb.k)"),
        "select * from (a full join b as bb on a.k = bb.k)"
    );
    assert_eq!(
        round_trip("SELECT * FROM (a CROSS JOIN b) AS j"),
        "select * from (a cross join b) as j"
    );
    assert_eq!(
        round_trip("SELECT * FROM (a JOIN b ON a.n NOT LIKE b.n)"),
        "select * from (a join b on not a.n like b.n)"
    );
    assert_eq!(
        round_trip("SELECT * FROM a FULL OUTER JOIN b ON a.k = b.k"),
        "select * from a full join b on (a.k = b.k)"
    );
}

#[test]
fn negations_and_ranges() {
    assert_eq!(
        round_trip(
            "SELECT * FROM t WHERE a IS NOT NULL AND b BETWEEN 1 AND 5 OR c NOT BETWEEN 2 AND 3"
        ),
        "select * from t where \
         (((a is not NULL) and (b between 1 and 5)) or (not (c between 2 and 3)))"
    );
}

#[test]
fn functions_in_fields_and_from() {
    assert_eq!(
        round_trip("SELECT count(*), max(t.a) FROM generate_series(1, 10) AS s"),
        "select count(*), max(t.a) from generate_series(1, 10) as s"
    );
}

#[test]
fn quoted_identifiers_keep_quotes() {
    assert_eq!(
        round_trip("SELECT \"My Col\" FROM \"Weird Table\""),
        "select \"My Col\" from \"Weird Table\""
    );
}

#[test]
fn param_specs_are_not_rendered() {
    assert_eq!(
        round_trip("SELECT a [:name=\"p\" :type=\"int\"] FROM t"),
        "select a from t"
    );
}

#[test]
fn other_statement_kinds() {
    assert_eq!(
        round_trip("INSERT INTO t (a, b) VALUES (1, 'x')"),
        "insert into t (a, b) (1, 'x')"
    );
    assert_eq!(
        round_trip("UPDATE t AS x SET a = a + 1 WHERE id = 3"),
        "update t as x set a = a+1 where (id = 3)"
    );
    assert_eq!(
        round_trip("DELETE FROM t WHERE a ~* 'x' AND b != 2"),
        "delete from t where ((a ~* 'x') and (b != 2))"
    );
}
