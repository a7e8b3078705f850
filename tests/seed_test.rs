//! End-to-end driver tests: fake SEC fetcher, real SQLite store.

use std::collections::HashMap;

use rusqlite::Connection;
use tempfile::NamedTempFile;

use kerala_lsg_to_sqlite::fetch::{FetchError, FetchLocalBodies, LbResponse};
use kerala_lsg_to_sqlite::schema::RawLocalBody;
use kerala_lsg_to_sqlite::seed::seed_local_bodies;
use kerala_lsg_to_sqlite::ui::SilentUi;
use kerala_lsg_to_sqlite::writer::SqliteStore;

/// Serves canned responses per district objid. Districts without an entry
/// get an empty `ops1`; objids in `failing` exhaust their retry budget.
#[derive(Default)]
struct FakeFetcher {
    responses: HashMap<i64, Vec<(String, String)>>,
    missing_ops1: Vec<i64>,
    failing: Vec<i64>,
}

impl FakeFetcher {
    fn with_records(mut self, objid: i64, records: &[(&str, &str)]) -> Self {
        self.responses.insert(
            objid,
            records
                .iter()
                .map(|(t, v)| (t.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    fn with_missing_ops1(mut self, objid: i64) -> Self {
        self.missing_ops1.push(objid);
        self
    }

    fn with_failure(mut self, objid: i64) -> Self {
        self.failing.push(objid);
        self
    }
}

impl FetchLocalBodies for FakeFetcher {
    fn fetch_local_bodies(&self, district_objid: i64) -> Result<LbResponse, FetchError> {
        if self.failing.contains(&district_objid) {
            return Err(FetchError::Exhausted {
                attempts: 5,
                last_error: "server error: 503 Service Unavailable".to_string(),
            });
        }
        if self.missing_ops1.contains(&district_objid) {
            return Ok(LbResponse { ops1: None });
        }
        let records = self
            .responses
            .get(&district_objid)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|(text, value)| RawLocalBody { text, value })
            .collect();
        Ok(LbResponse {
            ops1: Some(records),
        })
    }
}

fn run(fetcher: &FakeFetcher, db: &NamedTempFile) -> anyhow::Result<(SilentUi, usize)> {
    let mut store = SqliteStore::open(db.path())?;
    let mut ui = SilentUi::new();
    let summary = seed_local_bodies(fetcher, &mut store, &mut ui)?;
    Ok((ui, summary.total()))
}

fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |r| r.get(0)).unwrap()
}

#[test]
fn seeds_all_districts_and_local_bodies() {
    let fetcher = FakeFetcher::default()
        .with_records(4, &[("G07002-Kottuvally", "abc123")])
        .with_records(8, &[("M01003-Kochi-North", "xyz"), ("C02001-Kochi", "c1")]);

    let db = NamedTempFile::new().unwrap();
    let (_ui, total) = run(&fetcher, &db).unwrap();
    assert_eq!(total, 3);

    let conn = Connection::open(db.path()).unwrap();
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM districts"), 14);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM local_bodies"), 3);

    let (name, lb_type, district): (String, String, String) = conn
        .query_row(
            "SELECT lb_name, lb_type, district_code FROM local_bodies WHERE lb_code = 'M01003'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    // second hyphen retained, type from prefix, district from the owner
    assert_eq!(name, "Kochi-North");
    assert_eq!(lb_type, "MUN");
    assert_eq!(district, "08");

    let district: String = conn
        .query_row(
            "SELECT district_code FROM local_bodies WHERE lb_code = 'G07002'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    // owning district wins over the "07" embedded in the code
    assert_eq!(district, "04");
}

#[test]
fn rerun_is_a_full_refresh() {
    let db = NamedTempFile::new().unwrap();

    let first = FakeFetcher::default()
        .with_records(1, &[("G01001-Manjeshwaram", "a"), ("G01002-Enmakaje", "b")]);
    run(&first, &db).unwrap();

    // second run sees different data; nothing from the first survives
    let second = FakeFetcher::default().with_records(1, &[("G01003-Kumbla", "c")]);
    let (_ui, total) = run(&second, &db).unwrap();
    assert_eq!(total, 1);

    let conn = Connection::open(db.path()).unwrap();
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM local_bodies"), 1);
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM local_bodies WHERE lb_code = 'G01003'"),
        1
    );
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM districts"), 14);
}

#[test]
fn missing_ops1_is_zero_records_with_distinct_log() {
    let fetcher = FakeFetcher::default().with_missing_ops1(9);

    let db = NamedTempFile::new().unwrap();
    let (ui, total) = run(&fetcher, &db).unwrap();
    assert_eq!(total, 0);
    assert!(ui
        .messages
        .iter()
        .any(|m| m.contains("no ops1") && m.contains("09")));
}

#[test]
fn fetch_failure_aborts_and_names_district() {
    let fetcher = FakeFetcher::default()
        .with_records(1, &[("G01001-Manjeshwaram", "a")])
        .with_failure(3);

    let db = NamedTempFile::new().unwrap();
    let err = run(&fetcher, &db).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Fetch failed for district 03"));
    assert!(msg.contains("WAYANAD"));
    assert!(msg.contains("5 attempts"));
}

#[test]
fn malformed_record_aborts_and_names_district() {
    let fetcher = FakeFetcher::default().with_records(5, &[("NoHyphenHere", "z")]);

    let db = NamedTempFile::new().unwrap();
    let err = run(&fetcher, &db).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Malformed record for district 05"));
    assert!(msg.contains("NoHyphenHere"));
}

#[test]
fn duplicate_lb_code_across_districts_aborts() {
    let fetcher = FakeFetcher::default()
        .with_records(1, &[("G01001-Manjeshwaram", "a")])
        .with_records(2, &[("G01001-Shadow", "b")]);

    let db = NamedTempFile::new().unwrap();
    let err = run(&fetcher, &db).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Write failed for district 02"));
}
