use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use super::LocalBodyStore;
use crate::schema::{District, LocalBody};

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS districts (
    district_objid INTEGER PRIMARY KEY,
    district_code  TEXT NOT NULL UNIQUE,
    district_name  TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS local_bodies (
    lb_code       TEXT PRIMARY KEY,
    lb_name       TEXT NOT NULL,
    lb_type       TEXT NOT NULL,
    district_code TEXT NOT NULL,
    sec_object_id TEXT NOT NULL,
    full_name     TEXT NOT NULL,
    FOREIGN KEY (district_code) REFERENCES districts(district_code)
);
CREATE INDEX IF NOT EXISTS idx_local_bodies_district_code
    ON local_bodies(district_code);
";

/// SQLite-backed reference data store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        // Optimize for bulk insert
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        conn.execute_batch(CREATE_TABLES)
            .context("Failed to create tables")?;

        Ok(Self { conn })
    }
}

impl LocalBodyStore for SqliteStore {
    fn reset_districts(&mut self, districts: &[District]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM districts", [])
            .context("Failed to clear districts")?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO districts (district_objid, district_code, district_name)
                 VALUES (?1, ?2, ?3)",
            )?;
            for d in districts {
                stmt.execute((d.district_objid, d.district_code, d.district_name))
                    .with_context(|| format!("Failed to insert district {}", d.district_code))?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn reset_local_bodies(&mut self) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_bodies", [])
            .context("Failed to clear local bodies")?;
        Ok(())
    }

    fn insert_local_bodies(&mut self, records: &[LocalBody]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO local_bodies
                 (lb_code, lb_name, lb_type, district_code, sec_object_id, full_name)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for lb in records {
                stmt.execute((
                    &lb.lb_code,
                    &lb.lb_name,
                    lb.lb_type.as_str(),
                    &lb.district_code,
                    &lb.sec_object_id,
                    &lb.full_name,
                ))
                .with_context(|| format!("Failed to insert local body {}", lb.lb_code))?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
