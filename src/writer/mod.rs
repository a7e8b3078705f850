pub mod sqlite;

pub use sqlite::*;

use anyhow::Result;

use crate::schema::{District, LocalBody};

/// Store seam for the driver. All three operations are destructive or
/// append-only by design; this is a full-refresh seeding tool.
pub trait LocalBodyStore {
    /// Delete all districts, then insert the given list
    fn reset_districts(&mut self, districts: &[District]) -> Result<()>;

    /// Delete all local bodies. Called once per run, before any inserts.
    fn reset_local_bodies(&mut self) -> Result<()>;

    /// Append one district's normalized records
    fn insert_local_bodies(&mut self, records: &[LocalBody]) -> Result<()>;
}
