//! The ingestion driver: full refresh of districts and local bodies
//!
//! Sequential over the district master list. The run fails fast on the
//! first fetch, parse, or write error; every run starts by wiping both
//! tables, so a failed run is fixed by a clean re-run.

use anyhow::{Context, Result};

use crate::fetch::FetchLocalBodies;
use crate::parser::normalize_record;
use crate::schema::{LocalBody, DISTRICTS};
use crate::ui::{Phase, Ui};
use crate::writer::LocalBodyStore;

/// Per-district insert counts from a completed run
#[derive(Debug, Default)]
pub struct SeedSummary {
    /// (district_code, records inserted), in master-list order
    pub per_district: Vec<(&'static str, usize)>,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.per_district.iter().map(|(_, n)| n).sum()
    }
}

/// Run the full refresh: reset both tables, then fetch, normalize, and
/// insert every district's local bodies in master-list order.
pub fn seed_local_bodies(
    fetcher: &impl FetchLocalBodies,
    store: &mut impl LocalBodyStore,
    ui: &mut impl Ui,
) -> Result<SeedSummary> {
    ui.set_phase(Phase::SeedingDistricts);
    store
        .reset_districts(&DISTRICTS)
        .context("Write failed while seeding districts")?;
    ui.log(format!("Seeded {} districts", DISTRICTS.len()));

    ui.set_phase(Phase::FetchingLocalBodies);
    store
        .reset_local_bodies()
        .context("Write failed while clearing local bodies")?;

    let mut summary = SeedSummary::default();

    for district in &DISTRICTS {
        ui.log(format!(
            "Fetching local bodies for district {} ({})",
            district.district_code, district.district_name
        ));

        let response = fetcher
            .fetch_local_bodies(district.district_objid)
            .with_context(|| {
                format!(
                    "Fetch failed for district {} ({})",
                    district.district_code, district.district_name
                )
            })?;

        if response.ops1.is_none() {
            ui.log(format!(
                "  no ops1 field in response for district {}, treating as zero local bodies",
                district.district_code
            ));
        }

        let records: Vec<LocalBody> = response
            .records()
            .iter()
            .map(|raw| normalize_record(raw, district.district_code))
            .collect::<std::result::Result<_, _>>()
            .with_context(|| {
                format!("Malformed record for district {}", district.district_code)
            })?;

        store.insert_local_bodies(&records).with_context(|| {
            format!(
                "Write failed for district {} local bodies",
                district.district_code
            )
        })?;

        ui.log(format!(
            "  inserted {} local bodies for district {}",
            records.len(),
            district.district_code
        ));
        summary.per_district.push((district.district_code, records.len()));
    }

    ui.set_phase(Phase::Complete);
    ui.log(format!(
        "All local bodies seeded: {} records across {} districts",
        summary.total(),
        summary.per_district.len()
    ));

    Ok(summary)
}
