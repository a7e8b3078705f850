use anyhow::{anyhow, Result};
use kerala_lsg_to_sqlite::{
    cli::{Cli, Commands},
    fetch::{FetchLocalBodies, SecClient},
    schema::{district_by_code, DISTRICTS},
    seed::seed_local_bodies,
    ui::ConsoleUi,
    writer::SqliteStore,
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Seed {
            output_db,
            endpoint,
        } => {
            let start = Instant::now();

            let client = SecClient::new(endpoint)?;
            let mut store = SqliteStore::open(&output_db)?;
            let mut ui = ConsoleUi::new();

            let summary = seed_local_bodies(&client, &mut store, &mut ui)?;

            let elapsed = start.elapsed();
            println!(
                "\nSeeded {:?} ({} local bodies, {} districts) in {:.1}s",
                output_db,
                summary.total(),
                summary.per_district.len(),
                elapsed.as_secs_f64()
            );
        }

        Commands::Fetch {
            district_code,
            endpoint,
        } => {
            let district = district_by_code(&district_code)
                .ok_or_else(|| anyhow!("Unknown district code: {}", district_code))?;

            let client = SecClient::new(endpoint)?;
            let response = client.fetch_local_bodies(district.district_objid)?;

            println!(
                "District {} ({}): {} raw records",
                district.district_code,
                district.district_name,
                response.records().len()
            );
            for raw in response.records() {
                println!("  {}  [{}]", raw.text, raw.value);
            }
        }

        Commands::ListDistricts => {
            println!("Districts:\n");
            for d in &DISTRICTS {
                println!("  {}  {}  (objid {})", d.district_code, d.district_name, d.district_objid);
            }
        }
    }

    Ok(())
}
