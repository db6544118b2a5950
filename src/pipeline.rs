use colored::Colorize;
use reqwest::Client;

use crate::config::AppConfig;
use crate::dataset::{CountryGdp, TableSchema};
use crate::error::EtlError;
use crate::extractors::gdp::extract_countries::extract_countries;
use crate::transform::normalize_gdp::transform;
use crate::utilities::csv_file::write_csv;
use crate::utilities::database::init::open_store;
use crate::utilities::database::load_to_db::load_to_db;
use crate::utilities::database::run_query::{describe_query, print_query_result, run_query, MIN_GDP_BILLIONS};
use crate::utilities::fetch_page::fetch_page;
use crate::utilities::log_progress::{Milestone, ProgressLog};

/// Runs the whole ETL: fetch, extract, transform, CSV, store, query.
///
/// Returns the rows selected by the final query.
pub async fn run(config: &AppConfig, log: &mut dyn ProgressLog) -> Result<Vec<CountryGdp>, EtlError> {
    milestone(log, Milestone::Preliminaries)?;

    println!("Fetching {}", config.source.url);
    let client = Client::new();
    let html = fetch_page(&client, &config.source.url).await?;

    process_document(html, config, log)
}

/// Everything after the download. The document is dropped once extracted.
pub fn process_document(
    html: String,
    config: &AppConfig,
    log: &mut dyn ProgressLog,
) -> Result<Vec<CountryGdp>, EtlError> {
    let records = extract_countries(&html, &TableSchema::gdp())?;
    drop(html);
    println!("Extracted {} countries", records.len());
    milestone(log, Milestone::Extracted)?;

    let dataset = transform(&records)?;
    milestone(log, Milestone::Transformed)?;

    write_csv(&config.output.csv_path, &dataset)?;
    println!("Saved {}", config.output.csv_path.display());
    milestone(log, Milestone::CsvSaved)?;

    let mut conn = open_store(&config.database.path)?;
    milestone(log, Milestone::StoreConnected)?;

    let loaded = load_to_db(&mut conn, &config.database.table_name, &dataset)?;
    println!("Loaded {} rows into {}", loaded, config.database.table_name);
    milestone(log, Milestone::StoreLoaded)?;

    let statement = describe_query(&config.database.table_name, MIN_GDP_BILLIONS)?;
    let selected = run_query(&conn, &config.database.table_name, MIN_GDP_BILLIONS)?;
    print_query_result(&statement, &selected);

    milestone(log, Milestone::Complete)?;
    Ok(selected)
}

fn milestone(log: &mut dyn ProgressLog, milestone: Milestone) -> Result<(), EtlError> {
    log.record(milestone.message())?;
    println!("{}", milestone.message().green());
    Ok(())
}
