use anyhow::Context;
use colored::Colorize;

use gdp_etl::config;
use gdp_etl::pipeline;
use gdp_etl::utilities::database::run_query::MIN_GDP_BILLIONS;
use gdp_etl::utilities::log_progress::FileProgressLog;

const LOG_FILE: &str = "etl_project_log.txt";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {

    // Load configuration settings
    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    let mut log = FileProgressLog::new(LOG_FILE);

    let selected = pipeline::run(&config, &mut log).await.with_context(|| {
        format!("ETL run failed, see {} for the last completed stage", log.path().display())
    });

    match selected {
        Ok(rows) => {
            println!(
                "{}",
                format!("{} economies of at least {} billion USD", rows.len(), MIN_GDP_BILLIONS).green()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            Err(e)
        }
    }
}
