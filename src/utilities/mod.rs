pub mod csv_file;
pub mod database;
pub mod fetch_page;
pub mod log_progress;
