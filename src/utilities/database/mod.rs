pub mod init;
pub mod load_to_db;
pub mod run_query;
