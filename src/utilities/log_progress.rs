use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::error::PersistenceError;

/// Year-MonthName-Day-Hour:Minute:Second
pub const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// Pipeline stages reported to the audit trail, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Preliminaries,
    Extracted,
    Transformed,
    CsvSaved,
    StoreConnected,
    StoreLoaded,
    Complete,
}

impl Milestone {
    pub fn message(self) -> &'static str {
        match self {
            Milestone::Preliminaries => "Preliminaries complete. Initiating ETL process",
            Milestone::Extracted => "Data extraction complete. Initiating Transformation process",
            Milestone::Transformed => "Data transformation complete. Initiating loading process",
            Milestone::CsvSaved => "Data saved to CSV file",
            Milestone::StoreConnected => "SQL Connection initiated.",
            Milestone::StoreLoaded => "Data loaded to Database as table. Running the query",
            Milestone::Complete => "Process Complete.",
        }
    }
}

/// Sink for audit trail entries.
pub trait ProgressLog {
    fn record(&mut self, message: &str) -> Result<(), PersistenceError>;
}

/// `<timestamp> : <message>`
pub fn format_entry<Tz: TimeZone>(now: &DateTime<Tz>, message: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} : {}", now.format(TIMESTAMP_FORMAT), message)
}

/// Appends one timestamped line per entry to a text file.
#[derive(Debug, Clone)]
pub struct FileProgressLog {
    path: PathBuf,
}

impl FileProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressLog for FileProgressLog {
    fn record(&mut self, message: &str) -> Result<(), PersistenceError> {
        let line = format_entry(&Local::now(), message);

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line))
            .map_err(|source| PersistenceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Keeps entries in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryProgressLog {
    pub entries: Vec<String>,
}

impl ProgressLog for MemoryProgressLog {
    fn record(&mut self, message: &str) -> Result<(), PersistenceError> {
        self.entries.push(message.to_string());
        Ok(())
    }
}
