//! Scrapes the archived "List of countries by GDP (nominal)" page, converts the IMF estimates
//! to billions of USD and stores them as CSV and as an SQLite table.

pub mod config;
pub mod dataset;
pub mod error;
pub mod extractors;
pub mod pipeline;
pub mod transform;
pub mod utilities;
