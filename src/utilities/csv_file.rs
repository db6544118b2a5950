use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::CountryGdp;
use crate::error::PersistenceError;

/// One CSV line: row index, then the record fields.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "")]
    index: usize,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "GDP_USD_billions")]
    gdp_usd_billions: f64,
}

/// Writes the dataset with a leading row-index column.
///
/// Header: `,Country,GDP_USD_billions`. An existing file is replaced.
pub fn write_csv(path: &Path, records: &[CountryGdp]) -> Result<(), PersistenceError> {
    let csv_error = |source| PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    for (index, record) in records.iter().enumerate() {
        writer
            .serialize(CsvRow {
                index,
                country: record.country.clone(),
                gdp_usd_billions: record.gdp_usd_billions,
            })
            .map_err(csv_error)?;
    }

    // No rows means serialize never wrote the header
    if records.is_empty() {
        writer
            .write_record(["", "Country", "GDP_USD_billions"])
            .map_err(csv_error)?;
    }

    writer.flush().map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a file written by [`write_csv`], dropping the index column.
pub fn read_csv(path: &Path) -> Result<Vec<CountryGdp>, PersistenceError> {
    let csv_error = |source| PersistenceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
    let mut records = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(csv_error)?;
        records.push(CountryGdp {
            country: row.country,
            gdp_usd_billions: row.gdp_usd_billions,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample() -> Vec<CountryGdp> {
        vec![
            CountryGdp {
                country: "United States".to_string(),
                gdp_usd_billions: 26854.6,
            },
            CountryGdp {
                country: "Korea, South".to_string(),
                gdp_usd_billions: 1721.91,
            },
            CountryGdp {
                country: "Tuvalu".to_string(),
                gdp_usd_billions: 0.06,
            },
        ]
    }

    #[test]
    fn writes_header_and_index_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdp.csv");

        write_csv(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], ",Country,GDP_USD_billions");
        assert_eq!(lines[1], "0,United States,26854.6");
        assert_eq!(lines[2], "1,\"Korea, South\",1721.91");
        assert_eq!(lines[3], "2,Tuvalu,0.06");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn read_back_gives_same_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdp.csv");

        write_csv(&path, &sample()).unwrap();

        assert_eq!(read_csv(&path).unwrap(), sample());
    }

    #[test]
    fn empty_dataset_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), ",Country,GDP_USD_billions\n");
        assert!(read_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("gdp.csv");

        let err = write_csv(&path, &sample()).unwrap_err();
        assert!(matches!(err, PersistenceError::Csv { .. }));
    }
}
