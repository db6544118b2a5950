use crate::dataset::{CountryGdp, Record, COUNTRY, GDP_USD_BILLIONS, GDP_USD_MILLIONS};
use crate::error::NormalizationError;

/// Converts extracted rows from GDP in millions (`"1,234.5"`) to GDP in billions (`1.23`).
///
/// Row count and order are unchanged. Rows already holding `GDP_USD_billions` are rejected,
/// so running the transform twice is an error rather than a second division.
pub fn transform(records: &[Record]) -> Result<Vec<CountryGdp>, NormalizationError> {
    records.iter().map(normalize_record).collect()
}

fn normalize_record(record: &Record) -> Result<CountryGdp, NormalizationError> {
    if record.has_field(GDP_USD_BILLIONS) {
        return Err(NormalizationError::AlreadyNormalized {
            field: GDP_USD_BILLIONS.to_string(),
        });
    }

    let country = required(record, COUNTRY)?;
    let millions = required(record, GDP_USD_MILLIONS)?;

    let value = parse_millions(millions).ok_or_else(|| NormalizationError::InvalidNumericFormat {
        country: country.to_string(),
        value: millions.to_string(),
    })?;

    Ok(CountryGdp {
        country: country.to_string(),
        gdp_usd_billions: round2(value / 1000.0),
    })
}

fn required<'a>(record: &'a Record, field: &str) -> Result<&'a str, NormalizationError> {
    record.get(field).ok_or_else(|| NormalizationError::MissingField {
        field: field.to_string(),
    })
}

/// Parses a comma-grouped number such as `"26,854,599"`.
///
/// `nan` and `inf` spellings are refused: they would reach the store as NULL.
pub fn parse_millions(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Rounds to two decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
