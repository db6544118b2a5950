use colored::Colorize;
use rusqlite::{params, Connection};

use crate::dataset::CountryGdp;
use crate::error::PersistenceError;
use crate::utilities::database::init::quote_identifier;

/// Economies at or above this size are listed after loading, in billions of USD.
pub const MIN_GDP_BILLIONS: f64 = 100.0;

pub fn query_statement(table_name: &str) -> Result<String, PersistenceError> {
    Ok(format!(
        "SELECT * FROM {} WHERE GDP_USD_billions >= ?1",
        quote_identifier(table_name)?
    ))
}

/// The query as shown on the console, with the threshold in place of `?1`.
pub fn describe_query(table_name: &str, min_billions: f64) -> Result<String, PersistenceError> {
    Ok(query_statement(table_name)?.replace("?1", &min_billions.to_string()))
}

/// Returns the rows of `table_name` with `GDP_USD_billions >= min_billions`, in table order.
pub fn run_query(
    conn: &Connection,
    table_name: &str,
    min_billions: f64,
) -> Result<Vec<CountryGdp>, PersistenceError> {
    let mut stmt = conn.prepare(&query_statement(table_name)?)?;
    let rows = stmt.query_map(params![min_billions], |row| {
        Ok(CountryGdp {
            country: row.get(0)?,
            gdp_usd_billions: row.get(1)?,
        })
    })?;

    let mut records = Vec::new();
    for record in rows {
        records.push(record?);
    }

    Ok(records)
}

/// Prints the query and its result as an indexed table.
pub fn print_query_result(statement: &str, records: &[CountryGdp]) {
    println!("{}", statement.cyan());

    let width = records
        .iter()
        .map(|r| r.country.chars().count())
        .max()
        .unwrap_or(0)
        .max("Country".len());

    println!("{:>5}  {:<width$}  {:>16}", "", "Country", "GDP_USD_billions");
    for (index, record) in records.iter().enumerate() {
        println!(
            "{:>5}  {:<width$}  {:>16.2}",
            index, record.country, record.gdp_usd_billions
        );
    }
    println!("[{} rows]", records.len());
}
