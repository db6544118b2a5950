use rusqlite::{params, Connection};

use crate::dataset::CountryGdp;
use crate::error::PersistenceError;
use crate::utilities::database::init::quote_identifier;

/// Replaces `table_name` with the given rows.
///
/// Any existing table of that name is dropped first. Everything runs in one transaction,
/// so a failed load leaves the previous table in place.
pub fn load_to_db(
    conn: &mut Connection,
    table_name: &str,
    records: &[CountryGdp],
) -> Result<usize, PersistenceError> {
    let table = quote_identifier(table_name)?;
    let tx = conn.transaction()?;

    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {table};
        CREATE TABLE {table} (
            Country TEXT,
            GDP_USD_billions REAL
        );"
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {table} (Country, GDP_USD_billions) VALUES (?1, ?2)"
        ))?;
        for record in records {
            stmt.execute(params![record.country, record.gdp_usd_billions])?;
        }
    }

    tx.commit()?;
    Ok(records.len())
}
