use scraper::{ElementRef, Html, Selector};

use crate::dataset::{Record, TableSchema};
use crate::error::ExtractionError;
use crate::extractors::gdp::select_table::{PositionalSelector, TableSelector};

/// Cell text marking a country without data.
pub const UNAVAILABLE: &str = "—";

const COUNTRY_CELL: usize = 0;
const GDP_CELL: usize = 2;

/// Extracts the country rows of the GDP table, using the default positional table selection.
pub fn extract_countries(html_content: &str, schema: &TableSchema) -> Result<Vec<Record>, ExtractionError> {
    extract_countries_with(html_content, schema, &PositionalSelector::default())
}

/// Extracts the country rows of the table picked by `selector`.
///
/// A row is kept when it has data cells, its first cell holds a link and its third cell
/// is not [`UNAVAILABLE`]. Rows with fewer than three cells are skipped. Source order is kept.
pub fn extract_countries_with(
    html_content: &str,
    schema: &TableSchema,
    selector: &dyn TableSelector,
) -> Result<Vec<Record>, ExtractionError> {
    let [country_field, gdp_field] = schema.fields() else {
        return Err(ExtractionError::SchemaMismatch {
            expected: 2,
            found: schema.fields().len(),
        });
    };

    let document = Html::parse_document(html_content);
    let tbody = Selector::parse("tbody").expect("valid selector");
    let tr = Selector::parse("tr").expect("valid selector");
    let td = Selector::parse("td").expect("valid selector");
    let a = Selector::parse("a").expect("valid selector");

    let candidates: Vec<ElementRef> = document.select(&tbody).collect();
    let table = selector.select_table(&candidates)?;

    let mut records = Vec::new();

    for row in table.select(&tr) {
        let cells: Vec<ElementRef> = row.select(&td).collect();
        if cells.len() <= GDP_CELL {
            continue;
        }

        // Header and footer rows carry no country link
        let Some(link) = cells[COUNTRY_CELL].select(&a).next() else {
            continue;
        };

        let gdp = first_text(cells[GDP_CELL]);
        if gdp == UNAVAILABLE {
            continue;
        }

        let country = link.text().collect::<String>().trim().to_string();

        records.push(Record::new(vec![
            (country_field.clone(), country),
            (gdp_field.clone(), gdp),
        ]));
    }

    Ok(records)
}

/// First non-blank text node of a cell, so footnote markers after the value are ignored.
fn first_text(cell: ElementRef) -> String {
    cell.text()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{COUNTRY, GDP_USD_MILLIONS};
    use crate::extractors::gdp::select_table::HeaderTextSelector;

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body>
            <table><tbody><tr><td>layout</td></tr></tbody></table>
            <table><tbody><tr><td><a href="/a">Not this</a></td><td>x</td><td>1</td></tr></tbody></table>
            <table class="wikitable"><tbody>
                <tr><th>Country/Territory</th><th>Region</th><th>Estimate</th></tr>
                {rows}
            </tbody></table>
            </body></html>"#
        )
    }

    fn pairs(records: &[Record]) -> Vec<(String, String)> {
        records
            .iter()
            .map(|r| {
                (
                    r.get(COUNTRY).unwrap().to_string(),
                    r.get(GDP_USD_MILLIONS).unwrap().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn keeps_only_linked_rows_with_data() {
        let html = page(
            r#"
            <tr><td>A <a href="/x">X</a></td><td>Europe</td><td>1,234.5</td></tr>
            <tr><td>B</td><td>Asia</td><td>500</td></tr>
            <tr><td><a href="/y">Y</a></td><td>Africa</td><td>—</td></tr>
            "#,
        );

        let records = extract_countries(&html, &TableSchema::gdp()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].fields(),
            &[
                ("Country".to_string(), "X".to_string()),
                ("GDP_USD_millions".to_string(), "1,234.5".to_string()),
            ]
        );
    }

    #[test]
    fn excluded_rows_do_not_shift_neighbours() {
        let html = page(
            r#"
            <tr><td><a href="/1">First</a></td><td>r</td><td>10</td></tr>
            <tr><td><a href="/2">Gap</a></td><td>r</td><td>—</td></tr>
            <tr><td>no link</td><td>r</td><td>20</td></tr>
            <tr><td><a href="/3">Second</a></td><td>r</td><td>30</td></tr>
            <tr><td><a href="/3">Second</a></td><td>r</td><td>40</td></tr>
            "#,
        );

        let records = extract_countries(&html, &TableSchema::gdp()).unwrap();

        assert_eq!(
            pairs(&records),
            vec![
                ("First".to_string(), "10".to_string()),
                ("Second".to_string(), "30".to_string()),
                ("Second".to_string(), "40".to_string()),
            ]
        );
    }

    #[test]
    fn short_rows_are_skipped() {
        let html = page(
            r#"
            <tr><td><a href="/1">Short</a></td><td>r</td></tr>
            <tr><td><a href="/2">Full</a></td><td>r</td><td>7</td></tr>
            "#,
        );

        let records = extract_countries(&html, &TableSchema::gdp()).unwrap();
        assert_eq!(pairs(&records), vec![("Full".to_string(), "7".to_string())]);
    }

    #[test]
    fn footnotes_after_value_are_ignored() {
        let html = page(
            r#"<tr><td><a href="/1">Taiwan</a></td><td>Asia</td><td> 751,930 <sup>[n 1]</sup></td></tr>"#,
        );

        let records = extract_countries(&html, &TableSchema::gdp()).unwrap();
        assert_eq!(pairs(&records), vec![("Taiwan".to_string(), "751,930".to_string())]);
    }

    #[test]
    fn too_few_tables_is_an_error() {
        let html = "<table><tbody><tr><td>1</td></tr></tbody></table>\
                    <table><tbody><tr><td>2</td></tr></tbody></table>";

        let err = extract_countries(html, &TableSchema::gdp()).unwrap_err();
        assert!(matches!(err, ExtractionError::TableNotFound { index: 2, found: 2 }));
    }

    #[test]
    fn schema_must_have_two_fields() {
        let html = page("");
        let err = extract_countries(&html, &TableSchema::new(["Country"])).unwrap_err();
        assert!(matches!(err, ExtractionError::SchemaMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn field_names_follow_schema() {
        let html = page(r#"<tr><td><a href="/1">Peru</a></td><td>r</td><td>264,636</td></tr>"#);

        let records = extract_countries(&html, &TableSchema::new(["name", "value"])).unwrap();
        assert_eq!(records[0].get("name"), Some("Peru"));
        assert_eq!(records[0].get("value"), Some("264,636"));
    }

    #[test]
    fn header_selector_finds_table_by_content() {
        let html = page(r#"<tr><td><a href="/1">Chile</a></td><td>r</td><td>301,025</td></tr>"#);

        let selector = HeaderTextSelector::new("Country/Territory");
        let records = extract_countries_with(&html, &TableSchema::gdp(), &selector).unwrap();
        assert_eq!(pairs(&records), vec![("Chile".to_string(), "301,025".to_string())]);
    }
}
