pub mod extract_countries;
pub mod select_table;
