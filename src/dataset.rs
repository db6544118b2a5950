pub const COUNTRY: &str = "Country";
pub const GDP_USD_MILLIONS: &str = "GDP_USD_millions";
pub const GDP_USD_BILLIONS: &str = "GDP_USD_billions";

/// Ordered field names a scraped row is mapped onto.
///
/// The first field receives the link text of cell 0, the second the text of cell 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    fields: Vec<String>,
}

impl TableSchema {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// `["Country", "GDP_USD_millions"]`
    pub fn gdp() -> Self {
        Self::new([COUNTRY, GDP_USD_MILLIONS])
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// One extracted row: field name to raw text, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Normalized row, as written to the CSV file and the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryGdp {
    pub country: String,
    pub gdp_usd_billions: f64,
}
