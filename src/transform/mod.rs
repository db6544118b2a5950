pub mod normalize_gdp;
