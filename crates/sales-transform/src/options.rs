/// Rules applied by the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningOptions {
    /// Fields every output row must carry as non-negative numbers.
    pub required_fields: Vec<String>,

    /// Text columns trimmed of surrounding whitespace.
    pub text_columns: Vec<String>,

    /// Column stripped of every double quote before trimming.
    pub quote_column: Option<String>,

    /// Legacy labels renamed after normalization (old -> new).
    pub legacy_renames: Vec<(String, String)>,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            required_fields: vec!["price".to_string(), "quantity".to_string()],
            text_columns: vec!["product".to_string(), "category".to_string()],
            quote_column: Some("category".to_string()),
            legacy_renames: vec![
                ("prodname".to_string(), "product".to_string()),
                ("qty".to_string(), "quantity".to_string()),
            ],
        }
    }
}
