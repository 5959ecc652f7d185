//! CSV loading with an ordered fallback ladder.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, PolarsResult, SerReader};
use tracing::{debug, info, warn};

use crate::error::{AttemptError, IngestError, Result};

use super::strategy::{ReadStrategy, TextEncoding};

/// Cell contents read as null, in addition to empty fields.
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A parsed table together with the configuration that produced it.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// Parsed rows. Every column is text; typing happens downstream.
    pub frame: DataFrame,
    /// Strategy that succeeded.
    pub strategy: ReadStrategy,
    /// Rows thrown away by the lenient pass (always 0 for strict strategies).
    pub discarded_rows: usize,
}

/// Reads the whole file into memory.
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Loads a raw sales file.
///
/// Strict strategies from [`ReadStrategy::LADDER`] are tried in order and the
/// first structurally sound parse is returned. When all of them fail, a lenient
/// pass drops rows whose field count disagrees with the header. If that fails
/// too, the error carries both the lenient and the last strict failure.
pub fn load_sales_table(path: &Path) -> Result<LoadedTable> {
    let bytes = read_bytes(path)?;

    let attempt = |strategy: ReadStrategy| {
        read_strict(&bytes, strategy)
            .map(|frame| {
                info!(
                    path = %path.display(),
                    strategy = %strategy,
                    rows = frame.height(),
                    columns = frame.width(),
                    "loaded input"
                );
                LoadedTable {
                    frame,
                    strategy,
                    discarded_rows: 0,
                }
            })
            .inspect_err(|error| {
                debug!(
                    path = %path.display(),
                    strategy = %strategy,
                    %error,
                    "parse attempt failed"
                );
            })
    };

    let [first, rest @ ..] = ReadStrategy::LADDER;
    let (mut last_strategy, mut last_strict) = match attempt(first) {
        Ok(loaded) => return Ok(loaded),
        Err(error) => (first, error),
    };
    for strategy in rest {
        match attempt(strategy) {
            Ok(loaded) => return Ok(loaded),
            Err(error) => {
                last_strategy = strategy;
                last_strict = error;
            }
        }
    }

    match read_lenient(&bytes) {
        Ok((frame, discarded_rows)) => {
            warn!(
                path = %path.display(),
                rows = frame.height(),
                discarded_rows,
                "strict parsing failed, loaded input in lenient mode"
            );
            Ok(LoadedTable {
                frame,
                strategy: ReadStrategy::Lenient,
                discarded_rows,
            })
        }
        Err(lenient) => Err(IngestError::Unreadable {
            path: path.to_path_buf(),
            lenient: Box::new(lenient),
            last_strategy,
            last_strict: Box::new(last_strict),
        }),
    }
}

fn read_strict(bytes: &[u8], strategy: ReadStrategy) -> std::result::Result<DataFrame, AttemptError> {
    let encoding = strategy.encoding();
    let text = encoding.decode(bytes).ok_or(AttemptError::Decode {
        encoding: encoding.label(),
    })?;
    let frame = parse_frame(text.into_owned().into_bytes(), strategy.separator())?;
    check_delimiter(&frame, strategy)?;
    Ok(frame)
}

/// Re-tokenizes the file record by record, keeping only rows as wide as the header.
fn read_lenient(bytes: &[u8]) -> std::result::Result<(DataFrame, usize), AttemptError> {
    let text = TextEncoding::Utf8
        .decode(bytes)
        .or_else(|| TextEncoding::Latin1.decode(bytes))
        .ok_or(AttemptError::Decode {
            encoding: TextEncoding::Latin1.label(),
        })?;
    let separator = ReadStrategy::Lenient.separator();

    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(separator)
        .from_writer(Vec::new());

    let mut records = reader.byte_records();
    let header = records.next().ok_or(AttemptError::NoHeader)??;
    let width = header.len();
    writer.write_byte_record(&header)?;

    let mut discarded = 0usize;
    for record in records {
        let record = record?;
        if record.len() == width {
            writer.write_byte_record(&record)?;
        } else {
            discarded += 1;
        }
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| AttemptError::Buffer(e.into_error()))?;
    let frame = parse_frame(buffer, separator)?;
    Ok((frame, discarded))
}

/// Parses decoded UTF-8 bytes, reading every column as text.
fn parse_frame(data: Vec<u8>, separator: u8) -> PolarsResult<DataFrame> {
    let null_values =
        NullValues::AllColumns(NULL_MARKERS.iter().map(|marker| (*marker).into()).collect());

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| {
            opts.with_separator(separator)
                .with_null_values(Some(null_values.clone()))
        })
        .into_reader_with_file_handle(Cursor::new(data))
        .finish()
}

/// A lone column whose name still contains another ladder delimiter means the
/// rows were not split at all.
fn check_delimiter(
    frame: &DataFrame,
    strategy: ReadStrategy,
) -> std::result::Result<(), AttemptError> {
    if frame.width() != 1 {
        return Ok(());
    }
    let names = frame.get_column_names();
    let Some(name) = names.first() else {
        return Ok(());
    };
    for found in strategy.foreign_separators() {
        if name.as_str().contains(found) {
            return Err(AttemptError::DelimiterMismatch { found });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{AnyValue, DataType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_comma_file_uses_default_strategy() {
        let file = create_temp_csv(b"Product,Price,Qty\nShirt,10,2\nHat,5,1\n");
        let loaded = load_sales_table(file.path()).unwrap();

        assert_eq!(loaded.strategy, ReadStrategy::Default);
        assert_eq!(loaded.frame.height(), 2);
        assert_eq!(loaded.frame.width(), 3);
        assert_eq!(loaded.discarded_rows, 0);
    }

    #[test]
    fn test_semicolon_file_uses_second_strategy() {
        let file = create_temp_csv(b"Product;Price;Qty\nShirt;10;2\nHat;5;1\n");
        let loaded = load_sales_table(file.path()).unwrap();

        assert_eq!(loaded.strategy, ReadStrategy::Semicolon);
        assert_eq!(loaded.frame.width(), 3);
        assert_eq!(loaded.frame.height(), 2);
    }

    #[test]
    fn test_latin1_file_falls_back_to_latin1() {
        let file = create_temp_csv(b"Product,Price\nCaf\xe9,3\n");
        let loaded = load_sales_table(file.path()).unwrap();

        assert_eq!(loaded.strategy, ReadStrategy::Latin1);
        let value = loaded.frame.column("Product").unwrap().get(0).unwrap();
        assert_eq!(value, AnyValue::String("Café"));
    }

    #[test]
    fn test_latin1_semicolon_file() {
        let file = create_temp_csv(b"Product;Price\nCaf\xe9;3\n");
        let loaded = load_sales_table(file.path()).unwrap();

        assert_eq!(loaded.strategy, ReadStrategy::SemicolonLatin1);
        assert_eq!(loaded.frame.width(), 2);
    }

    #[test]
    fn test_ragged_rows_use_lenient_mode() {
        let file = create_temp_csv(b"a,b\n1,2\n3,4,5\n6,7\n");
        let loaded = load_sales_table(file.path()).unwrap();

        assert_eq!(loaded.strategy, ReadStrategy::Lenient);
        assert_eq!(loaded.frame.height(), 2);
        assert_eq!(loaded.discarded_rows, 1);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_sales_table(&dir.path().join("missing.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_sales_table(dir.path());

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_file_is_unreadable() {
        let file = create_temp_csv(b"");
        let result = load_sales_table(file.path());

        assert!(matches!(result, Err(IngestError::Unreadable { .. })));
    }

    #[test]
    fn test_columns_are_text_and_markers_are_null() {
        let file = create_temp_csv(b"price,quantity\n10,NA\n,3\n");
        let loaded = load_sales_table(file.path()).unwrap();
        let price = loaded.frame.column("price").unwrap();
        let quantity = loaded.frame.column("quantity").unwrap();

        assert_eq!(price.dtype(), &DataType::String);
        assert_eq!(quantity.get(0).unwrap(), AnyValue::Null);
        assert_eq!(price.get(1).unwrap(), AnyValue::Null);
    }

    #[test]
    fn test_extended_null_markers() {
        let file = create_temp_csv(b"product,category
nan,None
<NA>,#N/A
n/a,Home
");
        let loaded = load_sales_table(file.path()).unwrap();
        let product = loaded.frame.column("product").unwrap();
        let category = loaded.frame.column("category").unwrap();

        assert_eq!(product.null_count(), 3);
        assert_eq!(category.null_count(), 2);
        assert_eq!(category.get(2).unwrap(), AnyValue::String("Home"));
    }

    #[test]
    fn test_bom_is_stripped_from_header() {
        let file = create_temp_csv("\u{feff}price,quantity\n1,2\n".as_bytes());
        let loaded = load_sales_table(file.path()).unwrap();

        assert!(loaded.frame.column("price").is_ok());
    }
}
