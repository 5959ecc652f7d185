//! Integration tests for the cleaning pipeline.

use std::fs;
use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use sales_cli::pipeline::{CleanConfig, clean_frame, run_clean};
use sales_cli::summary::preview_table;
use sales_ingest::{IngestError, ReadStrategy};
use sales_transform::CleaningOptions;

const MESSY: &str = "\
Order ID, Prodname ,Category,Price,Qty
1,  Shirt , \"Clothing\",10.5,2
2,Hat,Accessories,-5,1
3,Mug,Kitchen,4,abc
4,Lamp,Home,,2
5,Desk, Office ,120,1
";

fn write_input(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn test_run_clean_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "raw.csv", MESSY.as_bytes());
    let output = dir.path().join("processed").join("clean.csv");

    let result = run_clean(&CleanConfig::new(&input, &output)).unwrap();

    assert_eq!(result.strategy, ReadStrategy::Default);
    assert_eq!(result.loaded_rows, 5);
    assert_eq!(result.summary.renamed, 2);
    assert_eq!(result.summary.completeness.after, 4);
    assert_eq!(result.output_rows(), 2);
    assert_eq!(result.output_path, output);

    let content = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(content.trim_end(), @r"
    order_id,product,category,price,quantity
    1,Shirt,Clothing,10.5,2
    5,Desk,Office,120.0,1
    ");
}

#[test]
fn test_semicolon_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "raw.csv",
        b"Product;Category;Price;Quantity\nShirt;Clothing;10;2\nHat;Accessories;-1;1\n",
    );
    let output = dir.path().join("clean.csv");

    let result = run_clean(&CleanConfig::new(&input, &output)).unwrap();

    assert_eq!(result.strategy, ReadStrategy::Semicolon);
    assert_eq!(result.output_rows(), 1);
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("product,category,price,quantity\n"));
}

#[test]
fn test_missing_input_is_not_found_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("out").join("clean.csv");

    let error = run_clean(&CleanConfig::new(&input, &output)).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::FileNotFound { .. })
    ));
    assert!(format!("{error:#}").contains("missing.csv"));
    assert!(!output.exists());
}

#[test]
fn test_preview_is_limited() {
    let dir = tempfile::tempdir().unwrap();
    let mut raw = String::from("price,quantity\n");
    for idx in 0..10 {
        raw.push_str(&format!("{idx},1\n"));
    }
    let input = write_input(dir.path(), "raw.csv", raw.as_bytes());
    let output = dir.path().join("clean.csv");

    let result = run_clean(&CleanConfig::new(&input, &output).with_preview_rows(3)).unwrap();

    assert_eq!(result.output_rows(), 10);
    assert_eq!(result.preview.height(), 3);
    let mut table = preview_table(&result.preview);
    table.force_no_tty();
    insta::assert_snapshot!(table.to_string(), @r"
    ╭───────┬──────────╮
    │ price ┆ quantity │
    ╞═══════╪══════════╡
    │ 0     ┆ 1        │
    │ 1     ┆ 1        │
    │ 2     ┆ 1        │
    ╰───────┴──────────╯
    ");
}

#[test]
fn test_clean_frame_product_name_is_not_renamed() {
    let mut df = test_df(vec![
        ("Product Name ", vec![Some(" Lamp ")]),
        ("PRICE", vec![Some("3")]),
        ("qty", vec![Some("1")]),
    ]);

    let summary = clean_frame(&mut df, &CleaningOptions::default()).unwrap();

    assert_eq!(summary.renamed, 1);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["product_name", "price", "quantity"]);
    // Only the listed text columns are trimmed.
    let value = df.column("product_name").unwrap().get(0).unwrap();
    assert_eq!(value, AnyValue::String(" Lamp "));
}

#[test]
fn test_clean_frame_without_required_fields_keeps_rows() {
    let mut df = test_df(vec![
        ("product", vec![Some("A"), None]),
        ("category", vec![Some("\"X\""), Some(" Y ")]),
    ]);

    let summary = clean_frame(&mut df, &CleaningOptions::default()).unwrap();

    assert_eq!(summary.completeness.dropped(), 0);
    assert_eq!(summary.validity.dropped(), 0);
    assert_eq!(df.height(), 2);
    let category = df.column("category").unwrap();
    assert_eq!(category.get(0).unwrap(), AnyValue::String("X"));
    assert_eq!(category.get(1).unwrap(), AnyValue::String("Y"));
}

#[test]
fn test_clean_frame_price_only_skips_numeric_filter() {
    let mut df = test_df(vec![("price", vec![Some("-5"), None, Some("abc")])]);

    let summary = clean_frame(&mut df, &CleaningOptions::default()).unwrap();

    // Completeness still applies to the present field; the numeric filter
    // needs both price and quantity.
    assert_eq!(summary.completeness.after, 2);
    assert_eq!(summary.validity.dropped(), 0);
    assert_eq!(df.height(), 2);
}

#[test]
fn test_ragged_input_is_cleaned_in_lenient_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "raw.csv",
        b"product,price,qty\nShirt,10,2\nBroken,1,2,3\nHat,5,1\n",
    );
    let output = dir.path().join("clean.csv");

    let result = run_clean(&CleanConfig::new(&input, &output)).unwrap();

    assert_eq!(result.strategy, ReadStrategy::Lenient);
    assert_eq!(result.discarded_rows, 1);
    assert_eq!(result.output_rows(), 2);
}
