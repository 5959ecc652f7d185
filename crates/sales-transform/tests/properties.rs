//! Property tests for the cleaning stages.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use sales_transform::{
    any_to_f64, drop_invalid_numeric, drop_missing_required, normalize_column_name,
    normalize_column_names, strip_whitespace,
};

const REQUIRED: [&str; 2] = ["price", "quantity"];

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[ ]{0,2}-?[0-9]{1,4}(\\.[0-9]{1,2})?[ ]{0,2}".prop_map(Some),
        "[a-z ]{0,6}".prop_map(Some),
    ]
}

fn sales_frame(price: Vec<Option<String>>, quantity: Vec<Option<String>>) -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("price".into(), price).into_column(),
        Series::new("quantity".into(), quantity).into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

proptest! {
    #[test]
    fn column_name_normalization_is_idempotent(name in "[ A-Za-z0-9_-]{0,20}") {
        let once = normalize_column_name(&name);
        prop_assert_eq!(normalize_column_name(&once), once.clone());
        prop_assert!(!once.contains(' '));
        prop_assert!(!once.contains('-'));
    }

    #[test]
    fn frame_normalization_is_idempotent(names in prop::collection::btree_set("[A-Za-z][ A-Za-z0-9-]{0,8}", 1..6)) {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new(name.as_str().into(), vec!["x"]).into_column())
            .collect();
        let mut df = DataFrame::new(columns).unwrap();
        normalize_column_names(&mut df).unwrap();
        let first = df.get_column_names_owned();
        normalize_column_names(&mut df).unwrap();
        prop_assert_eq!(df.get_column_names_owned(), first);
    }

    #[test]
    fn whitespace_trimming_is_idempotent(values in prop::collection::vec(cell(), 0..20)) {
        let series = Series::new("product".into(), values);
        let mut df = DataFrame::new(vec![series.into_column()]).unwrap();
        strip_whitespace(&mut df, &["product"]).unwrap();
        let once = df.clone();
        strip_whitespace(&mut df, &["product"]).unwrap();
        prop_assert!(df.equals_missing(&once));
    }

    #[test]
    fn filters_only_remove_rows_and_leave_valid_numbers(
        rows in prop::collection::vec((cell(), cell()), 0..30)
    ) {
        let (price, quantity): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let mut df = sales_frame(price, quantity);
        let input_rows = df.height();

        let complete = drop_missing_required(&mut df, &REQUIRED).unwrap();
        let valid = drop_invalid_numeric(&mut df, &REQUIRED).unwrap();

        prop_assert!(complete.after <= input_rows);
        prop_assert!(valid.after <= complete.after);
        prop_assert_eq!(df.height(), valid.after);
        for name in REQUIRED {
            let column = df.column(name).unwrap();
            for idx in 0..df.height() {
                let value = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null));
                prop_assert!(matches!(value, Some(v) if v >= 0.0));
            }
        }
    }
}
