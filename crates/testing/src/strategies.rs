//! Proptest strategies for cells, conditions and record batches.

use athlete_insights_domain::{
    record::{RecordBatch, REQUIRED_COLUMNS},
    value::CellValue,
};
use proptest::prelude::*;

/// Any cell with finite numbers; text may look numeric
pub fn cell_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Null),
        any::<i64>().prop_map(CellValue::Integer),
        (-1.0e6f64..1.0e6).prop_map(CellValue::Number),
        "[ a-zA-Z0-9.<>=-]{0,12}".prop_map(CellValue::Text),
    ]
}

/// Well-formed condition text such as `<=1.55`
pub fn condition_text() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("<"), Just("<="), Just(">"), Just(">=")],
        -1000i32..1000,
        0u32..100,
    )
        .prop_map(|(op, whole, frac)| format!("{}{}.{:02}", op, whole, frac))
}

/// Codes drawn mostly from the fixture catalog, sometimes unknown
pub fn test_code() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop_oneof![Just("SPR10"), Just("CMJ"), Just("OHS"), Just("HIPB")].prop_map(String::from),
        1 => "[A-Z]{2,5}",
    ]
}

/// Batch with the canonical columns and up to `max_rows` rows
pub fn record_batch(max_rows: usize) -> impl Strategy<Value = RecordBatch> {
    prop::collection::vec((test_code(), cell_value()), 0..=max_rows).prop_map(|rows| {
        let mut batch = RecordBatch::new(REQUIRED_COLUMNS);
        for (code, value) in rows {
            // Width always matches the canonical columns.
            let _ = batch.push_row(vec![
                CellValue::from("Athlete"),
                CellValue::from("2024-03-01"),
                CellValue::from("Soccer"),
                CellValue::from("Test"),
                CellValue::Text(code),
                value,
            ]);
        }
        batch
    })
}
