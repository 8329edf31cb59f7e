use sise::{CSV_HEADER, QuoteRow, RowKind, Snapshot, format_market_cap, to_csv, to_json};

fn sample_row() -> QuoteRow {
    QuoteRow {
        kind: RowKind::Index,
        code: "KOSPI".into(),
        date: "25.08.22".into(),
        value: "6850.00".into(),
        prev_value: "6836.17".into(),
        change: "13.83".into(),
        change_pct: "0.20%".into(),
        market_cap: "2,845조 1,002억".into(),
        asof_kst: "2025-08-22 16:30:00 | daum-index".into(),
        fetched_at_kst: "2025-08-22 16:30:00".into(),
    }
}

#[test]
fn header_matches_the_positional_contract() {
    assert_eq!(
        CSV_HEADER.join(","),
        "type,code,date,value,prev_value,change,change_pct,market_cap,asof_kst,fetched_at_kst"
    );
}

#[test]
fn rows_render_in_column_order() {
    let csv = to_csv(&[sample_row()]);
    let mut lines = csv.lines();
    assert_eq!(lines.next().unwrap(), CSV_HEADER.join(","));
    // The market cap contains a comma, so it is quoted.
    assert_eq!(
        lines.next().unwrap(),
        "index,KOSPI,25.08.22,6850.00,6836.17,13.83,0.20%,\"2,845조 1,002억\",2025-08-22 16:30:00 | daum-index,2025-08-22 16:30:00"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn fields_with_separators_quotes_and_newlines_are_escaped() {
    let mut row = sample_row();
    row.code = "Sam \"Sung\", Co".into();
    row.asof_kst = "line one\nline two".into();

    let csv = to_csv(&[row]);
    let body = csv.lines().nth(1).unwrap();
    assert!(body.starts_with("index,\"Sam \"\"Sung\"\", Co\","));
    // The newline field is quoted, so the logical row spans two physical lines.
    assert!(csv.contains("\"line one\nline two\""));
}

#[test]
fn blank_fields_stay_blank_in_csv() {
    let row = QuoteRow::blank(RowKind::Stock, "005930", "2025-08-22 16:30:00");
    let csv = to_csv(&[row]);
    let body = csv.lines().nth(1).unwrap();
    assert_eq!(body, "stock,005930,,,,,,,,2025-08-22 16:30:00");
}

#[test]
fn json_projection_carries_the_run_stamp_and_rows() {
    let snapshot = Snapshot {
        updated_at: "2025-08-22 16:30:00".into(),
        rows: vec![sample_row()],
    };
    let rendered = to_json(&snapshot).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["updated_at"], "2025-08-22 16:30:00");
    assert_eq!(value["rows"][0]["type"], "index");
    assert_eq!(value["rows"][0]["value"], "6850.00");
}

#[test]
fn market_cap_renders_with_two_decimals_and_label() {
    assert_eq!(format_market_cap(2.5, "T USD"), "2.50 T USD");
    assert_eq!(format_market_cap(2845.1002, "조"), "2845.10 조");
}
