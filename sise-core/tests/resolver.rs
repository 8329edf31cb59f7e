use serde_json::json;
use sise_core::{Candidates, Document, Resolution, resolve, score};
use sise_types::{AliasSet, GuardRange, Guards, ResolverSpec, ScoreWeights};

fn tree(value: serde_json::Value) -> Document {
    Document::Tree(value)
}

fn quote_page() -> Document {
    tree(json!({
        "props": {
            "state": {
                "queries": [
                    { "key": ["banner"], "data": { "impressions": 48122 } },
                    {
                        "key": ["quote"],
                        "data": {
                            "symbolCode": "KOSPI",
                            "tradePrice": 6850.00,
                            "changePrice": 13.83,
                            "tradeDate": "25.08.22",
                            "accTradeVolume": 430112845
                        }
                    }
                ]
            }
        },
        "buildId": "4f2c1a"
    }))
}

#[test]
fn resolves_nested_quote_node() {
    let spec = ResolverSpec::default();
    let Resolution::Resolved(bundle) = resolve(&quote_page(), &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 6850.0);
    assert_eq!(bundle.change, Some(13.83));
    assert_eq!(bundle.date.as_deref(), Some("25.08.22"));
    assert_eq!(bundle.score, spec.weights.max_score());
}

#[test]
fn previous_is_always_current_minus_change() {
    let Resolution::Resolved(bundle) = resolve(&quote_page(), &ResolverSpec::default()) else {
        panic!("expected a resolved bundle");
    };
    let change = bundle.change.unwrap();
    // Exact identity, not approximate: previous is recomputed, never copied.
    assert_eq!(bundle.previous, Some(bundle.current - change));
}

#[test]
fn change_derived_previous_overrides_observed_candidate() {
    let doc = tree(json!({
        "tradePrice": 2000.0,
        "changePrice": 10.0,
        "prevClosingPrice": 1500.0
    }));
    let Resolution::Resolved(bundle) = resolve(&doc, &ResolverSpec::default()) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.previous, Some(1990.0));
}

#[test]
fn resolution_is_deterministic() {
    let spec = ResolverSpec::default();
    let doc = quote_page();
    let first = resolve(&doc, &spec);
    let second = resolve(&doc, &spec);
    assert_eq!(first, second);
}

#[test]
fn first_encountered_node_wins_ties() {
    // Both nodes score identically; object keys traverse in sorted order, so
    // `alpha` is encountered first and must win.
    let doc = tree(json!({
        "alpha": { "tradePrice": 2000.0, "changePrice": 10.0 },
        "beta": { "tradePrice": 3000.0, "changePrice": 20.0 }
    }));
    let Resolution::Resolved(bundle) = resolve(&doc, &ResolverSpec::default()) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 2000.0);
}

#[test]
fn strong_match_stops_the_walk() {
    let spec = ResolverSpec {
        strong_match: 12,
        ..ResolverSpec::default()
    };
    // The first node reaches exactly the strong-match score; the second would
    // score higher but must never be reached.
    let doc = tree(json!({
        "a": { "tradePrice": 1100.0, "changePrice": 600.0 },
        "b": { "tradePrice": 6850.0, "changePrice": 13.83, "tradeDate": "25.08.22" }
    }));
    let Resolution::Resolved(bundle) = resolve(&doc, &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 1100.0);
    assert_eq!(bundle.score, 12);
}

#[test]
fn step_bound_terminates_deep_documents() {
    let spec = ResolverSpec {
        max_steps: 2,
        ..ResolverSpec::default()
    };
    // The quote node sits at depth 3, past the step budget.
    let doc = tree(json!({
        "a": { "b": { "tradePrice": 2000.0, "changePrice": 10.0 } }
    }));
    assert_eq!(resolve(&doc, &spec), Resolution::Exhausted);
}

#[test]
fn coherence_rejects_wildly_off_previous() {
    let spec = ResolverSpec {
        guards: Guards {
            level: GuardRange::new(1_000.0, 100_000.0),
            ..Guards::default()
        },
        ..ResolverSpec::default()
    };
    // 68,000 passes the level guard on its own but is no plausible previous
    // close next to 6,800.
    let doc = tree(json!({
        "tradePrice": 6800.0,
        "prevClosingPrice": 68000.0
    }));
    let Resolution::Resolved(bundle) = resolve(&doc, &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.previous, None);
    assert_eq!(bundle.change, None);
}

#[test]
fn alias_order_decides_between_present_keys() {
    let doc = tree(json!({ "price": 1500.0, "tradePrice": 2000.0 }));
    let Resolution::Resolved(bundle) = resolve(&doc, &ResolverSpec::default()) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 2000.0);
}

#[test]
fn guard_rejection_falls_through_to_next_alias() {
    let doc = tree(json!({ "tradePrice": 5.0, "price": 1800.0 }));
    let Resolution::Resolved(bundle) = resolve(&doc, &ResolverSpec::default()) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 1800.0);
}

#[test]
fn string_encoded_numbers_resolve() {
    let doc = tree(json!({
        "currentPrice": "6,466.91",
        "netChange": 96.74,
        "date": "2025.08.22"
    }));
    let spec = ResolverSpec {
        guards: Guards::broad_index(),
        ..ResolverSpec::default()
    };
    let Resolution::Resolved(bundle) = resolve(&doc, &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 6466.91);
    assert_eq!(bundle.date.as_deref(), Some("2025.08.22"));
    assert_eq!(bundle.score, spec.weights.max_score());
}

#[test]
fn negative_string_change_keeps_its_sign() {
    let doc = tree(json!({ "tradePrice": 2000.0, "change": "-12.5" }));
    let Resolution::Resolved(bundle) = resolve(&doc, &ResolverSpec::default()) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.change, Some(-12.5));
}

#[test]
fn date_shaped_string_is_not_a_value() {
    let doc = tree(json!({ "tradePrice": "2025.08.22" }));
    assert_eq!(resolve(&doc, &ResolverSpec::default()), Resolution::Exhausted);
}

#[test]
fn scalar_and_empty_documents_exhaust() {
    let spec = ResolverSpec::default();
    assert_eq!(resolve(&tree(json!(42)), &spec), Resolution::Exhausted);
    assert_eq!(resolve(&tree(json!(null)), &spec), Resolution::Exhausted);
    assert_eq!(resolve(&tree(json!({})), &spec), Resolution::Exhausted);
    assert_eq!(
        resolve(&Document::Text(String::new()), &spec),
        Resolution::Exhausted
    );
}

#[test]
fn unrelated_structure_exhausts() {
    let doc = tree(json!({
        "layout": { "header": { "links": [{ "href": "/a" }] } },
        "metrics": { "render_ms": 412 }
    }));
    assert_eq!(resolve(&doc, &ResolverSpec::default()), Resolution::Exhausted);
}

#[test]
fn text_mode_resolves_labeled_lines() {
    let body = [
        "코스피 시세",
        "기준일 25.08.22",
        "현재지수 6,850.00",
        "전일종가 6,836.17",
    ]
    .join("\n");
    let spec = ResolverSpec {
        aliases: AliasSet::text_defaults(),
        ..ResolverSpec::default()
    };
    let Resolution::Resolved(bundle) = resolve(&Document::Text(body), &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 6850.0);
    assert_eq!(bundle.previous, Some(6836.17));
    let change = bundle.change.unwrap();
    assert!((change - 13.83).abs() < 1e-9);
    assert_eq!(bundle.date.as_deref(), Some("25.08.22"));
}

#[test]
fn text_mode_catches_label_spelling_variants() {
    // "전일지가" is not in the label list verbatim; the bare "전일" catches it.
    let body = "전일지가 6,836.17\n현재지수 6,850.00";
    let spec = ResolverSpec {
        aliases: AliasSet::text_defaults(),
        ..ResolverSpec::default()
    };
    let Resolution::Resolved(bundle) = resolve(&Document::Text(body.into()), &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 6850.0);
    assert_eq!(bundle.previous, Some(6836.17));
    assert!((bundle.change.unwrap() - 13.83).abs() < 1e-9);
}

#[test]
fn text_mode_reads_value_on_the_following_line() {
    let body = "현재지수\n6,850.00\n기타 99";
    let spec = ResolverSpec {
        aliases: AliasSet::text_defaults(),
        ..ResolverSpec::default()
    };
    let Resolution::Resolved(bundle) = resolve(&Document::Text(body.into()), &spec) else {
        panic!("expected a resolved bundle");
    };
    assert_eq!(bundle.current, 6850.0);
}

#[test]
fn text_mode_without_current_label_exhausts() {
    let body = "기준일 25.08.22\n거래대금 12조";
    let spec = ResolverSpec {
        aliases: AliasSet::text_defaults(),
        ..ResolverSpec::default()
    };
    assert_eq!(resolve(&Document::Text(body.into()), &spec), Resolution::Exhausted);
}

#[test]
fn score_adds_named_weights() {
    let guards = Guards::default();
    let weights = ScoreWeights::default();

    assert_eq!(score(&Candidates::default(), &guards, &weights), 0);

    let date_only = Candidates {
        date: Some("25.08.22".into()),
        ..Candidates::default()
    };
    assert_eq!(score(&date_only, &guards, &weights), weights.date);

    let full = Candidates {
        current: Some(6850.0),
        change: Some(13.83),
        previous: Some(6836.17),
        date: Some("25.08.22".into()),
    };
    assert_eq!(score(&full, &guards, &weights), weights.max_score());
}

#[test]
fn delta_bonus_uses_previous_when_change_is_absent() {
    let guards = Guards::default();
    let weights = ScoreWeights::default();
    let candidates = Candidates {
        current: Some(2000.0),
        previous: Some(1900.0),
        ..Candidates::default()
    };
    // current + delta + level bonus + delta bonus, no date.
    assert_eq!(
        score(&candidates, &guards, &weights),
        weights.current + weights.delta + weights.level_bonus + weights.delta_bonus
    );
}

#[test]
fn level_bonus_needs_a_margin_above_the_floor() {
    let guards = Guards::default();
    let weights = ScoreWeights::default();
    let near_floor = Candidates {
        current: Some(1100.0),
        ..Candidates::default()
    };
    assert_eq!(score(&near_floor, &guards, &weights), weights.current);
}
