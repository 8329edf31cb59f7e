//! Static fixture documents shaped like real quote-page payloads.

use serde_json::{Value, json};

/// Embedded page-state blob for a domestic index, with the quote fields
/// buried under unrelated siblings the way hydration payloads nest them.
#[must_use]
pub fn kospi_tree() -> Value {
    json!({
        "props": {
            "pageProps": {
                "locale": "ko",
                "navigation": {
                    "items": ["home", "domestic", "global"],
                    "activeIndex": 1
                },
                "dehydratedState": {
                    "queries": [
                        {
                            "queryKey": ["banner", 3],
                            "state": { "data": { "impressions": 48122, "ratio": 0.4 } }
                        },
                        {
                            "queryKey": ["quote", "KOSPI"],
                            "state": {
                                "data": {
                                    "symbolCode": "KOSPI",
                                    "name": "코스피",
                                    "tradePrice": 6850.00,
                                    "changePrice": 13.83,
                                    "tradeDate": "25.08.22",
                                    "highPrice": 6871.44,
                                    "lowPrice": 6822.05,
                                    "accTradeVolume": 430112845
                                }
                            }
                        }
                    ]
                }
            }
        },
        "buildId": "4f2c1a",
        "runtimeConfig": { "apiHost": "example.invalid" }
    })
}

/// US index payload using the alternate key vocabulary.
#[must_use]
pub fn sp500_tree() -> Value {
    json!({
        "meta": { "generated": "2025-08-22T16:10:03Z" },
        "data": {
            "global": {
                "symbol": "US.SP500",
                "currentPrice": "6,466.91",
                "netChange": 96.74,
                "date": "2025.08.22",
                "currency": "USD"
            },
            "related": [
                { "symbol": "US.COMP", "currentPrice": "21,496.53", "netChange": 396.22, "date": "2025.08.22" }
            ]
        }
    })
}

/// Rendered visible-text dump of a domestic index page.
#[must_use]
pub fn kospi_text() -> String {
    [
        "코스피 시세",
        "기준일 25.08.22",
        "현재지수 6,850.00",
        "전일종가 6,836.17",
        "거래대금 12조 4,815억",
        "시가총액 2,845조 1,002억",
    ]
    .join("\n")
}

/// Structured payload with plenty of nesting and no quote fields at all;
/// resolving it exhausts the tier.
#[must_use]
pub fn noise_tree() -> Value {
    json!({
        "layout": {
            "header": { "links": [ { "href": "/a" }, { "href": "/b" } ] },
            "footer": { "year": 2025, "sections": [ { "title": "about" } ] }
        },
        "metrics": { "render_ms": 412, "cache": true }
    })
}
