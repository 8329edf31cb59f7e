use std::sync::Arc;

use sise::{EntityGroup, EntitySpec, Guards, Magnitude, ResolverSpec, RowKind, Sise};
use sise_core::AliasSet;
use sise_mock::{MockSource, fixtures};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sise=debug".into()),
        )
        .init();

    // 1. Build the orchestrator with the default confidence threshold.
    let sise = Sise::builder().build();

    // 2. Declare entities with their fallback tiers. The primary KOSPI tier
    //    fails to acquire, so the pipeline falls back to the rendered-text
    //    tier; the S&P 500 resolves on its first (structured) tier.
    let cap = sise::format_market_cap(
        sise::parse_market_cap("시가총액 2,845조 1,002억", Magnitude::Trillion)?,
        "조",
    );
    let kospi = EntitySpec::new(RowKind::Index, "KOSPI")
        .with_tier(Arc::new(MockSource::failing("daum-index", "HTTP 503")))
        .with_tier(Arc::new(MockSource::text("page-text", fixtures::kospi_text())))
        .resolver(ResolverSpec {
            aliases: AliasSet::text_defaults(),
            ..ResolverSpec::default()
        })
        .market_cap(cap);

    let sp500 = EntitySpec::new(RowKind::UsIndex, "S&P 500")
        .with_tier(Arc::new(MockSource::tree("global-quote", fixtures::sp500_tree())))
        .resolver(ResolverSpec {
            guards: Guards::broad_index(),
            ..ResolverSpec::default()
        });

    // 3. Resolve everything and project the snapshot.
    let snapshot = sise
        .snapshot(vec![
            EntityGroup::new(vec![kospi]),
            EntityGroup::new(vec![sp500]),
        ])
        .await?;

    println!("{}", sise::to_csv(&snapshot.rows));
    println!("{}", sise::to_json(&snapshot)?);

    Ok(())
}
