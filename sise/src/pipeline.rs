use sise_core::{Bundle, Resolution, resolve};
use sise_types::{QuoteRow, SiseError, Snapshot};

use crate::core::{EntityGroup, EntitySpec, Sise};
use crate::merge::merge_groups;
use crate::report::{fmt_opt, fmt_pct};

impl Sise {
    /// Resolve every declared entity and assemble the run's snapshot.
    ///
    /// Groups are resolved in declared sequence; entities within a group run
    /// concurrently. The output holds exactly one row per declared entity, in
    /// declared order, with blank fields where resolution failed — partial
    /// failure never aborts the batch.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no entities are declared at all; that is the
    /// only fatal condition.
    pub async fn snapshot(&self, groups: Vec<EntityGroup>) -> Result<Snapshot, SiseError> {
        if groups.iter().all(|g| g.entities.is_empty()) {
            return Err(SiseError::invalid_arg(
                "no entities declared; add at least one EntitySpec".to_string(),
            ));
        }

        let mut resolved_groups = Vec::with_capacity(groups.len());
        for group in &groups {
            let rows =
                futures::future::join_all(group.entities.iter().map(|e| self.resolve_entity(e)))
                    .await;
            resolved_groups.push(rows);
        }

        Ok(Snapshot {
            updated_at: self.clock.kst_stamp(),
            rows: merge_groups(resolved_groups),
        })
    }

    /// Resolve one entity across its fallback tiers.
    ///
    /// Tiers are tried strictly in order. An acquisition failure is logged
    /// and advances to the next tier; so does an exhausted or low-confidence
    /// bundle. When every tier is spent the entity degrades to a blank row
    /// rather than an error.
    pub async fn resolve_entity(&self, entity: &EntitySpec) -> QuoteRow {
        let fetched_at = self.clock.kst_stamp();

        for tier in &entity.tiers {
            let doc = match tier.acquire().await {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!(
                        entity = %entity.code,
                        tier = tier.name(),
                        error = %e,
                        "tier acquisition failed; advancing"
                    );
                    continue;
                }
            };

            match resolve(&doc, &entity.resolver) {
                Resolution::Resolved(bundle) if bundle.score >= self.cfg.min_confidence => {
                    tracing::debug!(
                        entity = %entity.code,
                        tier = tier.name(),
                        score = bundle.score,
                        "bundle accepted"
                    );
                    return self.row_from_bundle(entity, &bundle, &fetched_at, tier.name());
                }
                Resolution::Resolved(bundle) => {
                    tracing::debug!(
                        entity = %entity.code,
                        tier = tier.name(),
                        score = bundle.score,
                        min = self.cfg.min_confidence,
                        "bundle below confidence threshold; advancing"
                    );
                }
                Resolution::Exhausted => {
                    tracing::debug!(
                        entity = %entity.code,
                        tier = tier.name(),
                        "tier exhausted; advancing"
                    );
                }
            }
        }

        tracing::warn!(entity = %entity.code, "all tiers exhausted; emitting blank row");
        let mut row = QuoteRow::blank(entity.kind, entity.code.clone(), fetched_at.clone());
        row.market_cap = entity.market_cap.clone().unwrap_or_default();
        row.asof_kst = format!("{fetched_at} (unresolved)");
        row
    }

    fn row_from_bundle(
        &self,
        entity: &EntitySpec,
        bundle: &Bundle,
        fetched_at: &str,
        tier_name: &str,
    ) -> QuoteRow {
        QuoteRow {
            kind: entity.kind,
            code: entity.code.clone(),
            date: bundle.date.clone().unwrap_or_default(),
            value: fmt_opt(Some(bundle.current)),
            prev_value: fmt_opt(bundle.previous),
            change: fmt_opt(bundle.change),
            change_pct: fmt_pct(pct_of(bundle)),
            market_cap: entity.market_cap.clone().unwrap_or_default(),
            asof_kst: entity
                .asof_note
                .clone()
                .unwrap_or_else(|| format!("{fetched_at} | {tier_name}")),
            fetched_at_kst: fetched_at.to_string(),
        }
    }
}

fn pct_of(bundle: &Bundle) -> Option<f64> {
    sise_core::complete(Some(bundle.current), bundle.change, bundle.previous).change_pct
}
