//! Stash summarizer — folds a pass's recommendations into display totals.

use crate::shared::*;

/// One-pass fold: per-action counts, plus sale proceeds for Sell records
/// (base value × quantity held).
pub fn summarize(records: &[Recommendation]) -> StashSummary {
    records.iter().fold(StashSummary::default(), |mut summary, rec| {
        match rec.action {
            RecommendAction::Keep => summary.keep_count += 1,
            RecommendAction::Sell => {
                summary.sell_count += 1;
                summary.total_sell_value += rec.item.base_value as u64 * rec.quantity as u64;
            }
            RecommendAction::Recycle => summary.recycle_count += 1,
            RecommendAction::Use => summary.use_count += 1,
        }
        summary
    })
}

/// Display order: highest priority first, ties broken by the fixed action
/// order keep, use, sell, recycle. Reproducible but not semantically
/// significant.
pub fn sort_for_display(records: &mut [Recommendation]) {
    records.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(a.action.display_rank().cmp(&b.action.display_rank()))
    });
}
