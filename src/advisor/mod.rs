//! Advisor domain — requirement aggregation, the recommendation engine, and
//! the stash summarizer, plus the whole-stash pass that ties them together.
//!
//! Everything here is a pure function of its inputs: given a stash snapshot
//! and a progression snapshot, analysis is deterministic and side-effect
//! free. The requirement index is recomputed per pass, never cached.

pub mod engine;
pub mod requirements;
pub mod summary;

use log::warn;

use crate::progression::ProgressionRecord;
use crate::shared::*;

pub use engine::{analyze, effective_action};
pub use requirements::compute_requirement_index;
pub use summary::{sort_for_display, summarize};

/// Run one full analysis pass over a stash.
///
/// Computes the requirement index once from the tree and progression
/// snapshot, then analyzes each line. Lines with quantity 0 are logically
/// absent and skipped; lines referencing an item the catalog does not know
/// are skipped with a warning rather than failing the pass.
pub fn analyze_stash(
    lines: &[StashLine],
    catalog: &ItemCatalog,
    tree: &UpgradeTree,
    record: &ProgressionRecord,
) -> Vec<Recommendation> {
    let index = compute_requirement_index(tree, record);

    lines
        .iter()
        .filter(|line| line.quantity > 0)
        .filter_map(|line| match catalog.get(&line.item_id) {
            Some(item) => Some(analyze(line, item, &index)),
            None => {
                warn!("[Advisor] Skipping unknown item '{}' in stash.", line.item_id);
                None
            }
        })
        .collect()
}
