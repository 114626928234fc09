//! Requirement aggregator — derives "what is still needed" from the static
//! upgrade tree and a progression snapshot.
//!
//! The index is ephemeral: recompute it from the record whenever either the
//! record or the tree changes. Never cache it across a tier change — a stale
//! index is exactly the bug the pure recomputation exists to prevent.

use crate::progression::ProgressionRecord;
use crate::shared::*;

/// Build the map from item id to its still-open requirements.
///
/// Covers every tier strictly above the completed tier of its track. Entry
/// order within each item's list is track definition order, then tier
/// ascending — the reason strings show only the first two sources, so this
/// ordering is load-bearing.
///
/// Quantities from different sources stay separate entries; "is required at
/// all" is a presence check, not a quantity sum. Items with no open
/// requirements are absent from the map entirely.
pub fn compute_requirement_index(
    tree: &UpgradeTree,
    record: &ProgressionRecord,
) -> RequirementIndex {
    let mut index = RequirementIndex::new();

    for track in &tree.tracks {
        let completed = record.completed_tier(track);

        for tier in &track.tiers {
            if tier.tier <= completed {
                continue;
            }
            for req in &tier.requirements {
                index
                    .entry(req.item_id.clone())
                    .or_default()
                    .push(NeededFor {
                        kind: track.kind,
                        source: format!("{} Tier {}", track.name, tier.tier),
                        amount: req.quantity,
                    });
            }
        }
    }

    index
}
