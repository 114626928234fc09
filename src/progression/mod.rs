//! Progression store — the per-track completed-tier state machine.
//!
//! This is the only mutable state in the engine. Every other component is a
//! pure function of a `ProgressionRecord` snapshot plus the static tree and
//! catalog. Only two transitions exist: advance a track by at most one
//! tier, or undo the most recent completion. Illegal calls are silent
//! no-ops, never errors, so a confused or replayed UI action cannot
//! corrupt state. A track can never end up with tier 3 complete but
//! tier 2 not.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Progression record
// ─────────────────────────────────────────────────────────────────────────────

/// Per-track highest completed tier. Stations floor at 0, the companion
/// track floors at 1. Tracks absent from the map are implicitly at their
/// floor, so a record deserialized from an older save stays valid when the
/// tree gains a track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    pub completed: HashMap<TrackId, u32>,
}

impl ProgressionRecord {
    /// Fresh record with every track seeded at its floor.
    pub fn new(tree: &UpgradeTree) -> Self {
        let completed = tree
            .tracks
            .iter()
            .map(|track| (track.id.clone(), track.floor()))
            .collect();
        Self { completed }
    }

    /// Highest completed tier for a track, or its floor if never advanced.
    pub fn completed_tier(&self, track: &UpgradeTrack) -> u32 {
        self.completed
            .get(&track.id)
            .copied()
            .unwrap_or_else(|| track.floor())
    }

    /// Mark `target_tier` of a track as completed.
    ///
    /// Legal only when `target_tier <= current + 1` (re-confirming the
    /// current tier is allowed and changes nothing; skipping ahead is not)
    /// and `target_tier` does not exceed the track's max tier. Illegal
    /// calls are no-ops — a safety clamp, not an error.
    pub fn advance(&mut self, tree: &UpgradeTree, track_id: &str, target_tier: u32) {
        let track = match tree.get(track_id) {
            Some(t) => t,
            None => {
                warn!("[Progression] advance on unknown track '{}'", track_id);
                return;
            }
        };

        let current = self.completed_tier(track);

        if target_tier > current + 1 {
            warn!(
                "[Progression] Ignoring skip-ahead on '{}': tier {} requested at tier {}.",
                track_id, target_tier, current
            );
            return;
        }
        if target_tier > track.max_tier() {
            warn!(
                "[Progression] Ignoring advance past max on '{}': tier {} > max {}.",
                track_id,
                target_tier,
                track.max_tier()
            );
            return;
        }

        let next = current.max(target_tier);
        if next != current {
            debug!("[Progression] '{}' advanced: tier {} -> {}.", track_id, current, next);
        }
        self.completed.insert(track.id.clone(), next);
    }

    /// Undo the most recent completion of a track.
    ///
    /// Legal only when `tier` is the track's current completed tier and the
    /// track is strictly above its floor. A stale `tier` value (the caller's
    /// idea of "current" no longer matches) is a no-op, which makes a
    /// replayed undo harmless.
    pub fn regress(&mut self, tree: &UpgradeTree, track_id: &str, tier: u32) {
        let track = match tree.get(track_id) {
            Some(t) => t,
            None => {
                warn!("[Progression] regress on unknown track '{}'", track_id);
                return;
            }
        };

        let current = self.completed_tier(track);

        if tier != current {
            debug!(
                "[Progression] Ignoring stale regress on '{}': tier {} given, current is {}.",
                track_id, tier, current
            );
            return;
        }
        if current <= track.floor() {
            debug!("[Progression] '{}' already at floor; regress ignored.", track_id);
            return;
        }

        self.completed.insert(track.id.clone(), current - 1);
        debug!("[Progression] '{}' regressed: tier {} -> {}.", track_id, current, current - 1);
    }

    /// True once every tier of every track has been completed.
    pub fn is_complete(&self, tree: &UpgradeTree) -> bool {
        tree.tracks
            .iter()
            .all(|track| self.completed_tier(track) >= track.max_tier())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display helper
// ─────────────────────────────────────────────────────────────────────────────

/// What the next tier of a track needs, for a display layer's upgrade list.
/// `None` once the track is fully completed.
pub fn next_tier_requirements<'a>(
    track: &'a UpgradeTrack,
    record: &ProgressionRecord,
) -> Option<&'a UpgradeTier> {
    let current = record.completed_tier(track);
    if current >= track.max_tier() {
        return None;
    }
    track.tier(current + 1)
}
