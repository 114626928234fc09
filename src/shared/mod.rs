//! Shared types for the stash advisor engine.
//!
//! This is the type contract. Every domain module imports from here.
//! No domain imports from any other domain directly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// ITEMS
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// Using string IDs for data-driven flexibility.
pub type ItemId = String;

/// Unique identifier for an upgrade track ("gunsmith", "companion", ...).
pub type TrackId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Modification,
    QuickUse,
    Throwable,
    Blueprint,
    BasicMaterial,
    TopsideMaterial,
    RefinedMaterial,
    AdvancedMaterial,
    Recyclable,
    Trinket,
    Key,
    Ammunition,
    Augment,
    Gadget,
    Nature,
    Consumable,
    QuestItem,
}

impl ItemCategory {
    /// True for the four crafting-material tiers.
    pub fn is_material(self) -> bool {
        matches!(
            self,
            ItemCategory::BasicMaterial
                | ItemCategory::TopsideMaterial
                | ItemCategory::RefinedMaterial
                | ItemCategory::AdvancedMaterial
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Priority bonus contributed by this rarity (common = 0 ... legendary = 4).
    pub fn priority_bonus(self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }
}

/// One material yielded when an item is fed to the recycler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleOutput {
    pub material_id: ItemId,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    /// None for items without a rarity concept (some pure materials).
    pub rarity: Option<Rarity>,
    /// Empty = the recycler produces nothing from this item.
    pub recycle_output: Vec<RecycleOutput>,
    /// Sell value per unit, in the game currency.
    pub base_value: u32,
    /// Max per inventory stack (1 for weapons, larger for materials).
    pub stack_size: u32,
}

impl ItemDef {
    pub fn has_recycle_output(&self) -> bool {
        !self.recycle_output.is_empty()
    }

    /// Rarity bonus with the missing-rarity floor applied (absent = 0).
    pub fn rarity_bonus(&self) -> u8 {
        self.rarity.map(Rarity::priority_bonus).unwrap_or(0)
    }

    /// True if the item's rarity is common or absent. Absent rarity counts
    /// as the lowest tier for every rule that inspects it.
    pub fn is_common(&self) -> bool {
        matches!(self.rarity, Some(Rarity::Common) | None)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEM CATALOG — loaded from data
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: HashMap<ItemId, ItemDef>,
}

impl ItemCatalog {
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    pub fn insert(&mut self, def: ItemDef) {
        self.items.insert(def.id.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// STASH
// ═══════════════════════════════════════════════════════════════════════

/// One inventory entry belonging to a player. Quantity 0 is logically
/// absent; the stash pass skips such lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// UPGRADE TREE — static, fixed at build/load time
// ═══════════════════════════════════════════════════════════════════════

/// One item requirement inside a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// One discrete upgrade level within a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeTier {
    pub tier: u32,
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// A crafting station — tiers start at 1, completed tier 0 = fresh.
    Station,
    /// The single linear companion track. Tier 1 is the starting state,
    /// so the tier list starts at 2 and the completion floor is 1.
    Companion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeTrack {
    pub id: TrackId,
    pub name: String,
    pub kind: TrackKind,
    /// Tiers in ascending, contiguous order.
    pub tiers: Vec<UpgradeTier>,
}

impl UpgradeTrack {
    /// The "nothing completed" tier value for this track.
    pub fn floor(&self) -> u32 {
        match self.kind {
            TrackKind::Station => 0,
            TrackKind::Companion => 1,
        }
    }

    pub fn max_tier(&self) -> u32 {
        self.tiers.last().map(|t| t.tier).unwrap_or_else(|| self.floor())
    }

    pub fn tier(&self, number: u32) -> Option<&UpgradeTier> {
        self.tiers.iter().find(|t| t.tier == number)
    }
}

/// The full static tree. Track order here is definition order and drives
/// the order of requirement-index entries (and therefore reason strings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeTree {
    pub tracks: Vec<UpgradeTrack>,
}

impl UpgradeTree {
    pub fn get(&self, id: &str) -> Option<&UpgradeTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RECOMMENDATIONS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendAction {
    Keep,
    Sell,
    Recycle,
    Use,
}

impl RecommendAction {
    /// Fixed display order: keep, use, sell, recycle.
    pub fn display_rank(self) -> u8 {
        match self {
            RecommendAction::Keep => 0,
            RecommendAction::Use => 1,
            RecommendAction::Sell => 2,
            RecommendAction::Recycle => 3,
        }
    }
}

/// One still-open requirement referencing an item: which kind of track it
/// comes from, the human-readable source label ("Gunsmith Tier 2"), and
/// how many that tier wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeededFor {
    pub kind: TrackKind,
    pub source: String,
    pub amount: u32,
}

/// Derived map from item id to its still-open requirements. Absent key
/// means "not required" — the aggregator never inserts empty lists.
pub type RequirementIndex = HashMap<ItemId, Vec<NeededFor>>;

/// The engine's verdict for a single stash line. Produced fresh per
/// analysis pass; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub item_id: ItemId,
    pub item: ItemDef,
    pub quantity: u32,
    pub action: RecommendAction,
    pub reason: String,
    /// 1 (low) to 5 (high).
    pub priority: u8,
    pub needed_for: Vec<NeededFor>,
}

/// Aggregate view over one analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashSummary {
    pub keep_count: u32,
    pub sell_count: u32,
    pub recycle_count: u32,
    pub use_count: u32,
    /// Sum of base_value × quantity over all Sell recommendations.
    pub total_sell_value: u64,
}
