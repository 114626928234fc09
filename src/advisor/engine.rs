//! Recommendation engine — maps one stash line to a keep/sell/recycle/use
//! verdict with a human-readable reason and a 1–5 priority.
//!
//! The rule chain is evaluated in strict order and the first matching rule
//! wins. It is total: every {category, rarity, recycle-output, requirement}
//! combination resolves to exactly one action through the final fallback,
//! and nothing in here can fail.
//!
//! Action and reason are computed independently from the same requirement
//! presence check: whenever an item has open requirements the reason is the
//! "Needed for: ..." form even if an earlier rule (consumables) already
//! decided the action, so the two can never disagree.

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Tuned thresholds
// ─────────────────────────────────────────────────────────────────────────────

// Empirically tuned stockpile caps, not derived from a formal model.
// Keep in sync with product intent before adjusting.
const BASIC_MATERIAL_SELL_OVER: u32 = 100;
const MID_MATERIAL_SELL_OVER: u32 = 50;

/// How many requirement sources the reason string names before collapsing
/// the rest into a "+N more" suffix.
const REASON_SOURCES_SHOWN: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Analysis
// ─────────────────────────────────────────────────────────────────────────────

/// Analyze one stash line. `item` is the catalog entry for `line.item_id`;
/// the stash pass resolves it and skips lines the catalog does not know.
pub fn analyze(line: &StashLine, item: &ItemDef, index: &RequirementIndex) -> Recommendation {
    let needed_for: Vec<NeededFor> = index.get(&line.item_id).cloned().unwrap_or_default();
    let is_needed = !needed_for.is_empty();

    let (action, rule_reason) = decide(item, line.quantity, is_needed, index);

    // Requirement presence always wins the reason, regardless of which rule
    // decided the action.
    let reason = if is_needed {
        needed_reason(&needed_for)
    } else {
        rule_reason
    };

    Recommendation {
        item_id: line.item_id.clone(),
        item: item.clone(),
        quantity: line.quantity,
        action,
        reason,
        priority: priority(item, is_needed),
        needed_for,
    }
}

/// The ordered rule chain. Returns the action plus the reason used when the
/// item has no open requirements.
fn decide(
    item: &ItemDef,
    quantity: u32,
    is_needed: bool,
    index: &RequirementIndex,
) -> (RecommendAction, String) {
    use ItemCategory::*;
    use RecommendAction::*;

    // 1. Consumables and quick-use items are lost on death: use or lose.
    if matches!(item.category, Consumable | QuickUse) {
        return (Use, "Lost on death — use it before you lose it.".into());
    }

    // 2. Anything still required by an incomplete tier is kept, regardless
    //    of how many the player holds.
    if is_needed {
        return (Keep, String::new()); // reason comes from the needed form
    }

    // 3. Keys: one preserved for potential access, duplicates are surplus.
    if item.category == Key {
        return if quantity > 1 {
            (Sell, "Duplicate key — one is enough to keep.".into())
        } else {
            (Keep, "Keep one in case the door comes up.".into())
        };
    }

    // 4. Trinkets have no crafting use.
    if item.category == Trinket {
        return (Sell, "Trinkets have no crafting use — safe to sell.".into());
    }

    // 5. Recyclables feed the recycler when they yield anything.
    if item.category == Recyclable {
        return if item.has_recycle_output() {
            (Recycle, "Breaks down into useful materials.".into())
        } else {
            (Sell, "Nothing to recover from this — sell it.".into())
        };
    }

    // 6. Material stockpile thresholds.
    if item.category.is_material() {
        return material_rule(item.category, quantity);
    }

    // 7. Common weapons whose scrap is still wanted are worth more broken
    //    down than sold.
    if item.category == Weapon
        && item.has_recycle_output()
        && item.is_common()
        && item
            .recycle_output
            .iter()
            .any(|out| index.contains_key(&out.material_id))
    {
        return (
            Recycle,
            "Common weapon — recycle it for materials you still need.".into(),
        );
    }

    // 8–12. Categories that are kept or used unconditionally.
    match item.category {
        Modification | Augment | Gadget => {
            return (Keep, "Equipment worth holding on to.".into());
        }
        Ammunition => return (Keep, "Ammo is always worth keeping.".into()),
        Throwable => return (Use, "Throwables are lost on death — use them.".into()),
        Blueprint => return (Keep, "Blueprints unlock crafting — keep.".into()),
        Nature => return (Keep, "Keep for cooking and crafting.".into()),
        _ => {}
    }

    // 13. Fallback by rarity. Missing rarity counts as common.
    if item.is_common() {
        if item.has_recycle_output() {
            (Recycle, "Common item — recycle it for materials.".into())
        } else {
            (Sell, "Common item with no recycler value — sell it.".into())
        }
    } else {
        (Keep, "Higher rarity — keep until you know you don't need it.".into())
    }
}

/// Rule 6: the four material tiers with their stockpile caps.
fn material_rule(category: ItemCategory, quantity: u32) -> (RecommendAction, String) {
    use ItemCategory::*;
    use RecommendAction::*;

    match category {
        BasicMaterial if quantity > BASIC_MATERIAL_SELL_OVER => (
            Sell,
            format!("Stockpile is over {} — sell the surplus.", BASIC_MATERIAL_SELL_OVER),
        ),
        TopsideMaterial | RefinedMaterial if quantity > MID_MATERIAL_SELL_OVER => (
            Sell,
            format!("Stockpile is over {} — sell the surplus.", MID_MATERIAL_SELL_OVER),
        ),
        AdvancedMaterial => (Keep, "Advanced materials are always worth keeping.".into()),
        _ => (Keep, "Worth holding for future upgrades.".into()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Priority and reason text
// ─────────────────────────────────────────────────────────────────────────────

/// Base 1, +2 when the item has open requirements, + rarity bonus
/// (common or missing = 0 up to legendary = 4), capped at 5.
fn priority(item: &ItemDef, is_needed: bool) -> u8 {
    let mut score = 1u8;
    if is_needed {
        score += 2;
    }
    score += item.rarity_bonus();
    score.min(5)
}

/// "Needed for: Gunsmith Tier 2, Workbench Tier 1 +3 more"
fn needed_reason(needed_for: &[NeededFor]) -> String {
    let shown: Vec<&str> = needed_for
        .iter()
        .take(REASON_SOURCES_SHOWN)
        .map(|n| n.source.as_str())
        .collect();
    let mut reason = format!("Needed for: {}", shown.join(", "));
    if needed_for.len() > REASON_SOURCES_SHOWN {
        reason.push_str(&format!(" +{} more", needed_for.len() - REASON_SOURCES_SHOWN));
    }
    reason
}

// ─────────────────────────────────────────────────────────────────────────────
// Released-item second pass
// ─────────────────────────────────────────────────────────────────────────────

/// Effective action once an item's reason to be kept has been satisfied.
///
/// The display layer calls this after a tier completion releases an item
/// that the base pass said to keep: instead of re-deriving the whole rule
/// chain, a released keep collapses to recycle-vs-sell from the item's
/// recycle output. Records kept for any other reason (or not kept at all)
/// pass through unchanged.
pub fn effective_action(record: &Recommendation, released: bool) -> RecommendAction {
    if !released || record.action != RecommendAction::Keep || record.needed_for.is_empty() {
        return record.action;
    }
    if record.item.has_recycle_output() {
        RecommendAction::Recycle
    } else {
        RecommendAction::Sell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, category: ItemCategory) -> ItemDef {
        ItemDef {
            id: id.into(),
            name: id.into(),
            category,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 10,
            stack_size: 50,
        }
    }

    fn line(id: &str, quantity: u32) -> StashLine {
        StashLine { item_id: id.into(), quantity }
    }

    fn index_with(entries: &[(&str, &str, u32)]) -> RequirementIndex {
        let mut index = RequirementIndex::new();
        for (item_id, source, amount) in entries {
            index.entry((*item_id).into()).or_default().push(NeededFor {
                kind: TrackKind::Station,
                source: (*source).into(),
                amount: *amount,
            });
        }
        index
    }

    // ── Rule chain ───────────────────────────────────────────────────────

    #[test]
    fn test_consumable_and_quick_use_are_used() {
        let empty = RequirementIndex::new();
        for category in [ItemCategory::Consumable, ItemCategory::QuickUse] {
            let item = make_item("stim", category);
            let rec = analyze(&line("stim", 3), &item, &empty);
            assert_eq!(rec.action, RecommendAction::Use);
        }
    }

    #[test]
    fn test_consumable_with_requirement_still_used_but_reason_is_needed() {
        // Rule 1 fires before the requirement rule, but the reason still
        // takes the needed form — the two are computed independently.
        let item = make_item("herbal_stim", ItemCategory::Consumable);
        let index = index_with(&[("herbal_stim", "Med Station Tier 1", 2)]);
        let rec = analyze(&line("herbal_stim", 1), &item, &index);
        assert_eq!(rec.action, RecommendAction::Use);
        assert!(rec.reason.contains("Med Station Tier 1"));
    }

    #[test]
    fn test_required_item_is_kept_regardless_of_category() {
        // A trinket that a tier still wants: the requirement rule fires
        // before the trinket-sell rule.
        let item = make_item("dog_collar", ItemCategory::Trinket);
        let index = index_with(&[("dog_collar", "Companion Tier 2", 1)]);
        let rec = analyze(&line("dog_collar", 1), &item, &index);
        assert_eq!(rec.action, RecommendAction::Keep);
        assert_eq!(rec.reason, "Needed for: Companion Tier 2");
    }

    #[test]
    fn test_key_duplicates_sell_single_keeps() {
        let empty = RequirementIndex::new();
        let item = make_item("penthouse_key", ItemCategory::Key);
        assert_eq!(analyze(&line("penthouse_key", 1), &item, &empty).action, RecommendAction::Keep);
        assert_eq!(analyze(&line("penthouse_key", 2), &item, &empty).action, RecommendAction::Sell);
    }

    #[test]
    fn test_trinket_sells() {
        let empty = RequirementIndex::new();
        let item = make_item("garden_gnome", ItemCategory::Trinket);
        assert_eq!(analyze(&line("garden_gnome", 1), &item, &empty).action, RecommendAction::Sell);
    }

    #[test]
    fn test_recyclable_with_and_without_output() {
        let empty = RequirementIndex::new();
        let mut item = make_item("broken_radio", ItemCategory::Recyclable);
        assert_eq!(analyze(&line("broken_radio", 1), &item, &empty).action, RecommendAction::Sell);

        item.recycle_output = vec![RecycleOutput { material_id: "electronic_parts".into(), amount: 2 }];
        assert_eq!(analyze(&line("broken_radio", 1), &item, &empty).action, RecommendAction::Recycle);
    }

    #[test]
    fn test_basic_material_threshold_at_100() {
        let empty = RequirementIndex::new();
        let item = make_item("scrap_metal", ItemCategory::BasicMaterial);
        assert_eq!(analyze(&line("scrap_metal", 100), &item, &empty).action, RecommendAction::Keep);
        assert_eq!(analyze(&line("scrap_metal", 101), &item, &empty).action, RecommendAction::Sell);
    }

    #[test]
    fn test_mid_material_thresholds_at_50() {
        let empty = RequirementIndex::new();
        for category in [ItemCategory::TopsideMaterial, ItemCategory::RefinedMaterial] {
            let item = make_item("mat", category);
            assert_eq!(analyze(&line("mat", 50), &item, &empty).action, RecommendAction::Keep);
            assert_eq!(analyze(&line("mat", 51), &item, &empty).action, RecommendAction::Sell);
        }
    }

    #[test]
    fn test_advanced_material_always_keeps() {
        let empty = RequirementIndex::new();
        let item = make_item("advanced_alloy", ItemCategory::AdvancedMaterial);
        assert_eq!(analyze(&line("advanced_alloy", 9999), &item, &empty).action, RecommendAction::Keep);
    }

    #[test]
    fn test_common_weapon_recycles_when_scrap_is_needed() {
        let mut item = make_item("rusty_pistol", ItemCategory::Weapon);
        item.recycle_output = vec![RecycleOutput { material_id: "metal_parts".into(), amount: 4 }];

        // Scrap material still needed somewhere → recycle.
        let index = index_with(&[("metal_parts", "Gunsmith Tier 1", 20)]);
        assert_eq!(analyze(&line("rusty_pistol", 1), &item, &index).action, RecommendAction::Recycle);

        // Nothing needs the scrap → falls through to the common fallback,
        // which also recycles because an output is defined.
        let empty = RequirementIndex::new();
        assert_eq!(analyze(&line("rusty_pistol", 1), &item, &empty).action, RecommendAction::Recycle);
    }

    #[test]
    fn test_uncommon_weapon_is_not_scrapped() {
        let mut item = make_item("hunting_rifle", ItemCategory::Weapon);
        item.rarity = Some(Rarity::Uncommon);
        item.recycle_output = vec![RecycleOutput { material_id: "metal_parts".into(), amount: 6 }];
        let index = index_with(&[("metal_parts", "Gunsmith Tier 1", 20)]);
        // Rule 7 wants common rarity; uncommon falls to the rarity fallback → keep.
        assert_eq!(analyze(&line("hunting_rifle", 1), &item, &index).action, RecommendAction::Keep);
    }

    #[test]
    fn test_unconditional_categories() {
        let empty = RequirementIndex::new();
        let keep = [
            ItemCategory::Modification,
            ItemCategory::Augment,
            ItemCategory::Gadget,
            ItemCategory::Ammunition,
            ItemCategory::Blueprint,
            ItemCategory::Nature,
        ];
        for category in keep {
            let item = make_item("x", category);
            assert_eq!(analyze(&line("x", 1), &item, &empty).action, RecommendAction::Keep);
        }
        let item = make_item("frag_grenade", ItemCategory::Throwable);
        assert_eq!(analyze(&line("frag_grenade", 1), &item, &empty).action, RecommendAction::Use);
    }

    #[test]
    fn test_fallback_by_rarity() {
        let empty = RequirementIndex::new();

        // Common quest item without recycle output → sell.
        let item = make_item("courier_package", ItemCategory::QuestItem);
        assert_eq!(analyze(&line("courier_package", 1), &item, &empty).action, RecommendAction::Sell);

        // Common with recycle output → recycle.
        let mut item = make_item("odd_trophy", ItemCategory::QuestItem);
        item.recycle_output = vec![RecycleOutput { material_id: "scrap_metal".into(), amount: 1 }];
        assert_eq!(analyze(&line("odd_trophy", 1), &item, &empty).action, RecommendAction::Recycle);

        // Uncommon or higher → keep.
        let mut item = make_item("sealed_case", ItemCategory::QuestItem);
        item.rarity = Some(Rarity::Rare);
        assert_eq!(analyze(&line("sealed_case", 1), &item, &empty).action, RecommendAction::Keep);
    }

    #[test]
    fn test_missing_rarity_counts_as_common() {
        let empty = RequirementIndex::new();
        let mut item = make_item("mystery_box", ItemCategory::QuestItem);
        item.rarity = None;
        // Common-equivalent, no recycle output → sell. Never panics.
        assert_eq!(analyze(&line("mystery_box", 1), &item, &empty).action, RecommendAction::Sell);
    }

    // ── Exhaustiveness ───────────────────────────────────────────────────

    #[test]
    fn test_every_combination_resolves() {
        let categories = [
            ItemCategory::Weapon,
            ItemCategory::Modification,
            ItemCategory::QuickUse,
            ItemCategory::Throwable,
            ItemCategory::Blueprint,
            ItemCategory::BasicMaterial,
            ItemCategory::TopsideMaterial,
            ItemCategory::RefinedMaterial,
            ItemCategory::AdvancedMaterial,
            ItemCategory::Recyclable,
            ItemCategory::Trinket,
            ItemCategory::Key,
            ItemCategory::Ammunition,
            ItemCategory::Augment,
            ItemCategory::Gadget,
            ItemCategory::Nature,
            ItemCategory::Consumable,
            ItemCategory::QuestItem,
        ];
        let rarities = [
            None,
            Some(Rarity::Common),
            Some(Rarity::Uncommon),
            Some(Rarity::Rare),
            Some(Rarity::Epic),
            Some(Rarity::Legendary),
        ];
        let needed_index = index_with(&[("probe", "Gunsmith Tier 1", 1)]);
        let empty = RequirementIndex::new();

        for category in categories {
            for rarity in rarities {
                for with_output in [false, true] {
                    for index in [&empty, &needed_index] {
                        let mut item = make_item("probe", category);
                        item.rarity = rarity;
                        if with_output {
                            item.recycle_output =
                                vec![RecycleOutput { material_id: "scrap_metal".into(), amount: 1 }];
                        }
                        let rec = analyze(&line("probe", 7), &item, index);
                        assert!((1..=5).contains(&rec.priority));
                        assert!(!rec.reason.is_empty());

                        // Requirement precedence: anything needed and not a
                        // use-or-lose category must be kept.
                        let use_or_lose =
                            matches!(category, ItemCategory::Consumable | ItemCategory::QuickUse);
                        if !rec.needed_for.is_empty() && !use_or_lose {
                            assert_eq!(rec.action, RecommendAction::Keep);
                        }
                    }
                }
            }
        }
    }

    // ── Priority and reason ──────────────────────────────────────────────

    #[test]
    fn test_priority_scoring() {
        let empty = RequirementIndex::new();
        let needed = index_with(&[("x", "Gunsmith Tier 1", 1)]);

        // Common, not needed: base 1.
        let item = make_item("x", ItemCategory::Trinket);
        assert_eq!(analyze(&line("x", 1), &item, &empty).priority, 1);

        // Common, needed: 1 + 2 = 3.
        assert_eq!(analyze(&line("x", 1), &item, &needed).priority, 3);

        // Rare, needed: 1 + 2 + 2 = 5.
        let mut item = make_item("x", ItemCategory::Trinket);
        item.rarity = Some(Rarity::Rare);
        assert_eq!(analyze(&line("x", 1), &item, &needed).priority, 5);

        // Legendary, needed: 1 + 2 + 4 = 7, capped at 5.
        item.rarity = Some(Rarity::Legendary);
        assert_eq!(analyze(&line("x", 1), &item, &needed).priority, 5);

        // Legendary, not needed: 1 + 4 = 5.
        assert_eq!(analyze(&line("x", 1), &item, &empty).priority, 5);
    }

    #[test]
    fn test_needed_reason_truncates_past_two_sources() {
        let item = make_item("metal_parts", ItemCategory::BasicMaterial);
        let index = index_with(&[
            ("metal_parts", "Gunsmith Tier 1", 20),
            ("metal_parts", "Gunsmith Tier 2", 35),
            ("metal_parts", "Workbench Tier 1", 15),
            ("metal_parts", "Refiner Tier 2", 30),
        ]);
        let rec = analyze(&line("metal_parts", 5), &item, &index);
        assert_eq!(rec.reason, "Needed for: Gunsmith Tier 1, Gunsmith Tier 2 +2 more");
        assert_eq!(rec.needed_for.len(), 4);
    }

    // ── Released-item second pass ────────────────────────────────────────

    #[test]
    fn test_effective_action_collapses_released_keep() {
        let mut item = make_item("dog_collar", ItemCategory::Trinket);
        let index = index_with(&[("dog_collar", "Companion Tier 2", 1)]);
        let rec = analyze(&line("dog_collar", 1), &item, &index);
        assert_eq!(rec.action, RecommendAction::Keep);

        // Not yet released: unchanged.
        assert_eq!(effective_action(&rec, false), RecommendAction::Keep);
        // Released, no recycle output: sell.
        assert_eq!(effective_action(&rec, true), RecommendAction::Sell);

        // Released with a recycle output: recycle.
        item.recycle_output = vec![RecycleOutput { material_id: "cloth_scraps".into(), amount: 1 }];
        let rec = analyze(&line("dog_collar", 1), &item, &index);
        assert_eq!(effective_action(&rec, true), RecommendAction::Recycle);
    }

    #[test]
    fn test_effective_action_ignores_non_requirement_keeps() {
        let empty = RequirementIndex::new();
        let item = make_item("light_rounds", ItemCategory::Ammunition);
        let rec = analyze(&line("light_rounds", 40), &item, &empty);
        assert_eq!(rec.action, RecommendAction::Keep);
        // Kept for its category, not a requirement — release flag is moot.
        assert_eq!(effective_action(&rec, true), RecommendAction::Keep);
    }
}
