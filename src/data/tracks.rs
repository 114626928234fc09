use crate::shared::*;

/// Populate the UpgradeTree with the default progression: four station
/// tracks plus the companion track. Track order here is display order and
/// drives requirement-index entry order.
pub fn populate_tracks(tree: &mut UpgradeTree) {
    fn tier(number: u32, reqs: &[(&str, u32)]) -> UpgradeTier {
        UpgradeTier {
            tier: number,
            requirements: reqs
                .iter()
                .map(|(id, qty)| Requirement { item_id: (*id).into(), quantity: *qty })
                .collect(),
        }
    }

    tree.tracks = vec![
        // ── Stations — tiers start at 1 ───────────────────────────────
        UpgradeTrack {
            id: "gunsmith".into(),
            name: "Gunsmith".into(),
            kind: TrackKind::Station,
            tiers: vec![
                tier(1, &[("metal_parts", 20)]),
                tier(2, &[("rusted_tools", 3), ("metal_parts", 35)]),
                tier(3, &[("gun_oil", 5), ("refined_steel", 10)]),
                tier(4, &[("precision_gears", 4), ("advanced_alloy", 6)]),
            ],
        },
        UpgradeTrack {
            id: "workbench".into(),
            name: "Workbench".into(),
            kind: TrackKind::Station,
            tiers: vec![
                tier(1, &[("scrap_metal", 15), ("cloth_scraps", 10)]),
                tier(2, &[("duct_tape", 8), ("plastic_sheets", 12)]),
                tier(3, &[("electronic_parts", 6), ("refined_steel", 8)]),
                tier(4, &[("advanced_circuitry", 3), ("carbon_fiber", 5)]),
            ],
        },
        UpgradeTrack {
            id: "med_station".into(),
            name: "Med Station".into(),
            kind: TrackKind::Station,
            tiers: vec![
                tier(1, &[("cloth_scraps", 20), ("herbal_extract", 5)]),
                tier(2, &[("chemical_reagents", 8), ("sterile_bandages", 10)]),
                tier(3, &[("lab_equipment", 2), ("refined_chemicals", 6)]),
            ],
        },
        UpgradeTrack {
            id: "refiner".into(),
            name: "Refiner".into(),
            kind: TrackKind::Station,
            tiers: vec![
                tier(1, &[("scrap_metal", 25)]),
                tier(2, &[("heat_coils", 4), ("metal_parts", 30)]),
                tier(3, &[("industrial_magnets", 3), ("advanced_alloy", 4)]),
            ],
        },

        // ── Companion — tier 1 is the starting state, tiers begin at 2 ──
        UpgradeTrack {
            id: "companion".into(),
            name: "Companion".into(),
            kind: TrackKind::Companion,
            tiers: vec![
                tier(2, &[("dog_collar", 1), ("dried_meat", 5)]),
                tier(3, &[("squeaky_toy", 1), ("dried_meat", 10)]),
                tier(4, &[("reinforced_harness", 1), ("refined_steel", 5)]),
                tier(5, &[("tactical_vest", 1), ("advanced_alloy", 3)]),
            ],
        },
    ];
}
