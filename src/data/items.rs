use crate::shared::*;

/// Populate the ItemCatalog with the default game-design data set:
/// every category is represented, and every item referenced by the default
/// upgrade tracks is defined here.
pub fn populate_items(catalog: &mut ItemCatalog) {
    let items: Vec<ItemDef> = vec![
        // ═══════════════════════════════════════════════════════════════
        // MATERIALS — four tiers
        // ═══════════════════════════════════════════════════════════════

        // ── Basic ─────────────────────────────────────────────────────
        // Pure bulk materials carry no rarity concept.
        ItemDef {
            id: "scrap_metal".into(),
            name: "Scrap Metal".into(),
            category: ItemCategory::BasicMaterial,
            rarity: None,
            recycle_output: vec![],
            base_value: 2,
            stack_size: 500,
        },
        ItemDef {
            id: "cloth_scraps".into(),
            name: "Cloth Scraps".into(),
            category: ItemCategory::BasicMaterial,
            rarity: None,
            recycle_output: vec![],
            base_value: 2,
            stack_size: 500,
        },
        ItemDef {
            id: "metal_parts".into(),
            name: "Metal Parts".into(),
            category: ItemCategory::BasicMaterial,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 4,
            stack_size: 250,
        },
        ItemDef {
            id: "plastic_sheets".into(),
            name: "Plastic Sheets".into(),
            category: ItemCategory::BasicMaterial,
            rarity: None,
            recycle_output: vec![],
            base_value: 3,
            stack_size: 250,
        },
        ItemDef {
            id: "duct_tape".into(),
            name: "Duct Tape".into(),
            category: ItemCategory::BasicMaterial,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 5,
            stack_size: 100,
        },

        // ── Topside ───────────────────────────────────────────────────
        ItemDef {
            id: "rusted_tools".into(),
            name: "Rusted Tools".into(),
            category: ItemCategory::TopsideMaterial,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 30,
            stack_size: 20,
        },
        ItemDef {
            id: "gun_oil".into(),
            name: "Gun Oil".into(),
            category: ItemCategory::TopsideMaterial,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 25,
            stack_size: 20,
        },
        ItemDef {
            id: "herbal_extract".into(),
            name: "Herbal Extract".into(),
            category: ItemCategory::TopsideMaterial,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 28,
            stack_size: 20,
        },
        ItemDef {
            id: "heat_coils".into(),
            name: "Heat Coils".into(),
            category: ItemCategory::TopsideMaterial,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 35,
            stack_size: 20,
        },
        ItemDef {
            id: "dried_meat".into(),
            name: "Dried Meat".into(),
            category: ItemCategory::TopsideMaterial,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 12,
            stack_size: 50,
        },

        // ── Refined ───────────────────────────────────────────────────
        ItemDef {
            id: "refined_steel".into(),
            name: "Refined Steel".into(),
            category: ItemCategory::RefinedMaterial,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 60,
            stack_size: 50,
        },
        ItemDef {
            id: "electronic_parts".into(),
            name: "Electronic Parts".into(),
            category: ItemCategory::RefinedMaterial,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 55,
            stack_size: 50,
        },
        ItemDef {
            id: "chemical_reagents".into(),
            name: "Chemical Reagents".into(),
            category: ItemCategory::RefinedMaterial,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 50,
            stack_size: 50,
        },
        ItemDef {
            id: "refined_chemicals".into(),
            name: "Refined Chemicals".into(),
            category: ItemCategory::RefinedMaterial,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 70,
            stack_size: 50,
        },
        ItemDef {
            id: "sterile_bandages".into(),
            name: "Sterile Bandages".into(),
            category: ItemCategory::RefinedMaterial,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 40,
            stack_size: 50,
        },

        // ── Advanced ──────────────────────────────────────────────────
        ItemDef {
            id: "advanced_alloy".into(),
            name: "Advanced Alloy".into(),
            category: ItemCategory::AdvancedMaterial,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 150,
            stack_size: 25,
        },
        ItemDef {
            id: "precision_gears".into(),
            name: "Precision Gears".into(),
            category: ItemCategory::AdvancedMaterial,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 140,
            stack_size: 25,
        },
        ItemDef {
            id: "advanced_circuitry".into(),
            name: "Advanced Circuitry".into(),
            category: ItemCategory::AdvancedMaterial,
            rarity: Some(Rarity::Epic),
            recycle_output: vec![],
            base_value: 200,
            stack_size: 25,
        },
        ItemDef {
            id: "carbon_fiber".into(),
            name: "Carbon Fiber".into(),
            category: ItemCategory::AdvancedMaterial,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 160,
            stack_size: 25,
        },
        ItemDef {
            id: "lab_equipment".into(),
            name: "Lab Equipment".into(),
            category: ItemCategory::AdvancedMaterial,
            rarity: Some(Rarity::Epic),
            recycle_output: vec![],
            base_value: 220,
            stack_size: 10,
        },
        ItemDef {
            id: "industrial_magnets".into(),
            name: "Industrial Magnets".into(),
            category: ItemCategory::AdvancedMaterial,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 170,
            stack_size: 10,
        },

        // ═══════════════════════════════════════════════════════════════
        // WEAPONS & EQUIPMENT
        // ═══════════════════════════════════════════════════════════════

        ItemDef {
            id: "rusty_pistol".into(),
            name: "Rusty Pistol".into(),
            category: ItemCategory::Weapon,
            rarity: Some(Rarity::Common),
            recycle_output: vec![
                RecycleOutput { material_id: "metal_parts".into(), amount: 4 },
                RecycleOutput { material_id: "scrap_metal".into(), amount: 6 },
            ],
            base_value: 45,
            stack_size: 1,
        },
        ItemDef {
            id: "hunting_rifle".into(),
            name: "Hunting Rifle".into(),
            category: ItemCategory::Weapon,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![RecycleOutput { material_id: "metal_parts".into(), amount: 8 }],
            base_value: 120,
            stack_size: 1,
        },
        ItemDef {
            id: "tempest_smg".into(),
            name: "Tempest SMG".into(),
            category: ItemCategory::Weapon,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![
                RecycleOutput { material_id: "metal_parts".into(), amount: 10 },
                RecycleOutput { material_id: "precision_gears".into(), amount: 1 },
            ],
            base_value: 320,
            stack_size: 1,
        },
        ItemDef {
            id: "extended_mag".into(),
            name: "Extended Magazine".into(),
            category: ItemCategory::Modification,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 80,
            stack_size: 5,
        },
        ItemDef {
            id: "reflex_sight".into(),
            name: "Reflex Sight".into(),
            category: ItemCategory::Modification,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 150,
            stack_size: 5,
        },
        ItemDef {
            id: "shield_augment".into(),
            name: "Shield Augment".into(),
            category: ItemCategory::Augment,
            rarity: Some(Rarity::Epic),
            recycle_output: vec![],
            base_value: 400,
            stack_size: 1,
        },
        ItemDef {
            id: "tactical_vest".into(),
            name: "Tactical Vest".into(),
            category: ItemCategory::Augment,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 250,
            stack_size: 1,
        },
        ItemDef {
            id: "motion_sensor".into(),
            name: "Motion Sensor".into(),
            category: ItemCategory::Gadget,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 180,
            stack_size: 3,
        },
        ItemDef {
            id: "reinforced_harness".into(),
            name: "Reinforced Harness".into(),
            category: ItemCategory::Gadget,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 90,
            stack_size: 3,
        },

        // ═══════════════════════════════════════════════════════════════
        // CONSUMABLES, AMMO & THROWABLES
        // ═══════════════════════════════════════════════════════════════

        ItemDef {
            id: "bandage".into(),
            name: "Bandage".into(),
            category: ItemCategory::QuickUse,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 10,
            stack_size: 20,
        },
        ItemDef {
            id: "adrenaline_shot".into(),
            name: "Adrenaline Shot".into(),
            category: ItemCategory::QuickUse,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 35,
            stack_size: 10,
        },
        ItemDef {
            id: "ration_pack".into(),
            name: "Ration Pack".into(),
            category: ItemCategory::Consumable,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 8,
            stack_size: 20,
        },
        ItemDef {
            id: "water_bottle".into(),
            name: "Water Bottle".into(),
            category: ItemCategory::Consumable,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 5,
            stack_size: 20,
        },
        ItemDef {
            id: "herbal_stim".into(),
            name: "Herbal Stim".into(),
            category: ItemCategory::Consumable,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 30,
            stack_size: 10,
        },
        ItemDef {
            id: "light_rounds".into(),
            name: "Light Rounds".into(),
            category: ItemCategory::Ammunition,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 1,
            stack_size: 200,
        },
        ItemDef {
            id: "shotgun_shells".into(),
            name: "Shotgun Shells".into(),
            category: ItemCategory::Ammunition,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 2,
            stack_size: 100,
        },
        ItemDef {
            id: "frag_grenade".into(),
            name: "Frag Grenade".into(),
            category: ItemCategory::Throwable,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 40,
            stack_size: 10,
        },
        ItemDef {
            id: "smoke_grenade".into(),
            name: "Smoke Grenade".into(),
            category: ItemCategory::Throwable,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 25,
            stack_size: 10,
        },

        // ═══════════════════════════════════════════════════════════════
        // EVERYTHING ELSE
        // ═══════════════════════════════════════════════════════════════

        ItemDef {
            id: "smg_blueprint".into(),
            name: "SMG Blueprint".into(),
            category: ItemCategory::Blueprint,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 200,
            stack_size: 1,
        },
        ItemDef {
            id: "broken_radio".into(),
            name: "Broken Radio".into(),
            category: ItemCategory::Recyclable,
            rarity: Some(Rarity::Common),
            recycle_output: vec![
                RecycleOutput { material_id: "electronic_parts".into(), amount: 2 },
                RecycleOutput { material_id: "plastic_sheets".into(), amount: 3 },
            ],
            base_value: 15,
            stack_size: 10,
        },
        ItemDef {
            id: "bent_fork".into(),
            name: "Bent Fork".into(),
            category: ItemCategory::Recyclable,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 3,
            stack_size: 50,
        },
        ItemDef {
            id: "garden_gnome".into(),
            name: "Garden Gnome".into(),
            category: ItemCategory::Trinket,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 120,
            stack_size: 5,
        },
        ItemDef {
            id: "old_postcard".into(),
            name: "Old Postcard".into(),
            category: ItemCategory::Trinket,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 8,
            stack_size: 20,
        },
        ItemDef {
            id: "dog_collar".into(),
            name: "Dog Collar".into(),
            category: ItemCategory::Trinket,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 20,
            stack_size: 5,
        },
        ItemDef {
            id: "squeaky_toy".into(),
            name: "Squeaky Toy".into(),
            category: ItemCategory::Trinket,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 15,
            stack_size: 5,
        },
        ItemDef {
            id: "penthouse_key".into(),
            name: "Penthouse Key".into(),
            category: ItemCategory::Key,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 500,
            stack_size: 5,
        },
        ItemDef {
            id: "mushroom_cluster".into(),
            name: "Mushroom Cluster".into(),
            category: ItemCategory::Nature,
            rarity: Some(Rarity::Common),
            recycle_output: vec![],
            base_value: 6,
            stack_size: 50,
        },
        ItemDef {
            id: "glow_moss".into(),
            name: "Glow Moss".into(),
            category: ItemCategory::Nature,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 14,
            stack_size: 50,
        },
        ItemDef {
            id: "courier_package".into(),
            name: "Courier Package".into(),
            category: ItemCategory::QuestItem,
            rarity: Some(Rarity::Uncommon),
            recycle_output: vec![],
            base_value: 0,
            stack_size: 1,
        },
        ItemDef {
            id: "encrypted_dogtags".into(),
            name: "Encrypted Dogtags".into(),
            category: ItemCategory::QuestItem,
            rarity: Some(Rarity::Rare),
            recycle_output: vec![],
            base_value: 0,
            stack_size: 10,
        },
    ];

    for def in items {
        catalog.insert(def);
    }
}
