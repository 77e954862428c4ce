//! 集成測試

use std::collections::HashSet;

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use spares_calc::{generate_inventory, CommitMode, CommitPlan, InventoryGenerator};
use spares_core::*;

fn medium_laser() -> InstalledPart {
    InstalledPart::component("Medium Laser", PartCategory::Weapon, Decimal::ONE)
}

fn standard_armor(points: u32) -> InstalledPart {
    InstalledPart::armor(ArmorType::Standard, points, Decimal::from(16))
}

fn machine_gun_bin() -> InstalledPart {
    InstalledPart::ammo_bin(
        AmmoType::new("Machine Gun Ammo", AmmoCategory::MachineGun, 200),
        200,
    )
}

#[test]
fn test_single_strategy_one_line_per_part_type() {
    // 一個單位裝兩門相同的中型雷射，策略 Single，不要求裝甲與彈藥
    let roster = vec![
        Unit::new("Hunchback HBK-4P", UnitClass::Mek).with_parts(vec![medium_laser(), medium_laser()]),
    ];
    let options = GenerationOptions::new(PartGenerationMethod::Single).parts_only();

    let lines = generate_inventory(&options, &roster, &InMemoryStock::new(), &PriceTable::new()).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].descriptor.name, "Medium Laser");
    assert_eq!(lines[0].planned_count, 1);
    assert_eq!(lines[0].use_count, 2);
    assert!(lines[0].should_acquire);
}

#[test]
fn test_fractional_machine_gun_rule_wins() {
    let roster = vec![Unit::new("Scorpion", UnitClass::Vehicle).with_part(machine_gun_bin())];
    let options = GenerationOptions::new(PartGenerationMethod::Disabled)
        .with_target_armor_weight(0)
        .with_generate_spare_ammunition(true)
        .with_generate_fractional_machine_gun_ammunition(true)
        .with_reloads_per_weapon(4);

    let lines = generate_inventory(&options, &roster, &InMemoryStock::new(), &PriceTable::new()).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].descriptor.category, PartCategory::AmmoStorage);
    assert_eq!(lines[0].planned_count, 50);
}

#[test]
fn test_armor_scaled_to_target_weight() {
    // 兩個單位各 10 噸標準裝甲，共 20 噸，目標 60 噸 → 倍數 3
    let roster = vec![
        Unit::new("Griffin", UnitClass::Mek).with_part(standard_armor(160)),
        Unit::new("Wolverine", UnitClass::Mek).with_part(standard_armor(160)),
    ];
    let options = GenerationOptions::new(PartGenerationMethod::Disabled)
        .with_target_armor_weight(60)
        .with_generate_spare_ammunition(false);

    let lines = generate_inventory(&options, &roster, &InMemoryStock::new(), &PriceTable::new()).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].planned_count, 960);

    let tolerance = lines[0].unit_tonnage;
    let diff = (lines[0].planned_tonnage() - Decimal::from(60)).abs();
    assert!(diff <= tolerance, "裝甲重量偏差過大: {}", diff);
}

#[test]
fn test_line_dropped_when_stock_covers_target() {
    // 目標 10，倉庫 4，轉運 6
    let roster: Vec<Unit> = (0..10)
        .map(|i| Unit::new(format!("Locust {}", i), UnitClass::Mek).with_part(medium_laser()))
        .collect();
    let stock = InMemoryStock::new().with_stock(
        medium_laser().acquisition_key(),
        StockSnapshot::new(4).with_in_transit(4).with_on_order(2),
    );
    let options = GenerationOptions::new(PartGenerationMethod::Mishra).parts_only();

    let generator = InventoryGenerator::new(options).unwrap();
    let gross = generator.generate_gross(&roster, &stock, &PriceTable::new());
    assert_eq!(gross.len(), 1);
    assert_eq!(gross[0].planned_count, 10);
    assert_eq!(gross[0].store_count, 4);
    assert_eq!(gross[0].transfer_count, 6);

    let result = generator.generate(&roster, &stock, &PriceTable::new()).unwrap();
    assert!(result.lines.is_empty());
}

#[test]
fn test_mixed_roster_end_to_end() {
    let clan_laser = medium_laser().with_tech_base(TechBase::Clan);
    let roster = vec![
        Unit::new("Timber Wolf", UnitClass::Mek).with_parts(vec![
            clan_laser.clone(),
            clan_laser.clone(),
            InstalledPart::component("XL Engine 375", PartCategory::Engine, Decimal::new(195, 1))
                .with_tech_base(TechBase::Clan),
            InstalledPart::armor(ArmorType::FerroFibrous, 230, Decimal::new(1792, 2))
                .with_tech_base(TechBase::Clan),
            InstalledPart::ammo_bin(AmmoType::new("LRM 20 Ammo", AmmoCategory::Missile, 6), 6)
                .with_tech_base(TechBase::Clan),
            InstalledPart::structural_integrity(),
        ]),
        Unit::new("Hunchback", UnitClass::Mek).with_parts(vec![
            medium_laser(),
            standard_armor(160),
            machine_gun_bin(),
        ]),
        Unit::new("Savannah Master", UnitClass::Vehicle).with_parts(vec![
            medium_laser(),
            InstalledPart::component("ICE Engine 25", PartCategory::Engine, Decimal::ONE),
            InstalledPart::component("Armored Chassis", PartCategory::ChassisModification, Decimal::ZERO),
        ]),
    ];

    let prices = PriceTable::new()
        .with_unit_price(medium_laser().acquisition_key(), Decimal::from(40_000))
        .with_unit_price(clan_laser.acquisition_key(), Decimal::from(60_000));
    let options = GenerationOptions::new(PartGenerationMethod::Mishra);

    let result = InventoryGenerator::new(options.clone())
        .unwrap()
        .generate(&roster, &InMemoryStock::new(), &prices)
        .unwrap();

    let find = |key: &AcquisitionKey| result.lines.iter().find(|l| &l.acquisition_key() == key);

    // Mishra：只計機甲，排除引擎；IS 與 Clan 雷射是不同的採購鍵
    assert_eq!(find(&clan_laser.acquisition_key()).unwrap().planned_count, 2);
    assert_eq!(find(&medium_laser().acquisition_key()).unwrap().planned_count, 1);
    assert!(result.lines.iter().all(|l| l.descriptor.category != PartCategory::Engine));
    assert!(result
        .lines
        .iter()
        .all(|l| l.descriptor.category != PartCategory::ChassisModification));
    assert!(result
        .lines
        .iter()
        .all(|l| l.descriptor.category != PartCategory::StructuralIntegrity));

    // 彈藥：LRM 6 × 4 = 24，機槍 50
    let lrm = result.lines.iter().find(|l| l.descriptor.name == "LRM 20 Ammo").unwrap();
    assert_eq!(lrm.planned_count, 24);
    let mg = result.lines.iter().find(|l| l.descriptor.name == "Machine Gun Ammo").unwrap();
    assert_eq!(mg.planned_count, 50);

    let ids: HashSet<uuid::Uuid> = result.lines.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), result.lines.len());

    let costs = result.costs();
    assert_eq!(costs.parts, Decimal::from(160_000));

    // 全部接受後下單
    let plan = CommitPlan::build(
        &result.lines,
        CommitMode::Order,
        &options,
        NaiveDate::from_ymd_opt(3050, 3, 1).unwrap(),
    );
    assert_eq!(plan.items.len(), result.lines.len());
    assert_eq!(plan.debit, costs.payable(&options));
}

#[test]
fn test_options_round_trip_through_json() {
    let options = GenerationOptions::new(PartGenerationMethod::Custom)
        .with_custom_multiplier(Decimal::new(15, 1))
        .with_target_armor_weight(20);

    let json = options.to_json().unwrap();
    let parsed = GenerationOptions::from_json(&json).unwrap();

    assert_eq!(parsed, options);
}

#[test]
fn test_invalid_options_rejected_before_generation() {
    let options = GenerationOptions::new(PartGenerationMethod::Windchild)
        .with_windchild_unit_fraction(Decimal::ZERO);

    let result = generate_inventory(&options, &[], &InMemoryStock::new(), &PriceTable::new());
    assert!(matches!(result, Err(InventoryError::InvalidOption(_))));
}

#[rstest]
#[case(PartGenerationMethod::Single, 1)]
#[case(PartGenerationMethod::Double, 8)]
#[case(PartGenerationMethod::Triple, 12)]
#[case(PartGenerationMethod::Mishra, 4)]
#[case(PartGenerationMethod::Windchild, 1)]
#[case(PartGenerationMethod::Disabled, 0)]
fn test_strategy_quantities(#[case] method: PartGenerationMethod, #[case] expected: u32) {
    // 四個單位各一門中型雷射
    let roster: Vec<Unit> = (0..4)
        .map(|i| Unit::new(format!("Wasp {}", i), UnitClass::Mek).with_part(medium_laser()))
        .collect();
    let options = GenerationOptions::new(method).parts_only();

    let lines = generate_inventory(&options, &roster, &InMemoryStock::new(), &PriceTable::new()).unwrap();
    let planned: u32 = lines.iter().map(|l| l.planned_count).sum();

    assert_eq!(planned, expected);
}
