//! 戰役備件生成示例

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spares_calc::{CommitMode, CommitPlan, InventoryGenerator};
use spares_core::{
    AmmoCategory, AmmoType, ArmorType, GenerationOptions, InMemoryStock, InstalledPart,
    PartCategory, PartGenerationMethod, PriceTable, StockSnapshot, TechBase, Unit, UnitClass,
};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

fn lance() -> Vec<Unit> {
    let medium_laser = InstalledPart::component("Medium Laser", PartCategory::Weapon, Decimal::ONE);
    let heat_sink = InstalledPart::component("Heat Sink", PartCategory::HeatSink, Decimal::ONE);
    let lrm_ammo = AmmoType::new("LRM 10 Ammo", AmmoCategory::Missile, 12);

    vec![
        Unit::new("Griffin GRF-1N", UnitClass::Mek).with_parts(vec![
            InstalledPart::component("PPC", PartCategory::Weapon, Decimal::from(7)),
            InstalledPart::component("LRM 10", PartCategory::Weapon, Decimal::from(5)),
            InstalledPart::ammo_bin(lrm_ammo.clone(), 12),
            InstalledPart::component("Fusion Engine 275", PartCategory::Engine, Decimal::new(155, 1)),
            heat_sink.clone(),
            InstalledPart::armor(ArmorType::Standard, 152, Decimal::from(16)),
            InstalledPart::structural_integrity(),
        ]),
        Unit::new("Hunchback HBK-4P", UnitClass::Mek).with_parts(vec![
            medium_laser.clone(),
            medium_laser.clone(),
            medium_laser.clone(),
            heat_sink.clone(),
            heat_sink,
            InstalledPart::armor(ArmorType::Standard, 160, Decimal::from(16)),
        ]),
        Unit::new("Timber Wolf Prime", UnitClass::Mek).with_parts(vec![
            InstalledPart::component("ER Large Laser", PartCategory::Weapon, Decimal::from(4))
                .with_tech_base(TechBase::Clan),
            InstalledPart::armor(ArmorType::FerroFibrous, 230, Decimal::new(1792, 2))
                .with_tech_base(TechBase::Clan),
        ]),
        Unit::new("J. Edgar Hover Tank", UnitClass::Vehicle).with_parts(vec![
            medium_laser,
            InstalledPart::ammo_bin(
                AmmoType::new("Machine Gun Ammo", AmmoCategory::MachineGun, 200),
                100,
            ),
            InstalledPart::component("Armored Chassis", PartCategory::ChassisModification, Decimal::ZERO),
        ]),
        Unit::new("Catapult CPLT-C1", UnitClass::Mek).with_parts(vec![
            InstalledPart::ammo_bin(lrm_ammo.clone(), 12),
            InstalledPart::ammo_bin(lrm_ammo, 12),
        ]),
    ]
}

fn main() -> anyhow::Result<()> {
    init_logging();

    println!("=== 戰役備件生成示例 ===\n");

    let roster = lance();
    let options = GenerationOptions::new(PartGenerationMethod::Double)
        .with_target_armor_weight(20)
        .with_reloads_per_weapon(2);

    println!("生成選項:\n{}\n", options.to_json()?);

    let medium_laser_key = roster[1].parts[0].acquisition_key();
    let stock = InMemoryStock::new().with_stock(
        medium_laser_key.clone(),
        StockSnapshot::new(3).with_on_order(1),
    );
    let prices = PriceTable::new()
        .with_unit_price(medium_laser_key, Decimal::from(40_000))
        .with_unit_price(roster[0].parts[0].acquisition_key(), Decimal::from(200_000));

    let generator = InventoryGenerator::new(options.clone())?;
    let result = generator.generate(&roster, &stock, &prices)?;

    println!("建議取得:");
    for line in &result.lines {
        println!(
            "  - {}: 使用 {}，倉庫 {}，轉運 {}，計劃 {}，成本 {}",
            line.description,
            line.use_count,
            line.store_count,
            line.transfer_count,
            line.planned_count,
            line.total_cost()
        );
    }

    for warning in &result.warnings {
        println!("  [{:?}] {}: {}", warning.severity, warning.subject, warning.message);
    }

    let costs = result.costs();
    println!(
        "\n成本：零件 {}，裝甲 {}，彈藥 {}，應付 {}",
        costs.parts,
        costs.armor,
        costs.ammunition,
        costs.payable(&options)
    );

    let today = NaiveDate::from_ymd_opt(3025, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("無效的戰役日期"))?;
    let plan = CommitPlan::build(&result.lines, CommitMode::Order, &options, today);
    println!("\n採購清單 {} 項，扣款 {}", plan.items.len(), plan.debit);

    Ok(())
}
