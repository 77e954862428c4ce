use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use rust_decimal::Decimal;
use spares_core::quantity::{ceil_to_count, round_to_count};
use spares_core::{
    AcquisitionKey, AmmoCategory, AmmoType, ArmorType, GeneratedLine, GenerationOptions,
    InMemoryStock, InstalledPart, PartCategory, PartDescriptor, PartGenerationMethod, PartInUse,
    PriceTable, Quality, StockSnapshot, TechBase, Unit, UnitClass,
};

use crate::ammunition::AmmunitionGenerator;
use crate::armor::ArmorGenerator;
use crate::generator::InventoryGenerator;
use crate::netting::NettingCalculator;
use crate::part_generation::PartGenerationCalculator;

const NAMES: [&str; 5] = ["Medium Laser", "PPC", "Heat Sink", "Jump Jet", "Armored Chassis"];

fn component() -> impl Strategy<Value = InstalledPart> {
    let attributes = (0usize..NAMES.len(), any::<bool>(), 0usize..3, 0u32..3, 0i32..2);

    attributes.prop_map(|(name, clan, quality, hits, skill_min)| {
        let category = match NAMES[name] {
            "Heat Sink" => PartCategory::HeatSink,
            "Jump Jet" => PartCategory::JumpJet,
            "Armored Chassis" => PartCategory::ChassisModification,
            _ => PartCategory::Weapon,
        };
        let tech_base = if clan { TechBase::Clan } else { TechBase::InnerSphere };
        let quality = [Quality::C, Quality::D, Quality::E][quality];

        InstalledPart::component(NAMES[name], category, Decimal::ONE)
            .with_tech_base(tech_base)
            .with_quality(quality)
            .with_hits(hits)
            .with_skill_min(skill_min)
    })
}

fn roster() -> impl Strategy<Value = Vec<Unit>> {
    prop::collection::vec(prop::collection::vec(component(), 0..6), 0..8).prop_map(|units| {
        units
            .into_iter()
            .enumerate()
            .map(|(i, parts)| {
                Unit::new(format!("Unit {}", i), UnitClass::Mek)
                    .with_parts(parts)
                    .with_part(InstalledPart::structural_integrity())
            })
            .collect()
    })
}

fn occurrences_by_key(units: &[Unit]) -> HashMap<AcquisitionKey, u32> {
    InventoryGenerator::count_in_use(units)
}

fn gross_lines(units: &[Unit], method: PartGenerationMethod) -> Vec<GeneratedLine> {
    let options = GenerationOptions::new(method).parts_only();
    let generator = InventoryGenerator::new(options).unwrap();
    generator.generate_gross(units, &InMemoryStock::new(), &PriceTable::new())
}

proptest! {
    #[test]
    fn single_yields_one_line_per_key(units in roster()) {
        let keys: HashSet<AcquisitionKey> = units
            .iter()
            .flat_map(|u| u.acquirable_parts())
            .map(|p| p.acquisition_key())
            .collect();

        let lines = gross_lines(&units, PartGenerationMethod::Single);

        prop_assert_eq!(lines.len(), keys.len());
        prop_assert!(lines.iter().all(|l| l.planned_count == 1));
    }

    #[test]
    fn windchild_counts_each_carrying_unit_once(units in roster()) {
        let mut carrying: HashMap<AcquisitionKey, u32> = HashMap::new();
        for unit in &units {
            let keys: HashSet<AcquisitionKey> =
                unit.acquirable_parts().map(|p| p.acquisition_key()).collect();
            for key in keys {
                *carrying.entry(key).or_insert(0) += 1;
            }
        }

        for line in gross_lines(&units, PartGenerationMethod::Windchild) {
            let expected = ceil_to_count(
                Decimal::from(carrying[&line.acquisition_key()]) * Decimal::new(25, 2),
            )
            .max(1);
            prop_assert_eq!(line.planned_count, expected);
        }
    }

    #[test]
    fn fixed_multiples_scale_with_occurrence(units in roster(), triple in any::<bool>()) {
        let (method, factor) = if triple {
            (PartGenerationMethod::Triple, 3)
        } else {
            (PartGenerationMethod::Double, 2)
        };
        let occurrences = occurrences_by_key(&units);

        for line in gross_lines(&units, method) {
            prop_assert_eq!(line.planned_count, factor * occurrences[&line.acquisition_key()]);
        }
    }

    #[test]
    fn custom_rounds_occurrence_times_multiplier(units in roster(), tenths in 1i64..40) {
        let multiplier = Decimal::new(tenths, 1);
        let options = GenerationOptions::new(PartGenerationMethod::Custom)
            .with_custom_multiplier(multiplier);
        let occurrences = PartGenerationCalculator::collect(&units, false, false);
        let generated = PartGenerationCalculator::apply(&units, &options, false, false);

        prop_assert_eq!(generated.len(), occurrences.len());
        for (part, occurrence) in generated.iter().zip(occurrences.iter()) {
            prop_assert_eq!(
                part.quantity,
                round_to_count(Decimal::from(occurrence.occurrences) * multiplier)
            );
        }
    }

    #[test]
    fn armor_hits_target_weight(
        standard in 1u32..400,
        ferro in 0u32..400,
        target in 0u32..200,
    ) {
        let units = vec![Unit::new("Mek", UnitClass::Mek).with_parts(vec![
            InstalledPart::armor(ArmorType::Standard, standard, Decimal::from(16)),
            InstalledPart::armor(ArmorType::FerroFibrous, ferro, Decimal::from(20)),
        ])];

        let armor = ArmorGenerator::generate_from_units(&units, target);

        if target == 0 {
            prop_assert!(armor.is_empty());
        } else {
            let total: Decimal = armor.iter().map(|a| a.tonnage()).sum();
            let tolerance: Decimal = armor.iter().map(|a| a.descriptor.unit_tonnage).sum();
            prop_assert!((total - Decimal::from(target)).abs() <= tolerance);
        }
    }

    #[test]
    fn ammunition_rules(
        capacity in 1u32..300,
        reloads in 0u32..10,
        fractional in any::<bool>(),
        spare in any::<bool>(),
    ) {
        let mg = InstalledPart::ammo_bin(
            AmmoType::new("Heavy Machine Gun Ammo", AmmoCategory::HeavyMachineGun, 100),
            capacity,
        );
        let lrm = InstalledPart::ammo_bin(AmmoType::new("LRM 5 Ammo", AmmoCategory::Missile, 24), capacity);

        let ammo = AmmunitionGenerator::generate(&[&mg, &lrm], spare, fractional, reloads);

        if !spare {
            prop_assert!(ammo.is_empty());
        } else {
            let mg_rounds = ammo.iter().find(|a| a.descriptor.name == "Heavy Machine Gun Ammo").map(|a| a.quantity);
            let lrm_rounds = ammo.iter().find(|a| a.descriptor.name == "LRM 5 Ammo").map(|a| a.quantity);

            if fractional {
                prop_assert_eq!(mg_rounds, Some(50));
            }
            if reloads > 0 {
                prop_assert_eq!(lrm_rounds, Some(capacity * reloads));
            } else {
                prop_assert_eq!(lrm_rounds, None);
            }
        }
    }

    #[test]
    fn netting_is_idempotent(target in 0u32..100, on_hand in 0u32..60, transit in 0u32..60) {
        let descriptor = PartDescriptor::from_installed(&InstalledPart::component(
            "PPC",
            PartCategory::Weapon,
            Decimal::from(7),
        ));
        let stock = StockSnapshot::new(on_hand).with_in_transit(transit);
        let mut parts_in_use = HashMap::new();
        parts_in_use.insert(descriptor.acquisition_key(), PartInUse::new(&descriptor, 1, stock));

        let lines = vec![GeneratedLine::new(descriptor, target, Decimal::ZERO).with_stock(&stock)];
        let once = NettingCalculator::net(&lines, &parts_in_use).unwrap();
        let twice = NettingCalculator::net(&once, &parts_in_use).unwrap();

        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            prop_assert_eq!(a.planned_count, b.planned_count);
        }
        let expected = i64::from(target) - i64::from(on_hand) - i64::from(transit);
        prop_assert_eq!(once.len(), usize::from(expected > 0));
    }
}
