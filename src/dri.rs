//! Dietary Reference Intake (DRI) and Tolerable Upper Intake Level (UL)
//! tables, keyed by demographic cell. Process-scoped, read-only after
//! first access and shared by reference across requests (spec.md §9
//! Ownership) — callers use these to derive `MicroTargets`/`MicroULs`
//! before calling into the solver; the solver itself never resolves
//! demographics (spec.md §6).
//!
//! DRI figures are ported verbatim from `daily_chow.dri.DRI_TARGETS`
//! (NIH/USDA RDA/AI values). UL figures did not survive retrieval from the
//! Python original (no `ul.py` was kept) and are supplied fresh from the
//! same NIH Dietary Reference Intake series; see `DESIGN.md`.

use crate::nutrient::MicroKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Age19To30,
    Age31To50,
    Age51To70,
    Age71Plus,
}

pub type NutrientTable = HashMap<MicroKey, f64>;

fn male_19_30() -> NutrientTable {
    use MicroKey::*;
    HashMap::from([
        (CalciumMg, 1000.0),
        (IronMg, 8.0),
        (MagnesiumMg, 400.0),
        (PhosphorusMg, 700.0),
        (PotassiumMg, 3400.0),
        (ZincMg, 11.0),
        (CopperMg, 0.9),
        (ManganeseMg, 2.3),
        (SeleniumMcg, 55.0),
        (VitaminCMg, 90.0),
        (ThiaminMg, 1.2),
        (RiboflavinMg, 1.3),
        (NiacinMg, 16.0),
        (VitaminB6Mg, 1.3),
        (FolateMcg, 400.0),
        (VitaminB12Mcg, 2.4),
        (VitaminAMcg, 900.0),
        (VitaminDMcg, 15.0),
        (VitaminEMg, 15.0),
        (VitaminKMcg, 120.0),
    ])
}

fn male_31_50() -> NutrientTable {
    let mut t = male_19_30();
    t.insert(MicroKey::MagnesiumMg, 420.0);
    t
}

fn male_51_70() -> NutrientTable {
    let mut t = male_31_50();
    t.insert(MicroKey::VitaminB6Mg, 1.7);
    t.insert(MicroKey::VitaminDMcg, 15.0);
    t
}

fn male_71_plus() -> NutrientTable {
    let mut t = male_51_70();
    t.insert(MicroKey::CalciumMg, 1200.0);
    t.insert(MicroKey::VitaminDMcg, 20.0);
    t
}

fn female_19_30() -> NutrientTable {
    use MicroKey::*;
    HashMap::from([
        (CalciumMg, 1000.0),
        (IronMg, 18.0),
        (MagnesiumMg, 310.0),
        (PhosphorusMg, 700.0),
        (PotassiumMg, 2600.0),
        (ZincMg, 8.0),
        (CopperMg, 0.9),
        (ManganeseMg, 1.8),
        (SeleniumMcg, 55.0),
        (VitaminCMg, 75.0),
        (ThiaminMg, 1.1),
        (RiboflavinMg, 1.1),
        (NiacinMg, 14.0),
        (VitaminB6Mg, 1.3),
        (FolateMcg, 400.0),
        (VitaminB12Mcg, 2.4),
        (VitaminAMcg, 700.0),
        (VitaminDMcg, 15.0),
        (VitaminEMg, 15.0),
        (VitaminKMcg, 90.0),
    ])
}

fn female_31_50() -> NutrientTable {
    let mut t = female_19_30();
    t.insert(MicroKey::MagnesiumMg, 320.0);
    t
}

fn female_51_70() -> NutrientTable {
    let mut t = female_31_50();
    t.insert(MicroKey::IronMg, 8.0);
    t.insert(MicroKey::VitaminB6Mg, 1.5);
    t
}

fn female_71_plus() -> NutrientTable {
    let mut t = female_51_70();
    t.insert(MicroKey::CalciumMg, 1200.0);
    t.insert(MicroKey::VitaminDMcg, 20.0);
    t
}

/// NIH Tolerable Upper Intake Levels. Adult figures are constant across the
/// 19+ age groups tracked here except where NIH publishes an age break (none
/// of the 20 canonical nutrients do for the adult groups this table covers),
/// so a single adult table is reused for every `(Sex, AgeGroup)` cell.
/// Nutrients with no established UL (e.g. thiamin, riboflavin, vitamin B12,
/// potassium, vitamin K) are simply absent — callers must not synthesize a
/// `MicroULs` entry for them.
fn adult_ul() -> NutrientTable {
    use MicroKey::*;
    HashMap::from([
        (CalciumMg, 2500.0),
        (IronMg, 45.0),
        (MagnesiumMg, 350.0), // from supplements only, per NIH
        (PhosphorusMg, 4000.0),
        (ZincMg, 40.0),
        (CopperMg, 10.0),
        (ManganeseMg, 11.0),
        (SeleniumMcg, 400.0),
        (VitaminCMg, 2000.0),
        (NiacinMg, 35.0),
        (VitaminB6Mg, 100.0),
        (FolateMcg, 1000.0),
        (VitaminAMcg, 3000.0),
        (VitaminDMcg, 100.0),
        (VitaminEMg, 1000.0),
    ])
}

fn build_dri_targets() -> HashMap<(Sex, AgeGroup), NutrientTable> {
    use AgeGroup::*;
    use Sex::*;
    HashMap::from([
        ((Male, Age19To30), male_19_30()),
        ((Male, Age31To50), male_31_50()),
        ((Male, Age51To70), male_51_70()),
        ((Male, Age71Plus), male_71_plus()),
        ((Female, Age19To30), female_19_30()),
        ((Female, Age31To50), female_31_50()),
        ((Female, Age51To70), female_51_70()),
        ((Female, Age71Plus), female_71_plus()),
    ])
}

fn build_ul_table() -> HashMap<(Sex, AgeGroup), NutrientTable> {
    use AgeGroup::*;
    use Sex::*;
    let ul = adult_ul();
    HashMap::from([
        ((Male, Age19To30), ul.clone()),
        ((Male, Age31To50), ul.clone()),
        ((Male, Age51To70), ul.clone()),
        ((Male, Age71Plus), ul.clone()),
        ((Female, Age19To30), ul.clone()),
        ((Female, Age31To50), ul.clone()),
        ((Female, Age51To70), ul.clone()),
        ((Female, Age71Plus), ul),
    ])
}

static DRI_TARGETS: OnceLock<HashMap<(Sex, AgeGroup), NutrientTable>> = OnceLock::new();
static UL_TABLE: OnceLock<HashMap<(Sex, AgeGroup), NutrientTable>> = OnceLock::new();

/// DRI (RDA/AI) target amounts for the given demographic cell.
pub fn dri_targets(sex: Sex, age_group: AgeGroup) -> &'static NutrientTable {
    DRI_TARGETS
        .get_or_init(build_dri_targets)
        .get(&(sex, age_group))
        .expect("DRI_TARGETS covers every (Sex, AgeGroup) cell")
}

/// Tolerable Upper Intake Levels for the given demographic cell.
pub fn ul_targets(sex: Sex, age_group: AgeGroup) -> &'static NutrientTable {
    UL_TABLE
        .get_or_init(build_ul_table)
        .get(&(sex, age_group))
        .expect("UL_TABLE covers every (Sex, AgeGroup) cell")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_present() {
        for sex in [Sex::Male, Sex::Female] {
            for age in [
                AgeGroup::Age19To30,
                AgeGroup::Age31To50,
                AgeGroup::Age51To70,
                AgeGroup::Age71Plus,
            ] {
                assert!(!dri_targets(sex, age).is_empty());
                assert!(!ul_targets(sex, age).is_empty());
            }
        }
    }

    #[test]
    fn target_never_exceeds_ul_where_both_defined() {
        for sex in [Sex::Male, Sex::Female] {
            for age in [
                AgeGroup::Age19To30,
                AgeGroup::Age31To50,
                AgeGroup::Age51To70,
                AgeGroup::Age71Plus,
            ] {
                let targets = dri_targets(sex, age);
                let uls = ul_targets(sex, age);
                for (key, target) in targets {
                    if let Some(ul) = uls.get(key) {
                        assert!(
                            target <= ul,
                            "{key:?} target {target} exceeds UL {ul} for {sex:?}/{age:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn older_adults_get_higher_calcium_and_vitamin_d() {
        let young = dri_targets(Sex::Female, AgeGroup::Age19To30);
        let old = dri_targets(Sex::Female, AgeGroup::Age71Plus);
        assert!(old[&MicroKey::CalciumMg] > young[&MicroKey::CalciumMg]);
        assert!(old[&MicroKey::VitaminDMcg] > young[&MicroKey::VitaminDMcg]);
    }
}
