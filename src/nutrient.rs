//! Canonical micronutrient identity layer.
//!
//! A closed, stable set of 20 keys the solver core understands. Ported from
//! `MICRO_INFO` in the Python original (`daily_chow.dri`); see `DESIGN.md`.
//! The core treats these as opaque identifiers for constraint/objective
//! bookkeeping — it never inspects the display name or unit itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance tier, carried over from the reference data (`dri.py`'s
/// `MicroInfo.tier`). Not consumed by the solver; exposed for callers that
/// want to prioritize which nutrients to surface in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Major minerals tracked first (calcium, iron, ...).
    One,
    /// Water-soluble vitamins.
    Two,
    /// Fat-soluble vitamins.
    Three,
}

/// A canonical micronutrient key. Mineral keys end in `_mg`/`_mcg` matching
/// their canonical unit, per spec.md §6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MicroKey {
    CalciumMg,
    IronMg,
    MagnesiumMg,
    PhosphorusMg,
    PotassiumMg,
    ZincMg,
    CopperMg,
    ManganeseMg,
    SeleniumMcg,
    VitaminCMg,
    ThiaminMg,
    RiboflavinMg,
    NiacinMg,
    VitaminB6Mg,
    FolateMcg,
    VitaminB12Mcg,
    VitaminAMcg,
    VitaminDMcg,
    VitaminEMg,
    VitaminKMcg,
}

impl MicroKey {
    /// All 20 canonical keys, in the same order as `dri.py`'s `MICRO_INFO`.
    pub const ALL: [MicroKey; 20] = [
        MicroKey::CalciumMg,
        MicroKey::IronMg,
        MicroKey::MagnesiumMg,
        MicroKey::PhosphorusMg,
        MicroKey::PotassiumMg,
        MicroKey::ZincMg,
        MicroKey::CopperMg,
        MicroKey::ManganeseMg,
        MicroKey::SeleniumMcg,
        MicroKey::VitaminCMg,
        MicroKey::ThiaminMg,
        MicroKey::RiboflavinMg,
        MicroKey::NiacinMg,
        MicroKey::VitaminB6Mg,
        MicroKey::FolateMcg,
        MicroKey::VitaminB12Mcg,
        MicroKey::VitaminAMcg,
        MicroKey::VitaminDMcg,
        MicroKey::VitaminEMg,
        MicroKey::VitaminKMcg,
    ];

    /// Human-facing display name ("Vitamin B12", "Calcium", ...).
    pub const fn display_name(self) -> &'static str {
        match self {
            MicroKey::CalciumMg => "Calcium",
            MicroKey::IronMg => "Iron",
            MicroKey::MagnesiumMg => "Magnesium",
            MicroKey::PhosphorusMg => "Phosphorus",
            MicroKey::PotassiumMg => "Potassium",
            MicroKey::ZincMg => "Zinc",
            MicroKey::CopperMg => "Copper",
            MicroKey::ManganeseMg => "Manganese",
            MicroKey::SeleniumMcg => "Selenium",
            MicroKey::VitaminCMg => "Vitamin C",
            MicroKey::ThiaminMg => "Thiamin",
            MicroKey::RiboflavinMg => "Riboflavin",
            MicroKey::NiacinMg => "Niacin",
            MicroKey::VitaminB6Mg => "Vitamin B6",
            MicroKey::FolateMcg => "Folate",
            MicroKey::VitaminB12Mcg => "Vitamin B12",
            MicroKey::VitaminAMcg => "Vitamin A",
            MicroKey::VitaminDMcg => "Vitamin D",
            MicroKey::VitaminEMg => "Vitamin E",
            MicroKey::VitaminKMcg => "Vitamin K",
        }
    }

    /// Canonical unit the amount is expressed in ("mg" or "mcg").
    pub const fn unit(self) -> &'static str {
        match self {
            MicroKey::CalciumMg
            | MicroKey::IronMg
            | MicroKey::MagnesiumMg
            | MicroKey::PhosphorusMg
            | MicroKey::PotassiumMg
            | MicroKey::ZincMg
            | MicroKey::CopperMg
            | MicroKey::ManganeseMg
            | MicroKey::VitaminCMg
            | MicroKey::ThiaminMg
            | MicroKey::RiboflavinMg
            | MicroKey::NiacinMg
            | MicroKey::VitaminB6Mg
            | MicroKey::VitaminEMg => "mg",
            MicroKey::SeleniumMcg
            | MicroKey::FolateMcg
            | MicroKey::VitaminB12Mcg
            | MicroKey::VitaminAMcg
            | MicroKey::VitaminDMcg
            | MicroKey::VitaminKMcg => "mcg",
        }
    }

    /// Source nutrient identifier in the reference USDA database, carried
    /// over verbatim from `dri.py`'s `MicroInfo.usda_id`.
    pub const fn usda_nutrient_id(self) -> u32 {
        match self {
            MicroKey::CalciumMg => 1087,
            MicroKey::IronMg => 1089,
            MicroKey::MagnesiumMg => 1090,
            MicroKey::PhosphorusMg => 1091,
            MicroKey::PotassiumMg => 1092,
            MicroKey::ZincMg => 1095,
            MicroKey::CopperMg => 1098,
            MicroKey::ManganeseMg => 1101,
            MicroKey::SeleniumMcg => 1103,
            MicroKey::VitaminCMg => 1162,
            MicroKey::ThiaminMg => 1165,
            MicroKey::RiboflavinMg => 1166,
            MicroKey::NiacinMg => 1167,
            MicroKey::VitaminB6Mg => 1175,
            MicroKey::FolateMcg => 1177,
            MicroKey::VitaminB12Mcg => 1178,
            MicroKey::VitaminAMcg => 1106,
            MicroKey::VitaminDMcg => 1114,
            MicroKey::VitaminEMg => 1109,
            MicroKey::VitaminKMcg => 1185,
        }
    }

    pub const fn tier(self) -> Tier {
        match self {
            MicroKey::CalciumMg
            | MicroKey::IronMg
            | MicroKey::MagnesiumMg
            | MicroKey::PhosphorusMg
            | MicroKey::PotassiumMg
            | MicroKey::ZincMg
            | MicroKey::CopperMg
            | MicroKey::ManganeseMg
            | MicroKey::SeleniumMcg => Tier::One,
            MicroKey::VitaminCMg
            | MicroKey::ThiaminMg
            | MicroKey::RiboflavinMg
            | MicroKey::NiacinMg
            | MicroKey::VitaminB6Mg
            | MicroKey::FolateMcg
            | MicroKey::VitaminB12Mcg => Tier::Two,
            MicroKey::VitaminAMcg
            | MicroKey::VitaminDMcg
            | MicroKey::VitaminEMg
            | MicroKey::VitaminKMcg => Tier::Three,
        }
    }
}

impl fmt::Display for MicroKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_keys_have_distinct_usda_ids() {
        let ids: HashSet<u32> = MicroKey::ALL.iter().map(|k| k.usda_nutrient_id()).collect();
        assert_eq!(ids.len(), MicroKey::ALL.len());
    }

    #[test]
    fn all_keys_round_trip_through_serde() {
        for key in MicroKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            let back: MicroKey = serde_json::from_str(&json).unwrap();
            assert_eq!(key, back);
        }
    }
}
