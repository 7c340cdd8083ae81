use serde::{Deserialize, Serialize};

use crate::i18n::keys;

/// Fuels the savings calculator can compare against wood pellets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Diesel,
    Lpg,
    Png,
    Ldo,
    FurnaceOil,
}

/// Reference data for one fuel. One record per fuel; never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct FuelData {
    /// Key used in config files and the original site's fuel dropdown.
    pub key: &'static str,
    /// Lower calorific value [kcal per usage unit].
    pub calorific_value_kcal: f64,
    /// Unit the calorific value is quoted in (per litre/kg/scm).
    pub calorific_unit: &'static str,
    /// Unit the hourly usage is entered in.
    pub usage_unit: &'static str,
    /// i18n key for the usage input placeholder.
    pub usage_placeholder_key: &'static str,
}

/// Calorific value of wood pellets used for sizing and cost equivalence [kcal/kg].
///
/// The About-page marketing table quotes a separate 4200 kcal/kg figure; that one
/// lives in `comparison` and must stay independent of this constant.
pub const WOOD_PELLET_CALORIFIC_KCAL_PER_KG: f64 = 4100.0;

/// Wood pellet unit price [INR/kg].
pub const WOOD_PELLET_PRICE_INR_PER_KG: f64 = 15.0;

/// Fuels in the dropdown order of the original site.
pub const ALL_FUELS: [FuelType; 5] = [
    FuelType::Diesel,
    FuelType::Lpg,
    FuelType::Png,
    FuelType::FurnaceOil,
    FuelType::Ldo,
];

impl FuelType {
    pub fn data(self) -> &'static FuelData {
        match self {
            FuelType::Diesel => &DIESEL,
            FuelType::Lpg => &LPG,
            FuelType::Png => &PNG,
            FuelType::Ldo => &LDO,
            FuelType::FurnaceOil => &FURNACE_OIL,
        }
    }

    pub fn key(self) -> &'static str {
        self.data().key
    }

    /// i18n key for the fuel's display name.
    pub fn name_key(self) -> &'static str {
        match self {
            FuelType::Diesel => keys::FUEL_DIESEL,
            FuelType::Lpg => keys::FUEL_LPG,
            FuelType::Png => keys::FUEL_PNG,
            FuelType::Ldo => keys::FUEL_LDO,
            FuelType::FurnaceOil => keys::FUEL_FURNACE_OIL,
        }
    }

    /// Resolves one of the five fixed fuel keys. Case-insensitive.
    pub fn from_key(key: &str) -> Option<FuelType> {
        ALL_FUELS
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(key.trim()))
    }
}

const DIESEL: FuelData = FuelData {
    key: "Diesel",
    calorific_value_kcal: 11_000.0,
    calorific_unit: "kcal/ltr",
    usage_unit: "ltr/hour",
    usage_placeholder_key: keys::PLACEHOLDER_USAGE_LTR,
};

const LPG: FuelData = FuelData {
    key: "LPG",
    calorific_value_kcal: 12_000.0,
    calorific_unit: "kcal/kg",
    usage_unit: "kg/hour",
    usage_placeholder_key: keys::PLACEHOLDER_USAGE_KG,
};

const PNG: FuelData = FuelData {
    key: "PNG",
    calorific_value_kcal: 10_500.0,
    calorific_unit: "kcal/scm",
    usage_unit: "scm/hour",
    usage_placeholder_key: keys::PLACEHOLDER_USAGE_SCM,
};

const LDO: FuelData = FuelData {
    key: "LDO",
    calorific_value_kcal: 10_200.0,
    calorific_unit: "kcal/ltr",
    usage_unit: "ltr/hour",
    usage_placeholder_key: keys::PLACEHOLDER_USAGE_LTR,
};

const FURNACE_OIL: FuelData = FuelData {
    key: "Furnace Oil",
    calorific_value_kcal: 10_500.0,
    calorific_unit: "kcal/ltr",
    usage_unit: "ltr/hour",
    usage_placeholder_key: keys::PLACEHOLDER_USAGE_LTR,
};
