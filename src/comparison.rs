use crate::i18n::keys;

/// Static marketing comparison of wood pellets against conventional fuels, as
/// published on the About page. Display-only; the savings calculator never
/// reads these figures.

/// Pellet calorific value quoted in the marketing table [kcal/kg]. Distinct
/// from the 4100 kcal/kg sizing constant in `fuels`; the two are not unified.
pub const WOOD_PELLET_CALORIFIC_MARKETING_KCAL_PER_KG: f64 = 4200.0;

#[derive(Debug, Clone, Copy)]
pub struct ComparisonColumn {
    /// i18n key for the column heading.
    pub name_key: &'static str,
    pub calorific_value_kcal: f64,
    /// Pellet mass matching one unit of this fuel [kg].
    pub equivalent_pellet_consumption_kg: f64,
    pub rate_inr: f64,
    /// What the same heat costs when bought as pellets [₹].
    pub cost_in_pellet_terms_inr: f64,
    /// None in the pellet baseline column (rendered as "-").
    pub tentative_saving_inr: Option<f64>,
    pub tentative_saving_percent: Option<f64>,
}

const COLUMNS: &[ComparisonColumn] = &[
    ComparisonColumn {
        name_key: keys::COMPARISON_PELLETS,
        calorific_value_kcal: WOOD_PELLET_CALORIFIC_MARKETING_KCAL_PER_KG,
        equivalent_pellet_consumption_kg: 1.0,
        rate_inr: 15.0,
        cost_in_pellet_terms_inr: 15.0,
        tentative_saving_inr: None,
        tentative_saving_percent: None,
    },
    ComparisonColumn {
        name_key: keys::FUEL_LPG,
        calorific_value_kcal: 12_000.0,
        equivalent_pellet_consumption_kg: 2.86,
        rate_inr: 88.0,
        cost_in_pellet_terms_inr: 43.0,
        tentative_saving_inr: Some(45.0),
        tentative_saving_percent: Some(51.0),
    },
    ComparisonColumn {
        name_key: keys::FUEL_DIESEL,
        calorific_value_kcal: 11_000.0,
        equivalent_pellet_consumption_kg: 2.62,
        rate_inr: 91.0,
        cost_in_pellet_terms_inr: 40.0,
        tentative_saving_inr: Some(51.0),
        tentative_saving_percent: Some(56.0),
    },
    ComparisonColumn {
        name_key: keys::FUEL_LDO,
        calorific_value_kcal: 10_200.0,
        equivalent_pellet_consumption_kg: 2.42,
        rate_inr: 65.0,
        cost_in_pellet_terms_inr: 37.0,
        tentative_saving_inr: Some(29.0),
        tentative_saving_percent: Some(44.0),
    },
];

/// Pellet baseline first, then LPG, Diesel, LDO.
pub fn columns() -> &'static [ComparisonColumn] {
    COLUMNS
}
