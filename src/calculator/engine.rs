use crate::catalog::{self, BurnerModel};
use crate::fuels::{FuelType, WOOD_PELLET_CALORIFIC_KCAL_PER_KG, WOOD_PELLET_PRICE_INR_PER_KG};

/// Fixed working days per month assumed by the savings projection.
pub const WORKING_DAYS_PER_MONTH: f64 = 26.0;

/// One calculator interaction. Absent fields hold None; each derivation checks
/// its own preconditions and degrades to None instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub fuel: FuelType,
    /// Fuel price [₹ per usage unit].
    pub fuel_rate: Option<f64>,
    /// Hourly consumption [usage unit per hour].
    pub fuel_usage: Option<f64>,
    pub operating_hours_per_day: Option<f64>,
}

impl CalculationInput {
    pub fn new(fuel: FuelType) -> Self {
        Self {
            fuel,
            fuel_rate: None,
            fuel_usage: None,
            operating_hours_per_day: None,
        }
    }
}

/// Outcome of the capacity lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelSelection {
    Catalog(&'static BurnerModel),
    /// Load exceeds the largest standard model; needs a bespoke quote.
    Customized,
}

/// All nine derived values for one input. Recomputed on every change; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub wood_pellet_equivalent_usage_kg_per_hour: Option<f64>,
    pub fuel_cost_per_hour_inr: Option<f64>,
    pub wood_pellet_cost_per_hour_inr: Option<f64>,
    pub cost_saving_per_hour_inr: Option<f64>,
    pub cost_saving_per_month_inr: Option<f64>,
    pub cost_saving_per_year_inr: Option<f64>,
    pub model: Option<ModelSelection>,
    pub max_heat_capacity_kcal_per_hour: Option<f64>,
    pub payback_months: i64,
}

/// Wood pellet mass flow delivering the same heat as the current fuel [kg/hour].
pub fn wood_pellet_equivalent_usage(input: &CalculationInput) -> Option<f64> {
    let usage = input.fuel_usage?;
    let cv = input.fuel.data().calorific_value_kcal;
    Some(cv * usage / WOOD_PELLET_CALORIFIC_KCAL_PER_KG)
}

pub fn fuel_cost_per_hour(input: &CalculationInput) -> Option<f64> {
    Some(input.fuel_rate? * input.fuel_usage?)
}

pub fn wood_pellet_cost_per_hour(equivalent_usage: Option<f64>) -> Option<f64> {
    Some(equivalent_usage? * WOOD_PELLET_PRICE_INR_PER_KG)
}

/// May be negative when pellets cost more than the current fuel; the sign is
/// kept so a losing switch stays visible.
pub fn cost_saving_per_hour(
    fuel_cost: Option<f64>,
    wood_pellet_cost: Option<f64>,
) -> Option<f64> {
    Some(fuel_cost? - wood_pellet_cost?)
}

pub fn cost_saving_per_month(
    saving_per_hour: Option<f64>,
    operating_hours_per_day: Option<f64>,
) -> Option<f64> {
    Some(saving_per_hour? * operating_hours_per_day? * WORKING_DAYS_PER_MONTH)
}

pub fn cost_saving_per_year(saving_per_month: Option<f64>) -> Option<f64> {
    Some(saving_per_month? * 12.0)
}

/// Picks the smallest catalog model covering the heat output, or the
/// customization sentinel at and above the threshold.
pub fn select_model(input: &CalculationInput) -> Option<ModelSelection> {
    let usage = input.fuel_usage?;
    let heat_output = input.fuel.data().calorific_value_kcal * usage;
    if heat_output >= catalog::CUSTOMIZATION_THRESHOLD_KCAL_PER_HOUR {
        return Some(ModelSelection::Customized);
    }
    let model = catalog::smallest_for_load(heat_output).unwrap_or_else(catalog::largest_model);
    Some(ModelSelection::Catalog(model))
}

/// Rated capacity of the selected model. None for the customization sentinel
/// (the table shows "-" there).
pub fn max_heat_capacity(selection: Option<ModelSelection>) -> Option<f64> {
    match selection? {
        ModelSelection::Catalog(m) => Some(m.max_heat_capacity_kcal_per_hour),
        ModelSelection::Customized => None,
    }
}

/// Payback period in whole months.
///
/// Defaults to 1 without a catalog pick or a nonzero monthly saving. Otherwise
/// price/saving is rounded to the nearest integer and clamped: below 1 shows 1,
/// exactly 1 shows 2, the rest pass through. A negative saving rounds below 1
/// and therefore also shows 1; that quirk of the original logic is kept.
pub fn payback_months(
    selection: Option<ModelSelection>,
    saving_per_month: Option<f64>,
) -> i64 {
    let model = match selection {
        Some(ModelSelection::Catalog(m)) => m,
        _ => return 1,
    };
    let saving = match saving_per_month {
        Some(s) if s != 0.0 => s,
        _ => return 1,
    };
    let rounded = (model.price_inr / saving).round();
    if rounded < 1.0 {
        1
    } else if rounded < 2.0 {
        2
    } else {
        rounded as i64
    }
}

/// Runs the full derivation chain. Pure and deterministic for a fixed input.
pub fn derive(input: &CalculationInput) -> CalculationResult {
    let equivalent = wood_pellet_equivalent_usage(input);
    let fuel_cost = fuel_cost_per_hour(input);
    let pellet_cost = wood_pellet_cost_per_hour(equivalent);
    let saving_hour = cost_saving_per_hour(fuel_cost, pellet_cost);
    let saving_month = cost_saving_per_month(saving_hour, input.operating_hours_per_day);
    let saving_year = cost_saving_per_year(saving_month);
    let model = select_model(input);
    CalculationResult {
        wood_pellet_equivalent_usage_kg_per_hour: equivalent,
        fuel_cost_per_hour_inr: fuel_cost,
        wood_pellet_cost_per_hour_inr: pellet_cost,
        cost_saving_per_hour_inr: saving_hour,
        cost_saving_per_month_inr: saving_month,
        cost_saving_per_year_inr: saving_year,
        model,
        max_heat_capacity_kcal_per_hour: max_heat_capacity(model),
        payback_months: payback_months(model, saving_month),
    }
}
