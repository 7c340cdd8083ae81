use crate::calculator::engine::{self, CalculationInput, CalculationResult};
use crate::fuels::FuelType;
use crate::i18n::keys;

/// Maximum accepted operating hours per day before the soft warning shows.
const MAX_OPERATING_HOURS: f64 = 24.0;

/// Input state of one calculator instance.
///
/// Raw field text is kept as entered and parsed once per edit; the comparison
/// table recomputes live from the parsed input, while the congratulations
/// banner only shows after an explicit `calculate()` with all three numeric
/// fields filled in. Any later edit hides the banner again.
#[derive(Debug, Clone)]
pub struct SavingsCalculator {
    fuel: FuelType,
    fuel_rate: String,
    fuel_usage: String,
    operating_hours: String,
    hours_error: Option<&'static str>,
    results_confirmed: bool,
}

impl SavingsCalculator {
    pub fn new(fuel: FuelType) -> Self {
        Self {
            fuel,
            fuel_rate: String::new(),
            fuel_usage: String::new(),
            operating_hours: String::new(),
            hours_error: None,
            results_confirmed: false,
        }
    }

    pub fn fuel(&self) -> FuelType {
        self.fuel
    }

    pub fn fuel_rate_text(&self) -> &str {
        &self.fuel_rate
    }

    pub fn fuel_usage_text(&self) -> &str {
        &self.fuel_usage
    }

    pub fn operating_hours_text(&self) -> &str {
        &self.operating_hours
    }

    /// i18n key of the soft validation message, when hours exceed 24.
    pub fn hours_error(&self) -> Option<&'static str> {
        self.hours_error
    }

    pub fn results_confirmed(&self) -> bool {
        self.results_confirmed
    }

    pub fn set_fuel(&mut self, fuel: FuelType) {
        self.fuel = fuel;
        self.results_confirmed = false;
    }

    pub fn set_fuel_rate(&mut self, text: &str) {
        self.fuel_rate = text.to_string();
        self.results_confirmed = false;
    }

    pub fn set_fuel_usage(&mut self, text: &str) {
        self.fuel_usage = text.to_string();
        self.results_confirmed = false;
    }

    /// Stores the hours text and refreshes the soft warning. Values above 24
    /// warn but still flow through every derivation unchanged.
    pub fn set_operating_hours(&mut self, text: &str) {
        self.operating_hours = text.to_string();
        self.results_confirmed = false;
        self.hours_error = match parse_decimal(text) {
            Some(h) if h > MAX_OPERATING_HOURS => Some(keys::CALC_OPERATING_HOURS_ERROR),
            _ => None,
        };
    }

    /// The explicit Calculate action. Shows the banner only when rate, usage
    /// and hours are all non-empty; otherwise a no-op that keeps it hidden.
    pub fn calculate(&mut self) -> bool {
        self.results_confirmed = !self.fuel_rate.trim().is_empty()
            && !self.fuel_usage.trim().is_empty()
            && !self.operating_hours.trim().is_empty();
        self.results_confirmed
    }

    /// Parsed snapshot of the current fields.
    pub fn input(&self) -> CalculationInput {
        CalculationInput {
            fuel: self.fuel,
            fuel_rate: parse_decimal(&self.fuel_rate),
            fuel_usage: parse_decimal(&self.fuel_usage),
            operating_hours_per_day: parse_decimal(&self.operating_hours),
        }
    }

    /// Recomputes the full result set from the current fields.
    pub fn derive(&self) -> CalculationResult {
        engine::derive(&self.input())
    }
}

/// Empty or non-numeric text is "not yet provided", never an error.
fn parse_decimal(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
