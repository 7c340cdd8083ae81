/// Static GPB burner catalog with rated capacities and list prices.
/// Values mirror the published product range; sizing relies on the ascending
/// capacity order below.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnerModel {
    pub id: &'static str,
    /// Maximum rated heat output [kcal/hour].
    pub max_heat_capacity_kcal_per_hour: f64,
    /// Capital cost used for payback estimation [INR].
    pub price_inr: f64,
}

impl BurnerModel {
    pub const fn new(id: &'static str, capacity: f64, price: f64) -> Self {
        Self {
            id,
            max_heat_capacity_kcal_per_hour: capacity,
            price_inr: price,
        }
    }
}

/// Loads at or above this heat output [kcal/hour] exceed the largest standard
/// model and get a customized-engineering quote instead of a catalog pick.
pub const CUSTOMIZATION_THRESHOLD_KCAL_PER_HOUR: f64 = 1_500_000.0;

/// Catalog in ascending capacity order. Capacities are strictly increasing;
/// `smallest_for_load` depends on that.
const MODELS: &[BurnerModel] = &[
    BurnerModel::new("GPB-01", 100_000.0, 300_000.0),
    BurnerModel::new("GPB-02", 200_000.0, 400_000.0),
    BurnerModel::new("GPB-03", 300_000.0, 450_000.0),
    BurnerModel::new("GPB-04", 400_000.0, 500_000.0),
    BurnerModel::new("GPB-05", 500_000.0, 600_000.0),
    BurnerModel::new("GPB-06", 600_000.0, 650_000.0),
    BurnerModel::new("GPB-08", 800_000.0, 750_000.0),
    BurnerModel::new("GPB-10", 1_000_000.0, 850_000.0),
    BurnerModel::new("GPB-12", 1_200_000.0, 1_000_000.0),
    BurnerModel::new("GPB-15", 1_500_000.0, 1_200_000.0),
];

pub fn models() -> &'static [BurnerModel] {
    MODELS
}

pub fn find_model(id: &str) -> Option<&'static BurnerModel> {
    MODELS.iter().find(|m| m.id.eq_ignore_ascii_case(id.trim()))
}

pub fn largest_model() -> &'static BurnerModel {
    &MODELS[MODELS.len() - 1]
}

/// First model whose rated capacity covers the load (round up to the next
/// capacity, not nearest fit). None when the load exceeds every model.
pub fn smallest_for_load(heat_output_kcal_per_hour: f64) -> Option<&'static BurnerModel> {
    MODELS
        .iter()
        .find(|m| heat_output_kcal_per_hour <= m.max_heat_capacity_kcal_per_hour)
}
