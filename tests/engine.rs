use pellet_savings_toolbox::calculator::engine::{
    self, CalculationInput, ModelSelection, WORKING_DAYS_PER_MONTH,
};
use pellet_savings_toolbox::catalog;
use pellet_savings_toolbox::fuels::FuelType;

fn diesel_input() -> CalculationInput {
    CalculationInput {
        fuel: FuelType::Diesel,
        fuel_rate: Some(91.0),
        fuel_usage: Some(10.0),
        operating_hours_per_day: Some(10.0),
    }
}

#[test]
fn diesel_reference_scenario() {
    // 10 ltr/hour of diesel at ₹91 running 10 hours a day.
    let res = engine::derive(&diesel_input());
    let equiv = res.wood_pellet_equivalent_usage_kg_per_hour.expect("equiv");
    assert!((equiv - 110_000.0 / 4100.0).abs() < 1e-9);
    assert!((res.fuel_cost_per_hour_inr.expect("fuel cost") - 910.0).abs() < 1e-9);
    let pellet_cost = res.wood_pellet_cost_per_hour_inr.expect("pellet cost");
    assert!((pellet_cost - equiv * 15.0).abs() < 1e-9);
    let saving = res.cost_saving_per_hour_inr.expect("saving/hour");
    assert!((saving - (910.0 - pellet_cost)).abs() < 1e-9);
    let monthly = res.cost_saving_per_month_inr.expect("saving/month");
    assert!((monthly - saving * 10.0 * WORKING_DAYS_PER_MONTH).abs() < 1e-6);
    let yearly = res.cost_saving_per_year_inr.expect("saving/year");
    assert!((yearly - monthly * 12.0).abs() < 1e-6);
    // 110,000 kcal/hour load rounds up to GPB-02.
    match res.model {
        Some(ModelSelection::Catalog(m)) => assert_eq!(m.id, "GPB-02"),
        other => panic!("expected GPB-02, got {other:?}"),
    }
    assert_eq!(res.max_heat_capacity_kcal_per_hour, Some(200_000.0));
    // 400,000 / 131,965.85 ≈ 3.03 → 3 months.
    assert_eq!(res.payback_months, 3);
}

#[test]
fn derivation_is_deterministic() {
    let input = diesel_input();
    assert_eq!(engine::derive(&input), engine::derive(&input));
}

#[test]
fn missing_rate_blanks_cost_rows_but_not_model() {
    let mut input = diesel_input();
    input.fuel_rate = None;
    let res = engine::derive(&input);
    assert!(res.wood_pellet_equivalent_usage_kg_per_hour.is_some());
    assert!(res.fuel_cost_per_hour_inr.is_none());
    assert!(res.cost_saving_per_hour_inr.is_none());
    assert!(res.cost_saving_per_month_inr.is_none());
    assert!(res.cost_saving_per_year_inr.is_none());
    // Model selection only needs the usage.
    assert!(res.model.is_some());
    assert_eq!(res.payback_months, 1);
}

#[test]
fn missing_usage_blanks_everything() {
    let mut input = diesel_input();
    input.fuel_usage = None;
    let res = engine::derive(&input);
    assert!(res.wood_pellet_equivalent_usage_kg_per_hour.is_none());
    assert!(res.fuel_cost_per_hour_inr.is_none());
    assert!(res.model.is_none());
    assert!(res.max_heat_capacity_kcal_per_hour.is_none());
    assert_eq!(res.payback_months, 1);
}

#[test]
fn missing_hours_blanks_monthly_and_yearly_only() {
    let mut input = diesel_input();
    input.operating_hours_per_day = None;
    let res = engine::derive(&input);
    assert!(res.cost_saving_per_hour_inr.is_some());
    assert!(res.cost_saving_per_month_inr.is_none());
    assert!(res.cost_saving_per_year_inr.is_none());
}

#[test]
fn threshold_load_takes_customized_path() {
    // LPG at 12,000 kcal/kg: 125 kg/hour is exactly 1,500,000 kcal/hour.
    let input = CalculationInput {
        fuel: FuelType::Lpg,
        fuel_rate: Some(88.0),
        fuel_usage: Some(125.0),
        operating_hours_per_day: Some(8.0),
    };
    let res = engine::derive(&input);
    assert_eq!(res.model, Some(ModelSelection::Customized));
    assert!(res.max_heat_capacity_kcal_per_hour.is_none());
    assert_eq!(res.payback_months, 1);
}

#[test]
fn just_below_threshold_picks_largest_model() {
    let input = CalculationInput {
        fuel: FuelType::Lpg,
        fuel_rate: Some(88.0),
        fuel_usage: Some(124.99),
        operating_hours_per_day: Some(8.0),
    };
    let res = engine::derive(&input);
    match res.model {
        Some(ModelSelection::Catalog(m)) => assert_eq!(m.id, "GPB-15"),
        other => panic!("expected GPB-15, got {other:?}"),
    }
    assert_eq!(res.max_heat_capacity_kcal_per_hour, Some(1_500_000.0));
}

#[test]
fn selection_is_monotone_in_load() {
    // Increasing usage never selects a smaller model.
    let mut last_capacity = 0.0;
    for usage in [1.0, 5.0, 10.0, 20.0, 40.0, 60.0, 90.0, 120.0] {
        let input = CalculationInput {
            fuel: FuelType::Diesel,
            fuel_rate: Some(91.0),
            fuel_usage: Some(usage),
            operating_hours_per_day: Some(8.0),
        };
        match engine::select_model(&input) {
            Some(ModelSelection::Catalog(m)) => {
                assert!(m.max_heat_capacity_kcal_per_hour >= last_capacity);
                last_capacity = m.max_heat_capacity_kcal_per_hour;
            }
            other => panic!("expected a catalog pick at usage {usage}, got {other:?}"),
        }
    }
}

#[test]
fn payback_rounding_and_clamping() {
    let gpb05 = catalog::find_model("GPB-05").expect("GPB-05");
    let sel = Some(ModelSelection::Catalog(gpb05));
    // price 600,000
    assert_eq!(engine::payback_months(sel, Some(600_000.0)), 2); // ratio 1.0
    assert_eq!(engine::payback_months(sel, Some(1_300_000.0)), 1); // ratio 0.46 → 0
    assert_eq!(engine::payback_months(sel, Some(400_000.0)), 2); // ratio 1.5 → 2
    assert_eq!(engine::payback_months(sel, Some(240_000.0)), 3); // ratio 2.5 → 3
    assert_eq!(engine::payback_months(sel, Some(100_000.0)), 6);
}

#[test]
fn payback_defaults_to_one() {
    let gpb01 = catalog::find_model("GPB-01").expect("GPB-01");
    let sel = Some(ModelSelection::Catalog(gpb01));
    assert_eq!(engine::payback_months(None, Some(50_000.0)), 1);
    assert_eq!(
        engine::payback_months(Some(ModelSelection::Customized), Some(50_000.0)),
        1
    );
    assert_eq!(engine::payback_months(sel, None), 1);
    assert_eq!(engine::payback_months(sel, Some(0.0)), 1);
    // Negative savings round below 1 and clamp to 1 as well.
    assert_eq!(engine::payback_months(sel, Some(-50_000.0)), 1);
}

#[test]
fn saving_can_go_negative() {
    // Rate low enough that pellets cost more per hour.
    let input = CalculationInput {
        fuel: FuelType::Diesel,
        fuel_rate: Some(10.0),
        fuel_usage: Some(10.0),
        operating_hours_per_day: Some(8.0),
    };
    let res = engine::derive(&input);
    let saving = res.cost_saving_per_hour_inr.expect("saving");
    assert!(saving < 0.0);
    let monthly = res.cost_saving_per_month_inr.expect("monthly");
    assert!(monthly < 0.0);
    assert_eq!(res.payback_months, 1);
}
