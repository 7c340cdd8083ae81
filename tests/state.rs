use pellet_savings_toolbox::calculator::SavingsCalculator;
use pellet_savings_toolbox::fuels::FuelType;
use pellet_savings_toolbox::i18n::keys;

fn filled_calculator() -> SavingsCalculator {
    let mut calc = SavingsCalculator::new(FuelType::Diesel);
    calc.set_fuel_rate("91");
    calc.set_fuel_usage("10");
    calc.set_operating_hours("10");
    calc
}

#[test]
fn banner_hidden_until_calculate() {
    let mut calc = filled_calculator();
    assert!(!calc.results_confirmed());
    assert!(calc.calculate());
    assert!(calc.results_confirmed());
}

#[test]
fn any_edit_hides_the_banner() {
    let mut calc = filled_calculator();
    calc.calculate();
    calc.set_fuel_rate("92");
    assert!(!calc.results_confirmed());

    calc.calculate();
    calc.set_fuel_usage("11");
    assert!(!calc.results_confirmed());

    calc.calculate();
    calc.set_operating_hours("9");
    assert!(!calc.results_confirmed());

    calc.calculate();
    calc.set_fuel(FuelType::Lpg);
    assert!(!calc.results_confirmed());
}

#[test]
fn calculate_refuses_with_an_empty_field() {
    let mut calc = filled_calculator();
    calc.set_fuel_usage("");
    assert!(!calc.calculate());
    assert!(!calc.results_confirmed());
}

#[test]
fn hours_above_24_warn_but_still_compute() {
    let mut calc = filled_calculator();
    calc.set_operating_hours("30");
    assert_eq!(calc.hours_error(), Some(keys::CALC_OPERATING_HOURS_ERROR));
    // The warning never blocks the projection; 30 hours flow through as-is.
    let res = calc.derive();
    let saving = res.cost_saving_per_hour_inr.expect("saving");
    let monthly = res.cost_saving_per_month_inr.expect("monthly");
    assert!((monthly - saving * 30.0 * 26.0).abs() < 1e-6);
    assert!(calc.calculate());
}

#[test]
fn hours_warning_clears_when_back_in_range() {
    let mut calc = filled_calculator();
    calc.set_operating_hours("25");
    assert!(calc.hours_error().is_some());
    calc.set_operating_hours("24");
    assert!(calc.hours_error().is_none());
}

#[test]
fn non_numeric_text_counts_as_not_provided() {
    let mut calc = SavingsCalculator::new(FuelType::Diesel);
    calc.set_fuel_rate("abc");
    calc.set_fuel_usage("12,5");
    calc.set_operating_hours("  ");
    let input = calc.input();
    assert!(input.fuel_rate.is_none());
    assert!(input.fuel_usage.is_none());
    assert!(input.operating_hours_per_day.is_none());
    // Non-numeric text is still text; the banner gate only checks emptiness.
    assert!(!calc.calculate());
}

#[test]
fn whitespace_is_trimmed_when_parsing() {
    let mut calc = SavingsCalculator::new(FuelType::Diesel);
    calc.set_fuel_rate(" 91.5 ");
    assert_eq!(calc.input().fuel_rate, Some(91.5));
}
