use pellet_savings_toolbox::catalog;

#[test]
fn capacities_strictly_ascending() {
    let models = catalog::models();
    assert_eq!(models.len(), 10);
    for pair in models.windows(2) {
        assert!(
            pair[0].max_heat_capacity_kcal_per_hour < pair[1].max_heat_capacity_kcal_per_hour,
            "{} must be smaller than {}",
            pair[0].id,
            pair[1].id
        );
    }
}

#[test]
fn prices_ascend_with_capacity() {
    for pair in catalog::models().windows(2) {
        assert!(pair[0].price_inr < pair[1].price_inr);
    }
}

#[test]
fn find_model_is_case_insensitive() {
    let m = catalog::find_model("gpb-10").expect("GPB-10");
    assert_eq!(m.max_heat_capacity_kcal_per_hour, 1_000_000.0);
    assert!(catalog::find_model(" GPB-01 ").is_some());
    assert!(catalog::find_model("GPB-99").is_none());
}

#[test]
fn largest_model_is_gpb15() {
    let m = catalog::largest_model();
    assert_eq!(m.id, "GPB-15");
    assert_eq!(
        m.max_heat_capacity_kcal_per_hour,
        catalog::CUSTOMIZATION_THRESHOLD_KCAL_PER_HOUR
    );
}

#[test]
fn smallest_for_load_rounds_up() {
    assert_eq!(catalog::smallest_for_load(100_000.0).expect("exact fit").id, "GPB-01");
    assert_eq!(catalog::smallest_for_load(100_001.0).expect("next up").id, "GPB-02");
    assert_eq!(catalog::smallest_for_load(650_000.0).expect("gap").id, "GPB-08");
    assert!(catalog::smallest_for_load(1_600_000.0).is_none());
}
