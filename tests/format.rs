use pellet_savings_toolbox::calculator::engine::ModelSelection;
use pellet_savings_toolbox::calculator::format;
use pellet_savings_toolbox::catalog;

#[test]
fn decimal2_rounds_and_dashes() {
    assert_eq!(format::decimal2(Some(26.82926829)), "26.83");
    assert_eq!(format::decimal2(Some(910.0)), "910.00");
    assert_eq!(format::decimal2(Some(-507.556)), "-507.56");
    assert_eq!(format::decimal2(None), "-");
}

#[test]
fn currency_prefixes_rupee_sign() {
    assert_eq!(format::currency(Some(910.0)), "₹ 910.00");
    assert_eq!(format::currency(None), "₹ -");
}

#[test]
fn indian_digit_grouping() {
    assert_eq!(format::group_inr(910.0), "910");
    assert_eq!(format::group_inr(1_234.0), "1,234");
    assert_eq!(format::group_inr(100_000.0), "1,00,000");
    assert_eq!(format::group_inr(123_456.0), "1,23,456");
    assert_eq!(format::group_inr(1_500_000.0), "15,00,000");
    assert_eq!(format::group_inr(12_345_678.0), "1,23,45,678");
    assert_eq!(format::group_inr(-100_000.0), "-1,00,000");
}

#[test]
fn capacity_with_unit() {
    assert_eq!(format::capacity(Some(1_500_000.0)), "15,00,000 kcal/hour");
    assert_eq!(format::capacity(None), "-");
}

#[test]
fn model_cell_text() {
    let gpb02 = catalog::find_model("GPB-02").expect("GPB-02");
    assert_eq!(
        format::model_label(Some(ModelSelection::Catalog(gpb02)), "custom"),
        "GPB-02"
    );
    assert_eq!(
        format::model_label(Some(ModelSelection::Customized), "Contact for customized model"),
        "Contact for customized model"
    );
    assert_eq!(format::model_label(None, "custom"), "-");
}
