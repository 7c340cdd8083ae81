//! Display formatting for the comparison table: two decimals for derived
//! values, "-" placeholders for unavailable cells, Indian digit grouping for
//! capacities and prices.

/// "26.83" or "-".
pub fn decimal2(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

/// "₹ 910.00" or "₹ -".
pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹ {v:.2}"),
        None => "₹ -".to_string(),
    }
}

/// Indian grouping of the rounded value: 1,00,000 / 15,00,000.
pub fn group_inr(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::new();
    let n = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        let rem = n - i;
        if i > 0 && (rem == 3 || (rem > 3 && (rem - 3) % 2 == 0)) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// "15,00,000 kcal/hour" or "-".
pub fn capacity(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} kcal/hour", group_inr(v)),
        None => "-".to_string(),
    }
}

/// Model cell text. `customized_label` is the translated sentinel string.
pub fn model_label(
    selection: Option<crate::calculator::engine::ModelSelection>,
    customized_label: &str,
) -> String {
    use crate::calculator::engine::ModelSelection;
    match selection {
        Some(ModelSelection::Catalog(m)) => m.id.to_string(),
        Some(ModelSelection::Customized) => customized_label.to_string(),
        None => "-".to_string(),
    }
}
