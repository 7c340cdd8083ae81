use std::io::{self, Write};

use crate::app::AppError;
use crate::calculator::{format, SavingsCalculator};
use crate::catalog;
use crate::comparison;
use crate::config::Config;
use crate::contact::{self, ContactForm};
use crate::fuels::{FuelType, ALL_FUELS, WOOD_PELLET_CALORIFIC_KCAL_PER_KG};
use crate::i18n::{keys, Translator};

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SavingsCalculator,
    BurnerCatalog,
    ComparisonTable,
    ContactCheck,
    Settings,
    Exit,
}

/// Shows the main menu and returns the selection.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATOR));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARISON));
    println!("{}", tr.t(keys::MAIN_MENU_CONTACT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SavingsCalculator),
            "2" => return Ok(MenuChoice::BurnerCatalog),
            "3" => return Ok(MenuChoice::ComparisonTable),
            "4" => return Ok(MenuChoice::ContactCheck),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Runs one fuel-savings calculation round.
pub fn handle_savings_calculator(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_NOTE_EMPTY));

    let mut calc = SavingsCalculator::new(cfg.default_fuel);

    println!("{}", tr.t(keys::CALC_SELECT_FUEL));
    for (i, fuel) in ALL_FUELS.iter().enumerate() {
        println!("{}) {}", i + 1, tr.t(fuel.name_key()));
    }
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    if let Some(fuel) = fuel_by_index(sel.trim()) {
        calc.set_fuel(fuel);
    }

    let rate = read_line(&format!(
        "{} ({}): ",
        tr.t(keys::CALC_CURRENT_FUEL_RATE),
        tr.t(keys::PLACEHOLDER_FUEL_PRICE)
    ))?;
    calc.set_fuel_rate(rate.trim());

    let usage = read_line(&format!(
        "{} ({}): ",
        tr.t(keys::CALC_FUEL_USAGE_PER_HOUR),
        tr.t(calc.fuel().data().usage_placeholder_key)
    ))?;
    calc.set_fuel_usage(usage.trim());

    let hours = read_line(&format!(
        "{} ({}): ",
        tr.t(keys::CALC_OPERATING_HOURS_PER_DAY),
        tr.t(keys::PLACEHOLDER_OPERATING_HOURS)
    ))?;
    calc.set_operating_hours(hours.trim());

    if let Some(err_key) = calc.hours_error() {
        println!("{} {}", tr.t(keys::ERROR_PREFIX), tr.t(err_key));
    }

    print_comparison(tr, &calc);

    // The explicit Calculate step gates only the banner; the table above is live.
    if calc.calculate() {
        print_banner(tr, &calc);
    } else {
        println!("{}", tr.t(keys::CALC_MISSING_FIELDS));
    }
    Ok(())
}

fn fuel_by_index(sel: &str) -> Option<FuelType> {
    let n: usize = sel.parse().ok()?;
    ALL_FUELS.get(n.checked_sub(1)?).copied()
}

fn print_comparison(tr: &Translator, calc: &SavingsCalculator) {
    let fuel = calc.fuel().data();
    let res = calc.derive();

    let usage_cell = if calc.fuel_usage_text().trim().is_empty() {
        format!("- ({})", fuel.usage_unit)
    } else {
        format!("{} ({})", calc.fuel_usage_text().trim(), fuel.usage_unit)
    };
    let pellet_usage_cell = match res.wood_pellet_equivalent_usage_kg_per_hour {
        Some(v) => format!("{v:.2} {}", tr.t(keys::TABLE_PELLET_USAGE_UNIT)),
        None => format!("- {}", tr.t(keys::TABLE_PELLET_USAGE_UNIT)),
    };

    println!(
        "{:<28} | {:^24} | {:^24}",
        tr.t(keys::TABLE_FUEL),
        tr.t(calc.fuel().name_key()),
        tr.t(keys::TABLE_WOOD_PELLETS)
    );
    println!(
        "{:<28} | {:^24} | {:^24}",
        tr.t(keys::TABLE_CALORIFIC_VALUE),
        format!(
            "{} ({})",
            format::group_inr(fuel.calorific_value_kcal),
            fuel.calorific_unit
        ),
        format!(
            "{} {}",
            WOOD_PELLET_CALORIFIC_KCAL_PER_KG,
            tr.t(keys::TABLE_PELLET_CALORIFIC_UNIT)
        )
    );
    println!(
        "{:<28} | {:^24} | {:^24}",
        tr.t(keys::TABLE_FUEL_USAGE),
        usage_cell,
        pellet_usage_cell
    );
    println!(
        "{:<28} | {:^24} | {:^24}",
        tr.t(keys::TABLE_FUEL_COST_PER_HOUR),
        format::currency(res.fuel_cost_per_hour_inr),
        format::currency(res.wood_pellet_cost_per_hour_inr)
    );
    println!(
        "{:<28} | {:^51}",
        tr.t(keys::TABLE_SAVING_PER_HOUR),
        format::currency(res.cost_saving_per_hour_inr)
    );
    println!(
        "{:<28} | {:^51}",
        tr.t(keys::TABLE_SAVING_PER_MONTH),
        format::currency(res.cost_saving_per_month_inr)
    );
    println!(
        "{:<28} | {:^51}",
        tr.t(keys::TABLE_SAVING_PER_YEAR),
        format::currency(res.cost_saving_per_year_inr)
    );
    println!(
        "{:<28} | {:^51}",
        tr.t(keys::TABLE_MODEL),
        format::model_label(res.model, tr.t(keys::CONTACT_FOR_CUSTOMIZED_MODEL))
    );
    println!(
        "{:<28} | {:^51}",
        tr.t(keys::TABLE_MAX_HEAT_OUTPUT),
        format::capacity(res.max_heat_capacity_kcal_per_hour)
    );
}

fn print_banner(tr: &Translator, calc: &SavingsCalculator) {
    use crate::calculator::ModelSelection;
    let res = calc.derive();
    let period = match res.model {
        Some(ModelSelection::Customized) => tr.t(keys::FEW_MONTHS).to_string(),
        _ => format!("{} {}", res.payback_months, tr.t(keys::MONTHS)),
    };
    println!(
        "\n{} {} {}.",
        tr.t(keys::CONGRATULATIONS),
        tr.t(keys::RECOVER_COST_MESSAGE),
        period
    );
}

/// Prints the burner catalog.
pub fn handle_burner_catalog(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    println!(
        "{:<10} | {:>24} | {:>12}",
        tr.t(keys::CATALOG_COL_MODEL),
        tr.t(keys::CATALOG_COL_CAPACITY),
        tr.t(keys::CATALOG_COL_PRICE)
    );
    for model in catalog::models() {
        println!(
            "{:<10} | {:>24} | {:>12}",
            model.id,
            format::group_inr(model.max_heat_capacity_kcal_per_hour),
            format::group_inr(model.price_inr)
        );
    }
    Ok(())
}

/// Prints the static pellet-vs-fuel marketing table.
pub fn handle_comparison_table(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARISON_HEADING));
    let cols = comparison::columns();

    print!("{:<36}", "");
    for col in cols {
        print!(" | {:^14}", tr.t(col.name_key));
    }
    println!();

    print!("{:<36}", tr.t(keys::PARAM_CALORIFIC_VALUE));
    for col in cols {
        print!(" | {:^14}", format::group_inr(col.calorific_value_kcal));
    }
    println!();

    print!("{:<36}", tr.t(keys::PARAM_EQUIVALENT_PELLET));
    for col in cols {
        print!(" | {:^14}", col.equivalent_pellet_consumption_kg);
    }
    println!();

    print!("{:<36}", tr.t(keys::PARAM_RATE));
    for col in cols {
        print!(" | {:^14}", format::group_inr(col.rate_inr));
    }
    println!();

    print!("{:<36}", tr.t(keys::PARAM_COST_OF_PELLET));
    for col in cols {
        print!(" | {:^14}", format::group_inr(col.cost_in_pellet_terms_inr));
    }
    println!();

    print!("{:<36}", tr.t(keys::PARAM_SAVING_INR));
    for col in cols {
        let cell = match col.tentative_saving_inr {
            Some(v) => format::group_inr(v),
            None => "-".to_string(),
        };
        print!(" | {cell:^14}");
    }
    println!();

    print!("{:<36}", tr.t(keys::PARAM_SAVING_PERCENT));
    for col in cols {
        let cell = match col.tentative_saving_percent {
            Some(v) => format!("{v}%"),
            None => "-".to_string(),
        };
        print!(" | {cell:^14}");
    }
    println!();
    Ok(())
}

/// Prompts the inquiry form fields and reports the validation result.
pub fn handle_contact_check(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONTACT_HEADING));
    let form = ContactForm {
        name: read_line(&format!("{}: ", tr.t(keys::CONTACT_NAME)))?
            .trim()
            .to_string(),
        contact_number: read_line(&format!("{}: ", tr.t(keys::CONTACT_NUMBER)))?
            .trim()
            .to_string(),
        email: read_line(&format!("{}: ", tr.t(keys::CONTACT_EMAIL)))?
            .trim()
            .to_string(),
        message: read_line(&format!("{}: ", tr.t(keys::CONTACT_MESSAGE)))?
            .trim()
            .to_string(),
    };
    let errors = contact::validate(&form);
    if errors.is_empty() {
        println!("{}", tr.t(keys::CONTACT_OK));
        return Ok(());
    }
    for (label, err) in [
        (keys::CONTACT_NAME, errors.name),
        (keys::CONTACT_NUMBER, errors.contact_number),
        (keys::CONTACT_EMAIL, errors.email),
        (keys::CONTACT_MESSAGE, errors.message),
    ] {
        if let Some(err_key) = err {
            println!("{}: {}", tr.t(label), tr.t(err_key));
        }
    }
    Ok(())
}

/// Language settings.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "en-in".to_string(),
        "2" => cfg.language = "gu-in".to_string(),
        "3" => cfg.language = "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
