#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui desktop GUI entry point.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use pellet_savings_toolbox::{
    calculator::{format, ModelSelection, SavingsCalculator},
    catalog, comparison, config, contact,
    contact::ContactForm,
    fuels::{ALL_FUELS, WOOD_PELLET_CALORIFIC_KCAL_PER_KG},
    i18n,
    i18n::keys,
};
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI language option: --lang xx or --lang=xx (xx: auto/en/en-in/gu/gu-in)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(860.0, 640.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Pellet Savings Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// Registers a Gujarati-capable font so the gu-in strings render.
/// 1) assets/fonts/ in the working directory
/// 2) common system font locations (Noto Sans Gujarati)
/// 3) otherwise Err; egui keeps its default font and gu text shows as boxes.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let candidates = [
        "assets/fonts/NotoSansGujarati-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansGujarati-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansGujarati-Regular.ttf",
        "C:\\Windows\\Fonts\\Shruti.ttf",
    ];
    for cand in candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file ({cand}): {e}"))?;
            apply_font_bytes(ctx, bytes, "gujarati_font");
            return Ok(());
        }
    }
    Err("Gujarati font not found; falling back to the default font.".into())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Catalog,
    Comparison,
    Contact,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    calc: SavingsCalculator,
    // Inquiry form
    contact_name: String,
    contact_number: String,
    contact_email: String,
    contact_message: String,
    contact_errors: Option<contact::FormErrors>,
    // Settings
    lang_input: String,
    lang_save_status: Option<String>,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, None);
        let calc = SavingsCalculator::new(config.default_fuel);
        let lang_input = config.language.clone();
        Self {
            config,
            tr,
            tab: Tab::Calculator,
            calc,
            contact_name: String::new(),
            contact_number: String::new(),
            contact_email: String::new(),
            contact_message: String::new(),
            contact_errors: None,
            lang_input,
            lang_save_status: None,
            export_status: None,
        }
    }

    fn calculator_tab(&mut self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        ui.heading(tr.t(keys::CALC_HEADING).trim_start());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(tr.t(keys::CALC_SELECT_FUEL));
            let mut fuel = self.calc.fuel();
            egui::ComboBox::from_id_source("fuel_choice")
                .selected_text(tr.t(fuel.name_key()))
                .show_ui(ui, |ui| {
                    for f in ALL_FUELS {
                        ui.selectable_value(&mut fuel, f, tr.t(f.name_key()));
                    }
                });
            if fuel != self.calc.fuel() {
                self.calc.set_fuel(fuel);
            }
        });

        ui.horizontal(|ui| {
            ui.label(tr.t(keys::CALC_CURRENT_FUEL_RATE));
            let mut rate = self.calc.fuel_rate_text().to_string();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut rate)
                    .hint_text(tr.t(keys::PLACEHOLDER_FUEL_PRICE)),
            );
            if resp.changed() {
                self.calc.set_fuel_rate(&rate);
            }
        });

        ui.horizontal(|ui| {
            ui.label(tr.t(keys::CALC_FUEL_USAGE_PER_HOUR));
            let mut usage = self.calc.fuel_usage_text().to_string();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut usage)
                    .hint_text(tr.t(self.calc.fuel().data().usage_placeholder_key)),
            );
            if resp.changed() {
                self.calc.set_fuel_usage(&usage);
            }
        });

        ui.horizontal(|ui| {
            ui.label(tr.t(keys::CALC_OPERATING_HOURS_PER_DAY));
            let mut hours = self.calc.operating_hours_text().to_string();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut hours)
                    .hint_text(tr.t(keys::PLACEHOLDER_OPERATING_HOURS)),
            );
            if resp.changed() {
                self.calc.set_operating_hours(&hours);
            }
        });
        if let Some(err_key) = self.calc.hours_error() {
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), tr.t(err_key));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button(tr.t(keys::CALC_CALCULATE)).clicked() {
                self.calc.calculate();
            }
            if ui.button(tr.t(keys::GUI_EXPORT_CSV)).clicked() {
                self.export_csv(tr);
            }
        });
        if let Some(msg) = &self.export_status {
            ui.small(msg.as_str());
        }

        ui.separator();
        self.comparison_grid(ui, tr);

        if self.calc.results_confirmed() {
            let res = self.calc.derive();
            let period = match res.model {
                Some(ModelSelection::Customized) => tr.t(keys::FEW_MONTHS).to_string(),
                _ => format!("{} {}", res.payback_months, tr.t(keys::MONTHS)),
            };
            ui.add_space(8.0);
            ui.colored_label(
                egui::Color32::from_rgb(30, 140, 60),
                format!(
                    "{} {} {}.",
                    tr.t(keys::CONGRATULATIONS),
                    tr.t(keys::RECOVER_COST_MESSAGE),
                    period
                ),
            );
        }
    }

    fn comparison_grid(&self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        let fuel = self.calc.fuel().data();
        let res = self.calc.derive();
        let usage_cell = if self.calc.fuel_usage_text().trim().is_empty() {
            format!("- ({})", fuel.usage_unit)
        } else {
            format!("{} ({})", self.calc.fuel_usage_text().trim(), fuel.usage_unit)
        };

        egui::Grid::new("savings_table")
            .num_columns(3)
            .spacing([16.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong(tr.t(keys::TABLE_FUEL));
                ui.strong(tr.t(self.calc.fuel().name_key()));
                ui.strong(tr.t(keys::TABLE_WOOD_PELLETS));
                ui.end_row();

                ui.label(tr.t(keys::TABLE_CALORIFIC_VALUE));
                ui.label(format!(
                    "{} ({})",
                    format::group_inr(fuel.calorific_value_kcal),
                    fuel.calorific_unit
                ));
                ui.label(format!(
                    "{} {}",
                    WOOD_PELLET_CALORIFIC_KCAL_PER_KG,
                    tr.t(keys::TABLE_PELLET_CALORIFIC_UNIT)
                ));
                ui.end_row();

                ui.label(tr.t(keys::TABLE_FUEL_USAGE));
                ui.label(usage_cell);
                ui.label(format!(
                    "{} {}",
                    format::decimal2(res.wood_pellet_equivalent_usage_kg_per_hour),
                    tr.t(keys::TABLE_PELLET_USAGE_UNIT)
                ));
                ui.end_row();

                ui.label(tr.t(keys::TABLE_FUEL_COST_PER_HOUR));
                ui.label(format::currency(res.fuel_cost_per_hour_inr));
                ui.label(format::currency(res.wood_pellet_cost_per_hour_inr));
                ui.end_row();

                ui.label(tr.t(keys::TABLE_SAVING_PER_HOUR));
                ui.label(format::currency(res.cost_saving_per_hour_inr));
                ui.label("");
                ui.end_row();

                ui.label(tr.t(keys::TABLE_SAVING_PER_MONTH));
                ui.label(format::currency(res.cost_saving_per_month_inr));
                ui.label("");
                ui.end_row();

                ui.label(tr.t(keys::TABLE_SAVING_PER_YEAR));
                ui.label(format::currency(res.cost_saving_per_year_inr));
                ui.label("");
                ui.end_row();

                ui.label(tr.t(keys::TABLE_MODEL));
                ui.label(format::model_label(
                    res.model,
                    tr.t(keys::CONTACT_FOR_CUSTOMIZED_MODEL),
                ));
                ui.label("");
                ui.end_row();

                ui.label(tr.t(keys::TABLE_MAX_HEAT_OUTPUT));
                ui.label(format::capacity(res.max_heat_capacity_kcal_per_hour));
                ui.label("");
                ui.end_row();
            });
    }

    fn export_csv(&mut self, tr: &i18n::Translator) {
        let fuel = self.calc.fuel().data();
        let res = self.calc.derive();
        let mut csv = String::new();
        csv.push_str(&format!(
            "{},{},{}\n",
            tr.t(keys::TABLE_FUEL),
            tr.t(self.calc.fuel().name_key()),
            tr.t(keys::TABLE_WOOD_PELLETS)
        ));
        csv.push_str(&format!(
            "{},{} {},{} {}\n",
            tr.t(keys::TABLE_CALORIFIC_VALUE),
            fuel.calorific_value_kcal,
            fuel.calorific_unit,
            WOOD_PELLET_CALORIFIC_KCAL_PER_KG,
            tr.t(keys::TABLE_PELLET_CALORIFIC_UNIT)
        ));
        csv.push_str(&format!(
            "{},{},{}\n",
            tr.t(keys::TABLE_FUEL_USAGE),
            self.calc.fuel_usage_text().trim(),
            format::decimal2(res.wood_pellet_equivalent_usage_kg_per_hour)
        ));
        csv.push_str(&format!(
            "{},{},{}\n",
            tr.t(keys::TABLE_FUEL_COST_PER_HOUR),
            format::decimal2(res.fuel_cost_per_hour_inr),
            format::decimal2(res.wood_pellet_cost_per_hour_inr)
        ));
        csv.push_str(&format!(
            "{},{}\n",
            tr.t(keys::TABLE_SAVING_PER_HOUR),
            format::decimal2(res.cost_saving_per_hour_inr)
        ));
        csv.push_str(&format!(
            "{},{}\n",
            tr.t(keys::TABLE_SAVING_PER_MONTH),
            format::decimal2(res.cost_saving_per_month_inr)
        ));
        csv.push_str(&format!(
            "{},{}\n",
            tr.t(keys::TABLE_SAVING_PER_YEAR),
            format::decimal2(res.cost_saving_per_year_inr)
        ));
        csv.push_str(&format!(
            "{},{}\n",
            tr.t(keys::TABLE_MODEL),
            format::model_label(res.model, tr.t(keys::CONTACT_FOR_CUSTOMIZED_MODEL))
        ));
        csv.push_str(&format!(
            "{},{}\n",
            tr.t(keys::TABLE_MAX_HEAT_OUTPUT),
            format::capacity(res.max_heat_capacity_kcal_per_hour)
        ));

        let picked = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("fuel_savings.csv")
            .save_file();
        if let Some(path) = picked {
            match fs::write(&path, csv) {
                Ok(()) => {
                    self.export_status =
                        Some(format!("{} {}", tr.t(keys::GUI_EXPORT_DONE), path.display()));
                }
                Err(e) => {
                    self.export_status = Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX)));
                }
            }
        }
    }

    fn catalog_tab(&self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        ui.heading(tr.t(keys::CATALOG_HEADING).trim_start());
        ui.add_space(6.0);
        egui::Grid::new("catalog_table")
            .num_columns(3)
            .spacing([24.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong(tr.t(keys::CATALOG_COL_MODEL));
                ui.strong(tr.t(keys::CATALOG_COL_CAPACITY));
                ui.strong(tr.t(keys::CATALOG_COL_PRICE));
                ui.end_row();
                for model in catalog::models() {
                    ui.label(model.id);
                    ui.label(format::group_inr(model.max_heat_capacity_kcal_per_hour));
                    ui.label(format::group_inr(model.price_inr));
                    ui.end_row();
                }
            });
    }

    fn comparison_tab(&self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        ui.heading(tr.t(keys::COMPARISON_HEADING).trim_start());
        ui.add_space(6.0);
        let cols = comparison::columns();
        egui::Grid::new("marketing_table")
            .num_columns(cols.len() + 1)
            .spacing([20.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("");
                for col in cols {
                    ui.strong(tr.t(col.name_key));
                }
                ui.end_row();

                ui.label(tr.t(keys::PARAM_CALORIFIC_VALUE));
                for col in cols {
                    ui.label(format::group_inr(col.calorific_value_kcal));
                }
                ui.end_row();

                ui.label(tr.t(keys::PARAM_EQUIVALENT_PELLET));
                for col in cols {
                    ui.label(format!("{}", col.equivalent_pellet_consumption_kg));
                }
                ui.end_row();

                ui.label(tr.t(keys::PARAM_RATE));
                for col in cols {
                    ui.label(format::group_inr(col.rate_inr));
                }
                ui.end_row();

                ui.label(tr.t(keys::PARAM_COST_OF_PELLET));
                for col in cols {
                    ui.label(format::group_inr(col.cost_in_pellet_terms_inr));
                }
                ui.end_row();

                ui.label(tr.t(keys::PARAM_SAVING_INR));
                for col in cols {
                    match col.tentative_saving_inr {
                        Some(v) => ui.label(format::group_inr(v)),
                        None => ui.label("-"),
                    };
                }
                ui.end_row();

                ui.label(tr.t(keys::PARAM_SAVING_PERCENT));
                for col in cols {
                    match col.tentative_saving_percent {
                        Some(v) => ui.label(format!("{v}%")),
                        None => ui.label("-"),
                    };
                }
                ui.end_row();
            });
    }

    fn contact_tab(&mut self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        ui.heading(tr.t(keys::CONTACT_HEADING).trim_start());
        ui.add_space(6.0);
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::CONTACT_NAME));
                ui.text_edit_singleline(&mut self.contact_name);
                ui.end_row();
                ui.label(tr.t(keys::CONTACT_NUMBER));
                ui.text_edit_singleline(&mut self.contact_number);
                ui.end_row();
                ui.label(tr.t(keys::CONTACT_EMAIL));
                ui.text_edit_singleline(&mut self.contact_email);
                ui.end_row();
                ui.label(tr.t(keys::CONTACT_MESSAGE));
                ui.text_edit_multiline(&mut self.contact_message);
                ui.end_row();
            });
        ui.add_space(6.0);
        if ui.button(tr.t(keys::GUI_VALIDATE)).clicked() {
            let form = ContactForm {
                name: self.contact_name.trim().to_string(),
                contact_number: self.contact_number.trim().to_string(),
                email: self.contact_email.trim().to_string(),
                message: self.contact_message.trim().to_string(),
            };
            self.contact_errors = Some(contact::validate(&form));
        }
        if let Some(errors) = &self.contact_errors {
            if errors.is_empty() {
                ui.colored_label(egui::Color32::from_rgb(30, 140, 60), tr.t(keys::CONTACT_OK));
            } else {
                for err_key in [
                    errors.name,
                    errors.contact_number,
                    errors.email,
                    errors.message,
                ]
                .into_iter()
                .flatten()
                {
                    ui.colored_label(egui::Color32::from_rgb(200, 60, 60), tr.t(err_key));
                }
            }
        }
    }

    fn settings_tab(&mut self, ui: &mut egui::Ui, tr: &i18n::Translator) {
        ui.heading(tr.t(keys::SETTINGS_HEADING).trim_start());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::SETTINGS_CURRENT_LANGUAGE));
            ui.label(&self.config.language);
        });
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(&self.lang_input)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.lang_input, "auto".into(), "Auto");
                ui.selectable_value(&mut self.lang_input, "en-in".into(), "English (India)");
                ui.selectable_value(&mut self.lang_input, "gu-in".into(), "ગુજરાતી");
            });
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::CALC_SELECT_FUEL));
            let mut fuel = self.config.default_fuel;
            egui::ComboBox::from_id_source("default_fuel_choice")
                .selected_text(tr.t(fuel.name_key()))
                .show_ui(ui, |ui| {
                    for f in ALL_FUELS {
                        ui.selectable_value(&mut fuel, f, tr.t(f.name_key()));
                    }
                });
            self.config.default_fuel = fuel;
        });
        if ui.button("Save").clicked() {
            self.config.language = self.lang_input.clone();
            let resolved = i18n::resolve_language(&self.config.language, None);
            self.tr = i18n::Translator::new_with_pack(&resolved, None);
            match self.config.save() {
                Ok(()) => {
                    self.lang_save_status = Some(format!(
                        "{} {}",
                        self.tr.t(keys::SETTINGS_SAVED),
                        self.config.language
                    ));
                }
                Err(e) => self.lang_save_status = Some(format!("Save error: {e}")),
            }
        }
        if let Some(msg) = &self.lang_save_status {
            ui.label(msg);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pellet Savings Toolbox");
                ui.separator();
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Calculator,
                    tr.t(keys::MAIN_MENU_CALCULATOR).trim_start_matches("1) "),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Catalog,
                    tr.t(keys::MAIN_MENU_CATALOG).trim_start_matches("2) "),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Comparison,
                    tr.t(keys::MAIN_MENU_COMPARISON).trim_start_matches("3) "),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Contact,
                    tr.t(keys::MAIN_MENU_CONTACT).trim_start_matches("4) "),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Settings,
                    tr.t(keys::MAIN_MENU_SETTINGS).trim_start_matches("5) "),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Calculator => self.calculator_tab(ui, &tr),
                Tab::Catalog => self.catalog_tab(ui, &tr),
                Tab::Comparison => self.comparison_tab(ui, &tr),
                Tab::Contact => self.contact_tab(ui, &tr),
                Tab::Settings => self.settings_tab(ui, &tr),
            });
        });
    }
}
