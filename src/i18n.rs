use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// Namespace collecting every string key.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATOR: &str = "main_menu.calculator";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_COMPARISON: &str = "main_menu.comparison";
    pub const MAIN_MENU_CONTACT: &str = "main_menu.contact";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calculator.heading";
    pub const CALC_SELECT_FUEL: &str = "calculator.select_fuel";
    pub const CALC_CURRENT_FUEL_RATE: &str = "calculator.current_fuel_rate";
    pub const CALC_FUEL_USAGE_PER_HOUR: &str = "calculator.fuel_usage_per_hour";
    pub const CALC_OPERATING_HOURS_PER_DAY: &str = "calculator.operating_hours_per_day";
    pub const CALC_CALCULATE: &str = "calculator.calculate_savings";
    pub const CALC_OPERATING_HOURS_ERROR: &str = "calculator.operating_hours_error";
    pub const CALC_MISSING_FIELDS: &str = "calculator.missing_fields";
    pub const CALC_NOTE_EMPTY: &str = "calculator.note_empty";

    pub const PLACEHOLDER_USAGE_LTR: &str = "placeholder.usage_ltr";
    pub const PLACEHOLDER_USAGE_KG: &str = "placeholder.usage_kg";
    pub const PLACEHOLDER_USAGE_SCM: &str = "placeholder.usage_scm";
    pub const PLACEHOLDER_FUEL_PRICE: &str = "placeholder.fuel_price";
    pub const PLACEHOLDER_OPERATING_HOURS: &str = "placeholder.operating_hours";

    pub const TABLE_FUEL: &str = "table.fuel";
    pub const TABLE_WOOD_PELLETS: &str = "table.wood_pellets";
    pub const TABLE_CALORIFIC_VALUE: &str = "table.calorific_value";
    pub const TABLE_PELLET_CALORIFIC_UNIT: &str = "table.pellet_calorific_unit";
    pub const TABLE_PELLET_USAGE_UNIT: &str = "table.pellet_usage_unit";
    pub const TABLE_FUEL_USAGE: &str = "table.fuel_usage";
    pub const TABLE_FUEL_COST_PER_HOUR: &str = "table.fuel_cost_per_hour";
    pub const TABLE_SAVING_PER_HOUR: &str = "table.saving_per_hour";
    pub const TABLE_SAVING_PER_MONTH: &str = "table.saving_per_month";
    pub const TABLE_SAVING_PER_YEAR: &str = "table.saving_per_year";
    pub const TABLE_MODEL: &str = "table.model";
    pub const TABLE_MAX_HEAT_OUTPUT: &str = "table.max_heat_output";

    pub const CONTACT_FOR_CUSTOMIZED_MODEL: &str = "banner.contact_for_customized_model";
    pub const CONGRATULATIONS: &str = "banner.congratulations";
    pub const RECOVER_COST_MESSAGE: &str = "banner.recover_cost_message";
    pub const FEW_MONTHS: &str = "banner.few_months";
    pub const MONTHS: &str = "banner.months";

    pub const FUEL_DIESEL: &str = "fuel.diesel";
    pub const FUEL_LPG: &str = "fuel.lpg";
    pub const FUEL_PNG: &str = "fuel.png";
    pub const FUEL_LDO: &str = "fuel.ldo";
    pub const FUEL_FURNACE_OIL: &str = "fuel.furnace_oil";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_COL_MODEL: &str = "catalog.col_model";
    pub const CATALOG_COL_CAPACITY: &str = "catalog.col_capacity";
    pub const CATALOG_COL_PRICE: &str = "catalog.col_price";

    pub const COMPARISON_HEADING: &str = "comparison.heading";
    pub const COMPARISON_PELLETS: &str = "comparison.pellets";
    pub const PARAM_CALORIFIC_VALUE: &str = "comparison.param_calorific_value";
    pub const PARAM_EQUIVALENT_PELLET: &str = "comparison.param_equivalent_pellet";
    pub const PARAM_RATE: &str = "comparison.param_rate";
    pub const PARAM_COST_OF_PELLET: &str = "comparison.param_cost_of_pellet";
    pub const PARAM_SAVING_INR: &str = "comparison.param_saving_inr";
    pub const PARAM_SAVING_PERCENT: &str = "comparison.param_saving_percent";

    pub const CONTACT_HEADING: &str = "contact.heading";
    pub const CONTACT_NAME: &str = "contact.name";
    pub const CONTACT_NUMBER: &str = "contact.number";
    pub const CONTACT_EMAIL: &str = "contact.email";
    pub const CONTACT_MESSAGE: &str = "contact.message";
    pub const CONTACT_OK: &str = "contact.ok";
    pub const CONTACT_NAME_REQUIRED: &str = "contact.name_required";
    pub const CONTACT_NAME_MIN_LENGTH: &str = "contact.name_min_length";
    pub const CONTACT_NUMBER_INVALID: &str = "contact.number_invalid";
    pub const CONTACT_EMAIL_REQUIRED: &str = "contact.email_required";
    pub const CONTACT_EMAIL_INVALID: &str = "contact.email_invalid";
    pub const CONTACT_MESSAGE_REQUIRED: &str = "contact.message_required";
    pub const CONTACT_MESSAGE_MIN_LENGTH: &str = "contact.message_min_length";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_EXPORT_CSV: &str = "gui.export_csv";
    pub const GUI_EXPORT_DONE: &str = "gui.export_done";
    pub const GUI_VALIDATE: &str = "gui.validate";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Gu,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("gu") {
            Language::Gu
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Gu => "gu",
        }
    }
}

/// Provides the runtime language bundle.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Creates a translator for a language code (en/gu). Unknown codes fall back to en.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Creates a translator from a language code plus a language-pack directory
    /// (locales/ etc.). Missing directories or files leave only the built-in strings.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// Looks a key up in the language pack only. None when the pack lacks it.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// Returns the translation. Gujarati strings fall back to English.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::Gu => gu(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// Resolves the language code in CLI flag → config → system order.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-in".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "en" => Some("en".into()),
        "en-in" => Some("en-in".into()),
        "en-us" | "en-uk" => Some("en-in".into()),
        "gu" => Some("gu".into()),
        "gu-in" => Some("gu-in".into()),
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en-in".into()),
        other if other.starts_with("gu") => Some("gu-in".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" => Some("en".into()),
        "gu" => Some("gu".into()),
        _ => None,
    }
}

/// Guesses the language from the system locale.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// Loads a TOML language pack. Format: flat map of key = "value", tables allowed.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., gu-in)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., gu)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Built-in language packs (compiled in so the app works without files).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-in" | "en" => parse_toml_to_map(include_str!("../locales/en-in.toml")),
        "gu-in" | "gu" => parse_toml_to_map(include_str!("../locales/gu-in.toml")),
        _ => None,
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pellet Savings Toolbox ===",
        MAIN_MENU_CALCULATOR => "1) Fuel Savings Calculator",
        MAIN_MENU_CATALOG => "2) Burner Catalog",
        MAIN_MENU_COMPARISON => "3) Fuel Comparison Table",
        MAIN_MENU_CONTACT => "4) Inquiry Form Check",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- Fuel Savings Calculator --",
        CALC_SELECT_FUEL => "Select Your Fuel",
        CALC_CURRENT_FUEL_RATE => "Current Fuel Rate (₹)",
        CALC_FUEL_USAGE_PER_HOUR => "Fuel Usage Per Hour",
        CALC_OPERATING_HOURS_PER_DAY => "Operating Hours Per Day",
        CALC_CALCULATE => "Calculate Savings",
        CALC_OPERATING_HOURS_ERROR => "Operating hours cannot exceed 24 per day.",
        CALC_MISSING_FIELDS => {
            "Enter fuel rate, usage and operating hours to see the payback result."
        }
        CALC_NOTE_EMPTY => "Note: leave a value empty to skip it; that row shows '-'.",
        PLACEHOLDER_USAGE_LTR => "Enter usage in ltr per hour",
        PLACEHOLDER_USAGE_KG => "Enter usage in kg per hour",
        PLACEHOLDER_USAGE_SCM => "Enter usage in scm per hour",
        PLACEHOLDER_FUEL_PRICE => "Enter your fuel price",
        PLACEHOLDER_OPERATING_HOURS => "Enter hours per day (max 24)",
        TABLE_FUEL => "Fuel",
        TABLE_WOOD_PELLETS => "Wood Pellets",
        TABLE_CALORIFIC_VALUE => "Calorific Value",
        TABLE_PELLET_CALORIFIC_UNIT => "kcal/kg",
        TABLE_PELLET_USAGE_UNIT => "kg/hour",
        TABLE_FUEL_USAGE => "Fuel Usage Per Hour",
        TABLE_FUEL_COST_PER_HOUR => "Fuel Cost Per Hour",
        TABLE_SAVING_PER_HOUR => "Fuel Cost Saving Per Hour",
        TABLE_SAVING_PER_MONTH => "Fuel Cost Saving Per Month",
        TABLE_SAVING_PER_YEAR => "Fuel Cost Saving Per Year",
        TABLE_MODEL => "Model",
        TABLE_MAX_HEAT_OUTPUT => "Max Heat Output",
        CONTACT_FOR_CUSTOMIZED_MODEL => "Contact for customized model",
        CONGRATULATIONS => "Congratulations!",
        RECOVER_COST_MESSAGE => "You can recover the cost of your new pellet burner in",
        FEW_MONTHS => "a few months",
        MONTHS => "months",
        FUEL_DIESEL => "Diesel",
        FUEL_LPG => "LPG",
        FUEL_PNG => "PNG",
        FUEL_LDO => "LDO",
        FUEL_FURNACE_OIL => "Furnace Oil",
        CATALOG_HEADING => "\n-- GPB Burner Catalog --",
        CATALOG_COL_MODEL => "Model",
        CATALOG_COL_CAPACITY => "Max Capacity [kcal/hour]",
        CATALOG_COL_PRICE => "Price [₹]",
        COMPARISON_HEADING => "\n-- Wood Pellets vs Conventional Fuels --",
        COMPARISON_PELLETS => "Wood Pellets",
        PARAM_CALORIFIC_VALUE => "Calorific value [kcal]",
        PARAM_EQUIVALENT_PELLET => "Equivalent pellet consumption [kg]",
        PARAM_RATE => "Rate [₹/unit]",
        PARAM_COST_OF_PELLET => "Cost in pellet terms [₹]",
        PARAM_SAVING_INR => "Tentative saving [₹]",
        PARAM_SAVING_PERCENT => "Tentative saving [%]",
        CONTACT_HEADING => "\n-- Inquiry Form Check --",
        CONTACT_NAME => "Name",
        CONTACT_NUMBER => "Contact Number",
        CONTACT_EMAIL => "Email",
        CONTACT_MESSAGE => "Message",
        CONTACT_OK => "All fields look good.",
        CONTACT_NAME_REQUIRED => "Name is required.",
        CONTACT_NAME_MIN_LENGTH => "Name must be at least 2 characters.",
        CONTACT_NUMBER_INVALID => "Contact number must be exactly 10 digits.",
        CONTACT_EMAIL_REQUIRED => "Email is required.",
        CONTACT_EMAIL_INVALID => "Enter a valid email address.",
        CONTACT_MESSAGE_REQUIRED => "Message is required.",
        CONTACT_MESSAGE_MIN_LENGTH => "Message must be at least 10 characters.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) English  2) ગુજરાતી  3) Auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        GUI_EXPORT_CSV => "Export table as CSV",
        GUI_EXPORT_DONE => "Table exported to:",
        GUI_VALIDATE => "Check",
        _ => "[missing translation]",
    }
}

fn gu(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "ભૂલ",
        APP_EXIT => "એપ્લિકેશન બંધ થાય છે.",
        MAIN_MENU_CALCULATOR => "1) ઇંધણ બચત કેલ્ક્યુલેટર",
        MAIN_MENU_CATALOG => "2) બર્નર કેટલોગ",
        MAIN_MENU_COMPARISON => "3) ઇંધણ સરખામણી કોષ્ટક",
        MAIN_MENU_CONTACT => "4) પૂછપરછ ફોર્મ તપાસ",
        MAIN_MENU_SETTINGS => "5) સેટિંગ્સ",
        MAIN_MENU_EXIT => "0) બહાર નીકળો",
        PROMPT_MENU_SELECT => "મેનુ પસંદ કરો: ",
        INVALID_SELECTION_RETRY => "ખોટું ઇનપુટ. ફરી પ્રયાસ કરો.",
        CALC_HEADING => "\n-- ઇંધણ બચત કેલ્ક્યુલેટર --",
        CALC_SELECT_FUEL => "તમારું ઇંધણ પસંદ કરો",
        CALC_CURRENT_FUEL_RATE => "હાલનો ઇંધણ દર (₹)",
        CALC_FUEL_USAGE_PER_HOUR => "પ્રતિ કલાક ઇંધણ વપરાશ",
        CALC_OPERATING_HOURS_PER_DAY => "દરરોજ ચાલવાના કલાકો",
        CALC_CALCULATE => "બચત ગણો",
        CALC_OPERATING_HOURS_ERROR => "ચાલવાના કલાકો દિવસના 24 થી વધુ ન હોઈ શકે.",
        TABLE_FUEL => "ઇંધણ",
        TABLE_WOOD_PELLETS => "વુડ પેલેટ્સ",
        TABLE_CALORIFIC_VALUE => "કેલરી મૂલ્ય",
        TABLE_FUEL_USAGE => "પ્રતિ કલાક ઇંધણ વપરાશ",
        TABLE_FUEL_COST_PER_HOUR => "પ્રતિ કલાક ઇંધણ ખર્ચ",
        TABLE_SAVING_PER_HOUR => "પ્રતિ કલાક ઇંધણ ખર્ચ બચત",
        TABLE_SAVING_PER_MONTH => "માસિક ઇંધણ ખર્ચ બચત",
        TABLE_SAVING_PER_YEAR => "વાર્ષિક ઇંધણ ખર્ચ બચત",
        TABLE_MODEL => "મોડેલ",
        TABLE_MAX_HEAT_OUTPUT => "મહત્તમ ઉષ્મા ક્ષમતા",
        CONTACT_FOR_CUSTOMIZED_MODEL => "કસ્ટમાઇઝ્ડ મોડેલ માટે સંપર્ક કરો",
        CONGRATULATIONS => "અભિનંદન!",
        RECOVER_COST_MESSAGE => "તમે તમારા નવા પેલેટ બર્નરની કિંમત વસૂલ કરી શકશો",
        FEW_MONTHS => "થોડા મહિનામાં",
        MONTHS => "મહિનામાં",
        FUEL_DIESEL => "ડીઝલ",
        FUEL_LPG => "એલપીજી",
        FUEL_PNG => "પીએનજી",
        FUEL_LDO => "એલડીઓ",
        FUEL_FURNACE_OIL => "ફર્નેસ ઓઇલ",
        CONTACT_HEADING => "\n-- પૂછપરછ ફોર્મ તપાસ --",
        CONTACT_NAME => "નામ",
        CONTACT_NUMBER => "સંપર્ક નંબર",
        CONTACT_EMAIL => "ઇમેઇલ",
        CONTACT_MESSAGE => "સંદેશ",
        CONTACT_OK => "બધી માહિતી બરાબર છે.",
        CONTACT_NAME_REQUIRED => "નામ જરૂરી છે.",
        CONTACT_NAME_MIN_LENGTH => "નામ ઓછામાં ઓછા 2 અક્ષરનું હોવું જોઈએ.",
        CONTACT_NUMBER_INVALID => "સંપર્ક નંબર બરાબર 10 આંકડાનો હોવો જોઈએ.",
        CONTACT_EMAIL_REQUIRED => "ઇમેઇલ જરૂરી છે.",
        CONTACT_EMAIL_INVALID => "માન્ય ઇમેઇલ સરનામું દાખલ કરો.",
        CONTACT_MESSAGE_REQUIRED => "સંદેશ જરૂરી છે.",
        CONTACT_MESSAGE_MIN_LENGTH => "સંદેશ ઓછામાં ઓછા 10 અક્ષરનો હોવો જોઈએ.",
        SETTINGS_HEADING => "\n-- સેટિંગ્સ --",
        SETTINGS_CURRENT_LANGUAGE => "હાલની ભાષા:",
        SETTINGS_SAVED => "ભાષા બદલાઈ:",
        _ => return None,
    })
}
