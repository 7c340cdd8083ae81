use clap::Parser;
use pellet_savings_toolbox::{app, config, i18n};

/// Fuel savings calculator and GPB burner catalog, CLI edition.
#[derive(Parser, Debug)]
#[command(name = "pellet_savings_toolbox_cli", version)]
struct Cli {
    /// Language: auto, en, en-in, gu, gu-in
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
}

fn main() {
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
