//! Formatting named-argument messages with an engine that only knows positions.
//!
//! Reads `.msgfmt/config.yaml` from the current directory (or the file named
//! by `MSGFMT_CONFIG_PATH`) plus `MSGFMT_*` overrides, then formats a few
//! messages both ways.

use msgfmt_common_config::{apply_overrides, vars, ConfigLoader, Environment};
use msgfmt_common_log::{info, timed, LogConfig};
use msgfmt_i18n::{args, replace_named_arguments, MessageFormatter, PositionalEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _env = Environment::init()?;
    msgfmt_common_log::init(LogConfig::from_env())?;

    let loader = ConfigLoader::new(".");
    let mut config = match Environment::get(vars::MSGFMT_CONFIG_PATH) {
        Some(path) => loader.load_file(path)?,
        None => loader.load()?,
    };
    apply_overrides(&mut config)?;
    info!(locale = %config.locale, rewrite = ?config.engine.rewrite, "configuration loaded");

    let pattern = "{user} added {photos, plural, =0{no photos} one{a photo} other{# photos}} \
                   to {gender, select, female{her} male{his} other{their}} album.";
    let formatter = MessageFormatter::from_config(PositionalEngine::new(), &config, pattern)?;

    let args = args!(user = "Kim", photos = 3, gender = "female");
    println!("pattern:   {}", formatter.pattern());
    println!("rewritten: {}", replace_named_arguments(pattern, &args));

    let text = timed!("format", formatter.format(&args))?;
    println!("formatted: {text}");

    for photos in [0, 1, 12_000] {
        let args = args!(user = "Ann", photos = photos, gender = "male");
        println!("{photos:>6} -> {}", formatter.format(&args)?);
    }

    // An engine with native named support formats the same text unchanged.
    let native = MessageFormatter::new(
        PositionalEngine::with_named_arguments(),
        formatter.locale().clone(),
        pattern,
    );
    println!("native:    {}", native.format(&args)?);

    Ok(())
}
