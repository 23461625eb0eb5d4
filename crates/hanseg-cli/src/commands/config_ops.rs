use std::fs;

use hanseg::settings;

/// Load a custom settings file before any command touches the settings.
pub fn load_config(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let dict = s
        .dictionary
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<embedded>".to_string());
    println!("OK: dictionary.path={dict}, cli.delimiter={:?}", s.cli.delimiter);
}
