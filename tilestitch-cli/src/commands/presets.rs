//! Presets command - list the built-in tile servers.

use tilestitch::config::ConfigFile;
use tilestitch::provider::UrlPreset;

use crate::error::CliError;

/// Run the presets command.
pub fn run() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let selected = (!config.source.use_custom_url).then_some(config.source.preset);

    println!("Tile server presets");
    println!("===================");
    for preset in UrlPreset::ALL {
        let marker = if selected == Some(preset) { "*" } else { " " };
        println!("{} {:<18} {}", marker, preset.name(), preset.label());
        println!("    {}", preset.template_str());
    }

    if config.source.use_custom_url {
        println!();
        println!("Custom URL in use: {}", config.source.custom_url);
    }

    Ok(())
}
