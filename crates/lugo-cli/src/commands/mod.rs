use std::path::Path;

use anyhow::Result;
use lugo_strategy::BotSettings;

pub mod formation;
pub mod replay;

fn load_settings(path: &Path) -> Result<BotSettings> {
    let settings = BotSettings::load_or_insert(path)?;
    log::debug!("Loaded bot settings from {}", path.display());
    Ok(settings)
}
