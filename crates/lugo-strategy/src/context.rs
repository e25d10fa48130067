use anyhow::{anyhow, Result};
use lugo_core::{Mapper, PlayerNumber, TeamSide};

use crate::BotSettings;

/// Everything a player knows about itself for the whole match. Built once and never
/// changed.
#[derive(Clone, Debug)]
pub struct PlayerContext {
    number: PlayerNumber,
    side: TeamSide,
    mapper: Mapper,
    settings: BotSettings,
}

impl PlayerContext {
    pub fn new(number: u32, side: TeamSide, settings: BotSettings) -> Result<Self> {
        let number =
            PlayerNumber::new(number).ok_or_else(|| anyhow!("Invalid player number: {}", number))?;
        let mapper = settings.mapper(side)?;
        Ok(Self {
            number,
            side,
            mapper,
            settings,
        })
    }

    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    pub fn settings(&self) -> &BotSettings {
        &self.settings
    }
}
