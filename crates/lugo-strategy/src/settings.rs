use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use lugo_core::{specs::PLAYER_SIZE, Mapper, TeamSide};
use serde::{Deserialize, Serialize};

use crate::Formation;

/// Tunable parameters of the turn policy.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BotSettings {
    /// Number of columns of the field grid.
    pub mapper_cols: u32,
    /// Number of rows of the field grid.
    pub mapper_rows: u32,
    /// How many teammates may chase the same target before the rest stay in formation.
    pub max_helpers: usize,
    /// Distance to the goal region, in regions, from which the ball holder shoots.
    pub shoot_distance: u32,
    /// Body length used when checking whether a player already stands somewhere.
    pub player_size: f64,
    /// Supporters closer than this many body lengths to the ball holder stop moving.
    pub support_distance_factor: f64,
    pub formation: Formation,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            mapper_cols: 10,
            mapper_rows: 6,
            max_helpers: 3,
            shoot_distance: 2,
            player_size: PLAYER_SIZE,
            support_distance_factor: 3.0,
            formation: Formation::default(),
        }
    }
}

impl BotSettings {
    /// Load the settings from a file, or store the default settings if the file does not
    /// exist. A file that cannot be parsed is left untouched and the defaults are used.
    pub fn load_or_insert(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => Ok(settings),
                Err(err) => {
                    log::error!("Failed to parse bot settings {}: {}", path.display(), err);
                    Ok(Self::default())
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                settings.store(path)?;
                log::info!("Wrote default bot settings to {}", path.display());
                Ok(settings)
            }
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read bot settings {}", path.display()))
            }
        }
    }

    /// Store the settings in the given file.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write bot settings {}", path.display()))
    }

    /// Checks the body measures. Both must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.player_size.is_finite() && self.player_size > 0.0) {
            bail!("Invalid player size: {}", self.player_size);
        }
        if !(self.support_distance_factor.is_finite() && self.support_distance_factor > 0.0) {
            bail!(
                "Invalid support distance factor: {}",
                self.support_distance_factor
            );
        }
        Ok(())
    }

    /// Builds the mapper for `side` after validating the settings, and checks the
    /// formation against it.
    pub fn mapper(&self, side: TeamSide) -> Result<Mapper> {
        self.validate()?;
        let mapper = Mapper::new(self.mapper_cols, self.mapper_rows, side)
            .context("Invalid mapper dimensions")?;
        self.formation.validate(&mapper)?;
        Ok(mapper)
    }
}
