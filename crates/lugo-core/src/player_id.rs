use serde::{Deserialize, Serialize};

use crate::specs::{GOALKEEPER_NUMBER, MAX_PLAYERS};

/// A player's shirt number, `1..=11`. Number `1` is always the goalkeeper.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlayerNumber(u32);

impl PlayerNumber {
    pub const GOALKEEPER: PlayerNumber = PlayerNumber(GOALKEEPER_NUMBER);

    /// Returns `None` if `number` is not a valid shirt number.
    pub fn new(number: u32) -> Option<Self> {
        (1..=MAX_PLAYERS).contains(&number).then_some(Self(number))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == Self::GOALKEEPER
    }
}

impl TryFrom<u32> for PlayerNumber {
    type Error = String;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("invalid player number: {}", number))
    }
}

impl From<PlayerNumber> for u32 {
    fn from(number: PlayerNumber) -> Self {
        number.0
    }
}

impl std::fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
