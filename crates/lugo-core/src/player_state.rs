use serde::{Deserialize, Serialize};

use crate::{GameSnapshot, PlayerNumber, TeamSide};

/// The tactical situation of a player with respect to the ball.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// A teammate holds the ball
    Supporting,
    /// The player itself holds the ball
    HoldingTheBall,
    /// An opponent holds the ball
    Defending,
    /// Nobody holds the ball
    DisputingTheBall,
}

impl PlayerState {
    /// Classifies the situation of player `number` of `side`.
    pub fn define(snapshot: &GameSnapshot, side: TeamSide, number: PlayerNumber) -> Self {
        match snapshot.ball_holder() {
            None => PlayerState::DisputingTheBall,
            Some(holder) if holder.team_side != side => PlayerState::Defending,
            Some(holder) if holder.number == number => PlayerState::HoldingTheBall,
            Some(_) => PlayerState::Supporting,
        }
    }
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerState::Supporting => write!(f, "supporting"),
            PlayerState::HoldingTheBall => write!(f, "holding"),
            PlayerState::Defending => write!(f, "defending"),
            PlayerState::DisputingTheBall => write!(f, "disputing"),
        }
    }
}
