use serde::{Deserialize, Serialize};

use crate::{PlayerNumber, Point, TeamSide, Velocity};

/// The phase of the match, as reported by the game server.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Waiting for all players to connect
    #[default]
    Waiting,
    /// Players are being placed for a kick-off
    GetReady,
    /// The server is collecting orders for the current turn
    Listening,
    /// The server is applying the orders of the current turn
    Playing,
    /// The ball possession is being shifted after a goal or an infringement
    Shifting,
    Over,
}

/// A struct to store the player state from a single snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    /// The player's shirt number, unique within its team
    pub number: PlayerNumber,
    /// Absolute position of the player
    pub position: Point,
    /// Velocity applied in the last turn
    #[serde(default)]
    pub velocity: Velocity,
    pub team_side: TeamSide,
}

/// A struct to store the ball state from a single snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ball {
    pub position: Point,
    #[serde(default)]
    pub velocity: Velocity,
    /// The player currently holding the ball, if any
    #[serde(default)]
    pub holder: Option<Player>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Team {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: u32,
    pub side: TeamSide,
    pub players: Vec<Player>,
}

impl Team {
    pub fn get_player(&self, number: PlayerNumber) -> Option<&Player> {
        self.players.iter().find(|p| p.number == number)
    }
}

/// A read-only picture of the match at the beginning of a turn.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub turn: u32,
    pub home_team: Team,
    pub away_team: Team,
    pub ball: Ball,
}

impl GameSnapshot {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    pub fn get_player(&self, side: TeamSide, number: PlayerNumber) -> Option<&Player> {
        self.team(side).get_player(number)
    }

    pub fn ball_holder(&self) -> Option<&Player> {
        self.ball.holder.as_ref()
    }
}
