use thiserror::Error;

use crate::{
    normalize,
    specs::{BALL_MAX_SPEED, PLAYER_MAX_SPEED},
    Ball, Direction, GameSnapshot, Order, OrderError, Player, PlayerNumber, Point, Team,
    TeamSide, Vector, Velocity,
};

#[derive(Debug, Error, PartialEq)]
pub enum InspectorError {
    #[error("Player {number} of the {side} team is not in the snapshot")]
    PlayerNotFound { side: TeamSide, number: PlayerNumber },
}

/// A read-only view of a [`GameSnapshot`] from the point of view of one player.
///
/// The inspector only lives for one turn. Besides accessors for the snapshot, it
/// offers factories for the orders the player can send.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotInspector<'a> {
    snapshot: &'a GameSnapshot,
    side: TeamSide,
    me: &'a Player,
}

impl<'a> SnapshotInspector<'a> {
    pub fn new(
        snapshot: &'a GameSnapshot,
        side: TeamSide,
        number: PlayerNumber,
    ) -> Result<Self, InspectorError> {
        let me = snapshot
            .get_player(side, number)
            .ok_or(InspectorError::PlayerNotFound { side, number })?;
        Ok(Self { snapshot, side, me })
    }

    pub fn snapshot(&self) -> &'a GameSnapshot {
        self.snapshot
    }

    pub fn turn(&self) -> u32 {
        self.snapshot.turn
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    pub fn me(&self) -> &'a Player {
        self.me
    }

    pub fn ball(&self) -> &'a Ball {
        &self.snapshot.ball
    }

    pub fn ball_holder(&self) -> Option<&'a Player> {
        self.snapshot.ball_holder()
    }

    pub fn my_team(&self) -> &'a Team {
        self.snapshot.team(self.side)
    }

    /// All players of my team, including me.
    pub fn my_team_players(&self) -> &'a [Player] {
        &self.my_team().players
    }

    pub fn opponent_team(&self) -> &'a Team {
        self.snapshot.team(self.side.opposite())
    }

    pub fn opponent_players(&self) -> &'a [Player] {
        &self.opponent_team().players
    }

    pub fn my_goalkeeper(&self) -> Option<&'a Player> {
        self.my_team().get_player(PlayerNumber::GOALKEEPER)
    }

    pub fn opponent_goalkeeper(&self) -> Option<&'a Player> {
        self.opponent_team().get_player(PlayerNumber::GOALKEEPER)
    }

    /// Move towards `target` as fast as possible.
    pub fn make_order_move_max_speed(&self, target: &Point) -> Result<Order, OrderError> {
        self.make_order_move(target, PLAYER_MAX_SPEED)
    }

    /// Move towards `target`. A player already standing on `target` stops.
    pub fn make_order_move(&self, target: &Point, speed: f64) -> Result<Order, OrderError> {
        match Velocity::towards(&self.me.position, target, speed) {
            Ok(velocity) => Ok(Order::Move { velocity }),
            Err(OrderError::ZeroVector) => Ok(self.make_order_move_to_stop()),
            Err(err) => Err(err),
        }
    }

    /// Move in a direction relative to the side my team attacks.
    pub fn make_order_move_by_direction(
        &self,
        direction: Direction,
        speed: f64,
    ) -> Result<Order, OrderError> {
        self.make_order_move_from_vector(&direction.to_vector(self.side), speed)
    }

    pub fn make_order_move_from_vector(
        &self,
        vector: &Vector,
        speed: f64,
    ) -> Result<Order, OrderError> {
        Ok(Order::Move {
            velocity: Velocity::new(vector, speed)?,
        })
    }

    /// Stop moving. The current heading is kept; a player at rest faces forward.
    pub fn make_order_move_to_stop(&self) -> Order {
        let direction = normalize(&self.me.velocity.direction).unwrap_or_else(|| self.side.forward());
        Order::Move {
            velocity: Velocity {
                direction,
                speed: 0.0,
            },
        }
    }

    /// Kick the ball towards `target` as strong as possible.
    pub fn make_order_kick_max_speed(&self, target: &Point) -> Result<Order, OrderError> {
        self.make_order_kick(target, BALL_MAX_SPEED)
    }

    pub fn make_order_kick(&self, target: &Point, speed: f64) -> Result<Order, OrderError> {
        Ok(Order::Kick {
            velocity: Velocity::towards(&self.ball().position, target, speed)?,
        })
    }

    pub fn make_order_catch(&self) -> Order {
        Order::Catch
    }
}
