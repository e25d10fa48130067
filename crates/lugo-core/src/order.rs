use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{normalize, Point, Vector};

#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Cannot derive a direction from a zero-length vector")]
    ZeroVector,
    #[error("Invalid speed: {0}")]
    InvalidSpeed(f64),
}

/// A unit direction and a speed, in field units per turn.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub direction: Vector,
    pub speed: f64,
}

impl Velocity {
    /// Builds a velocity along `vector`. The vector does not need to be normalized.
    pub fn new(vector: &Vector, speed: f64) -> Result<Self, OrderError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(OrderError::InvalidSpeed(speed));
        }
        let direction = normalize(vector).ok_or(OrderError::ZeroVector)?;
        Ok(Self { direction, speed })
    }

    pub fn towards(origin: &Point, target: &Point, speed: f64) -> Result<Self, OrderError> {
        Self::new(&(target - origin), speed)
    }

    pub fn is_stopped(&self) -> bool {
        self.speed == 0.0
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self {
            direction: Vector::zeros(),
            speed: 0.0,
        }
    }
}

/// An order for the player who sends it. Orders are applied by the game server at the
/// end of the turn.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Order {
    /// Move the player
    Move { velocity: Velocity },
    /// Kick the ball, only effective while holding it
    Kick { velocity: Velocity },
    /// Try to catch the ball if it is within reach
    Catch,
}

impl Order {
    pub fn is_move(&self) -> bool {
        matches!(self, Order::Move { .. })
    }

    pub fn is_kick(&self) -> bool {
        matches!(self, Order::Kick { .. })
    }

    /// A move order with zero speed.
    pub fn is_stop(&self) -> bool {
        matches!(self, Order::Move { velocity } if velocity.is_stopped())
    }

    pub fn velocity(&self) -> Option<&Velocity> {
        match self {
            Order::Move { velocity } | Order::Kick { velocity } => Some(velocity),
            Order::Catch => None,
        }
    }
}

/// The orders a player sends for one turn.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderSet {
    pub turn: u32,
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub debug_message: String,
}

impl OrderSet {
    pub fn new(turn: u32, orders: Vec<Order>) -> Self {
        Self {
            turn,
            orders,
            debug_message: String::new(),
        }
    }

    pub fn with_debug_message(mut self, msg: impl Into<String>) -> Self {
        self.debug_message = msg.into();
        self
    }
}
