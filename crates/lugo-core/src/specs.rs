//! Fixed dimensions and limits of the Lugo field.
//!
//! All distances are in field units. The origin is the bottom-left corner of the
//! field as seen from the home team, with `+x` pointing to the away goal.

use crate::Point;

/// Distance between the two goal lines.
pub const FIELD_WIDTH: f64 = 20000.0;
/// Distance between the two touch lines.
pub const FIELD_HEIGHT: f64 = 10000.0;

pub const MAX_X_COORDINATE: f64 = FIELD_WIDTH;
pub const MAX_Y_COORDINATE: f64 = FIELD_HEIGHT;

/// Diameter of a player's body.
pub const PLAYER_SIZE: f64 = 400.0;
pub const BALL_SIZE: f64 = 100.0;

/// Maximum distance a player covers in one turn.
pub const PLAYER_MAX_SPEED: f64 = 100.0;
/// Maximum distance the ball covers in one turn right after a kick.
pub const BALL_MAX_SPEED: f64 = 400.0;

/// Distance between the inner edges of the goal posts.
pub const GOAL_WIDTH: f64 = 3000.0;
pub const GOAL_MIN_Y: f64 = (FIELD_HEIGHT - GOAL_WIDTH) / 2.0;
pub const GOAL_MAX_Y: f64 = GOAL_MIN_Y + GOAL_WIDTH;

pub const MAX_PLAYERS: u32 = 11;
pub const GOALKEEPER_NUMBER: u32 = 1;

/// The center spot.
pub fn field_center() -> Point {
    Point::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
}
