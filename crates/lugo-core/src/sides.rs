use serde::{Deserialize, Serialize};

use crate::Vector;

/// # Team-relative directions
///
/// Lugo uses a single absolute coordinate system for both teams. The home team
/// defends the goal at `x = 0` and attacks towards `+x`; the away team is mirrored
/// and attacks towards `-x`.
///
/// Strategy code usually reasons in team-relative terms ("forward", "left"), so this
/// module maps those onto absolute vectors:
///
/// - **forward**: towards the goal the team attacks
/// - **left**: left-hand side when facing forward (`+y` for home, `-y` for away)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// `1.0` if the team attacks towards `+x`, `-1.0` otherwise.
    pub fn attacking_direction_sign(&self) -> f64 {
        match self {
            TeamSide::Home => 1.0,
            TeamSide::Away => -1.0,
        }
    }

    /// Absolute unit vector pointing towards the attacked goal.
    pub fn forward(&self) -> Vector {
        Vector::new(self.attacking_direction_sign(), 0.0)
    }

    /// Absolute unit vector pointing to the team's left.
    pub fn left(&self) -> Vector {
        Vector::new(0.0, self.attacking_direction_sign())
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Home => write!(f, "home"),
            TeamSide::Away => write!(f, "away"),
        }
    }
}

/// A movement direction relative to the attacking side of a team.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    ForwardLeft,
    ForwardRight,
    BackwardLeft,
    BackwardRight,
}

impl Direction {
    /// Resolves the direction into an absolute unit vector for the given side.
    pub fn to_vector(&self, side: TeamSide) -> Vector {
        let forward = side.forward();
        let left = side.left();
        let v = match self {
            Direction::Forward => forward,
            Direction::Backward => -forward,
            Direction::Left => left,
            Direction::Right => -left,
            Direction::ForwardLeft => forward + left,
            Direction::ForwardRight => forward - left,
            Direction::BackwardLeft => -forward + left,
            Direction::BackwardRight => -forward - left,
        };
        v.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_opposite() {
        assert_eq!(TeamSide::Home.opposite(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opposite(), TeamSide::Home);
    }

    #[test]
    fn test_directions_are_mirrored() {
        let home = Direction::ForwardLeft.to_vector(TeamSide::Home);
        let away = Direction::ForwardLeft.to_vector(TeamSide::Away);
        assert_relative_eq!(home.x, -away.x);
        assert_relative_eq!(home.y, -away.y);
        assert_relative_eq!(home.norm(), 1.0, epsilon = 1e-12);

        let fwd = Direction::Forward.to_vector(TeamSide::Away);
        assert_relative_eq!(fwd.x, -1.0);
        assert_relative_eq!(fwd.y, 0.0);
    }
}
