//! Pure predicates and lookups shared by the turn handlers.

use lugo_core::{distance_between_points, specs::FIELD_WIDTH, Goal, Player, Point, Region};

/// Whether `me` should go for `target`, given that at most `max_players` teammates
/// are allowed to converge on it.
///
/// Counts teammates (excluding `me`) that are strictly closer to the target. Players
/// at the same distance do not count.
pub fn should_help(me: &Player, team: &[Player], target: &Point, max_players: usize) -> bool {
    let my_distance = distance_between_points(&me.position, target);
    let mut closer = 0;
    for mate in team.iter().filter(|p| p.number != me.number) {
        if distance_between_points(&mate.position, target) < my_distance {
            closer += 1;
            if closer >= max_players {
                return false;
            }
        }
    }
    true
}

/// The teammate closest to `me`. Never returns `me`.
pub fn nearest_ally<'a>(me: &Player, team: &'a [Player]) -> Option<&'a Player> {
    nearest_to(me, team.iter().filter(|p| p.number != me.number))
}

/// The opponent closest to `me`.
pub fn nearest_opponent<'a>(me: &Player, opponents: &'a [Player]) -> Option<&'a Player> {
    nearest_to(me, opponents.iter())
}

/// Only players closer than a field width are considered.
fn nearest_to<'a>(me: &Player, candidates: impl Iterator<Item = &'a Player>) -> Option<&'a Player> {
    let mut nearest = None;
    let mut nearest_distance = FIELD_WIDTH;
    for candidate in candidates {
        let distance = distance_between_points(&me.position, &candidate.position);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = Some(candidate);
        }
    }
    nearest
}

/// Both the row and the column distance are at most `max_distance`.
pub fn is_near(a: &Region, b: &Region, max_distance: u32) -> bool {
    a.row().abs_diff(b.row()) <= max_distance && a.col().abs_diff(b.col()) <= max_distance
}

pub fn equal_region(a: &Region, b: &Region) -> bool {
    a.col() == b.col() && a.row() == b.row()
}

/// Whether a player at `me` is already standing on `expected`.
pub fn hold_position(me: &Point, expected: &Point, player_size: f64) -> bool {
    distance_between_points(me, expected) < player_size
}

/// The goal post the goalkeeper is not covering. Without a goalkeeper the top post
/// is used.
pub fn goal_corner(goal: &Goal, goalkeeper: Option<&Player>) -> Point {
    match goalkeeper {
        Some(keeper) if keeper.position.y >= goal.center.y => goal.bottom_pole,
        _ => goal.top_pole,
    }
}
