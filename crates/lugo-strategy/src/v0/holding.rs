use anyhow::{Context, Result};
use lugo_core::{Order, Player, SnapshotInspector};

use super::{
    utils::{equal_region, goal_corner, is_near, nearest_ally, nearest_opponent},
    TurnPolicy,
};
use crate::ExpectedPosition;

/// This player holds the ball.
///
/// In order of priority:
/// 1. close enough to the goal: shoot at the post the goalkeeper is not covering
/// 2. an opponent blocks the region in front: pass to the nearest teammate
/// 3. otherwise dribble towards the goal
pub(super) fn on_holding<P: ExpectedPosition>(
    policy: &TurnPolicy<P>,
    inspector: &SnapshotInspector<'_>,
) -> Result<Vec<Order>> {
    let ctx = policy.context();
    let mapper = ctx.mapper();
    let me = inspector.me();

    let goal = mapper.attack_goal();
    let goal_region = mapper.get_region_from_point(&goal.center);
    let my_region = mapper.get_region_from_point(&me.position);

    if is_near(&my_region, &goal_region, ctx.settings().shoot_distance) {
        let corner = goal_corner(&goal, inspector.opponent_goalkeeper());
        log::debug!("Player {} shoots from region {}", me.number, my_region);
        let kick = inspector
            .make_order_kick_max_speed(&corner)
            .context("Failed to aim at the goal")?;
        return Ok(vec![kick]);
    }

    if let Some(ally) = pass_target(policy, inspector) {
        log::debug!("Player {} passes to {}", me.number, ally.number);
        let kick = inspector
            .make_order_kick_max_speed(&ally.position)
            .context("Failed to pass")?;
        return Ok(vec![kick]);
    }

    Ok(vec![inspector.make_order_move_max_speed(&goal.center)?])
}

/// The nearest teammate, if the nearest opponent stands in the region in front of me.
fn pass_target<'a, P: ExpectedPosition>(
    policy: &TurnPolicy<P>,
    inspector: &SnapshotInspector<'a>,
) -> Option<&'a Player> {
    let mapper = policy.context().mapper();
    let me = inspector.me();
    let opponent = nearest_opponent(me, inspector.opponent_players())?;

    let front = mapper.get_region_from_point(&me.position).front();
    let opponent_region = mapper.get_region_from_point(&opponent.position);
    if !equal_region(&opponent_region, &front) {
        return None;
    }
    nearest_ally(me, inspector.my_team_players())
}
