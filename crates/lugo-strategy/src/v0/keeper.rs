use anyhow::Result;
use lugo_core::{
    specs::{FIELD_WIDTH, MAX_Y_COORDINATE},
    Order, PlayerState, Point, SnapshotInspector,
};

use super::TurnPolicy;
use crate::ExpectedPosition;

/// Where the goalkeeper clears the ball to: the top touch line at midfield.
fn clearance_target() -> Point {
    Point::new(FIELD_WIDTH / 2.0, MAX_Y_COORDINATE)
}

pub(super) fn as_goalkeeper<P: ExpectedPosition>(
    policy: &TurnPolicy<P>,
    inspector: &SnapshotInspector<'_>,
    state: PlayerState,
) -> Result<Vec<Order>> {
    let target = match state {
        PlayerState::HoldingTheBall => {
            return Ok(vec![inspector.make_order_kick_max_speed(&clearance_target())?]);
        }
        PlayerState::DisputingTheBall => inspector.ball().position,
        PlayerState::Defending | PlayerState::Supporting => {
            policy.context().mapper().attack_goal().center
        }
    };

    Ok(vec![
        inspector.make_order_move_max_speed(&target)?,
        inspector.make_order_catch(),
    ])
}
