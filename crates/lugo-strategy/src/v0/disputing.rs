use anyhow::Result;
use lugo_core::{Order, SnapshotInspector};

use super::TurnPolicy;
use crate::ExpectedPosition;

/// Nobody holds the ball: go for it unless enough teammates are closer, otherwise
/// keep the formation. Always try to catch.
pub(super) fn on_disputing<P: ExpectedPosition>(
    policy: &TurnPolicy<P>,
    inspector: &SnapshotInspector<'_>,
) -> Result<Vec<Order>> {
    let ball = inspector.ball().position;
    let mut target = policy.expected_position(inspector)?;
    if policy.should_help(inspector, &ball) {
        log::debug!("Player {} goes for the loose ball", inspector.me().number);
        target = ball;
    }

    Ok(vec![
        inspector.make_order_move_max_speed(&target)?,
        inspector.make_order_catch(),
    ])
}

#[cfg(test)]
mod tests {
    use lugo_core::{runtime::Bot, Order, Point, TeamSide};

    use crate::v0::testing::*;

    #[test]
    fn test_goes_for_the_ball() {
        let snapshot = snapshot(
            vec![player(5, TeamSide::Home, 1000.0, 1000.0)],
            vec![],
            Point::new(1000.0, 2000.0),
        );
        let orders = policy(5, Point::new(5000.0, 5000.0))
            .on_disputing(&inspector(&snapshot, 5))
            .unwrap();

        assert_eq!(orders.len(), 2);
        let velocity = orders[0].velocity().unwrap();
        assert!(orders[0].is_move());
        assert_eq!(velocity.direction, Point::new(0.0, 1.0));
        assert_eq!(orders[1], Order::Catch);
    }

    #[test]
    fn test_keeps_formation_when_others_are_closer() {
        let ball = Point::new(1000.0, 2000.0);
        let snapshot = snapshot(
            vec![
                player(5, TeamSide::Home, 1000.0, 9000.0),
                player(6, TeamSide::Home, 1000.0, 2100.0),
                player(7, TeamSide::Home, 1000.0, 1900.0),
                player(8, TeamSide::Home, 1100.0, 2000.0),
            ],
            vec![],
            ball,
        );
        let orders = policy(5, Point::new(3000.0, 9000.0))
            .on_disputing(&inspector(&snapshot, 5))
            .unwrap();

        // Towards the expected position, i.e. straight forward
        assert_eq!(orders[0].velocity().unwrap().direction, Point::new(1.0, 0.0));
        assert_eq!(orders[1], Order::Catch);
    }
}
