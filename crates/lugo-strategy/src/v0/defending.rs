use anyhow::Result;
use lugo_core::{Order, SnapshotInspector};

use super::{utils::hold_position, TurnPolicy};
use crate::ExpectedPosition;

/// An opponent holds the ball: press it if few teammates are closer, otherwise fall
/// back to the formation. A player already on its spot stops there.
pub(super) fn on_defending<P: ExpectedPosition>(
    policy: &TurnPolicy<P>,
    inspector: &SnapshotInspector<'_>,
) -> Result<Vec<Order>> {
    let me = inspector.me();
    let ball = inspector.ball().position;
    let expected = policy.expected_position(inspector)?;

    if hold_position(&me.position, &expected, policy.context().settings().player_size) {
        return Ok(vec![inspector.make_order_move_to_stop()]);
    }

    let target = if policy.should_help(inspector, &ball) {
        log::debug!("Player {} presses the ball holder", me.number);
        ball
    } else {
        expected
    };

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
    fn test_stops_on_expected_position() {
        let snapshot = snapshot(
            vec![player(5, TeamSide::Home, 4000.0, 4000.0)],
            vec![player(9, TeamSide::Away, 8000.0, 4000.0)],
            Point::new(8000.0, 4000.0),
        );
        let orders = policy(5, Point::new(4100.0, 4100.0))
            .on_defending(&inspector(&snapshot, 5))
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert!(orders[0].is_stop());
    }

    #[test]
    fn test_moves_when_away_from_expected_position() {
        let mut settings = crate::BotSettings::default();
        settings.player_size = 30.0;
        // distance(me, expected) = 100, far more than a body length of 30
        let snapshot = snapshot(
            vec![player(5, TeamSide::Home, 500.0, 400.0)],
            vec![],
            Point::new(500.0, 500.0),
        );
        let orders = policy_with(5, settings, Point::new(500.0, 300.0))
            .on_defending(&inspector(&snapshot, 5))
            .unwrap();

        assert_eq!(orders.len(), 2);
        assert!(orders[0].is_move() && !orders[0].is_stop());
        // Nobody is closer to the ball, so it goes for it
        assert_eq!(orders[0].velocity().unwrap().direction, Point::new(0.0, 1.0));
        assert_eq!(orders[1], Order::Catch);
    }

    #[test]
    fn test_falls_back_when_others_press() {
        let mut settings = crate::BotSettings::default();
        settings.max_helpers = 1;
        settings.player_size = 30.0;
        let snapshot = snapshot(
            vec![
                player(5, TeamSide::Home, 500.0, 400.0),
                player(6, TeamSide::Home, 500.0, 450.0),
            ],
            vec![],
            Point::new(500.0, 500.0),
        );
        let orders = policy_with(5, settings, Point::new(500.0, 300.0))
            .on_defending(&inspector(&snapshot, 5))
            .unwrap();

        assert_eq!(orders[0].velocity().unwrap().direction, Point::new(0.0, -1.0));
        assert_eq!(orders[1], Order::Catch);
    }
}
