use anyhow::Result;
use lugo_core::{distance_between_points, Order, SnapshotInspector};

use super::{utils::hold_position, TurnPolicy};
use crate::ExpectedPosition;

/// A teammate holds the ball: stay close enough to receive a pass without crowding
/// the holder.
pub(super) fn on_supporting<P: ExpectedPosition>(
    policy: &TurnPolicy<P>,
    inspector: &SnapshotInspector<'_>,
) -> Result<Vec<Order>> {
    let settings = policy.context().settings();
    let me = inspector.me();
    let ball = inspector.ball().position;
    let holder = inspector.ball_holder().map_or(ball, |p| p.position);
    let expected = policy.expected_position(inspector)?;

    let support_distance = settings.support_distance_factor * settings.player_size;
    if distance_between_points(&me.position, &holder) < support_distance
        || hold_position(&me.position, &expected, settings.player_size)
    {
        return Ok(vec![inspector.make_order_move_to_stop()]);
    }

    let target = if policy.should_help(inspector, &ball) {
        ball
    } else {
        expected
    };
    Ok(vec![inspector.make_order_move_max_speed(&target)?])
}

#[cfg(test)]
mod tests {
    use lugo_core::{runtime::Bot, Point, TeamSide};

    use crate::v0::testing::*;
    use crate::BotSettings;

    #[test]
    fn test_stops_next_to_the_holder() {
        let holder = player(7, TeamSide::Home, 5000.0, 5000.0);
        let mut snapshot = snapshot(
            vec![player(5, TeamSide::Home, 5000.0, 6000.0), holder.clone()],
            vec![],
            holder.position,
        );
        snapshot.ball.holder = Some(holder);

        // 1000 < 3 * 400
        let orders = policy(5, Point::new(15000.0, 1000.0))
            .on_supporting(&inspector(&snapshot, 5))
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders[0].is_stop());
    }

    #[test]
    fn test_stops_on_expected_position() {
        let holder = player(7, TeamSide::Home, 15000.0, 5000.0);
        let mut snapshot = snapshot(
            vec![player(5, TeamSide::Home, 3000.0, 3000.0), holder.clone()],
            vec![],
            holder.position,
        );
        snapshot.ball.holder = Some(holder);

        let orders = policy(5, Point::new(3000.0, 3100.0))
            .on_supporting(&inspector(&snapshot, 5))
            .unwrap();
        assert!(orders[0].is_stop());
    }

    #[test]
    fn test_moves_to_expected_position() {
        let holder = player(7, TeamSide::Home, 15000.0, 5000.0);
        let mut snapshot = snapshot(
            vec![player(5, TeamSide::Home, 3000.0, 3000.0), holder.clone()],
            vec![],
            holder.position,
        );
        snapshot.ball.holder = Some(holder);

        // The holder is closer to the ball than me
        let settings = BotSettings {
            max_helpers: 1,
            ..Default::default()
        };
        let orders = policy_with(5, settings, Point::new(3000.0, 1000.0))
            .on_supporting(&inspector(&snapshot, 5))
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders[0].is_move() && !orders[0].is_stop());
        assert_eq!(orders[0].velocity().unwrap().direction, Point::new(0.0, -1.0));
    }

    #[test]
    fn test_moves_to_the_ball_when_allowed() {
        let holder = player(7, TeamSide::Home, 15000.0, 5000.0);
        let mut snapshot = snapshot(
            vec![player(5, TeamSide::Home, 3000.0, 5000.0), holder.clone()],
            vec![],
            holder.position,
        );
        snapshot.ball.holder = Some(holder);

        let orders = policy(5, Point::new(3000.0, 1000.0))
            .on_supporting(&inspector(&snapshot, 5))
            .unwrap();
        assert_eq!(orders[0].velocity().unwrap().direction, Point::new(1.0, 0.0));
    }
}
