use anyhow::Result;
use lugo_core::{runtime::Bot, Order, PlayerState, Point, SnapshotInspector};

use crate::{ExpectedPosition, Formation, PlayerContext};

pub mod utils;

mod defending;
mod disputing;
mod holding;
mod keeper;
mod supporting;

/// The turn policy: one stateless handler per [`PlayerState`].
///
/// `P` decides where the player stands when it is not going for the ball. It
/// defaults to the formation from the bot settings.
pub struct TurnPolicy<P = Formation> {
    ctx: PlayerContext,
    positions: P,
}

impl TurnPolicy<Formation> {
    pub fn new(ctx: PlayerContext) -> Self {
        let positions = ctx.settings().formation.clone();
        Self { ctx, positions }
    }
}

impl<P: ExpectedPosition> TurnPolicy<P> {
    pub fn with_positions(ctx: PlayerContext, positions: P) -> Self {
        Self { ctx, positions }
    }

    pub fn context(&self) -> &PlayerContext {
        &self.ctx
    }

    fn expected_position(&self, inspector: &SnapshotInspector<'_>) -> Result<Point> {
        self.positions
            .expected_position(inspector, self.ctx.mapper(), self.ctx.number())
    }

    fn should_help(&self, inspector: &SnapshotInspector<'_>, target: &Point) -> bool {
        utils::should_help(
            inspector.me(),
            inspector.my_team_players(),
            target,
            self.ctx.settings().max_helpers,
        )
    }
}

impl<P: ExpectedPosition> Bot for TurnPolicy<P> {
    fn on_disputing(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>> {
        disputing::on_disputing(self, inspector)
    }

    fn on_defending(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>> {
        defending::on_defending(self, inspector)
    }

    fn on_holding(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>> {
        holding::on_holding(self, inspector)
    }

    fn on_supporting(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>> {
        supporting::on_supporting(self, inspector)
    }

    fn as_goalkeeper(
        &self,
        inspector: &SnapshotInspector<'_>,
        state: PlayerState,
    ) -> Result<Vec<Order>> {
        keeper::as_goalkeeper(self, inspector, state)
    }
}
