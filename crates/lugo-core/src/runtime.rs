//! Interfaces for the turn runtime
//!
//! The runtime drives a [`Bot`] through a match: it receives one [`GameSnapshot`] per
//! turn, works out the tactical state of the player, calls the matching handler and
//! forwards the resulting orders.
//!
//! Transports plug in through two traits: a [`SnapshotSource`] producing snapshots and
//! an [`OrderSink`] consuming order sets. [`run_turn_loop`] ties them together:
//!
//! ```no_run
//! use lugo_core::runtime::{run_turn_loop, Bot, OrderSink, SnapshotSource, TurnRunner};
//!
//! fn play<B: Bot>(
//!     runner: &TurnRunner<B>,
//!     source: &mut dyn SnapshotSource,
//!     sink: &mut dyn OrderSink,
//! ) -> anyhow::Result<()> {
//!     let stats = run_turn_loop(runner, source, sink)?;
//!     println!("played {} of {} turns", stats.played, stats.turns);
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};

use crate::{
    GameSnapshot, GameState, Order, OrderSet, PlayerNumber, PlayerState, SnapshotInspector,
    TeamSide,
};

/// The decision logic of a player. Each handler is called for exactly one
/// [`PlayerState`]; the goalkeeper always goes through [`Bot::as_goalkeeper`].
///
/// Handlers return the orders for the current turn, most important first. An error
/// skips the turn: no orders are sent.
pub trait Bot {
    /// Nobody holds the ball.
    fn on_disputing(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>>;

    /// An opponent holds the ball.
    fn on_defending(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>>;

    /// This player holds the ball.
    fn on_holding(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>>;

    /// A teammate holds the ball.
    fn on_supporting(&self, inspector: &SnapshotInspector<'_>) -> Result<Vec<Order>>;

    fn as_goalkeeper(
        &self,
        inspector: &SnapshotInspector<'_>,
        state: PlayerState,
    ) -> Result<Vec<Order>>;

    /// Called when the players are being placed for a kick-off. No orders are
    /// accepted during this phase.
    fn getting_ready(&self, snapshot: &GameSnapshot) {
        log::debug!("Getting ready for turn {}", snapshot.turn);
    }
}

/// The result of offering a snapshot to a [`TurnRunner`].
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The bot decided on its orders
    Orders(OrderSet),
    /// The handler failed and the turn is skipped
    Skipped { turn: u32, reason: String },
    /// The game does not expect orders in this phase
    Idle,
}

/// Binds a [`Bot`] to one player of one team.
pub struct TurnRunner<B> {
    bot: B,
    side: TeamSide,
    number: PlayerNumber,
}

impl<B: Bot> TurnRunner<B> {
    pub fn new(bot: B, side: TeamSide, number: PlayerNumber) -> Self {
        Self { bot, side, number }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn side(&self) -> TeamSide {
        self.side
    }

    pub fn number(&self) -> PlayerNumber {
        self.number
    }

    /// Plays one turn. Never fails: handler errors are reported as
    /// [`TurnOutcome::Skipped`].
    pub fn play(&self, snapshot: &GameSnapshot) -> TurnOutcome {
        match snapshot.state {
            GameState::GetReady => {
                self.bot.getting_ready(snapshot);
                TurnOutcome::Idle
            }
            GameState::Listening => match self.decide(snapshot) {
                Ok(orders) => TurnOutcome::Orders(OrderSet::new(snapshot.turn, orders)),
                Err(err) => TurnOutcome::Skipped {
                    turn: snapshot.turn,
                    reason: format!("{:#}", err),
                },
            },
            _ => TurnOutcome::Idle,
        }
    }

    fn decide(&self, snapshot: &GameSnapshot) -> Result<Vec<Order>> {
        let inspector = SnapshotInspector::new(snapshot, self.side, self.number)?;
        let state = PlayerState::define(snapshot, self.side, self.number);
        log::debug!(
            "Turn {}: player {} ({}) is {}",
            snapshot.turn,
            self.number,
            self.side,
            state
        );

        let orders = if self.number.is_goalkeeper() {
            self.bot.as_goalkeeper(&inspector, state)
        } else {
            match state {
                PlayerState::DisputingTheBall => self.bot.on_disputing(&inspector),
                PlayerState::Defending => self.bot.on_defending(&inspector),
                PlayerState::HoldingTheBall => self.bot.on_holding(&inspector),
                PlayerState::Supporting => self.bot.on_supporting(&inspector),
            }
        };
        orders.with_context(|| format!("{} handler failed", state))
    }
}

/// Produces the snapshots of a match, one per turn.
pub trait SnapshotSource {
    /// Returns the next snapshot, or `None` once the match is over.
    fn recv(&mut self) -> Result<Option<GameSnapshot>>;
}

/// Consumes the orders decided for each turn.
pub trait OrderSink {
    fn send(&mut self, orders: &OrderSet) -> Result<()>;
}

/// Summary of a finished turn loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub turns: usize,
    pub played: usize,
    pub skipped: usize,
    pub idle: usize,
}

/// Feeds every snapshot of `source` to `runner` and sends the decided orders to
/// `sink`. Skipped turns are logged and do not stop the loop; transport errors do.
pub fn run_turn_loop<B: Bot>(
    runner: &TurnRunner<B>,
    source: &mut dyn SnapshotSource,
    sink: &mut dyn OrderSink,
) -> Result<LoopStats> {
    let mut stats = LoopStats::default();
    while let Some(snapshot) = source.recv().context("Failed to receive snapshot")? {
        stats.turns += 1;
        match runner.play(&snapshot) {
            TurnOutcome::Orders(orders) => {
                sink.send(&orders)
                    .with_context(|| format!("Failed to send orders for turn {}", orders.turn))?;
                stats.played += 1;
            }
            TurnOutcome::Skipped { turn, reason } => {
                log::warn!("Did not play turn {}: {}", turn, reason);
                stats.skipped += 1;
            }
            TurnOutcome::Idle => stats.idle += 1,
        }
    }
    Ok(stats)
}
