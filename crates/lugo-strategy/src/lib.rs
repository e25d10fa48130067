mod context;
mod formation;
mod settings;
mod v0;

pub use context::PlayerContext;
pub use formation::{ExpectedPosition, Formation, FormationSlot, TeamPhase};
pub use settings::BotSettings;
pub use v0::{utils, TurnPolicy};
