mod geom;
mod inspector;
mod mapper;
mod order;
mod player_id;
mod player_state;
mod sides;
mod snapshot;

pub mod runtime;
pub mod specs;

pub use geom::*;
pub use inspector::*;
pub use mapper::*;
pub use order::*;
pub use player_id::*;
pub use player_state::*;
pub use sides::*;
pub use snapshot::*;
