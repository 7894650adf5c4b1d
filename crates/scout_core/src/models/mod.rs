pub mod position;
pub mod record;

pub use position::Position;
pub use record::{PlayerRecord, ScoutedPlayer, Stat};
