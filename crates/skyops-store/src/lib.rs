mod fleet;
mod mission;

pub use fleet::{FleetStats, FleetStore};
pub use mission::{MissionDraft, MissionStats, MissionStore};
