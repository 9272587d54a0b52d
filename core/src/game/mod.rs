mod settings;
mod snake;
mod snapshot;
mod state;
mod types;

pub use settings::GameConfig;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{Direction, EndReason, Point, RunStatus, TickOutcome};
