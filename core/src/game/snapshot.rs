use super::types::{Direction, EndReason, Point, RunStatus};
use serde::{Deserialize, Serialize};

/// Read-only view of a session, produced once per tick for renderers and
/// score displays. Mutating it has no effect on the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Body cells, head first.
    pub snake: Vec<Point>,
    /// `None` only when the snake has filled the whole grid.
    pub food: Option<Point>,
    pub heading: Option<Direction>,
    pub score: u32,
    pub status: RunStatus,
    pub end_reason: Option<EndReason>,
    pub tick: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}
