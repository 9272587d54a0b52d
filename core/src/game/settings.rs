use super::types::Point;
use crate::config::Validate;
use serde::{Deserialize, Serialize};

const MIN_GRID_SIDE: usize = 2;
const MAX_GRID_SIDE: usize = 256;

const DEFAULT_GRID_SIDE: usize = 20;
const DEFAULT_FOOD_REWARD: u32 = 10;
const DEFAULT_BASE_INTERVAL_MS: u64 = 200;
const DEFAULT_MIN_INTERVAL_MS: u64 = 100;
const DEFAULT_SPEED_STEP_SCORE: u32 = 50;
const DEFAULT_SPEED_DECREMENT_MS: u64 = 10;

/// Rules of one game session: grid geometry, scoring and the speed ramp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub initial_cell: Point,
    pub food_reward: u32,
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    /// Points needed to step the tick interval down once.
    pub speed_step_score: u32,
    pub speed_decrement_ms: u64,
}

impl GameConfig {
    pub fn with_grid(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
            initial_cell: Point::new(grid_width / 2, grid_height / 2),
            food_reward: DEFAULT_FOOD_REWARD,
            base_interval_ms: DEFAULT_BASE_INTERVAL_MS,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            speed_step_score: DEFAULT_SPEED_STEP_SCORE,
            speed_decrement_ms: DEFAULT_SPEED_DECREMENT_MS,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_grid(DEFAULT_GRID_SIDE, DEFAULT_GRID_SIDE)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&self.grid_width) {
            return Err(format!(
                "grid_width must be between {} and {}, got {}",
                MIN_GRID_SIDE, MAX_GRID_SIDE, self.grid_width
            ));
        }
        if !(MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&self.grid_height) {
            return Err(format!(
                "grid_height must be between {} and {}, got {}",
                MIN_GRID_SIDE, MAX_GRID_SIDE, self.grid_height
            ));
        }
        if self.initial_cell.x >= self.grid_width || self.initial_cell.y >= self.grid_height {
            return Err(format!(
                "initial_cell ({}, {}) is outside the {}x{} grid",
                self.initial_cell.x, self.initial_cell.y, self.grid_width, self.grid_height
            ));
        }
        if self.food_reward == 0 {
            return Err("food_reward must be positive".to_string());
        }
        if self.min_interval_ms == 0 {
            return Err("min_interval_ms must be positive".to_string());
        }
        if self.base_interval_ms < self.min_interval_ms {
            return Err(format!(
                "base_interval_ms {} is below min_interval_ms {}",
                self.base_interval_ms, self.min_interval_ms
            ));
        }
        if self.speed_step_score == 0 {
            return Err("speed_step_score must be positive".to_string());
        }
        Ok(())
    }
}
