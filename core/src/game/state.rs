use super::settings::GameConfig;
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{Direction, EndReason, Point, RunStatus, TickOutcome};
use crate::config::Validate;
use crate::log;
use crate::session_rng::SessionRng;

/// Authoritative state of one snake session. All mutation goes through the
/// operations below; time only passes when the driver calls [`tick`].
///
/// [`tick`]: GameState::tick
#[derive(Clone, Debug)]
pub struct GameState {
    snake: Snake,
    food: Option<Point>,
    heading: Option<Direction>,
    pending_heading: Option<Direction>,
    score: u32,
    /// Completed movement steps in the current run.
    tick_count: u64,
    status: RunStatus,
    end_reason: Option<EndReason>,
    rng: SessionRng,
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        Self::with_rng(config, SessionRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, String> {
        Self::with_rng(config, SessionRng::new(seed))
    }

    fn with_rng(config: GameConfig, rng: SessionRng) -> Result<Self, String> {
        config.validate()?;
        let mut state = Self {
            snake: Snake::new(config.initial_cell),
            food: None,
            heading: None,
            pending_heading: None,
            score: 0,
            tick_count: 0,
            status: RunStatus::NotStarted,
            end_reason: None,
            rng,
            config,
        };
        state.place_food();
        log!(
            "Session created: {}x{} grid, seed {}",
            state.config.grid_width,
            state.config.grid_height,
            state.rng.seed()
        );
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Begins the run. The snake sets off to the right, as in the classic
    /// arcade rules. Does nothing unless the session is fresh.
    pub fn start(&mut self) {
        if self.status != RunStatus::NotStarted {
            return;
        }
        self.status = RunStatus::Running;
        self.heading = Some(Direction::Right);
        log!("Run started");
    }

    /// Queues a heading change for the next tick. Ignored while the run is
    /// not in progress and when `requested` would reverse the snake into its
    /// own neck. Of several requests between ticks the last accepted one
    /// wins.
    pub fn set_heading(&mut self, requested: Direction) {
        if self.status != RunStatus::Running {
            return;
        }
        if let Some(current) = self.heading
            && current.is_opposite(requested)
        {
            return;
        }
        self.pending_heading = Some(requested);
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            RunStatus::Running => RunStatus::Paused,
            RunStatus::Paused => RunStatus::Running,
            other => other,
        };
    }

    /// Throws the current run away and starts a fresh one immediately. The
    /// new snake sits still until the first heading arrives.
    pub fn restart(&mut self) {
        self.reset_run();
        self.status = RunStatus::Running;
        log!("Run restarted");
    }

    /// Abandons the session: the board is rebuilt and the engine returns to
    /// its pre-start state.
    pub fn quit(&mut self) {
        self.reset_run();
        self.status = RunStatus::NotStarted;
        log!("Run abandoned");
    }

    /// Advances the simulation by one step. Outside [`RunStatus::Running`]
    /// this is a no-op that merely reports the current state.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != RunStatus::Running {
            return self.outcome(self.snake.head(), false);
        }

        if let Some(next) = self.pending_heading.take() {
            self.heading = Some(next);
        }
        let Some(heading) = self.heading else {
            // Nobody has steered yet; the snake sits still.
            return self.outcome(self.snake.head(), false);
        };

        let candidate = match self.candidate_head(heading) {
            Ok(cell) => cell,
            Err(reason) => {
                self.end_run(reason);
                return self.outcome(self.snake.head(), false);
            }
        };
        let eats = self.food == Some(candidate);
        if self.hits_body(candidate, eats) {
            self.end_run(EndReason::SelfCollision);
            return self.outcome(self.snake.head(), false);
        }

        self.snake.advance(candidate, eats);
        if eats {
            self.score += self.config.food_reward;
            log!(
                "Food eaten at ({}, {}), score {}",
                candidate.x,
                candidate.y,
                self.score
            );
            self.place_food();
        }
        self.tick_count += 1;
        self.outcome(candidate, eats)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            snake: self.snake.cells().collect(),
            food: self.food,
            heading: self.heading,
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            tick: self.tick_count,
        }
    }

    fn reset_run(&mut self) {
        self.snake = Snake::new(self.config.initial_cell);
        self.heading = None;
        self.pending_heading = None;
        self.score = 0;
        self.tick_count = 0;
        self.end_reason = None;
        self.food = None;
        self.place_food();
    }

    fn candidate_head(&self, heading: Direction) -> Result<Point, EndReason> {
        let head = self.snake.head();
        let next = match heading {
            Direction::Up => {
                if head.y == 0 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x, head.y - 1)
            }
            Direction::Down => {
                if head.y >= self.config.grid_height - 1 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x, head.y + 1)
            }
            Direction::Left => {
                if head.x == 0 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x - 1, head.y)
            }
            Direction::Right => {
                if head.x >= self.config.grid_width - 1 {
                    return Err(EndReason::WallCollision);
                }
                Point::new(head.x + 1, head.y)
            }
        };
        Ok(next)
    }

    /// The tail cell is legal to enter because it moves away this tick,
    /// except when eating keeps the tail in place.
    fn hits_body(&self, candidate: Point, eats: bool) -> bool {
        self.snake.occupies(candidate) && (eats || candidate != self.snake.tail())
    }

    /// Places food uniformly over the free cells. With no free cell left the
    /// run ends as a completed board.
    fn place_food(&mut self) {
        let free = self.free_cells();
        match self.rng.pick(&free) {
            Some(cell) => {
                self.food = Some(*cell);
                log!("Food placed at ({}, {})", cell.x, cell.y);
            }
            None => {
                self.food = None;
                self.end_run(EndReason::BoardFull);
            }
        }
    }

    fn free_cells(&self) -> Vec<Point> {
        let mut free = Vec::with_capacity(self.config.cell_count() - self.snake.len());
        for y in 0..self.config.grid_height {
            for x in 0..self.config.grid_width {
                let cell = Point::new(x, y);
                if !self.snake.occupies(cell) {
                    free.push(cell);
                }
            }
        }
        free
    }

    fn end_run(&mut self, reason: EndReason) {
        self.status = RunStatus::Over;
        self.end_reason = Some(reason);
        log!("Run over: {:?}, final score {}", reason, self.score);
    }

    fn outcome(&self, head: Point, ate_food: bool) -> TickOutcome {
        TickOutcome {
            head,
            ate_food,
            status: self.status,
            score: self.score,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, cell: Point) {
        self.food = Some(cell);
    }
}
