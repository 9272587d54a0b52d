//! Deterministic snake game core: a tick-driven simulation engine plus the
//! input, speed, high-score and session plumbing around it. Front ends stay
//! outside; they feed [`InputEvent`]s in and draw [`GameSnapshot`]s.

pub mod config;
pub mod game;
pub mod highscore;
pub mod input;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod speed;

pub use game::{
    Direction, EndReason, GameConfig, GameSnapshot, GameState, Point, RunStatus, TickOutcome,
};
pub use highscore::{FileHighScoreStore, HighScoreBoard, HighScoreStore, MemoryHighScoreStore};
pub use input::{InputDirector, InputEvent};
pub use session::{GameObserver, GameOverReport, SnakeSession};
pub use session_rng::SessionRng;
