use crate::game::{EndReason, GameSnapshot, GameState, RunStatus};
use crate::highscore::{HighScoreBoard, HighScoreStore};
use crate::input::{InputDirector, InputEvent};
use crate::log;
use crate::speed;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

/// Receives read-only views of a running session. Rendering and score
/// display happen on the other side of this trait.
pub trait GameObserver: Send + Sync + Clone + 'static {
    fn frame(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
    fn run_ended(&self, report: GameOverReport) -> impl Future<Output = ()> + Send;
}

/// Summary of a finished run, produced once per transition into
/// [`RunStatus::Over`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverReport {
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub end_reason: Option<EndReason>,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives a session until [`InputEvent::Quit`] arrives or the input
    /// channel closes. Ticks never overlap: the next one is scheduled only
    /// after the previous one finished, at the interval the speed policy
    /// picks for the current score. Input arriving between ticks does not
    /// delay the schedule.
    ///
    /// Returns the report of the last run that ended, if any.
    pub async fn run<TStore, TObserver>(
        mut state: GameState,
        mut high_scores: HighScoreBoard<TStore>,
        observer: TObserver,
        mut events: mpsc::UnboundedReceiver<InputEvent>,
    ) -> Option<GameOverReport>
    where
        TStore: HighScoreStore,
        TObserver: GameObserver,
    {
        log!("Session loop started, seed {}", state.seed());
        state.start();
        observer.frame(state.snapshot()).await;

        let mut last_report = None;
        let mut next_tick = Instant::now() + speed::tick_interval(state.config(), state.score());

        loop {
            tokio::select! {
                _ = sleep_until(next_tick) => {
                    let was_over = state.status() == RunStatus::Over;
                    let outcome = state.tick();
                    if outcome.status == RunStatus::Over && !was_over {
                        let report = Self::close_run(&state, &mut high_scores);
                        observer.run_ended(report).await;
                        last_report = Some(report);
                    }
                    observer.frame(state.snapshot()).await;
                    next_tick = Instant::now()
                        + speed::tick_interval(state.config(), state.score());
                }
                event = events.recv() => {
                    match event {
                        Some(InputEvent::Quit) => {
                            InputDirector::apply(&mut state, InputEvent::Quit);
                            observer.frame(state.snapshot()).await;
                            break;
                        }
                        Some(event) => InputDirector::apply(&mut state, event),
                        None => break,
                    }
                }
            }
        }

        log!("Session loop finished, best score {}", high_scores.best());
        last_report
    }

    fn close_run<TStore: HighScoreStore>(
        state: &GameState,
        high_scores: &mut HighScoreBoard<TStore>,
    ) -> GameOverReport {
        let score = state.score();
        let new_high_score = high_scores.record(score);
        GameOverReport {
            score,
            high_score: high_scores.best(),
            new_high_score,
            end_reason: state.end_reason(),
        }
    }
}
