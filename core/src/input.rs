use crate::game::{Direction, GameState};
use serde::{Deserialize, Serialize};

/// Discrete control symbols a front end can deliver. How keys, buttons or
/// gestures map onto these is the front end's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    PauseToggle,
    Restart,
    Quit,
}

/// Translates input symbols into engine operations. Stateless: all the
/// filtering (reversals, wrong-status requests) lives in the engine itself.
pub struct InputDirector;

impl InputDirector {
    pub fn apply(state: &mut GameState, event: InputEvent) {
        match event {
            InputEvent::Up => state.set_heading(Direction::Up),
            InputEvent::Down => state.set_heading(Direction::Down),
            InputEvent::Left => state.set_heading(Direction::Left),
            InputEvent::Right => state.set_heading(Direction::Right),
            InputEvent::PauseToggle => state.toggle_pause(),
            InputEvent::Restart => state.restart(),
            InputEvent::Quit => state.quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Point, RunStatus};

    fn started_engine() -> GameState {
        let mut state = GameState::with_seed(GameConfig::default(), 42).unwrap();
        state.start();
        state
    }

    #[test]
    fn test_directional_events_steer_the_snake() {
        let cases = [
            (InputEvent::Up, Point::new(10, 9)),
            (InputEvent::Down, Point::new(10, 11)),
            (InputEvent::Right, Point::new(11, 10)),
        ];
        for (event, expected) in cases {
            let mut state = started_engine();
            InputDirector::apply(&mut state, event);
            assert_eq!(state.tick().head, expected, "after {event:?}");
        }

        // Left reverses the opening heading and is therefore dropped.
        let mut state = started_engine();
        InputDirector::apply(&mut state, InputEvent::Left);
        assert_eq!(state.tick().head, Point::new(11, 10));
    }

    #[test]
    fn test_pause_toggle_event() {
        let mut state = started_engine();
        InputDirector::apply(&mut state, InputEvent::PauseToggle);
        assert_eq!(state.status(), RunStatus::Paused);
        InputDirector::apply(&mut state, InputEvent::PauseToggle);
        assert_eq!(state.status(), RunStatus::Running);
    }

    #[test]
    fn test_directional_events_ignored_while_paused() {
        let mut state = started_engine();
        InputDirector::apply(&mut state, InputEvent::PauseToggle);
        InputDirector::apply(&mut state, InputEvent::Down);
        InputDirector::apply(&mut state, InputEvent::PauseToggle);
        assert_eq!(state.tick().head, Point::new(11, 10));
    }

    #[test]
    fn test_restart_event_starts_a_fresh_run() {
        let mut state = started_engine();
        state.tick();
        InputDirector::apply(&mut state, InputEvent::Restart);
        assert_eq!(state.status(), RunStatus::Running);
        assert_eq!(state.heading(), None);
        assert_eq!(state.snapshot().snake, vec![Point::new(10, 10)]);
    }

    #[test]
    fn test_quit_event_returns_to_the_lobby() {
        let mut state = started_engine();
        state.tick();
        InputDirector::apply(&mut state, InputEvent::Quit);
        assert_eq!(state.status(), RunStatus::NotStarted);
        assert_eq!(state.snapshot().snake, vec![Point::new(10, 10)]);
    }
}
