use crate::game::GameConfig;
use std::time::Duration;

/// Tick interval for the given score: every `speed_step_score` points shave
/// `speed_decrement_ms` off the base interval, never dropping below the
/// configured floor.
pub fn tick_interval(config: &GameConfig, score: u32) -> Duration {
    let steps = u64::from(score / config.speed_step_score.max(1));
    let reduced = config
        .base_interval_ms
        .saturating_sub(steps.saturating_mul(config.speed_decrement_ms));
    Duration::from_millis(reduced.max(config.min_interval_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval_ms(score: u32) -> u64 {
        tick_interval(&GameConfig::default(), score).as_millis() as u64
    }

    #[test]
    fn test_base_interval_until_first_step() {
        assert_eq!(interval_ms(0), 200);
        assert_eq!(interval_ms(10), 200);
        assert_eq!(interval_ms(49), 200);
    }

    #[test]
    fn test_interval_steps_down_with_score() {
        assert_eq!(interval_ms(50), 190);
        assert_eq!(interval_ms(99), 190);
        assert_eq!(interval_ms(100), 180);
        assert_eq!(interval_ms(450), 110);
    }

    #[test]
    fn test_interval_never_drops_below_floor() {
        assert_eq!(interval_ms(500), 100);
        assert_eq!(interval_ms(510), 100);
        assert_eq!(interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_floor_applies_when_decrement_overshoots() {
        let mut config = GameConfig::default();
        config.base_interval_ms = 120;
        config.speed_decrement_ms = 50;
        assert_eq!(tick_interval(&config, 50), Duration::from_millis(100));
    }
}
