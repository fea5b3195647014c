//! Source of the current calendar year for the age rule

use chrono::{Datelike, Local};

/// Provides the current year, enabling a fixed year in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Local wall-clock year
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }

    #[test]
    fn test_mock_clock_returns_expectation() {
        let mut clock = MockClock::new();
        clock.expect_current_year().return_const(2030);
        assert_eq!(clock.current_year(), 2030);
    }
}
