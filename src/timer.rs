//! Speed-mode countdown driven by external ticks.
//!
//! The timer never schedules itself. A host delivers one `tick` per elapsed
//! second; dropping or stopping the timer is the cancellation.

/// A one-shot countdown that restarts from its full duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTimer {
    duration: u32,
    remaining: u32,
}

/// Result of advancing a countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Running { seconds_remaining: u32 },
    Expired,
}

impl SpeedTimer {
    pub fn new(seconds: u32) -> Self {
        let duration = seconds.max(1);
        Self {
            duration,
            remaining: duration,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }

    /// Counts down one second. On expiry the timer is already restarted.
    pub fn tick(&mut self) -> Countdown {
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.restart();
            Countdown::Expired
        } else {
            Countdown::Running {
                seconds_remaining: self.remaining,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_then_expires() {
        let mut timer = SpeedTimer::new(3);

        assert_eq!(timer.tick(), Countdown::Running { seconds_remaining: 2 });
        assert_eq!(timer.tick(), Countdown::Running { seconds_remaining: 1 });
        assert_eq!(timer.tick(), Countdown::Expired);
        assert_eq!(timer.remaining(), 3);
    }

    #[test]
    fn test_restart() {
        let mut timer = SpeedTimer::new(30);
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining(), 28);

        timer.restart();
        assert_eq!(timer.remaining(), 30);
    }

    #[test]
    fn test_zero_duration_is_one_second() {
        let mut timer = SpeedTimer::new(0);
        assert_eq!(timer.duration(), 1);
        assert_eq!(timer.tick(), Countdown::Expired);
    }
}
