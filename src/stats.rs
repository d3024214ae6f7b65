use std::fmt;

/// Running counters over the lifetime of an agent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpisodeStats {
    /// Number of episodes that have ended
    pub fail_count: u32,
    /// Time elapsed in the current episode
    pub current_timer: f32,
    /// Longest episode so far
    pub best_timer: f32,
}

impl EpisodeStats {
    /// Accumulate `dt` into the current episode's timer
    pub fn tick(&mut self, dt: f32) {
        self.current_timer += dt;
    }

    /// Close the current episode: keep its duration if it is the longest yet, reset the timer, and count the failure
    pub fn finish_episode(&mut self) {
        if self.current_timer > self.best_timer {
            self.best_timer = self.current_timer;
        }
        self.current_timer = 0.0;
        self.fail_count += 1;
    }
}

/// A read-only snapshot of an agent's progress, for external display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub fail_count: u32,
    pub current_timer: f32,
    pub best_timer: f32,
    pub exploration_rate: f32,
}

impl Report {
    pub(crate) fn new(stats: &EpisodeStats, exploration_rate: f32) -> Self {
        Self {
            fail_count: stats.fail_count,
            current_timer: stats.current_timer,
            best_timer: stats.best_timer,
            exploration_rate,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fails: {}", self.fail_count)?;
        writeln!(f, "Explore rate: {}", self.exploration_rate)?;
        writeln!(f, "Best balance time: {}", self.best_timer)?;
        write!(f, "Current balance time: {}", self.current_timer)
    }
}
