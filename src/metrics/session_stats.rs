use std::time::{Duration, Instant};

/// Session bookkeeping across retries: wall-clock time for the current run,
/// the last finished run's score, and the best score seen so far
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub last_score: i32,
    pub high_score: i32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            last_score: 0,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    /// Record a finished run. `final_score` is the score as it stood before
    /// the death sentinel clobbered it, never -1.
    pub fn on_game_over(&mut self, final_score: i32) {
        self.games_played += 1;
        self.last_score = final_score;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.elapsed_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed_time = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_game_over(10);
        assert_eq!(stats.high_score, 10);
        assert_eq!(stats.last_score, 10);
        assert_eq!(stats.games_played, 1);

        stats.on_game_over(5);
        assert_eq!(stats.high_score, 10); // Should not decrease
        assert_eq!(stats.last_score, 5);
        assert_eq!(stats.games_played, 2);

        stats.on_game_over(15);
        assert_eq!(stats.high_score, 15); // Should update
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(50));
        stats.update();

        assert!(stats.elapsed_time.as_millis() >= 50);

        stats.on_game_start();
        stats.update();
        assert!(stats.elapsed_time.as_millis() < 50);
    }
}
