use crate::settings::Settings;

/// Score, lives and progression for the current run.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Carried across runs; never reset.
    pub high_score: u32,
    pub game_active: bool,
    pub win_game: bool,
    pub paused: bool,
}

impl GameStats {
    /// The game starts inactive, waiting for the player to press Play.
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        let mut stats = Self {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score,
            game_active: false,
            win_game: false,
            paused: false,
        };
        stats.reset_stats(settings);
        stats
    }

    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
        self.win_game = false;
        self.paused = false;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Returns true when a new high score was set.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
