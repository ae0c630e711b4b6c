use alien_invasion_common::Color;

/// Horizontal travel direction of the whole fleet.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum FleetDirection {
    Left,
    #[default]
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

/// Static game configuration plus the speeds that change during a run.
///
/// Durations are counted in frames; the frontend paces frames at `fps`.
#[derive(Clone, Debug)]
pub struct Settings {
    // Screen
    pub screen_width: u32,
    pub screen_height: u32,
    pub bg_color: Color,
    pub fps: u32,

    // Ship
    pub ship_limit: u32,
    pub max_ships: u32,
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_color: Color,
    pub shield_padding: f32,
    pub shield_color: Color,

    // Bullets
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullets_allowed: usize,
    pub player_bullet_color: Color,
    pub enemy_bullet_color: Color,
    pub spread_offset: f32,

    // Enemies
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub fleet_drop_speed: f32,
    pub fleet_y_start: f32,

    // Power-ups
    pub powerup_width: f32,
    pub powerup_height: f32,
    pub weapon_frames: u32,

    // Custom event timers: base ± uniform jitter
    pub enemy_shoot_frames: u32,
    pub enemy_shoot_jitter: u32,
    pub powerup_frames: u32,
    pub powerup_jitter: u32,

    pub hit_pause_frames: u32,

    // Progression and scoring
    pub speedup_scale: f32,
    pub hit_points: u32,
    pub kill_points: u32,
    pub max_level: u32,

    pub highscore_file: String,

    // Dynamic, see `initialize_dynamic_settings`
    pub ship_speed: f32,
    pub player_bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    pub enemy_speed: f32,
    pub powerup_speed: f32,
    pub fleet_direction: FleetDirection,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: Color::new_rgb(12, 12, 36),
            fps: 60,

            ship_limit: 3,
            max_ships: 5,
            ship_width: 60.0,
            ship_height: 48.0,
            ship_color: Color::new_rgb(200, 210, 230),
            shield_padding: 8.0,
            shield_color: Color::CYAN,

            bullet_width: 3.0,
            bullet_height: 15.0,
            bullets_allowed: 10,
            player_bullet_color: Color::new_rgb(255, 240, 120),
            enemy_bullet_color: Color::new_rgb(255, 90, 90),
            spread_offset: 20.0,

            enemy_width: 60.0,
            enemy_height: 40.0,
            fleet_drop_speed: 10.0,
            fleet_y_start: 70.0,

            powerup_width: 30.0,
            powerup_height: 30.0,
            weapon_frames: 600,

            enemy_shoot_frames: 60,
            enemy_shoot_jitter: 24,
            powerup_frames: 600,
            powerup_jitter: 240,

            hit_pause_frames: 30,

            speedup_scale: 1.1,
            hit_points: 10,
            kill_points: 50,
            max_level: 5,

            highscore_file: "high_score.txt".to_string(),

            ship_speed: 0.0,
            player_bullet_speed: 0.0,
            enemy_bullet_speed: 0.0,
            enemy_speed: 0.0,
            powerup_speed: 0.0,
            fleet_direction: FleetDirection::Right,
        };
        settings.initialize_dynamic_settings(1.0);
        settings
    }
}

impl Settings {
    /// Reset the values that change throughout a game.
    pub fn initialize_dynamic_settings(&mut self, level_factor: f32) {
        self.ship_speed = 4.0 * level_factor;
        self.player_bullet_speed = 7.0 * level_factor;
        self.enemy_bullet_speed = 4.0 * level_factor;
        self.enemy_speed = 1.5 * level_factor;
        self.powerup_speed = 2.0 * level_factor;
        self.fleet_direction = FleetDirection::Right;
    }

    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.player_bullet_speed *= self.speedup_scale;
        self.enemy_bullet_speed *= self.speedup_scale;
        self.enemy_speed *= self.speedup_scale;
        self.powerup_speed *= self.speedup_scale;
    }

    pub fn screen_width_f(&self) -> f32 {
        self.screen_width as f32
    }

    pub fn screen_height_f(&self) -> f32 {
        self.screen_height as f32
    }

    /// Size in bytes of an RGB24 frame for this screen.
    pub fn frame_len(&self) -> usize {
        self.screen_width as usize * self.screen_height as usize * 3
    }
}
