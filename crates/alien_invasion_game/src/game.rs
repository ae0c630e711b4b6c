use std::mem;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::entities::{Enemy, EnemyBullet, Movement, PlayerBullet, Powerup, PowerupKind, Ship};
use crate::geometry::Rect;
use crate::levels::Levels;
use crate::settings::Settings;
use crate::stats::GameStats;
use crate::timers::EventTimer;

/// Size of the Play button shown while the game is inactive.
const PLAY_BUTTON_SIZE: (f32, f32) = (200.0, 50.0);

/// Something the outside world (audio, logs) may want to react to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameEvent {
    /// At least one player bullet landed this frame.
    Boom,
    ShipHit,
    /// The shield absorbed a hit.
    ShieldDown,
    LevelUp { level: u32 },
    PowerupCollected(PowerupKind),
    GameOver,
    Won,
}

/// Whole game state plus the per-frame rules.
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<PlayerBullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub powerups: Vec<Powerup>,
    levels: Levels,
    rng: StdRng,
    enemy_shoot_timer: EventTimer,
    powerup_timer: EventTimer,
    weapon_frames_left: u32,
    hit_pause: u32,
    events: Vec<GameEvent>,
}

/// Centred Play button.
pub fn play_button_rect(settings: &Settings) -> Rect {
    let (w, h) = PLAY_BUTTON_SIZE;
    let mut rect = Rect::new(0.0, 0.0, w, h);
    rect.set_center(settings.screen_width_f() / 2.0, settings.screen_height_f() / 2.0);
    rect
}

impl Game {
    pub fn new(settings: Settings, levels: Levels, high_score: u32) -> Self {
        Self::with_rng(settings, levels, high_score, StdRng::from_entropy())
    }

    /// Deterministic construction for replays and tests.
    pub fn with_seed(settings: Settings, levels: Levels, high_score: u32, seed: u64) -> Self {
        Self::with_rng(settings, levels, high_score, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, levels: Levels, high_score: u32, mut rng: StdRng) -> Self {
        let stats = GameStats::new(&settings, high_score);
        let ship = Ship::new(&settings);
        let enemy_shoot_timer = EventTimer::new(
            settings.enemy_shoot_frames,
            settings.enemy_shoot_jitter,
            &mut rng,
        );
        let powerup_timer =
            EventTimer::new(settings.powerup_frames, settings.powerup_jitter, &mut rng);
        let mut game = Self {
            settings,
            stats,
            ship,
            enemies: Vec::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            powerups: Vec::new(),
            levels,
            rng,
            enemy_shoot_timer,
            powerup_timer,
            weapon_frames_left: 0,
            hit_pause: 0,
            events: Vec::new(),
        };
        // The first fleet is on screen behind the Play button.
        game.create_fleet();
        game
    }

    pub fn start_game(&mut self) {
        self.settings.initialize_dynamic_settings(1.0);
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.weapon_frames_left = 0;
        self.hit_pause = 0;
        self.ship.remove_shield();
        self.setup_level();
        self.enemy_shoot_timer.rearm(&mut self.rng);
        self.powerup_timer.rearm(&mut self.rng);
        info!("New game started");
    }

    pub fn start_new_level(&mut self) {
        self.stats.level += 1;
        self.events.push(GameEvent::LevelUp {
            level: self.stats.level,
        });
        self.settings.increase_speed();
        if self.stats.level <= self.settings.max_level {
            info!("Level {}", self.stats.level);
            self.setup_level();
        } else {
            info!("All levels cleared with score {}", self.stats.score);
            self.stats.win_game = true;
            self.stats.game_active = false;
            self.events.push(GameEvent::Won);
        }
    }

    /// Clear the field and bring in the fleet for the current level.
    pub fn setup_level(&mut self) {
        self.enemies.clear();
        self.bullets.clear();
        self.enemy_bullets.clear();
        self.powerups.clear();
        self.create_fleet();
        self.ship.center_ship();
    }

    pub fn create_fleet(&mut self) {
        let w = self.settings.enemy_width;
        let h = self.settings.enemy_height;
        let grid = self.levels.get(self.stats.level);
        for (y_idx, row) in grid.iter().enumerate() {
            for (x_idx, &level) in row.iter().enumerate() {
                if level == 0 {
                    continue;
                }
                let x = w + 1.5 * w * x_idx as f32;
                let y = self.settings.fleet_y_start + h * y_idx as f32;
                self.enemies.push(Enemy::new(&self.settings, level, x, y));
            }
        }
        debug!(
            "Fleet for level {}: {} enemies",
            self.stats.level,
            self.enemies.len()
        );
    }

    /// Advance the game by one frame.
    pub fn step(&mut self) {
        if !self.stats.game_active || self.stats.paused {
            return;
        }
        if self.hit_pause > 0 {
            self.hit_pause -= 1;
            return;
        }

        self.ship.update(&self.settings);
        self.weapon_frames_left = self.weapon_frames_left.saturating_sub(1);
        self.tick_timers();

        self.update_bullets();
        if self.frozen() {
            return;
        }
        self.update_enemy_bullets();
        if self.frozen() {
            return;
        }
        self.update_powerups();
        self.update_enemies();
    }

    fn frozen(&self) -> bool {
        !self.stats.game_active || self.hit_pause > 0
    }

    fn tick_timers(&mut self) {
        if self.enemy_shoot_timer.tick(&mut self.rng) {
            self.enemy_fire();
        }
        if self.powerup_timer.tick(&mut self.rng) {
            self.drop_powerup();
        }
    }

    /// A random enemy drops a bullet.
    fn enemy_fire(&mut self) {
        if let Some(enemy) = self.enemies.choose(&mut self.rng) {
            self.enemy_bullets
                .push(EnemyBullet::new(&self.settings, &enemy.rect));
        }
    }

    fn drop_powerup(&mut self) {
        let Some(&kind) = PowerupKind::ALL.choose(&mut self.rng) else {
            return;
        };
        debug!("Dropping {kind:?} power-up");
        self.powerups
            .push(Powerup::spawn(&self.settings, kind, &mut self.rng));
    }

    /// Fire from the ship if the bullet limit allows it. With the weapon
    /// power-up a three-way spread is fired, as many as still fit.
    pub fn fire_bullet(&mut self) {
        if self.frozen() || self.stats.paused {
            return;
        }
        let shots = if self.weapon_active() { 3 } else { 1 };
        let spread = self.settings.spread_offset;
        for offset in [0.0, -spread, spread].into_iter().take(shots) {
            if self.bullets.len() >= self.settings.bullets_allowed {
                break;
            }
            self.bullets
                .push(PlayerBullet::new(&self.settings, &self.ship.rect, offset));
        }
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        if self.enemies.is_empty() {
            self.start_new_level();
        } else {
            self.check_bullet_enemy_collisions();
        }
    }

    /// Every bullet that touches an enemy is spent. Collisions are paired up
    /// before any of them is resolved, so two bullets on one enemy are both
    /// used up. Each pair scores `hit_points` and takes a life; destroyed
    /// enemies add `kill_points * level` once.
    fn check_bullet_enemy_collisions(&mut self) {
        let enemies = &self.enemies;
        let mut hits: Vec<usize> = Vec::new();
        self.bullets.retain(|bullet| {
            let before = hits.len();
            hits.extend(
                enemies
                    .iter()
                    .enumerate()
                    .filter(|(_, enemy)| bullet.rect.intersects(&enemy.rect))
                    .map(|(idx, _)| idx),
            );
            hits.len() == before
        });
        if hits.is_empty() {
            return;
        }

        let kill_points = self.settings.kill_points;
        let mut points = self.settings.hit_points * hits.len() as u32;
        for idx in hits {
            let enemy = &mut self.enemies[idx];
            if enemy.life > 0 && enemy.hit() {
                points += kill_points * u32::from(enemy.level);
            }
        }
        self.enemies.retain(|enemy| enemy.life > 0);

        self.events.push(GameEvent::Boom);
        self.stats.add_score(points);
        if self.stats.check_high_score() {
            debug!("New high score {}", self.stats.high_score);
        }
    }

    fn update_enemy_bullets(&mut self) {
        let screen_height = self.settings.screen_height_f();
        for bullet in &mut self.enemy_bullets {
            bullet.update(&self.settings);
        }
        self.enemy_bullets
            .retain(|bullet| !bullet.is_off_screen(screen_height));

        let hitbox = self.ship.hitbox();
        let before = self.enemy_bullets.len();
        self.enemy_bullets
            .retain(|bullet| !bullet.rect.intersects(&hitbox));
        if self.enemy_bullets.len() < before {
            self.ship_hit();
        }
    }

    fn update_powerups(&mut self) {
        let screen_height = self.settings.screen_height_f();
        for powerup in &mut self.powerups {
            powerup.update(&self.settings);
        }
        self.powerups
            .retain(|powerup| !powerup.is_off_screen(screen_height));

        let hitbox = self.ship.hitbox();
        let (collected, falling): (Vec<_>, Vec<_>) = mem::take(&mut self.powerups)
            .into_iter()
            .partition(|powerup| powerup.rect.intersects(&hitbox));
        self.powerups = falling;
        for powerup in collected {
            self.apply_powerup(powerup.kind);
        }
    }

    pub fn apply_powerup(&mut self, kind: PowerupKind) {
        match kind {
            PowerupKind::Life => {
                if self.stats.ships_left < self.settings.max_ships {
                    self.stats.ships_left += 1;
                }
            }
            PowerupKind::Weapon => self.weapon_frames_left = self.settings.weapon_frames,
            PowerupKind::Shield => self.ship.create_shield(),
        }
        debug!("Collected {kind:?} power-up");
        self.events.push(GameEvent::PowerupCollected(kind));
    }

    fn update_enemies(&mut self) {
        self.check_fleet_edges();
        for enemy in &mut self.enemies {
            enemy.update(&self.settings);
        }

        let hitbox = self.ship.hitbox();
        if self.enemies.iter().any(|enemy| enemy.rect.intersects(&hitbox)) {
            // A shielded ship rams through whatever it touched.
            if self.ship.shield {
                self.enemies
                    .retain(|enemy| !enemy.rect.intersects(&hitbox));
            }
            self.ship_hit();
        }
        if self.frozen() {
            return;
        }

        self.check_enemies_bottom();
    }

    fn check_fleet_edges(&mut self) {
        let screen_width = self.settings.screen_width_f();
        if self
            .enemies
            .iter()
            .any(|enemy| enemy.check_edges(screen_width))
        {
            self.change_fleet_direction();
        }
    }

    /// Drop the entire fleet and reverse its direction.
    fn change_fleet_direction(&mut self) {
        for enemy in &mut self.enemies {
            enemy.drop_vertically(&self.settings);
        }
        self.settings.fleet_direction = self.settings.fleet_direction.reversed();
    }

    /// An enemy reaching the bottom costs a ship regardless of the shield.
    fn check_enemies_bottom(&mut self) {
        let screen_height = self.settings.screen_height_f();
        if self
            .enemies
            .iter()
            .any(|enemy| enemy.rect.bottom() >= screen_height)
        {
            self.lose_ship();
        }
    }

    fn ship_hit(&mut self) {
        if self.ship.shield {
            self.ship.remove_shield();
            self.events.push(GameEvent::ShieldDown);
        } else {
            self.lose_ship();
        }
    }

    fn lose_ship(&mut self) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        self.events.push(GameEvent::ShipHit);
        if self.stats.ships_left > 0 {
            info!("Ship lost, {} left", self.stats.ships_left);
            self.setup_level();
            self.hit_pause = self.settings.hit_pause_frames;
        } else {
            info!("Game over with score {}", self.stats.score);
            self.stats.game_active = false;
            self.events.push(GameEvent::GameOver);
        }
    }

    pub fn set_moving(&mut self, direction: Movement, on: bool) {
        self.ship.set_moving(direction, on);
    }

    pub fn toggle_pause(&mut self) {
        if self.stats.game_active {
            self.stats.paused = !self.stats.paused;
            info!("{}", if self.stats.paused { "Paused" } else { "Resumed" });
        }
    }

    /// Start a game when the Play button is clicked. Returns true if it did.
    pub fn handle_click(&mut self, x: f32, y: f32) -> bool {
        if self.stats.game_active || !play_button_rect(&self.settings).contains_point(x, y) {
            return false;
        }
        self.start_game();
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub fn weapon_active(&self) -> bool {
        self.weapon_frames_left > 0
    }

    pub fn hit_paused(&self) -> bool {
        self.hit_pause > 0
    }
}

#[cfg(test)]
mod tests;
