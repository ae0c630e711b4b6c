use crate::geometry::Rect;
use crate::settings::Settings;

/// Bullet fired upwards by the ship.
#[derive(Clone, Debug)]
pub struct PlayerBullet {
    pub rect: Rect,
}

impl PlayerBullet {
    /// Spawn at the ship's nose, shifted sideways by `x_offset` for spread shots.
    pub fn new(settings: &Settings, ship: &Rect, x_offset: f32) -> Self {
        let mut rect = Rect::new(0.0, 0.0, settings.bullet_width, settings.bullet_height);
        let (cx, top) = ship.midtop();
        rect.set_midtop((cx + x_offset, top));
        Self { rect }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.rect.y -= settings.player_bullet_speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

/// Bullet dropped by an enemy.
#[derive(Clone, Debug)]
pub struct EnemyBullet {
    pub rect: Rect,
}

impl EnemyBullet {
    pub fn new(settings: &Settings, enemy: &Rect) -> Self {
        let mut rect = Rect::new(0.0, 0.0, settings.bullet_width, settings.bullet_height);
        rect.set_midbottom(enemy.midbottom());
        Self { rect }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.rect.y += settings.enemy_bullet_speed;
    }

    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.rect.top() >= screen_height
    }
}
