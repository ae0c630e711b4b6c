use alien_invasion_common::Color;

use crate::geometry::Rect;
use crate::settings::Settings;

/// Hull colour by remaining life; anything past 9 stays red.
const LIFE_COLORS: [Color; 9] = [
    Color::new_rgb(0, 160, 160),   // teal
    Color::new_rgb(60, 200, 80),   // green
    Color::new_rgb(150, 70, 200),  // purple
    Color::new_rgb(60, 110, 230),  // blue
    Color::new_rgb(150, 150, 150), // grey
    Color::new_rgb(245, 140, 30),  // orange
    Color::new_rgb(240, 220, 40),  // yellow
    Color::new_rgb(245, 130, 190), // pink
    Color::new_rgb(220, 30, 30),   // red
];

/// A single enemy of the fleet.
///
/// `level` is fixed at spawn and drives the kill reward; `life` counts down
/// with each hit and drives the colour.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    pub level: u8,
    pub life: u8,
}

impl Enemy {
    pub fn new(settings: &Settings, level: u8, x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, settings.enemy_width, settings.enemy_height),
            level,
            life: level,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.rect.x += settings.enemy_speed * settings.fleet_direction.sign();
    }

    pub fn drop_vertically(&mut self, settings: &Settings) {
        self.rect.y += settings.fleet_drop_speed;
    }

    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0.0
    }

    /// Take one hit. Returns true when the enemy is destroyed.
    pub fn hit(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.life == 0
    }

    pub fn color(&self) -> Color {
        let idx = (self.life.max(1) as usize - 1).min(LIFE_COLORS.len() - 1);
        LIFE_COLORS[idx]
    }
}
