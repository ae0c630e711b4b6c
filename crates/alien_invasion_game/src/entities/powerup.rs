use alien_invasion_common::Color;
use rand::Rng;

use crate::geometry::Rect;
use crate::settings::Settings;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PowerupKind {
    /// One extra ship, up to `max_ships`.
    Life,
    /// Three-way spread shot for `weapon_frames`.
    Weapon,
    /// Absorbs the next hit.
    Shield,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Life, PowerupKind::Weapon, PowerupKind::Shield];

    pub fn color(self) -> Color {
        match self {
            PowerupKind::Life => Color::new_rgb(235, 50, 80),
            PowerupKind::Weapon => Color::new_rgb(255, 170, 0),
            PowerupKind::Shield => Color::CYAN,
        }
    }
}

/// A drop falling from the top of the screen.
#[derive(Clone, Debug)]
pub struct Powerup {
    pub kind: PowerupKind,
    pub rect: Rect,
}

impl Powerup {
    /// Place at a random column, one height below the top edge.
    pub fn spawn(settings: &Settings, kind: PowerupKind, rng: &mut impl Rng) -> Self {
        let w = settings.powerup_width;
        let h = settings.powerup_height;
        let x_end = (settings.screen_width_f() - w).max(w);
        let x = rng.gen_range(w..=x_end).floor();
        Self {
            kind,
            rect: Rect::new(x, h, w, h),
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.rect.y += settings.powerup_speed;
    }

    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.rect.top() >= screen_height
    }
}
