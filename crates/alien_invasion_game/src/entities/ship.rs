use bitflags::bitflags;

use crate::geometry::Rect;
use crate::settings::Settings;

bitflags! {
    /// Directions currently held down by the player.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct Movement: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

/// The player's ship.
#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    pub moving: Movement,
    pub shield: bool,
    screen_width: f32,
    screen_height: f32,
    shield_padding: f32,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            rect: Rect::new(0.0, 0.0, settings.ship_width, settings.ship_height),
            moving: Movement::empty(),
            shield: false,
            screen_width: settings.screen_width_f(),
            screen_height: settings.screen_height_f(),
            shield_padding: settings.shield_padding,
        };
        ship.center_ship();
        ship
    }

    /// Move one frame's worth in every held direction that still has room.
    pub fn update(&mut self, settings: &Settings) {
        let hitbox = self.hitbox();
        let speed = settings.ship_speed;
        if self.moving.contains(Movement::RIGHT) && hitbox.right() < self.screen_width {
            self.rect.x += speed;
        }
        if self.moving.contains(Movement::LEFT) && hitbox.left() > 0.0 {
            self.rect.x -= speed;
        }
        if self.moving.contains(Movement::DOWN) && hitbox.bottom() < self.screen_height {
            self.rect.y += speed;
        }
        if self.moving.contains(Movement::UP) && hitbox.top() > 0.0 {
            self.rect.y -= speed;
        }
    }

    pub fn set_moving(&mut self, direction: Movement, on: bool) {
        self.moving.set(direction, on);
    }

    pub fn center_ship(&mut self) {
        let bottom = if self.shield {
            self.screen_height - self.shield_padding
        } else {
            self.screen_height
        };
        self.rect.set_midbottom((self.screen_width / 2.0, bottom));
    }

    pub fn create_shield(&mut self) {
        self.shield = true;
    }

    pub fn remove_shield(&mut self) {
        self.shield = false;
    }

    /// Area that collides; the shield extends it around the hull.
    pub fn hitbox(&self) -> Rect {
        if self.shield {
            self.rect.inflate(self.shield_padding)
        } else {
            self.rect
        }
    }
}
