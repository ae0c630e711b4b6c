use alien_invasion_common::Color;

use crate::entities::PowerupKind;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::game::{play_button_rect, Game};
use crate::geometry::Rect;

const TEXT_COLOR: Color = Color::new_rgb(230, 230, 230);
const BUTTON_COLOR: Color = Color::new_rgb(0, 135, 0);
const SCORE_SCALE: u32 = 4;
const BANNER_SCALE: u32 = 8;
const MARGIN: f32 = 20.0;

/// RGB24 view over the frontend's screen buffer. Every drawing call clips.
pub struct Frame<'a> {
    buf: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    pub fn new(buf: &'a mut [u8], width: u32, height: u32) -> Self {
        let width = width as usize;
        let height = height as usize;
        debug_assert_eq!(buf.len(), width * height * 3);
        Self { buf, width, height }
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.buf.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    #[inline]
    fn put(&mut self, x: usize, y: usize, color: Color) {
        let idx = (y * self.width + x) * 3;
        self.buf[idx] = color.r;
        self.buf[idx + 1] = color.g;
        self.buf[idx + 2] = color.b;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let idx = (y * self.width + x) * 3;
        Color::new_rgb(self.buf[idx], self.buf[idx + 1], self.buf[idx + 2])
    }

    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let x0 = rect.left().floor().max(0.0) as usize;
        let y0 = rect.top().floor().max(0.0) as usize;
        let x1 = (rect.right().ceil().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().ceil().max(0.0) as usize).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    pub fn outline_rect(&mut self, rect: &Rect, thickness: f32, color: Color) {
        let t = thickness;
        self.fill_rect(&Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(&Rect::new(rect.x, rect.bottom() - t, rect.w, t), color);
        self.fill_rect(&Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(&Rect::new(rect.right() - t, rect.y, t, rect.h), color);
    }

    /// Draw `text` with its top-left corner at (`x`, `y`). Unknown characters
    /// leave a gap.
    pub fn draw_text(&mut self, x: f32, y: f32, text: &str, scale: u32, color: Color) {
        let s = scale as f32;
        let mut pen_x = x;
        for c in text.chars() {
            if let Some(rows) = font::glyph(c) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (0b100 >> col) != 0 {
                            let px = Rect::new(pen_x + col as f32 * s, y + row as f32 * s, s, s);
                            self.fill_rect(&px, color);
                        }
                    }
                }
            }
            pen_x += (GLYPH_WIDTH + 1) as f32 * s;
        }
    }

    pub fn draw_text_centered(&mut self, cx: f32, y: f32, text: &str, scale: u32, color: Color) {
        let w = font::text_width(text, scale) as f32;
        self.draw_text(cx - w / 2.0, y, text, scale, color);
    }

    /// Blend every pixel towards `color` by `t`.
    pub fn tint(&mut self, color: Color, t: f32) {
        for px in self.buf.chunks_exact_mut(3) {
            let blended = Color::new_rgb(px[0], px[1], px[2]).lerp(color, t);
            px.copy_from_slice(&[blended.r, blended.g, blended.b]);
        }
    }
}

/// Draw the complete frame for the current game state.
pub fn render(game: &Game, screen: &mut [u8]) {
    let settings = &game.settings;
    let mut frame = Frame::new(screen, settings.screen_width, settings.screen_height);
    frame.clear(settings.bg_color);

    draw_ship(&mut frame, game);
    for bullet in &game.bullets {
        frame.fill_rect(&bullet.rect, settings.player_bullet_color);
    }
    for bullet in &game.enemy_bullets {
        frame.fill_rect(&bullet.rect, settings.enemy_bullet_color);
    }
    for enemy in &game.enemies {
        draw_enemy(&mut frame, &enemy.rect, enemy.color());
    }
    for powerup in &game.powerups {
        frame.fill_rect(&powerup.rect, powerup.kind.color());
        let label = match powerup.kind {
            PowerupKind::Life => "L",
            PowerupKind::Weapon => "W",
            PowerupKind::Shield => "S",
        };
        let scale = 4;
        let y = powerup.rect.center_y() - (GLYPH_HEIGHT * scale) as f32 / 2.0;
        frame.draw_text_centered(powerup.rect.center_x(), y, label, scale, Color::BLACK);
    }

    draw_scoreboard(&mut frame, game);

    let stats = &game.stats;
    if stats.paused {
        frame.tint(Color::BLACK, 0.5);
        let y = settings.screen_height_f() / 2.0 - (GLYPH_HEIGHT * BANNER_SCALE) as f32 / 2.0;
        frame.draw_text_centered(settings.screen_width_f() / 2.0, y, "PAUSED", BANNER_SCALE, TEXT_COLOR);
    }

    if !stats.game_active {
        let button = play_button_rect(settings);
        frame.fill_rect(&button, BUTTON_COLOR);
        let y = button.center_y() - (GLYPH_HEIGHT * 5) as f32 / 2.0;
        frame.draw_text_centered(button.center_x(), y, "PLAY", 5, Color::WHITE);

        let banner = if stats.win_game {
            Some("YOU WIN")
        } else if stats.ships_left == 0 {
            Some("GAME OVER")
        } else {
            None
        };
        if let Some(banner) = banner {
            let y = button.top() - (GLYPH_HEIGHT * BANNER_SCALE) as f32 - 40.0;
            frame.draw_text_centered(button.center_x(), y, banner, BANNER_SCALE, Color::YELLOW);
        }
    }
}

fn draw_ship(frame: &mut Frame, game: &Game) {
    let ship = &game.ship;
    let settings = &game.settings;
    let r = ship.rect;

    let body = Rect::new(r.x, r.y + r.h * 0.4, r.w, r.h * 0.6);
    let nose = Rect::new(r.center_x() - r.w * 0.15, r.y, r.w * 0.3, r.h * 0.4 + 1.0);
    frame.fill_rect(&body, settings.ship_color);
    frame.fill_rect(&nose, settings.ship_color);
    if game.weapon_active() {
        let cannon = Rect::new(r.x, r.y + r.h * 0.2, r.w * 0.12, r.h * 0.3);
        frame.fill_rect(&cannon, settings.player_bullet_color);
        let cannon = Rect::new(r.right() - r.w * 0.12, r.y + r.h * 0.2, r.w * 0.12, r.h * 0.3);
        frame.fill_rect(&cannon, settings.player_bullet_color);
    }
    if ship.shield {
        frame.outline_rect(&ship.hitbox(), 2.0, settings.shield_color);
    }
}

fn draw_enemy(frame: &mut Frame, rect: &Rect, color: Color) {
    frame.fill_rect(rect, color);
    let eye = rect.w * 0.15;
    let y = rect.y + rect.h * 0.3;
    frame.fill_rect(&Rect::new(rect.x + rect.w * 0.2, y, eye, eye), Color::BLACK);
    frame.fill_rect(&Rect::new(rect.right() - rect.w * 0.2 - eye, y, eye, eye), Color::BLACK);
}

fn draw_scoreboard(frame: &mut Frame, game: &Game) {
    let settings = &game.settings;
    let stats = &game.stats;
    let screen_w = settings.screen_width_f();
    let line = (GLYPH_HEIGHT * SCORE_SCALE) as f32;

    // Score, rounded to the nearest ten, in the top right corner.
    let rounded = stats.score.saturating_add(5) / 10 * 10;
    let score = font::group_thousands(rounded);
    let x = screen_w - MARGIN - font::text_width(&score, SCORE_SCALE) as f32;
    frame.draw_text(x, MARGIN, &score, SCORE_SCALE, TEXT_COLOR);

    let level = stats.level.min(settings.max_level).to_string();
    let x = screen_w - MARGIN - font::text_width(&level, SCORE_SCALE) as f32;
    frame.draw_text(x, MARGIN + line + 10.0, &level, SCORE_SCALE, TEXT_COLOR);

    let high = font::group_thousands(stats.high_score.saturating_add(5) / 10 * 10);
    frame.draw_text_centered(screen_w / 2.0, MARGIN, &high, SCORE_SCALE, TEXT_COLOR);

    // Remaining ships as small hulls in the top left corner.
    for i in 0..stats.ships_left {
        let icon = Rect::new(10.0 + i as f32 * 34.0, 10.0, 28.0, 22.0);
        frame.fill_rect(&Rect::new(icon.x, icon.y + 9.0, icon.w, 13.0), settings.ship_color);
        frame.fill_rect(&Rect::new(icon.center_x() - 4.0, icon.y, 8.0, 10.0), settings.ship_color);
    }
}
