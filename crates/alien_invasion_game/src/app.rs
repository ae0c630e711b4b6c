use std::path::PathBuf;

use alien_invasion_common::app::App;
use alien_invasion_common::key::{Key, MouseButton};

use crate::entities::Movement;
use crate::game::{Game, GameEvent};
use crate::highscore;
use crate::render::render;
use crate::sound::SoundManager;
use crate::SCREEN_SCALE;

/// SDL-facing application wrapper for the game.
///
/// Implements the shared `App` trait so the frontend can drive it: each
/// `update` is one frame of game logic followed by a full redraw.
pub struct InvasionApp {
    should_exit: bool,
    pub game: Game,
    sound: Option<SoundManager>,
    highscore_path: PathBuf,
}

impl InvasionApp {
    pub fn new(game: Game, highscore_path: PathBuf) -> Self {
        Self {
            should_exit: false,
            game,
            sound: None,
            highscore_path,
        }
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::GameOver | GameEvent::Won => log::info!(
                    "{event:?}: score {} (high score {})",
                    self.game.stats.score,
                    self.game.stats.high_score
                ),
                _ => log::debug!("{event:?}"),
            }
        }
    }

    fn set_music(&self, on: bool) {
        if let Some(sound) = &self.sound {
            sound.set_music(on);
        }
    }
}

fn movement_for(key: Key) -> Option<Movement> {
    match key {
        Key::Left => Some(Movement::LEFT),
        Key::Right => Some(Movement::RIGHT),
        Key::Up => Some(Movement::UP),
        Key::Down => Some(Movement::DOWN),
        _ => None,
    }
}

impl App for InvasionApp {
    fn init(&mut self) {
        log::info!("Alien Invasion init");
        // Without audio the game still runs, just silently.
        if self.sound.is_none() {
            self.sound = SoundManager::new();
        }
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.game.step();

        let events = self.game.drain_events();
        if !events.is_empty() {
            self.log_events(&events);
            if let Some(sound) = &self.sound {
                sound.handle_events(&events);
            }
        }

        render(&self.game, screen_state);
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        if let Some(direction) = movement_for(key) {
            self.game.set_moving(direction, is_pressed);
            return;
        }
        if !is_pressed {
            return;
        }
        match key {
            Key::Space => self.game.fire_bullet(),
            Key::P if !self.game.stats.game_active => {
                self.game.start_game();
                self.set_music(true);
            }
            Key::P => {
                self.game.toggle_pause();
                self.set_music(!self.game.stats.paused);
            }
            Key::Q | Key::Escape => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_mouse_click(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Left && self.game.handle_click(x as f32, y as f32) {
            self.set_music(true);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Alien Invasion exit");
        if let Err(e) = highscore::save(&self.highscore_path, self.game.stats.high_score) {
            log::error!("{e:#}");
        }
    }

    fn width(&self) -> u32 {
        self.game.settings.screen_width
    }

    fn height(&self) -> u32 {
        self.game.settings.screen_height
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn fps(&self) -> u32 {
        self.game.settings.fps
    }

    fn title(&self) -> String {
        "Alien Invasion".to_string()
    }
}
