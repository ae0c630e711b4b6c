pub mod app;
pub mod entities;
mod font;
pub mod game;
pub mod geometry;
pub mod highscore;
pub mod levels;
pub mod render;
pub mod settings;
pub mod sound;
pub mod stats;
pub mod timers;

pub use app::InvasionApp;
pub use game::{Game, GameEvent};
pub use levels::{LevelError, Levels};
pub use settings::Settings;

/// Default integer scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
