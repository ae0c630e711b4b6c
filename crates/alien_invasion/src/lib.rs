use std::path::{Path, PathBuf};

use alien_invasion_game::{highscore, Game, InvasionApp, Levels, Settings};
use alien_invasion_sdl2::{App, SdlContext, SdlInitInfo};
use anyhow::{Context, Result};

/// Where the levels come from.
pub enum LevelSource {
    Builtin,
    Dir(PathBuf),
}

pub fn load_levels(source: &LevelSource, settings: &Settings) -> Result<Levels> {
    match source {
        LevelSource::Builtin => Ok(Levels::builtin()),
        LevelSource::Dir(dir) => Levels::from_dir(dir, settings.max_level)
            .with_context(|| format!("Failed to load levels from {}", dir.display())),
    }
}

pub fn run(levels: LevelSource, highscore_file: Option<&Path>) -> Result<()> {
    let mut settings = Settings::default();
    if let Some(path) = highscore_file {
        settings.highscore_file = path.display().to_string();
    }
    let levels = load_levels(&levels, &settings)?;
    let highscore_path = PathBuf::from(&settings.highscore_file);
    let high_score = highscore::load(&highscore_path);
    log::info!(
        "Loaded {} levels, high score {} from {}",
        levels.len(),
        high_score,
        highscore_path.display()
    );

    let app = InvasionApp::new(Game::new(settings, levels, high_score), highscore_path);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .fps(app.fps())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_cover_every_level() {
        let settings = Settings::default();
        let levels = load_levels(&LevelSource::Builtin, &settings).unwrap();
        assert_eq!(levels.len(), settings.max_level as usize);
    }

    #[test]
    fn missing_level_dir_is_reported() {
        let settings = Settings::default();
        let dir = std::env::temp_dir().join("alien_invasion_no_such_levels_dir");
        let err = load_levels(&LevelSource::Dir(dir), &settings).unwrap_err();
        assert!(format!("{err:#}").contains("level file not found"));
    }
}
