use std::path::PathBuf;

use alien_invasion::LevelSource;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let levels = match args.next() {
        Some(dir) if dir == "-h" || dir == "--help" => {
            eprintln!("Usage: alien_invasion [LEVELS_DIR] [HIGHSCORE_FILE]");
            return;
        }
        Some(dir) => {
            log::info!("Reading levels from '{}'", dir);
            LevelSource::Dir(PathBuf::from(dir))
        }
        None => {
            log::info!("No levels directory provided, playing the bundled levels");
            LevelSource::Builtin
        }
    };
    let highscore_file = args.next().map(PathBuf::from);

    if let Err(e) = alien_invasion::run(levels, highscore_file.as_deref()) {
        eprintln!("alien_invasion: {e:#}");
        std::process::exit(1);
    }
}
