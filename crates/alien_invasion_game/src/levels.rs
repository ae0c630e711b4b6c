use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

/// Maximum number of enemy rows a level may declare.
pub const MAX_ROWS: usize = 7;
/// Strongest enemy level a cell may hold.
pub const MAX_ENEMY_LEVEL: u8 = 9;

/// Enemy placement for one level. `grid[row][col]` is 0 for an empty slot or
/// the level of the enemy spawned there.
pub type LevelGrid = Vec<Vec<u8>>;

const BUILTIN_LEVELS: &[&str] = &[
    include_str!("../../../assets/levels/level_1.csv"),
    include_str!("../../../assets/levels/level_2.csv"),
    include_str!("../../../assets/levels/level_3.csv"),
    include_str!("../../../assets/levels/level_4.csv"),
    include_str!("../../../assets/levels/level_5.csv"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    NotFound { path: PathBuf },
    Parse { line: usize, column: usize, cell: String },
    TooManyRows { rows: usize },
    Empty,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "level file not found: {}", path.display())
            }
            Self::Parse { line, column, cell } => write!(
                f,
                "invalid cell {cell:?} at line {line}, column {column} (expected 0..={MAX_ENEMY_LEVEL})"
            ),
            Self::TooManyRows { rows } => {
                write!(f, "level has {rows} rows, at most {MAX_ROWS} are allowed")
            }
            Self::Empty => write!(f, "no levels to play"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Parse a CSV level grid.
pub fn parse_level(text: &str) -> Result<LevelGrid, LevelError> {
    let mut grid = LevelGrid::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (col_idx, cell) in line.split(',').enumerate() {
            let cell = cell.trim();
            let value = cell
                .parse::<u8>()
                .ok()
                .filter(|v| *v <= MAX_ENEMY_LEVEL)
                .ok_or_else(|| LevelError::Parse {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    cell: cell.to_string(),
                })?;
            row.push(value);
        }
        grid.push(row);
    }
    if grid.len() > MAX_ROWS {
        return Err(LevelError::TooManyRows { rows: grid.len() });
    }
    Ok(grid)
}

/// Grid used when a level file exists but cannot be used.
pub fn default_grid() -> LevelGrid {
    vec![vec![1; 9]]
}

/// Load a level file. A missing file is an error; a file that cannot be read
/// or parsed falls back to [`default_grid`].
pub fn load_level_file(path: &Path) -> Result<LevelGrid, LevelError> {
    if !path.exists() {
        return Err(LevelError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let grid = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| parse_level(&text).map_err(|e| e.to_string()));
    match grid {
        Ok(grid) => Ok(grid),
        Err(e) => {
            warn!("level file {} couldn't be parsed ({e}), using default fleet", path.display());
            Ok(default_grid())
        }
    }
}

/// The ordered set of levels for a run.
#[derive(Clone, Debug)]
pub struct Levels {
    grids: Vec<LevelGrid>,
}

impl Levels {
    pub fn new(grids: Vec<LevelGrid>) -> Result<Self, LevelError> {
        if grids.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { grids })
    }

    /// Levels bundled with the game.
    pub fn builtin() -> Self {
        let grids = BUILTIN_LEVELS
            .iter()
            .enumerate()
            .map(|(i, text)| {
                parse_level(text).unwrap_or_else(|e| {
                    warn!("bundled level {} is invalid ({e}), using default fleet", i + 1);
                    default_grid()
                })
            })
            .collect();
        Self { grids }
    }

    /// Read `level_1.csv` ..= `level_<max_level>.csv` from `dir`.
    pub fn from_dir(dir: &Path, max_level: u32) -> Result<Self, LevelError> {
        let grids = (1..=max_level)
            .map(|n| load_level_file(&dir.join(format!("level_{n}.csv"))))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(grids)
    }

    /// Grid for a 1-based level; levels past the end repeat the last one.
    pub fn get(&self, level: u32) -> &LevelGrid {
        let idx = (level.max(1) as usize - 1).min(self.grids.len() - 1);
        &self.grids[idx]
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
