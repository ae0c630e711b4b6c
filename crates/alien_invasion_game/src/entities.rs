mod bullet;
mod enemy;
mod powerup;
mod ship;

pub use bullet::{EnemyBullet, PlayerBullet};
pub use enemy::Enemy;
pub use powerup::{Powerup, PowerupKind};
pub use ship::{Movement, Ship};
