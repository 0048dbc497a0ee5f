//! Engine plumbing shared by every module: seeded RNG and game configuration.

pub mod config;
pub mod rng;

pub use config::GameConfig;
pub use rng::GameRng;
