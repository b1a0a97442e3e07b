pub mod config;
pub mod coords;
pub mod error;
pub mod hash;
pub mod noise;

pub use config::NoiseConfig;
pub use coords::{CellCoord2, CellCoord3};
pub use error::NoiseError;
pub use hash::{hash01, KeyedHash, XxHash32};
pub use noise::NoiseStrategy;
