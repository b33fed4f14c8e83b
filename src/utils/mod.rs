mod config;
mod error;
mod traits;

pub use config::Config;
pub use error::LifeError;
pub use traits::Grid;
