//! The construction pool.
//!
//! `ConstructionPool::instantiate` turns a config into an instance through a
//! pluggable `ConstructionStrategy`, building each config id once and breaking
//! self-referential cycles with the strategy's undefined placeholder.

pub use self::error::ConstructionError;
pub use self::options::PoolOptions;
pub use self::pool::ConstructionPool;
pub use self::preprocess::ConfigPreprocessor;
pub use self::settings::ConstructionSettings;
pub use self::strategy::ConstructionStrategy;

// --- MODULE DECLARATIONS ---
mod error;
mod options;
mod pool;
mod preprocess;
mod settings;
mod strategy;
