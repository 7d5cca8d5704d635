// Clubhouse - Core Library
// Exposes all modules for use in the demo binary and tests

pub mod assess;
pub mod error;
pub mod garage;
pub mod league;
pub mod store;

// Re-export commonly used types
pub use assess::Assessable;
pub use error::{RegistryError, Result};
pub use garage::{Car, Driver, GarageRegistry};
pub use league::{LeagueRegistry, Player, Team};
pub use store::{Identified, Store};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
