// Registry error taxonomy
//
// Every failure class callers must distinguish gets its own variant.
// Errors are pure control information: raised at the first violated
// precondition, never logged, never retried, never accompanied by a
// partial state change.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Creation attempted with an identifier already present in the
    /// target store.
    #[error("Identifier {0} is already in use")]
    IdentifierInUse(u64),

    #[error("Team not found")]
    TeamNotFound,

    #[error("Player not found")]
    PlayerNotFound,

    #[error("Driver not found")]
    DriverNotFound,

    #[error("Car not found")]
    CarNotFound,

    /// Captain queried before one was assigned.
    #[error("Team has no captain assigned")]
    CaptainUnset,

    /// Purchase price exceeds the buyer's current balance.
    #[error("Insufficient funds: price {price} exceeds balance {balance}")]
    InsufficientFunds { price: f64, balance: f64 },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
