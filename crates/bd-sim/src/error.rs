use bd_core::{BdError, PassengerId};
use bd_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("policy {policy:?} produced {got} passengers for {expected} seats")]
    PassengerCountMismatch {
        expected: usize,
        got:      usize,
        policy:   String,
    },

    #[error("{0} is already on the plane before boarding started")]
    AlreadyBoarded(PassengerId),

    #[error("boarding not finished after {budget} ticks ({seated}/{total} seated)")]
    TickBudgetExceeded {
        budget: u64,
        seated: usize,
        total:  usize,
    },

    #[error("cabin error: {0}")]
    Core(#[from] BdError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
