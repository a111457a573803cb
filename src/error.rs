use std::io;
use thiserror::Error;

/// Validation failures reported by the seating model.
///
/// Every variant is recoverable: the console shows the message and asks again.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeatingError {
    #[error("Number of rows {0} is out of range (1 to 10)")]
    InvalidRowCount(usize),

    #[error("Row capacity {0} is out of range (1 to 8)")]
    InvalidCapacity(usize),

    #[error("Row {0} is out of range")]
    RowOutOfRange(usize),

    #[error("Position {slot} is out of range for a row of {capacity}")]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("Weight {0:.1} is out of range (45.0 to 200.0)")]
    WeightOutOfRange(f64),

    #[error("There is already a musician there.")]
    SlotOccupied,

    #[error("That position is vacant.")]
    SlotVacant,

    #[error("That would exceed the average weight limit.")]
    RowWeightLimitExceeded { total: f64, limit: f64 },
}

#[derive(Error, Debug)]
pub enum BandError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Input closed")]
    InputClosed,

    #[error(transparent)]
    Seating(#[from] SeatingError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BandError>;
