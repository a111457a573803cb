pub mod config;
pub mod console;
pub mod error;
pub mod report;
pub mod seating;

pub use config::Config;
pub use console::{Command, Console};
pub use error::{BandError, SeatingError};
pub use report::render_summary;
pub use seating::{
    Band, MAX_AVERAGE_WEIGHT, MAX_POSITIONS, MAX_ROWS, MAX_WEIGHT, MIN_WEIGHT, RowSummary, Slot,
    row_index, row_letter,
};
