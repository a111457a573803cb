use crate::error::SeatingError;
use log::debug;

pub const MAX_ROWS: usize = 10;
pub const MAX_POSITIONS: usize = 8;
pub const MIN_WEIGHT: f64 = 45.0;
pub const MAX_WEIGHT: f64 = 200.0;
// Average weight allowed per position; a row may hold capacity * this in total.
pub const MAX_AVERAGE_WEIGHT: f64 = 100.0;

type SeatingResult<T> = std::result::Result<T, SeatingError>;

/// A single seat in a row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Slot {
    #[default]
    Vacant,
    Occupied(f64),
}

impl Slot {
    pub fn weight(self) -> Option<f64> {
        match self {
            Slot::Vacant => None,
            Slot::Occupied(w) => Some(w),
        }
    }

    pub fn is_vacant(self) -> bool {
        matches!(self, Slot::Vacant)
    }
}

#[derive(Debug, Clone)]
struct Row {
    slots: Vec<Slot>,
}

impl Row {
    fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Vacant; capacity],
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn total(&self) -> f64 {
        // Start from +0.0: `Sum for f64` starts from -0.0, which renders as `-0.0`.
        self.slots
            .iter()
            .filter_map(|s| s.weight())
            .fold(0.0, |acc, w| acc + w)
    }

    fn weight_limit(&self) -> f64 {
        self.capacity() as f64 * MAX_AVERAGE_WEIGHT
    }
}

/// Per-row snapshot produced by [`Band::summarize`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub letter: char,
    /// Slot weights in seat order, vacant seats as `0.0`.
    pub slots: Vec<f64>,
    pub total: f64,
    /// `total / capacity`, not divided by the number of occupied seats.
    pub average: f64,
}

/// Renders a zero-based row index as its letter (`0` is `A`).
pub fn row_letter(row: usize) -> char {
    debug_assert!(row < MAX_ROWS);
    (b'A' + row as u8) as char
}

/// Maps a row letter back to its zero-based index, ignoring case.
pub fn row_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

pub fn is_valid_weight(weight: f64) -> bool {
    (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight)
}

/// The seating model: a fixed set of rows with guarded add and remove.
#[derive(Debug, Clone)]
pub struct Band {
    rows: Vec<Row>,
}

impl Band {
    pub fn new(capacities: &[usize]) -> SeatingResult<Self> {
        if !(1..=MAX_ROWS).contains(&capacities.len()) {
            return Err(SeatingError::InvalidRowCount(capacities.len()));
        }
        if let Some(&bad) = capacities
            .iter()
            .find(|c| !(1..=MAX_POSITIONS).contains(*c))
        {
            return Err(SeatingError::InvalidCapacity(bad));
        }

        debug!("Creating band with row capacities {capacities:?}");
        Ok(Self {
            rows: capacities.iter().map(|&c| Row::new(c)).collect(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn capacity(&self, row: usize) -> SeatingResult<usize> {
        self.row(row).map(Row::capacity)
    }

    pub fn slot(&self, row: usize, slot: usize) -> SeatingResult<Slot> {
        let r = self.row(row)?;
        r.slots
            .get(slot)
            .copied()
            .ok_or(SeatingError::SlotOutOfRange {
                slot,
                capacity: r.capacity(),
            })
    }

    pub fn row_total(&self, row: usize) -> SeatingResult<f64> {
        self.row(row).map(Row::total)
    }

    /// Checks that `(row, slot)` exists and is free, in the same order `add_occupant` does.
    pub fn check_vacant(&self, row: usize, slot: usize) -> SeatingResult<()> {
        match self.slot(row, slot)? {
            Slot::Vacant => Ok(()),
            Slot::Occupied(_) => Err(SeatingError::SlotOccupied),
        }
    }

    pub fn add_occupant(&mut self, row: usize, slot: usize, weight: f64) -> SeatingResult<()> {
        let current = self.slot(row, slot)?;
        if !is_valid_weight(weight) {
            return Err(SeatingError::WeightOutOfRange(weight));
        }
        if !current.is_vacant() {
            return Err(SeatingError::SlotOccupied);
        }

        let r = &mut self.rows[row];
        let total = r.total() + weight;
        let limit = r.weight_limit();
        if total > limit {
            debug!(
                "Rejected {weight:.1} in row {}: total {total:.1} over limit {limit:.1}",
                row_letter(row)
            );
            return Err(SeatingError::RowWeightLimitExceeded { total, limit });
        }

        r.slots[slot] = Slot::Occupied(weight);
        debug!("Seated {weight:.1} at {}{}", row_letter(row), slot + 1);
        Ok(())
    }

    /// Vacates a seat and returns the weight that was there.
    pub fn remove_occupant(&mut self, row: usize, slot: usize) -> SeatingResult<f64> {
        let r = self
            .rows
            .get_mut(row)
            .ok_or(SeatingError::RowOutOfRange(row))?;
        let seat = r.slots.get_mut(slot).ok_or(SeatingError::SlotVacant)?;
        let weight = seat.weight().ok_or(SeatingError::SlotVacant)?;

        *seat = Slot::Vacant;
        debug!("Removed {weight:.1} from {}{}", row_letter(row), slot + 1);
        Ok(weight)
    }

    pub fn summarize(&self) -> Vec<RowSummary> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let total = r.total();
                let average = if total > 0.0 {
                    total / r.capacity() as f64
                } else {
                    0.0
                };
                RowSummary {
                    letter: row_letter(i),
                    slots: r.slots.iter().map(|s| s.weight().unwrap_or(0.0)).collect(),
                    total,
                    average,
                }
            })
            .collect()
    }

    fn row(&self, row: usize) -> SeatingResult<&Row> {
        self.rows.get(row).ok_or(SeatingError::RowOutOfRange(row))
    }
}
