use crate::{
    config::Config,
    error::{BandError, Result, SeatingError},
    report::render_summary,
    seating::{self, Band, MAX_POSITIONS, MAX_ROWS},
};
use log::{debug, info};
use std::io::{BufRead, Write};

const ROWS_PROMPT: &str = "Please enter number of rows               : ";
const ROW_LETTER_PROMPT: &str = "Please enter row letter                   : ";
const WEIGHT_PROMPT: &str = "Please enter weight (45.0 to 200.0)       : ";
const MENU_PROMPT: &str = "(A)dd, (R)emove, (P)rint,          e(X)it : ";
const RETRY_PROMPT: &str = "ERROR: Out of range, try again            : ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Print,
    Exit,
}

impl Command {
    /// Selects a command from the first character of `token`, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        match token.chars().next()?.to_ascii_uppercase() {
            'A' => Some(Command::Add),
            'R' => Some(Command::Remove),
            'P' => Some(Command::Print),
            'X' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Interactive session over any line source and output sink.
///
/// Raw input is re-prompted here until it is in range; the [`Band`] only ever
/// sees parsed indices and weights.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Runs a whole session; running out of input ends it like `X` does.
    pub fn run(&mut self, config: &Config) -> Result<()> {
        writeln!(self.out, "Welcome to the Band of the Hour")?;
        writeln!(self.out, "-------------------------------")?;

        let mut band = match self.setup(config) {
            Ok(band) => band,
            Err(BandError::InputClosed) => {
                info!("Input closed during setup");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        self.command_loop(&mut band)
    }

    /// Builds the band from the configured layout, or by asking for each row.
    pub fn setup(&mut self, config: &Config) -> Result<Band> {
        let capacities = match &config.layout {
            Some(layout) => {
                info!("Using configured layout {layout:?}");
                layout.clone()
            }
            None => {
                let rows = self.read_int_in_range(ROWS_PROMPT, 1, MAX_ROWS)?;
                let mut capacities = Vec::with_capacity(rows);
                for row in 0..rows {
                    let prompt = format!(
                        "Please enter number of positions in row {} : ",
                        seating::row_letter(row)
                    );
                    capacities.push(self.read_int_in_range(&prompt, 1, MAX_POSITIONS)?);
                }
                capacities
            }
        };

        let band = Band::new(&capacities)?;
        info!("Band created with {} rows", band.row_count());
        Ok(band)
    }

    pub fn command_loop(&mut self, band: &mut Band) -> Result<()> {
        loop {
            writeln!(self.out)?;
            self.prompt(MENU_PROMPT)?;
            let token = match self.next_token() {
                Ok(token) => token,
                Err(BandError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let command = Command::parse(&token);
            debug!("Menu choice {token:?} -> {command:?}");
            let result = match command {
                Some(Command::Add) => self.add_musician(band),
                Some(Command::Remove) => self.remove_musician(band),
                Some(Command::Print) => render_summary(&band.summarize(), &mut self.out),
                Some(Command::Exit) => {
                    writeln!(self.out, "Exiting...")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.out, "ERROR: Invalid option, try again. ")?;
                    Ok(())
                }
            };

            match result {
                Err(BandError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                other => other?,
            }
        }
    }

    fn add_musician(&mut self, band: &mut Band) -> Result<()> {
        self.prompt(ROW_LETTER_PROMPT)?;
        let row = loop {
            let token = self.next_token()?;
            match token.chars().next().and_then(seating::row_index) {
                Some(row) if row < band.row_count() => break row,
                _ => self.prompt(RETRY_PROMPT)?,
            }
        };

        let capacity = band.capacity(row)?;
        let prompt = format!("Please enter position number (1 to {capacity})     : ");
        let slot = self.read_int_in_range(&prompt, 1, capacity)? - 1;

        if let Err(e) = band.check_vacant(row, slot) {
            return self.report(e);
        }

        self.prompt(WEIGHT_PROMPT)?;
        let weight = loop {
            let token = self.next_token()?;
            match token.parse::<f64>() {
                Ok(w) if seating::is_valid_weight(w) => break w,
                _ => self.prompt(RETRY_PROMPT)?,
            }
        };

        match band.add_occupant(row, slot, weight) {
            Ok(()) => writeln!(self.out, "****** Musician added.")?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn remove_musician(&mut self, band: &mut Band) -> Result<()> {
        self.prompt(ROW_LETTER_PROMPT)?;
        let token = self.next_token()?;
        let row = match token.chars().next().and_then(seating::row_index) {
            Some(row) if row < band.row_count() => row,
            _ => {
                // Same text as the retry prompt, but Remove does not retry.
                writeln!(self.out, "{RETRY_PROMPT}")?;
                return Ok(());
            }
        };

        let capacity = band.capacity(row)?;
        self.prompt(&format!(
            "Please enter position number (1 to {capacity})     : "
        ))?;
        let token = self.next_token()?;
        let result = match token.parse::<usize>().ok().and_then(|p| p.checked_sub(1)) {
            Some(slot) => band.remove_occupant(row, slot),
            None => Err(SeatingError::SlotVacant),
        };

        match result {
            Ok(_) => writeln!(self.out, "****** Musician removed.")?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn report(&mut self, err: SeatingError) -> Result<()> {
        debug!("Rejected: {err:?}");
        writeln!(self.out, "ERROR: {err}")?;
        Ok(())
    }

    fn read_int_in_range(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        self.prompt(prompt)?;
        loop {
            let token = self.next_token()?;
            match token.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => self.prompt(RETRY_PROMPT)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Returns the first word of the next non-blank line; the rest of the line is dropped.
    fn next_token(&mut self) -> Result<String> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(BandError::InputClosed);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }
}
