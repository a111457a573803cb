use crate::{error::Result, seating::RowSummary};
use std::io::Write;

// Width of one rendered seat: a space plus `{:5.1}`.
const SEAT_WIDTH: usize = 6;

/// Writes the seating table, one line per row with `[ total, average ]` aligned
/// after the longest row.
pub fn render_summary<W: Write>(rows: &[RowSummary], out: &mut W) -> Result<()> {
    writeln!(out)?;
    let widest = rows.iter().map(|r| r.slots.len()).max().unwrap_or(0);

    for row in rows {
        write!(out, "{}:", row.letter)?;
        for weight in &row.slots {
            write!(out, " {weight:5.1}")?;
        }
        let padding = (widest - row.slots.len()) * SEAT_WIDTH;
        writeln!(
            out,
            "{:padding$}[  {:5.1},  {:5.1}]",
            "", row.total, row.average
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::Band;

    fn render(band: &Band) -> String {
        let mut out = Vec::new();
        render_summary(&band.summarize(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_empty_band() {
        let band = Band::new(&[2]).unwrap();
        assert_eq!(render(&band), "\nA:   0.0   0.0[    0.0,    0.0]\n");
    }

    #[test]
    fn test_render_aligns_short_rows() {
        let mut band = Band::new(&[3, 1]).unwrap();
        band.add_occupant(0, 0, 50.0).unwrap();
        band.add_occupant(0, 2, 100.5).unwrap();
        band.add_occupant(1, 0, 90.0).unwrap();

        let text = render(&band);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "A:  50.0   0.0 100.5[  150.5,   50.2]");
        assert_eq!(lines[2], "B:  90.0            [   90.0,   90.0]");
        assert_eq!(lines[1].find('['), lines[2].find('['));
    }

    #[test]
    fn test_render_row_emptied_by_remove() {
        let mut band = Band::new(&[1, 2]).unwrap();
        band.add_occupant(0, 0, 75.0).unwrap();
        band.remove_occupant(0, 0).unwrap();

        let text = render(&band);
        assert!(!text.contains("-0.0"));
        assert_eq!(
            text,
            "\nA:   0.0      [    0.0,    0.0]\nB:   0.0   0.0[    0.0,    0.0]\n"
        );
    }

    #[test]
    fn test_render_no_rows() {
        let mut out = Vec::new();
        render_summary(&[], &mut out).unwrap();
        assert_eq!(out, b"\n");
    }
}
