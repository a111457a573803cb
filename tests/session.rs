//! End-to-end checks through the public API: the seating model on its own,
//! then a scripted console session.

use band_seating::{Band, Config, Console, SeatingError, Slot, render_summary, row_index};

fn seat(letter: char, position: usize) -> (usize, usize) {
    (row_index(letter).unwrap(), position - 1)
}

#[test]
fn test_rows_fill_up_to_their_limit() {
    let mut band = Band::new(&[2, 3]).unwrap();

    let (row, slot) = seat('A', 1);
    band.add_occupant(row, slot, 50.0).unwrap();

    let (row, slot) = seat('A', 2);
    assert!(matches!(
        band.add_occupant(row, slot, 160.0),
        Err(SeatingError::RowWeightLimitExceeded { .. })
    ));
    band.add_occupant(row, slot, 150.0).unwrap();

    let (row, slot) = seat('B', 3);
    band.add_occupant(row, slot, 200.0).unwrap();
    band.add_occupant(row, 0, 100.0).unwrap();
    // 300.0 is the limit for three seats.
    assert!(matches!(
        band.add_occupant(row, 1, 45.0),
        Err(SeatingError::RowWeightLimitExceeded { .. })
    ));

    let summary = band.summarize();
    assert_eq!(summary[0].slots, vec![50.0, 150.0]);
    assert_eq!(summary[0].total, 200.0);
    assert_eq!(summary[0].average, 100.0);
    assert_eq!(summary[1].slots, vec![100.0, 0.0, 200.0]);
    assert_eq!(summary[1].average, 100.0);
}

#[test]
fn test_reseating_after_remove() {
    let mut band = Band::new(&[1]).unwrap();
    band.add_occupant(0, 0, 99.0).unwrap();
    assert_eq!(band.add_occupant(0, 0, 60.0), Err(SeatingError::SlotOccupied));

    assert_eq!(band.remove_occupant(0, 0).unwrap(), 99.0);
    assert_eq!(band.remove_occupant(0, 0), Err(SeatingError::SlotVacant));

    let mut out = Vec::new();
    render_summary(&band.summarize(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\nA:   0.0[    0.0,    0.0]\n");

    band.add_occupant(0, 0, 60.0).unwrap();
    assert_eq!(band.slot(0, 0).unwrap(), Slot::Occupied(60.0));
}

#[test]
fn test_scripted_session() {
    let script = "\
3
4
2
1
a
c
1
88.5
a
c
1
R
b
1
r
C
1
P
x
";
    let mut out = Vec::new();
    Console::new(script.as_bytes(), &mut out)
        .run(&Config::default())
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("****** Musician added.").count(), 1);
    assert!(text.contains("ERROR: There is already a musician there."));
    assert!(text.contains("ERROR: That position is vacant."));
    assert_eq!(text.matches("****** Musician removed.").count(), 1);
    assert!(text.contains("C:   0.0                  [    0.0,    0.0]"));
    assert!(text.ends_with("Exiting...\n"));
}

#[test]
fn test_configured_layout_session() {
    let config = Config::from_layout("1,2").unwrap();
    let mut out = Vec::new();
    Console::new("A\nb\n2\n70\nP\nX\n".as_bytes(), &mut out)
        .run(&config)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!text.contains("Please enter number of rows"));

    let mut expected = Vec::new();
    let mut band = Band::new(&[1, 2]).unwrap();
    band.add_occupant(1, 1, 70.0).unwrap();
    render_summary(&band.summarize(), &mut expected).unwrap();
    assert!(text.contains(&String::from_utf8(expected).unwrap()));
}
