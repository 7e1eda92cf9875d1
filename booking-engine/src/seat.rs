use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Row letters, front of the room first.
pub const SEAT_ROWS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
pub const SEATS_PER_ROW: u8 = 14;
/// The aisle gap sits after this seat number; seats 1..=6 form the left
/// block, 7..=14 the right.
pub const AISLE_AFTER: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatKind {
    Regular,
    Vip,
    Couple,
}

/// Single row -> kind table. Pricing, tooltips, and grid styling all read
/// this one table so the classifications cannot diverge.
pub const ROW_KINDS: [(char, SeatKind); 10] = [
    ('A', SeatKind::Regular),
    ('B', SeatKind::Regular),
    ('C', SeatKind::Regular),
    ('D', SeatKind::Regular),
    ('E', SeatKind::Regular),
    ('F', SeatKind::Vip),
    ('G', SeatKind::Vip),
    ('H', SeatKind::Vip),
    ('I', SeatKind::Couple),
    ('J', SeatKind::Couple),
];

impl SeatKind {
    pub fn of_row(row: char) -> Option<SeatKind> {
        ROW_KINDS.iter().find(|(r, _)| *r == row).map(|(_, kind)| *kind)
    }

    pub fn label_vi(&self) -> &'static str {
        match self {
            Self::Regular => "Thường",
            Self::Vip => "VIP",
            Self::Couple => "Đôi",
        }
    }
}

/// A grid position, e.g. "F7". Used as the key for both the occupancy map
/// and the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    row: char,
    number: u8,
}

impl SeatId {
    pub fn new(row: char, number: u8) -> Result<Self, Error> {
        if SeatKind::of_row(row).is_none() || number == 0 || number > SEATS_PER_ROW {
            return Err(Error::InvalidSeat(format!("{}{}", row, number)));
        }
        Ok(Self { row, number })
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn kind(&self) -> SeatKind {
        // Rows are validated in `new`, so the lookup cannot miss.
        SeatKind::of_row(self.row).unwrap_or(SeatKind::Regular)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        let row = chars
            .next()
            .ok_or_else(|| Error::InvalidSeat(s.to_string()))?;
        let number: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidSeat(s.to_string()))?;
        SeatId::new(row, number).map_err(|_| Error::InvalidSeat(s.to_string()))
    }
}

/// All 140 seats in row-major order, the order the grid renders them.
pub fn all_seats() -> impl Iterator<Item = SeatId> {
    SEAT_ROWS.into_iter().flat_map(|row| {
        (1..=SEATS_PER_ROW).map(move |number| SeatId { row, number })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_classification() {
        for row in ['A', 'B', 'C', 'D', 'E'] {
            assert_eq!(SeatKind::of_row(row), Some(SeatKind::Regular), "row {}", row);
        }
        for row in ['F', 'G', 'H'] {
            assert_eq!(SeatKind::of_row(row), Some(SeatKind::Vip), "row {}", row);
        }
        for row in ['I', 'J'] {
            assert_eq!(SeatKind::of_row(row), Some(SeatKind::Couple), "row {}", row);
        }
        assert_eq!(SeatKind::of_row('K'), None);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let seat: SeatId = "F7".parse().unwrap();
        assert_eq!(seat.row(), 'F');
        assert_eq!(seat.number(), 7);
        assert_eq!(seat.to_string(), "F7");
        assert_eq!(seat.kind(), SeatKind::Vip);

        let seat: SeatId = "A14".parse().unwrap();
        assert_eq!(seat.to_string(), "A14");
    }

    #[test]
    fn test_rejects_out_of_grid_seats() {
        assert!("K1".parse::<SeatId>().is_err(), "row K is not in the grid");
        assert!("A0".parse::<SeatId>().is_err(), "seat numbers start at 1");
        assert!("A15".parse::<SeatId>().is_err(), "rows hold 14 seats");
        assert!("".parse::<SeatId>().is_err());
        assert!("7F".parse::<SeatId>().is_err());
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(all_seats().count(), 140);
        let aisle_split: Vec<_> = (1..=SEATS_PER_ROW)
            .filter(|n| *n <= AISLE_AFTER)
            .collect();
        assert_eq!(aisle_split.len(), 6, "left block holds 6 seats");
    }
}
