use std::collections::HashMap;

use crate::seat::SeatId;

/// Opaque occupant marker. Presence in the map is what makes a seat
/// occupied; the marker itself carries no further meaning beyond the
/// current-user sentinel written at payment completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant(String);

impl Occupant {
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }

    pub fn current_user() -> Self {
        Self("current_user".to_string())
    }

    pub fn is_current_user(&self) -> bool {
        self.0 == "current_user"
    }
}

/// Seats unavailable for selection. Seeded once from the mock table below;
/// mutated only when the simulated payment completes.
#[derive(Debug, Clone, Default)]
pub struct OccupiedSeats {
    seats: HashMap<SeatId, Occupant>,
}

// Stand-in for a booking service response.
const MOCK_OCCUPIED: [(&str, &str); 17] = [
    ("A3", "user1"),
    ("A4", "user1"),
    ("A5", "user1"),
    ("B8", "user2"),
    ("B9", "user2"),
    ("C12", "user3"),
    ("C13", "user3"),
    ("F5", "user4"),
    ("F6", "user4"),
    ("F7", "user4"),
    ("F8", "user4"),
    ("G10", "user5"),
    ("G11", "user5"),
    ("I3", "user6"),
    ("I4", "user6"),
    ("J7", "user7"),
    ("J8", "user7"),
];

impl OccupiedSeats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock() -> Self {
        let seats = MOCK_OCCUPIED
            .iter()
            .map(|(seat, user)| {
                let seat = seat.parse().expect("mock seat within grid");
                (seat, Occupant::new(*user))
            })
            .collect();
        Self { seats }
    }

    pub fn is_occupied(&self, seat: SeatId) -> bool {
        self.seats.contains_key(&seat)
    }

    pub fn occupant(&self, seat: SeatId) -> Option<&Occupant> {
        self.seats.get(&seat)
    }

    pub fn occupy(&mut self, seat: SeatId, occupant: Occupant) {
        self.seats.insert(seat, occupant);
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
