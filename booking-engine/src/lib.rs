//! Seat grid, pricing, and booking flow core for the cinebook demo.
//!
//! # Example
//! ```rust
//! use booking_engine::{load_show, BookingSession, BookingStage, MovieCatalog};
//!
//! let catalog = MovieCatalog::builtin();
//! let ctx = load_show(&catalog, "m1", "show-1", None).unwrap();
//! let mut session = BookingSession::new(ctx);
//!
//! session.toggle_seat("B1".parse().unwrap()).unwrap();
//! session.continue_to_confirm().unwrap();
//! session.begin_payment().unwrap();
//! session.finish_payment().unwrap();
//!
//! assert_eq!(session.stage(), BookingStage::Success);
//! ```

mod catalog;
mod error;
mod flow;
pub mod locale;
mod occupancy;
mod pricing;
mod seat;
mod session;
mod timer;

pub use catalog::{
    load_show, Movie, MovieCatalog, ShowContext, ShowDetails, ShowSchedule, DEFAULT_BASE_PRICE,
    DEFAULT_CINEMA, DEFAULT_ROOM, DEFAULT_SHOW_TIME, SHOWTIMES,
};
pub use error::{Error, Result};
pub use flow::BookingStage;
pub use occupancy::{Occupant, OccupiedSeats};
pub use pricing::{seat_price, total_price};
pub use seat::{all_seats, SeatId, SeatKind, AISLE_AFTER, ROW_KINDS, SEATS_PER_ROW, SEAT_ROWS};
pub use session::{BookingSession, Toggle, MAX_SEATS_PER_BOOKING};
pub use timer::Delay;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_purchase_flow() {
        let catalog = MovieCatalog::builtin();
        let ctx = load_show(&catalog, "m3", "show-2", None).unwrap();
        let mut session = BookingSession::new(ctx);

        let picks: Vec<SeatId> = ["E7", "F9", "J10"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        for seat in &picks {
            session.toggle_seat(*seat).unwrap();
        }
        // E7 regular + F9 vip + J10 couple at the default base price.
        assert_eq!(session.total_price(), 450_000);

        session.continue_to_confirm().unwrap();
        session.back_to_select().unwrap();
        assert_eq!(session.selected(), picks.as_slice());

        session.continue_to_confirm().unwrap();
        session.begin_payment().unwrap();
        session.finish_payment().unwrap();

        assert_eq!(session.stage(), BookingStage::Success);
        for seat in &picks {
            assert!(session.occupied().is_occupied(*seat));
        }
    }

    #[test]
    fn test_sidebar_and_grid_agree_on_prices() {
        // Both call sites go through seat_price; summing per-seat lines
        // must reproduce the displayed total.
        let catalog = MovieCatalog::builtin();
        let ctx = load_show(&catalog, "m1", "show-1", None).unwrap();
        let mut session = BookingSession::new(ctx);

        for id in ["A1", "F14", "I9", "C6"] {
            session.toggle_seat(id.parse().unwrap()).unwrap();
        }

        let base = session.show().base_price;
        let line_sum: u64 = session
            .selected()
            .iter()
            .map(|s| seat_price(*s, base))
            .sum();
        assert_eq!(line_sum, session.total_price());
        assert_eq!(line_sum, total_price(session.selected(), base));
    }
}
