use crate::catalog::{Movie, ShowContext, ShowDetails};
use crate::error::{Error, Result};
use crate::flow::BookingStage;
use crate::occupancy::{Occupant, OccupiedSeats};
use crate::pricing;
use crate::seat::SeatId;

/// Upper bound on seats per booking.
pub const MAX_SEATS_PER_BOOKING: usize = 8;

/// Outcome of a seat toggle. `Blocked` (occupied seat) is a silent no-op;
/// hitting the selection limit is an error so the caller can surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    Blocked,
}

/// One viewer's pass through the purchase flow. Owns its own selection and
/// occupancy copies; nothing survives the session.
#[derive(Debug, Clone)]
pub struct BookingSession {
    movie: Movie,
    show: ShowDetails,
    selected: Vec<SeatId>,
    occupied: OccupiedSeats,
    stage: BookingStage,
}

impl BookingSession {
    pub fn new(ctx: ShowContext) -> Self {
        Self {
            movie: ctx.movie,
            show: ctx.show,
            selected: Vec::new(),
            occupied: ctx.occupied,
            stage: BookingStage::Select,
        }
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn show(&self) -> &ShowDetails {
        &self.show
    }

    /// Selected seats in the order they were picked.
    pub fn selected(&self) -> &[SeatId] {
        &self.selected
    }

    pub fn occupied(&self) -> &OccupiedSeats {
        &self.occupied
    }

    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    pub fn is_selected(&self, seat: SeatId) -> bool {
        self.selected.contains(&seat)
    }

    pub fn total_price(&self) -> u64 {
        pricing::total_price(&self.selected, self.show.base_price)
    }

    /// Select or deselect one seat. Occupied seats are never selectable;
    /// deselecting keeps the order of the remaining seats.
    pub fn toggle_seat(&mut self, seat: SeatId) -> Result<Toggle> {
        if self.occupied.is_occupied(seat) {
            return Ok(Toggle::Blocked);
        }
        if let Some(pos) = self.selected.iter().position(|s| *s == seat) {
            self.selected.remove(pos);
            return Ok(Toggle::Removed);
        }
        if self.selected.len() >= MAX_SEATS_PER_BOOKING {
            return Err(Error::SelectionLimit {
                max: MAX_SEATS_PER_BOOKING,
            });
        }
        self.selected.push(seat);
        Ok(Toggle::Added)
    }

    /// select -> confirm, guarded on a non-empty selection.
    pub fn continue_to_confirm(&mut self) -> Result<()> {
        if self.stage != BookingStage::Select {
            return Err(Error::InvalidTransition {
                from: self.stage,
                action: "continue",
            });
        }
        if self.selected.is_empty() {
            return Err(Error::EmptySelection);
        }
        self.stage = BookingStage::Confirm;
        Ok(())
    }

    /// confirm -> select; the selection is preserved.
    pub fn back_to_select(&mut self) -> Result<()> {
        if self.stage != BookingStage::Confirm {
            return Err(Error::InvalidTransition {
                from: self.stage,
                action: "back",
            });
        }
        self.stage = BookingStage::Select;
        Ok(())
    }

    /// confirm -> payment, unconditional. The caller owns the payment wait.
    pub fn begin_payment(&mut self) -> Result<()> {
        if self.stage != BookingStage::Confirm {
            return Err(Error::InvalidTransition {
                from: self.stage,
                action: "pay",
            });
        }
        self.stage = BookingStage::Payment;
        Ok(())
    }

    /// payment -> success. Writes every selected seat into the occupancy
    /// map under the current-user marker; the only occupancy mutation in
    /// the flow.
    pub fn finish_payment(&mut self) -> Result<()> {
        if self.stage != BookingStage::Payment {
            return Err(Error::InvalidTransition {
                from: self.stage,
                action: "finish payment",
            });
        }
        for seat in &self.selected {
            self.occupied.occupy(*seat, Occupant::current_user());
        }
        self.stage = BookingStage::Success;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_show, MovieCatalog};

    fn session() -> BookingSession {
        let catalog = MovieCatalog::builtin();
        let ctx = load_show(&catalog, "m1", "show-1", None).unwrap();
        BookingSession::new(ctx)
    }

    fn seat(id: &str) -> SeatId {
        id.parse().unwrap()
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut s = session();
        s.toggle_seat(seat("B1")).unwrap();
        s.toggle_seat(seat("B2")).unwrap();

        assert_eq!(s.toggle_seat(seat("C5")).unwrap(), Toggle::Added);
        assert_eq!(s.toggle_seat(seat("C5")).unwrap(), Toggle::Removed);
        assert_eq!(
            s.selected(),
            &[seat("B1"), seat("B2")],
            "toggling twice restores content and order"
        );
    }

    #[test]
    fn test_deselect_preserves_order_of_rest() {
        let mut s = session();
        for id in ["B1", "B2", "B3"] {
            s.toggle_seat(seat(id)).unwrap();
        }
        s.toggle_seat(seat("B2")).unwrap();
        assert_eq!(s.selected(), &[seat("B1"), seat("B3")]);
    }

    #[test]
    fn test_occupied_seat_is_never_selectable() {
        let mut s = session();
        // A3 is in the mock occupancy table.
        assert_eq!(s.toggle_seat(seat("A3")).unwrap(), Toggle::Blocked);
        assert!(s.selected().is_empty(), "blocked toggle leaves state unchanged");
        assert_eq!(s.toggle_seat(seat("A3")).unwrap(), Toggle::Blocked);
        assert!(s.selected().is_empty());
    }

    #[test]
    fn test_selection_limit_boundary() {
        let mut s = session();
        for n in 1..=8 {
            s.toggle_seat(SeatId::new('D', n).unwrap()).unwrap();
        }
        assert_eq!(s.selected().len(), 8, "eighth seat is accepted");

        let err = s.toggle_seat(seat("E1")).unwrap_err();
        assert_eq!(err, Error::SelectionLimit { max: 8 });
        assert_eq!(s.selected().len(), 8, "ninth seat is rejected");

        // Deselecting one of the eight is still allowed.
        assert_eq!(s.toggle_seat(seat("D1")).unwrap(), Toggle::Removed);
        assert_eq!(s.selected().len(), 7);
    }

    #[test]
    fn test_pricing_scenario() {
        let mut s = session();
        assert_eq!(s.show().base_price, 100_000);

        assert_eq!(s.toggle_seat(seat("A3")).unwrap(), Toggle::Blocked);
        assert_eq!(s.total_price(), 0);

        s.toggle_seat(seat("B1")).unwrap();
        assert_eq!(s.total_price(), 100_000);

        s.toggle_seat(seat("F1")).unwrap();
        assert_eq!(s.total_price(), 250_000);

        s.toggle_seat(seat("I1")).unwrap();
        assert_eq!(s.total_price(), 450_000);
    }

    #[test]
    fn test_continue_requires_selection() {
        let mut s = session();
        let err = s.continue_to_confirm().unwrap_err();
        assert_eq!(err, Error::EmptySelection);
        assert_eq!(s.stage(), BookingStage::Select, "rejected continue does not advance");

        s.toggle_seat(seat("B1")).unwrap();
        s.continue_to_confirm().unwrap();
        assert_eq!(s.stage(), BookingStage::Confirm);
    }

    #[test]
    fn test_back_preserves_selection() {
        let mut s = session();
        s.toggle_seat(seat("B1")).unwrap();
        s.toggle_seat(seat("F2")).unwrap();
        s.continue_to_confirm().unwrap();

        s.back_to_select().unwrap();
        assert_eq!(s.stage(), BookingStage::Select);
        assert_eq!(s.selected(), &[seat("B1"), seat("F2")]);
    }

    #[test]
    fn test_payment_writes_occupancy() {
        let mut s = session();
        s.toggle_seat(seat("B1")).unwrap();
        s.toggle_seat(seat("I10")).unwrap();
        s.continue_to_confirm().unwrap();
        s.begin_payment().unwrap();
        assert_eq!(s.stage(), BookingStage::Payment);

        s.finish_payment().unwrap();
        assert_eq!(s.stage(), BookingStage::Success);
        for id in ["B1", "I10"] {
            assert!(s.occupied().is_occupied(seat(id)), "{} is booked", id);
            assert!(
                s.occupied().occupant(seat(id)).unwrap().is_current_user(),
                "{} carries the current-user marker",
                id
            );
        }
    }

    #[test]
    fn test_out_of_stage_calls_are_rejected() {
        let mut s = session();
        assert!(matches!(
            s.back_to_select(),
            Err(Error::InvalidTransition { .. })
        ));
        assert!(matches!(
            s.begin_payment(),
            Err(Error::InvalidTransition { .. })
        ));
        assert!(matches!(
            s.finish_payment(),
            Err(Error::InvalidTransition { .. })
        ));
        assert_eq!(s.stage(), BookingStage::Select, "rejections leave the stage alone");
    }

    #[test]
    fn test_success_is_terminal() {
        let mut s = session();
        s.toggle_seat(seat("B1")).unwrap();
        s.continue_to_confirm().unwrap();
        s.begin_payment().unwrap();
        s.finish_payment().unwrap();

        assert!(matches!(
            s.continue_to_confirm(),
            Err(Error::InvalidTransition { .. })
        ));
        assert!(matches!(
            s.finish_payment(),
            Err(Error::InvalidTransition { .. })
        ));
    }
}
