//! Cinema seat selection and booking flow demo.
//!
//! A single-window gpui app over the `booking-engine` core: pick a movie
//! and showtime from the listing, choose up to eight seats on the 10×14
//! grid, then walk the confirm → payment → success flow. All data is
//! in-memory mock data; the "payment" is a fixed-duration timer.

pub mod ui;
