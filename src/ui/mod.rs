pub mod seat_layout;
pub mod theme;
