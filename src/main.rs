//! Cinebook demo application
//!
//! Seat selection and ticket purchase flow over in-memory mock data:
//! - movie listing with per-showtime navigation
//! - 10×14 seat grid with VIP and couple rows
//! - select → confirm → payment → success flow with simulated waits
//!
//! Optional arguments deep-link straight into the seat view:
//! `cinebook-demo <movie_id> [show_id]`

use gpui::{Application, WindowOptions};
use ui::seat_layout::SeatLayout;

mod ui;

fn main() {
    let mut args = std::env::args().skip(1);
    let deep_link = args.next().map(|movie_id| (movie_id, args.next()));

    Application::new().run(move |cx| {
        cx.open_window(WindowOptions::default(), |_, cx| {
            SeatLayout::new(cx, deep_link)
        })
        .ok();
    });
}
