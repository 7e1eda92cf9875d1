//! Seat selection and booking flow view.

use super::theme;
use gpui::{
    div, prelude::*, px, rgb, white, App, Context, Entity, FocusHandle, Focusable, IntoElement,
    MouseButton, MouseDownEvent, Render, Window,
};
use std::time::{Duration, Instant};

use booking_engine::{
    load_show, locale, seat_price, BookingSession, BookingStage, Delay, Error, MovieCatalog,
    SeatId, SeatKind, ShowSchedule, AISLE_AFTER, SEATS_PER_ROW, SEAT_ROWS, SHOWTIMES,
};

/// Simulated latencies. Both are `Delay`s polled each frame; navigating
/// away drops them, which cancels the pending completion.
const LOAD_DELAY: Duration = Duration::from_millis(500);
const PAYMENT_DELAY: Duration = Duration::from_secs(3);
const NOTICE_TTL: Duration = Duration::from_millis(3500);
const DEFAULT_SHOW_ID: &str = "show-1";

#[derive(Clone, Debug, PartialEq)]
enum Route {
    Listing,
    Seats {
        movie_id: String,
        show_id: String,
        schedule: Option<ShowSchedule>,
    },
}

/// Transient rejection banner. Expires on its own or when clicked; the
/// rejected action has already been dropped by the engine either way.
#[derive(Clone, Debug)]
struct Notice {
    id: usize,
    text: String,
    until: Instant,
}

pub struct SeatLayout {
    focus_handle: FocusHandle,

    catalog: MovieCatalog,
    route: Route,

    // Seat view state, populated once the load delay fires.
    session: Option<BookingSession>,
    not_found: Option<String>,
    load_delay: Option<Delay>,
    payment_delay: Option<Delay>,

    notices: Vec<Notice>,
    next_notice_id: usize,
}

impl Focusable for SeatLayout {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl SeatLayout {
    pub fn new(cx: &mut App, deep_link: Option<(String, Option<String>)>) -> Entity<Self> {
        cx.new(|cx| {
            let mut view = Self {
                focus_handle: cx.focus_handle(),
                catalog: MovieCatalog::builtin(),
                route: Route::Listing,
                session: None,
                not_found: None,
                load_delay: None,
                payment_delay: None,
                notices: Vec::new(),
                next_notice_id: 0,
            };

            if let Some((movie_id, show_id)) = deep_link {
                let show_id = show_id.unwrap_or_else(|| DEFAULT_SHOW_ID.to_string());
                view.navigate_to_seats(movie_id, show_id, None);
            }
            view
        })
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    fn navigate_to_seats(
        &mut self,
        movie_id: String,
        show_id: String,
        schedule: Option<ShowSchedule>,
    ) {
        self.route = Route::Seats {
            movie_id,
            show_id,
            schedule,
        };
        self.session = None;
        self.not_found = None;
        self.payment_delay = None;
        self.load_delay = Some(Delay::after(LOAD_DELAY));
    }

    fn navigate_to_listing(&mut self) {
        self.route = Route::Listing;
        // Dropping the delays here suppresses any pending load or payment
        // completion for the torn-down view.
        self.session = None;
        self.not_found = None;
        self.load_delay = None;
        self.payment_delay = None;
    }

    // ------------------------------------------------------------------
    // Frame tick: poll the simulated waits, expire notices
    // ------------------------------------------------------------------

    fn tick(&mut self) {
        if let Some(delay) = self.load_delay {
            if delay.is_ready() {
                self.load_delay = None;
                if let Route::Seats {
                    movie_id,
                    show_id,
                    schedule,
                } = self.route.clone()
                {
                    match load_show(&self.catalog, &movie_id, &show_id, schedule) {
                        Ok(ctx) => self.session = Some(BookingSession::new(ctx)),
                        Err(_) => self.not_found = Some(movie_id),
                    }
                }
            }
        }

        if let Some(delay) = self.payment_delay {
            if delay.is_ready() {
                self.payment_delay = None;
                if let Some(session) = &mut self.session {
                    // Payment always succeeds after the wait.
                    let _ = session.finish_payment();
                }
            }
        }

        let now = Instant::now();
        self.notices.retain(|n| now < n.until);
    }

    fn has_pending_frames(&self) -> bool {
        self.load_delay.is_some() || self.payment_delay.is_some() || !self.notices.is_empty()
    }

    // ------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------

    fn push_notice(&mut self, text: String) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id,
            text,
            until: Instant::now() + NOTICE_TTL,
        });
    }

    fn notice_text(err: &Error) -> String {
        match err {
            Error::SelectionLimit { .. } => {
                "Bạn chỉ có thể chọn tối đa 8 ghế trong một lần đặt".to_string()
            }
            Error::EmptySelection => "Vui lòng chọn ít nhất một ghế".to_string(),
            other => other.to_string(),
        }
    }

    fn handle_seat_click(&mut self, seat: SeatId) {
        if let Some(session) = &mut self.session {
            if let Err(err) = session.toggle_seat(seat) {
                let text = Self::notice_text(&err);
                self.push_notice(text);
            }
        }
    }

    fn handle_continue(&mut self) {
        if let Some(session) = &mut self.session {
            if let Err(err) = session.continue_to_confirm() {
                let text = Self::notice_text(&err);
                self.push_notice(text);
            }
        }
    }

    fn handle_back(&mut self) {
        if let Some(session) = &mut self.session {
            let _ = session.back_to_select();
        }
    }

    fn handle_pay(&mut self) {
        if let Some(session) = &mut self.session {
            if session.begin_payment().is_ok() {
                self.payment_delay = Some(Delay::after(PAYMENT_DELAY));
            }
        }
    }

    // ------------------------------------------------------------------
    // Shared bits
    // ------------------------------------------------------------------

    fn button(
        &self,
        label: impl Into<String>,
        bg: u32,
        bg_hover: u32,
        cx: &mut gpui::prelude::Context<Self>,
        on_click: impl Fn(&mut Self, &mut Context<Self>) + 'static,
    ) -> gpui::AnyElement {
        let label = label.into();
        div()
            .px_4()
            .py_2()
            .rounded_md()
            .bg(rgb(bg))
            .cursor_pointer()
            .hover(move |s| s.bg(rgb(bg_hover)))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>| {
                    on_click(this, cx);
                    cx.notify();
                }),
            )
            .child(
                div()
                    .flex()
                    .justify_center()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(white())
                    .child(label),
            )
            .into_any_element()
    }

    fn render_notices(&self, cx: &mut gpui::prelude::Context<Self>) -> Vec<gpui::AnyElement> {
        self.notices
            .iter()
            .map(|notice| {
                let id = notice.id;
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .px_3()
                    .py_2()
                    .bg(rgb(0x4a1d1d))
                    .border_1()
                    .border_color(rgb(theme::RED_ACCENT))
                    .rounded_md()
                    .cursor_pointer()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(
                            move |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>| {
                                this.notices.retain(|n| n.id != id);
                                cx.notify();
                            },
                        ),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(theme::TEXT_COLOR))
                            .child(notice.text.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(theme::MUTED_TEXT))
                            .child("(bấm để đóng)"),
                    )
                    .into_any_element()
            })
            .collect()
    }

    /// "", ".", "..", "..." cycling with the wait, the poor man's spinner.
    fn progress_dots(delay: Option<&Delay>) -> String {
        let elapsed_ms = delay.map(|d| d.elapsed().as_millis()).unwrap_or(0);
        let dots = (elapsed_ms / 300) % 4;
        ".".repeat(dots as usize)
    }

    // ------------------------------------------------------------------
    // Listing route
    // ------------------------------------------------------------------

    fn render_listing(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .pb_3()
                    .border_b_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("CGV Vincom Center"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(theme::MUTED_TEXT))
                            .child("Chọn phim và suất chiếu"),
                    ),
            )
            .children(
                self.catalog
                    .movies()
                    .iter()
                    .map(|movie| self.render_movie_card(movie.id.clone(), cx)),
            )
            .into_any_element()
    }

    fn render_movie_card(
        &self,
        movie_id: String,
        cx: &mut gpui::prelude::Context<Self>,
    ) -> gpui::AnyElement {
        let movie = match self.catalog.get(&movie_id) {
            Some(movie) => movie.clone(),
            None => return div().into_any_element(),
        };

        let open_id = movie_id.clone();
        div()
            .flex()
            .flex_row()
            .items_center()
            .gap_3()
            .p_3()
            .bg(rgb(theme::PANEL_BACKGROUND))
            .border_1()
            .border_color(rgb(theme::BORDER_COLOR))
            .rounded_lg()
            .child(
                // Poster placeholder.
                div()
                    .flex()
                    .items_center()
                    .justify_center()
                    .w(px(48.))
                    .h(px(64.))
                    .bg(rgb(theme::CARD_BACKGROUND))
                    .rounded_md()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(rgb(theme::MUTED_TEXT))
                            .child(movie.title.chars().next().unwrap_or('?').to_string()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .flex_1()
                    .cursor_pointer()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(
                            move |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>| {
                                // No schedule carried: the seat view
                                // synthesizes today 19:30.
                                this.navigate_to_seats(
                                    open_id.clone(),
                                    DEFAULT_SHOW_ID.to_string(),
                                    None,
                                );
                                cx.notify();
                            },
                        ),
                    )
                    .child(
                        div()
                            .text_base()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(movie.title.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(theme::MUTED_TEXT))
                            .child(format!("{} · {} phút", movie.genre, movie.duration_min)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .children(SHOWTIMES.iter().map(|time| {
                        let time = *time;
                        let show_movie_id = movie_id.clone();
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(rgb(theme::CARD_BACKGROUND))
                            .border_1()
                            .border_color(rgb(theme::RED_ACCENT))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgb(theme::RED_ACCENT_HOVER)))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(
                                    move |this,
                                          _: &MouseDownEvent,
                                          _: &mut Window,
                                          cx: &mut Context<Self>| {
                                        let show_id = format!(
                                            "{}-{}",
                                            show_movie_id,
                                            time.replace(':', "")
                                        );
                                        this.navigate_to_seats(
                                            show_movie_id.clone(),
                                            show_id,
                                            Some(ShowSchedule::today(time)),
                                        );
                                        cx.notify();
                                    },
                                ),
                            )
                            .child(div().text_xs().text_color(white()).child(time))
                    })),
            )
            .into_any_element()
    }

    // ------------------------------------------------------------------
    // Seat route
    // ------------------------------------------------------------------

    fn render_seats_route(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        if self.load_delay.is_some() {
            return self.render_loading();
        }
        if self.not_found.is_some() {
            return self.render_not_found(cx);
        }
        match &self.session {
            Some(session) if session.stage() == BookingStage::Success => self.render_success(cx),
            Some(_) => self.render_booking(cx),
            None => self.render_loading(),
        }
    }

    fn render_loading(&self) -> gpui::AnyElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .p_4()
            .min_h(px(320.))
            .child(
                div()
                    .text_xl()
                    .text_color(rgb(theme::RED_ACCENT))
                    .child(format!("●{}", Self::progress_dots(self.load_delay.as_ref()))),
            )
            .child(
                div()
                    .text_base()
                    .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                    .child("Đang tải sơ đồ rạp..."),
            )
            .into_any_element()
    }

    fn render_not_found(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p_4()
            .min_h(px(320.))
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .child("Không tìm thấy thông tin"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child("Phim hoặc suất chiếu không tồn tại."),
            )
            .child(self.button(
                "Quay lại danh sách phim",
                theme::RED_ACCENT,
                theme::RED_ACCENT_HOVER,
                cx,
                |this, _| this.navigate_to_listing(),
            ))
            .into_any_element()
    }

    fn render_booking(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        let Some(session) = &self.session else {
            return self.render_loading();
        };
        let stage = session.stage();
        let movie_title = session.movie().title.clone();
        let date_line = format!(
            "{} - {}",
            locale::format_date_long_vi(session.show().date),
            session.show().time
        );
        let place_line = format!("{} - {}", session.show().cinema, session.show().room);

        let main_panel = match stage {
            BookingStage::Select => self.render_select_panel(cx),
            BookingStage::Confirm => self.render_confirm_panel(),
            BookingStage::Payment => self.render_payment_panel(),
            BookingStage::Success => self.render_loading(), // handled by caller
        };

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                // Header: back button + movie and show metadata.
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_3()
                    .pb_3()
                    .border_b_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(theme::CARD_BACKGROUND))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgb(theme::HOVER_COLOR)))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(
                                    |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>| {
                                        this.navigate_to_listing();
                                        cx.notify();
                                    },
                                ),
                            )
                            .child(div().text_sm().text_color(white()).child("←")),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .child(movie_title),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .gap_4()
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::MUTED_TEXT))
                                            .child(date_line),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::MUTED_TEXT))
                                            .child(place_line),
                                    ),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .flex_1()
                            .p_4()
                            .bg(rgb(theme::PANEL_BACKGROUND))
                            .border_1()
                            .border_color(rgb(theme::BORDER_COLOR))
                            .rounded_lg()
                            .child(main_panel),
                    )
                    .child(self.render_sidebar(cx)),
            )
            .into_any_element()
    }

    // ------------------------------------------------------------------
    // Stage panels
    // ------------------------------------------------------------------

    fn render_select_panel(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        let Some(session) = &self.session else {
            return div().into_any_element();
        };
        let base_price = session.show().base_price;

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                // Screen bar.
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .w(px(420.))
                            .h(px(4.))
                            .bg(rgb(theme::TEXT_COLOR))
                            .rounded_md(),
                    )
                    .child(
                        div()
                            .text_xs()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(rgb(theme::MUTED_TEXT))
                            .child("MÀN HÌNH CHIẾU"),
                    ),
            )
            .child(self.render_legend())
            .child(self.render_seat_grid(cx))
            .child(self.render_price_cards(base_price))
            .into_any_element()
    }

    fn render_legend(&self) -> gpui::AnyElement {
        let swatch = |color: u32, label: &str| {
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap_2()
                .child(div().w(px(14.)).h(px(14.)).bg(rgb(color)).rounded_sm())
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                        .child(label.to_string()),
                )
                .into_any_element()
        };

        div()
            .flex()
            .flex_row()
            .flex_wrap()
            .justify_center()
            .gap_4()
            .child(swatch(theme::SEAT_FREE, "Trống"))
            .child(swatch(theme::SEAT_OCCUPIED, "Đã đặt"))
            .child(swatch(theme::SEAT_SELECTED, "Đang chọn"))
            .child(swatch(theme::VIP_ACCENT, "VIP (+50%)"))
            .child(swatch(theme::COUPLE_ACCENT, "Ghế đôi (+100%)"))
            .into_any_element()
    }

    fn render_seat_grid(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(SEAT_ROWS.iter().map(|&row| {
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(
                        div()
                            .w(px(24.))
                            .text_sm()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                            .child(row.to_string()),
                    )
                    .children((1..=AISLE_AFTER).map(|number| self.render_seat(row, number, cx)))
                    .child(div().w(px(24.)))
                    .children(
                        (AISLE_AFTER + 1..=SEATS_PER_ROW)
                            .map(|number| self.render_seat(row, number, cx)),
                    )
            }))
            .into_any_element()
    }

    fn render_seat(
        &self,
        row: char,
        number: u8,
        cx: &mut gpui::prelude::Context<Self>,
    ) -> gpui::AnyElement {
        let seat = match SeatId::new(row, number) {
            Ok(seat) => seat,
            Err(_) => return div().into_any_element(),
        };
        let Some(session) = &self.session else {
            return div().into_any_element();
        };

        let is_occupied = session.occupied().is_occupied(seat);
        let is_selected = session.is_selected(seat);

        let cell = div()
            .flex()
            .items_center()
            .justify_center()
            .w(px(30.))
            .h(px(28.))
            .rounded_sm()
            .text_xs()
            .font_weight(gpui::FontWeight::BOLD);

        let cell = if is_occupied {
            cell.bg(rgb(theme::SEAT_OCCUPIED)).text_color(white())
        } else if is_selected {
            cell.bg(rgb(theme::SEAT_SELECTED)).text_color(white())
        } else {
            match seat.kind() {
                SeatKind::Vip => cell
                    .bg(rgb(theme::SEAT_VIP_BG))
                    .border_1()
                    .border_color(rgb(theme::VIP_ACCENT))
                    .text_color(rgb(theme::VIP_ACCENT))
                    .hover(|s| s.bg(rgb(theme::SEAT_VIP_BG_HOVER))),
                SeatKind::Couple => cell
                    .bg(rgb(theme::SEAT_COUPLE_BG))
                    .border_1()
                    .border_color(rgb(theme::COUPLE_ACCENT))
                    .text_color(rgb(theme::COUPLE_ACCENT))
                    .hover(|s| s.bg(rgb(theme::SEAT_COUPLE_BG_HOVER))),
                SeatKind::Regular => cell
                    .bg(rgb(theme::SEAT_FREE))
                    .text_color(white())
                    .hover(|s| s.bg(rgb(theme::SEAT_FREE_HOVER))),
            }
        };

        let cell = if is_occupied {
            cell
        } else {
            cell.cursor_pointer().on_mouse_down(
                MouseButton::Left,
                cx.listener(
                    move |this, _: &MouseDownEvent, _: &mut Window, cx: &mut Context<Self>| {
                        this.handle_seat_click(seat);
                        cx.notify();
                    },
                ),
            )
        };

        cell.child(number.to_string()).into_any_element()
    }

    fn render_price_cards(&self, base_price: u64) -> gpui::AnyElement {
        let card = |accent: u32, label: &str, price: u64| {
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_1()
                .flex_1()
                .p_3()
                .bg(rgb(theme::CARD_BACKGROUND))
                .rounded_lg()
                .child(
                    div()
                        .text_xs()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child(label.to_string()),
                )
                .child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(rgb(accent))
                        .child(locale::format_vnd(price)),
                )
                .into_any_element()
        };

        div()
            .flex()
            .flex_row()
            .gap_3()
            .mt_2()
            .child(card(
                theme::TEXT_COLOR,
                "Ghế thường",
                SeatKind::Regular.price(base_price),
            ))
            .child(card(
                theme::VIP_ACCENT,
                "Ghế VIP",
                SeatKind::Vip.price(base_price),
            ))
            .child(card(
                theme::COUPLE_ACCENT,
                "Ghế đôi",
                SeatKind::Couple.price(base_price),
            ))
            .into_any_element()
    }

    fn render_confirm_panel(&self) -> gpui::AnyElement {
        let Some(session) = &self.session else {
            return div().into_any_element();
        };

        let seats = session
            .selected()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let row = |label: &str, value: String| {
            div()
                .flex()
                .flex_row()
                .justify_between()
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child(label.to_string()),
                )
                .child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(value),
                )
                .into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .py_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(BookingStage::Confirm.title_vi()),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .w(px(380.))
                    .p_4()
                    .bg(rgb(theme::CARD_BACKGROUND))
                    .rounded_lg()
                    .child(row("Phim:", session.movie().title.clone()))
                    .child(row(
                        "Ngày giờ:",
                        format!(
                            "{} - {}",
                            locale::format_date_long_vi(session.show().date),
                            session.show().time
                        ),
                    ))
                    .child(row("Rạp:", session.show().cinema.clone()))
                    .child(row("Ghế:", seats))
                    .child(
                        div()
                            .border_t_1()
                            .border_color(rgb(theme::BORDER_COLOR))
                            .pt_2()
                            .child(
                                div()
                                    .flex()
                                    .flex_row()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(rgb(theme::MUTED_TEXT))
                                            .child("Tổng tiền:"),
                                    )
                                    .child(
                                        div()
                                            .text_base()
                                            .font_weight(gpui::FontWeight::BOLD)
                                            .text_color(rgb(theme::RED_ACCENT))
                                            .child(locale::format_vnd(session.total_price())),
                                    ),
                            ),
                    ),
            )
            .into_any_element()
    }

    fn render_payment_panel(&self) -> gpui::AnyElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_3()
            .py_4()
            .min_h(px(240.))
            .child(
                div()
                    .text_xl()
                    .text_color(rgb(theme::RED_ACCENT))
                    .child(format!(
                        "●{}",
                        Self::progress_dots(self.payment_delay.as_ref())
                    )),
            )
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(BookingStage::Payment.title_vi()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child("Vui lòng không tắt ứng dụng trong quá trình thanh toán"),
            )
            .into_any_element()
    }

    fn render_success(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        let Some(session) = &self.session else {
            return self.render_loading();
        };

        let seats = session
            .selected()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let row = |label: &str, value: String| {
            div()
                .flex()
                .flex_row()
                .justify_between()
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(theme::MUTED_TEXT))
                        .child(label.to_string()),
                )
                .child(div().text_sm().child(value))
                .into_any_element()
        };

        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .p_4()
            .min_h(px(400.))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_center()
                    .w(px(64.))
                    .h(px(64.))
                    .bg(rgb(theme::GREEN_ACCENT))
                    .rounded_full()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(white())
                            .child("✓"),
                    ),
            )
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .child(BookingStage::Success.title_vi()),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .w(px(380.))
                    .p_4()
                    .bg(rgb(theme::CARD_BACKGROUND))
                    .rounded_lg()
                    .child(row("Phim:", session.movie().title.clone()))
                    .child(row(
                        "Ngày:",
                        locale::format_date_long_vi(session.show().date),
                    ))
                    .child(row("Giờ:", session.show().time.clone()))
                    .child(row("Ghế:", seats))
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .justify_between()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child("Tổng:"),
                            )
                            .child(
                                div()
                                    .text_base()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::GREEN_ACCENT_HOVER))
                                    .child(locale::format_vnd(session.total_price())),
                            ),
                    ),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(theme::MUTED_TEXT))
                    .child("Vé điện tử đã được gửi vào email của bạn. Vui lòng có mặt tại rạp ít nhất 15 phút trước giờ chiếu."),
            )
            .child(self.button(
                "Về trang chủ",
                theme::RED_ACCENT,
                theme::RED_ACCENT_HOVER,
                cx,
                |this, _| this.navigate_to_listing(),
            ))
            .into_any_element()
    }

    // ------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------

    fn render_sidebar(&self, cx: &mut gpui::prelude::Context<Self>) -> gpui::AnyElement {
        let Some(session) = &self.session else {
            return div().into_any_element();
        };
        let base_price = session.show().base_price;
        let stage = session.stage();
        let has_selection = !session.selected().is_empty();

        div()
            .flex()
            .flex_col()
            .gap_4()
            .min_w(px(300.))
            .p_4()
            .bg(rgb(theme::PANEL_BACKGROUND))
            .border_1()
            .border_color(rgb(theme::BORDER_COLOR))
            .rounded_lg()
            .child(
                div()
                    .text_base()
                    .font_weight(gpui::FontWeight::BOLD)
                    .child("Thông tin đặt vé"),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_3()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_center()
                            .w(px(56.))
                            .h(px(80.))
                            .bg(rgb(theme::CARD_BACKGROUND))
                            .rounded_md()
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(
                                        session
                                            .movie()
                                            .title
                                            .chars()
                                            .next()
                                            .unwrap_or('?')
                                            .to_string(),
                                    ),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(session.movie().title.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(session.show().cinema.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child(session.show().room.clone()),
                            ),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .justify_between()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child("Ngày:"),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .child(locale::format_date_short_vi(session.show().date)),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .justify_between()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child("Giờ:"),
                            )
                            .child(div().text_xs().child(session.show().time.clone())),
                    ),
            )
            .when(has_selection, |d| {
                d.child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_2()
                        .child(
                            div()
                                .text_sm()
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .child("Ghế đã chọn:"),
                        )
                        .child(
                            div().flex().flex_row().flex_wrap().gap_1().children(
                                session.selected().iter().map(|seat| {
                                    div()
                                        .px_2()
                                        .py_1()
                                        .bg(rgb(theme::SEAT_SELECTED))
                                        .rounded_md()
                                        .child(
                                            div()
                                                .text_xs()
                                                .text_color(white())
                                                .child(seat.to_string()),
                                        )
                                }),
                            ),
                        )
                        .child(div().flex().flex_col().gap_1().children(
                            session.selected().iter().map(|seat| {
                                div()
                                    .flex()
                                    .flex_row()
                                    .justify_between()
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                                            .child(format!(
                                                "{} ({})",
                                                seat,
                                                seat.kind().label_vi()
                                            )),
                                    )
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(rgb(theme::TEXT_COLOR_SECONDARY))
                                            .child(locale::format_vnd(seat_price(
                                                *seat, base_price,
                                            ))),
                                    )
                            }),
                        )),
                )
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .border_t_1()
                    .border_color(rgb(theme::BORDER_COLOR))
                    .pt_3()
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(theme::MUTED_TEXT))
                                    .child("Tổng tiền:"),
                            )
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(rgb(theme::RED_ACCENT))
                                    .child(locale::format_vnd(session.total_price())),
                            ),
                    )
                    .when(stage == BookingStage::Select, |d| {
                        let (label, bg, bg_hover) = if has_selection {
                            ("Tiếp tục", theme::RED_ACCENT, theme::RED_ACCENT_HOVER)
                        } else {
                            (
                                "Chọn ghế để tiếp tục",
                                theme::GRAY_BUTTON,
                                theme::GRAY_BUTTON_HOVER,
                            )
                        };
                        d.child(self.button(label, bg, bg_hover, cx, |this, _| {
                            this.handle_continue()
                        }))
                    })
                    .when(stage == BookingStage::Confirm, |d| {
                        d.child(self.button(
                            "Thanh toán",
                            theme::GREEN_ACCENT,
                            theme::GREEN_ACCENT_HOVER,
                            cx,
                            |this, _| this.handle_pay(),
                        ))
                        .child(self.button(
                            "Quay lại",
                            theme::GRAY_BUTTON,
                            theme::GRAY_BUTTON_HOVER,
                            cx,
                            |this, _| this.handle_back(),
                        ))
                    }),
            )
            .into_any_element()
    }
}

impl Render for SeatLayout {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut gpui::prelude::Context<Self>,
    ) -> impl IntoElement {
        self.tick();

        if self.has_pending_frames() {
            cx.notify();
        }

        let body = match &self.route {
            Route::Listing => self.render_listing(cx),
            Route::Seats { .. } => self.render_seats_route(cx),
        };

        div()
            .id("main-scroll-container")
            .flex()
            .flex_col()
            .size_full()
            .overflow_y_scroll()
            .bg(rgb(theme::BACKGROUND))
            .text_color(rgb(theme::TEXT_COLOR))
            .p_4()
            .gap_4()
            .children(self.render_notices(cx))
            .child(body)
    }
}
