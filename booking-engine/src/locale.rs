//! vi-VN presentation formatting for currency and dates, matching the
//! deployment locale. Presentation only; nothing here feeds back into
//! pricing or state.

use chrono::{Datelike, NaiveDate, Weekday};

/// "123456" -> "123.456 ₫" (dot-grouped đồng, no sub-unit).
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push_str(" ₫");
    grouped
}

fn weekday_vi(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Thứ Hai",
        Weekday::Tue => "Thứ Ba",
        Weekday::Wed => "Thứ Tư",
        Weekday::Thu => "Thứ Năm",
        Weekday::Fri => "Thứ Sáu",
        Weekday::Sat => "Thứ Bảy",
        Weekday::Sun => "Chủ Nhật",
    }
}

/// Long form used in headers: "Thứ Hai, ngày 4 tháng 8 năm 2026".
pub fn format_date_long_vi(date: NaiveDate) -> String {
    format!(
        "{}, ngày {} tháng {} năm {}",
        weekday_vi(date.weekday()),
        date.day(),
        date.month(),
        date.year()
    )
}

/// Short form used in the sidebar: "4/8/2026".
pub fn format_date_short_vi(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(100), "100 ₫");
        assert_eq!(format_vnd(100_000), "100.000 ₫");
        assert_eq!(format_vnd(150_000), "150.000 ₫");
        assert_eq!(format_vnd(1_250_000), "1.250.000 ₫");
    }

    #[test]
    fn test_date_formats() {
        // 2026-08-04 is a Tuesday.
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        assert_eq!(format_date_long_vi(date), "Thứ Ba, ngày 4 tháng 8 năm 2026");
        assert_eq!(format_date_short_vi(date), "4/8/2026");

        let sunday = NaiveDate::from_ymd_opt(2026, 8, 9).unwrap();
        assert!(format_date_long_vi(sunday).starts_with("Chủ Nhật"));
    }
}
