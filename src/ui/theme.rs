//! Dark cinema palette for the booking UI.

#![allow(dead_code)]

// Background colors
pub const BACKGROUND: u32 = 0x0d1117;
pub const PANEL_BACKGROUND: u32 = 0x161b22;
pub const CARD_BACKGROUND: u32 = 0x21262d;
pub const BORDER_COLOR: u32 = 0x30363d;
pub const HOVER_COLOR: u32 = 0x3a4149;

// Text colors
pub const TEXT_COLOR: u32 = 0xe6edf3;
pub const TEXT_COLOR_SECONDARY: u32 = 0xc9d1d9;
pub const MUTED_TEXT: u32 = 0x8b949e;

// Action colors
pub const RED_ACCENT: u32 = 0xef4444;
pub const RED_ACCENT_HOVER: u32 = 0xdc2626;
pub const GREEN_ACCENT: u32 = 0x16a34a;
pub const GREEN_ACCENT_HOVER: u32 = 0x22c55e;
pub const GRAY_BUTTON: u32 = 0x4b5563;
pub const GRAY_BUTTON_HOVER: u32 = 0x6b7280;

// Seat colors
pub const SEAT_FREE: u32 = 0x4b5563;
pub const SEAT_FREE_HOVER: u32 = 0x6b7280;
pub const SEAT_OCCUPIED: u32 = 0xef4444;
pub const SEAT_SELECTED: u32 = 0x3b82f6;
pub const VIP_ACCENT: u32 = 0xeab308;
pub const SEAT_VIP_BG: u32 = 0x3d3008;
pub const SEAT_VIP_BG_HOVER: u32 = 0x574a1e;
pub const COUPLE_ACCENT: u32 = 0xec4899;
pub const SEAT_COUPLE_BG: u32 = 0x3d0f24;
pub const SEAT_COUPLE_BG_HOVER: u32 = 0x571e38;
