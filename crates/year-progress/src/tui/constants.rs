//! Shared constants for the dashboard layout and refresh timing.

/// Longest wait for input before the next redraw, in milliseconds.
pub const TICK_RATE_MS: u64 = 1000;
/// Canvas width in cells.
pub const CANVAS_WIDTH: u16 = 40;
/// Row of the title line.
pub const TITLE_ROW: u16 = 0;
/// Row of the "Today:" label; the day bar sits one row below.
pub const DAY_ROW: u16 = 2;
/// Row of the month label; the month bar sits one row below.
pub const MONTH_ROW: u16 = 4;
/// Row of the year label; the year bar sits one row below.
pub const YEAR_ROW: u16 = 6;
/// Row of the "Life:" label; the lifespan bar sits one row below.
pub const LIFESPAN_ROW: u16 = 9;
/// Column every label and bar starts at.
pub const LEFT_COLUMN: u16 = 0;
