/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Observation window the growth model was fit against, in years.
/// Fixed; projections always target this horizon.
pub const HORIZON_YEARS: i32 = 10;

/// Earliest accepted calendar year (4-digit years only).
pub const MIN_CALENDAR_YEAR: i32 = 1000;

/// Latest accepted calendar year.
pub const MAX_CALENDAR_YEAR: i32 = 9999;
