//! Date arithmetic: day counts and year fractions.

pub mod day_count;

pub use day_count::{DayCountConvention, year_fraction};
