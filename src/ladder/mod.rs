//! Ladder calculation: terms, per-rung interest and maturity schedules

mod calculator;
mod result;
mod term;

pub use calculator::{build_ladder, calculate_ladder, LadderCalculator};
pub use result::{LadderResult, LadderRung, MaturityEntry, MATURITY_DATE_FORMAT};
pub use term::{Term, DAYS_PER_YEAR};
