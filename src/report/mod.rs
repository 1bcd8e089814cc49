//! Text, JSON and CSV reports over the catalog and computed ladders

mod export;
mod format;
mod renderer;
mod snapshot;

pub use export::write_schedules;
pub use format::{format_amount, format_money, format_pct, format_pct_diff, rule, REPORT_WIDTH};
pub use renderer::ReportRenderer;
pub use snapshot::ReportSnapshot;

use crate::ladder::Term;

/// Principal used when none is given
pub const DEFAULT_PRINCIPAL: f64 = 50_000.0;

/// Institution the deep dive compares against the rest of the market
pub const DEFAULT_HOME_INSTITUTION: &str = "Navy Federal";

/// Ladder shown in full for the home institution
pub const DEFAULT_RECOMMENDED_STRATEGY: &str = "5_rung_classic";

/// Institutions carried into the strategy comparison
pub const DEFAULT_TOP_N: usize = 3;

/// Columns of the rate grid and the winners-by-term list
pub const GRID_TERMS: [Term; 6] = [
    Term::Months(3),
    Term::Months(6),
    Term::Years(1),
    Term::Years(2),
    Term::Years(3),
    Term::Years(5),
];

/// Terms compared in the home-institution deep dive
pub const HOME_COMPARISON_TERMS: [Term; 4] = [
    Term::Years(1),
    Term::Years(2),
    Term::Years(3),
    Term::Years(5),
];

/// Strategies run for each top-ranked institution
pub const COMPARISON_STRATEGIES: [&str; 3] = ["3_rung_short", "5_rung_classic", "barbell_strategy"];

/// What a report covers
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub principal: f64,
    pub home_institution: String,
    pub recommended_strategy: String,
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            home_institution: DEFAULT_HOME_INSTITUTION.to_string(),
            recommended_strategy: DEFAULT_RECOMMENDED_STRATEGY.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}
