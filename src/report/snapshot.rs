//! Machine-readable report data for `--json`

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::catalog::{Catalog, Institution, LadderStrategy};
use crate::comparison::{
    best_rate_by_term, compare_strategies, rank_institutions, rate_differentials,
    RankedInstitution, StrategyComparison, TermDifferential, TermWinner,
};
use crate::error::Result;
use crate::ladder::{LadderCalculator, LadderResult};
use super::{ReportOptions, COMPARISON_STRATEGIES, GRID_TERMS, HOME_COMPARISON_TERMS};

/// Everything the text report shows, computed up front
#[derive(Debug, Serialize)]
pub struct ReportSnapshot<'a> {
    pub principal: f64,
    pub generated_at: NaiveDateTime,
    pub institutions: &'a [Institution],
    pub strategies: &'a [LadderStrategy],
    pub winners: Vec<TermWinner<'a>>,
    /// All institutions, best composite score first
    pub rankings: Vec<RankedInstitution<'a>>,
    pub comparisons: Vec<StrategyComparison<'a>>,
    pub home_institution: String,
    pub differentials: Vec<TermDifferential<'a>>,
    pub recommended_ladder: LadderResult<'a>,
}

impl<'a> ReportSnapshot<'a> {
    pub fn build(
        catalog: &'a Catalog,
        options: &ReportOptions,
        generated_at: NaiveDateTime,
    ) -> Result<Self> {
        let calculator = LadderCalculator::new(catalog);
        let principal = options.principal;

        let rankings = rank_institutions(catalog, catalog.institutions().len());
        let top: Vec<&str> = rankings
            .iter()
            .take(options.top_n)
            .map(|r| r.institution)
            .collect();
        let comparisons =
            compare_strategies(&calculator, &top, &COMPARISON_STRATEGIES, principal, generated_at)?;

        let home = options.home_institution.as_str();
        let differentials = rate_differentials(catalog, home, &HOME_COMPARISON_TERMS)?;
        let recommended_ladder =
            calculator.calculate_at(home, &options.recommended_strategy, principal, generated_at)?;

        Ok(Self {
            principal,
            generated_at,
            institutions: catalog.institutions(),
            strategies: catalog.strategies(),
            winners: best_rate_by_term(catalog, &GRID_TERMS),
            rankings,
            comparisons,
            home_institution: home.to_string(),
            differentials,
            recommended_ladder,
        })
    }
}
