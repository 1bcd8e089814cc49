//! Cross-institution comparisons: per-term winners, composite ranking,
//! home-institution rate differentials and strategy grids
//!
//! All selection is order-stable: when two institutions tie, the one
//! declared first in the catalog wins or ranks higher.

use chrono::NaiveDateTime;
use log::debug;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{LadderError, Result};
use crate::ladder::{LadderCalculator, LadderResult, Term};

/// Highest published rate for a term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermWinner<'a> {
    pub term: Term,
    pub institution: &'a str,
    pub rate: f64,
}

/// For each term, the institution paying the most.
///
/// An institution that does not quote a term counts as 0%. Terms are
/// skipped only when the catalog has no institutions.
pub fn best_rate_by_term<'a>(catalog: &'a Catalog, terms: &[Term]) -> Vec<TermWinner<'a>> {
    terms
        .iter()
        .filter_map(|&term| {
            let mut best: Option<TermWinner<'a>> = None;
            for inst in catalog.institutions() {
                let rate = inst.rate(term).unwrap_or(0.0);
                if best.as_ref().map_or(true, |b| rate > b.rate) {
                    best = Some(TermWinner {
                        term,
                        institution: &inst.name,
                        rate,
                    });
                }
            }
            best
        })
        .collect()
}

/// Institution with its composite score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedInstitution<'a> {
    pub institution: &'a str,
    /// Sum of every published rate
    pub composite_score: f64,
}

/// Top `n` institutions by composite score, descending
pub fn rank_institutions(catalog: &Catalog, n: usize) -> Vec<RankedInstitution<'_>> {
    let mut ranked: Vec<RankedInstitution<'_>> = catalog
        .institutions()
        .iter()
        .map(|inst| RankedInstitution {
            institution: &inst.name,
            composite_score: inst.composite_score(),
        })
        .collect();

    // stable sort keeps catalog order among equal scores
    ranked.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    ranked.truncate(n);
    ranked
}

/// How the home institution's rate compares to a competitor's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateStanding {
    /// Home pays more
    Advantage,
    /// Home pays less
    Disadvantage,
    Parity,
}

impl RateStanding {
    pub fn classify(difference: f64) -> Self {
        if difference > 0.0 {
            RateStanding::Advantage
        } else if difference < 0.0 {
            RateStanding::Disadvantage
        } else {
            RateStanding::Parity
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorRate<'a> {
    pub institution: &'a str,
    pub rate: f64,
    /// Home rate minus competitor rate, in percentage points
    pub difference: f64,
    pub standing: RateStanding,
}

/// Home rate against every competitor for one term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermDifferential<'a> {
    pub term: Term,
    pub home_rate: f64,
    pub competitors: Vec<CompetitorRate<'a>>,
}

/// Rate differences between `home` and each other institution.
///
/// Every institution must quote every requested term; comparisons use
/// published rates only, never the ladder fallback.
pub fn rate_differentials<'a>(
    catalog: &'a Catalog,
    home: &str,
    terms: &[Term],
) -> Result<Vec<TermDifferential<'a>>> {
    let home_inst = catalog.institution(home)?;
    let quoted = |name: &str, rate: Option<f64>, term: Term| {
        rate.ok_or_else(|| LadderError::MissingRate {
            institution: name.to_string(),
            term: term.to_string(),
        })
    };

    terms
        .iter()
        .map(|&term| {
            let home_rate = quoted(&home_inst.name, home_inst.rate(term), term)?;

            let competitors = catalog
                .institutions()
                .iter()
                .filter(|inst| inst.name != home_inst.name)
                .map(|inst| {
                    let rate = quoted(&inst.name, inst.rate(term), term)?;
                    let difference = home_rate - rate;
                    Ok(CompetitorRate {
                        institution: inst.name.as_str(),
                        rate,
                        difference,
                        standing: RateStanding::classify(difference),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(TermDifferential {
                term,
                home_rate,
                competitors,
            })
        })
        .collect()
}

/// One cell of the institution x strategy grid
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison<'a> {
    pub ladder: LadderResult<'a>,
    /// Longest rung of the strategy, in years
    pub years_to_maturity: f64,
}

/// Ladders for every (institution, strategy) pair, institution-major
pub fn compare_strategies<'a>(
    calculator: &LadderCalculator<'a>,
    institutions: &[&str],
    strategies: &[&str],
    principal: f64,
    as_of: NaiveDateTime,
) -> Result<Vec<StrategyComparison<'a>>> {
    let mut grid = Vec::with_capacity(institutions.len() * strategies.len());

    for institution in institutions {
        for strategy in strategies {
            let ladder = calculator.calculate_at(institution, strategy, principal, as_of)?;
            let years_to_maturity = ladder.strategy.longest_term_years();
            grid.push(StrategyComparison {
                ladder,
                years_to_maturity,
            });
        }
    }

    debug!("Compared {} ladders", grid.len());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Institution, InstitutionType};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn institution(name: &str, one_year: f64) -> Institution {
        Institution::new(
            name,
            InstitutionType::OnlineBank,
            500.0,
            &[(Term::Months(6), 4.5), (Term::Years(1), one_year)],
            &[],
            "",
        )
    }

    #[test]
    fn test_winner_is_highest_rate() {
        let catalog = Catalog::new(
            vec![institution("Lower", 5.15), institution("Higher", 5.20)],
            vec![],
        );
        let winners = best_rate_by_term(&catalog, &[Term::Years(1)]);
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].institution, "Higher");
        assert_relative_eq!(winners[0].rate, 5.20);
    }

    #[test]
    fn test_winner_tie_goes_to_first() {
        let catalog = Catalog::new(
            vec![institution("First", 5.0), institution("Second", 5.0)],
            vec![],
        );
        let winners = best_rate_by_term(&catalog, &[Term::Months(6), Term::Years(1)]);
        assert!(winners.iter().all(|w| w.institution == "First"));
    }

    #[test]
    fn test_market_winners() {
        let catalog = Catalog::market_rates();
        let terms = [Term::Months(3), Term::Years(1), Term::Years(5)];
        let winners = best_rate_by_term(&catalog, &terms);
        assert_eq!(winners[0].institution, "Vanguard Brokerage");
        assert_eq!(winners[1].institution, "Vanguard Brokerage");
        assert_eq!(winners[2].institution, "Pentagon Federal");
    }

    #[test]
    fn test_empty_catalog_has_no_winners() {
        let catalog = Catalog::new(vec![], vec![]);
        assert!(best_rate_by_term(&catalog, &[Term::Years(1)]).is_empty());
    }

    #[test]
    fn test_rank_institutions() {
        let catalog = Catalog::market_rates();
        let top = rank_institutions(&catalog, 3);
        let names: Vec<&str> = top.iter().map(|r| r.institution).collect();
        assert_eq!(names, vec!["Vanguard Brokerage", "Pentagon Federal", "Navy Federal"]);
        assert!(top[0].composite_score >= top[1].composite_score);

        assert_eq!(rank_institutions(&catalog, 10).len(), 6);
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let catalog = Catalog::new(
            vec![institution("A", 5.0), institution("B", 5.0), institution("C", 5.1)],
            vec![],
        );
        let names: Vec<&str> = rank_institutions(&catalog, 3)
            .iter()
            .map(|r| r.institution)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_differentials() {
        let catalog = Catalog::market_rates();
        let terms = [Term::Years(1), Term::Years(5)];
        let diffs = rate_differentials(&catalog, "Navy Federal", &terms).unwrap();
        assert_eq!(diffs.len(), 2);

        let one_year = &diffs[0];
        assert_relative_eq!(one_year.home_rate, 5.15);
        assert_eq!(one_year.competitors.len(), 5);
        assert!(one_year.competitors.iter().all(|c| c.institution != "Navy Federal"));

        let ally = &one_year.competitors[0];
        assert_eq!(ally.institution, "Ally Bank");
        assert_relative_eq!(ally.difference, 0.15, epsilon = 1e-9);
        assert_eq!(ally.standing, RateStanding::Advantage);

        fn competitor<'a>(diff: &TermDifferential<'a>, name: &str) -> CompetitorRate<'a> {
            diff.competitors
                .iter()
                .find(|c| c.institution == name)
                .cloned()
                .unwrap()
        }
        let penfed = competitor(one_year, "Pentagon Federal");
        assert_eq!(penfed.standing, RateStanding::Disadvantage);

        // Vanguard matches Navy Federal at 5.45% for 5yr
        let vanguard = competitor(&diffs[1], "Vanguard Brokerage");
        assert_eq!(vanguard.standing, RateStanding::Parity);
    }

    #[test]
    fn test_differentials_require_quotes() {
        let catalog = Catalog::new(
            vec![institution("Home", 5.0), institution("Other", 4.0)],
            vec![],
        );
        assert!(matches!(
            rate_differentials(&catalog, "Home", &[Term::Years(3)]),
            Err(LadderError::MissingRate { .. })
        ));
        assert!(matches!(
            rate_differentials(&catalog, "Nowhere", &[Term::Years(1)]),
            Err(LadderError::UnknownInstitution(_))
        ));
    }

    #[test]
    fn test_compare_strategies_grid() {
        let catalog = Catalog::market_rates();
        let calculator = LadderCalculator::new(&catalog);
        let as_of = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

        let grid = compare_strategies(
            &calculator,
            &["Vanguard Brokerage", "Navy Federal"],
            &["3_rung_short", "barbell_strategy"],
            50_000.0,
            as_of,
        )
        .unwrap();

        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].ladder.institution, "Vanguard Brokerage");
        assert_eq!(grid[1].ladder.strategy.key, "barbell_strategy");
        assert_eq!(grid[2].ladder.institution, "Navy Federal");
        assert_relative_eq!(grid[0].years_to_maturity, 2.0);
        assert_relative_eq!(grid[3].years_to_maturity, 5.0);
    }
}
