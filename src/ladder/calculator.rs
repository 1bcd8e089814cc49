//! Ladder calculator: splits principal across rungs and accrues simple interest

use chrono::{Duration, Local, NaiveDateTime};
use log::{debug, warn};

use crate::catalog::{Catalog, Institution, LadderStrategy};
use crate::error::{LadderError, Result};
use super::result::{LadderResult, LadderRung};

/// Runs ladder calculations against a catalog
#[derive(Debug, Clone, Copy)]
pub struct LadderCalculator<'a> {
    catalog: &'a Catalog,
}

impl<'a> LadderCalculator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Build a ladder with maturities measured from now
    pub fn calculate(
        &self,
        institution: &str,
        strategy: &str,
        principal: f64,
    ) -> Result<LadderResult<'a>> {
        self.calculate_at(institution, strategy, principal, Local::now().naive_local())
    }

    /// Build a ladder with maturities measured from `as_of`
    pub fn calculate_at(
        &self,
        institution: &str,
        strategy: &str,
        principal: f64,
        as_of: NaiveDateTime,
    ) -> Result<LadderResult<'a>> {
        let inst = self.catalog.institution(institution)?;
        let strat = self.catalog.strategy(strategy)?;
        build_ladder(inst, strat, principal, as_of)
    }
}

/// Ladder for `principal` at the institution's rates, maturities from now
pub fn calculate_ladder<'a>(
    catalog: &'a Catalog,
    institution: &str,
    strategy: &str,
    principal: f64,
) -> Result<LadderResult<'a>> {
    LadderCalculator::new(catalog).calculate(institution, strategy, principal)
}

/// Core calculation over resolved catalog entries.
///
/// Interest is simple: amount x rate/100 x years. Maturity is `as_of` plus
/// 365 days per year of term. Nothing is rounded here. Fails only when a
/// maturity date falls outside chrono's calendar.
pub fn build_ladder<'a>(
    institution: &Institution,
    strategy: &'a LadderStrategy,
    principal: f64,
    as_of: NaiveDateTime,
) -> Result<LadderResult<'a>> {
    if principal <= 0.0 {
        warn!("Non-positive principal {:.2}, ladder will be degenerate", principal);
    }

    let mut result = LadderResult::new(&institution.name, strategy, principal);

    for (term, fraction) in strategy.tranches() {
        let amount = principal * fraction;
        let rate = institution.rate_for(term);
        let years = term.years();

        let interest = amount * (rate / 100.0) * years;
        let maturity_value = amount + interest;
        let maturity_date = Duration::try_days(term.days())
            .and_then(|d| as_of.checked_add_signed(d))
            .ok_or_else(|| LadderError::DateOutOfRange {
                term: term.to_string(),
            })?;

        result.add_rung(LadderRung {
            term,
            amount,
            rate,
            interest,
            maturity_value,
            maturity_date,
        });
    }

    debug!(
        "{} / {}: {} rungs, interest {:.2}, value {:.2}",
        institution.name,
        strategy.name,
        result.rungs.len(),
        result.total_interest,
        result.total_value
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InstitutionType;
    use crate::ladder::Term;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn as_of() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_navy_federal_short_ladder() {
        let catalog = Catalog::market_rates();
        let calc = LadderCalculator::new(&catalog);
        let ladder = calc
            .calculate_at("Navy Federal", "3-Rung Short Ladder", 50_000.0, as_of())
            .unwrap();

        assert_eq!(ladder.rungs.len(), 3);
        let amounts: Vec<f64> = ladder.rungs.iter().map(|r| r.amount).collect();
        assert_relative_eq!(amounts[0], 16_500.0, epsilon = 1e-9);
        assert_relative_eq!(amounts[1], 16_500.0, epsilon = 1e-9);
        assert_relative_eq!(amounts[2], 17_000.0, epsilon = 1e-9);

        assert_relative_eq!(ladder.rungs[0].rate, 4.85);
        assert_relative_eq!(ladder.rungs[1].rate, 5.25);
        assert_relative_eq!(ladder.rungs[2].rate, 5.35);

        assert_relative_eq!(ladder.rungs[0].interest, 400.125, epsilon = 1e-6);
        assert_relative_eq!(ladder.rungs[1].interest, 1_299.375, epsilon = 1e-6);
        assert_relative_eq!(ladder.rungs[2].interest, 1_819.0, epsilon = 1e-6);

        assert_relative_eq!(ladder.total_interest, 3_518.5, epsilon = 1e-6);
        assert_relative_eq!(ladder.total_value, 53_518.5, epsilon = 1e-6);
    }

    #[test]
    fn test_totals_are_exact() {
        let catalog = Catalog::market_rates();
        let calc = LadderCalculator::new(&catalog);
        for inst in catalog.institutions() {
            for strategy in catalog.strategies() {
                for principal in [0.0, 1.0, 12_345.67, 50_000.0, 1_000_000.0] {
                    let ladder = calc
                        .calculate_at(&inst.name, &strategy.key, principal, as_of())
                        .unwrap();
                    assert_eq!(ladder.total_value, ladder.total_invested + ladder.total_interest);
                    assert_eq!(ladder.rungs.len(), strategy.rung_count());
                    assert_eq!(ladder.maturity_schedule.len(), strategy.rung_count());
                }
            }
        }
    }

    #[test]
    fn test_repeatable_at_same_instant() {
        let catalog = Catalog::market_rates();
        let calc = LadderCalculator::new(&catalog);
        let a = calc.calculate_at("Ally Bank", "5_rung_staggered", 75_000.0, as_of()).unwrap();
        let b = calc.calculate_at("Ally Bank", "5_rung_staggered", 75_000.0, as_of()).unwrap();
        assert_eq!(a.rungs, b.rungs);
        assert_eq!(a.total_interest, b.total_interest);
    }

    #[test]
    fn test_maturity_dates_and_schedule() {
        let catalog = Catalog::market_rates();
        let ladder = LadderCalculator::new(&catalog)
            .calculate_at("Navy Federal", "3_rung_short", 50_000.0, as_of())
            .unwrap();

        // 6mo = 182 days, 18mo = 547 days, 2yr = 730 days
        assert_eq!(ladder.maturity_schedule[0].maturity_date, "Aug 16, 2026");
        assert_eq!(ladder.maturity_schedule[1].maturity_date, "Aug 16, 2027");
        assert_eq!(ladder.maturity_schedule[2].maturity_date, "Feb 15, 2028");

        let indexes: Vec<usize> = ladder.maturity_schedule.iter().map(|e| e.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert_eq!(ladder.maturity_schedule[1].term, Term::Months(18));
        assert_relative_eq!(
            ladder.maturity_schedule[2].maturity_value,
            17_000.0 + 1_819.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_schedule_is_rung_order_not_chronological() {
        let strategy = LadderStrategy::new(
            "long_first",
            "Long First",
            "",
            &[Term::Years(2), Term::Months(6)],
            &[0.5, 0.5],
            "",
        );
        let catalog = Catalog::new(Catalog::market_rates().institutions().to_vec(), vec![strategy]);
        let ladder = LadderCalculator::new(&catalog)
            .calculate_at("Ally Bank", "long_first", 10_000.0, as_of())
            .unwrap();

        assert_eq!(ladder.maturity_schedule[0].term, Term::Years(2));
        let sorted = ladder.chronological_schedule();
        assert_eq!(sorted[0].term, Term::Months(6));
        assert_eq!(sorted[0].index, 2);
    }

    #[test]
    fn test_unquoted_term_uses_five_year_rate() {
        let institution = Institution::new(
            "Sparse CU",
            InstitutionType::CreditUnion,
            500.0,
            &[(Term::Years(1), 5.0), (Term::Years(5), 5.6)],
            &[],
            "",
        );
        let strategy = LadderStrategy::new(
            "odd",
            "Odd Terms",
            "",
            &[Term::Years(1), Term::Years(7)],
            &[0.5, 0.5],
            "",
        );
        let catalog = Catalog::new(vec![institution], vec![strategy]);
        let ladder = LadderCalculator::new(&catalog)
            .calculate_at("Sparse CU", "odd", 10_000.0, as_of())
            .unwrap();

        assert_relative_eq!(ladder.rungs[1].rate, 5.6);
        assert_relative_eq!(ladder.rungs[1].interest, 5_000.0 * 0.056 * 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_far_maturity_is_an_error() {
        let strategy = LadderStrategy::new(
            "forever",
            "Forever Ladder",
            "",
            &[Term::Years(1), "300000yr".parse().unwrap()],
            &[0.5, 0.5],
            "",
        );
        let catalog = Catalog::market_rates();
        let inst = catalog.institution("Navy Federal").unwrap();

        let err = build_ladder(inst, &strategy, 1_000.0, as_of()).unwrap_err();
        assert!(matches!(err, LadderError::DateOutOfRange { term } if term == "300000yr"));
    }

    #[test]
    fn test_unknown_keys_fail() {
        let catalog = Catalog::market_rates();
        let calc = LadderCalculator::new(&catalog);
        assert!(matches!(
            calc.calculate("Bank of Atlantis", "3_rung_short", 50_000.0),
            Err(LadderError::UnknownInstitution(_))
        ));
        assert!(matches!(
            calc.calculate("Navy Federal", "ten_rung", 50_000.0),
            Err(LadderError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_non_positive_principal_is_degenerate() {
        let catalog = Catalog::market_rates();
        let ladder =
            calculate_ladder(&catalog, "Marcus by Goldman", "barbell_strategy", 0.0).unwrap();
        assert_eq!(ladder.total_interest, 0.0);
        assert_eq!(ladder.total_value, 0.0);

        let negative =
            calculate_ladder(&catalog, "Marcus by Goldman", "barbell_strategy", -1_000.0).unwrap();
        assert!(negative.total_interest < 0.0);
        assert_eq!(negative.total_value, negative.total_invested + negative.total_interest);
    }
}
