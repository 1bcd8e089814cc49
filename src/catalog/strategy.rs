//! CD ladder strategies: how a principal is split across terms

use serde::{Deserialize, Serialize};

use crate::ladder::Term;

/// A named ladder layout
///
/// `rungs` and `allocation` are parallel: rung `i` receives
/// `allocation[i]` of the principal. A term may repeat to place several
/// tranches at the same maturity. Allocations are expected to sum to 1.0;
/// this is a property of the tables, not checked at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderStrategy {
    /// Short identifier, e.g. `3_rung_short`
    pub key: String,
    /// Display name, e.g. "3-Rung Short Ladder"
    pub name: String,
    pub description: String,
    pub rungs: Vec<Term>,
    pub allocation: Vec<f64>,
    pub best_for: String,
}

impl LadderStrategy {
    pub fn new(
        key: &str,
        name: &str,
        description: &str,
        rungs: &[Term],
        allocation: &[f64],
        best_for: &str,
    ) -> Self {
        debug_assert_eq!(
            rungs.len(),
            allocation.len(),
            "rungs/allocation length mismatch for {}",
            key
        );
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            rungs: rungs.to_vec(),
            allocation: allocation.to_vec(),
            best_for: best_for.to_string(),
        }
    }

    /// Whether `id` names this strategy by key or display name
    pub fn matches(&self, id: &str) -> bool {
        self.key == id || self.name == id
    }

    /// (term, fraction) pairs in declaration order
    pub fn tranches(&self) -> impl Iterator<Item = (Term, f64)> + '_ {
        self.rungs.iter().copied().zip(self.allocation.iter().copied())
    }

    pub fn rung_count(&self) -> usize {
        self.rungs.len()
    }

    pub fn allocation_total(&self) -> f64 {
        self.allocation.iter().sum()
    }

    /// Longest rung in years, i.e. when the whole ladder has matured
    pub fn longest_term_years(&self) -> f64 {
        self.rungs.iter().map(Term::years).fold(0.0, f64::max)
    }
}

pub(crate) fn standard_strategies() -> Vec<LadderStrategy> {
    use Term::{Months, Years};

    vec![
        LadderStrategy::new(
            "3_rung_short",
            "3-Rung Short Ladder",
            "Liquidity every 6-8 months",
            &[Months(6), Months(18), Years(2)],
            &[0.33, 0.33, 0.34],
            "Need access to funds regularly, rates improving",
        ),
        LadderStrategy::new(
            "5_rung_classic",
            "5-Rung Classic Ladder",
            "Liquidity every year for 5 years",
            &[Years(1), Years(2), Years(3), Years(3), Years(5)],
            &[0.20, 0.20, 0.20, 0.20, 0.20],
            "Balanced access + compound growth",
        ),
        LadderStrategy::new(
            "5_rung_staggered",
            "5-Rung Staggered Ladder",
            "Unequal allocation to longer terms",
            &[Years(1), Years(2), Years(3), Years(3), Years(5)],
            // Pyramid: more in longer terms
            &[0.10, 0.15, 0.20, 0.25, 0.30],
            "Want higher yields, less frequent access needed",
        ),
        LadderStrategy::new(
            "barbell_strategy",
            "Barbell Strategy",
            "Short + long terms, skip middle",
            &[Months(6), Months(6), Years(5), Years(5)],
            &[0.25, 0.25, 0.25, 0.25],
            "Protect against rate changes, flexibility + yield",
        ),
    ]
}
