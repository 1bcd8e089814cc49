//! Static rate and strategy catalog

mod institution;
mod strategy;

pub use institution::{Institution, InstitutionType, RateQuote, DEFAULT_FALLBACK_RATE};
pub use strategy::LadderStrategy;

use crate::error::{LadderError, Result};

/// Read-only table of institutions and ladder strategies
///
/// Iteration order is declaration order; ranking ties resolve on it.
#[derive(Debug, Clone)]
pub struct Catalog {
    institutions: Vec<Institution>,
    strategies: Vec<LadderStrategy>,
}

impl Catalog {
    /// Build a catalog from caller-supplied tables
    pub fn new(institutions: Vec<Institution>, strategies: Vec<LadderStrategy>) -> Self {
        Self { institutions, strategies }
    }

    /// Feb 2026 market rates with the four standard ladder layouts
    pub fn market_rates() -> Self {
        Self::new(institution::market_institutions(), strategy::standard_strategies())
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn strategies(&self) -> &[LadderStrategy] {
        &self.strategies
    }

    /// Look up an institution by exact name
    pub fn institution(&self, name: &str) -> Result<&Institution> {
        self.institutions
            .iter()
            .find(|i| i.name == name)
            .ok_or_else(|| LadderError::UnknownInstitution(name.to_string()))
    }

    /// Look up a strategy by key or display name
    pub fn strategy(&self, id: &str) -> Result<&LadderStrategy> {
        self.strategies
            .iter()
            .find(|s| s.matches(id))
            .ok_or_else(|| LadderError::UnknownStrategy(id.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::market_rates()
    }
}
