//! Institutions and their published CD rates

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::ladder::Term;

/// Rate used when an institution quotes neither the requested term nor 5yr
pub const DEFAULT_FALLBACK_RATE: f64 = 5.0;

/// Category of deposit-taking institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionType {
    CreditUnion,
    OnlineBank,
    Brokerage,
}

impl fmt::Display for InstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstitutionType::CreditUnion => "Credit Union",
            InstitutionType::OnlineBank => "Online Bank",
            InstitutionType::Brokerage => "Brokerage",
        };
        f.pad(label)
    }
}

/// A single published annual percentage rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub term: Term,
    /// Annual rate in percent (5.15 = 5.15%)
    pub apr: f64,
}

/// A financial institution offering CDs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    pub institution_type: InstitutionType,
    /// Minimum opening deposit in dollars
    pub min_deposit: f64,
    /// Published rates in publication order
    rates: Vec<RateQuote>,
    pub features: Vec<String>,
    pub best_for: String,
}

impl Institution {
    pub fn new(
        name: &str,
        institution_type: InstitutionType,
        min_deposit: f64,
        rates: &[(Term, f64)],
        features: &[&str],
        best_for: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            institution_type,
            min_deposit,
            rates: rates
                .iter()
                .map(|&(term, apr)| RateQuote { term, apr })
                .collect(),
            features: features.iter().map(|f| f.to_string()).collect(),
            best_for: best_for.to_string(),
        }
    }

    /// All published rates
    pub fn rates(&self) -> &[RateQuote] {
        &self.rates
    }

    /// Published rate for a term, if quoted
    pub fn rate(&self, term: Term) -> Option<f64> {
        self.rates.iter().find(|q| q.term == term).map(|q| q.apr)
    }

    /// Rate applied to a ladder rung.
    ///
    /// Unquoted terms fall back to the 5yr rate, then to
    /// [`DEFAULT_FALLBACK_RATE`]. Never fails.
    pub fn rate_for(&self, term: Term) -> f64 {
        if let Some(apr) = self.rate(term) {
            return apr;
        }

        let apr = self.rate(Term::FALLBACK).unwrap_or(DEFAULT_FALLBACK_RATE);
        warn!(
            "{} has no {} rate, using {:.2}% fallback",
            self.name, term, apr
        );
        apr
    }

    /// Sum of every published rate, used as a crude overall score
    pub fn composite_score(&self) -> f64 {
        self.rates.iter().map(|q| q.apr).sum()
    }
}

/// Market rates as of Feb 2026
pub(crate) fn market_institutions() -> Vec<Institution> {
    use Term::{Months, Years};

    vec![
        Institution::new(
            "Navy Federal",
            InstitutionType::CreditUnion,
            500.0,
            &[
                (Months(3), 4.75),
                (Months(6), 4.85),
                (Years(1), 5.15),
                (Months(18), 5.25),
                (Years(2), 5.35),
                (Years(3), 5.40),
                (Years(4), 5.42),
                (Years(5), 5.45),
            ],
            &["No penalty CD available", "Federally insured (NCUA)", "Military members only"],
            "Military-exclusive rates, good ladder building",
        ),
        Institution::new(
            "Ally Bank",
            InstitutionType::OnlineBank,
            500.0,
            &[
                (Months(3), 4.60),
                (Months(6), 4.75),
                (Years(1), 5.00),
                (Months(18), 5.10),
                (Years(2), 5.15),
                (Years(3), 5.20),
                (Years(4), 5.22),
                (Years(5), 5.25),
            ],
            &["High-yield savings (4.50%)", "No fees", "FDIC insured"],
            "Easy online access, no penalties",
        ),
        Institution::new(
            "Marcus by Goldman",
            InstitutionType::OnlineBank,
            500.0,
            &[
                (Months(3), 4.55),
                (Months(6), 4.70),
                (Years(1), 4.95),
                (Months(18), 5.05),
                (Years(2), 5.10),
                (Years(3), 5.15),
                (Years(4), 5.17),
                (Years(5), 5.20),
            ],
            &["No fees", "Flexible terms", "FDIC insured", "Good customer service"],
            "Premium experience, reliable rates",
        ),
        Institution::new(
            "Pentagon Federal",
            InstitutionType::CreditUnion,
            500.0,
            &[
                (Months(3), 4.80),
                (Months(6), 4.90),
                (Years(1), 5.20),
                (Months(18), 5.30),
                (Years(2), 5.40),
                (Years(3), 5.45),
                (Years(4), 5.47),
                (Years(5), 5.50),
            ],
            &["Military/DoD employees + families", "NCUA insured", "Slightly higher rates"],
            "DoD-connected members, competitive rates",
        ),
        Institution::new(
            "Connexus Credit Union",
            InstitutionType::CreditUnion,
            500.0,
            &[
                (Months(3), 4.70),
                (Months(6), 4.85),
                (Years(1), 5.10),
                (Months(18), 5.20),
                (Years(2), 5.30),
                (Years(3), 5.35),
                (Years(4), 5.37),
                (Years(5), 5.40),
            ],
            &["Open to everyone", "NCUA insured", "Very competitive"],
            "Non-military members, high rates",
        ),
        Institution::new(
            "Vanguard Brokerage",
            InstitutionType::Brokerage,
            2500.0,
            &[
                (Months(3), 5.05),
                (Months(6), 5.15),
                (Years(1), 5.30),
                (Months(18), 5.35),
                (Years(2), 5.40),
                (Years(3), 5.42),
                (Years(4), 5.43),
                (Years(5), 5.45),
            ],
            &["Bank partner (FDIC)", "Treasury alternative", "Investment platform integration"],
            "Investors wanting CD + brokerage access",
        ),
    ]
}
