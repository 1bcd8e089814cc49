//! CD term labels ("6mo", "2yr") and their durations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LadderError;

/// Days per year used for maturity dates (leap years ignored)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// A CD term, parsed from a `<n>mo` or `<n>yr` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Term {
    Months(u32),
    Years(u32),
}

impl Term {
    /// Term whose rate backs any rung the institution does not quote
    pub const FALLBACK: Term = Term::Years(5);

    /// Duration in years (months / 12 for month terms)
    pub fn years(&self) -> f64 {
        match *self {
            Term::Months(n) => n as f64 / 12.0,
            Term::Years(n) => n as f64,
        }
    }

    /// Whole days until maturity, truncating 365 x years
    pub fn days(&self) -> i64 {
        (DAYS_PER_YEAR * self.years()) as i64
    }

    /// Column heading form, e.g. "3-mo" or "5-yr"
    pub fn heading(&self) -> String {
        match *self {
            Term::Months(n) => format!("{}-mo", n),
            Term::Years(n) => format!("{}-yr", n),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers work in table rows
        match *self {
            Term::Months(n) => f.pad(&format!("{}mo", n)),
            Term::Years(n) => f.pad(&format!("{}yr", n)),
        }
    }
}

impl FromStr for Term {
    type Err = LadderError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        let invalid = || LadderError::InvalidTerm(label.to_string());

        if let Some(n) = label.strip_suffix("mo") {
            n.parse().map(Term::Months).map_err(|_| invalid())
        } else if let Some(n) = label.strip_suffix("yr") {
            n.parse().map(Term::Years).map_err(|_| invalid())
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for Term {
    type Error = LadderError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.to_string()
    }
}
