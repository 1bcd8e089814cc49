//! Output structures for ladder calculations

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::catalog::LadderStrategy;
use super::term::Term;

/// strftime pattern for maturity dates ("Mar 05, 2026")
pub const MATURITY_DATE_FORMAT: &str = "%b %d, %Y";

/// One CD in the ladder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderRung {
    pub term: Term,
    /// Principal placed in this CD
    pub amount: f64,
    /// Annual rate in percent
    pub rate: f64,
    /// Simple interest over the full term
    pub interest: f64,
    pub maturity_value: f64,
    pub maturity_date: NaiveDateTime,
}

impl LadderRung {
    pub fn maturity_date_label(&self) -> String {
        self.maturity_date.format(MATURITY_DATE_FORMAT).to_string()
    }
}

/// When each rung pays out, in rung order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityEntry {
    /// 1-based rung number
    pub index: usize,
    pub term: Term,
    pub maturity_date: String,
    pub amount: f64,
    pub interest: f64,
    pub maturity_value: f64,
}

/// Complete ladder for one institution and strategy
#[derive(Debug, Clone, Serialize)]
pub struct LadderResult<'a> {
    pub institution: String,
    pub strategy: &'a LadderStrategy,
    pub rungs: Vec<LadderRung>,
    pub total_invested: f64,
    pub total_interest: f64,
    pub total_value: f64,
    /// Declaration order, not chronological
    pub maturity_schedule: Vec<MaturityEntry>,
}

impl<'a> LadderResult<'a> {
    pub fn new(institution: &str, strategy: &'a LadderStrategy, principal: f64) -> Self {
        Self {
            institution: institution.to_string(),
            strategy,
            rungs: Vec::with_capacity(strategy.rung_count()),
            total_invested: principal,
            total_interest: 0.0,
            total_value: principal,
            maturity_schedule: Vec::with_capacity(strategy.rung_count()),
        }
    }

    /// Append a rung and roll it into the totals and schedule
    pub fn add_rung(&mut self, rung: LadderRung) {
        self.maturity_schedule.push(MaturityEntry {
            index: self.rungs.len() + 1,
            term: rung.term,
            maturity_date: rung.maturity_date_label(),
            amount: rung.amount,
            interest: rung.interest,
            maturity_value: rung.maturity_value,
        });

        self.total_interest += rung.interest;
        self.total_value = self.total_invested + self.total_interest;
        self.rungs.push(rung);
    }

    /// Schedule sorted by maturity date; ties keep rung order
    pub fn chronological_schedule(&self) -> Vec<&MaturityEntry> {
        let mut entries: Vec<(&LadderRung, &MaturityEntry)> =
            self.rungs.iter().zip(&self.maturity_schedule).collect();
        entries.sort_by_key(|(rung, _)| rung.maturity_date);
        entries.into_iter().map(|(_, entry)| entry).collect()
    }
}
