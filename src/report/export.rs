//! CSV export of maturity schedules for every institution and strategy

use std::io::Write;

use chrono::NaiveDateTime;
use log::info;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ladder::LadderCalculator;

/// One rung of one ladder
#[derive(Debug, Serialize)]
struct ScheduleRow<'a> {
    #[serde(rename = "Institution")]
    institution: &'a str,
    #[serde(rename = "Strategy")]
    strategy: &'a str,
    #[serde(rename = "Rung")]
    rung: usize,
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "RatePct")]
    rate: String,
    #[serde(rename = "Interest")]
    interest: String,
    #[serde(rename = "MaturityDate")]
    maturity_date: String,
    #[serde(rename = "MaturityValue")]
    maturity_value: String,
}

/// Write every rung of every institution x strategy ladder.
///
/// Amounts are fixed to two decimals, dates are ISO `YYYY-MM-DD`.
/// Returns the number of rows written.
pub fn write_schedules<W: Write>(
    catalog: &Catalog,
    principal: f64,
    as_of: NaiveDateTime,
    writer: &mut csv::Writer<W>,
) -> Result<usize> {
    let calculator = LadderCalculator::new(catalog);
    let mut rows = 0;

    for inst in catalog.institutions() {
        for strategy in catalog.strategies() {
            let ladder = calculator.calculate_at(&inst.name, &strategy.key, principal, as_of)?;

            for (rung, entry) in ladder.rungs.iter().zip(&ladder.maturity_schedule) {
                writer.serialize(ScheduleRow {
                    institution: &inst.name,
                    strategy: &strategy.name,
                    rung: entry.index,
                    term: entry.term.to_string(),
                    amount: format!("{:.2}", entry.amount),
                    rate: format!("{:.2}", rung.rate),
                    interest: format!("{:.2}", entry.interest),
                    maturity_date: rung.maturity_date.format("%Y-%m-%d").to_string(),
                    maturity_value: format!("{:.2}", entry.maturity_value),
                })?;
                rows += 1;
            }
        }
    }

    writer.flush()?;
    info!("Wrote {} schedule rows", rows);
    Ok(rows)
}
