//! Fixed-width text report
//!
//! Sections are written as soon as they are computed. If a later section
//! fails, whatever was already written stays on the output.

use std::io::Write;

use chrono::NaiveDateTime;
use log::info;

use crate::catalog::Catalog;
use crate::comparison::{
    best_rate_by_term, compare_strategies, rank_institutions, rate_differentials, RateStanding,
};
use crate::error::Result;
use crate::ladder::LadderCalculator;
use super::format::{format_amount, format_money, format_pct, format_pct_diff, rule};
use super::snapshot::ReportSnapshot;
use super::{ReportOptions, COMPARISON_STRATEGIES, GRID_TERMS, HOME_COMPARISON_TERMS};

/// Writes the full CD analysis to any writer
pub struct ReportRenderer<'a, W: Write> {
    catalog: &'a Catalog,
    calculator: LadderCalculator<'a>,
    options: ReportOptions,
    /// Report clock; also the start date for every ladder
    generated_at: NaiveDateTime,
    out: W,
}

impl<'a, W: Write> ReportRenderer<'a, W> {
    pub fn new(
        catalog: &'a Catalog,
        options: ReportOptions,
        generated_at: NaiveDateTime,
        out: W,
    ) -> Self {
        Self {
            catalog,
            calculator: LadderCalculator::new(catalog),
            options,
            generated_at,
            out,
        }
    }

    /// Give back the writer, e.g. to inspect a buffer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Every section, in report order
    pub fn generate(&mut self) -> Result<()> {
        info!(
            "Generating CD report for ${:.2}, home institution {}",
            self.options.principal, self.options.home_institution
        );

        self.header()?;
        self.rate_comparison()?;
        self.institution_details()?;
        self.ladder_comparison()?;
        self.home_institution_analysis()?;
        self.recommendations()?;
        self.footer()?;

        self.out.flush()?;
        info!("Report complete");
        Ok(())
    }

    /// Same data as the text report, as pretty-printed JSON
    pub fn write_json(&mut self) -> Result<()> {
        let snapshot = ReportSnapshot::build(self.catalog, &self.options, self.generated_at)?;
        serde_json::to_writer_pretty(&mut self.out, &snapshot)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "\n{}", rule('='))?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}\n", rule('='))?;
        Ok(())
    }

    pub fn header(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", rule('='))?;
        writeln!(self.out, "📊 CD LADDER SIMULATOR & COMPETITIVE ANALYSIS")?;
        writeln!(
            self.out,
            "{} vs. Top Competitors | Feb 2026 Market Rates",
            self.options.home_institution
        )?;
        writeln!(self.out, "Investment Principal: {}", format_money(self.options.principal))?;
        writeln!(
            self.out,
            "Generated: {}",
            self.generated_at.format("%A, %B %d, %Y — %I:%M %p")
        )?;
        writeln!(self.out, "{}", rule('='))?;
        Ok(())
    }

    /// Rate grid for every institution, then the best rate per term
    pub fn rate_comparison(&mut self) -> Result<()> {
        self.banner("🏦 CD RATE COMPARISON — All Institutions (Feb 2026)")?;

        let mut heading = format!("{:<25} {:<18}", "Institution", "Type");
        for term in GRID_TERMS {
            heading.push_str(&format!(" {:<10}", term.heading()));
        }
        writeln!(self.out, "{}", heading)?;
        writeln!(self.out, "{}", rule('-'))?;

        let catalog = self.catalog;
        for inst in catalog.institutions() {
            let mut row = format!("{:<25} {:<18}", inst.name, inst.institution_type);
            for term in GRID_TERMS {
                let cell = inst.rate(term).map(format_pct).unwrap_or_else(|| "n/a".to_string());
                row.push_str(&format!(" {:<10}", cell));
            }
            writeln!(self.out, "{}", row)?;
        }

        writeln!(self.out, "\n{:<25}", "WINNER BY TERM")?;
        writeln!(self.out, "{}", rule('-'))?;

        for winner in best_rate_by_term(catalog, &GRID_TERMS) {
            writeln!(
                self.out,
                "{:<25} {:<25} {}",
                winner.term,
                winner.institution,
                format_pct(winner.rate)
            )?;
        }
        Ok(())
    }

    /// One card per institution: type, minimum, suitability, features
    pub fn institution_details(&mut self) -> Result<()> {
        self.banner("📋 INSTITUTION DETAILS")?;

        let catalog = self.catalog;
        for inst in catalog.institutions() {
            writeln!(self.out, "\n{}", inst.name)?;
            writeln!(self.out, "{}", rule('-'))?;
            writeln!(
                self.out,
                "Type: {} | Min Deposit: ${} | Best For: {}",
                inst.institution_type,
                format_amount(inst.min_deposit, 0),
                inst.best_for
            )?;
            writeln!(self.out, "\nFeatures:")?;
            for feature in &inst.features {
                writeln!(self.out, "  • {}", feature)?;
            }
        }
        Ok(())
    }

    /// Standard strategies run at the top-ranked institutions
    pub fn ladder_comparison(&mut self) -> Result<()> {
        let principal = self.options.principal;
        self.banner(&format!(
            "💰 CD LADDER COMPARISON — ${} INVESTMENT",
            format_amount(principal, 0)
        ))?;

        let top: Vec<&str> = rank_institutions(self.catalog, self.options.top_n)
            .into_iter()
            .map(|r| r.institution)
            .collect();
        let grid = compare_strategies(
            &self.calculator,
            &top,
            &COMPARISON_STRATEGIES,
            principal,
            self.generated_at,
        )?;

        writeln!(
            self.out,
            "{:<25} {:<30} {:<20} {:<20} {:<15}",
            "Institution", "Strategy", "Total Interest", "Final Value", "Years to Maturity"
        )?;
        writeln!(self.out, "{}", rule('-'))?;

        for cell in &grid {
            writeln!(
                self.out,
                "{:<25} {:<30} ${:>12}    ${:>12}    {:.1} years",
                cell.ladder.institution,
                cell.ladder.strategy.name,
                format_amount(cell.ladder.total_interest, 2),
                format_amount(cell.ladder.total_value, 2),
                cell.years_to_maturity
            )?;
        }
        Ok(())
    }

    /// Rung-by-rung table and payout schedule for one ladder
    pub fn detailed_ladder(&mut self, institution: &str, strategy: &str) -> Result<()> {
        let principal = self.options.principal;
        let ladder = self
            .calculator
            .calculate_at(institution, strategy, principal, self.generated_at)?;
        let strat = ladder.strategy;

        writeln!(self.out, "\n{}", rule('='))?;
        writeln!(self.out, "{} — {}", strat.name, institution)?;
        writeln!(self.out, "{}", strat.description)?;
        writeln!(self.out, "{}\n", rule('='))?;

        writeln!(
            self.out,
            "Investment: {} | Best For: {}\n",
            format_money(principal),
            strat.best_for
        )?;

        writeln!(self.out, "LADDER RUNGS:")?;
        writeln!(
            self.out,
            "{:<8} {:<10} {:<15} {:<10} {:<15} {:<20} {:<15}",
            "Rung", "Term", "Amount", "Rate", "Interest", "Matures", "Maturity Value"
        )?;
        writeln!(self.out, "{}", rule('-'))?;

        for (i, rung) in ladder.rungs.iter().enumerate() {
            writeln!(
                self.out,
                "{:<8} {:<10} ${:>10}   {:<9} ${:>10}   {:<20} ${:>10}",
                i + 1,
                rung.term,
                format_amount(rung.amount, 2),
                format_pct(rung.rate),
                format_amount(rung.interest, 2),
                rung.maturity_date_label(),
                format_amount(rung.maturity_value, 2)
            )?;
        }

        writeln!(self.out, "{}", rule('-'))?;
        writeln!(
            self.out,
            "{:<8} {:<10} ${:>10}   {:<9} ${:>10}   {:<20} ${:>10}",
            "TOTAL",
            "",
            format_amount(ladder.total_invested, 2),
            "",
            format_amount(ladder.total_interest, 2),
            "",
            format_amount(ladder.total_value, 2)
        )?;

        writeln!(self.out, "\n\nMATURITY SCHEDULE (When you get access to funds):")?;
        for entry in &ladder.maturity_schedule {
            writeln!(
                self.out,
                "  {}. {:<20} → ${:>12} (Interest: ${:>8})",
                entry.index,
                entry.maturity_date,
                format_amount(entry.maturity_value, 2),
                format_amount(entry.interest, 2)
            )?;
        }
        Ok(())
    }

    /// Home institution against each competitor, then its recommended ladder
    pub fn home_institution_analysis(&mut self) -> Result<()> {
        let home = self.options.home_institution.clone();
        let recommended = self.options.recommended_strategy.clone();

        self.banner(&format!("⚓ {} CD LADDER — Deep Dive", home.to_uppercase()))?;

        let differentials = rate_differentials(self.catalog, &home, &HOME_COMPARISON_TERMS)?;

        writeln!(self.out, "{} Rate Advantages:", home)?;
        writeln!(self.out, "{}\n", rule('-'))?;

        for diff in &differentials {
            writeln!(self.out, "\n{}:", diff.term)?;
            writeln!(self.out, "  {}: {}", home, format_pct(diff.home_rate))?;

            for competitor in &diff.competitors {
                let marker = match competitor.standing {
                    RateStanding::Advantage => "✅",
                    RateStanding::Disadvantage => "❌",
                    RateStanding::Parity => "=",
                };
                writeln!(
                    self.out,
                    "  {:<25} {} {} ({})",
                    competitor.institution,
                    format_pct(competitor.rate),
                    marker,
                    format_pct_diff(competitor.difference)
                )?;
            }
        }

        let strategy_name = self.catalog.strategy(&recommended)?.name.clone();
        writeln!(self.out, "\n\n{}", rule('='))?;
        writeln!(
            self.out,
            "RECOMMENDED {} LADDER ({})",
            home.to_uppercase(),
            strategy_name
        )?;
        writeln!(self.out, "{}", rule('='))?;

        self.detailed_ladder(&home, &recommended)
    }

    pub fn recommendations(&mut self) -> Result<()> {
        writeln!(self.out)?;
        self.banner("💡 RECOMMENDATIONS")?;

        let text = "\
**If you're military-eligible:**
  → Navy Federal: Competitive rates + military-exclusive benefits
  → Pentagon Federal: Slightly higher rates if DoD-connected

**If you're not military:**
  → Connexus: Highest rates overall, open to anyone
  → Ally: Great online experience + no fees

**Best ladder strategy:**
  → 5-Rung Classic: Balanced, one maturity per year
  → 5-Rung Staggered: Want higher yield, less frequent access

**Key advantages of CD laddering:**
  ✓ Automatic access to funds every X months
  ✓ Capture higher rates on longer terms
  ✓ Flexibility to react to rate changes
  ✓ Easier than managing single large CD
  ✓ Protect against early withdrawal penalties
";
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn footer(&mut self) -> Result<()> {
        writeln!(self.out, "{}", rule('='))?;
        writeln!(
            self.out,
            "✅ Report generated {}",
            self.generated_at.format("%I:%M %p")
        )?;
        writeln!(self.out, "{}\n", rule('='))?;
        Ok(())
    }
}
