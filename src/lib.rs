//! CD Ladder Simulator - CD rate comparison and ladder strategy analysis
//!
//! This library provides:
//! - A static catalog of institutions, published CD rates and ladder layouts
//! - Ladder calculation with simple interest and maturity scheduling
//! - Per-term winners, composite ranking and home-institution rate differentials
//! - Fixed-width text and JSON reports

pub mod catalog;
pub mod comparison;
pub mod error;
pub mod ladder;
pub mod report;

// Re-export commonly used types
pub use catalog::{Catalog, Institution, InstitutionType, LadderStrategy};
pub use error::{LadderError, Result};
pub use ladder::{calculate_ladder, LadderCalculator, LadderResult, LadderRung, Term};
pub use report::{ReportOptions, ReportRenderer};
